#![allow(dead_code)]

use std::{fs, path::Path};

use news_radar::{Analyzer, Article};

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, key, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn article(title: &str, description: &str) -> Article {
    Article::new(title, description, format!("https://news.example/{}", slug(title)))
}

pub fn article_with_content(title: &str, description: &str, content: &str) -> Article {
    article(title, description).with_content(content)
}

pub fn analyzer() -> Analyzer {
    Analyzer::default()
}

fn slug(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}
