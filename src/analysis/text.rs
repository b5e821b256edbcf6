use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::Lexicon;

use super::model::Article;

/// One to five uppercase letters bounded by word boundaries.
static TICKER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{1,5}\b").expect("ticker token pattern compiles"));

/// Combined article text, computed once per run and shared by every scorer.
pub(crate) struct ArticleText {
    pub(crate) combined: String,
    pub(crate) lower: String,
}

impl ArticleText {
    pub(crate) fn new(article: &Article) -> Self {
        let combined = article.combined_text();
        let lower = combined.to_lowercase();
        Self { combined, lower }
    }

    /// Symbol tokens that are valid tickers and not excluded acronyms, in text order.
    /// Repeats are kept.
    pub(crate) fn ticker_tokens<'a>(&'a self, lexicon: &'a Lexicon) -> impl Iterator<Item = &'a str> {
        TICKER_TOKEN
            .find_iter(&self.combined)
            .map(|m| m.as_str())
            .filter(|tok| lexicon.accepts_token(tok))
    }

    /// True if this text refers to `symbol` by token or by company name.
    pub(crate) fn refers_to(&self, lexicon: &Lexicon, symbol: &str) -> bool {
        self.ticker_tokens(lexicon).any(|tok| tok == symbol)
            || lexicon
                .company_needle(symbol)
                .is_some_and(|needle| self.lower.contains(needle))
    }
}

/// First `max_chars` characters of `text`.
pub(crate) fn snippet(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
