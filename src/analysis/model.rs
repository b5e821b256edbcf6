use chrono::NaiveDate;
use serde::Serialize;

use crate::sentiment::Sentiment;

use super::ranking::Selection;

/// A news article as handed over by the news-fetch collaborator.
///
/// Text fields may be empty. `content` and `published_at` are optional and
/// scan as empty strings when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub description: String,
    pub content: Option<String>,
    pub url: String,
    pub published_at: Option<String>,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_published_at(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = Some(published_at.into());
        self
    }

    /// `title`, `description` and `content` joined by spaces; the text every scorer scans.
    pub fn combined_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description,
            self.content.as_deref().unwrap_or_default()
        )
    }

    /// The description, or the content when the description is empty.
    pub fn summary_text(&self) -> &str {
        if self.description.is_empty() {
            self.content.as_deref().unwrap_or_default()
        } else {
            &self.description
        }
    }
}

/// Body of an analysis request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub news: Vec<Article>,
    /// Free-text topic; drives the fallback path and rationale wording.
    pub keywords: String,
    /// Window the articles were searched in. Carried for callers; never filters articles.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl AnalyzeRequest {
    pub fn new(news: Vec<Article>, keywords: impl Into<String>) -> Self {
        Self {
            news,
            keywords: keywords.into(),
            start_date: None,
            end_date: None,
        }
    }
}

/// Per-ticker accumulator for one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerScore {
    pub symbol: String,
    /// Weighted sum of all contributions; never negative.
    pub raw_score: f64,
    pub direct_mention: bool,
    pub company_name_mention: bool,
    /// Sum of industry keyword hits attributed to this ticker.
    pub industry_relevance: f64,
    /// Number of symbol tokens matched across all articles.
    pub direct_hits: u32,
    /// Number of articles naming the company.
    pub company_hits: u32,
    /// Titles of articles that contributed, deduplicated, first-seen order.
    pub cited_article_titles: Vec<String>,
}

impl TickerScore {
    pub(crate) fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            raw_score: 0.0,
            direct_mention: false,
            company_name_mention: false,
            industry_relevance: 0.0,
            direct_hits: 0,
            company_hits: 0,
            cited_article_titles: Vec::new(),
        }
    }

    pub(crate) fn seeded(symbol: impl Into<String>, raw_score: f64, industry_relevance: f64) -> Self {
        Self {
            raw_score,
            industry_relevance,
            ..Self::new(symbol)
        }
    }

    pub(crate) fn cite(&mut self, title: &str) {
        if !title.is_empty() && !self.cited_article_titles.iter().any(|t| t == title) {
            self.cited_article_titles.push(title.to_string());
        }
    }

    /// Whether this ticker carries an article-derived signal strong enough to rank on.
    pub fn is_relevant(&self, industry_threshold: f64) -> bool {
        self.direct_mention || self.company_name_mention || self.industry_relevance > industry_threshold
    }
}

/// How a ticker ended up in the opportunity list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMethod {
    Ticker,
    CompanyName,
    Industry,
    Fallback,
}

impl SelectionMethod {
    pub fn for_score(score: &TickerScore) -> Self {
        if score.direct_mention {
            Self::Ticker
        } else if score.company_name_mention {
            Self::CompanyName
        } else if score.industry_relevance > 0.0 {
            Self::Industry
        } else {
            Self::Fallback
        }
    }
}

/// An article cited in support of an opportunity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsReference {
    pub title: String,
    pub url: String,
    pub snippet: String,
    /// Sentiment of the snippet alone.
    pub sentiment: Sentiment,
}

/// A ranked ticker recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub ticker: String,
    /// 0..=99.
    pub confidence: u8,
    pub reasons: Vec<String>,
    pub news_references: Vec<NewsReference>,
    pub rationale: String,
    pub is_fallback: bool,
    pub selection_method: SelectionMethod,
}

/// An input article plus its sentiment and the tickers it relates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedArticle {
    #[serde(flatten)]
    pub article: Article,
    pub sentiment: Sentiment,
    /// Deduplicated, first-seen order.
    pub relevant_stocks: Vec<String>,
}

/// Output of one analysis run.
///
/// Serializes to `{ "news": [...], "opportunities": [...] }`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Same order and count as the input articles.
    pub news: Vec<AnnotatedArticle>,
    /// At most `top_n`, ranked.
    pub opportunities: Vec<Opportunity>,
    #[serde(skip)]
    pub(crate) selection: Selection,
}

impl AnalysisReport {
    /// Which arm of the ranking cascade produced the opportunities, with the
    /// score rows of the selected tickers.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Score row for `symbol`, if it was selected.
    pub fn score(&self, symbol: &str) -> Option<&TickerScore> {
        self.selection.picks().iter().find(|s| s.symbol == symbol)
    }
}
