//! The news-to-ticker relevance and ranking engine.
//!
//! [`Analyzer::analyze`] is a pure function of the article list and the
//! keyword string. Each call builds its own score table and drops it on
//! return, so one `Analyzer` can serve concurrent requests.

mod annotate;
mod config;
mod industry;
mod mentions;
mod model;
mod opportunity;
mod ranking;
mod scores;
mod text;
mod wire;

pub use config::AnalysisConfig;
pub use model::{
    AnalysisReport, AnalyzeRequest, AnnotatedArticle, Article, NewsReference, Opportunity,
    SelectionMethod, TickerScore,
};
pub use opportunity::confidence;
pub use ranking::Selection;

use std::sync::Arc;

use crate::core::RadarError;
use crate::lexicon::Lexicon;

use scores::ScoreTable;
use text::ArticleText;

impl AnalyzeRequest {
    /// Parses a request body of the form
    /// `{ "news": [...], "keywords": "...", "startDate": "YYYY-MM-DD", "endDate": "YYYY-MM-DD" }`.
    ///
    /// Missing or `null` article fields become empty; a field of any other
    /// type rejects the whole request.
    ///
    /// # Errors
    ///
    /// Returns `RadarError::InvalidInput` if the body is not JSON, `news` is
    /// missing or not an array, an element is not an object, a field has the
    /// wrong type, or a date is not `YYYY-MM-DD`.
    pub fn from_json(body: &str) -> Result<Self, RadarError> {
        wire::parse_request(body)
    }
}

/// Scores articles against the lexicon and ranks opportunities.
///
/// # Example
///
/// ```
/// use news_radar::{Analyzer, Article, SelectionMethod};
///
/// let analyzer = Analyzer::default();
/// let news = vec![Article::new(
///     "Apple unveils new iPhone",
///     "AAPL stock jumps on strong sales",
///     "https://example.com/apple",
/// )];
/// let report = analyzer.analyze(&news, "technology");
/// assert_eq!(report.opportunities[0].ticker, "AAPL");
/// assert_eq!(report.opportunities[0].selection_method, SelectionMethod::Ticker);
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    lexicon: Arc<Lexicon>,
    config: AnalysisConfig,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            lexicon: Arc::new(Lexicon::default()),
            config: AnalysisConfig::default(),
        }
    }
}

impl Analyzer {
    /// An analyzer over `lexicon` with default settings.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            config: AnalysisConfig::default(),
        }
    }

    /// Create a new builder.
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Annotates every article and ranks up to `top_n` opportunities.
    ///
    /// An empty article list is valid; its opportunities come from the
    /// fallback cascade.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, articles), fields(articles = articles.len()))
    )]
    pub fn analyze(&self, articles: &[Article], keywords: &str) -> AnalysisReport {
        let lexicon = self.lexicon.as_ref();
        let texts: Vec<ArticleText> = articles.iter().map(ArticleText::new).collect();

        let mut table = ScoreTable::default();
        for (article, text) in articles.iter().zip(&texts) {
            mentions::score_article(lexicon, &self.config, article, text, &mut table);
            industry::score_article(lexicon, &self.config, article, text, &mut table);
        }

        let selection = ranking::rank(lexicon, &self.config, table, keywords);
        let opportunities =
            opportunity::build_all(lexicon, &self.config, articles, &texts, &selection, keywords);

        let news = articles
            .iter()
            .zip(&texts)
            .map(|(article, text)| annotate::annotate(lexicon, article, text))
            .collect();

        AnalysisReport {
            news,
            opportunities,
            selection,
        }
    }

    /// Runs [`Analyzer::analyze`] over a decoded request.
    pub fn analyze_request(&self, req: &AnalyzeRequest) -> AnalysisReport {
        self.analyze(&req.news, &req.keywords)
    }

    /// Decodes a JSON request body and analyzes it.
    ///
    /// # Errors
    ///
    /// Returns `RadarError::InvalidInput` as described on
    /// [`AnalyzeRequest::from_json`]; no partial output is produced.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub fn analyze_json(&self, body: &str) -> Result<AnalysisReport, RadarError> {
        let req = AnalyzeRequest::from_json(body)?;
        Ok(self.analyze_request(&req))
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct AnalyzerBuilder {
    lexicon: Option<Arc<Lexicon>>,
    config: AnalysisConfig,
}

impl AnalyzerBuilder {
    /// Use `lexicon` instead of the built-in tables.
    #[must_use]
    pub fn lexicon(mut self, lexicon: Arc<Lexicon>) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Replace every setting at once.
    #[must_use]
    pub fn config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Maximum number of opportunities. Default: 3.
    #[must_use]
    pub const fn top_n(mut self, n: usize) -> Self {
        self.config.top_n = n;
        self
    }

    /// Snippet length in characters. Default: 150.
    #[must_use]
    pub const fn snippet_chars(mut self, n: usize) -> Self {
        self.config.snippet_chars = n;
        self
    }

    /// Industry hits needed before an article is cited. Default: 2.
    #[must_use]
    pub const fn citation_min_hits(mut self, n: u32) -> Self {
        self.config.citation_min_hits = n;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns `RadarError::Config` if a weight or threshold is negative or not finite.
    pub fn build(self) -> Result<Analyzer, RadarError> {
        self.config.validate()?;
        Ok(Analyzer {
            lexicon: self.lexicon.unwrap_or_else(|| Arc::new(Lexicon::default())),
            config: self.config,
        })
    }
}
