//! news-radar: scores financial news against stock tickers and ranks
//! investment opportunities.
//!
//! The heart of the crate is [`Analyzer`], a pure, deterministic engine that
//! takes already-fetched articles plus a free-text topic and returns each
//! article annotated with sentiment and related tickers, and up to three
//! ranked [`Opportunity`] values with confidence, rationale and cited news.
//!
//! Reference data (tickers, industry keywords, sentiment words) lives in a
//! [`Lexicon`], loaded once and shared. The [`market`] module is a thin async
//! client for ticker autocomplete and daily price history.

pub mod analysis;
pub mod core;
pub mod lexicon;
pub mod market;
pub mod sentiment;

pub use analysis::{
    AnalysisConfig, AnalysisReport, AnalyzeRequest, Analyzer, AnalyzerBuilder, AnnotatedArticle,
    Article, NewsReference, Opportunity, Selection, SelectionMethod, TickerScore, confidence,
};
pub use crate::core::client::{Backoff, RetryConfig};
pub use crate::core::{MarketClient, MarketClientBuilder, RadarError};
pub use lexicon::{IndustryKeywordSet, Lexicon, LexiconData, TickerRecord};
pub use market::{PricePoint, TickerMatch};
pub use sentiment::Sentiment;

#[cfg(feature = "tracing-subscriber")]
/// Installs a `fmt` subscriber filtered by `RUST_LOG`. Dev-only convenience for demos and tests.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
