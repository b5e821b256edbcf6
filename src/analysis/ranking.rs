//! Ranking and the fallback cascade.
//!
//! The cascade is an ordered chain: rank article-derived scores if any ticker
//! is relevant, else pick tickers from the industry the search keywords point
//! at, else use the lexicon's default tickers.

use crate::lexicon::Lexicon;

use super::AnalysisConfig;
use super::industry;
use super::model::TickerScore;
use super::scores::ScoreTable;

/// Result of the ranking cascade, naming the arm that produced the picks.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// At least one ticker had an article-derived signal; all scored tickers
    /// were ranked by raw score.
    Scored(Vec<TickerScore>),
    /// No article signal; tickers of the industry best matching the keywords.
    IndustryFallback {
        industry: String,
        picks: Vec<TickerScore>,
    },
    /// Neither articles nor keywords carried a signal.
    Defaults(Vec<TickerScore>),
}

impl Selection {
    /// Selected tickers, in output order.
    pub fn picks(&self) -> &[TickerScore] {
        match self {
            Self::Scored(picks) | Self::Defaults(picks) | Self::IndustryFallback { picks, .. } => {
                picks
            }
        }
    }

    /// True for both fallback arms.
    pub const fn is_fallback(&self) -> bool {
        !matches!(self, Self::Scored(_))
    }
}

pub(crate) fn rank(
    lexicon: &Lexicon,
    cfg: &AnalysisConfig,
    table: ScoreTable,
    keywords: &str,
) -> Selection {
    let selection = scored(cfg, table)
        .or_else(|| industry_fallback(lexicon, cfg, keywords))
        .unwrap_or_else(|| defaults(lexicon, cfg));

    #[cfg(feature = "tracing")]
    tracing::debug!(
        arm = match &selection {
            Selection::Scored(_) => "scored",
            Selection::IndustryFallback { .. } => "industry_fallback",
            Selection::Defaults(_) => "defaults",
        },
        picks = ?selection.picks().iter().map(|p| p.symbol.as_str()).collect::<Vec<_>>(),
        "ranking complete"
    );

    selection
}

fn scored(cfg: &AnalysisConfig, table: ScoreTable) -> Option<Selection> {
    let mut rows = table.into_rows();
    if !rows.iter().any(|r| r.is_relevant(cfg.relevance_threshold)) {
        return None;
    }
    // Stable sort: equal scores keep first-contribution order.
    rows.sort_by(|a, b| b.raw_score.total_cmp(&a.raw_score));
    rows.truncate(cfg.top_n);
    Some(Selection::Scored(rows))
}

fn industry_fallback(lexicon: &Lexicon, cfg: &AnalysisConfig, keywords: &str) -> Option<Selection> {
    let set = industry::best_keyword_match(lexicon, keywords)?;
    let picks: Vec<TickerScore> = lexicon
        .tickers_in_industry(&set.name)
        .take(cfg.top_n)
        .map(|rec| {
            TickerScore::seeded(
                &rec.symbol,
                cfg.fallback_seed_score,
                cfg.fallback_industry_relevance,
            )
        })
        .collect();
    if picks.is_empty() {
        return None;
    }
    Some(Selection::IndustryFallback {
        industry: set.name.clone(),
        picks,
    })
}

fn defaults(lexicon: &Lexicon, cfg: &AnalysisConfig) -> Selection {
    Selection::Defaults(
        lexicon
            .default_tickers()
            .iter()
            .take(cfg.top_n)
            .map(|sym| TickerScore::seeded(sym.as_str(), cfg.fallback_seed_score, 0.0))
            .collect(),
    )
}
