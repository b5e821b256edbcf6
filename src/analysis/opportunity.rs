//! Turns ranked tickers into opportunities with confidence, rationale and references.

use crate::lexicon::Lexicon;
use crate::sentiment;

use super::AnalysisConfig;
use super::model::{Article, NewsReference, Opportunity, SelectionMethod, TickerScore};
use super::ranking::Selection;
use super::text::{ArticleText, snippet};

/// Below this industry relevance a ticker with no mention is flagged as a fallback pick.
const FALLBACK_RELEVANCE_FLOOR: f64 = 2.0;

/// `min(99, floor(raw*5 + 30*direct + 20*company + 2*industry))`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn confidence(score: &TickerScore) -> u8 {
    let mut value = score.raw_score * 5.0 + score.industry_relevance * 2.0;
    if score.direct_mention {
        value += 30.0;
    }
    if score.company_name_mention {
        value += 20.0;
    }
    value.floor().clamp(0.0, 99.0) as u8
}

pub(crate) fn build_all(
    lexicon: &Lexicon,
    cfg: &AnalysisConfig,
    articles: &[Article],
    texts: &[ArticleText],
    selection: &Selection,
    keywords: &str,
) -> Vec<Opportunity> {
    selection
        .picks()
        .iter()
        .map(|score| build(lexicon, cfg, articles, texts, selection, score, keywords))
        .collect()
}

fn build(
    lexicon: &Lexicon,
    cfg: &AnalysisConfig,
    articles: &[Article],
    texts: &[ArticleText],
    selection: &Selection,
    score: &TickerScore,
    keywords: &str,
) -> Opportunity {
    // Exhaustive, unlike the selective citations recorded while scoring.
    let news_references: Vec<NewsReference> = articles
        .iter()
        .zip(texts)
        .filter(|(_, text)| text.refers_to(lexicon, &score.symbol))
        .map(|(article, _)| reference(lexicon, article, cfg.snippet_chars))
        .collect();

    let is_fallback = selection.is_fallback()
        || (!score.direct_mention
            && !score.company_name_mention
            && score.industry_relevance < FALLBACK_RELEVANCE_FLOOR);

    let wording = Wording::new(lexicon, score, selection, keywords);
    let rationale = wording.rationale(!news_references.is_empty());
    let reasons = vec![wording.topic_reason(), wording.method_reason(), rationale.clone()];

    Opportunity {
        ticker: score.symbol.clone(),
        confidence: confidence(score),
        reasons,
        news_references,
        rationale,
        is_fallback,
        selection_method: SelectionMethod::for_score(score),
    }
}

fn reference(lexicon: &Lexicon, article: &Article, snippet_chars: usize) -> NewsReference {
    let snippet = snippet(article.summary_text(), snippet_chars);
    let sentiment = sentiment::score(lexicon, &snippet);
    NewsReference {
        title: article.title.clone(),
        url: article.url.clone(),
        snippet,
        sentiment,
    }
}

/// Sentence templates for one ticker.
struct Wording<'a> {
    symbol: &'a str,
    company: &'a str,
    sector: &'a str,
    topic: String,
    score: &'a TickerScore,
    selection: &'a Selection,
}

impl<'a> Wording<'a> {
    fn new(
        lexicon: &'a Lexicon,
        score: &'a TickerScore,
        selection: &'a Selection,
        keywords: &str,
    ) -> Self {
        let record = lexicon.record(&score.symbol);
        let trimmed = keywords.trim();
        Self {
            symbol: &score.symbol,
            company: record.map_or(score.symbol.as_str(), |r| r.company_name.as_str()),
            sector: record.map_or("related", |r| r.industry.as_str()),
            topic: if trimmed.is_empty() {
                "current market".to_string()
            } else {
                format!("\"{trimmed}\"")
            },
            score,
            selection,
        }
    }

    fn topic_reason(&self) -> String {
        format!(
            "{} is related to {} developments in recent news.",
            self.symbol, self.topic
        )
    }

    fn method_reason(&self) -> String {
        let s = self.score;
        match self.selection {
            Selection::IndustryFallback { industry, .. } => format!(
                "Selected from the {industry} sector because the search keywords match it."
            ),
            Selection::Defaults(_) => {
                "Selected from the default large-cap watchlist because no sector matched.".into()
            }
            Selection::Scored(_) => match SelectionMethod::for_score(s) {
                SelectionMethod::Ticker => format!(
                    "The symbol {} appears {} across the analyzed articles.",
                    self.symbol,
                    times(s.direct_hits)
                ),
                SelectionMethod::CompanyName => format!(
                    "{} is mentioned by name in {} of the analyzed articles.",
                    self.company, s.company_hits
                ),
                SelectionMethod::Industry => format!(
                    "{} industry keywords matched the analyzed articles (relevance {}).",
                    self.sector, s.industry_relevance
                ),
                SelectionMethod::Fallback => format!(
                    "No article referenced {} directly.",
                    self.symbol
                ),
            },
        }
    }

    fn rationale(&self, has_references: bool) -> String {
        let s = self.score;
        let mut text = if s.direct_mention {
            format!(
                "{} is mentioned directly in news coverage of {}.",
                self.symbol, self.topic
            )
        } else if s.company_name_mention {
            format!(
                "{} ({}) is named in news coverage of {}.",
                self.company, self.symbol, self.topic
            )
        } else if !self.selection.is_fallback() && s.industry_relevance > 0.0 {
            format!(
                "{} operates in the {} sector, which features in news about {}.",
                self.symbol, self.sector, self.topic
            )
        } else if let Selection::IndustryFallback { industry, .. } = self.selection {
            format!(
                "No article named a specific company, so {} was chosen as a leading {} stock for {}.",
                self.symbol, industry, self.topic
            )
        } else {
            format!(
                "No article or keyword pointed to a specific sector, so {} was chosen as a large-cap default.",
                self.symbol
            )
        };
        if has_references {
            text.push_str(" See the specific news references below.");
        }
        text
    }
}

fn times(n: u32) -> String {
    if n == 1 {
        "1 time".to_string()
    } else {
        format!("{n} times")
    }
}
