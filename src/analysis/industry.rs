//! Industry keyword relevance.

use crate::lexicon::{IndustryKeywordSet, Lexicon};

use super::AnalysisConfig;
use super::model::Article;
use super::scores::ScoreTable;
use super::text::ArticleText;

/// Number of the set's keywords contained in `lower`.
pub(crate) fn hit_count(set: &IndustryKeywordSet, lower: &str) -> u32 {
    let n = set
        .keywords
        .iter()
        .filter(|kw| lower.contains(kw.as_str()))
        .count();
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Spreads each industry's hit count to every ticker in that industry.
///
/// The article is cited only when the hit count reaches `citation_min_hits`;
/// weaker matches still add to the score.
pub(crate) fn score_article(
    lexicon: &Lexicon,
    cfg: &AnalysisConfig,
    article: &Article,
    text: &ArticleText,
    table: &mut ScoreTable,
) {
    for set in lexicon.industries() {
        let hits = hit_count(set, &text.lower);
        if hits == 0 {
            continue;
        }
        let hits_f = f64::from(hits);
        for record in lexicon.tickers_in_industry(&set.name) {
            let row = table.entry(&record.symbol);
            row.raw_score += hits_f * cfg.industry_weight;
            row.industry_relevance += hits_f;
            if hits >= cfg.citation_min_hits {
                row.cite(&article.title);
            }
        }
    }
}

/// The industry whose keywords best match the free-text `keywords`.
///
/// Ties go to the industry declared first. `None` when nothing matches.
pub(crate) fn best_keyword_match<'a>(
    lexicon: &'a Lexicon,
    keywords: &str,
) -> Option<&'a IndustryKeywordSet> {
    let lower = keywords.to_lowercase();
    let mut best: Option<(&IndustryKeywordSet, u32)> = None;
    for set in lexicon.industries() {
        let hits = hit_count(set, &lower);
        if hits > best.map_or(0, |(_, n)| n) {
            best = Some((set, hits));
        }
    }
    best.map(|(set, _)| set)
}
