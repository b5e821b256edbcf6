//! Direct symbol and company-name mentions.

use crate::lexicon::Lexicon;

use super::AnalysisConfig;
use super::model::Article;
use super::scores::ScoreTable;
use super::text::ArticleText;

/// Adds one `direct_weight` contribution per accepted symbol token and one
/// `company_weight` contribution per company named in the article.
pub(crate) fn score_article(
    lexicon: &Lexicon,
    cfg: &AnalysisConfig,
    article: &Article,
    text: &ArticleText,
    table: &mut ScoreTable,
) {
    for symbol in text.ticker_tokens(lexicon) {
        let row = table.entry(symbol);
        row.raw_score += cfg.direct_weight;
        row.direct_mention = true;
        row.direct_hits += 1;
        row.cite(&article.title);
    }

    for (record, needle) in lexicon.companies() {
        if !text.lower.contains(needle) {
            continue;
        }
        let row = table.entry(&record.symbol);
        row.raw_score += cfg.company_weight;
        row.company_name_mention = true;
        row.company_hits += 1;
        row.cite(&article.title);
    }
}
