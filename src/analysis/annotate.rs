use crate::lexicon::Lexicon;
use crate::sentiment;

use super::model::{AnnotatedArticle, Article};
use super::text::ArticleText;

/// Sentiment of the whole article plus every ticker it refers to: symbol
/// tokens first in text order, then company-name matches in table order.
pub(crate) fn annotate(lexicon: &Lexicon, article: &Article, text: &ArticleText) -> AnnotatedArticle {
    let mut relevant_stocks: Vec<String> = Vec::new();
    let mut push = |sym: &str| {
        if !relevant_stocks.iter().any(|s| s == sym) {
            relevant_stocks.push(sym.to_string());
        }
    };

    for sym in text.ticker_tokens(lexicon) {
        push(sym);
    }
    for (record, needle) in lexicon.companies() {
        if text.lower.contains(needle) {
            push(&record.symbol);
        }
    }

    AnnotatedArticle {
        article: article.clone(),
        sentiment: sentiment::score_lowered(lexicon, &text.lower),
        relevant_stocks,
    }
}
