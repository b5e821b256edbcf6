//! Lexicon-based sentiment scoring.

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

/// Polarity assigned to a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    const fn from_polarity(n: i32) -> Self {
        if n > 0 {
            Self::Positive
        } else if n < 0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Net count of positive minus negative lexicon words contained in `text`.
///
/// Matching is case-insensitive substring containment; each word counts at most once.
pub fn polarity(lexicon: &Lexicon, text: &str) -> i32 {
    polarity_lowered(lexicon, &text.to_lowercase())
}

pub(crate) fn polarity_lowered(lexicon: &Lexicon, lower: &str) -> i32 {
    let hits = |words: &[String]| -> i32 {
        let n = words.iter().filter(|w| lower.contains(w.as_str())).count();
        i32::try_from(n).unwrap_or(i32::MAX)
    };
    hits(lexicon.positive_words()) - hits(lexicon.negative_words())
}

/// Classifies `text` as positive, negative or neutral.
///
/// ```
/// use news_radar::{Lexicon, Sentiment, sentiment};
///
/// let lex = Lexicon::default();
/// assert_eq!(
///     sentiment::score(&lex, "Company reports record profit and strong growth"),
///     Sentiment::Positive
/// );
/// ```
pub fn score(lexicon: &Lexicon, text: &str) -> Sentiment {
    Sentiment::from_polarity(polarity(lexicon, text))
}

pub(crate) fn score_lowered(lexicon: &Lexicon, lower: &str) -> Sentiment {
    Sentiment::from_polarity(polarity_lowered(lexicon, lower))
}
