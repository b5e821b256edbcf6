use serde::{Deserialize, Serialize};

/// One row of the ticker table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerRecord {
    /// Exchange symbol, 1-5 uppercase letters.
    pub symbol: String,
    /// Name matched case-insensitively against article text.
    pub company_name: String,
    /// Industry label; may name several industries, e.g. `"Finance/Technology"`.
    pub industry: String,
}

impl TickerRecord {
    /// True if this ticker's industry field contains `industry` as a substring.
    pub fn in_industry(&self, industry: &str) -> bool {
        self.industry.contains(industry)
    }
}

/// Keyword phrases that signal relevance to one industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryKeywordSet {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Unvalidated lexicon tables, as stored on disk or built in code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconData {
    pub tickers: Vec<TickerRecord>,
    /// Valid symbols with no company record (index funds and the like).
    #[serde(default)]
    pub extra_symbols: Vec<String>,
    /// Uppercase acronyms never treated as tickers, even when they are valid symbols.
    #[serde(default)]
    pub excluded_acronyms: Vec<String>,
    pub industries: Vec<IndustryKeywordSet>,
    pub positive_words: Vec<String>,
    pub negative_words: Vec<String>,
    #[serde(default)]
    pub default_tickers: Vec<String>,
}
