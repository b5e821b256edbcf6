//! Static reference data for the relevance engine.
//!
//! A [`Lexicon`] is loaded once (built-in tables, a JSON string or a JSON file),
//! validated, indexed, and then only read. Share it between analyzers with an
//! `Arc`; nothing in it is mutated after construction.

mod data;
mod model;

pub use model::{IndustryKeywordSet, LexiconData, TickerRecord};

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::core::RadarError;

/// Validated, indexed reference tables.
#[derive(Debug, Clone)]
pub struct Lexicon {
    tickers: Vec<TickerRecord>,
    // lower-cased company names, parallel to `tickers`
    company_needles: Vec<String>,
    by_symbol: HashMap<String, usize>,
    valid: HashSet<String>,
    excluded: HashSet<String>,
    industries: Vec<IndustryKeywordSet>,
    positive: Vec<String>,
    negative: Vec<String>,
    default_tickers: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(data::builtin()).expect("built-in lexicon is valid")
    }
}

impl Lexicon {
    /// Validates `data` and builds the lookup indexes.
    ///
    /// Keywords and sentiment words are lower-cased here so matching can work
    /// against lower-cased article text.
    ///
    /// # Errors
    ///
    /// Returns `RadarError::Lexicon` if a symbol is not 1-5 uppercase ASCII
    /// letters, a symbol is listed twice, a company name, industry name,
    /// keyword or sentiment word is empty, or a default ticker is not in the table.
    pub fn new(data: LexiconData) -> Result<Self, RadarError> {
        let LexiconData {
            tickers,
            extra_symbols,
            excluded_acronyms,
            industries,
            positive_words,
            negative_words,
            default_tickers,
        } = data;

        let mut by_symbol = HashMap::with_capacity(tickers.len());
        let mut valid = HashSet::with_capacity(tickers.len() + extra_symbols.len());
        let mut company_needles = Vec::with_capacity(tickers.len());

        for (idx, rec) in tickers.iter().enumerate() {
            check_symbol(&rec.symbol)?;
            if rec.company_name.trim().is_empty() {
                return Err(RadarError::Lexicon(format!(
                    "ticker {} has an empty company name",
                    rec.symbol
                )));
            }
            if !valid.insert(rec.symbol.clone()) {
                return Err(RadarError::Lexicon(format!("duplicate symbol {}", rec.symbol)));
            }
            by_symbol.insert(rec.symbol.clone(), idx);
            company_needles.push(rec.company_name.to_lowercase());
        }

        for sym in &extra_symbols {
            check_symbol(sym)?;
            if !valid.insert(sym.clone()) {
                return Err(RadarError::Lexicon(format!("duplicate symbol {sym}")));
            }
        }

        let industries = industries
            .into_iter()
            .map(|set| {
                if set.name.trim().is_empty() {
                    return Err(RadarError::Lexicon("empty industry name".into()));
                }
                let keywords = lower_all(set.keywords, &set.name)?;
                Ok(IndustryKeywordSet {
                    name: set.name,
                    keywords,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let positive = lower_all(positive_words, "positive lexicon")?;
        let negative = lower_all(negative_words, "negative lexicon")?;

        if let Some(missing) = default_tickers.iter().find(|s| !by_symbol.contains_key(*s)) {
            return Err(RadarError::Lexicon(format!(
                "default ticker {missing} is not in the ticker table"
            )));
        }

        Ok(Self {
            tickers,
            company_needles,
            by_symbol,
            valid,
            excluded: excluded_acronyms.into_iter().collect(),
            industries,
            positive,
            negative,
            default_tickers,
        })
    }

    /// Parses and validates a lexicon from a JSON document shaped like [`LexiconData`].
    ///
    /// # Errors
    ///
    /// Returns `RadarError::Json` on malformed JSON and `RadarError::Lexicon`
    /// when validation fails.
    pub fn from_json_str(json: &str) -> Result<Self, RadarError> {
        let data: LexiconData = serde_json::from_str(json)?;
        Self::new(data)
    }

    /// Reads a JSON lexicon file. See [`Lexicon::from_json_str`].
    ///
    /// # Errors
    ///
    /// Returns `RadarError::Io` if the file cannot be read, otherwise as
    /// [`Lexicon::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RadarError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// The ticker table, in declaration order.
    pub fn tickers(&self) -> &[TickerRecord] {
        &self.tickers
    }

    /// Looks up a ticker record by symbol.
    pub fn record(&self, symbol: &str) -> Option<&TickerRecord> {
        self.by_symbol.get(symbol).map(|&i| &self.tickers[i])
    }

    /// True if `symbol` is in the valid-ticker set (table symbols plus extra symbols).
    pub fn is_valid_ticker(&self, symbol: &str) -> bool {
        self.valid.contains(symbol)
    }

    /// True if `token` is a common acronym that is never treated as a ticker.
    pub fn is_excluded(&self, token: &str) -> bool {
        self.excluded.contains(token)
    }

    /// A token counts as a ticker mention only if it is valid and not excluded.
    pub fn accepts_token(&self, token: &str) -> bool {
        self.is_valid_ticker(token) && !self.is_excluded(token)
    }

    /// Ticker records paired with their lower-cased company name.
    pub(crate) fn companies(&self) -> impl Iterator<Item = (&TickerRecord, &str)> {
        self.tickers
            .iter()
            .zip(self.company_needles.iter().map(String::as_str))
    }

    /// Lower-cased company name for `symbol`, if it has a record.
    pub(crate) fn company_needle(&self, symbol: &str) -> Option<&str> {
        self.by_symbol
            .get(symbol)
            .map(|&i| self.company_needles[i].as_str())
    }

    /// Industry keyword sets, in declaration order.
    pub fn industries(&self) -> &[IndustryKeywordSet] {
        &self.industries
    }

    /// Tickers whose industry field contains `industry` as a substring, in declaration order.
    pub fn tickers_in_industry<'a>(
        &'a self,
        industry: &'a str,
    ) -> impl Iterator<Item = &'a TickerRecord> + 'a {
        self.tickers.iter().filter(move |t| t.in_industry(industry))
    }

    pub fn positive_words(&self) -> &[String] {
        &self.positive
    }

    pub fn negative_words(&self) -> &[String] {
        &self.negative
    }

    /// Last-resort tickers used when neither articles nor keywords carry a signal.
    pub fn default_tickers(&self) -> &[String] {
        &self.default_tickers
    }
}

fn check_symbol(sym: &str) -> Result<(), RadarError> {
    let ok = (1..=5).contains(&sym.len()) && sym.bytes().all(|b| b.is_ascii_uppercase());
    if ok {
        Ok(())
    } else {
        Err(RadarError::Lexicon(format!(
            "symbol {sym:?} must be 1-5 uppercase ASCII letters"
        )))
    }
}

fn lower_all(words: Vec<String>, owner: &str) -> Result<Vec<String>, RadarError> {
    words
        .into_iter()
        .map(|w| {
            if w.trim().is_empty() {
                Err(RadarError::Lexicon(format!("empty keyword in {owner}")))
            } else {
                Ok(w.to_lowercase())
            }
        })
        .collect()
}
