use chrono::{DateTime, Utc};
use serde::Serialize;

/// One autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerMatch {
    pub symbol: String,
    pub shortname: Option<String>,
    /// Exchange display name, e.g. "NASDAQ".
    pub exch_disp: Option<String>,
    /// Instrument type display name, e.g. "Equity".
    pub type_disp: Option<String>,
}

/// A daily OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<u64>,
}
