use serde::Deserialize;

/* ------------- Minimal serde mapping of /v1/finance/search ------------- */

#[derive(Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(default)]
    pub(crate) quotes: Option<Vec<SearchQuote>>,
}

#[derive(Deserialize)]
pub(crate) struct SearchQuote {
    #[serde(default)]
    pub(crate) symbol: Option<String>,
    #[serde(default)]
    pub(crate) shortname: Option<String>,
    #[serde(default)]
    pub(crate) longname: Option<String>,
    #[serde(rename = "exchDisp")]
    #[serde(default)]
    pub(crate) exch_disp: Option<String>,
    #[serde(rename = "typeDisp")]
    #[serde(default)]
    pub(crate) type_disp: Option<String>,
}

/* ------------- Minimal serde mapping of /v8/finance/chart ------------- */

#[derive(Deserialize)]
pub(crate) struct ChartEnvelope {
    pub(crate) chart: Option<ChartNode>,
}

#[derive(Deserialize)]
pub(crate) struct ChartNode {
    pub(crate) result: Option<Vec<ChartResult>>,
    pub(crate) error: Option<ChartError>,
}

#[derive(Deserialize)]
pub(crate) struct ChartError {
    pub(crate) code: String,
    pub(crate) description: String,
}

#[derive(Deserialize)]
pub(crate) struct ChartResult {
    #[serde(default)]
    pub(crate) timestamp: Option<Vec<i64>>,
    pub(crate) indicators: Indicators,
}

#[derive(Deserialize)]
pub(crate) struct Indicators {
    #[serde(default)]
    pub(crate) quote: Vec<QuoteBlock>,
}

#[derive(Deserialize)]
pub(crate) struct QuoteBlock {
    #[serde(default)]
    pub(crate) open: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) high: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) low: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) close: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) volume: Vec<Option<u64>>,
}
