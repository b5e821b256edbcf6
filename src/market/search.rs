use crate::core::client::RetryConfig;
use crate::core::{MarketClient, RadarError, net};

use super::model::TickerMatch;
use super::wire::SearchEnvelope;

fn parse_search_body(body: &str) -> Result<Vec<TickerMatch>, RadarError> {
    let env: SearchEnvelope = serde_json::from_str(body)
        .map_err(|e| RadarError::Data(format!("search json parse error: {e}")))?;

    Ok(env
        .quotes
        .unwrap_or_default()
        .into_iter()
        .filter_map(|q| {
            let symbol = q.symbol.filter(|s| !s.is_empty())?;
            Some(TickerMatch {
                symbol,
                shortname: q.shortname.or(q.longname),
                exch_disp: q.exch_disp,
                type_disp: q.type_disp,
            })
        })
        .collect())
}

/// Autocomplete lookup for ticker symbols.
///
/// # Errors
///
/// See [`TickerSearchBuilder::fetch`].
pub async fn search(client: &MarketClient, query: &str) -> Result<Vec<TickerMatch>, RadarError> {
    TickerSearchBuilder::new(client, query).fetch().await
}

/// A builder for ticker autocomplete requests.
#[derive(Debug)]
pub struct TickerSearchBuilder {
    client: MarketClient,
    query: String,
    quotes_count: u32,
    retry_override: Option<RetryConfig>,
}

impl TickerSearchBuilder {
    pub fn new(client: &MarketClient, query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into(),
            quotes_count: 10,
            retry_override: None,
        }
    }

    /// Sets the maximum number of matches to return.
    #[must_use]
    pub const fn quotes_count(mut self, n: u32) -> Self {
        self.quotes_count = n;
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the search.
    ///
    /// # Errors
    ///
    /// Returns `RadarError::InvalidInput` for a blank query, an HTTP status
    /// error for non-success responses, or `RadarError::Data` if the body
    /// cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(query = %self.query)))]
    pub async fn fetch(self) -> Result<Vec<TickerMatch>, RadarError> {
        let query = self.query.trim();
        if query.is_empty() {
            return Err(RadarError::InvalidInput("missing query".into()));
        }

        let mut url = self.client.base_search().clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("quotesCount", &self.quotes_count.to_string())
            .append_pair("newsCount", "0")
            .append_pair("listsCount", "0");

        let req = self
            .client
            .http()
            .get(url)
            .header("accept", "application/json");
        let resp = self
            .client
            .send_with_retry(req, self.retry_override.as_ref())
            .await?;

        let body = net::get_text(resp, "search").await?;
        parse_search_body(&body)
    }
}
