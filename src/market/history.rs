use chrono::{DateTime, NaiveDate, NaiveTime};
use futures::future::try_join_all;

use crate::core::client::RetryConfig;
use crate::core::{MarketClient, RadarError, net};

use super::model::PricePoint;
use super::wire::{ChartEnvelope, QuoteBlock};

/// Daily bars for `symbol` from `start` through `end` (inclusive).
///
/// # Errors
///
/// See [`PriceHistoryBuilder::fetch`].
pub async fn price_history(
    client: &MarketClient,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<PricePoint>, RadarError> {
    PriceHistoryBuilder::new(client, symbol, start, end)
        .fetch()
        .await
}

/// Fetches the same window for several symbols concurrently.
///
/// Fails as a whole if any symbol fails. Output order matches `symbols`.
///
/// # Errors
///
/// The first error returned by any of the underlying requests.
pub async fn price_histories<S: AsRef<str>>(
    client: &MarketClient,
    symbols: &[S],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<(String, Vec<PricePoint>)>, RadarError> {
    let futs = symbols.iter().map(|s| {
        let symbol = s.as_ref().to_string();
        async move {
            let bars = price_history(client, &symbol, start, end).await?;
            Ok::<_, RadarError>((symbol, bars))
        }
    });
    try_join_all(futs).await
}

/// A builder for daily price history requests.
#[derive(Debug)]
pub struct PriceHistoryBuilder {
    client: MarketClient,
    symbol: String,
    start: NaiveDate,
    end: NaiveDate,
    retry_override: Option<RetryConfig>,
}

impl PriceHistoryBuilder {
    pub fn new(
        client: &MarketClient,
        symbol: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            start,
            end,
            retry_override: None,
        }
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request.
    ///
    /// Bars with any missing open/high/low/close value are dropped.
    ///
    /// # Errors
    ///
    /// Returns `RadarError::InvalidDates` if `start` is not before `end`,
    /// `RadarError::InvalidInput` for a blank symbol, an HTTP status error for
    /// non-success responses, or `RadarError::Data` if the provider reports an
    /// error or the body cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch(self) -> Result<Vec<PricePoint>, RadarError> {
        if self.symbol.trim().is_empty() {
            return Err(RadarError::InvalidInput("missing ticker".into()));
        }
        if self.start >= self.end {
            return Err(RadarError::InvalidDates);
        }
        let period1 = midnight_ts(self.start);
        let period2 = midnight_ts(self.end.succ_opt().ok_or(RadarError::InvalidDates)?);

        let mut url = self.client.base_chart().join(self.symbol.trim())?;
        url.query_pairs_mut()
            .append_pair("period1", &period1.to_string())
            .append_pair("period2", &period2.to_string())
            .append_pair("interval", "1d")
            .append_pair("includePrePost", "false");

        let req = self.client.http().get(url);
        let resp = self
            .client
            .send_with_retry(req, self.retry_override.as_ref())
            .await?;

        let body = net::get_text(resp, "history_chart").await?;
        decode_chart(&body)
    }
}

fn midnight_ts(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

fn decode_chart(body: &str) -> Result<Vec<PricePoint>, RadarError> {
    let parsed: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| RadarError::Data(format!("json parse error: {e}")))?;

    let chart = parsed
        .chart
        .ok_or_else(|| RadarError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        return Err(RadarError::Data(format!(
            "yahoo error: {} - {}",
            err.code, err.description
        )));
    }

    let r0 = chart
        .result
        .and_then(|mut r| r.pop())
        .ok_or_else(|| RadarError::Data("empty result".into()))?;

    let ts = r0.timestamp.unwrap_or_default();
    let Some(quote) = r0.indicators.quote.into_iter().next() else {
        // No trading days in the window.
        return Ok(Vec::new());
    };

    Ok(assemble(&ts, &quote))
}

fn assemble(ts: &[i64], q: &QuoteBlock) -> Vec<PricePoint> {
    let at = |v: &[Option<f64>], i: usize| v.get(i).copied().flatten();
    ts.iter()
        .enumerate()
        .filter_map(|(i, &t)| {
            Some(PricePoint {
                time: DateTime::from_timestamp(t, 0)?,
                open: at(&q.open, i)?,
                high: at(&q.high, i)?,
                low: at(&q.low, i)?,
                close: at(&q.close, i)?,
                volume: q.volume.get(i).copied().flatten(),
            })
        })
        .collect()
}
