//! Market-data client surface + builder.
//! Internals are split into `retry` (policy) and `constants` (UA + defaults).

mod constants;
mod retry;

pub use retry::{Backoff, RetryConfig};

use crate::core::RadarError;
use constants::{DEFAULT_BASE_CHART, DEFAULT_BASE_SEARCH, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP client for the ticker autocomplete and price history pass-through.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct MarketClient {
    http: Client,
    base_chart: Url,
    base_search: Url,
    retry: RetryConfig,
}

impl Default for MarketClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl MarketClient {
    /// Create a new builder.
    pub fn builder() -> MarketClientBuilder {
        MarketClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_chart(&self) -> &Url {
        &self.base_chart
    }
    pub(crate) fn base_search(&self) -> &Url {
        &self.base_search
    }

    /// The retry policy applied when a call does not override it.
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Sends `req`, retrying according to `retry_override` or the client default.
    ///
    /// Returns the last response even when its status is a failure; callers map
    /// statuses to errors themselves.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, RadarError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        let mut attempt = 0u32;

        loop {
            // Streaming bodies can't be cloned; send those once.
            let Some(this_req) = req.try_clone() else {
                return Ok(req.send().await?);
            };

            match this_req.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if !cfg.should_retry_status(attempt, status) {
                        return Ok(resp);
                    }
                    #[cfg(feature = "tracing")]
                    tracing::debug!(status, attempt, "retrying after status");
                }
                Err(e) => {
                    if !cfg.should_retry_error(attempt, &e) {
                        return Err(e.into());
                    }
                    #[cfg(feature = "tracing")]
                    tracing::debug!(error = %e, attempt, "retrying after transport error");
                }
            }

            tokio::time::sleep(cfg.backoff.delay(attempt)).await;
            attempt += 1;
        }
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct MarketClientBuilder {
    user_agent: Option<String>,
    base_chart: Option<Url>,
    base_search: Option<Url>,
    retry: Option<RetryConfig>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl MarketClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the chart API base (e.g., `https://query1.finance.yahoo.com/v8/finance/chart/`).
    #[must_use]
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Override the search endpoint (e.g., `https://query2.finance.yahoo.com/v1/finance/search`).
    #[must_use]
    pub fn base_search(mut self, url: Url) -> Self {
        self.base_search = Some(url);
        self
    }

    /// Set the default retry policy.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns `RadarError::Url` if a default endpoint fails to parse, or
    /// `RadarError::Http` if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<MarketClient, RadarError> {
        let base_chart = match self.base_chart {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_CHART)?,
        };
        let base_search = match self.base_search {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_SEARCH)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(MarketClient {
            http: httpb.build()?,
            base_chart,
            base_search,
            retry: self.retry.unwrap_or_default(),
        })
    }
}
