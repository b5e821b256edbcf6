use std::time::Duration;

use chrono::NaiveDate;
use httpmock::Method::GET;
use httpmock::MockServer;
use news_radar::market::{self, PriceHistoryBuilder, TickerSearchBuilder};
use news_radar::{Backoff, MarketClient, RadarError, RetryConfig};
use url::Url;

fn fast_retry(max_retries: u32) -> RetryConfig {
    RetryConfig {
        max_retries,
        backoff: Backoff::Fixed(Duration::from_millis(1)),
        ..RetryConfig::default()
    }
}

fn client_for(server: &MockServer, retry: RetryConfig) -> MarketClient {
    MarketClient::builder()
        .base_chart(Url::parse(&format!("{}/v8/finance/chart/", server.base_url())).unwrap())
        .base_search(Url::parse(&format!("{}/v1/finance/search", server.base_url())).unwrap())
        .retry_config(retry)
        .build()
        .unwrap()
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

#[tokio::test]
async fn retries_retryable_status_then_gives_up() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/finance/search");
        then.status(503);
    });

    let client = client_for(&server, fast_retry(2));
    let err = market::search(&client, "apple").await.unwrap_err();

    // first attempt plus two retries
    mock.assert_calls(3);
    match err {
        RadarError::ServerError { status, .. } => assert_eq!(status, 503),
        other => panic!("expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn does_not_retry_not_found() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/NOPE");
        then.status(404);
    });

    let client = client_for(&server, fast_retry(3));
    let err = market::price_history(&client, "NOPE", day(2), day(5))
        .await
        .unwrap_err();

    mock.assert_calls(1);
    assert!(matches!(err, RadarError::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn rate_limit_is_reported_after_retries() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/finance/search");
        then.status(429);
    });

    let client = client_for(&server, fast_retry(1));
    let err = market::search(&client, "apple").await.unwrap_err();

    mock.assert_calls(2);
    assert!(matches!(err, RadarError::RateLimited { .. }), "got {err:?}");
}

#[tokio::test]
async fn per_call_override_disables_retries() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/AAPL");
        then.status(500);
    });

    let client = client_for(&server, fast_retry(4));
    let err = PriceHistoryBuilder::new(&client, "AAPL", day(2), day(5))
        .retry_policy(Some(RetryConfig::disabled()))
        .fetch()
        .await
        .unwrap_err();

    mock.assert_calls(1);
    assert!(matches!(err, RadarError::ServerError { status: 500, .. }), "got {err:?}");
}

#[tokio::test]
async fn other_client_errors_map_to_status() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/finance/search");
        then.status(403);
    });

    let client = client_for(&server, fast_retry(2));
    let err = TickerSearchBuilder::new(&client, "apple")
        .fetch()
        .await
        .unwrap_err();

    mock.assert_calls(1);
    assert!(matches!(err, RadarError::Status { status: 403, .. }), "got {err:?}");
}

#[test]
fn default_policy_retries_transient_statuses() {
    let cfg = RetryConfig::default();
    assert!(cfg.enabled);
    assert_eq!(cfg.max_retries, 4);
    assert_eq!(cfg.retry_on_status, [408, 429, 500, 502, 503, 504]);
    assert!(!RetryConfig::disabled().enabled);
    assert!(MarketClient::default().retry_config().enabled);
}
