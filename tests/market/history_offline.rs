use chrono::{NaiveDate, TimeZone, Utc};
use httpmock::Method::GET;
use httpmock::MockServer;
use news_radar::market::{self, PriceHistoryBuilder};
use news_radar::{MarketClient, RadarError, RetryConfig};
use url::Url;

fn client_for(server: &MockServer) -> MarketClient {
    MarketClient::builder()
        .base_chart(Url::parse(&format!("{}/v8/finance/chart/", server.base_url())).unwrap())
        .retry_config(RetryConfig::disabled())
        .build()
        .unwrap()
}

fn window() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
    )
}

#[tokio::test]
async fn offline_history_uses_recorded_fixture() {
    let server = MockServer::start();
    let sym = "AAPL";
    let (start, end) = window();

    // end date is inclusive: period2 is midnight after 2024-01-05
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v8/finance/chart/{sym}"))
            .query_param("period1", "1704153600")
            .query_param("period2", "1704499200")
            .query_param("interval", "1d")
            .query_param("includePrePost", "false");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::fixture("history_chart", sym, "json"));
    });

    let client = client_for(&server);
    let bars = market::price_history(&client, sym, start, end).await.unwrap();

    mock.assert();

    // the 2024-01-04 row has a null close and is dropped
    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].time, Utc.with_ymd_and_hms(2024, 1, 2, 14, 30, 0).unwrap());
    assert!((bars[0].close - 185.64).abs() < 1e-9);
    assert_eq!(bars[0].volume, Some(82_488_700));
    assert_eq!(bars[2].time, Utc.with_ymd_and_hms(2024, 1, 5, 14, 30, 0).unwrap());
    assert_eq!(bars[2].volume, None);
    assert!(bars.windows(2).all(|w| w[0].time < w[1].time));
}

#[tokio::test]
async fn histories_for_several_symbols_keep_input_order() {
    let server = MockServer::start();
    for sym in ["AAPL", "MSFT"] {
        server.mock(|when, then| {
            when.method(GET).path(format!("/v8/finance/chart/{sym}"));
            then.status(200)
                .header("content-type", "application/json")
                .body(crate::common::fixture("history_chart", sym, "json"));
        });
    }

    let (start, end) = window();
    let out = market::price_histories(&client_for(&server), &["MSFT", "AAPL"], start, end)
        .await
        .unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].0, "MSFT");
    assert_eq!(out[0].1.len(), 2);
    assert_eq!(out[1].0, "AAPL");
    assert_eq!(out[1].1.len(), 3);
}

#[tokio::test]
async fn one_failing_symbol_fails_the_batch() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/AAPL");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::fixture("history_chart", "AAPL", "json"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/NOPE");
        then.status(404);
    });

    let (start, end) = window();
    let err = market::price_histories(&client_for(&server), &["AAPL", "NOPE"], start, end)
        .await
        .unwrap_err();
    assert!(matches!(err, RadarError::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn provider_error_payload_is_a_data_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/ZZZZ");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#);
    });

    let (start, end) = window();
    let err = market::price_history(&client_for(&server), "ZZZZ", start, end)
        .await
        .unwrap_err();
    match err {
        RadarError::Data(msg) => assert!(msg.contains("Not Found"), "msg: {msg}"),
        other => panic!("expected Data, got {other:?}"),
    }
}

#[tokio::test]
async fn window_without_trading_days_is_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/AAPL");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"chart":{"result":[{"indicators":{"quote":[]}}],"error":null}}"#);
    });

    let (start, end) = window();
    let bars = market::price_history(&client_for(&server), "AAPL", start, end)
        .await
        .unwrap();
    assert!(bars.is_empty());
}

#[tokio::test]
async fn invalid_arguments_are_rejected_without_a_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("{}");
    });
    let client = client_for(&server);
    let (start, end) = window();

    let err = PriceHistoryBuilder::new(&client, "AAPL", end, start)
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, RadarError::InvalidDates));

    let err = market::price_history(&client, "AAPL", start, start)
        .await
        .unwrap_err();
    assert!(matches!(err, RadarError::InvalidDates));

    let err = market::price_history(&client, " ", start, end)
        .await
        .unwrap_err();
    assert!(matches!(err, RadarError::InvalidInput(ref m) if m == "missing ticker"));

    mock.assert_calls(0);
}
