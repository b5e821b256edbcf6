use crate::common::{analyzer, article, article_with_content};

#[test]
fn excluded_acronyms_are_never_tickers() {
    let report = analyzer().analyze(
        &[article("CEO says AI and IT budgets are growing", "US GDP and EU IPO data")],
        "",
    );

    assert!(report.news[0].relevant_stocks.is_empty());
    assert!(report.score("IT").is_none());
}

#[test]
fn excluded_symbol_is_still_reachable_by_company_name() {
    let report = analyzer().analyze(&[article("Gartner raises IT spending forecast", "")], "");

    assert_eq!(report.news[0].relevant_stocks, vec!["IT"]);
    let it = report.score("IT").expect("IT ranked");
    assert!(!it.direct_mention);
    assert!(it.company_name_mention);
    assert_eq!(it.raw_score, 2.0);
}

#[test]
fn every_symbol_token_adds_weight() {
    let report = analyzer().analyze(&[article("NVDA and NVDA again", "")], "");

    let nvda = report.score("NVDA").unwrap();
    assert_eq!(nvda.direct_hits, 2);
    assert_eq!(nvda.raw_score, 6.0);
    assert_eq!(nvda.cited_article_titles.len(), 1);
}

#[test]
fn company_name_counts_once_per_article() {
    let report = analyzer().analyze(&[article("Tesla, Tesla, Tesla", "")], "");

    let tsla = report.score("TSLA").unwrap();
    assert_eq!(tsla.company_hits, 1);
    assert_eq!(tsla.raw_score, 2.0);
}

#[test]
fn company_names_match_case_insensitively_but_symbols_do_not() {
    let report = analyzer().analyze(&[article("NETFLIX adds subscribers", "nflx shares")], "");

    let stocks = &report.news[0].relevant_stocks;
    assert_eq!(stocks, &vec!["NFLX".to_string()]);
    let nflx = report.score("NFLX").unwrap();
    assert!(!nflx.direct_mention, "lowercase nflx is not a symbol token");
    assert!(nflx.company_name_mention);
}

#[test]
fn relevant_stocks_are_deduplicated_in_first_seen_order() {
    let news = [article_with_content(
        "MSFT and AAPL rally",
        "Microsoft and Apple lead",
        "AAPL again, then MSFT, then Google",
    )];
    let report = analyzer().analyze(&news, "");

    assert_eq!(report.news[0].relevant_stocks, vec!["MSFT", "AAPL", "GOOGL"]);
}

#[test]
fn extra_symbols_score_by_direct_mention_only() {
    let report = analyzer().analyze(&[article("SPY closes flat", "")], "");

    let spy = &report.opportunities[0];
    assert_eq!(spy.ticker, "SPY");
    assert_eq!(spy.news_references.len(), 1);
    assert_eq!(report.news[0].relevant_stocks, vec!["SPY"]);
}

#[test]
fn one_article_can_feed_many_tickers() {
    let report = analyzer().analyze(&[article("JPM, GS and Visa report", "")], "");

    assert_eq!(report.news[0].relevant_stocks, vec!["JPM", "GS", "V"]);
    let picked: Vec<_> = report.opportunities.iter().map(|o| o.ticker.as_str()).collect();
    assert_eq!(picked, ["JPM", "GS", "V"]);
}
