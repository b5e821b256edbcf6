use news_radar::{Selection, SelectionMethod};

use crate::common::{analyzer, article};

#[test]
fn strong_industry_match_scores_and_cites_every_ticker_in_the_industry() {
    let report = analyzer().analyze(
        &[article("Chipmaker outlook", "semiconductor wafer supply tightens")],
        "",
    );

    // chipmaker + semiconductor + wafer
    assert!(matches!(report.selection(), Selection::Scored(_)));
    let picked: Vec<_> = report.opportunities.iter().map(|o| o.ticker.as_str()).collect();
    assert_eq!(picked, ["NVDA", "AMD", "INTC"]);

    let nvda = report.score("NVDA").unwrap();
    assert_eq!(nvda.industry_relevance, 3.0);
    assert_eq!(nvda.raw_score, 1.5);
    assert_eq!(nvda.cited_article_titles, vec!["Chipmaker outlook"]);

    let opp = &report.opportunities[0];
    assert_eq!(opp.selection_method, SelectionMethod::Industry);
    assert!(!opp.is_fallback);
    // 1.5 * 5 + 3 * 2
    assert_eq!(opp.confidence, 13);
}

#[test]
fn single_keyword_hit_scores_but_does_not_cite() {
    let news = [article("Software glitch", ""), article("XOM rallies", "")];
    let report = analyzer().analyze(&news, "");

    let picked: Vec<_> = report.opportunities.iter().map(|o| o.ticker.as_str()).collect();
    assert_eq!(picked, ["XOM", "AAPL", "MSFT"]);

    let aapl = report.score("AAPL").unwrap();
    assert_eq!(aapl.industry_relevance, 1.0);
    assert_eq!(aapl.raw_score, 0.5);
    assert!(aapl.cited_article_titles.is_empty());

    let opp = &report.opportunities[1];
    assert_eq!(opp.selection_method, SelectionMethod::Industry);
    assert!(opp.is_fallback, "industry relevance below 2 is a weak pick");
}

#[test]
fn weak_industry_signal_alone_triggers_the_fallback_cascade() {
    // two technology hits: relevance 2 is not above the threshold
    let report = analyzer().analyze(&[article("Software and internet stocks", "")], "crude oil");

    assert!(matches!(
        report.selection(),
        Selection::IndustryFallback { industry, .. } if industry == "Energy"
    ));
}

#[test]
fn multi_industry_tickers_collect_from_each_industry() {
    // Semiconductors (chips) and Technology (software) both reach NVDA.
    let report = analyzer().analyze(
        &[article("Chips in demand", "software spending"), article("AMZN", "")],
        "",
    );

    let nvda_row = report.score("NVDA");
    let amzn = report.score("AMZN").unwrap();
    assert_eq!(amzn.raw_score, 3.5);
    assert_eq!(amzn.industry_relevance, 1.0);
    assert!(nvda_row.is_some());
    assert_eq!(nvda_row.unwrap().industry_relevance, 2.0);
}
