use news_radar::{Analyzer, Sentiment, TickerScore, confidence};

use crate::common::{analyzer, article, article_with_content};

fn row(raw: f64, direct: bool, company: bool, industry: f64) -> TickerScore {
    TickerScore {
        symbol: "TEST".into(),
        raw_score: raw,
        direct_mention: direct,
        company_name_mention: company,
        industry_relevance: industry,
        direct_hits: 0,
        company_hits: 0,
        cited_article_titles: Vec::new(),
    }
}

#[test]
fn confidence_formula_and_cap() {
    assert_eq!(confidence(&row(0.0, false, false, 0.0)), 0);
    assert_eq!(confidence(&row(3.0, true, false, 0.0)), 45);
    assert_eq!(confidence(&row(5.5, true, true, 1.0)), 79);
    assert_eq!(confidence(&row(1.3, false, false, 0.0)), 6);
    assert_eq!(confidence(&row(60.0, true, true, 10.0)), 99);
}

#[test]
fn many_mentions_saturate_at_99() {
    let title = "NVDA ".repeat(20);
    let report = analyzer().analyze(&[article(&title, "")], "");

    assert_eq!(report.opportunities[0].confidence, 99);
}

#[test]
fn references_are_exhaustive_and_carry_snippet_sentiment() {
    let news = [
        article("Tesla recall widens", "Regulators flag a serious crash risk"),
        article("Auto roundup", "TSLA deliveries beat estimates with strong demand"),
        article("Unrelated", "Nothing here"),
    ];
    let report = analyzer().analyze(&news, "electric vehicles");

    let tsla = report.opportunities.iter().find(|o| o.ticker == "TSLA").unwrap();
    assert_eq!(tsla.news_references.len(), 2);
    assert_eq!(tsla.news_references[0].title, "Tesla recall widens");
    assert_eq!(tsla.news_references[0].sentiment, Sentiment::Negative);
    assert_eq!(tsla.news_references[1].sentiment, Sentiment::Positive);
    assert_eq!(tsla.news_references[1].url, news[1].url);
}

#[test]
fn snippet_uses_content_when_description_is_empty_and_is_truncated() {
    let body = "x".repeat(400);
    let news = [article_with_content("Boeing update", "", &body)];

    let report = analyzer().analyze(&news, "");
    let snippet = &report.opportunities[0].news_references[0].snippet;
    assert_eq!(snippet.chars().count(), 150);

    let short = Analyzer::builder().snippet_chars(10).build().unwrap();
    let report = short.analyze(&news, "");
    assert_eq!(report.opportunities[0].news_references[0].snippet, "xxxxxxxxxx");
}

#[test]
fn snippet_truncation_respects_char_boundaries() {
    let news = [article("Boeing update", &"é".repeat(200))];
    let report = analyzer().analyze(&news, "");

    assert_eq!(report.opportunities[0].news_references[0].snippet, "é".repeat(150));
}

#[test]
fn rationale_and_reasons_follow_the_selection_method() {
    let news = [article("AAPL climbs", ""), article("Microsoft partners", "")];
    let report = analyzer().analyze(&news, "cloud");

    let aapl = &report.opportunities[0];
    assert_eq!(aapl.ticker, "AAPL");
    assert_eq!(
        aapl.rationale,
        "AAPL is mentioned directly in news coverage of \"cloud\". See the specific news references below."
    );
    assert_eq!(aapl.reasons.len(), 3);
    assert_eq!(aapl.reasons[1], "The symbol AAPL appears 1 time across the analyzed articles.");
    assert_eq!(aapl.reasons[2], aapl.rationale);

    let msft = &report.opportunities[1];
    assert_eq!(msft.ticker, "MSFT");
    assert!(msft.rationale.starts_with("Microsoft (MSFT) is named in news coverage"));
    assert_eq!(
        msft.reasons[1],
        "Microsoft is mentioned by name in 1 of the analyzed articles."
    );
}

#[test]
fn fallback_rationale_has_no_reference_sentence() {
    let report = analyzer().analyze(&[], "oil prices");

    let opp = &report.opportunities[0];
    assert!(opp.rationale.contains("leading Energy stock"));
    assert!(!opp.rationale.contains("See the specific news references below."));
    assert_eq!(
        opp.reasons[1],
        "Selected from the Energy sector because the search keywords match it."
    );
}
