use news_radar::Analyzer;

const REQUEST: &str = r#"{
  "keywords": "semiconductor supply",
  "startDate": "2024-05-01",
  "endDate": "2024-05-07",
  "news": [
    {
      "title": "NVDA extends rally as data center demand surges",
      "description": "Nvidia posted record revenue on strong GPU sales.",
      "url": "https://news.example/nvda-rally"
    },
    {
      "title": "Chip stocks slip on export concern",
      "description": "Semiconductor shares fell after new restrictions on wafer equipment.",
      "url": "https://news.example/chip-export"
    },
    {
      "title": "Intel Corp faces investigation over foundry delays",
      "description": null,
      "content": "Regulators opened an investigation into delays at the company's foundry unit.",
      "url": "https://news.example/intel-probe"
    }
  ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    news_radar::init_tracing();

    // 1. Analyze a JSON request body with the built-in lexicon.
    let analyzer = Analyzer::default();
    let report = analyzer.analyze_json(REQUEST)?;

    println!("--- Annotated News ---");
    for item in &report.news {
        println!(
            "[{:>8}] {} -> {:?}",
            item.sentiment.as_str(), item.article.title, item.relevant_stocks
        );
    }
    println!();

    // 2. Ranked opportunities with their evidence.
    println!("--- Opportunities ---");
    for opp in &report.opportunities {
        println!(
            "{} ({:?}) confidence {}{}",
            opp.ticker,
            opp.selection_method,
            opp.confidence,
            if opp.is_fallback { " [fallback]" } else { "" }
        );
        println!("  {}", opp.rationale);
        for r in &opp.news_references {
            println!("  - {} [{}]: {}", r.title, r.sentiment, r.snippet);
        }
    }
    println!();

    // 3. The same report as it would go over the wire.
    println!("--- JSON ---");
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
