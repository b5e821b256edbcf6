use chrono::{Duration, Utc};
use news_radar::{Analyzer, Article, MarketClient, market};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    news_radar::init_tracing();

    // 1. A client with a 10-second timeout; retries use the default exponential backoff.
    let client = MarketClient::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    // 2. Autocomplete lookup.
    println!("--- Search: \"tesla\" ---");
    for m in market::search(&client, "tesla").await? {
        println!(
            "  {:<10} {:<30} {}",
            m.symbol,
            m.shortname.unwrap_or_default(),
            m.exch_disp.unwrap_or_default()
        );
    }
    println!();

    // 3. Rank a couple of headlines, then chart the picks.
    let news = [
        Article::new(
            "Oil majors lift output as crude rebounds",
            "Refinery margins improved across the sector.",
            "https://news.example/oil",
        ),
        Article::new(
            "Exxon signs pipeline deal",
            "The agreement expands natural gas capacity.",
            "https://news.example/exxon",
        ),
    ];
    let report = Analyzer::default().analyze(&news, "energy");
    let symbols: Vec<&str> = report
        .opportunities
        .iter()
        .map(|o| o.ticker.as_str())
        .collect();

    let end = Utc::now().date_naive();
    let start = end - Duration::days(30);
    println!("--- Last 30 days for {symbols:?} ---");
    for (symbol, bars) in market::price_histories(&client, &symbols, start, end).await? {
        match (bars.first(), bars.last()) {
            (Some(first), Some(last)) => println!(
                "  {symbol}: {} bars, {:.2} -> {:.2} ({:+.2}%)",
                bars.len(),
                first.close,
                last.close,
                (last.close / first.close - 1.0) * 100.0
            ),
            _ => println!("  {symbol}: no data"),
        }
    }

    Ok(())
}
