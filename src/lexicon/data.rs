//! Built-in reference tables.
//!
//! Sentiment words and industry keywords are matched as plain substrings, so
//! stems that hide inside common words are replaced by longer forms: "rally"
//! sits in "generally", "oil" in "turmoil", "gas" in "Vegas", "bank" in
//! "bankruptcy", "gains" in "against".

use super::model::{IndustryKeywordSet, LexiconData, TickerRecord};

/// symbol, company name, industry
const TICKERS_RAW: &[(&str, &str, &str)] = &[
    ("AAPL", "Apple", "Technology"),
    ("MSFT", "Microsoft", "Technology"),
    ("GOOGL", "Google", "Technology"),
    ("META", "Meta Platforms", "Technology"),
    ("ORCL", "Oracle", "Technology"),
    ("CRM", "Salesforce", "Technology"),
    ("ADBE", "Adobe", "Technology"),
    ("IBM", "IBM", "Technology"),
    ("NOW", "ServiceNow", "Technology"),
    ("IT", "Gartner", "Technology"),
    ("AMZN", "Amazon", "Retail/Technology"),
    ("NVDA", "Nvidia", "Semiconductors/Technology"),
    ("AMD", "Advanced Micro Devices", "Semiconductors/Technology"),
    ("INTC", "Intel Corp", "Semiconductors/Technology"),
    ("QCOM", "Qualcomm", "Semiconductors/Technology"),
    ("TSM", "TSMC", "Semiconductors"),
    ("TSLA", "Tesla", "Automotive/Electric Vehicles"),
    ("RIVN", "Rivian", "Electric Vehicles"),
    ("LCID", "Lucid Group", "Electric Vehicles"),
    ("NIO", "NIO Inc", "Electric Vehicles"),
    ("F", "Ford Motor", "Automotive"),
    ("GM", "General Motors", "Automotive"),
    ("STLA", "Stellantis", "Automotive"),
    ("XOM", "Exxon", "Energy"),
    ("CVX", "Chevron", "Energy"),
    ("COP", "ConocoPhillips", "Energy"),
    ("SLB", "Schlumberger", "Energy"),
    ("OXY", "Occidental Petroleum", "Energy"),
    ("NEE", "NextEra", "Utilities/Energy"),
    ("JPM", "JPMorgan", "Finance"),
    ("BAC", "Bank of America", "Finance"),
    ("GS", "Goldman Sachs", "Finance"),
    ("MS", "Morgan Stanley", "Finance"),
    ("V", "Visa", "Finance"),
    ("MA", "Mastercard", "Finance"),
    ("PYPL", "PayPal", "Finance/Technology"),
    ("JNJ", "Johnson & Johnson", "Healthcare"),
    ("PFE", "Pfizer", "Healthcare"),
    ("MRNA", "Moderna", "Healthcare"),
    ("UNH", "UnitedHealth", "Healthcare"),
    ("LLY", "Eli Lilly", "Healthcare"),
    ("WMT", "Walmart", "Retail"),
    ("COST", "Costco", "Retail"),
    ("HD", "Home Depot", "Retail"),
    ("VZ", "Verizon", "Telecommunications"),
    ("TMUS", "T-Mobile", "Telecommunications"),
    ("CMCSA", "Comcast", "Telecommunications/Entertainment"),
    ("NFLX", "Netflix", "Entertainment"),
    ("DIS", "Disney", "Entertainment"),
    ("BA", "Boeing", "Aerospace"),
    ("LMT", "Lockheed Martin", "Aerospace"),
    ("RTX", "Raytheon", "Aerospace"),
];

const EXTRA_SYMBOLS: &[&str] = &["SPY", "QQQ", "DIA", "IWM", "VOO"];

// IT, NOW and HD are real symbols above; as bare tokens they are almost always
// the acronym, so they only match by company name.
const EXCLUDED_ACRONYMS: &[&str] = &[
    "CEO", "CFO", "CTO", "COO", "IPO", "GDP", "USA", "US", "UK", "EU", "AI", "ETF", "SEC", "FED",
    "CPI", "FDA", "EPS", "IT", "NOW", "HD", "NYSE", "API", "EV", "ESG",
];

const INDUSTRIES_RAW: &[(&str, &[&str])] = &[
    (
        "Technology",
        &[
            "technology",
            "software",
            "cloud computing",
            "smartphone",
            "iphone",
            "artificial intelligence",
            "machine learning",
            "data center",
            "cybersecurity",
            "internet",
        ],
    ),
    (
        "Semiconductors",
        &[
            "semiconductor",
            "chipmaker",
            "chips",
            "gpu",
            "processor",
            "foundry",
            "wafer",
        ],
    ),
    (
        "Electric Vehicles",
        &[
            "electric vehicle",
            "electric car",
            "battery",
            "charging station",
            "lithium",
            "autonomous driving",
            "self-driving",
        ],
    ),
    (
        "Automotive",
        &[
            "automaker",
            "automotive",
            "car sales",
            "vehicle sales",
            "dealership",
            "pickup truck",
        ],
    ),
    (
        "Energy",
        &[
            "oil price",
            "oil output",
            "oil production",
            "oilfield",
            "natural gas",
            "gas price",
            "pipeline",
            "crude",
            "petroleum",
            "drilling",
            "refinery",
            "opec",
            "energy",
        ],
    ),
    (
        "Finance",
        &[
            "banks",
            "banking",
            "interest rate",
            "federal reserve",
            "loans",
            "credit card",
            "payments",
            "mortgage",
            "wall street",
        ],
    ),
    (
        "Healthcare",
        &[
            "healthcare",
            "health care",
            "pharmaceutical",
            "drug",
            "vaccine",
            "biotech",
            "clinical trial",
            "hospitals",
            "medical",
        ],
    ),
    (
        "Retail",
        &[
            "retail",
            "e-commerce",
            "consumer spending",
            "holiday sales",
            "shoppers",
            "store sales",
        ],
    ),
    (
        "Telecommunications",
        &["telecom", "wireless", "5g", "broadband", "mobile carrier"],
    ),
    (
        "Entertainment",
        &[
            "streaming",
            "box office",
            "film",
            "movie",
            "theme park",
            "entertainment",
        ],
    ),
    (
        "Aerospace",
        &[
            "aerospace",
            "defense",
            "aircraft",
            "airline",
            "jet",
            "satellite",
            "missile",
        ],
    ),
];

const POSITIVE_WORDS: &[&str] = &[
    "growth",
    "profit",
    "strong",
    "record",
    "surge",
    "soar",
    "rallies",
    "rallied",
    "jump",
    "beat",
    "upgrade",
    "bullish",
    "outperform",
    "gained",
    "climbed",
    "boost",
    "expansion",
    "breakthrough",
    "optimistic",
    "success",
    "innovation",
];

const NEGATIVE_WORDS: &[&str] = &[
    "loss",
    "decline",
    "drops",
    "dropped",
    "falls",
    "plunge",
    "crash",
    "weak",
    "lawsuit",
    "bankruptcy",
    "risk",
    "downgrade",
    "bearish",
    "layoff",
    "fraud",
    "recall",
    "slump",
    "missed",
    "concern",
    "investigation",
    "warning",
];

const DEFAULT_TICKERS: &[&str] = &["AAPL", "MSFT", "GOOGL"];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

pub(super) fn builtin() -> LexiconData {
    LexiconData {
        tickers: TICKERS_RAW
            .iter()
            .map(|(symbol, company_name, industry)| TickerRecord {
                symbol: (*symbol).to_string(),
                company_name: (*company_name).to_string(),
                industry: (*industry).to_string(),
            })
            .collect(),
        extra_symbols: owned(EXTRA_SYMBOLS),
        excluded_acronyms: owned(EXCLUDED_ACRONYMS),
        industries: INDUSTRIES_RAW
            .iter()
            .map(|(name, keywords)| IndustryKeywordSet {
                name: (*name).to_string(),
                keywords: owned(keywords),
            })
            .collect(),
        positive_words: owned(POSITIVE_WORDS),
        negative_words: owned(NEGATIVE_WORDS),
        default_tickers: owned(DEFAULT_TICKERS),
    }
}
