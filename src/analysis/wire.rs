//! Strict decoding of the analysis request body.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::RadarError;

use super::model::{AnalyzeRequest, Article};

#[derive(Deserialize)]
struct RequestEnvelope {
    #[serde(default)]
    news: Option<serde_json::Value>,
    #[serde(default)]
    keywords: Option<String>,
    #[serde(default, rename = "startDate")]
    start_date: Option<String>,
    #[serde(default, rename = "endDate")]
    end_date: Option<String>,
}

// null and missing both decode to None; any other non-string is rejected.
#[derive(Deserialize)]
struct WireArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default, rename = "publishedAt")]
    published_at: Option<String>,
}

impl From<WireArticle> for Article {
    fn from(w: WireArticle) -> Self {
        Self {
            title: w.title.unwrap_or_default(),
            description: w.description.unwrap_or_default(),
            content: w.content,
            url: w.url.unwrap_or_default(),
            published_at: w.published_at,
        }
    }
}

pub(crate) fn parse_request(body: &str) -> Result<AnalyzeRequest, RadarError> {
    let malformed =
        |e: serde_json::Error| RadarError::InvalidInput(format!("malformed request: {e}"));
    // Derived struct decoding also accepts a positional array.
    let raw: serde_json::Value = serde_json::from_str(body).map_err(malformed)?;
    if !raw.is_object() {
        return Err(RadarError::InvalidInput("request must be a JSON object".into()));
    }
    let env: RequestEnvelope = serde_json::from_value(raw).map_err(malformed)?;

    let news = match env.news {
        Some(serde_json::Value::Array(items)) => items,
        Some(serde_json::Value::Null) | None => {
            return Err(RadarError::InvalidInput("missing news list".into()));
        }
        Some(_) => return Err(RadarError::InvalidInput("news must be an array".into())),
    };

    let news = news
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            if !item.is_object() {
                return Err(RadarError::InvalidInput(format!("news[{i}] is not an object")));
            }
            serde_json::from_value::<WireArticle>(item)
                .map(Article::from)
                .map_err(|e| RadarError::InvalidInput(format!("news[{i}]: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AnalyzeRequest {
        news,
        keywords: env.keywords.unwrap_or_default(),
        start_date: parse_date(env.start_date.as_deref(), "startDate")?,
        end_date: parse_date(env.end_date.as_deref(), "endDate")?,
    })
}

fn parse_date(raw: Option<&str>, field: &str) -> Result<Option<NaiveDate>, RadarError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| RadarError::InvalidInput(format!("{field} {s:?}: {e}"))),
    }
}
