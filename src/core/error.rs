use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum RadarError {
    /// The analysis request was not a well-formed list of articles.
    ///
    /// No partial output is produced when this is returned.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Reference data (tickers, industries, lexicons) failed validation.
    #[error("invalid lexicon: {0}")]
    Lexicon(String),

    /// An analyzer or client setting is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading a lexicon file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document could not be decoded.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("Not found at {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// The provider is throttling requests (HTTP 429).
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that returned 429.
        url: String,
    },

    /// The provider failed with a 5xx status.
    #[error("Server error {status} at {url}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the provider was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// An invalid date range was provided for a price history request (start must be before end).
    #[error("invalid date range: start must be before end")]
    InvalidDates,
}

impl RadarError {
    /// Maps a non-success HTTP status to the matching error variant.
    pub(crate) fn from_status(code: u16, url: impl Into<String>) -> Self {
        let url = url.into();
        match code {
            404 => Self::NotFound { url },
            429 => Self::RateLimited { url },
            500..=599 => Self::ServerError { status: code, url },
            _ => Self::Status { status: code, url },
        }
    }
}
