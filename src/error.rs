use std::io;
use std::result::Result as StdResult;
use teloxide::RequestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no coin matches query: {0}")]
    NotFound(String),
    #[error("missing id for best match of query: {0}")]
    MissingId(String),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("API connection failed: {0}")]
    ApiConnectionFailed(String),
    #[error("API invalid format: {0}")]
    ApiInvalidFormat(String),
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),
    #[error("missing data: {0}")]
    IncompleteData(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Telegram error: {0}")]
    TelegramError(String),
    #[error("Metrics error: {0}")]
    MetricsError(String),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl Error {
    /// Coarse failure class, used as a metrics label and in operator logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::NotFound(_) | Error::MissingId(_) => "not_found",
            Error::ApiError(_)
            | Error::ApiConnectionFailed(_)
            | Error::ApiInvalidFormat(_)
            | Error::RateLimitExceeded(_)
            | Error::HttpError(_) => "upstream",
            Error::IncompleteData(_) => "incomplete_data",
            Error::ConfigError(_)
            | Error::TelegramError(_)
            | Error::MetricsError(_)
            | Error::IoError(_) => "internal",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ApiInvalidFormat(err.to_string())
    }
}

impl From<RequestError> for Error {
    fn from(err: RequestError) -> Self {
        Error::TelegramError(err.to_string())
    }
}

impl From<prometheus::Error> for Error {
    fn from(err: prometheus::Error) -> Self {
        Error::MetricsError(err.to_string())
    }
}

pub type Result<T> = StdResult<T, Error>;
