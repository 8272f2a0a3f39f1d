//! Error types for remote fetches.

use composition_core::SourceError;
use thiserror::Error;

/// Errors raised while talking to a remote source.
///
/// Converted into [`SourceError`] at the trait boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success status other than 404.
    #[error("unexpected status {0}")]
    Status(u16),
}

impl From<FetchError> for SourceError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Http(e) if e.is_timeout() => SourceError::Timeout,
            FetchError::Http(e) if e.is_decode() => SourceError::Parse(e.to_string()),
            FetchError::Http(e) => SourceError::Http(e.to_string()),
            FetchError::Json(e) => SourceError::Parse(e.to_string()),
            FetchError::Status(code) => SourceError::Status(code),
        }
    }
}
