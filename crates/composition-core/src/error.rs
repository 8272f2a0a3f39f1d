//! Error types shared across the workspace.

use thiserror::Error;

/// Errors raised by a [`KeyValueStore`](crate::KeyValueStore) implementation.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend rejected or failed the operation.
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A stored blob could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised by an external ingredient or product data source.
///
/// These never abort an analysis; the pipeline logs them and degrades the
/// affected ingredient to "unknown".
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport-level failure (DNS, TLS, connection reset, ...).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The source answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The call did not complete within its time budget.
    #[error("request timed out")]
    Timeout,

    /// The payload could not be parsed.
    #[error("malformed payload: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Parse(e.to_string())
    }
}
