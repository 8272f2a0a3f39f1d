//! Error types for analysis operations.

use composition_core::StorageError;
use thiserror::Error;

/// Errors surfaced to the user.
///
/// Analysis itself never fails; these cover input validation, barcode
/// lookup and explicit backup actions.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Composition text is too short to analyze.
    #[error("composition must be at least {min} characters")]
    InputTooShort { min: usize },

    /// No product, or a product without ingredients, for this barcode.
    #[error("barcode not found: {0}")]
    BarcodeNotFound(String),

    /// Backup document is missing required fields or malformed.
    #[error("invalid backup: {0}")]
    InvalidBackup(String),

    /// Storage read or write failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
