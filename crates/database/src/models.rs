//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored key-value entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Entry {
    pub key: String,
    /// Serialized blob, usually JSON.
    pub value: String,
    /// Last update timestamp.
    pub updated_at: String,
}
