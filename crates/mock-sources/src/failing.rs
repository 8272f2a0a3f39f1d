//! Failing source - every lookup errors.

use composition_core::{async_trait, IngredientRecord, IngredientSource, SourceError};

/// A source whose lookups always fail with an HTTP error.
///
/// Useful for testing that resolution degrades to "no data".
#[derive(Debug, Clone)]
pub struct FailingSource {
    name: String,
}

impl FailingSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl IngredientSource for FailingSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn lookup(&self, _ingredient: &str) -> Result<Option<IngredientRecord>, SourceError> {
        Err(SourceError::Http("connection refused".to_string()))
    }
}
