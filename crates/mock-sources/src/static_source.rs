//! Static source - answers from a fixed table.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use composition_core::{async_trait, IngredientRecord, IngredientSource, SourceError};

/// A source that answers from a fixed table keyed by lowercased name.
///
/// Every lookup is counted, hit or miss.
#[derive(Debug, Default)]
pub struct StaticSource {
    name: String,
    records: HashMap<String, IngredientRecord>,
    calls: AtomicUsize,
}

impl StaticSource {
    /// Create an empty source with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a record, keyed by its own name.
    pub fn with_record(mut self, record: IngredientRecord) -> Self {
        self.records.insert(record.name.to_lowercase(), record);
        self
    }

    /// Number of lookups served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IngredientSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn lookup(&self, ingredient: &str) -> Result<Option<IngredientRecord>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.get(&ingredient.trim().to_lowercase()).cloned())
    }
}
