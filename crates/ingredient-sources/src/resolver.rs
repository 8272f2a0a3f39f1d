//! Tiered external resolution of ingredients the registry does not know.

use std::sync::Arc;
use std::time::Duration;

use composition_core::{IngredientCategory, IngredientRecord, IngredientSource};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Default cap on a single source lookup.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Consults external sources in order until one classifies the ingredient.
///
/// A record with a known category ends the search. Otherwise the next
/// source is tried, and the most recent unclassified record is returned
/// when nobody does better. Errors and timeouts count as "no data" for that
/// source; resolution itself never fails.
pub struct ExternalResolver {
    sources: Vec<Arc<dyn IngredientSource>>,
    lookup_timeout: Duration,
}

impl ExternalResolver {
    /// Create a resolver with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    /// Append a source. Sources are consulted in insertion order.
    pub fn with_source(mut self, source: Arc<dyn IngredientSource>) -> Self {
        info!("Registered ingredient source: {}", source.name());
        self.sources.push(source);
        self
    }

    pub fn with_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }

    /// Names of the registered sources, in order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Resolve an ingredient by its English name.
    pub async fn resolve(&self, name: &str) -> Option<IngredientRecord> {
        let mut fallback = None;

        for source in &self.sources {
            let record = match timeout(self.lookup_timeout, source.lookup(name)).await {
                Ok(Ok(record)) => record,
                Ok(Err(e)) => {
                    warn!("Source {} failed for '{}': {}", source.name(), name, e);
                    None
                }
                Err(_) => {
                    warn!("Source {} timed out for '{}'", source.name(), name);
                    None
                }
            };

            match record {
                Some(record) if record.category != IngredientCategory::Unknown => {
                    debug!("'{}' classified by {}", name, source.name());
                    return Some(record);
                }
                Some(record) => fallback = Some(record),
                None => {}
            }
        }

        if fallback.is_none() {
            debug!("No external data for '{}'", name);
        }
        fallback
    }
}

impl Default for ExternalResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composition_core::IngredientColor;
    use mock_sources::{DelayedSource, FailingSource, StaticSource};

    fn classified(name: &str, category: IngredientCategory) -> IngredientRecord {
        let mut record = IngredientRecord::unknown(name);
        record.category = category;
        record.category_label = category.label().to_string();
        record.color = IngredientColor::Green;
        record
    }

    #[tokio::test]
    async fn test_primary_classification_wins() {
        let primary = Arc::new(StaticSource::new("obf").with_record(classified("Squalane", IngredientCategory::Emollient)));
        let secondary = Arc::new(StaticSource::new("wiki").with_record(classified("Squalane", IngredientCategory::Active)));
        let resolver = ExternalResolver::new()
            .with_source(primary.clone())
            .with_source(secondary.clone());

        let record = resolver.resolve("Squalane").await.unwrap();
        assert_eq!(record.category, IngredientCategory::Emollient);
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn test_unclassified_primary_falls_through() {
        let primary = Arc::new(StaticSource::new("obf").with_record(IngredientRecord::unknown("Foo")));
        let secondary = Arc::new(StaticSource::new("wiki").with_record(classified("Foo", IngredientCategory::Solvent)));
        let resolver = ExternalResolver::new().with_source(primary).with_source(secondary);

        assert_eq!(resolver.resolve("Foo").await.unwrap().category, IngredientCategory::Solvent);
    }

    #[tokio::test]
    async fn test_unclassified_primary_kept_when_secondary_empty() {
        let primary = Arc::new(StaticSource::new("obf").with_record(IngredientRecord::unknown("Foo")));
        let secondary = Arc::new(StaticSource::new("wiki"));
        let resolver = ExternalResolver::new().with_source(primary).with_source(secondary);

        let record = resolver.resolve("Foo").await.unwrap();
        assert_eq!(record.category, IngredientCategory::Unknown);
    }

    #[tokio::test]
    async fn test_errors_and_timeouts_are_no_data() {
        let slow = DelayedSource::with_millis(
            StaticSource::new("slow").with_record(classified("Foo", IngredientCategory::Solvent)),
            200,
        );
        let resolver = ExternalResolver::new()
            .with_source(Arc::new(FailingSource::new("broken")))
            .with_source(Arc::new(slow))
            .with_timeout(Duration::from_millis(20));

        assert!(resolver.resolve("Foo").await.is_none());
    }

    #[tokio::test]
    async fn test_empty_resolver() {
        let resolver = ExternalResolver::new();
        assert!(resolver.is_empty());
        assert!(resolver.resolve("Anything").await.is_none());
    }

    #[test]
    fn test_source_names() {
        let resolver = ExternalResolver::new()
            .with_source(Arc::new(StaticSource::new("a")))
            .with_source(Arc::new(FailingSource::new("b")));
        assert_eq!(resolver.source_names(), vec!["a", "b"]);
    }
}
