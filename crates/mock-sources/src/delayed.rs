//! Delayed source - wraps another source with artificial delay.

use std::time::Duration;

use composition_core::{async_trait, IngredientRecord, IngredientSource, SourceError};
use tokio::time::sleep;

/// A source that wraps another source and adds artificial delay.
///
/// Useful for testing timeout handling and simulating network latency.
pub struct DelayedSource<S: IngredientSource> {
    inner: S,
    delay: Duration,
}

impl<S: IngredientSource> DelayedSource<S> {
    /// Create a new DelayedSource wrapping the given source with the specified delay.
    pub fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create a source with a delay in milliseconds.
    pub fn with_millis(inner: S, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: IngredientSource> IngredientSource for DelayedSource<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn lookup(&self, ingredient: &str) -> Result<Option<IngredientRecord>, SourceError> {
        sleep(self.delay).await;
        self.inner.lookup(ingredient).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticSource;
    use std::time::Instant;

    #[tokio::test]
    async fn test_delayed_source() {
        let inner = StaticSource::new("static").with_record(IngredientRecord::unknown("Foo"));
        let source = DelayedSource::with_millis(inner, 100);

        let start = Instant::now();
        let record = source.lookup("Foo").await.unwrap();
        let elapsed = start.elapsed();

        assert!(record.is_some());
        assert!(elapsed >= Duration::from_millis(100));
        assert_eq!(source.inner().calls(), 1);
        assert_eq!(source.name(), "static");
    }
}
