//! Flaky store - an in-memory store whose reads can be made to fail.

use std::sync::atomic::{AtomicUsize, Ordering};

use composition_core::{async_trait, KeyValueStore, MemoryStore, StorageError};

/// A [`MemoryStore`] that fails the next `n` reads on request.
///
/// Writes always succeed, so a test can check that a failed read is never
/// followed by an overwrite.
#[derive(Debug, Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    failing_reads: AtomicUsize,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `n` calls to `get` fail.
    pub fn fail_next_reads(&self, n: usize) {
        self.failing_reads.store(n, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let failing = self
            .failing_reads
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(StorageError::Backend("disk I/O error".to_string()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fails_only_requested_reads() {
        let store = FlakyStore::new();
        store.set("k", "v").await.unwrap();
        store.fail_next_reads(1);

        assert!(matches!(store.get("k").await, Err(StorageError::Backend(_))));
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
