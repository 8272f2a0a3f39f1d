//! [`KeyValueStore`] backed by the `kv_store` table.

use async_trait::async_trait;
use composition_core::{KeyValueStore, StorageError};
use tracing::debug;

use crate::{kv, Database};

/// SQLite implementation of the storage collaborator.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Wrap a connected, migrated database.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Connect, run migrations and wrap the database.
    pub async fn open(url: &str) -> crate::Result<Self> {
        let db = Database::connect(url).await?;
        db.migrate().await?;
        Ok(Self::new(db))
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entry = kv::get_entry(self.db.pool(), key).await?;
        Ok(entry.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        kv::set_value(self.db.pool(), key, value).await?;
        debug!("Stored {} ({} bytes)", key, value.len());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        if kv::delete_value(self.db.pool(), key).await? {
            debug!("Removed {}", key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    async fn test_store() -> SqliteStore {
        let db = Database::connect_with_pool_size("sqlite::memory:", 1).await.unwrap();
        db.migrate().await.unwrap();
        SqliteStore::new(db)
    }

    #[tokio::test]
    async fn test_get_set_remove() {
        let store = test_store().await;

        assert_eq!(store.get("profile").await.unwrap(), None);

        store.set("profile", r#"{"skinTypes":[]}"#).await.unwrap();
        assert_eq!(store.get("profile").await.unwrap().as_deref(), Some(r#"{"skinTypes":[]}"#));

        store.set("profile", "{}").await.unwrap();
        assert_eq!(store.get("profile").await.unwrap().as_deref(), Some("{}"));

        store.remove("profile").await.unwrap();
        assert_eq!(store.get("profile").await.unwrap(), None);

        // Removing an absent key is fine.
        store.remove("profile").await.unwrap();
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let store: Arc<dyn KeyValueStore> = Arc::new(test_store().await);
        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();
        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_closed_pool_reports_backend_error() {
        let store = test_store().await;
        store.database().close().await;
        assert!(matches!(store.get("a").await, Err(StorageError::Backend(_))));
    }
}
