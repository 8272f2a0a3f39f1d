//! TTL cache for remote lookups, persisted through the storage collaborator.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use composition_core::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Storage key prefix for every cache entry.
pub const CACHE_PREFIX: &str = "api_cache_";

/// A cached payload and the moment it was written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub data: T,
    /// Milliseconds since the Unix epoch on the wire.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

/// Normalize a lookup name into a cache key fragment: lowercase, whitespace
/// runs collapsed to `_`.
pub fn normalize_key(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("_")
}

/// Response cache shared by the remote sources.
///
/// Entries older than the TTL are removed on read. Unreadable entries and
/// storage failures count as misses.
#[derive(Clone)]
pub struct ApiCache {
    store: Arc<dyn KeyValueStore>,
    ttl: Duration,
}

impl ApiCache {
    pub fn new(store: Arc<dyn KeyValueStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Read a live entry.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_at(key, Utc::now()).await
    }

    /// Read a live entry as of `now`.
    pub async fn get_at<T: DeserializeOwned>(&self, key: &str, now: DateTime<Utc>) -> Option<T> {
        let storage_key = format!("{}{}", CACHE_PREFIX, key);
        let raw = match self.store.get(&storage_key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Cache read failed for '{}': {}", key, e);
                return None;
            }
        };

        let entry: CacheEntry<T> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Ignoring corrupt cache entry '{}': {}", key, e);
                return None;
            }
        };

        let age = now.signed_duration_since(entry.timestamp);
        let expired = age.to_std().map(|age| age > self.ttl).unwrap_or(false);
        if expired {
            debug!("Cache entry '{}' expired", key);
            if let Err(e) = self.store.remove(&storage_key).await {
                warn!("Failed to evict cache entry '{}': {}", key, e);
            }
            return None;
        }

        debug!("Cache hit for '{}'", key);
        Some(entry.data)
    }

    /// Write an entry stamped with the current time.
    pub async fn set<T: Serialize>(&self, key: &str, data: &T) {
        self.set_at(key, data, Utc::now()).await
    }

    /// Write an entry stamped with `timestamp`. Failures are logged only.
    pub async fn set_at<T: Serialize>(&self, key: &str, data: &T, timestamp: DateTime<Utc>) {
        let entry = CacheEntry { data, timestamp };
        let raw = match serde_json::to_string(&entry) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to encode cache entry '{}': {}", key, e);
                return;
            }
        };
        if let Err(e) = self.store.set(&format!("{}{}", CACHE_PREFIX, key), &raw).await {
            warn!("Failed to save cache entry '{}': {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;
    use composition_core::MemoryStore;

    const WEEK: Duration = Duration::from_secs(7 * 24 * 60 * 60);

    fn cache(store: Arc<MemoryStore>) -> ApiCache {
        ApiCache::new(store, WEEK)
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Cetearyl  Alcohol"), "cetearyl_alcohol");
        assert_eq!(normalize_key(" Aqua\tPurified "), "aqua_purified");
    }

    #[tokio::test]
    async fn test_round_trip() {
        let store = Arc::new(MemoryStore::new());
        let cache = cache(store.clone());
        cache.set("wiki_glycerin", &vec!["a".to_string()]).await;

        let hit: Option<Vec<String>> = cache.get("wiki_glycerin").await;
        assert_eq!(hit, Some(vec!["a".to_string()]));
        assert!(store.get("api_cache_wiki_glycerin").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_expired_entry_is_miss_and_removed() {
        let store = Arc::new(MemoryStore::new());
        let cache = cache(store.clone());
        let written = Utc::now();
        cache.set_at("obf_ing_glycerin", &42u32, written).await;

        let fresh: Option<u32> = cache.get_at("obf_ing_glycerin", written + ChronoDuration::days(6)).await;
        assert_eq!(fresh, Some(42));

        let stale: Option<u32> = cache.get_at("obf_ing_glycerin", written + ChronoDuration::days(8)).await;
        assert_eq!(stale, None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_miss() {
        let store = Arc::new(MemoryStore::new());
        store.set("api_cache_wiki_x", "{not json").await.unwrap();
        let cache = cache(store);
        let hit: Option<u32> = cache.get("wiki_x").await;
        assert!(hit.is_none());
    }

    #[tokio::test]
    async fn test_wire_format_uses_millis() {
        let store = Arc::new(MemoryStore::new());
        let cache = cache(store.clone());
        let ts = DateTime::<Utc>::from_timestamp_millis(1_700_000_000_123).unwrap();
        cache.set_at("k", &"v", ts).await;

        let raw = store.get("api_cache_k").await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["timestamp"], 1_700_000_000_123i64);
        assert_eq!(value["data"], "v");
    }
}
