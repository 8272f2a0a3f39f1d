//! Saved analyses, newest first.

use std::sync::Arc;

use composition_core::{AnalysisResult, HistoryItem, KeyValueStore};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::error::AnalysisError;

/// Storage key for the history list.
pub const HISTORY_KEY: &str = "cosmetic_scanner_history";

/// Product name used when neither the caller nor the analysis supplies one.
pub const UNTITLED: &str = "Без названия";

/// History storage backed by the key-value store.
///
/// Every read-modify-write runs under one lock so concurrent saves are not
/// lost.
pub struct HistoryStore {
    store: Arc<dyn KeyValueStore>,
    lock: Mutex<()>,
}

impl HistoryStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    /// All items, newest first. Unreadable history reads as empty.
    pub async fn list(&self) -> Vec<HistoryItem> {
        self.try_list().await.unwrap_or_else(|e| {
            warn!("Failed to load history: {}", e);
            Vec::new()
        })
    }

    /// All items, failing when storage cannot be read.
    ///
    /// A corrupt blob still reads as empty; it cannot be recovered anyway.
    async fn try_list(&self) -> Result<Vec<HistoryItem>, AnalysisError> {
        match self.store.get(HISTORY_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Ignoring corrupt history: {}", e);
                Vec::new()
            })),
            None => Ok(Vec::new()),
        }
    }

    pub async fn get(&self, id: &str) -> Option<HistoryItem> {
        self.list().await.into_iter().find(|item| item.id == id)
    }

    /// Save an analysis at the top of the history.
    ///
    /// An existing item with the same id is replaced. If the stored history
    /// cannot be read, nothing is written.
    pub async fn save(&self, analysis: AnalysisResult, product_name: Option<&str>) -> Result<HistoryItem, AnalysisError> {
        let name = product_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .or_else(|| Some(analysis.product_name.trim()).filter(|n| !n.is_empty()))
            .unwrap_or(UNTITLED)
            .to_string();
        let item = HistoryItem::from_analysis(analysis, name);

        let _guard = self.lock.lock().await;
        let mut items = self.try_list().await?;
        items.retain(|existing| existing.id != item.id);
        items.insert(0, item.clone());
        self.write(&items).await?;

        info!("Saved '{}' to history", item.product_name);
        Ok(item)
    }

    /// Remove an item. Returns whether it existed.
    pub async fn remove(&self, id: &str) -> Result<bool, AnalysisError> {
        let _guard = self.lock.lock().await;
        let mut items = self.try_list().await?;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Ok(false);
        }
        self.write(&items).await?;
        Ok(true)
    }

    pub async fn clear(&self) -> Result<(), AnalysisError> {
        let _guard = self.lock.lock().await;
        self.store.remove(HISTORY_KEY).await?;
        Ok(())
    }

    /// Replace the whole history.
    pub async fn import(&self, items: Vec<HistoryItem>) -> Result<(), AnalysisError> {
        let _guard = self.lock.lock().await;
        self.write(&items).await
    }

    async fn write(&self, items: &[HistoryItem]) -> Result<(), AnalysisError> {
        let raw = serde_json::to_string(items)?;
        self.store.set(HISTORY_KEY, &raw).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use composition_core::{IngredientColor, MemoryStore};
    use mock_sources::FlakyStore;

    fn analysis(id: &str, product_name: &str) -> AnalysisResult {
        AnalysisResult {
            id: id.to_string(),
            date: Utc::now(),
            product_name: product_name.to_string(),
            barcode: None,
            raw_ingredients: "Aqua".to_string(),
            ingredients: Vec::new(),
            overall_rating: IngredientColor::Gray,
            overall_text: "Недостаточно данных".to_string(),
            actives: Vec::new(),
            warnings: Vec::new(),
            personal_warnings: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    fn history() -> HistoryStore {
        HistoryStore::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_newest_first_and_replace_same_id() {
        let h = history();
        h.save(analysis("a", "First"), None).await.unwrap();
        h.save(analysis("b", "Second"), None).await.unwrap();
        h.save(analysis("a", "First again"), None).await.unwrap();

        let ids: Vec<String> = h.list().await.into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(h.get("a").await.unwrap().product_name, "First again");
    }

    #[tokio::test]
    async fn test_product_name_fallbacks() {
        let h = history();
        assert_eq!(h.save(analysis("a", "From analysis"), Some("Given")).await.unwrap().product_name, "Given");
        assert_eq!(h.save(analysis("b", "From analysis"), Some("  ")).await.unwrap().product_name, "From analysis");
        assert_eq!(h.save(analysis("c", ""), None).await.unwrap().product_name, UNTITLED);
    }

    #[tokio::test]
    async fn test_remove_clear_import() {
        let h = history();
        h.save(analysis("a", "A"), None).await.unwrap();
        h.save(analysis("b", "B"), None).await.unwrap();

        assert!(h.remove("a").await.unwrap());
        assert!(!h.remove("missing").await.unwrap());
        assert_eq!(h.list().await.len(), 1);

        h.clear().await.unwrap();
        assert!(h.list().await.is_empty());

        let imported = vec![HistoryItem::from_analysis(analysis("z", "Z"), "Z")];
        h.import(imported.clone()).await.unwrap();
        assert_eq!(h.list().await, imported);
    }

    #[tokio::test]
    async fn test_concurrent_saves_not_lost() {
        let h = Arc::new(history());
        let tasks: Vec<_> = (0..8)
            .map(|k| {
                let h = h.clone();
                tokio::spawn(async move { h.save(analysis(&k.to_string(), "P"), None).await.unwrap() })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(h.list().await.len(), 8);
    }

    #[tokio::test]
    async fn test_failed_read_does_not_overwrite() {
        let store = Arc::new(FlakyStore::new());
        let h = HistoryStore::new(store.clone());
        for id in ["a", "b", "c"] {
            h.save(analysis(id, "P"), None).await.unwrap();
        }

        store.fail_next_reads(1);
        assert!(matches!(h.save(analysis("d", "P"), None).await, Err(AnalysisError::Storage(_))));
        assert_eq!(h.list().await.len(), 3);

        store.fail_next_reads(1);
        assert!(h.remove("a").await.is_err());

        h.save(analysis("d", "P"), None).await.unwrap();
        let ids: Vec<String> = h.list().await.into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["d", "c", "b", "a"]);
    }
}
