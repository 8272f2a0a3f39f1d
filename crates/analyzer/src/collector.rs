//! Collector for ingredients that no data source could classify.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use composition_core::{KeyValueStore, MissingIngredientRecord, StorageError};
use indexmap::IndexMap;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Storage key for the collected list.
pub const MISSING_INGREDIENTS_KEY: &str = "cosmetic_scanner_missing_ingredients";

/// Product names remembered per ingredient.
pub const MAX_PRODUCTS: usize = 10;

#[derive(Default)]
struct State {
    /// Records by lowercased name, `None` until loaded from storage.
    records: Option<IndexMap<String, MissingIngredientRecord>>,
    dirty: bool,
    pending: Option<JoinHandle<()>>,
}

struct Inner {
    store: Arc<dyn KeyValueStore>,
    debounce: Duration,
    state: Mutex<State>,
}

/// Buffered, debounced record of unresolved ingredient names.
///
/// Writes land in memory and are persisted once no new write has arrived for
/// the debounce period. Call [`flush`](Self::flush) before shutdown or the
/// last batch is lost.
#[derive(Clone)]
pub struct MissingIngredientCollector {
    inner: Arc<Inner>,
}

impl MissingIngredientCollector {
    pub fn new(store: Arc<dyn KeyValueStore>, debounce: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                debounce,
                state: Mutex::new(State::default()),
            }),
        }
    }

    /// Record one occurrence of an unresolved ingredient.
    pub async fn add(&self, name: &str, product: Option<&str>) {
        self.add_at(name, product, Utc::now()).await
    }

    /// Record one occurrence as of `now`.
    pub async fn add_at(&self, name: &str, product: Option<&str>, now: DateTime<Utc>) {
        let name = name.trim();
        if name.chars().count() < 2 {
            return;
        }
        let product = product.map(str::trim).filter(|p| !p.is_empty());

        let mut state = self.inner.state.lock().await;
        let records = match self.inner.loaded(&mut state).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Dropping missing ingredient '{}': {}", name, e);
                return;
            }
        };

        match records.get_mut(&name.to_lowercase()) {
            Some(record) => {
                record.count += 1;
                record.last_seen = now;
                if let Some(product) = product {
                    remember_product(&mut record.products, product);
                }
            }
            None => {
                records.insert(
                    name.to_lowercase(),
                    MissingIngredientRecord {
                        name: name.to_string(),
                        count: 1,
                        first_seen: now,
                        last_seen: now,
                        products: product.map(|p| vec![p.to_string()]).unwrap_or_default(),
                    },
                );
            }
        }

        state.dirty = true;
        self.schedule_flush(&mut state);
    }

    /// All records, most frequent first. Ties keep first-seen order.
    pub async fn list(&self) -> Vec<MissingIngredientRecord> {
        let mut state = self.inner.state.lock().await;
        let mut records: Vec<_> = match self.inner.loaded(&mut state).await {
            Ok(records) => records.values().cloned().collect(),
            Err(e) => {
                warn!("Failed to load missing ingredients: {}", e);
                return Vec::new();
            }
        };
        records.sort_by(|a, b| b.count.cmp(&a.count));
        records
    }

    /// Number of distinct collected names.
    pub async fn count(&self) -> usize {
        self.list().await.len()
    }

    /// The sorted list as pretty JSON.
    pub async fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.list().await)
    }

    /// Forget everything, in memory and in storage.
    pub async fn clear(&self) -> Result<(), StorageError> {
        let mut state = self.inner.state.lock().await;
        if let Some(handle) = state.pending.take() {
            handle.abort();
        }
        state.records = Some(IndexMap::new());
        state.dirty = false;
        self.inner.store.remove(MISSING_INGREDIENTS_KEY).await?;
        info!("Cleared missing ingredients");
        Ok(())
    }

    /// Persist buffered writes now.
    pub async fn flush(&self) -> Result<(), StorageError> {
        let mut state = self.inner.state.lock().await;
        if let Some(handle) = state.pending.take() {
            handle.abort();
        }
        self.inner.write(&mut state).await
    }

    fn schedule_flush(&self, state: &mut State) {
        if let Some(handle) = state.pending.take() {
            handle.abort();
        }

        let inner = self.inner.clone();
        state.pending = Some(tokio::spawn(async move {
            sleep(inner.debounce).await;
            let mut state = inner.state.lock().await;
            state.pending = None;
            if let Err(e) = inner.write(&mut state).await {
                warn!("Failed to save missing ingredients: {}", e);
            }
        }));
    }
}

impl Inner {
    /// Records, loading them from storage on first use.
    ///
    /// A failed read is not cached, so the next call retries instead of
    /// starting from an empty list that would overwrite stored data.
    async fn loaded<'a>(
        &self,
        state: &'a mut State,
    ) -> Result<&'a mut IndexMap<String, MissingIngredientRecord>, StorageError> {
        if state.records.is_none() {
            let records = match self.store.get(MISSING_INGREDIENTS_KEY).await? {
                Some(raw) => serde_json::from_str::<Vec<MissingIngredientRecord>>(&raw).unwrap_or_else(|e| {
                    warn!("Ignoring corrupt missing ingredient list: {}", e);
                    Vec::new()
                }),
                None => Vec::new(),
            };
            let map = records.into_iter().map(|r| (r.name.to_lowercase(), r)).collect();
            state.records = Some(map);
        }
        Ok(state.records.get_or_insert_with(IndexMap::new))
    }

    async fn write(&self, state: &mut State) -> Result<(), StorageError> {
        if !state.dirty {
            return Ok(());
        }
        let Some(records) = &state.records else {
            return Ok(());
        };

        let list: Vec<&MissingIngredientRecord> = records.values().collect();
        let raw = serde_json::to_string(&list)?;
        self.store.set(MISSING_INGREDIENTS_KEY, &raw).await?;
        state.dirty = false;
        debug!("Saved {} missing ingredients", list.len());
        Ok(())
    }
}

/// Append a product, moving a repeat to the most recent slot.
fn remember_product(products: &mut Vec<String>, product: &str) {
    products.retain(|p| p != product);
    products.push(product.to_string());
    if products.len() > MAX_PRODUCTS {
        let excess = products.len() - MAX_PRODUCTS;
        products.drain(..excess);
    }
}
