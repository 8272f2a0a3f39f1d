//! External ingredient and product data sources.
//!
//! This crate talks to the public databases used when the local registry
//! cannot classify an ingredient:
//!
//! - [`OpenBeautyFacts`] - barcode lookup and per-ingredient function tags
//! - [`Wikipedia`] - summary-based classification fallback
//! - [`ExternalResolver`] - tries sources in order under a per-lookup timeout
//! - [`ApiCache`] - 7-day response cache persisted through a [`KeyValueStore`]
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use composition_core::MemoryStore;
//! use ingredient_lexicon::Translator;
//! use ingredient_sources::{ExternalResolver, OpenBeautyFacts, SourcesConfig, Wikipedia};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = SourcesConfig::from_env();
//!     let store = Arc::new(MemoryStore::new());
//!
//!     let resolver = ExternalResolver::new()
//!         .with_source(Arc::new(OpenBeautyFacts::new(config.clone(), store.clone())))
//!         .with_source(Arc::new(Wikipedia::new(config, store, Arc::new(Translator::builtin()))));
//!
//!     if let Some(record) = resolver.resolve("Squalane").await {
//!         println!("{}: {}", record.name, record.description);
//!     }
//! }
//! ```
//!
//! [`KeyValueStore`]: composition_core::KeyValueStore

mod cache;
mod config;
mod error;
pub mod keywords;
mod open_beauty_facts;
mod resolver;
mod wikipedia;

pub use cache::{normalize_key, ApiCache, CacheEntry, CACHE_PREFIX};
pub use config::SourcesConfig;
pub use error::FetchError;
pub use open_beauty_facts::{
    ingredient_record_from_payload, ingredient_slug, parse_product, IngredientPayload,
    OpenBeautyFacts, ProductIngredient, ProductPayload, UNKNOWN_PRODUCT_NAME,
};
pub use resolver::{ExternalResolver, DEFAULT_LOOKUP_TIMEOUT};
pub use wikipedia::{summary_to_record, Wikipedia};
