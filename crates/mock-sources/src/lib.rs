//! Mock ingredient and product sources for testing.
//!
//! This crate provides test doubles for the `composition-core` source traits:
//! - `StaticSource` - Answers from a fixed table and counts calls
//! - `FailingSource` - Always fails
//! - `DelayedSource` - Wraps another source with artificial delay
//! - `StaticProducts` - Barcode lookup from a fixed table
//! - `FlakyStore` - Key-value store whose reads fail on request
//!
//! For real lookups, use the `ingredient-sources` crate instead.
//!
//! # Example
//!
//! ```rust
//! use composition_core::{IngredientRecord, IngredientSource};
//! use mock_sources::StaticSource;
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = StaticSource::new("test").with_record(IngredientRecord::unknown("Squalane"));
//!
//!     let record = source.lookup("squalane").await.unwrap();
//!     assert!(record.is_some());
//!     assert_eq!(source.calls(), 1);
//! }
//! ```

mod delayed;
mod failing;
mod flaky_store;
mod products;
mod static_source;

pub use composition_core::{async_trait, IngredientSource, KeyValueStore, ProductLookup, SourceError, StorageError};

pub use delayed::DelayedSource;
pub use failing::FailingSource;
pub use flaky_store::FlakyStore;
pub use products::StaticProducts;
pub use static_source::StaticSource;
