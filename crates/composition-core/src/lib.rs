//! Core data model and collaborator traits for composition analysis.
//!
//! This crate provides the shared vocabulary used by every other crate in
//! the cosmetic scanner workspace. It defines:
//!
//! - [`IngredientRecord`] / [`AnalyzedIngredient`] - Ingredient classification data
//! - [`UserProfile`] - Skin types, concerns and preferences used for personalization
//! - [`AnalysisResult`] / [`HistoryItem`] / [`ExportData`] - Analysis output and its persisted forms
//! - [`MissingIngredientRecord`] - Ingredients that no data source could classify
//! - [`IngredientSource`] / [`ProductLookup`] - Traits for external data sources
//! - [`KeyValueStore`] - The storage collaborator, plus an in-memory [`MemoryStore`]
//!
//! # Example
//!
//! ```rust
//! use composition_core::{async_trait, IngredientRecord, IngredientSource, SourceError};
//!
//! struct Nothing;
//!
//! #[async_trait]
//! impl IngredientSource for Nothing {
//!     fn name(&self) -> &str {
//!         "nothing"
//!     }
//!
//!     async fn lookup(&self, _ingredient: &str) -> Result<Option<IngredientRecord>, SourceError> {
//!         Ok(None)
//!     }
//! }
//! ```

mod analysis;
mod error;
mod ingredient;
mod profile;
mod source;
mod storage;

pub use analysis::{AnalysisResult, ExportData, HistoryItem, MissingIngredientRecord, OverallRating};
pub use error::{SourceError, StorageError};
pub use ingredient::{
    AnalyzedIngredient, Effectiveness, IngredientCategory, IngredientColor, IngredientRecord,
    GENERIC_DESCRIPTION, GENERIC_DESCRIPTION_SUFFIX,
};
pub use profile::{Concern, Preference, SkinType, UserProfile};
pub use source::{IngredientSource, ProductInfo, ProductLookup};
pub use storage::{KeyValueStore, MemoryStore};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
