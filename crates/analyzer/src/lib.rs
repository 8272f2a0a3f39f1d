//! Ingredient composition analysis pipeline.
//!
//! This crate provides the [`Analyzer`] type which turns a raw ingredient
//! list into a rated, personalized [`AnalysisResult`].
//!
//! # Features
//!
//! - Splits and translates noisy, possibly Cyrillic, composition text
//! - Resolves ingredients against the local registry, then external sources
//! - Applies profile-specific warning rules to each ingredient
//! - Rates the product with a fixed-precedence decision sequence
//! - Collects ingredients no source could classify
//! - Persists profile and history, with JSON backup export and import
//!
//! # Architecture
//!
//! ```text
//! raw text
//!    ↓
//! ┌──────────────────────────────────────────────────────────┐
//! │                        ANALYZER                          │
//! │                                                          │
//! │  1. Split into tokens (ingredient-lexicon)               │
//! │         ↓                                                │
//! │  2. For each token, in order:                            │
//! │     • translate Cyrillic to the English name             │
//! │     • local registry lookup                              │
//! │     • external resolution (ingredient-sources)           │
//! │     • personalization rules                              │
//! │     • report progress                                    │
//! │         ↓                                                │
//! │  3. Hand unresolved names to the collector               │
//! │         ↓                                                │
//! │  4. Actives, warnings, recommendations, overall rating   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use analyzer::Analyzer;
//! use composition_core::{IngredientColor, UserProfile};
//!
//! let analyzer = Analyzer::offline();
//! let result = analyzer.analyze_local(
//!     "Aqua, Glycerin, Niacinamide, Parfum, Phenoxyethanol",
//!     &UserProfile::default(),
//!     Some("Serum"),
//! );
//!
//! assert_eq!(result.ingredients.len(), 5);
//! assert!(!result.actives.is_empty());
//! assert_ne!(result.overall_rating, IngredientColor::Red);
//! ```

mod aggregator;
mod analyzer;
mod backup;
mod collector;
mod config;
mod error;
mod history;
mod personalization;
mod profile;
mod recommendations;

// Public exports
pub use aggregator::{actives, overall_rating, personal_warnings, warnings, Rating};
pub use analyzer::{validate_input, Analyzer, Progress, MIN_INPUT_CHARS};
pub use backup::{export_backup, import_backup, parse_backup, to_json, BACKUP_VERSION};
pub use collector::{MissingIngredientCollector, MAX_PRODUCTS, MISSING_INGREDIENTS_KEY};
pub use config::AnalyzerConfig;
pub use error::AnalysisError;
pub use history::{HistoryStore, HISTORY_KEY, UNTITLED};
pub use personalization::{PersonalizationRule, Personalizer, DEFAULT_RULES};
pub use profile::{ProfileStore, PROFILE_KEY};
pub use recommendations::{recommend, RecommendationRule, DEFAULT_RECOMMENDATIONS};

// Re-export commonly used types from dependencies
pub use composition_core::{AnalysisResult, AnalyzedIngredient, UserProfile};
