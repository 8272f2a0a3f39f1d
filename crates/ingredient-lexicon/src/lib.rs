//! Lexical layer of the composition analyzer.
//!
//! Turns raw composition text into lookup-ready ingredient names and maps
//! those names onto classification records:
//!
//! - [`split_ingredients`] - Tokenizes free text into candidate ingredient names
//! - [`Translator`] - Maps Cyrillic ingredient names to INCI names, and English
//!   descriptions back to localized text
//! - [`IngredientRegistry`] - The built-in classification table
//!
//! All tables are plain values built once and handed to the pipeline, so tests
//! can substitute their own.
//!
//! # Example
//!
//! ```rust
//! use ingredient_lexicon::{split_ingredients, IngredientRegistry, Translator};
//!
//! let translator = Translator::builtin();
//! let registry = IngredientRegistry::builtin();
//!
//! for token in split_ingredients("Вода, Glycerin; 3) Ниацинамид") {
//!     let english = translator.translate_token(&token);
//!     assert!(registry.lookup(&english).is_some());
//! }
//! ```

mod data;
mod normalizer;
mod registry;
mod translator;

pub use normalizer::{split_ingredients, MAX_TOKEN_CHARS};
pub use registry::IngredientRegistry;
pub use translator::{first_sentences, has_source_language_majority, is_source_script, transliterate, Translator};
