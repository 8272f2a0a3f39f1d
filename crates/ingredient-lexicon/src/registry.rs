//! Local ingredient registry.

use std::collections::HashMap;

use composition_core::IngredientRecord;
use indexmap::IndexMap;
use tracing::debug;

use crate::data::registry::{ALIASES, SEEDS};

/// Immutable table of classified ingredients keyed by canonical INCI name.
///
/// Lookup is a direct, case-sensitive key match on the name as authored or a
/// registered alias. There is no fuzzy or partial matching; anything else
/// falls through to external resolution.
#[derive(Debug, Clone, Default)]
pub struct IngredientRegistry {
    /// Records by canonical name, in authoring order.
    records: IndexMap<String, IngredientRecord>,
    /// Alternative spelling -> canonical name.
    aliases: HashMap<String, String>,
}

impl IngredientRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry loaded with the built-in data asset.
    pub fn builtin() -> Self {
        let mut registry = Self::from_records(SEEDS.iter().map(|seed| IngredientRecord {
            name: seed.name.to_string(),
            localized_name: seed.localized.to_string(),
            category: seed.category,
            category_label: seed.category.label().to_string(),
            comedogenicity: seed.comedogenicity,
            irritation: seed.irritation,
            allergenicity: seed.allergenicity,
            effectiveness: seed.effectiveness,
            tags: seed.tags.iter().map(|t| t.to_string()).collect(),
            description: seed.description.to_string(),
            warnings: seed.warnings.iter().map(|w| w.to_string()).collect(),
            color: seed.color,
        }));
        for (alias, canonical) in ALIASES {
            registry.add_alias(*alias, *canonical);
        }
        debug!("Loaded built-in registry with {} records", registry.len());
        registry
    }

    /// Build a registry from explicit records. Later duplicates replace earlier ones.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = IngredientRecord>,
    {
        let mut registry = Self::new();
        for record in records {
            registry.insert(record);
        }
        registry
    }

    /// Insert or replace a record.
    pub fn insert(&mut self, record: IngredientRecord) {
        self.records.insert(record.name.clone(), record);
    }

    /// Register an alternative spelling for an existing record.
    ///
    /// Aliases pointing at unknown names are ignored.
    pub fn add_alias(&mut self, alias: impl Into<String>, canonical: impl Into<String>) {
        let alias = alias.into();
        let canonical = canonical.into();
        if !self.records.contains_key(&canonical) {
            debug!("Ignoring alias '{}' for unknown ingredient '{}'", alias, canonical);
            return;
        }
        self.aliases.insert(alias, canonical);
    }

    /// Look up an ingredient by name.
    pub fn lookup(&self, name: &str) -> Option<&IngredientRecord> {
        let name = name.trim();
        if let Some(record) = self.records.get(name) {
            return Some(record);
        }
        self.aliases.get(name).and_then(|canonical| self.records.get(canonical))
    }

    /// Check whether a name resolves to a record.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Canonical names in authoring order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
