//! Ingredient classification types.

use serde::{Deserialize, Serialize};

/// Localized description used when a source knows an ingredient exists but
/// has nothing specific to say about it.
pub const GENERIC_DESCRIPTION: &str = "Косметический компонент";

/// Suffix of the category-template description ("{category} — компонент ...").
pub const GENERIC_DESCRIPTION_SUFFIX: &str = "— компонент косметических средств";

/// Functional category of a cosmetic ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    Humectant,
    Emollient,
    Active,
    Emulsifier,
    Preservative,
    Fragrance,
    Colorant,
    Surfactant,
    Thickener,
    Solvent,
    Antioxidant,
    Sunscreen,
    PhAdjuster,
    Chelating,
    FilmFormer,
    Occlusive,
    Exfoliant,
    Soothing,
    Base,
    Unknown,
}

impl IngredientCategory {
    /// Default localized label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Humectant => "Увлажнитель",
            Self::Emollient => "Эмолент",
            Self::Active => "Актив",
            Self::Emulsifier => "Эмульгатор",
            Self::Preservative => "Консервант",
            Self::Fragrance => "Отдушка",
            Self::Colorant => "Краситель",
            Self::Surfactant => "ПАВ",
            Self::Thickener => "Загуститель",
            Self::Solvent => "Растворитель",
            Self::Antioxidant => "Антиоксидант",
            Self::Sunscreen => "Солнцезащитный",
            Self::PhAdjuster => "Регулятор pH",
            Self::Chelating => "Хелатирующий агент",
            Self::FilmFormer => "Плёнкообразователь",
            Self::Occlusive => "Окклюзив",
            Self::Exfoliant => "Эксфолиант",
            Self::Soothing => "Успокаивающий",
            Self::Base => "Основа",
            Self::Unknown => "Компонент",
        }
    }
}

/// How much an ingredient actually does for the skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effectiveness {
    High,
    Medium,
    Low,
    Marketing,
    Neutral,
}

/// Traffic-light safety classification. Also used as the overall rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientColor {
    Green,
    Yellow,
    Red,
    Gray,
}

impl IngredientColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }
}

/// Canonical classification of a single ingredient.
///
/// Records come either from the built-in registry or from an external
/// lookup; once built they are never mutated by the pipeline.
///
/// Field names on the wire follow the backup format of the mobile app
/// (`nameRu`, `categoryRu`, `descriptionRu`, `warningsRu`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRecord {
    /// Canonical English (INCI) name.
    pub name: String,
    #[serde(rename = "nameRu")]
    pub localized_name: String,
    pub category: IngredientCategory,
    #[serde(rename = "categoryRu")]
    pub category_label: String,
    /// Pore-clogging potential, 0-5.
    pub comedogenicity: u8,
    /// Irritation potential. Authored as 0-5 but not validated.
    pub irritation: u8,
    pub allergenicity: bool,
    pub effectiveness: Effectiveness,
    /// Free-form capability markers ("fragrance", "alcohol", "retinol", ...).
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "descriptionRu")]
    pub description: String,
    #[serde(rename = "warningsRu", default)]
    pub warnings: Vec<String>,
    pub color: IngredientColor,
}

impl IngredientRecord {
    /// A record carrying no classification at all.
    pub fn unknown(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            localized_name: name.clone(),
            name,
            category: IngredientCategory::Unknown,
            category_label: "Неизвестный".to_string(),
            comedogenicity: 0,
            irritation: 0,
            allergenicity: false,
            effectiveness: Effectiveness::Neutral,
            tags: Vec::new(),
            description: "Компонент не найден в базе данных".to_string(),
            warnings: Vec::new(),
            color: IngredientColor::Gray,
        }
    }

    /// Check whether the record carries a tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// True when the record says nothing beyond "this is a cosmetic ingredient".
    pub fn is_generic(&self) -> bool {
        self.category == IngredientCategory::Unknown
            || self.description.trim().is_empty()
            || self.description == GENERIC_DESCRIPTION
            || self.description.ends_with(GENERIC_DESCRIPTION_SUFFIX)
    }
}

/// One ingredient of an analyzed composition.
///
/// The flattened record's `name` is the surface form as it appeared in the
/// input; the registry or source key it resolved under is kept in
/// `canonical_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedIngredient {
    #[serde(flatten)]
    pub record: IngredientRecord,
    #[serde(default)]
    pub canonical_name: String,
    #[serde(default)]
    pub personal_warnings: Vec<String>,
    pub is_unknown: bool,
}

impl AnalyzedIngredient {
    /// Wrap a resolved record under the name it was written as.
    pub fn resolved(surface_name: impl Into<String>, record: IngredientRecord) -> Self {
        let canonical_name = record.name.clone();
        Self {
            record: IngredientRecord {
                name: surface_name.into(),
                ..record
            },
            canonical_name,
            personal_warnings: Vec::new(),
            is_unknown: false,
        }
    }

    /// An ingredient no tier could classify.
    pub fn unknown(surface_name: impl Into<String>) -> Self {
        let record = IngredientRecord::unknown(surface_name);
        Self {
            canonical_name: record.name.clone(),
            record,
            personal_warnings: Vec::new(),
            is_unknown: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn color(&self) -> IngredientColor {
        self.record.color
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.record.has_tag(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn niacinamide() -> IngredientRecord {
        IngredientRecord {
            name: "Niacinamide".to_string(),
            localized_name: "Ниацинамид".to_string(),
            category: IngredientCategory::Active,
            category_label: "Актив".to_string(),
            comedogenicity: 0,
            irritation: 0,
            allergenicity: false,
            effectiveness: Effectiveness::High,
            tags: vec!["niacinamide".to_string()],
            description: "Витамин B3".to_string(),
            warnings: Vec::new(),
            color: IngredientColor::Green,
        }
    }

    #[test]
    fn test_resolved_keeps_surface_and_canonical_names() {
        let analyzed = AnalyzedIngredient::resolved("ниацинамид", niacinamide());
        assert_eq!(analyzed.name(), "ниацинамид");
        assert_eq!(analyzed.canonical_name, "Niacinamide");
        assert!(!analyzed.is_unknown);
        assert!(analyzed.has_tag("niacinamide"));
    }

    #[test]
    fn test_unknown_is_gray_and_flagged() {
        let analyzed = AnalyzedIngredient::unknown("Mystery Extract");
        assert!(analyzed.is_unknown);
        assert_eq!(analyzed.color(), IngredientColor::Gray);
        assert_eq!(analyzed.record.category, IngredientCategory::Unknown);
    }

    #[test]
    fn test_generic_detection() {
        let mut record = niacinamide();
        assert!(!record.is_generic());

        record.description = GENERIC_DESCRIPTION.to_string();
        assert!(record.is_generic());

        record.description = format!("Эмолент {}", GENERIC_DESCRIPTION_SUFFIX);
        assert!(record.is_generic());
    }

    #[test]
    fn test_wire_names_match_backup_format() {
        let analyzed = AnalyzedIngredient::resolved("Niacinamide", niacinamide());
        let json = serde_json::to_value(&analyzed).unwrap();
        assert_eq!(json["nameRu"], "Ниацинамид");
        assert_eq!(json["categoryRu"], "Актив");
        assert_eq!(json["category"], "active");
        assert_eq!(json["effectiveness"], "high");
        assert_eq!(json["isUnknown"], false);
        assert!(json["personalWarnings"].as_array().unwrap().is_empty());

        let back: AnalyzedIngredient = serde_json::from_value(json).unwrap();
        assert_eq!(back, analyzed);
    }
}
