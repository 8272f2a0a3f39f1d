//! Analysis output and its persisted forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ingredient::{AnalyzedIngredient, IngredientColor};
use crate::profile::UserProfile;

/// Overall product rating shares the ingredient traffic-light scale.
pub type OverallRating = IngredientColor;

/// Structured outcome of one analysis run.
///
/// `ingredients` follows input token order; `actives` is a subset of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub id: String,
    pub date: DateTime<Utc>,
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    pub raw_ingredients: String,
    pub ingredients: Vec<AnalyzedIngredient>,
    pub overall_rating: OverallRating,
    pub overall_text: String,
    pub actives: Vec<AnalyzedIngredient>,
    pub warnings: Vec<String>,
    pub personal_warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// Number of ingredients that no tier could classify.
    pub fn unknown_count(&self) -> usize {
        self.ingredients.iter().filter(|i| i.is_unknown).count()
    }
}

/// A saved analysis, newest first in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    pub date: DateTime<Utc>,
    pub product_name: String,
    pub overall_rating: OverallRating,
    pub analysis: AnalysisResult,
}

impl HistoryItem {
    pub fn from_analysis(analysis: AnalysisResult, product_name: impl Into<String>) -> Self {
        Self {
            id: analysis.id.clone(),
            date: analysis.date,
            product_name: product_name.into(),
            overall_rating: analysis.overall_rating,
            analysis,
        }
    }
}

/// Backup document holding the profile and the full history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub version: String,
    /// Calendar date of the export, `YYYY-MM-DD`.
    #[serde(default)]
    pub export_date: String,
    pub profile: UserProfile,
    pub history: Vec<HistoryItem>,
}

/// An ingredient name that resolved to nothing useful, with occurrence stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingIngredientRecord {
    pub name: String,
    pub count: u32,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    /// Most recent distinct product names, oldest first, at most 10.
    #[serde(default)]
    pub products: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            id: "abc".to_string(),
            date: Utc::now(),
            product_name: "Cream".to_string(),
            barcode: None,
            raw_ingredients: "Aqua, Mystery".to_string(),
            ingredients: vec![AnalyzedIngredient::unknown("Mystery")],
            overall_rating: IngredientColor::Gray,
            overall_text: "Недостаточно данных".to_string(),
            actives: Vec::new(),
            warnings: Vec::new(),
            personal_warnings: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    #[test]
    fn test_history_item_mirrors_analysis() {
        let result = sample_result();
        let item = HistoryItem::from_analysis(result.clone(), "Night cream");
        assert_eq!(item.id, result.id);
        assert_eq!(item.date, result.date);
        assert_eq!(item.overall_rating, IngredientColor::Gray);
        assert_eq!(item.product_name, "Night cream");
    }

    #[test]
    fn test_barcode_omitted_when_absent() {
        let json = serde_json::to_value(sample_result()).unwrap();
        assert!(json.get("barcode").is_none());
        assert_eq!(json["overallRating"], "gray");
        assert_eq!(json["rawIngredients"], "Aqua, Mystery");
    }

    #[test]
    fn test_unknown_count() {
        assert_eq!(sample_result().unknown_count(), 1);
    }
}
