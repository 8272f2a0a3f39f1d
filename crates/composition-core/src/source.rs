//! Traits for external ingredient and product data sources.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SourceError;
use crate::ingredient::IngredientRecord;

/// Trait for data sources that can classify an ingredient by name.
///
/// `Ok(None)` means the source answered but knows nothing useful about the
/// ingredient; `Err` means the source could not be consulted. Callers treat
/// both as "no data" for that tier.
#[async_trait]
pub trait IngredientSource: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Look up an ingredient by its English name.
    async fn lookup(&self, ingredient: &str) -> Result<Option<IngredientRecord>, SourceError>;
}

/// A product found by barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Raw ingredient list as printed on the package. May be empty.
    #[serde(rename = "ingredients")]
    pub ingredients_text: String,
    pub barcode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Trait for barcode-to-product lookup.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn lookup_barcode(&self, code: &str) -> Result<Option<ProductInfo>, SourceError>;
}
