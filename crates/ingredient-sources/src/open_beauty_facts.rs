//! Open Beauty Facts client: barcode lookup and ingredient classification.

use std::sync::Arc;

use async_trait::async_trait;
use composition_core::{
    Effectiveness, IngredientCategory, IngredientColor, IngredientRecord, IngredientSource,
    KeyValueStore, ProductInfo, ProductLookup, SourceError, GENERIC_DESCRIPTION,
    GENERIC_DESCRIPTION_SUFFIX,
};
use serde::Deserialize;
use tracing::debug;

use crate::cache::{normalize_key, ApiCache};
use crate::config::SourcesConfig;
use crate::error::FetchError;
use crate::keywords::{product_tag_category, UNKNOWN_CATEGORY_LABEL};

/// Shown when a product has ingredients but no usable name.
pub const UNKNOWN_PRODUCT_NAME: &str = "Неизвестный продукт";

/// Ingredient fields shorter than this are treated as absent.
const MIN_INGREDIENTS_CHARS: usize = 4;

#[derive(Debug, Deserialize)]
struct ProductResponse {
    #[serde(default)]
    status: i64,
    product: Option<ProductPayload>,
}

/// The subset of an Open Beauty Facts product we read.
#[derive(Debug, Default, Deserialize)]
pub struct ProductPayload {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_name_en: Option<String>,
    #[serde(default)]
    pub product_name_fr: Option<String>,
    #[serde(default)]
    pub brands: Option<String>,
    #[serde(default)]
    pub ingredients_text: Option<String>,
    #[serde(default)]
    pub ingredients_text_en: Option<String>,
    #[serde(default)]
    pub ingredients_text_fr: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<ProductIngredient>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductIngredient {
    #[serde(default)]
    pub text: Option<String>,
}

/// The subset of an Open Beauty Facts ingredient page we read.
#[derive(Debug, Default, Deserialize)]
pub struct IngredientPayload {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub tag: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Build a [`ProductInfo`] from a product payload.
///
/// Returns `None` only when the product has neither ingredients nor a name.
pub fn parse_product(code: &str, product: &ProductPayload) -> Option<ProductInfo> {
    let name = non_empty(&product.product_name)
        .or_else(|| non_empty(&product.product_name_en))
        .or_else(|| non_empty(&product.product_name_fr))
        .unwrap_or("");
    let brand = non_empty(&product.brands).map(str::to_string);

    fn long_enough(value: &Option<String>) -> Option<&str> {
        non_empty(value).filter(|s| s.chars().count() >= MIN_INGREDIENTS_CHARS)
    }
    let ingredients_text = long_enough(&product.ingredients_text)
        .or_else(|| long_enough(&product.ingredients_text_en))
        .or_else(|| long_enough(&product.ingredients_text_fr))
        .map(str::to_string)
        .unwrap_or_else(|| {
            product
                .ingredients
                .iter()
                .filter_map(|i| non_empty(&i.text))
                .collect::<Vec<_>>()
                .join(", ")
        });

    let full_name = match &brand {
        Some(brand) if !name.is_empty() && !name.to_lowercase().contains(&brand.to_lowercase()) => {
            format!("{} — {}", brand, name)
        }
        _ => name.to_string(),
    };

    if ingredients_text.is_empty() && full_name.is_empty() {
        return None;
    }

    let full_name = if full_name.is_empty() {
        UNKNOWN_PRODUCT_NAME.to_string()
    } else {
        full_name
    };

    Some(ProductInfo {
        name: full_name,
        brand,
        ingredients_text,
        barcode: code.to_string(),
        image_url: non_empty(&product.image_url).map(str::to_string),
    })
}

/// Turn an ingredient name into the URL slug Open Beauty Facts uses.
pub fn ingredient_slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Classify an ingredient from its Open Beauty Facts page.
///
/// Pages with no product count carry no data. The result is always gray:
/// the page tells us what the ingredient does, not whether it is safe.
pub fn ingredient_record_from_payload(name: &str, payload: &IngredientPayload) -> Option<IngredientRecord> {
    if payload.count.unwrap_or(0) == 0 {
        return None;
    }

    let matched = payload.tag.as_deref().and_then(product_tag_category);
    let (category, label) = matched.unwrap_or((IngredientCategory::Unknown, UNKNOWN_CATEGORY_LABEL));
    let description = match matched {
        Some((_, label)) => format!("{} {}", label, GENERIC_DESCRIPTION_SUFFIX),
        None => GENERIC_DESCRIPTION.to_string(),
    };

    Some(IngredientRecord {
        name: name.to_string(),
        localized_name: name.to_string(),
        category,
        category_label: label.to_string(),
        comedogenicity: 0,
        irritation: 0,
        allergenicity: false,
        effectiveness: Effectiveness::Neutral,
        tags: Vec::new(),
        description,
        warnings: Vec::new(),
        color: IngredientColor::Gray,
    })
}

/// Open Beauty Facts client.
///
/// Serves both barcode lookups and per-ingredient classification. Successful
/// answers are cached; misses are not.
#[derive(Clone)]
pub struct OpenBeautyFacts {
    client: reqwest::Client,
    config: SourcesConfig,
    cache: ApiCache,
}

impl OpenBeautyFacts {
    /// Create a client caching into `store`.
    pub fn new(config: SourcesConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let cache = ApiCache::new(store, config.cache_ttl);
        Self::with_cache(config, cache)
    }

    /// Create a client sharing an existing cache.
    pub fn with_cache(config: SourcesConfig, cache: ApiCache) -> Self {
        Self {
            client: config.http_client(),
            config,
            cache,
        }
    }

    async fn fetch_product(&self, code: &str) -> Result<Option<ProductInfo>, FetchError> {
        let url = format!("{}/api/v0/product/{}.json", self.config.obf_url, urlencoding::encode(code));
        debug!("Fetching product: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.config.product_timeout)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body: ProductResponse = response.json().await?;
        if body.status != 1 {
            debug!("Product {} not found", code);
            return Ok(None);
        }

        Ok(body.product.and_then(|product| parse_product(code, &product)))
    }

    async fn fetch_ingredient(&self, name: &str) -> Result<Option<IngredientRecord>, FetchError> {
        let slug = ingredient_slug(name);
        if slug.is_empty() {
            return Ok(None);
        }

        let url = format!("{}/ingredient/{}.json", self.config.obf_url, slug);
        debug!("Fetching ingredient: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.config.ingredient_timeout)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let payload: IngredientPayload = response.json().await?;
        Ok(ingredient_record_from_payload(name, &payload))
    }
}

#[async_trait]
impl ProductLookup for OpenBeautyFacts {
    async fn lookup_barcode(&self, code: &str) -> Result<Option<ProductInfo>, SourceError> {
        let code = code.trim();
        let key = format!("barcode_{}", code);
        if let Some(product) = self.cache.get::<ProductInfo>(&key).await {
            return Ok(Some(product));
        }

        let product = self.fetch_product(code).await?;
        if let Some(product) = &product {
            if !product.ingredients_text.is_empty() {
                self.cache.set(&key, product).await;
            }
        }
        Ok(product)
    }
}

#[async_trait]
impl IngredientSource for OpenBeautyFacts {
    fn name(&self) -> &str {
        "open_beauty_facts"
    }

    async fn lookup(&self, ingredient: &str) -> Result<Option<IngredientRecord>, SourceError> {
        let key = format!("obf_ing_{}", normalize_key(ingredient));
        if let Some(record) = self.cache.get::<IngredientRecord>(&key).await {
            return Ok(Some(record));
        }

        let record = self.fetch_ingredient(ingredient).await?;
        if let Some(record) = &record {
            self.cache.set(&key, record).await;
        }
        Ok(record)
    }
}
