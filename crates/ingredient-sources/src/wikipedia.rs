//! Wikipedia summary client used as the fallback classifier.

use std::sync::Arc;

use async_trait::async_trait;
use composition_core::{
    Effectiveness, IngredientColor, IngredientRecord, IngredientSource, KeyValueStore,
    SourceError, GENERIC_DESCRIPTION, GENERIC_DESCRIPTION_SUFFIX,
};
use ingredient_lexicon::{first_sentences, Translator};
use serde::Deserialize;
use tracing::debug;

use crate::cache::{normalize_key, ApiCache};
use crate::config::SourcesConfig;
use crate::error::FetchError;
use crate::keywords::{benefit_phrases, summary_category, summary_safety, UNKNOWN_CATEGORY_LABEL};

/// Extracts shorter than this say nothing useful.
const MIN_EXTRACT_CHARS: usize = 20;

/// Phrase the translator produces for boilerplate "used in cosmetics" text.
const BOILERPLATE_PHRASE: &str = "используется в косметических средствах";

#[derive(Debug, Default, Deserialize)]
struct Summary {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    extract: Option<String>,
}

/// Build a record from an English encyclopedia extract.
pub fn summary_to_record(name: &str, extract: &str, translator: &Translator) -> IngredientRecord {
    let (category, label) = summary_category(extract);
    let (color, warnings) = summary_safety(extract, category);

    let template = || format!("{} {}", label, GENERIC_DESCRIPTION_SUFFIX);
    let phrases = benefit_phrases(extract);
    let description = if !phrases.is_empty() {
        format!("{} — {}", label, phrases.join(", "))
    } else {
        let translated = translator.translate_description(&first_sentences(extract, 2), Some(label));
        let known = label != UNKNOWN_CATEGORY_LABEL;
        if known && (translated.contains(BOILERPLATE_PHRASE) || translated == GENERIC_DESCRIPTION) {
            template()
        } else {
            translated
        }
    };

    let irritation = match color {
        IngredientColor::Red => 2,
        IngredientColor::Yellow => 1,
        _ => 0,
    };
    let allergenicity = warnings.iter().any(|w| w.contains("аллерген"));

    IngredientRecord {
        name: name.to_string(),
        localized_name: name.to_string(),
        category,
        category_label: label.to_string(),
        comedogenicity: 0,
        irritation,
        allergenicity,
        effectiveness: Effectiveness::Neutral,
        tags: Vec::new(),
        description,
        warnings,
        color,
    }
}

/// Wikipedia REST summary client.
#[derive(Clone)]
pub struct Wikipedia {
    client: reqwest::Client,
    config: SourcesConfig,
    cache: ApiCache,
    translator: Arc<Translator>,
}

impl Wikipedia {
    /// Create a client caching into `store`.
    pub fn new(config: SourcesConfig, store: Arc<dyn KeyValueStore>, translator: Arc<Translator>) -> Self {
        let cache = ApiCache::new(store, config.cache_ttl);
        Self::with_cache(config, cache, translator)
    }

    /// Create a client sharing an existing cache.
    pub fn with_cache(config: SourcesConfig, cache: ApiCache, translator: Arc<Translator>) -> Self {
        Self {
            client: config.http_client(),
            config,
            cache,
            translator,
        }
    }

    async fn fetch_extract(&self, name: &str) -> Result<Option<String>, FetchError> {
        let title = name.split_whitespace().collect::<Vec<_>>().join("_");
        let url = format!("{}/{}", self.config.wiki_url, urlencoding::encode(&title));
        debug!("Fetching summary: {}", url);

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

        let summary: Summary = response.json().await?;
        if matches!(summary.kind.as_deref(), Some("disambiguation") | Some("not_found")) {
            debug!("No usable article for '{}'", name);
            return Ok(None);
        }

        Ok(summary
            .extract
            .filter(|extract| extract.trim().chars().count() >= MIN_EXTRACT_CHARS))
    }
}

#[async_trait]
impl IngredientSource for Wikipedia {
    fn name(&self) -> &str {
        "wikipedia"
    }

    async fn lookup(&self, ingredient: &str) -> Result<Option<IngredientRecord>, SourceError> {
        let key = format!("wiki_{}", normalize_key(ingredient));
        if let Some(record) = self.cache.get::<IngredientRecord>(&key).await {
            return Ok(Some(record));
        }

        let Some(extract) = self.fetch_extract(ingredient).await? else {
            return Ok(None);
        };

        let record = summary_to_record(ingredient, &extract, &self.translator);
        self.cache.set(&key, &record).await;
        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composition_core::{IngredientCategory, MemoryStore};

    #[test]
    fn test_benefit_description() {
        let translator = Translator::builtin();
        let record = summary_to_record(
            "Bakuchiol",
            "Bakuchiol is a plant extract with antioxidant and anti-inflammatory properties.",
            &translator,
        );
        assert_eq!(record.category, IngredientCategory::Antioxidant);
        assert_eq!(record.description, "Антиоксидант — антиоксидантная защита, успокаивающее действие");
        assert_eq!(record.color, IngredientColor::Green);
        assert_eq!(record.irritation, 0);
        assert!(!record.is_generic());
    }

    #[test]
    fn test_caution_sets_irritation_and_allergenicity() {
        let translator = Translator::builtin();
        let record = summary_to_record(
            "Limonene",
            "Limonene is a fragrance compound and a known allergen in cosmetics.",
            &translator,
        );
        assert_eq!(record.category, IngredientCategory::Fragrance);
        assert_eq!(record.color, IngredientColor::Yellow);
        assert_eq!(record.irritation, 1);
        assert!(record.allergenicity);
    }

    #[test]
    fn test_danger_is_red() {
        let translator = Translator::builtin();
        let record = summary_to_record("Hydroquinone", "A compound that is banned in cosmetics in several countries.", &translator);
        assert_eq!(record.color, IngredientColor::Red);
        assert_eq!(record.irritation, 2);
        assert!(!record.allergenicity);
    }

    #[test]
    fn test_untranslatable_unknown_stays_generic() {
        let translator = Translator::builtin();
        let record = summary_to_record(
            "Zinc Pyrithione",
            "Zinc pyrithione is a coordination complex of zinc first described in the 1930s.",
            &translator,
        );
        assert_eq!(record.category, IngredientCategory::Unknown);
        assert_eq!(record.color, IngredientColor::Gray);
        assert!(record.is_generic());
    }

    #[test]
    fn test_unchanged_lead_sentences_use_template() {
        // Nothing in the first two sentences is translatable, so the
        // template applies even though the full extract is longer.
        let translator = Translator::builtin();
        let record = summary_to_record("E1520", "E 1520. CAS 57-55-6. It is made in large quantities.", &translator);
        assert_eq!(record.category, IngredientCategory::Unknown);
        assert_eq!(
            record.description,
            format!("{} {}", UNKNOWN_CATEGORY_LABEL, GENERIC_DESCRIPTION_SUFFIX)
        );
    }

    #[tokio::test]
    async fn test_cached_record_skips_network() {
        let store = Arc::new(MemoryStore::new());
        let config = SourcesConfig::default().with_wiki_url("http://127.0.0.1:9");
        let wiki = Wikipedia::new(config, store, Arc::new(Translator::builtin()));

        let mut record = IngredientRecord::unknown("Squalane");
        record.category = IngredientCategory::Emollient;
        wiki.cache.set("wiki_squalane", &record).await;

        assert_eq!(wiki.lookup("Squalane").await.unwrap(), Some(record));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_live_summary() {
        let wiki = Wikipedia::new(
            SourcesConfig::default(),
            Arc::new(MemoryStore::new()),
            Arc::new(Translator::builtin()),
        );
        let record = wiki.lookup("Squalane").await.unwrap();
        assert!(record.is_some());
    }
}
