//! The analysis pipeline.

use std::sync::Arc;

use chrono::Utc;
use composition_core::{
    AnalysisResult, AnalyzedIngredient, IngredientRecord, KeyValueStore, ProductLookup, UserProfile,
};
use ingredient_lexicon::{is_source_script, split_ingredients, IngredientRegistry, Translator};
use ingredient_sources::{ApiCache, ExternalResolver, OpenBeautyFacts, SourcesConfig, Wikipedia};
use tokio::time::sleep;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::aggregator::{actives, overall_rating, personal_warnings, warnings};
use crate::collector::MissingIngredientCollector;
use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::personalization::Personalizer;
use crate::recommendations::{recommend, RecommendationRule, DEFAULT_RECOMMENDATIONS};

/// Shortest composition text accepted for analysis.
pub const MIN_INPUT_CHARS: usize = 3;

/// Progress callback, called with `(current, total)` after each ingredient.
pub type Progress<'a> = &'a (dyn Fn(usize, usize) + Send + Sync);

/// Check composition text before analysis.
pub fn validate_input(raw: &str) -> Result<(), AnalysisError> {
    if raw.trim().chars().count() < MIN_INPUT_CHARS {
        return Err(AnalysisError::InputTooShort { min: MIN_INPUT_CHARS });
    }
    Ok(())
}

/// Turns raw composition text into an [`AnalysisResult`].
///
/// Each token is split off, translated to its English name when written in
/// Cyrillic, looked up in the local registry and, failing that, resolved
/// through the external sources. Tokens are processed one at a time so at
/// most one network call is outstanding and progress can be reported after
/// each of them.
pub struct Analyzer {
    registry: Arc<IngredientRegistry>,
    translator: Arc<Translator>,
    personalizer: Personalizer,
    recommendations: Vec<RecommendationRule>,
    resolver: Option<ExternalResolver>,
    products: Option<Arc<dyn ProductLookup>>,
    collector: Option<MissingIngredientCollector>,
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create an analyzer with no external collaborators.
    pub fn new(registry: Arc<IngredientRegistry>, translator: Arc<Translator>) -> Self {
        Self {
            registry,
            translator,
            personalizer: Personalizer::builtin(),
            recommendations: DEFAULT_RECOMMENDATIONS.to_vec(),
            resolver: None,
            products: None,
            collector: None,
            config: AnalyzerConfig::default(),
        }
    }

    /// Built-in tables only, no network.
    pub fn offline() -> Self {
        Self::new(Arc::new(IngredientRegistry::builtin()), Arc::new(Translator::builtin()))
    }

    /// Create a fully wired analyzer from environment variables.
    ///
    /// Remote responses are cached and unresolved names are collected in
    /// `store`. With `SCANNER_OFFLINE` set, no sources are attached.
    pub fn from_env(store: Arc<dyn KeyValueStore>) -> Self {
        let config = AnalyzerConfig::from_env();
        let sources = SourcesConfig::from_env();
        Self::with_remote_sources(config, sources, store)
    }

    /// Wire the built-in tables with Open Beauty Facts and Wikipedia.
    pub fn with_remote_sources(config: AnalyzerConfig, sources: SourcesConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let translator = Arc::new(Translator::builtin());
        let collector = MissingIngredientCollector::new(store.clone(), config.collector_debounce);
        let cache = ApiCache::new(store, sources.cache_ttl);
        let obf = Arc::new(OpenBeautyFacts::with_cache(sources.clone(), cache.clone()));

        let mut analyzer = Self::new(Arc::new(IngredientRegistry::builtin()), translator.clone())
            .with_product_lookup(obf.clone())
            .with_collector(collector);

        if config.offline {
            info!("External ingredient resolution disabled");
        } else {
            let wikipedia = Arc::new(Wikipedia::with_cache(sources, cache, translator));
            analyzer = analyzer.with_resolver(
                ExternalResolver::new()
                    .with_source(obf)
                    .with_source(wikipedia)
                    .with_timeout(config.resolve_timeout),
            );
        }

        analyzer.with_config(config)
    }

    pub fn with_resolver(mut self, resolver: ExternalResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn with_product_lookup(mut self, products: Arc<dyn ProductLookup>) -> Self {
        self.products = Some(products);
        self
    }

    pub fn with_collector(mut self, collector: MissingIngredientCollector) -> Self {
        self.collector = Some(collector);
        self
    }

    pub fn with_personalizer(mut self, personalizer: Personalizer) -> Self {
        self.personalizer = personalizer;
        self
    }

    pub fn with_recommendations(mut self, rules: Vec<RecommendationRule>) -> Self {
        self.recommendations = rules;
        self
    }

    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn registry(&self) -> &IngredientRegistry {
        &self.registry
    }

    pub fn collector(&self) -> Option<&MissingIngredientCollector> {
        self.collector.as_ref()
    }

    fn external_enabled(&self) -> bool {
        !self.config.offline && self.resolver.as_ref().is_some_and(|r| !r.is_empty())
    }

    /// Analyze using the local registry only. Nothing is collected.
    pub fn analyze_local(&self, raw: &str, profile: &UserProfile, product_name: Option<&str>) -> AnalysisResult {
        debug!("Local analysis for '{}'", product_name.unwrap_or("unnamed"));
        let ingredients = split_ingredients(raw)
            .iter()
            .map(|token| {
                let english = self.english_name(token);
                match self.lookup_local(&english, token) {
                    Some(record) => self.build(token, record.clone(), profile),
                    None => AnalyzedIngredient::unknown(token.as_str()),
                }
            })
            .collect();
        self.build_result(raw, ingredients, profile, product_name)
    }

    /// Analyze with external resolution and no progress reporting.
    pub async fn analyze(&self, raw: &str, profile: &UserProfile, product_name: Option<&str>) -> AnalysisResult {
        self.analyze_with_progress(raw, profile, product_name, None).await
    }

    /// Analyze with external resolution, reporting progress after each token.
    ///
    /// Never fails: an ingredient whose lookups fail or time out is simply
    /// unknown. Names that stay unknown, or resolve only to a generic
    /// description, are handed to the collector.
    pub async fn analyze_with_progress(
        &self,
        raw: &str,
        profile: &UserProfile,
        product_name: Option<&str>,
        progress: Option<Progress<'_>>,
    ) -> AnalysisResult {
        let tokens = split_ingredients(raw);
        let total = tokens.len();
        let external = self.external_enabled();
        info!("Analyzing {} ingredients for '{}'", total, product_name.unwrap_or("unnamed"));

        let mut ingredients = Vec::with_capacity(total);
        let mut to_collect = Vec::new();
        let mut local_hits = 0;

        for (index, token) in tokens.iter().enumerate() {
            let english = self.english_name(token);

            let ingredient = if let Some(record) = self.lookup_local(&english, token) {
                local_hits += 1;
                self.build(token, record.clone(), profile)
            } else if external {
                let resolved = self.resolve_external(&english).await;
                match resolved {
                    Some(record) => {
                        if record.is_generic() {
                            to_collect.push(english);
                        }
                        self.build(token, record, profile)
                    }
                    None => {
                        to_collect.push(english);
                        AnalyzedIngredient::unknown(token.as_str())
                    }
                }
            } else {
                AnalyzedIngredient::unknown(token.as_str())
            };
            ingredients.push(ingredient);

            if let Some(progress) = progress {
                progress(index + 1, total);
                if !self.config.progress_delay.is_zero() {
                    sleep(self.config.progress_delay).await;
                }
            }
        }

        debug!("Local registry resolved {}/{}", local_hits, total);

        if let Some(collector) = &self.collector {
            if !to_collect.is_empty() {
                for name in &to_collect {
                    collector.add(name, product_name).await;
                }
                info!("Collected {} unresolved ingredients", to_collect.len());
            }
        }

        let result = self.build_result(raw, ingredients, profile, product_name);
        info!("Analysis complete: {} ({})", result.overall_text, result.overall_rating.as_str());
        result
    }

    /// Look up a product by barcode and analyze its ingredients.
    pub async fn analyze_barcode(
        &self,
        code: &str,
        profile: &UserProfile,
        progress: Option<Progress<'_>>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let code = code.trim();
        let not_found = || AnalysisError::BarcodeNotFound(code.to_string());

        let products = self.products.as_ref().ok_or_else(not_found)?;
        let product = match products.lookup_barcode(code).await {
            Ok(Some(product)) => product,
            Ok(None) => return Err(not_found()),
            Err(e) => {
                warn!("Barcode lookup failed for {}: {}", code, e);
                return Err(not_found());
            }
        };

        if product.ingredients_text.trim().is_empty() {
            info!("Product '{}' has no ingredient list", product.name);
            return Err(not_found());
        }

        let mut result = self
            .analyze_with_progress(&product.ingredients_text, profile, Some(&product.name), progress)
            .await;
        result.barcode = Some(code.to_string());
        Ok(result)
    }

    fn english_name(&self, token: &str) -> String {
        if is_source_script(token) {
            self.translator.translate_token(token)
        } else {
            token.to_string()
        }
    }

    fn lookup_local(&self, english: &str, token: &str) -> Option<&IngredientRecord> {
        self.registry.lookup(english).or_else(|| {
            if english != token {
                self.registry.lookup(token)
            } else {
                None
            }
        })
    }

    async fn resolve_external(&self, english: &str) -> Option<IngredientRecord> {
        let resolver = self.resolver.as_ref()?;
        resolver.resolve(english).await
    }

    fn build(&self, surface: &str, record: IngredientRecord, profile: &UserProfile) -> AnalyzedIngredient {
        let mut ingredient = AnalyzedIngredient::resolved(surface, record);
        self.personalizer.apply(profile, &mut ingredient);
        ingredient
    }

    fn build_result(
        &self,
        raw: &str,
        ingredients: Vec<AnalyzedIngredient>,
        profile: &UserProfile,
        product_name: Option<&str>,
    ) -> AnalysisResult {
        let rating = overall_rating(&ingredients);
        AnalysisResult {
            id: Uuid::new_v4().to_string(),
            date: Utc::now(),
            product_name: product_name.unwrap_or_default().to_string(),
            barcode: None,
            raw_ingredients: raw.to_string(),
            actives: actives(&ingredients),
            warnings: warnings(&ingredients),
            personal_warnings: personal_warnings(&ingredients),
            recommendations: recommend(&self.recommendations, &ingredients, profile),
            overall_rating: rating.rating,
            overall_text: rating.text.to_string(),
            ingredients,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::offline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composition_core::{IngredientColor, SkinType};

    #[test]
    fn test_validate_input() {
        assert!(matches!(validate_input("  ab "), Err(AnalysisError::InputTooShort { min: 3 })));
        assert!(validate_input("Aqua").is_ok());
        assert!(validate_input("Вод").is_ok());
    }

    #[test]
    fn test_local_analysis_keeps_order_and_surface_names() {
        let analyzer = Analyzer::offline();
        let result = analyzer.analyze_local("Aqua, Glycerin, Mystery Stuff", &UserProfile::default(), None);

        let names: Vec<&str> = result.ingredients.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Aqua", "Glycerin", "Mystery Stuff"]);
        assert_eq!(result.ingredients[0].canonical_name, "Water");
        assert!(result.ingredients[2].is_unknown);
        assert_eq!(result.product_name, "");
    }

    #[test]
    fn test_cyrillic_tokens_resolve_locally() {
        let analyzer = Analyzer::offline();
        let result = analyzer.analyze_local("Вода, Глицерин, Ниацинамид", &UserProfile::default(), Some("Крем"));

        assert_eq!(result.unknown_count(), 0);
        assert_eq!(result.ingredients[0].name(), "Вода");
        assert_eq!(result.ingredients[2].canonical_name, "Niacinamide");
        assert_eq!(result.product_name, "Крем");
    }

    #[test]
    fn test_empty_input_is_valid_result() {
        let result = Analyzer::offline().analyze_local("", &UserProfile::default(), None);
        assert!(result.ingredients.is_empty());
        assert_eq!(result.overall_rating, IngredientColor::Gray);
        assert_eq!(result.overall_text, "Недостаточно данных");
    }

    #[test]
    fn test_personalization_applied() {
        let profile = UserProfile {
            skin_types: vec![SkinType::Sensitive],
            ..UserProfile::default()
        };
        let result = Analyzer::offline().analyze_local("Aqua, Parfum", &profile, None);
        let parfum = &result.ingredients[1];
        assert!(!parfum.personal_warnings.is_empty());
        assert!(result.personal_warnings.contains(&parfum.personal_warnings[0]));
    }

    #[test]
    fn test_unique_ids() {
        let analyzer = Analyzer::offline();
        let a = analyzer.analyze_local("Aqua", &UserProfile::default(), None);
        let b = analyzer.analyze_local("Aqua", &UserProfile::default(), None);
        assert_ne!(a.id, b.id);
    }
}
