use std::sync::{Arc, Mutex};
use std::time::Duration;

use analyzer::{AnalysisError, Analyzer, AnalyzerConfig, MissingIngredientCollector, Progress};
use composition_core::{
    IngredientCategory, IngredientColor, IngredientRecord, KeyValueStore, MemoryStore, ProductInfo,
    UserProfile,
};
use ingredient_lexicon::{IngredientRegistry, Translator};
use ingredient_sources::ExternalResolver;
use mock_sources::{DelayedSource, FailingSource, StaticProducts, StaticSource};

const SCENARIO: &str = "Aqua, Glycerin, Niacinamide, Parfum, Phenoxyethanol";

fn emollient(name: &str) -> IngredientRecord {
    let mut record = IngredientRecord::unknown(name);
    record.category = IngredientCategory::Emollient;
    record.category_label = "Эмолент".to_string();
    record.description = "Смягчает и разглаживает кожу".to_string();
    record.color = IngredientColor::Green;
    record
}

fn base_analyzer() -> Analyzer {
    Analyzer::new(Arc::new(IngredientRegistry::builtin()), Arc::new(Translator::builtin()))
}

fn collector() -> MissingIngredientCollector {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    MissingIngredientCollector::new(store, Duration::from_secs(60))
}

#[tokio::test]
async fn test_scenario_with_empty_profile() {
    let analyzer = base_analyzer();
    let profile = UserProfile::default();

    let first = analyzer.analyze(SCENARIO, &profile, None).await;
    let names: Vec<&str> = first.ingredients.iter().map(|i| i.name()).collect();
    assert_eq!(names, vec!["Aqua", "Glycerin", "Niacinamide", "Parfum", "Phenoxyethanol"]);
    assert!(first.personal_warnings.is_empty());
    assert!(first.ingredients.iter().all(|i| i.personal_warnings.is_empty()));
    assert!(first.actives.iter().any(|i| i.name() == "Niacinamide"));
    for active in &first.actives {
        assert!(first.ingredients.contains(active));
    }

    for _ in 0..3 {
        let again = analyzer.analyze(SCENARIO, &profile, None).await;
        assert_eq!(again.overall_rating, first.overall_rating);
        assert_eq!(again.overall_text, first.overall_text);
        assert_eq!(again.actives, first.actives);
    }
}

#[tokio::test]
async fn test_external_resolution_and_collection() {
    let source = Arc::new(
        StaticSource::new("static")
            .with_record(emollient("Hemisqualane"))
            .with_record(IngredientRecord::unknown("Mystery Peptide")),
    );
    let collector = collector();
    let analyzer = base_analyzer()
        .with_resolver(ExternalResolver::new().with_source(source.clone()))
        .with_collector(collector.clone());

    let result = analyzer
        .analyze("Aqua, Hemisqualane, Mystery Peptide, Nothing Known", &UserProfile::default(), Some("Cream"))
        .await;

    assert!(!result.ingredients[1].is_unknown);
    assert_eq!(result.ingredients[1].record.category, IngredientCategory::Emollient);
    assert!(!result.ingredients[2].is_unknown);
    assert!(result.ingredients[3].is_unknown);
    // Aqua is local, so only three tokens reached the source.
    assert_eq!(source.calls(), 3);

    let collected: Vec<String> = collector.list().await.into_iter().map(|r| r.name).collect();
    assert_eq!(collected, vec!["Mystery Peptide", "Nothing Known"]);
    assert_eq!(collector.list().await[0].products, vec!["Cream"]);
}

#[tokio::test]
async fn test_progress_reported_per_token() {
    let analyzer = base_analyzer()
        .with_resolver(ExternalResolver::new().with_source(Arc::new(StaticSource::new("empty"))))
        .with_config(AnalyzerConfig::default().with_progress_delay(Duration::from_millis(1)));

    let seen = Mutex::new(Vec::new());
    let record = |current: usize, total: usize| seen.lock().unwrap().push((current, total));
    let progress: Progress<'_> = &record;
    analyzer
        .analyze_with_progress("Aqua, Unknown One, Glycerin", &UserProfile::default(), None, Some(progress))
        .await;

    assert_eq!(seen.into_inner().unwrap(), vec![(1, 3), (2, 3), (3, 3)]);
}

#[tokio::test]
async fn test_failures_and_timeouts_degrade_to_unknown() {
    let slow = DelayedSource::with_millis(StaticSource::new("slow").with_record(emollient("Hemisqualane")), 500);
    let resolver = ExternalResolver::new()
        .with_source(Arc::new(FailingSource::new("broken")))
        .with_source(Arc::new(slow))
        .with_timeout(Duration::from_millis(20));
    let analyzer = base_analyzer().with_resolver(resolver);

    let result = analyzer.analyze("Aqua, Hemisqualane, Glycerin", &UserProfile::default(), None).await;
    assert_eq!(result.ingredients.len(), 3);
    assert!(result.ingredients[1].is_unknown);
    assert!(!result.ingredients[0].is_unknown);
    assert!(!result.ingredients[2].is_unknown);
}

#[tokio::test]
async fn test_offline_config_skips_sources() {
    let source = Arc::new(StaticSource::new("static").with_record(emollient("Hemisqualane")));
    let collector = collector();
    let analyzer = base_analyzer()
        .with_resolver(ExternalResolver::new().with_source(source.clone()))
        .with_collector(collector.clone())
        .with_config(AnalyzerConfig::default().with_offline(true));

    let result = analyzer.analyze("Aqua, Hemisqualane", &UserProfile::default(), None).await;
    assert!(result.ingredients[1].is_unknown);
    assert_eq!(source.calls(), 0);
    assert_eq!(collector.count().await, 0);
}

#[tokio::test]
async fn test_local_and_async_agree_without_sources() {
    let analyzer = base_analyzer();
    let profile = UserProfile::default();
    let local = analyzer.analyze_local(SCENARIO, &profile, Some("Serum"));
    let remote = analyzer.analyze(SCENARIO, &profile, Some("Serum")).await;

    assert_eq!(local.ingredients, remote.ingredients);
    assert_eq!(local.overall_rating, remote.overall_rating);
    assert_eq!(local.recommendations, remote.recommendations);
}

#[tokio::test]
async fn test_barcode_flow() {
    let products = StaticProducts::new()
        .with_product(ProductInfo {
            name: "Acme — Serum".to_string(),
            brand: Some("Acme".to_string()),
            ingredients_text: SCENARIO.to_string(),
            barcode: "4601234567890".to_string(),
            image_url: None,
        })
        .with_product(ProductInfo {
            name: "Acme — Mystery".to_string(),
            brand: Some("Acme".to_string()),
            ingredients_text: String::new(),
            barcode: "1111".to_string(),
            image_url: None,
        });
    let analyzer = base_analyzer().with_product_lookup(Arc::new(products));
    let profile = UserProfile::default();

    let result = analyzer.analyze_barcode(" 4601234567890 ", &profile, None).await.unwrap();
    assert_eq!(result.product_name, "Acme — Serum");
    assert_eq!(result.barcode.as_deref(), Some("4601234567890"));
    assert_eq!(result.ingredients.len(), 5);

    assert!(matches!(
        analyzer.analyze_barcode("1111", &profile, None).await,
        Err(AnalysisError::BarcodeNotFound(code)) if code == "1111"
    ));
    assert!(matches!(
        analyzer.analyze_barcode("0000", &profile, None).await,
        Err(AnalysisError::BarcodeNotFound(_))
    ));

    let failing = base_analyzer().with_product_lookup(Arc::new(StaticProducts::failing()));
    assert!(matches!(
        failing.analyze_barcode("4601234567890", &profile, None).await,
        Err(AnalysisError::BarcodeNotFound(_))
    ));
}
