//! Product-level recommendations derived from ingredient tags and the profile.

use std::collections::HashSet;

use composition_core::{AnalyzedIngredient, Concern, Preference, UserProfile};

/// Tags present anywhere in a composition.
pub type TagSet<'a> = HashSet<&'a str>;

/// A recommendation emitted when `applies` holds.
#[derive(Clone, Copy)]
pub struct RecommendationRule {
    pub applies: fn(&HashSet<&str>, &UserProfile) -> bool,
    pub message: &'static str,
}

fn any(tags: &TagSet<'_>, wanted: &[&str]) -> bool {
    wanted.iter().any(|t| tags.contains(t))
}

/// The built-in recommendation table. Output follows table order.
pub static DEFAULT_RECOMMENDATIONS: &[RecommendationRule] = &[
    RecommendationRule {
        applies: |t, _| any(t, &["retinol", "acids", "aha", "bha"]),
        message: "Средство содержит ретинол или кислоты — обязательно наносите SPF 30+ утром",
    },
    RecommendationRule {
        applies: |t, _| t.contains("retinol") && any(t, &["aha", "bha"]),
        message: "В составе есть ретинол и кислоты одновременно — используйте с осторожностью, чередуйте",
    },
    RecommendationRule {
        applies: |t, _| t.contains("vitamin_c") && t.contains("retinol"),
        message: "Витамин C и ретинол лучше использовать в разное время (утро/вечер)",
    },
    RecommendationRule {
        applies: |t, _| t.contains("brightening"),
        message: "Средство с осветляющими компонентами — используйте SPF для лучшего результата",
    },
    RecommendationRule {
        applies: |t, p| p.has_concern(Concern::Acne) && t.contains("acne_fighter"),
        message: "Средство содержит компоненты для борьбы с акне — хороший выбор для вашей кожи",
    },
    RecommendationRule {
        applies: |t, p| p.has_concern(Concern::Aging) && t.contains("anti_aging"),
        message: "Средство содержит антивозрастные компоненты — подходит для вашего профиля",
    },
    RecommendationRule {
        applies: |t, p| p.has_concern(Concern::Pigmentation) && t.contains("anti_pigmentation"),
        message: "Средство содержит осветляющие компоненты — подходит при пигментации",
    },
    RecommendationRule {
        applies: |t, p| p.has_preference(Preference::LookingForRetinol) && t.contains("retinol"),
        message: "Вы искали ретинол — он найден в составе",
    },
    RecommendationRule {
        applies: |t, p| p.has_preference(Preference::LookingForAcids) && any(t, &["aha", "bha", "pha"]),
        message: "Вы искали кислоты — они найдены в составе",
    },
    RecommendationRule {
        applies: |t, p| p.has_preference(Preference::LookingForPeptides) && t.contains("peptides"),
        message: "Вы искали пептиды — они найдены в составе",
    },
    RecommendationRule {
        applies: |t, p| p.has_preference(Preference::LookingForVitaminC) && t.contains("vitamin_c"),
        message: "Вы искали витамин C — он найден в составе",
    },
    RecommendationRule {
        applies: |t, p| p.has_preference(Preference::LookingForNiacinamide) && t.contains("niacinamide"),
        message: "Вы искали ниацинамид — он найден в составе",
    },
    RecommendationRule {
        applies: |t, p| p.has_preference(Preference::LookingForSpf) && t.contains("spf"),
        message: "Вы искали SPF — солнцезащитные фильтры найдены",
    },
];

/// Collect the tags of every ingredient.
pub fn collect_tags(ingredients: &[AnalyzedIngredient]) -> TagSet<'_> {
    ingredients
        .iter()
        .flat_map(|i| i.record.tags.iter().map(String::as_str))
        .collect()
}

/// Recommendations for a composition, in rule-table order.
pub fn recommend(rules: &[RecommendationRule], ingredients: &[AnalyzedIngredient], profile: &UserProfile) -> Vec<String> {
    let tags = collect_tags(ingredients);
    rules
        .iter()
        .filter(|rule| (rule.applies)(&tags, profile))
        .map(|rule| rule.message.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use composition_core::IngredientRecord;

    fn tagged(tags: &[&str]) -> AnalyzedIngredient {
        let mut record = IngredientRecord::unknown("X");
        record.tags = tags.iter().map(|t| t.to_string()).collect();
        AnalyzedIngredient::resolved("X", record)
    }

    #[test]
    fn test_retinol_with_acids() {
        let ingredients = vec![tagged(&["retinol", "anti_aging"]), tagged(&["acids", "aha"])];
        let recs = recommend(DEFAULT_RECOMMENDATIONS, &ingredients, &UserProfile::default());
        assert_eq!(
            recs,
            vec![
                "Средство содержит ретинол или кислоты — обязательно наносите SPF 30+ утром",
                "В составе есть ретинол и кислоты одновременно — используйте с осторожностью, чередуйте",
            ]
        );
    }

    #[test]
    fn test_profile_gated_messages() {
        let ingredients = vec![tagged(&["niacinamide", "acne_fighter"])];
        assert!(recommend(DEFAULT_RECOMMENDATIONS, &ingredients, &UserProfile::default()).is_empty());

        let profile = UserProfile {
            concerns: vec![Concern::Acne],
            preferences: vec![Preference::LookingForNiacinamide],
            ..UserProfile::default()
        };
        assert_eq!(
            recommend(DEFAULT_RECOMMENDATIONS, &ingredients, &profile),
            vec![
                "Средство содержит компоненты для борьбы с акне — хороший выбор для вашей кожи",
                "Вы искали ниацинамид — он найден в составе",
            ]
        );
    }

    #[test]
    fn test_no_tags_no_recommendations() {
        assert!(recommend(DEFAULT_RECOMMENDATIONS, &[], &UserProfile::default()).is_empty());
    }
}
