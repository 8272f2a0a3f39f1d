//! Profile-specific warnings for individual ingredients.

use composition_core::{
    AnalyzedIngredient, Concern, IngredientColor, Preference, SkinType, UserProfile,
};

/// A single personalization rule.
///
/// When `condition` holds for a profile and ingredient, `warning` renders the
/// message added to the ingredient's personal warnings.
#[derive(Clone, Copy)]
pub struct PersonalizationRule {
    pub condition: fn(&UserProfile, &AnalyzedIngredient) -> bool,
    pub warning: fn(&AnalyzedIngredient) -> String,
}

fn drying_alcohol(i: &AnalyzedIngredient) -> bool {
    i.has_tag("alcohol") && !i.has_tag("fatty_alcohol")
}

fn is_lanolin(i: &AnalyzedIngredient) -> bool {
    i.name().to_lowercase().contains("lanolin") || i.canonical_name.to_lowercase().contains("lanolin")
}

/// The built-in rule table, evaluated in order.
pub static DEFAULT_RULES: &[PersonalizationRule] = &[
    PersonalizationRule {
        condition: |p, i| p.has_skin_type(SkinType::Oily) && i.record.comedogenicity >= 3,
        warning: |i| {
            format!(
                "У вас жирная кожа — {} имеет высокую комедогенность ({}/5)",
                i.name(),
                i.record.comedogenicity
            )
        },
    },
    PersonalizationRule {
        condition: |p, i| {
            p.has_skin_type(SkinType::Oily) && i.has_tag("occlusive") && i.record.comedogenicity >= 2
        },
        warning: |_| "Тяжёлые окклюзивы могут забивать поры при жирной коже".to_string(),
    },
    PersonalizationRule {
        condition: |p, i| p.has_skin_type(SkinType::Sensitive) && i.record.irritation >= 2,
        warning: |i| format!("У вас чувствительная кожа — {} может вызвать раздражение", i.name()),
    },
    PersonalizationRule {
        condition: |p, i| p.has_skin_type(SkinType::Sensitive) && i.has_tag("fragrance"),
        warning: |i| format!("Чувствительная кожа: {} — отдушка, может раздражать", i.name()),
    },
    PersonalizationRule {
        condition: |p, i| p.has_skin_type(SkinType::Sensitive) && i.has_tag("essential_oils"),
        warning: |i| format!("Чувствительная кожа: {} — эфирное масло, потенциальный раздражитель", i.name()),
    },
    PersonalizationRule {
        condition: |p, i| p.has_skin_type(SkinType::Sensitive) && drying_alcohol(i),
        warning: |_| "Чувствительная кожа: спирт может сушить и раздражать".to_string(),
    },
    PersonalizationRule {
        condition: |p, i| p.has_skin_type(SkinType::Dry) && drying_alcohol(i),
        warning: |_| "Сухая кожа: спирт будет дополнительно сушить".to_string(),
    },
    PersonalizationRule {
        condition: |p, i| p.has_skin_type(SkinType::Dry) && i.has_tag("drying"),
        warning: |i| format!("Сухая кожа: {} может сушить кожу", i.name()),
    },
    PersonalizationRule {
        condition: |p, i| p.has_concern(Concern::Acne) && i.record.comedogenicity >= 3,
        warning: |i| {
            format!(
                "Склонность к акне: {} может забивать поры (комедогенность {}/5)",
                i.name(),
                i.record.comedogenicity
            )
        },
    },
    PersonalizationRule {
        condition: |p, i| p.has_concern(Concern::Acne) && i.record.irritation >= 2,
        warning: |i| format!("Склонность к акне: {} может усилить воспаления", i.name()),
    },
    PersonalizationRule {
        condition: |p, i| p.has_concern(Concern::Rosacea) && i.has_tag("essential_oils"),
        warning: |i| format!("Розацеа: {} — эфирное масло может усилить покраснение", i.name()),
    },
    PersonalizationRule {
        condition: |p, i| p.has_concern(Concern::Rosacea) && drying_alcohol(i),
        warning: |_| "Розацеа: спирт может вызвать обострение".to_string(),
    },
    PersonalizationRule {
        condition: |p, i| p.has_concern(Concern::Rosacea) && i.has_tag("fragrance"),
        warning: |_| "Розацеа: отдушки могут вызвать обострение".to_string(),
    },
    PersonalizationRule {
        condition: |p, i| p.has_concern(Concern::Couperose) && i.record.irritation >= 2,
        warning: |i| format!("Купероз: {} может усилить покраснение", i.name()),
    },
    PersonalizationRule {
        condition: |p, i| p.has_preference(Preference::NoAlcohol) && drying_alcohol(i),
        warning: |i| format!("Вы избегаете спирта — {} содержит спирт", i.name()),
    },
    PersonalizationRule {
        condition: |p, i| p.has_preference(Preference::NoSilicones) && i.has_tag("silicones"),
        warning: |i| format!("Вы избегаете силиконов — {} является силиконом", i.name()),
    },
    PersonalizationRule {
        condition: |p, i| p.has_preference(Preference::NoEssentialOils) && i.has_tag("essential_oils"),
        warning: |i| format!("Вы избегаете эфирных масел — {}", i.name()),
    },
    PersonalizationRule {
        condition: |p, i| p.has_preference(Preference::NoParabens) && i.has_tag("parabens"),
        warning: |i| format!("Вы избегаете парабенов — {} является парабеном", i.name()),
    },
    PersonalizationRule {
        condition: |p, i| p.has_preference(Preference::NoSls) && (i.has_tag("sls") || i.has_tag("sles")),
        warning: |i| format!("Вы избегаете SLS/SLES — {}", i.name()),
    },
    PersonalizationRule {
        condition: |p, i| p.has_preference(Preference::NoFragrance) && i.has_tag("fragrance"),
        warning: |i| format!("Вы избегаете отдушек — {}", i.name()),
    },
    PersonalizationRule {
        condition: |p, i| p.has_preference(Preference::Vegan) && i.has_tag("allergen") && is_lanolin(i),
        warning: |_| "Вы предпочитаете веганские продукты — ланолин имеет животное происхождение".to_string(),
    },
];

/// Applies a rule table to analyzed ingredients.
#[derive(Clone)]
pub struct Personalizer {
    rules: Vec<PersonalizationRule>,
}

impl Personalizer {
    /// Personalizer with the built-in rules.
    pub fn builtin() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }

    pub fn new(rules: Vec<PersonalizationRule>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule against the ingredient.
    ///
    /// All matching rules contribute a warning. A green ingredient with any
    /// personal warning becomes yellow; no other color changes.
    pub fn apply(&self, profile: &UserProfile, ingredient: &mut AnalyzedIngredient) {
        for rule in &self.rules {
            if (rule.condition)(profile, ingredient) {
                let warning = (rule.warning)(ingredient);
                ingredient.personal_warnings.push(warning);
            }
        }

        if !ingredient.personal_warnings.is_empty() && ingredient.record.color == IngredientColor::Green {
            ingredient.record.color = IngredientColor::Yellow;
        }
    }
}

impl Default for Personalizer {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composition_core::IngredientRecord;

    fn ingredient(name: &str, color: IngredientColor, tags: &[&str]) -> AnalyzedIngredient {
        let mut record = IngredientRecord::unknown(name);
        record.color = color;
        record.tags = tags.iter().map(|t| t.to_string()).collect();
        AnalyzedIngredient::resolved(name, record)
    }

    fn profile_with(skin: &[SkinType], concerns: &[Concern], prefs: &[Preference]) -> UserProfile {
        UserProfile {
            skin_types: skin.to_vec(),
            concerns: concerns.to_vec(),
            preferences: prefs.to_vec(),
            onboarded: true,
        }
    }

    #[test]
    fn test_green_escalates_to_yellow() {
        let profile = profile_with(&[SkinType::Sensitive], &[], &[]);
        let mut linalool = ingredient("Linalool", IngredientColor::Green, &["fragrance"]);
        Personalizer::builtin().apply(&profile, &mut linalool);

        assert_eq!(linalool.personal_warnings, vec!["Чувствительная кожа: Linalool — отдушка, может раздражать"]);
        assert_eq!(linalool.color(), IngredientColor::Yellow);
    }

    #[test]
    fn test_red_and_gray_never_change() {
        let profile = profile_with(&[], &[], &[Preference::NoParabens]);
        let personalizer = Personalizer::builtin();

        let mut red = ingredient("Propylparaben", IngredientColor::Red, &["parabens"]);
        personalizer.apply(&profile, &mut red);
        assert_eq!(red.personal_warnings.len(), 1);
        assert_eq!(red.color(), IngredientColor::Red);

        let mut gray = ingredient("Butylparaben", IngredientColor::Gray, &["parabens"]);
        personalizer.apply(&profile, &mut gray);
        assert_eq!(gray.color(), IngredientColor::Gray);
    }

    #[test]
    fn test_all_matching_rules_fire() {
        let profile = profile_with(&[SkinType::Sensitive, SkinType::Dry], &[Concern::Rosacea], &[Preference::NoAlcohol]);
        let mut alcohol = ingredient("Alcohol Denat.", IngredientColor::Yellow, &["alcohol", "drying"]);
        Personalizer::builtin().apply(&profile, &mut alcohol);

        assert_eq!(
            alcohol.personal_warnings,
            vec![
                "Чувствительная кожа: спирт может сушить и раздражать",
                "Сухая кожа: спирт будет дополнительно сушить",
                "Сухая кожа: Alcohol Denat. может сушить кожу",
                "Розацеа: спирт может вызвать обострение",
                "Вы избегаете спирта — Alcohol Denat. содержит спирт",
            ]
        );
    }

    #[test]
    fn test_fatty_alcohol_is_not_drying() {
        let profile = profile_with(&[SkinType::Dry], &[], &[Preference::NoAlcohol]);
        let mut cetyl = ingredient("Cetyl Alcohol", IngredientColor::Green, &["alcohol", "fatty_alcohol"]);
        Personalizer::builtin().apply(&profile, &mut cetyl);

        assert!(cetyl.personal_warnings.is_empty());
        assert_eq!(cetyl.color(), IngredientColor::Green);
    }

    #[test]
    fn test_comedogenicity_rules() {
        let profile = profile_with(&[SkinType::Oily], &[Concern::Acne], &[]);
        let mut oil = ingredient("Coconut Oil", IngredientColor::Green, &["occlusive"]);
        oil.record.comedogenicity = 4;
        Personalizer::builtin().apply(&profile, &mut oil);

        assert_eq!(
            oil.personal_warnings,
            vec![
                "У вас жирная кожа — Coconut Oil имеет высокую комедогенность (4/5)",
                "Тяжёлые окклюзивы могут забивать поры при жирной коже",
                "Склонность к акне: Coconut Oil может забивать поры (комедогенность 4/5)",
            ]
        );
    }

    #[test]
    fn test_vegan_lanolin() {
        let profile = profile_with(&[], &[], &[Preference::Vegan]);
        let mut lanolin = ingredient("Lanolin", IngredientColor::Yellow, &["allergen"]);
        Personalizer::builtin().apply(&profile, &mut lanolin);
        assert_eq!(lanolin.personal_warnings.len(), 1);
    }

    #[test]
    fn test_empty_profile_adds_nothing() {
        let mut fragrance = ingredient("Parfum", IngredientColor::Yellow, &["fragrance", "essential_oils", "alcohol"]);
        Personalizer::builtin().apply(&UserProfile::default(), &mut fragrance);
        assert!(fragrance.personal_warnings.is_empty());
    }

    #[test]
    fn test_custom_rule_table() {
        let personalizer = Personalizer::new(vec![PersonalizationRule {
            condition: |_, i| i.has_tag("test"),
            warning: |i| format!("flagged {}", i.name()),
        }]);
        let mut item = ingredient("X", IngredientColor::Green, &["test"]);
        personalizer.apply(&UserProfile::default(), &mut item);
        assert_eq!(item.personal_warnings, vec!["flagged X"]);
        assert_eq!(personalizer.len(), 1);
    }
}
