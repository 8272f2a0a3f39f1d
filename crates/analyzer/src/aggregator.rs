//! Composition-level aggregation: actives, warning sets and the overall rating.

use composition_core::{
    AnalyzedIngredient, Effectiveness, IngredientCategory, IngredientColor, OverallRating,
};
use indexmap::IndexSet;

pub const TEXT_INSUFFICIENT_DATA: &str = "Недостаточно данных";
pub const TEXT_UNKNOWN: &str = "Неизвестно";
pub const TEXT_NOT_RECOMMENDED: &str = "Не рекомендуется";
pub const TEXT_CAUTION: &str = "С осторожностью";
pub const TEXT_INEFFECTIVE: &str = "Неэффективно";
pub const TEXT_RECOMMENDED: &str = "Рекомендуется";

/// Overall rating with its localized label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    pub rating: OverallRating,
    pub text: &'static str,
}

impl Rating {
    const fn new(rating: OverallRating, text: &'static str) -> Self {
        Self { rating, text }
    }
}

/// Known ingredients with a pronounced effect, in composition order.
pub fn actives(ingredients: &[AnalyzedIngredient]) -> Vec<AnalyzedIngredient> {
    ingredients
        .iter()
        .filter(|i| {
            !i.is_unknown
                && (matches!(
                    i.record.category,
                    IngredientCategory::Active | IngredientCategory::Exfoliant | IngredientCategory::Antioxidant
                ) || matches!(i.record.effectiveness, Effectiveness::High | Effectiveness::Medium))
        })
        .cloned()
        .collect()
}

/// Distinct ingredient warnings, first occurrence order.
pub fn warnings(ingredients: &[AnalyzedIngredient]) -> Vec<String> {
    dedup(ingredients.iter().flat_map(|i| i.record.warnings.iter()))
}

/// Distinct personal warnings, first occurrence order.
pub fn personal_warnings(ingredients: &[AnalyzedIngredient]) -> Vec<String> {
    dedup(ingredients.iter().flat_map(|i| i.personal_warnings.iter()))
}

fn dedup<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    items
        .map(String::as_str)
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Rate a composition.
///
/// Branches are checked in a fixed order and the first match wins, so a
/// hard violation (formaldehyde releaser, restricted tag, three reds) always
/// beats the softer yellow conditions.
pub fn overall_rating(ingredients: &[AnalyzedIngredient]) -> Rating {
    let total = ingredients.len();
    let known: Vec<&AnalyzedIngredient> = ingredients.iter().filter(|i| !i.is_unknown).collect();
    let unknown_count = total - known.len();

    if known.is_empty() {
        return Rating::new(IngredientColor::Gray, TEXT_INSUFFICIENT_DATA);
    }

    let unknown_ratio = unknown_count as f64 / total as f64;
    if unknown_ratio > 0.6 {
        return Rating::new(IngredientColor::Gray, TEXT_UNKNOWN);
    }

    let count = |color: IngredientColor| known.iter().filter(|i| i.color() == color).count();
    let red = count(IngredientColor::Red);
    let yellow = count(IngredientColor::Yellow);
    let green = count(IngredientColor::Green);
    let gray = count(IngredientColor::Gray);
    let personal: usize = known.iter().map(|i| i.personal_warnings.len()).sum();

    let high_comedogenic = known.iter().any(|i| i.record.comedogenicity >= 4);
    let formaldehyde = known.iter().any(|i| i.has_tag("formaldehyde_releaser"));
    let restricted = known.iter().any(|i| i.has_tag("restricted"));

    if formaldehyde || restricted || red >= 3 {
        return Rating::new(IngredientColor::Red, TEXT_NOT_RECOMMENDED);
    }

    if high_comedogenic || red >= 2 || personal >= 5 {
        return Rating::new(IngredientColor::Red, TEXT_NOT_RECOMMENDED);
    }

    if red >= 1 || yellow >= 3 || personal >= 3 {
        return Rating::new(IngredientColor::Yellow, TEXT_CAUTION);
    }

    let known_ratio = known.len() as f64 / total as f64;
    if known_ratio < 0.4 {
        return Rating::new(IngredientColor::Gray, TEXT_INSUFFICIENT_DATA);
    }

    if gray > green && unknown_count as f64 <= total as f64 * 0.3 {
        return Rating::new(IngredientColor::Gray, TEXT_INEFFECTIVE);
    }

    Rating::new(IngredientColor::Green, TEXT_RECOMMENDED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use composition_core::IngredientRecord;

    fn known(color: IngredientColor) -> AnalyzedIngredient {
        let mut record = IngredientRecord::unknown("Known");
        record.category = IngredientCategory::Base;
        record.color = color;
        AnalyzedIngredient::resolved("Known", record)
    }

    fn unknown() -> AnalyzedIngredient {
        AnalyzedIngredient::unknown("Mystery")
    }

    fn tagged(color: IngredientColor, tag: &str) -> AnalyzedIngredient {
        let mut i = known(color);
        i.record.tags.push(tag.to_string());
        i
    }

    fn with_personal(color: IngredientColor, n: usize) -> AnalyzedIngredient {
        let mut i = known(color);
        i.personal_warnings = (0..n).map(|k| format!("w{}", k)).collect();
        i
    }

    use IngredientColor::*;

    #[test]
    fn test_branch_1_no_known() {
        assert_eq!(overall_rating(&[]), Rating::new(Gray, TEXT_INSUFFICIENT_DATA));
        assert_eq!(overall_rating(&[unknown(), unknown()]), Rating::new(Gray, TEXT_INSUFFICIENT_DATA));
    }

    #[test]
    fn test_branch_2_mostly_unknown() {
        // 2 of 3 unknown is 66%.
        let set = [known(Red), unknown(), unknown()];
        assert_eq!(overall_rating(&set), Rating::new(Gray, TEXT_UNKNOWN));
    }

    #[test]
    fn test_branch_3_hard_violations() {
        assert_eq!(overall_rating(&[tagged(Green, "formaldehyde_releaser")]).rating, Red);
        assert_eq!(overall_rating(&[tagged(Green, "restricted")]).rating, Red);
        assert_eq!(overall_rating(&[known(Red), known(Red), known(Red)]).text, TEXT_NOT_RECOMMENDED);
    }

    #[test]
    fn test_branch_3_beats_yellow_conditions() {
        // Three yellows alone would be branch 5.
        let set = [known(Yellow), known(Yellow), known(Yellow), tagged(Green, "restricted")];
        assert_eq!(overall_rating(&set), Rating::new(Red, TEXT_NOT_RECOMMENDED));
    }

    #[test]
    fn test_branch_4_soft_red() {
        let mut oil = known(Green);
        oil.record.comedogenicity = 4;
        assert_eq!(overall_rating(&[oil, known(Green)]).rating, Red);
        assert_eq!(overall_rating(&[known(Red), known(Red), known(Green)]).rating, Red);
        assert_eq!(overall_rating(&[with_personal(Yellow, 5)]).rating, Red);
    }

    #[test]
    fn test_branch_5_caution() {
        assert_eq!(overall_rating(&[known(Red), known(Green)]), Rating::new(Yellow, TEXT_CAUTION));
        assert_eq!(overall_rating(&[known(Yellow), known(Yellow), known(Yellow)]).rating, Yellow);
        assert_eq!(overall_rating(&[with_personal(Yellow, 3), known(Green)]).rating, Yellow);
    }

    #[test]
    fn test_branch_6_shadowed_at_boundary() {
        // Known ratio below 40% means unknown ratio above 60%, which branch 2
        // already caught. At exactly 60% unknown neither fires.
        let set = [known(Green), known(Green), unknown(), unknown(), unknown()];
        assert_eq!(overall_rating(&set), Rating::new(Green, TEXT_RECOMMENDED));

        let set = [known(Green), unknown(), unknown()];
        assert_eq!(overall_rating(&set), Rating::new(Gray, TEXT_UNKNOWN));
    }

    #[test]
    fn test_branch_7_ineffective() {
        let set = [known(Gray), known(Gray), known(Green)];
        assert_eq!(overall_rating(&set), Rating::new(Gray, TEXT_INEFFECTIVE));
    }

    #[test]
    fn test_branch_7_needs_low_unknown_ratio() {
        // 4 of 10 unknown is above 30%, so gray-dominated falls through to green.
        let mut set = vec![known(Gray), known(Gray), known(Gray), known(Green), known(Green), known(Yellow)];
        set.extend((0..4).map(|_| unknown()));
        assert_eq!(overall_rating(&set), Rating::new(Green, TEXT_RECOMMENDED));
    }

    #[test]
    fn test_branch_8_recommended() {
        assert_eq!(overall_rating(&[known(Green), known(Yellow)]), Rating::new(Green, TEXT_RECOMMENDED));
    }

    #[test]
    fn test_actives_filter() {
        let mut niacinamide = known(Green);
        niacinamide.record.category = IngredientCategory::Active;
        let mut glycerin = known(Green);
        glycerin.record.effectiveness = Effectiveness::Medium;
        let mut ghost = unknown();
        ghost.record.effectiveness = Effectiveness::High;

        let set = vec![known(Green), niacinamide.clone(), glycerin.clone(), ghost];
        assert_eq!(actives(&set), vec![niacinamide, glycerin]);
    }

    #[test]
    fn test_warning_dedup_keeps_first_seen_order() {
        let mut a = known(Yellow);
        a.record.warnings = vec!["B".to_string(), "A".to_string()];
        let mut b = known(Yellow);
        b.record.warnings = vec!["A".to_string(), "C".to_string()];
        b.personal_warnings = vec!["P".to_string()];
        let mut c = known(Green);
        c.personal_warnings = vec!["P".to_string()];

        let set = [a, b, c];
        assert_eq!(warnings(&set), vec!["B", "A", "C"]);
        assert_eq!(personal_warnings(&set), vec!["P"]);
    }
}
