//! User profile used to personalize an analysis.

use serde::{Deserialize, Serialize};

/// Skin type, multi-select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinType {
    Oily,
    Dry,
    Sensitive,
    Normal,
}

impl SkinType {
    pub const ALL: [SkinType; 4] = [Self::Oily, Self::Dry, Self::Sensitive, Self::Normal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oily => "oily",
            Self::Dry => "dry",
            Self::Sensitive => "sensitive",
            Self::Normal => "normal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Oily => "Жирная/проблемная",
            Self::Dry => "Сухая",
            Self::Sensitive => "Чувствительная",
            Self::Normal => "Нормальная",
        }
    }

    /// Parse from the snake_case identifier.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// Skin concern, multi-select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concern {
    Acne,
    Rosacea,
    Couperose,
    Pigmentation,
    Aging,
    Dehydration,
    EnlargedPores,
    Dullness,
    DarkCircles,
}

impl Concern {
    pub const ALL: [Concern; 9] = [
        Self::Acne,
        Self::Rosacea,
        Self::Couperose,
        Self::Pigmentation,
        Self::Aging,
        Self::Dehydration,
        Self::EnlargedPores,
        Self::Dullness,
        Self::DarkCircles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acne => "acne",
            Self::Rosacea => "rosacea",
            Self::Couperose => "couperose",
            Self::Pigmentation => "pigmentation",
            Self::Aging => "aging",
            Self::Dehydration => "dehydration",
            Self::EnlargedPores => "enlarged_pores",
            Self::Dullness => "dullness",
            Self::DarkCircles => "dark_circles",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Acne => "Акне",
            Self::Rosacea => "Розацеа",
            Self::Couperose => "Купероз",
            Self::Pigmentation => "Пигментация",
            Self::Aging => "Возрастные изменения",
            Self::Dehydration => "Обезвоженность",
            Self::EnlargedPores => "Расширенные поры",
            Self::Dullness => "Тусклость",
            Self::DarkCircles => "Тёмные круги",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// Ingredient preference: something the user looks for or avoids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    LookingForRetinol,
    LookingForAcids,
    LookingForPeptides,
    LookingForVitaminC,
    LookingForNiacinamide,
    LookingForSpf,
    NoAlcohol,
    NoSilicones,
    NoEssentialOils,
    NoParabens,
    NoSls,
    NoFragrance,
    Vegan,
    CrueltyFree,
}

impl Preference {
    pub const ALL: [Preference; 14] = [
        Self::LookingForRetinol,
        Self::LookingForAcids,
        Self::LookingForPeptides,
        Self::LookingForVitaminC,
        Self::LookingForNiacinamide,
        Self::LookingForSpf,
        Self::NoAlcohol,
        Self::NoSilicones,
        Self::NoEssentialOils,
        Self::NoParabens,
        Self::NoSls,
        Self::NoFragrance,
        Self::Vegan,
        Self::CrueltyFree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LookingForRetinol => "looking_for_retinol",
            Self::LookingForAcids => "looking_for_acids",
            Self::LookingForPeptides => "looking_for_peptides",
            Self::LookingForVitaminC => "looking_for_vitamin_c",
            Self::LookingForNiacinamide => "looking_for_niacinamide",
            Self::LookingForSpf => "looking_for_spf",
            Self::NoAlcohol => "no_alcohol",
            Self::NoSilicones => "no_silicones",
            Self::NoEssentialOils => "no_essential_oils",
            Self::NoParabens => "no_parabens",
            Self::NoSls => "no_sls",
            Self::NoFragrance => "no_fragrance",
            Self::Vegan => "vegan",
            Self::CrueltyFree => "cruelty_free",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::LookingForRetinol => "Ищу ретинол",
            Self::LookingForAcids => "Ищу кислоты",
            Self::LookingForPeptides => "Ищу пептиды",
            Self::LookingForVitaminC => "Ищу витамин C",
            Self::LookingForNiacinamide => "Ищу ниацинамид",
            Self::LookingForSpf => "Ищу SPF",
            Self::NoAlcohol => "Без спирта",
            Self::NoSilicones => "Без силиконов",
            Self::NoEssentialOils => "Без эфирных масел",
            Self::NoParabens => "Без парабенов",
            Self::NoSls => "Без SLS/SLES",
            Self::NoFragrance => "Без отдушек",
            Self::Vegan => "Веган",
            Self::CrueltyFree => "Не тестируется на животных",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// Per-installation user profile.
///
/// Selections keep the order in which the user made them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub skin_types: Vec<SkinType>,
    #[serde(default)]
    pub concerns: Vec<Concern>,
    #[serde(default)]
    pub preferences: Vec<Preference>,
    #[serde(rename = "isOnboarded", default)]
    pub onboarded: bool,
}

impl UserProfile {
    pub fn has_skin_type(&self, skin_type: SkinType) -> bool {
        self.skin_types.contains(&skin_type)
    }

    pub fn has_concern(&self, concern: Concern) -> bool {
        self.concerns.contains(&concern)
    }

    pub fn has_preference(&self, preference: Preference) -> bool {
        self.preferences.contains(&preference)
    }

    /// Select the skin type if absent, deselect it if present.
    pub fn toggle_skin_type(&mut self, skin_type: SkinType) {
        toggle(&mut self.skin_types, skin_type);
    }

    pub fn toggle_concern(&mut self, concern: Concern) {
        toggle(&mut self.concerns, concern);
    }

    pub fn toggle_preference(&mut self, preference: Preference) {
        toggle(&mut self.preferences, preference);
    }

    pub fn complete_onboarding(&mut self) {
        self.onboarded = true;
    }

    /// Return to the default, empty profile.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if let Some(pos) = items.iter().position(|i| *i == item) {
        items.remove(pos);
    } else {
        items.push(item);
    }
}
