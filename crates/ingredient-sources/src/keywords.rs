//! Keyword tables that turn free text into a coarse classification.
//!
//! Every table is ordered and scanned first-match-wins against lowercased
//! text.

use composition_core::{IngredientCategory, IngredientColor};

use IngredientCategory::*;

/// Label used when no category keyword matched.
pub const UNKNOWN_CATEGORY_LABEL: &str = "Компонент";

/// A category with the label to show for it.
pub type CategoryMatch = (IngredientCategory, &'static str);

/// Open Beauty Facts ingredient tag keywords.
pub const PRODUCT_TAG_CATEGORIES: &[(&str, CategoryMatch)] = &[
    ("emollient", (Emollient, "Эмолент")),
    ("humectant", (Humectant, "Увлажнитель")),
    ("surfactant", (Surfactant, "ПАВ")),
    ("preservative", (Preservative, "Консервант")),
    ("fragrance", (Fragrance, "Отдушка")),
    ("colorant", (Colorant, "Краситель")),
    ("uv filter", (Sunscreen, "Солнцезащитный")),
    ("uv absorber", (Sunscreen, "Солнцезащитный")),
    ("antioxidant", (Antioxidant, "Антиоксидант")),
    ("chelating", (Chelating, "Хелатирующий агент")),
    ("viscosity", (Thickener, "Загуститель")),
    ("solvent", (Solvent, "Растворитель")),
    ("skin conditioning", (Emollient, "Кондиционер для кожи")),
    ("hair conditioning", (Emollient, "Кондиционер для волос")),
    ("emulsif", (Emulsifier, "Эмульгатор")),
    ("film forming", (FilmFormer, "Плёнкообразователь")),
    ("buffering", (PhAdjuster, "Регулятор pH")),
    ("masking", (Fragrance, "Маскирующий агент")),
];

/// Encyclopedia summary keywords.
pub const SUMMARY_CATEGORIES: &[(&str, CategoryMatch)] = &[
    ("surfactant", (Surfactant, "ПАВ")),
    ("detergent", (Surfactant, "ПАВ")),
    ("emulsif", (Emulsifier, "Эмульгатор")),
    ("preserv", (Preservative, "Консервант")),
    ("antimicrobial", (Preservative, "Консервант")),
    ("moistur", (Humectant, "Увлажнитель")),
    ("humectant", (Humectant, "Увлажнитель")),
    ("hydrat", (Humectant, "Увлажнитель")),
    ("emollient", (Emollient, "Эмолент")),
    ("soften", (Emollient, "Эмолент")),
    ("antioxidant", (Antioxidant, "Антиоксидант")),
    ("sunscreen", (Sunscreen, "Солнцезащитный")),
    ("uv filter", (Sunscreen, "Солнцезащитный")),
    ("uv absorb", (Sunscreen, "Солнцезащитный")),
    ("photoprotect", (Sunscreen, "Солнцезащитный")),
    ("fragrance", (Fragrance, "Отдушка")),
    ("perfume", (Fragrance, "Отдушка")),
    ("aroma", (Fragrance, "Отдушка")),
    ("scent", (Fragrance, "Отдушка")),
    ("colorant", (Colorant, "Краситель")),
    ("pigment", (Colorant, "Краситель")),
    ("dye", (Colorant, "Краситель")),
    ("thicken", (Thickener, "Загуститель")),
    ("viscosity", (Thickener, "Загуститель")),
    ("gelling", (Thickener, "Загуститель")),
    ("solvent", (Solvent, "Растворитель")),
    ("exfoli", (Exfoliant, "Эксфолиант")),
    ("peel", (Exfoliant, "Эксфолиант")),
    ("sooth", (Soothing, "Успокаивающий")),
    ("anti-inflam", (Soothing, "Успокаивающий")),
    ("calm", (Soothing, "Успокаивающий")),
    ("chelat", (Chelating, "Хелатирующий агент")),
    ("film", (FilmFormer, "Плёнкообразователь")),
    ("occlusi", (Occlusive, "Окклюзив")),
    ("barrier", (Occlusive, "Окклюзив")),
    ("ph adjust", (PhAdjuster, "Регулятор pH")),
    ("buffer", (PhAdjuster, "Регулятор pH")),
    ("extract", (Active, "Экстракт")),
    ("botanical", (Active, "Растительный компонент")),
    ("herb", (Active, "Растительный компонент")),
    ("plant", (Active, "Растительный компонент")),
    ("skin care", (Active, "Актив")),
    ("skincare", (Active, "Актив")),
    ("condition", (Emollient, "Кондиционер")),
    ("lubric", (Emollient, "Эмолент")),
    ("fatty acid", (Emollient, "Жирная кислота")),
    ("fatty alcohol", (Emollient, "Жирный спирт")),
    ("wax", (Occlusive, "Воск")),
    ("silicone", (Emollient, "Силикон")),
    ("polymer", (Thickener, "Полимер")),
    ("amino acid", (Active, "Аминокислота")),
    ("peptide", (Active, "Пептид")),
    ("vitamin", (Active, "Витамин")),
    ("essential oil", (Fragrance, "Эфирное масло")),
];

const DANGER: &[&str] = &[
    "toxic", "carcinogen", "mutagen", "banned", "prohibited", "hazardous", "harmful", "poison",
];

const CAUTION: &[&str] = &[
    "irritat", "sensitiz", "allergen", "controversial", "concern", "restrict", "side effect", "adverse",
];

const BENEFIT: &[&str] = &[
    "beneficial", "protective", "healing", "therapeutic", "medicin", "treat", "anti-aging",
    "anti-wrinkle", "wound heal", "regenerat", "nourish", "repair",
];

pub const DANGER_WARNING: &str = "Потенциально опасный компонент";
pub const IRRITATION_WARNING: &str = "Может вызвать раздражение";
pub const ALLERGEN_WARNING: &str = "Потенциальный аллерген";
pub const RESTRICTED_WARNING: &str = "Имеет ограничения по использованию";
pub const SIDE_EFFECTS_WARNING: &str = "Возможны побочные эффекты";
pub const CAUTION_WARNING: &str = "Требует осторожности";
pub const FRAGRANCE_WARNING: &str = "Отдушка — может вызвать реакцию у чувствительной кожи";

/// Benefit phrase triggers, in output order.
const BENEFIT_PHRASES: &[(&[&str], &str)] = &[
    (&["anti-aging", "anti-wrinkle"], "антивозрастное действие"),
    (&["antioxidant"], "антиоксидантная защита"),
    (&["moistur", "hydrat", "humectant"], "увлажнение"),
    (&["anti-inflam", "sooth", "calm"], "успокаивающее действие"),
    (&["brighten", "whiten", "lighten"], "осветление кожи"),
    (&["wound heal", "regenerat", "repair"], "восстановление кожи"),
    (&["antibacter", "antimicrob"], "антибактериальное действие"),
    (&["collagen"], "поддержка выработки коллагена"),
    (&["protect"], "защита кожи"),
    (&["nourish"], "питание кожи"),
    (&["firm", "elastic"], "повышение упругости"),
    (&["cleansing", "cleanser"], "очищение"),
    (&["exfoli"], "отшелушивание"),
    (&["emollient", "soften", "smooth"], "смягчение кожи"),
    (&["stabiliz", "stabilise"], "стабилизация состава"),
    (&["foaming", "lather"], "пенообразование"),
    (&["condition"], "кондиционирование"),
    (&["thicken", "viscosity"], "загущение состава"),
];

/// At most this many benefit phrases go into a description.
pub const MAX_BENEFIT_PHRASES: usize = 3;

fn first_match(text: &str, table: &[(&str, CategoryMatch)]) -> Option<CategoryMatch> {
    let lower = text.to_lowercase();
    table
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, m)| *m)
}

/// Category from an Open Beauty Facts ingredient tag.
pub fn product_tag_category(tag: &str) -> Option<CategoryMatch> {
    first_match(tag, PRODUCT_TAG_CATEGORIES)
}

/// Category from an encyclopedia summary; unknown when nothing matches.
pub fn summary_category(text: &str) -> CategoryMatch {
    first_match(text, SUMMARY_CATEGORIES).unwrap_or((Unknown, UNKNOWN_CATEGORY_LABEL))
}

/// Safety color and warnings inferred from a summary.
///
/// Danger keywords win immediately, then caution keywords, then benefit
/// keywords or a known-good category, then the fragrance caution, then any
/// known category. Everything else is gray.
pub fn summary_safety(text: &str, category: IngredientCategory) -> (IngredientColor, Vec<String>) {
    let lower = text.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has(DANGER) {
        return (IngredientColor::Red, vec![DANGER_WARNING.to_string()]);
    }

    if has(CAUTION) {
        let mut warnings = Vec::new();
        if lower.contains("irritat") {
            warnings.push(IRRITATION_WARNING.to_string());
        }
        if lower.contains("allergen") || lower.contains("sensitiz") {
            warnings.push(ALLERGEN_WARNING.to_string());
        }
        if lower.contains("restrict") {
            warnings.push(RESTRICTED_WARNING.to_string());
        }
        if lower.contains("side effect") || lower.contains("adverse") {
            warnings.push(SIDE_EFFECTS_WARNING.to_string());
        }
        if warnings.is_empty() {
            warnings.push(CAUTION_WARNING.to_string());
        }
        return (IngredientColor::Yellow, warnings);
    }

    if has(BENEFIT) || matches!(category, Active | Antioxidant | Humectant | Soothing) {
        return (IngredientColor::Green, Vec::new());
    }

    if category == Fragrance {
        return (IngredientColor::Yellow, vec![FRAGRANCE_WARNING.to_string()]);
    }

    if category != Unknown {
        return (IngredientColor::Green, Vec::new());
    }

    (IngredientColor::Gray, Vec::new())
}

/// Up to three distinct benefit phrases found in the text, in table order.
pub fn benefit_phrases(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    let mut phrases: Vec<&'static str> = Vec::new();
    for (triggers, phrase) in BENEFIT_PHRASES {
        if triggers.iter().any(|t| lower.contains(t)) && !phrases.contains(phrase) {
            phrases.push(phrase);
        }
        if phrases.len() == MAX_BENEFIT_PHRASES {
            break;
        }
    }
    phrases
}
