//! Translation between localized (Cyrillic) ingredient names and INCI names.
//!
//! The forward direction maps label text to the English vocabulary the
//! registry and remote sources key on. The reverse direction turns short
//! English summaries into localized descriptions.

use composition_core::{GENERIC_DESCRIPTION, GENERIC_DESCRIPTION_SUFFIX};
use indexmap::IndexMap;
use tracing::debug;

use crate::data::dictionary::{ENGLISH_TO_SOURCE_TERMS, SOURCE_TO_INCI};

/// Share of delimited parts that must be Cyrillic before a block is translated.
const BLOCK_MAJORITY: f64 = 0.3;

/// Share of Latin words above which a description counts as untranslated.
const ENGLISH_RESIDUE: f64 = 0.4;

/// Descriptions shorter than this are replaced by the category template.
const MIN_DESCRIPTION_CHARS: usize = 10;

/// Localized label of the "unknown" category, which never makes a template.
const PLAIN_COMPONENT_LABEL: &str = "Компонент";

const NO_CATEGORY_TEMPLATE: &str = "Компонент косметических средств";

/// True if the text contains any Cyrillic letter.
pub fn is_source_script(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё'))
}

/// Lowercase and fold `ё` into `е`.
fn normalize(text: &str) -> String {
    text.to_lowercase().replace('ё', "е")
}

/// Character-by-character romanization. Unmapped characters pass through.
pub fn transliterate(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            'а' => "a",
            'б' => "b",
            'в' => "v",
            'г' => "g",
            'д' => "d",
            'е' | 'ё' | 'э' => "e",
            'ж' => "zh",
            'з' => "z",
            'и' => "i",
            'й' | 'ы' => "y",
            'к' => "k",
            'л' => "l",
            'м' => "m",
            'н' => "n",
            'о' => "o",
            'п' => "p",
            'р' => "r",
            'с' => "s",
            'т' => "t",
            'у' => "u",
            'ф' => "f",
            'х' => "kh",
            'ц' => "ts",
            'ч' => "ch",
            'ш' => "sh",
            'щ' => "shch",
            'ъ' | 'ь' => "",
            'ю' => "yu",
            'я' => "ya",
            other => return other.to_string(),
        }
        .to_string())
        .collect()
}

/// Bidirectional ingredient translator.
///
/// Dictionary keys are stored normalized (lowercase, `ё` folded), so the
/// exact and the diacritic-normalized lookups collapse into one map probe.
/// When several keys are normalized to the same string the first authored
/// entry wins.
#[derive(Debug, Clone)]
pub struct Translator {
    /// Normalized localized name -> INCI name, in authoring order.
    names: IndexMap<String, String>,
    /// English term -> localized term, longest term first.
    terms: Vec<(String, String)>,
}

impl Translator {
    /// Translator over the built-in tables.
    pub fn builtin() -> Self {
        Self::new(
            SOURCE_TO_INCI.iter().map(|(k, v)| (k.to_string(), v.to_string())),
            ENGLISH_TO_SOURCE_TERMS.iter().map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    /// Build a translator from explicit tables.
    pub fn new<N, T>(names: N, terms: T) -> Self
    where
        N: IntoIterator<Item = (String, String)>,
        T: IntoIterator<Item = (String, String)>,
    {
        let mut map = IndexMap::new();
        for (source, inci) in names {
            map.entry(normalize(&source)).or_insert(inci);
        }

        let mut terms: Vec<(String, String)> = terms
            .into_iter()
            .map(|(en, localized)| (en.to_lowercase(), localized))
            .collect();
        // Stable sort keeps authoring order among equal lengths.
        terms.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Self { names: map, terms }
    }

    /// Number of localized names known to the dictionary.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Translate one ingredient name to its INCI form.
    ///
    /// Non-Cyrillic input is returned trimmed and otherwise unchanged. For
    /// Cyrillic input the order is: exact dictionary match, containment match,
    /// transliteration. Never returns an empty string for non-empty input.
    pub fn translate_token(&self, name: &str) -> String {
        let trimmed = name.trim();
        if !is_source_script(trimmed) {
            return trimmed.to_string();
        }

        let lower = normalize(trimmed);
        if let Some(inci) = self.names.get(&lower) {
            debug!("Translated '{}' -> '{}'", trimmed, inci);
            return inci.clone();
        }

        if let Some(inci) = self.containment_match(&lower) {
            debug!("Translated '{}' -> '{}' (partial)", trimmed, inci);
            return inci.to_string();
        }

        let romanized = transliterate(&lower);
        debug!("Transliterated '{}' -> '{}'", trimmed, romanized);
        if romanized.trim().is_empty() {
            trimmed.to_string()
        } else {
            romanized
        }
    }

    /// Containment fallback.
    ///
    /// A key found inside the token wins first, longest key preferred. Failing
    /// that, a key that contains the token wins, shortest key preferred. Ties
    /// go to the earlier authored entry.
    fn containment_match(&self, lower: &str) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (key, inci) in &self.names {
            if lower.contains(key.as_str()) && best.map_or(true, |(_, len)| key.len() > len) {
                best = Some((inci.as_str(), key.len()));
            }
        }
        if let Some((inci, _)) = best {
            return Some(inci);
        }

        for (key, inci) in &self.names {
            if key.contains(lower) && best.map_or(true, |(_, len)| key.len() < len) {
                best = Some((inci.as_str(), key.len()));
            }
        }
        best.map(|(inci, _)| inci)
    }

    /// See [`has_source_language_majority`].
    pub fn has_source_language_majority(&self, raw: &str) -> bool {
        has_source_language_majority(raw)
    }

    /// Translate a whole composition if most of it is Cyrillic.
    ///
    /// Cyrillic parts are translated one by one and the block is re-joined
    /// with `", "`; Latin parts are kept as written. A mostly-Latin block is
    /// returned unchanged.
    pub fn translate_composition_block(&self, raw: &str) -> String {
        if !has_source_language_majority(raw) {
            return raw.to_string();
        }
        debug!("Composition is mostly Cyrillic, translating");

        split_parts(raw)
            .map(|part| {
                if is_source_script(part) {
                    self.translate_token(part)
                } else {
                    part.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render an English summary in the localized language.
    ///
    /// Known terms are replaced longest first, case-insensitively, on whole
    /// words; the first two sentences are kept. When the result is still
    /// mostly English, or nothing could be translated, the category template
    /// `"{label} — компонент косметических средств"` is used instead.
    pub fn translate_description(&self, english: &str, category_label: Option<&str>) -> String {
        if english.chars().count() < MIN_DESCRIPTION_CHARS {
            return match category_label {
                Some(label) => category_template(label),
                None => NO_CATEGORY_TEMPLATE.to_string(),
            };
        }

        let mut text = english.to_string();
        for (term, localized) in &self.terms {
            text = replace_word_ignore_case(&text, term, localized);
        }
        let translated = first_sentences(&text, 2);

        if has_significant_english(&translated) {
            return match category_label {
                Some(label) if label != PLAIN_COMPONENT_LABEL => category_template(label),
                _ => GENERIC_DESCRIPTION.to_string(),
            };
        }

        match category_label {
            Some(label) if translated == english => category_template(label),
            _ => translated,
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::builtin()
    }
}

/// True when more than 30% of the delimited parts contain Cyrillic.
///
/// Empty parts are not counted.
pub fn has_source_language_majority(raw: &str) -> bool {
    let (total, cyrillic) = split_parts(raw).fold((0usize, 0usize), |(total, cyr), part| {
        (total + 1, cyr + usize::from(is_source_script(part)))
    });
    total > 0 && cyrillic as f64 > total as f64 * BLOCK_MAJORITY
}

fn split_parts(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c| matches!(c, ',' | ';' | '/' | '\n'))
        .map(str::trim)
        .filter(|p| !p.is_empty())
}

fn category_template(label: &str) -> String {
    format!("{} {}", label, GENERIC_DESCRIPTION_SUFFIX)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replace whole-word, ASCII-case-insensitive occurrences of `term`.
fn replace_word_ignore_case(text: &str, term: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut skip_until = 0;
    for (i, c) in text.char_indices() {
        if i < skip_until {
            continue;
        }
        let end = i + term.len();
        let matched = text
            .get(i..end)
            .map_or(false, |window| window.eq_ignore_ascii_case(term))
            && !text[..i].chars().next_back().map_or(false, is_word_char)
            && !text[end..].chars().next().map_or(false, is_word_char);
        if matched {
            out.push_str(replacement);
            skip_until = end;
        } else {
            out.push(c);
        }
    }
    out
}

/// First `n` sentences, where a sentence ends at `.`, `!` or `?` followed by
/// whitespace.
pub fn first_sentences(text: &str, n: usize) -> String {
    let mut sentences: Vec<&str> = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let followed_by_space = chars.peek().map_or(false, |&(_, next)| next.is_whitespace());
        if !followed_by_space {
            continue;
        }
        sentences.push(&text[start..i + c.len_utf8()]);
        if sentences.len() == n {
            return sentences.join(" ");
        }
        start = text.len();
        while let Some(&(j, w)) = chars.peek() {
            if !w.is_whitespace() {
                start = j;
                break;
            }
            chars.next();
        }
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences.join(" ")
}

/// More than 40% of words longer than two characters are pure Latin.
fn has_significant_english(text: &str) -> bool {
    let words: Vec<&str> = text.split_whitespace().filter(|w| w.chars().count() > 2).collect();
    if words.is_empty() {
        return false;
    }
    let latin = words
        .iter()
        .filter(|w| {
            let core: String = w
                .chars()
                .filter(|c| !matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '-' | '(' | ')' | '[' | ']'))
                .collect();
            !core.is_empty() && core.chars().all(|c| c.is_ascii_alphabetic())
        })
        .count();
    latin as f64 / words.len() as f64 > ENGLISH_RESIDUE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Translator {
        Translator::new(
            [
                ("масло", "Oil"),
                ("масло ши", "Shea Butter"),
                ("экстракт ромашки", "Chamomilla Recutita Extract"),
                ("мёд", "Honey"),
            ]
            .into_iter()
            .map(|(a, b)| (a.to_string(), b.to_string())),
            [("emollient", "смягчающий компонент"), ("oil", "масло")]
                .into_iter()
                .map(|(a, b)| (a.to_string(), b.to_string())),
        )
    }

    #[test]
    fn test_source_script_detection() {
        assert!(is_source_script("Вода"));
        assert!(is_source_script("Aqua / вода"));
        assert!(is_source_script("Ёж"));
        assert!(!is_source_script("Aqua"));
        assert!(!is_source_script(""));
    }

    #[test]
    fn test_dictionary_terms_translate_exactly() {
        let t = Translator::builtin();
        assert_eq!(t.translate_token("вода"), "Water");
        assert_eq!(t.translate_token("  Глицерин "), "Glycerin");
        assert_eq!(t.translate_token("ПАРФЮМЕРНАЯ КОМПОЗИЦИЯ"), "Parfum");
        assert_eq!(t.translate_token("Лаурилсульфат натрия"), "Sodium Lauryl Sulfate");
    }

    #[test]
    fn test_diacritic_variants_match() {
        let t = Translator::builtin();
        assert_eq!(t.translate_token("экстракт зелёного чая"), "Camellia Sinensis Leaf Extract");
        assert_eq!(t.translate_token("мед"), "Honey");
        assert_eq!(small().translate_token("МЁД"), "Honey");
    }

    #[test]
    fn test_english_returned_unchanged() {
        let t = Translator::builtin();
        assert_eq!(t.translate_token("Niacinamide"), "Niacinamide");
        assert_eq!(t.translate_token(" Aqua "), "Aqua");
    }

    #[test]
    fn test_containment_prefers_longest_contained_key() {
        let t = small();
        assert_eq!(t.translate_token("масло ши органическое"), "Shea Butter");
        assert_eq!(t.translate_token("масло неизвестное"), "Oil");
    }

    #[test]
    fn test_containment_token_inside_key() {
        assert_eq!(small().translate_token("ромашки"), "Chamomilla Recutita Extract");
    }

    #[test]
    fn test_unmapped_token_transliterates() {
        let t = small();
        let out = t.translate_token("Щавель");
        assert_eq!(out, "shchavel");
        assert_eq!(transliterate("Юкка"), "yukka");
        assert_eq!(transliterate("съешь 5%"), "sesh 5%");
    }

    #[test]
    fn test_hard_signs_never_translate_to_empty() {
        let t = small();
        assert_eq!(t.translate_token("ъь"), "ъь");
    }

    #[test]
    fn test_block_majority() {
        assert!(has_source_language_majority("Вода, Глицерин, Niacinamide"));
        assert!(has_source_language_majority("Вода, Aqua, Glycerin"));
        assert!(!has_source_language_majority("Вода, Aqua, Glycerin, Niacinamide"));
        assert!(!has_source_language_majority(""));
    }

    #[test]
    fn test_translate_block() {
        let t = Translator::builtin();
        assert_eq!(
            t.translate_composition_block("Вода; глицерин/ Niacinamide"),
            "Water, Glycerin, Niacinamide"
        );
        let english = "Aqua, Glycerin, Niacinamide";
        assert_eq!(t.translate_composition_block(english), english);
    }

    #[test]
    fn test_description_short_text_uses_template() {
        let t = small();
        assert_eq!(t.translate_description("Oil", Some("Эмолент")), "Эмолент — компонент косметических средств");
        assert_eq!(t.translate_description("", None), "Компонент косметических средств");
    }

    #[test]
    fn test_description_whole_word_replacement() {
        let t = small();
        assert_eq!(
            t.translate_description("Emollient масло. Oil масло масло! Third sentence.", None),
            "смягчающий компонент масло. масло масло масло!"
        );
        // "oily" is not a whole-word match for "oil"
        assert_eq!(replace_word_ignore_case("Oily OIL oil_x", "oil", "X"), "Oily X oil_x");
    }

    #[test]
    fn test_description_english_residue_falls_back() {
        let t = Translator::builtin();
        let english = "Glyceryl caprylate is produced from vegetable sources by esterification.";
        assert_eq!(t.translate_description(english, Some("Эмолент")), "Эмолент — компонент косметических средств");
        assert_eq!(t.translate_description(english, Some("Компонент")), GENERIC_DESCRIPTION);
        assert_eq!(t.translate_description(english, None), GENERIC_DESCRIPTION);
    }

    #[test]
    fn test_first_sentences() {
        assert_eq!(first_sentences("One. Two!  Three?", 2), "One. Two!");
        assert_eq!(first_sentences("No boundary 3.5 here", 2), "No boundary 3.5 here");
        assert_eq!(first_sentences("Only one.", 2), "Only one.");
    }
}
