//! Splits raw composition text into ingredient tokens.

/// Tokens this long or longer are treated as garbage and dropped.
pub const MAX_TOKEN_CHARS: usize = 200;

fn is_delimiter(c: char) -> bool {
    matches!(c, ',' | ';' | '/' | '\n')
}

/// Split raw composition text into candidate ingredient names.
///
/// Runs of `,` `;` `/` and newlines separate tokens. Each token is trimmed,
/// loses a leading `"12. "` / `"3) "` ordinal and any parenthesis characters
/// (their contents stay), and is kept only if more than one character remains.
/// Order is preserved; empty input yields an empty list.
pub fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(is_delimiter)
        .map(str::trim)
        .filter(|s| !s.is_empty() && s.chars().count() < MAX_TOKEN_CHARS)
        .map(|s| {
            let stripped: String = strip_ordinal(s).chars().filter(|c| !matches!(c, '(' | ')')).collect();
            stripped.trim().to_string()
        })
        .filter(|s| s.chars().count() > 1)
        .collect()
}

/// Remove a leading `digits` + `.` or `)` + optional whitespace.
fn strip_ordinal(token: &str) -> &str {
    let digits = token.len() - token.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return token;
    }
    match token[digits..].chars().next() {
        Some('.') | Some(')') => token[digits + 1..].trim_start(),
        _ => token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_every_delimiter() {
        assert_eq!(split_ingredients("A1, B2;C3/D4\nE5"), vec!["A1", "B2", "C3", "D4", "E5"]);
    }

    #[test]
    fn test_delimiter_runs_count_once() {
        assert_eq!(split_ingredients("Aqua,, ;Glycerin//\n\nNiacinamide"), vec!["Aqua", "Glycerin", "Niacinamide"]);
    }

    #[test]
    fn test_strips_ordinal_and_parens() {
        assert_eq!(split_ingredients("12. Aqua (purified)"), vec!["Aqua purified"]);
        assert_eq!(split_ingredients("3) Glycerin"), vec!["Glycerin"]);
        assert_eq!(split_ingredients("1,2-Hexanediol"), vec!["2-Hexanediol"]);
    }

    #[test]
    fn test_number_without_marker_is_kept() {
        assert_eq!(split_ingredients("PEG-100 Stearate, Polysorbate 20"), vec!["PEG-100 Stearate", "Polysorbate 20"]);
        assert_eq!(split_ingredients("20 Glycerin"), vec!["20 Glycerin"]);
    }

    #[test]
    fn test_empty_and_noise_inputs() {
        assert!(split_ingredients("").is_empty());
        assert!(split_ingredients(" ,;/\n ").is_empty());
        assert!(split_ingredients("a, (b), 7.").is_empty());
    }

    #[test]
    fn test_overlong_tokens_dropped() {
        let long = "x".repeat(MAX_TOKEN_CHARS);
        let input = format!("Aqua, {}, Glycerin", long);
        assert_eq!(split_ingredients(&input), vec!["Aqua", "Glycerin"]);
    }

    #[test]
    fn test_cyrillic_tokens_counted_in_chars() {
        assert_eq!(split_ingredients("Вода; мёд"), vec!["Вода", "мёд"]);
    }
}
