//! Text normalization and tokenization for query and field matching.

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks stripped after NFD decomposition.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Normalizes text into a lowercase, diacritic-free comparable form.
///
/// The input is decomposed (NFD), combining marks are dropped, and the
/// remainder is lowercased, so `"RADIADOR ÁLVAREZ"` becomes
/// `"radiador alvarez"`. Idempotent; empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Splits a query into normalized search terms.
///
/// Tokens are separated by runs of whitespace; empty tokens are discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("RADIADOR ÁLVAREZ", "radiador alvarez")]
    #[case("Émbolo Ñoño", "embolo nono")]
    #[case("bomba de agua", "bomba de agua")]
    #[case("", "")]
    fn normalize_strips_accents_and_case(#[case] input: &str, #[case] expected: &str) {
        check!(normalize(input) == expected);
    }

    #[rstest]
    #[case("Árbol de Levas")]
    #[case("ya normalizado")]
    #[case("BI372 10")]
    fn normalize_is_idempotent(#[case] input: &str) {
        let once = normalize(input);
        check!(normalize(&once) == once);
    }

    #[rstest]
    #[case("  aceite   bosch ", vec!["aceite", "bosch"])]
    #[case("FILTRO\tDE\nACEITE", vec!["filtro", "de", "aceite"])]
    #[case("   ", vec![])]
    #[case("", vec![])]
    fn tokenize_splits_on_whitespace(#[case] input: &str, #[case] expected: Vec<&str>) {
        check!(tokenize(input) == expected);
    }
}
