//! Domain abbreviation expansion for the fuzzy search strategy.

/// Directed expansion pairs. Abbreviation pairs that are used in both
/// directions (`bomba`/`bba`, `k`/`kit`) appear twice.
const SYNONYMS: &[(&str, &str)] = &[
    ("bomba", "bba"),
    ("bba", "bomba"),
    ("k", "kit"),
    ("kit", "k"),
    ("izq", "izquierda"),
    ("der", "derecha"),
    ("del", "delantera"),
    ("tras", "trasera"),
];

/// Expands a normalized query term into itself plus its mapped alternates.
///
/// Unknown terms come back as a single-element list. Callers tolerate
/// duplicates, so no deduplication happens here.
pub fn expand(term: &str) -> Vec<String> {
    let mut expanded = vec![term.to_string()];
    for (from, to) in SYNONYMS {
        if *from == term {
            expanded.push((*to).to_string());
        }
    }
    expanded
}
