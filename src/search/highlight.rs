//! Presentation-only marking of matched query terms in display text.

use crate::search::normalize::tokenize;
use regex::RegexBuilder;

const MARK_OPEN: &str = "<mark>";
const MARK_CLOSE: &str = "</mark>";

/// Wraps each case-insensitive query-term match in `<mark>` tags.
pub fn highlight(display: &str, raw_query: &str) -> String {
    highlight_with(display, raw_query, MARK_OPEN, MARK_CLOSE)
}

/// Wraps each case-insensitive query-term match with the given markers.
///
/// The query is normalized and tokenized; tokens are sorted longest first
/// so overlapping alternatives prefer the longer term, and regex
/// metacharacters are escaped. An empty query returns the text unchanged.
/// This never influences match or rank decisions.
pub fn highlight_with(display: &str, raw_query: &str, open: &str, close: &str) -> String {
    let mut terms = tokenize(raw_query);
    if terms.is_empty() {
        return display.to_string();
    }
    terms.sort_by(|a, b| b.len().cmp(&a.len()));

    let pattern = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    let matcher = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("escaped alternation is a valid pattern");

    matcher
        .replace_all(display, |caps: &regex::Captures<'_>| {
            format!("{open}{}{close}", &caps[0])
        })
        .into_owned()
}
