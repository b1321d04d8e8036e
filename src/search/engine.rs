//! Multi-strategy match and relevance ranking over a filtered candidate set.
//!
//! Two independent strategies decide whether a record matches a non-empty
//! query: the standard field search (every token a substring of the
//! record's combined text) and the flexible code search (cleaned-code
//! containment or ordered segment matching). Matched records are then
//! ranked by how strongly their code relates to the query.

use crate::record::ProductRecord;
use crate::search::code::{clean_code, query_segments};
use crate::search::fuzzy::within_tolerance;
use crate::search::normalize::{normalize, tokenize};
use crate::search::order::compare_codes;
use crate::search::synonyms::expand;

/// Display cap applied after ranking; the pre-cap total is still reported.
pub const MAX_RESULTS: usize = 100;

/// Engine toggles.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Enables the synonym/edit-distance strategy on top of substring
    /// token matching. Off by default.
    pub fuzzy: bool,
}

/// Ordinal classification of how strongly a code relates to the query.
///
/// Primary sort key of ranked results, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchKind {
    /// No code relation; the record matched on its descriptive fields.
    None = 0,
    /// Every query character appears in the code in order.
    Subsequence = 1,
    /// Code contains the query as a substring.
    Contains = 2,
    /// Code starts with the query.
    Prefix = 3,
    /// Code equals the query.
    Exact = 4,
}

/// Ranked, capped result of one search invocation.
#[derive(Debug)]
pub struct SearchOutcome<'a> {
    /// Up to [`MAX_RESULTS`] records, strongest match first.
    pub hits: Vec<&'a ProductRecord>,
    /// Match count before the display cap.
    pub total: usize,
}

/// Classifies a normalized code against the normalized, trimmed query.
pub fn classify_code(code: &str, query: &str) -> MatchKind {
    if code == query {
        MatchKind::Exact
    } else if code.starts_with(query) {
        MatchKind::Prefix
    } else if code.contains(query) {
        MatchKind::Contains
    } else if is_subsequence(query, code) {
        MatchKind::Subsequence
    } else {
        MatchKind::None
    }
}

/// Greedy left-to-right scan: every char of `query` found in `text` in
/// order, not necessarily contiguous.
fn is_subsequence(query: &str, text: &str) -> bool {
    let mut text_chars = text.chars();
    query
        .chars()
        .all(|q| text_chars.by_ref().any(|t| t == q))
}

/// Combined searchable text of a record, normalized.
fn field_text(record: &ProductRecord) -> String {
    normalize(&format!(
        "{} {} {} {} {}",
        record.code, record.description, record.brand, record.category, record.subcategory
    ))
}

/// Whether one query token hits the field text, with optional synonym and
/// edit-distance fallbacks.
fn token_matches(token: &str, text: &str, options: SearchOptions) -> bool {
    if text.contains(token) {
        return true;
    }
    if !options.fuzzy {
        return false;
    }
    expand(token).iter().skip(1).any(|alt| text.contains(alt))
        || text
            .split_whitespace()
            .any(|word| within_tolerance(token, word))
}

/// Standard field search: AND across tokens, each independently
/// substring-tested, order-independent.
fn matches_standard(record: &ProductRecord, tokens: &[String], options: SearchOptions) -> bool {
    let text = field_text(record);
    tokens.iter().all(|t| token_matches(t, &text, options))
}

/// Flexible code search over ultra-cleaned forms.
///
/// Attempted only for cleaned queries of length >= 2: direct containment
/// first, then the segmented match, which requires each letter/digit
/// segment of the raw query at a strictly increasing position in the
/// cleaned code. `"KTB 271"` reaches `"lktbn271"`; `"271 KTB"` does not.
fn matches_flexible_code(record: &ProductRecord, raw_query: &str, clean_query: &str) -> bool {
    if clean_query.chars().count() < 2 {
        return false;
    }
    let clean = clean_code(&record.code);
    if clean.contains(clean_query) {
        return true;
    }

    let segments = query_segments(raw_query);
    if segments.len() < 2 {
        return false;
    }
    // clean_code output is ASCII, so byte positions are char positions
    let mut last_start: Option<usize> = None;
    for segment in &segments {
        let from = last_start.map_or(0, |idx| idx + 1);
        match clean.get(from..).and_then(|tail| tail.find(segment.as_str())) {
            Some(relative) => last_start = Some(from + relative),
            None => return false,
        }
    }
    true
}

/// Searches the already-filtered candidates and returns them ranked.
///
/// An empty (post-trim) query matches every candidate, ordered by the
/// numeric-aware code comparison. Otherwise the standard and flexible
/// strategies are ORed per record, and matches are sorted by
/// [`MatchKind`] descending with the code comparison as tie-break.
/// Records with an empty code are skipped defensively.
pub fn search<'a>(
    candidates: &[&'a ProductRecord],
    raw_query: &str,
    options: SearchOptions,
) -> SearchOutcome<'a> {
    let raw_query = raw_query.trim();

    if raw_query.is_empty() {
        let mut hits: Vec<(String, &ProductRecord)> = candidates
            .iter()
            .filter(|r| !r.code.trim().is_empty())
            .map(|&r| (normalize(&r.code), r))
            .collect();
        hits.sort_by(|(key_a, rec_a), (key_b, rec_b)| {
            compare_codes(key_a, key_b).then_with(|| rec_a.code.cmp(&rec_b.code))
        });
        let total = hits.len();
        return SearchOutcome {
            hits: hits.into_iter().take(MAX_RESULTS).map(|(_, r)| r).collect(),
            total,
        };
    }

    let tokens = tokenize(raw_query);
    let clean_query = clean_code(raw_query);
    let norm_query = normalize(raw_query);

    let mut ranked: Vec<(MatchKind, String, &ProductRecord)> = candidates
        .iter()
        .filter(|r| !r.code.trim().is_empty())
        .filter(|r| {
            matches_standard(r, &tokens, options)
                || matches_flexible_code(r, raw_query, &clean_query)
        })
        .map(|&r| {
            let code_key = normalize(&r.code);
            (classify_code(&code_key, &norm_query), code_key, r)
        })
        .collect();

    let total = ranked.len();
    ranked.sort_by(|(kind_a, key_a, rec_a), (kind_b, key_b, rec_b)| {
        kind_b
            .cmp(kind_a)
            .then_with(|| compare_codes(key_a, key_b))
            .then_with(|| rec_a.code.cmp(&rec_b.code))
    });

    SearchOutcome {
        hits: ranked.into_iter().take(MAX_RESULTS).map(|(_, _, r)| r).collect(),
        total,
    }
}
