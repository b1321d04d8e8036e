//! Canonical "ultra-clean" code form for tolerant SKU comparison.
//!
//! Product codes arrive in many punctuation and padding variants
//! (`"LKTB-N271"`, `"lktbn271"`, `"00123"`). Cleaning removes separator and
//! leading-zero noise so variants compare equal as plain substrings.

use regex::Regex;
use std::sync::LazyLock;

/// Alternating letter-runs and digit-runs of a raw query.
static SEGMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-zA-Z]+|[0-9]+").expect("segment pattern is valid"));

/// Strips leading zeros from an all-digit segment, keeping at least one digit.
fn strip_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() { "0" } else { trimmed }
}

/// Canonicalizes one alphanumeric segment: digit runs lose leading zeros,
/// letter runs are lowercased.
fn clean_segment(segment: &str) -> String {
    if segment.bytes().all(|b| b.is_ascii_digit()) {
        strip_leading_zeros(segment).to_string()
    } else {
        segment.to_ascii_lowercase()
    }
}

/// Reduces a code (or query) to its canonical comparable form.
///
/// The input is split on runs of non-alphanumeric characters, empty segments
/// are dropped, each segment is canonicalized, and the results are joined
/// with no separator: `"LKTB-N271"` → `"lktbn271"`, `"00123"` → `"123"`.
/// Never fails; input with no alphanumeric content yields an empty string.
pub fn clean_code(text: &str) -> String {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(clean_segment)
        .collect()
}

/// Splits a raw query into its cleaned letter/digit segments.
///
/// `"KTB 00271"` → `["ktb", "271"]`. Used by the segmented code-match
/// strategy, which requires the segments to appear in order.
pub fn query_segments(raw: &str) -> Vec<String> {
    SEGMENTS
        .find_iter(raw)
        .map(|m| clean_segment(m.as_str()))
        .collect()
}
