//! Levenshtein edit distance for approximate word matching.

/// Edit budget allowed for a query token of the given length.
///
/// Short tokens must match exactly; one edit is allowed from four
/// characters, two from seven.
fn tolerance(token_len: usize) -> usize {
    match token_len {
        0..=3 => 0,
        4..=6 => 1,
        _ => 2,
    }
}

/// Classic Levenshtein distance: insertions, deletions and substitutions
/// each cost 1.
///
/// Computed over two rolling rows of the DP table, so memory is
/// `O(min_len)` rather than quadratic. Distance to or from an empty string
/// is the other string's length.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_chars.len()]
}

/// Whether `word` is an acceptable approximate match for the query `token`.
///
/// The budget scales with the token length so that short abbreviations do
/// not match half the catalog.
pub fn within_tolerance(token: &str, word: &str) -> bool {
    edit_distance(token, word) <= tolerance(token.chars().count())
}
