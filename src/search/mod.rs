//! Free-text search infrastructure for the parts catalog.
//!
//! This module provides the matching and ranking pipeline: text and code
//! normalization, categorical filtering, the multi-strategy match engine,
//! and presentation helpers for highlighting matched terms.

// Module declarations
mod code;
mod engine;
mod filter;
mod fuzzy;
mod highlight;
mod normalize;
mod order;
mod synonyms;

// Public re-exports (used via lib.rs)
pub use code::{clean_code, query_segments};
pub use engine::{MAX_RESULTS, MatchKind, SearchOptions, SearchOutcome, classify_code, search};
pub use filter::{FilterAxis, Filters, apply_filters, available_values};
pub use fuzzy::{edit_distance, within_tolerance};
pub use highlight::{highlight, highlight_with};
pub use normalize::{normalize, tokenize};
pub use order::compare_codes;
pub use synonyms::expand;
