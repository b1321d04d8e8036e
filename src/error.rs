//! Error handling types and utilities.

use thiserror::Error;

/// A specialized Result type for parts-catalog operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()`
/// and `.with_context()` methods at the ingestion boundary.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when replacing the catalog snapshot fails.
///
/// The search core itself never raises; failures exist only at the
/// ingestion boundary.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// Every row of the batch was missing its code or category; the
    /// previous snapshot is kept.
    #[error("no valid product rows in batch ({discarded} discarded)")]
    EmptyBatch { discarded: usize },
}
