//! Catalog store owning the current record snapshot.
//!
//! Replaces the ambient globals of earlier designs: callers hold an
//! explicit `CatalogStore` reference, load a snapshot wholesale, and run
//! searches against it. The store has no interior mutability, so a shared
//! `&CatalogStore` can serve concurrent searches; replacing the snapshot
//! requires exclusive access.

use crate::error::CatalogError;
use crate::record::ProductRecord;
use crate::search::{
    FilterAxis, Filters, SearchOptions, SearchOutcome, apply_filters, available_values, search,
};

/// In-memory catalog snapshot plus the search entry points.
#[derive(Debug, Default)]
pub struct CatalogStore {
    records: Vec<ProductRecord>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the snapshot with a freshly ingested batch.
    ///
    /// Fields are trimmed and rows violating the searchable invariant
    /// (empty code or category) are dropped. A batch with no valid rows is
    /// refused, keeping the previous snapshot. Returns the kept row count.
    pub fn load(&mut self, records: Vec<ProductRecord>) -> Result<usize, CatalogError> {
        let incoming = records.len();
        let valid: Vec<ProductRecord> = records
            .into_iter()
            .filter_map(|mut record| {
                record.code = record.code.trim().to_string();
                record.category = record.category.trim().to_string();
                if record.code.is_empty() || record.category.is_empty() {
                    None
                } else {
                    Some(record)
                }
            })
            .collect();

        if valid.is_empty() {
            tracing::warn!(discarded = incoming, "refusing to load empty catalog batch");
            return Err(CatalogError::EmptyBatch { discarded: incoming });
        }

        let kept = valid.len();
        tracing::info!(
            kept,
            discarded = incoming - kept,
            "catalog snapshot replaced"
        );
        self.records = valid;
        Ok(kept)
    }

    /// The current snapshot.
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact code lookup, trimmed and case-insensitive. Used by deep links
    /// straight into a product detail view.
    pub fn find_by_code(&self, code: &str) -> Option<&ProductRecord> {
        let wanted = code.trim().to_lowercase();
        self.records
            .iter()
            .find(|r| r.code.to_lowercase() == wanted)
    }

    /// Filtered, ranked search with default options.
    pub fn search(&self, raw_query: &str, filters: &Filters) -> SearchOutcome<'_> {
        self.search_with(raw_query, filters, SearchOptions::default())
    }

    /// Filtered, ranked search with explicit engine options.
    ///
    /// Categorical filters narrow the candidate set first; text matching
    /// only selects and orders within it.
    pub fn search_with(
        &self,
        raw_query: &str,
        filters: &Filters,
        options: SearchOptions,
    ) -> SearchOutcome<'_> {
        let candidates = apply_filters(&self.records, filters);
        search(&candidates, raw_query, options)
    }

    /// Distinct dropdown values for one axis given the other selections.
    pub fn available_values(&self, axis: FilterAxis, filters: &Filters) -> Vec<String> {
        available_values(&self.records, axis, filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn record(code: &str, category: &str) -> ProductRecord {
        ProductRecord {
            code: code.into(),
            description: String::new(),
            brand: String::new(),
            category: category.into(),
            subcategory: String::new(),
            price_display: String::new(),
            price_raw: 0.0,
            stock: 0,
            features: String::new(),
            equivalent_codes: String::new(),
        }
    }

    #[test]
    fn load_drops_invalid_rows_and_trims() {
        let mut store = CatalogStore::new();
        let kept = store
            .load(vec![
                record(" W712 ", " FILTROS "),
                record("", "FILTROS"),
                record("X1", ""),
            ])
            .unwrap();
        check!(kept == 1);
        check!(store.records()[0].code == "W712");
        check!(store.records()[0].category == "FILTROS");
    }

    #[test]
    fn empty_batch_is_refused_and_snapshot_kept() {
        let mut store = CatalogStore::new();
        store.load(vec![record("W712", "FILTROS")]).unwrap();

        let result = store.load(vec![record("", "FILTROS")]);
        check!(result.is_err());
        check!(store.len() == 1);
        check!(store.records()[0].code == "W712");
    }

    #[test]
    fn find_by_code_is_case_insensitive_and_trims() {
        let mut store = CatalogStore::new();
        store.load(vec![record("RGU477", "REFRIGERACION")]).unwrap();

        check!(store.find_by_code("rgu477").is_some());
        check!(store.find_by_code("  RGU477 ").is_some());
        check!(store.find_by_code("RGU999").is_none());
    }
}
