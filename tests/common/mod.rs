//! Shared test fixtures for integration tests.
//!
//! `sample_store` builds a small catalog covering the interesting shapes:
//! accented descriptions, punctuated and zero-padded codes, shared
//! category/brand combinations for cross-filter checks, and the full
//! stock-level range.

use parts_catalog::{CatalogStore, ProductRecord};
use rstest::fixture;

/// Convenience constructor for test records.
pub fn record(
    code: &str,
    description: &str,
    category: &str,
    subcategory: &str,
    brand: &str,
    stock: i32,
) -> ProductRecord {
    ProductRecord {
        code: code.into(),
        description: description.into(),
        brand: brand.into(),
        category: category.into(),
        subcategory: subcategory.into(),
        price_display: "1.000,00".into(),
        price_raw: 1000.0,
        stock,
        features: String::new(),
        equivalent_codes: String::new(),
    }
}

pub fn sample_records() -> Vec<ProductRecord> {
    vec![
        record("BI372 10", "BOMBA DE AGUA", "REFRIGERACION", "BOMBAS", "DOLZ", 3),
        record("BI372 20", "BOMBA DE AGUA", "REFRIGERACION", "BOMBAS", "DOLZ", 0),
        record("BI810", "BOMBA DE AGUA REFORZADA", "REFRIGERACION", "BOMBAS", "SKF", -2),
        record("RGU477", "RADIADOR ÁLVAREZ", "REFRIGERACION", "RADIADORES", "VALEO", 8),
        record("LKTBN271", "KIT DE DISTRIBUCION", "DISTRIBUCION", "KITS", "SKF", 12),
        record("W712/75", "FILTRO DE ACEITE BOSCH", "FILTROS", "ACEITE", "BOSCH", 5),
        record("271", "CORREA TRASERA", "DISTRIBUCION", "CORREAS", "GATES", 1),
        record("271X", "CORREA DELANTERA", "DISTRIBUCION", "CORREAS", "GATES", 6),
        record("X271X", "CORREA IZQUIERDA", "DISTRIBUCION", "CORREAS", "DAYCO", 2),
    ]
}

#[fixture]
pub fn sample_store() -> CatalogStore {
    let mut store = CatalogStore::new();
    store
        .load(sample_records())
        .expect("sample catalog loads cleanly");
    store
}

/// Hit codes of an outcome, in rank order.
pub fn hit_codes(outcome: &parts_catalog::SearchOutcome<'_>) -> Vec<String> {
    outcome.hits.iter().map(|r| r.code.clone()).collect()
}
