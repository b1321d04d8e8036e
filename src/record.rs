//! Catalog record model.

use serde::{Deserialize, Serialize};

/// One product row of the catalog, immutable after ingestion.
///
/// Records reach the search engine only when `code` and `category` are
/// non-empty after trimming; [`crate::store::CatalogStore::load`] enforces
/// that invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Unique display SKU.
    pub code: String,
    /// Free-text product name.
    pub description: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    /// Sale price formatted for display (`"1.678,73"`).
    #[serde(default)]
    pub price_display: String,
    /// Numeric sale price.
    #[serde(default)]
    pub price_raw: f64,
    /// Signed unit count; negative means delayed delivery.
    #[serde(default)]
    pub stock: i32,
    /// Optional comma/newline-delimited feature text.
    #[serde(default)]
    pub features: String,
    /// Optional comma/newline-delimited equivalent SKUs.
    #[serde(default)]
    pub equivalent_codes: String,
}

impl ProductRecord {
    /// Wholesale cost for a user with the given discount percentage.
    ///
    /// Derived per active user and never persisted on the record.
    pub fn wholesale_cost(&self, discount_percent: f64) -> f64 {
        self.price_raw * (100.0 - discount_percent) / 100.0
    }

    /// Stock display classification for this record.
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_quantity(self.stock)
    }

    /// Individual features split out of the delimited `features` text.
    pub fn feature_list(&self) -> Vec<&str> {
        split_delimited(&self.features)
    }

    /// Equivalent SKUs split out of the delimited `equivalent_codes` text.
    pub fn equivalent_list(&self) -> Vec<&str> {
        split_delimited(&self.equivalent_codes)
    }
}

fn split_delimited(text: &str) -> Vec<&str> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Four-way stock display classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    /// Negative stock: the item ships on a delayed schedule.
    Deferred,
    /// Zero stock.
    OutOfStock,
    /// One to five units left.
    LastUnits,
    /// More than five units.
    Available,
}

impl StockLevel {
    /// Classifies a signed unit count.
    pub fn from_quantity(quantity: i32) -> Self {
        if quantity < 0 {
            Self::Deferred
        } else if quantity == 0 {
            Self::OutOfStock
        } else if quantity <= 5 {
            Self::LastUnits
        } else {
            Self::Available
        }
    }

    /// Customer-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Deferred => "Entrega Diferida",
            Self::OutOfStock => "Sin Stock",
            Self::LastUnits => "Últimas Unidades",
            Self::Available => "Stock Disponible",
        }
    }
}
