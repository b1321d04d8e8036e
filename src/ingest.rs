//! Value-level ingestion helpers.
//!
//! The spreadsheet collaborator hands over rows whose columns are already
//! resolved; this module turns their raw cell text into typed record
//! fields. Prices arrive in Argentinian format (`"1.678,73"`), stock
//! counts sometimes carry a decimal tail (`"12,0"`). Parsing never fails:
//! malformed values degrade to zero.

use crate::error::Result;
use crate::record::ProductRecord;
use anyhow::Context;
use std::path::Path;

/// Parses an Argentinian-formatted price: `"1.678,73"` → `1678.73`.
///
/// Thousands dots are dropped, the decimal comma becomes a dot, and any
/// remaining non-numeric characters are stripped. Unparseable input yields
/// `0.0`.
pub fn parse_price(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .replace('.', "")
        .replace(',', ".")
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Formats a price back into display form with two decimals:
/// `1678.73` → `"1.678,73"`.
pub fn format_price(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{fraction:02}")
}

/// Parses a stock cell into a signed unit count: `"12,0"` → `12`,
/// `"-3"` → `-3`. The decimal tail is discarded; junk yields `0`.
pub fn parse_stock(raw: &str) -> i32 {
    let integer_part = raw.trim().split(['.', ',']).next().unwrap_or("");
    let cleaned: String = integer_part
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    cleaned.parse().unwrap_or(0)
}

/// One column-mapped catalog row, all cells still raw text.
#[derive(Debug, Clone, Default)]
pub struct RawProduct {
    pub code: String,
    pub description: String,
    pub price: String,
    pub subcategory: String,
    pub stock: String,
    pub brand: String,
    pub category: String,
    pub features: String,
    pub equivalent_codes: String,
}

impl RawProduct {
    /// Builds a typed record, or `None` when the row fails the searchable
    /// invariant (empty code or category after trimming).
    pub fn into_record(self) -> Option<ProductRecord> {
        let code = self.code.trim().to_string();
        let category = self.category.trim().to_string();
        if code.is_empty() || category.is_empty() {
            return None;
        }

        let price_raw = parse_price(&self.price);
        Some(ProductRecord {
            code,
            description: self.description.trim().to_string(),
            brand: self.brand.trim().to_string(),
            category,
            subcategory: self.subcategory.trim().to_string(),
            price_display: format_price(price_raw),
            price_raw,
            stock: parse_stock(&self.stock),
            features: self.features.trim().to_string(),
            equivalent_codes: self.equivalent_codes.trim().to_string(),
        })
    }
}

/// Reads a JSON catalog export (an array of records) from disk.
pub fn read_records(path: &Path) -> Result<Vec<ProductRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    let records: Vec<ProductRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("invalid catalog JSON in {}", path.display()))?;
    Ok(records)
}
