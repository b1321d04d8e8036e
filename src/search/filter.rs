//! Categorical filtering and cross-filter availability.
//!
//! Hard category/subcategory/brand constraints are applied before any text
//! matching. The availability query keeps dependent dropdowns consistent:
//! each axis's option list is computed against the *other two* selections
//! only, so selecting a value never narrows its own list to a singleton.

use crate::record::ProductRecord;
use ahash::AHashSet;

/// Active categorical selections. Empty or absent values impose no
/// restriction; non-empty values require exact, as-stored equality.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub brand: Option<String>,
}

impl Filters {
    /// Treats `Some("")` the same as `None`.
    fn active(value: Option<&String>) -> Option<&str> {
        value.map(String::as_str).filter(|v| !v.is_empty())
    }

    fn constraint(&self, axis: FilterAxis) -> Option<&str> {
        match axis {
            FilterAxis::Category => Self::active(self.category.as_ref()),
            FilterAxis::Subcategory => Self::active(self.subcategory.as_ref()),
            FilterAxis::Brand => Self::active(self.brand.as_ref()),
        }
    }

    /// Whether a record satisfies every active constraint.
    pub fn matches(&self, record: &ProductRecord) -> bool {
        FilterAxis::ALL
            .iter()
            .all(|&axis| self.constraint(axis).is_none_or(|v| axis.field(record) == v))
    }

    /// Copy of these filters with one axis cleared, for the availability
    /// query on that axis.
    fn without(&self, axis: FilterAxis) -> Self {
        let mut cleared = self.clone();
        match axis {
            FilterAxis::Category => cleared.category = None,
            FilterAxis::Subcategory => cleared.subcategory = None,
            FilterAxis::Brand => cleared.brand = None,
        }
        cleared
    }
}

/// One of the three categorical filter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAxis {
    Category,
    Subcategory,
    Brand,
}

impl FilterAxis {
    pub const ALL: [Self; 3] = [Self::Category, Self::Subcategory, Self::Brand];

    /// The record field this axis constrains.
    fn field(self, record: &ProductRecord) -> &str {
        match self {
            Self::Category => &record.category,
            Self::Subcategory => &record.subcategory,
            Self::Brand => &record.brand,
        }
    }
}

/// Narrows the candidate list to records satisfying every active constraint.
pub fn apply_filters<'a>(records: &'a [ProductRecord], filters: &Filters) -> Vec<&'a ProductRecord> {
    records.iter().filter(|r| filters.matches(r)).collect()
}

/// Distinct remaining values for `axis`, given the selections on the other
/// two axes.
///
/// The axis's own selection is ignored, empty field values are dropped, and
/// the result is sorted.
pub fn available_values(records: &[ProductRecord], axis: FilterAxis, filters: &Filters) -> Vec<String> {
    let others = filters.without(axis);
    let mut seen = AHashSet::new();
    let mut values: Vec<String> = records
        .iter()
        .filter(|r| others.matches(r))
        .map(|r| axis.field(r))
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(v.to_string()))
        .map(str::to_string)
        .collect();
    values.sort();
    values
}
