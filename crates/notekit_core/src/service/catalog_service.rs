//! Catalog walkthrough use-case.
//!
//! # Responsibility
//! - Validate a catalog and collect its diagnostics.
//! - Run the number-set demonstration (seed, add 6, check 3, delete 2).
//! - Bundle listing, derived collections and stats into one report.

use crate::catalog::{seed_categories, seed_numbers, Catalog, CatalogStats, InvalidEntry};
use crate::collections::{CategoryMap, NumberSet};
use crate::model::product::ProductId;
use serde_json::Value;

/// Everything a caller needs to render the catalog walkthrough.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogReport {
    /// Entries failing validation, in key order.
    pub invalid_entries: Vec<InvalidEntry>,
    /// Raw catalog entries in key order.
    pub products: Vec<(ProductId, Value)>,
    /// Unique seed numbers before any mutation.
    pub initial_numbers: Vec<i64>,
    /// Number set after the add/delete steps.
    pub numbers: Vec<i64>,
    /// Membership of `3` checked after the add step.
    pub has_three: bool,
    /// `(category, product)` pairs in insertion order.
    pub categories: Vec<(String, String)>,
    pub stats: CatalogStats,
}

impl CatalogReport {
    pub fn diagnostics(&self) -> Vec<String> {
        self.invalid_entries
            .iter()
            .map(InvalidEntry::diagnostic)
            .collect()
    }
}

/// Runs the number-set steps and returns `(initial, final, has_three)`.
pub fn run_number_set_demo(seed: &[i64]) -> (NumberSet, NumberSet, bool) {
    let initial: NumberSet = seed.iter().copied().collect();
    let mut numbers = initial.clone();
    numbers.add(6);
    let has_three = numbers.has(3);
    numbers.delete(2);
    (initial, numbers, has_three)
}

/// Builds the full walkthrough report for `catalog`.
pub fn build_catalog_report(catalog: &Catalog) -> CatalogReport {
    build_catalog_report_with(catalog, seed_numbers(), &seed_categories())
}

/// Builds the report with explicit number seed and category map.
pub fn build_catalog_report_with(
    catalog: &Catalog,
    number_seed: &[i64],
    categories: &CategoryMap,
) -> CatalogReport {
    let invalid_entries = catalog.validate_all();
    let (initial, numbers, has_three) = run_number_set_demo(number_seed);

    let mut category_pairs = Vec::with_capacity(categories.len());
    categories.for_each(|product, category| {
        category_pairs.push((category.to_string(), product.to_string()));
    });

    CatalogReport {
        invalid_entries,
        products: catalog
            .entries()
            .map(|(key, record)| (key, record.clone()))
            .collect(),
        initial_numbers: initial.to_vec(),
        numbers: numbers.to_vec(),
        has_three,
        categories: category_pairs,
        stats: catalog.stats(),
    }
}

#[cfg(test)]
mod tests {
    use super::run_number_set_demo;

    #[test]
    fn number_set_demo_follows_seed_add_delete_steps() {
        let (initial, numbers, has_three) = run_number_set_demo(&[1, 2, 2, 3, 4, 4, 5]);
        assert_eq!(initial.to_vec(), vec![1, 2, 3, 4, 5]);
        assert_eq!(numbers.to_vec(), vec![1, 3, 4, 5, 6]);
        assert!(has_three);
        assert!(numbers.has(3));
    }
}
