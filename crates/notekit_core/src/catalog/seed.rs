//! Fixed startup data for the catalog walkthrough.

use crate::catalog::Catalog;
use crate::collections::CategoryMap;
use crate::model::product::Product;

/// Seed numbers, duplicates included.
const SEED_NUMBERS: &[i64] = &[1, 2, 2, 3, 4, 4, 5];

/// Returns the fixed three-product catalog.
pub fn seed_catalog() -> Catalog {
    Catalog::from_products([
        Product::new(1, "Laptop", 3500.0),
        Product::new(2, "Mouse", 80.0),
        Product::new(3, "Teclado", 150.0),
    ])
}

pub fn seed_numbers() -> &'static [i64] {
    SEED_NUMBERS
}

/// Returns the category map in its fixed insertion order.
pub fn seed_categories() -> CategoryMap {
    let mut categories = CategoryMap::new();
    categories.set("Tecnología", "Laptop");
    categories.set("Accesorios", "Mouse");
    categories.set("Periféricos", "Teclado");
    categories
}
