//! Derived collections built from catalog data.
//!
//! - [`NumberSet`]: deduplicated integers with stable ascending iteration.
//! - [`CategoryMap`]: category name to product name, in insertion order.

mod category_map;
mod number_set;

pub use category_map::CategoryMap;
pub use number_set::NumberSet;
