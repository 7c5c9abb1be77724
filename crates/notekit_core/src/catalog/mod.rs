//! Product catalog keyed by product id.
//!
//! # Responsibility
//! - Hold loosely typed product records behind integer keys.
//! - Report every record that fails structural validation.
//! - Derive summary statistics from the valid records.
//!
//! # Invariants
//! - The catalog is read-only after construction.
//! - Keys enumerate in ascending numeric order.
//! - `validate_all` never removes or repairs entries.

mod seed;

pub use seed::{seed_catalog, seed_categories, seed_numbers};

use crate::model::product::{check_record, Product, ProductId, ProductValidationError};
use log::{info, warn};
use serde_json::Value;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Catalog construction error.
#[derive(Debug)]
pub enum CatalogError {
    /// Source text is not valid JSON.
    Parse(serde_json::Error),
    /// Top-level JSON value is not an object.
    NotAnObject,
    /// Object key is not an integer product id.
    InvalidKey(String),
    /// Object key is not written in canonical integer form (`"01"`, `" 1"`, `"+1"`).
    NonCanonicalKey(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "catalog is not valid JSON: {err}"),
            Self::NotAnObject => write!(f, "catalog must be a JSON object keyed by product id"),
            Self::InvalidKey(key) => write!(f, "catalog key `{key}` is not an integer id"),
            Self::NonCanonicalKey(key) => {
                write!(f, "catalog key `{key}` is not written as a canonical integer")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::NotAnObject | Self::InvalidKey(_) | Self::NonCanonicalKey(_) => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// One catalog entry that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidEntry {
    pub key: ProductId,
    pub reason: ProductValidationError,
}

impl InvalidEntry {
    /// Human-readable diagnostic naming the offending key.
    pub fn diagnostic(&self) -> String {
        format!("invalid product with id {}", self.key)
    }
}

/// Aggregates computed over valid catalog records.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    pub product_count: usize,
    pub total_price: f64,
    /// First product in key order holding the highest price.
    pub most_expensive: Option<Product>,
}

/// Read-only mapping of product id to product record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: BTreeMap<ProductId, Value>,
}

impl Catalog {
    /// Builds a catalog from `(key, record)` pairs; later keys overwrite earlier ones.
    pub fn from_records(records: impl IntoIterator<Item = (ProductId, Value)>) -> Self {
        Self {
            entries: records.into_iter().collect(),
        }
    }

    /// Builds a catalog keyed by each product's own id.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self::from_records(
            products
                .into_iter()
                .map(|product| (product.id, product.to_record())),
        )
    }

    /// Parses a JSON object shaped like `{"1": {...}, "2": {...}}`.
    ///
    /// Records are kept as-is; only the keys are checked here. Keys must be
    /// canonical integers so no two object keys can collapse onto one entry.
    pub fn from_json_str(source: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(source)?;
        let Value::Object(object) = value else {
            return Err(CatalogError::NotAnObject);
        };

        let mut entries = BTreeMap::new();
        for (key, record) in object {
            let id = key
                .trim()
                .parse::<ProductId>()
                .map_err(|_| CatalogError::InvalidKey(key.clone()))?;
            if id.to_string() != key {
                return Err(CatalogError::NonCanonicalKey(key));
            }
            entries.insert(id, record);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: ProductId) -> Option<&Value> {
        self.entries.get(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.entries.keys().copied()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries.values()
    }

    pub fn entries(&self) -> impl Iterator<Item = (ProductId, &Value)> + '_ {
        self.entries.iter().map(|(key, record)| (*key, record))
    }

    /// Validates every entry and reports the ones that fail.
    ///
    /// # Side effects
    /// - Emits one `catalog_invalid_entry` warning per failing key.
    pub fn validate_all(&self) -> Vec<InvalidEntry> {
        let mut invalid = Vec::new();
        for (key, record) in self.entries() {
            if let Err(reason) = check_record(record) {
                warn!(
                    "event=catalog_invalid_entry module=catalog status=error key={key} reason={reason}"
                );
                invalid.push(InvalidEntry { key, reason });
            }
        }
        info!(
            "event=catalog_validate module=catalog status=ok entries={} invalid={}",
            self.len(),
            invalid.len()
        );
        invalid
    }

    /// Computes stats over every record that passes validation.
    ///
    /// The typed view takes its id from the catalog key, so valid records with
    /// a non-integer truthy `id` still count.
    pub fn stats(&self) -> CatalogStats {
        let mut product_count = 0;
        let mut total_price = 0.0;
        let mut most_expensive: Option<Product> = None;

        for product in self
            .entries()
            .filter_map(|(key, record)| valid_product_at(key, record))
        {
            product_count += 1;
            total_price += product.price;
            let is_new_max = most_expensive
                .as_ref()
                .map_or(true, |current| product.price > current.price);
            if is_new_max {
                most_expensive = Some(product);
            }
        }

        CatalogStats {
            product_count,
            total_price,
            most_expensive,
        }
    }
}

fn valid_product_at(key: ProductId, record: &Value) -> Option<Product> {
    check_record(record).ok()?;
    let name = record.get("name").and_then(Value::as_str)?;
    let price = record.get("price").and_then(Value::as_f64)?;
    Some(Product::new(key, name, price))
}

#[cfg(test)]
mod tests {
    use super::{Catalog, CatalogError};
    use crate::model::product::ProductValidationError;
    use serde_json::json;

    #[test]
    fn from_json_str_orders_keys_numerically() {
        let catalog = Catalog::from_json_str(
            r#"{"10": {"id": 10, "name": "Dock", "price": 90},
                "2": {"id": 2, "name": "Mouse", "price": 80}}"#,
        )
        .expect("catalog should parse");
        assert_eq!(catalog.keys().collect::<Vec<_>>(), vec![2, 10]);
    }

    #[test]
    fn from_json_str_rejects_non_integer_keys() {
        let err = Catalog::from_json_str(r#"{"abc": {}}"#).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidKey(key) if key == "abc"));

        let err = Catalog::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, CatalogError::NotAnObject));
    }

    #[test]
    fn from_json_str_rejects_keys_that_would_collapse_onto_one_id() {
        let err = Catalog::from_json_str(
            r#"{"1": {"id": 0, "name": "Ghost", "price": 10},
                "01": {"id": 1, "name": "Laptop", "price": 3500}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::NonCanonicalKey(key) if key == "01"));

        for key in [" 1", "+1", "-0"] {
            let source = format!(r#"{{"{key}": {{"id": 1, "name": "Laptop", "price": 3500}}}}"#);
            let err = Catalog::from_json_str(&source).unwrap_err();
            assert!(
                matches!(&err, CatalogError::NonCanonicalKey(found) if found == key),
                "key={key:?} err={err}"
            );
        }

        let catalog = Catalog::from_json_str(r#"{"-3": {"id": -3, "name": "Refund", "price": 1}}"#)
            .expect("negative canonical key should parse");
        assert_eq!(catalog.keys().collect::<Vec<_>>(), vec![-3]);
    }

    #[test]
    fn validate_all_reports_each_failing_key_and_keeps_entries() {
        let catalog = Catalog::from_records([
            (1, json!({"id": 1, "name": "Laptop", "price": 3500})),
            (2, json!({"id": 0, "name": "Ghost", "price": 10})),
            (3, json!({"id": 3, "name": "Cable", "price": -1})),
        ]);

        let invalid = catalog.validate_all();
        assert_eq!(invalid.len(), 2);
        assert_eq!(invalid[0].key, 2);
        assert_eq!(invalid[0].reason, ProductValidationError::FalsyId);
        assert_eq!(invalid[1].diagnostic(), "invalid product with id 3");
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn stats_skip_invalid_records_and_break_ties_by_key_order() {
        let catalog = Catalog::from_records([
            (1, json!({"id": 1, "name": "First", "price": 50})),
            (2, json!({"id": 2, "name": "Second", "price": 50})),
            (3, json!({"id": 3, "name": 7, "price": 999})),
        ]);

        let stats = catalog.stats();
        assert_eq!(stats.product_count, 2);
        assert_eq!(stats.total_price, 100.0);
        assert_eq!(stats.most_expensive.map(|p| p.name), Some("First".to_string()));
    }

    #[test]
    fn stats_count_valid_records_with_non_integer_ids() {
        let catalog = Catalog::from_records([
            (7, json!({"id": 1.5, "name": "Hub", "price": 10})),
            (9, json!({"id": "sku-9", "name": "Cable", "price": 5})),
        ]);
        assert!(catalog.validate_all().is_empty());

        let stats = catalog.stats();
        assert_eq!(stats.product_count, 2);
        assert_eq!(stats.total_price, 15.0);
        let top = stats.most_expensive.expect("a valid product should be present");
        assert_eq!(top.id, 7);
        assert_eq!(top.name, "Hub");
    }
}
