//! Product record model and structural validation.
//!
//! # Responsibility
//! - Validate loosely typed product records (`serde_json::Value`).
//! - Provide a typed `Product` view for records that pass validation.
//!
//! # Invariants
//! - A record is valid iff `id` is truthy, `name` is a string, `price` is a
//!   number and `price > 0`.
//! - Validation is pure: it never mutates or repairs the record.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Catalog key and product identifier.
pub type ProductId = i64;

/// First structural rule a product record violates.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductValidationError {
    /// `id` is missing, `null`, `false`, `0` or `""`.
    FalsyId,
    /// `name` is missing or not a string.
    NameNotString,
    /// `price` is missing or not a number.
    PriceNotNumber,
    /// `price` is a number but not strictly positive.
    NonPositivePrice { price: f64 },
}

impl Display for ProductValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FalsyId => write!(f, "id must be present and non-zero"),
            Self::NameNotString => write!(f, "name must be a string"),
            Self::PriceNotNumber => write!(f, "price must be a number"),
            Self::NonPositivePrice { price } => write!(f, "price must be > 0, got {price}"),
        }
    }
}

impl Error for ProductValidationError {}

/// Typed view of a validated product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Converts this product into its loosely typed record shape.
    pub fn to_record(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "price": self.price,
        })
    }
}

/// Returns whether `record` satisfies every structural product rule.
pub fn validate(record: &Value) -> bool {
    check_record(record).is_ok()
}

/// Checks product rules in order and reports the first violation.
pub fn check_record(record: &Value) -> Result<(), ProductValidationError> {
    if !is_truthy(record.get("id")) {
        return Err(ProductValidationError::FalsyId);
    }
    if !matches!(record.get("name"), Some(Value::String(_))) {
        return Err(ProductValidationError::NameNotString);
    }
    let price = record
        .get("price")
        .and_then(Value::as_f64)
        .ok_or(ProductValidationError::PriceNotNumber)?;
    if price <= 0.0 {
        return Err(ProductValidationError::NonPositivePrice { price });
    }
    Ok(())
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::{check_record, validate, Product, ProductValidationError};
    use serde_json::json;

    #[test]
    fn seed_shaped_record_is_valid() {
        assert!(validate(&json!({"id": 1, "name": "Laptop", "price": 3500})));
    }

    #[test]
    fn falsy_ids_are_rejected() {
        for id in [json!(0), json!(null), json!(false), json!(""), json!(0.0)] {
            let record = json!({"id": id, "name": "Mouse", "price": 80});
            assert_eq!(check_record(&record), Err(ProductValidationError::FalsyId));
        }
        assert!(!validate(&json!({"name": "Mouse", "price": 80})));
    }

    #[test]
    fn truthy_non_numeric_id_passes_structural_check() {
        let record = json!({"id": "sku-9", "name": "Cable", "price": 5});
        assert!(validate(&record));
        assert_eq!(check_record(&record), Ok(()));
    }

    #[test]
    fn name_and_price_types_are_enforced() {
        assert_eq!(
            check_record(&json!({"id": 4, "name": 12, "price": 10})),
            Err(ProductValidationError::NameNotString)
        );
        assert_eq!(
            check_record(&json!({"id": 4, "name": "Hub", "price": "10"})),
            Err(ProductValidationError::PriceNotNumber)
        );
    }

    #[test]
    fn price_must_be_strictly_positive() {
        assert_eq!(
            check_record(&json!({"id": 5, "name": "Pad", "price": 0})),
            Err(ProductValidationError::NonPositivePrice { price: 0.0 })
        );
        assert!(!validate(&json!({"id": 5, "name": "Pad", "price": -3.5})));
        assert!(validate(&json!({"id": 5, "name": "Pad", "price": 0.01})));
    }

    #[test]
    fn non_object_record_is_invalid() {
        assert!(!validate(&json!(null)));
        assert!(!validate(&json!([1, "Laptop", 3500])));
    }

    #[test]
    fn typed_product_record_shape_is_valid() {
        let record = Product::new(2, "Mouse", 80.0).to_record();
        assert_eq!(record, json!({"id": 2, "name": "Mouse", "price": 80.0}));
        assert!(validate(&record));
    }
}
