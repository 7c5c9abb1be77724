//! Domain records shared by the catalog and note list use-cases.
//!
//! # Responsibility
//! - Define product records and their structural validation rules.
//! - Define the trimmed, non-empty `Note` value.

pub mod note;
pub mod product;
