//! # Form Binding
//!
//! Turns an urlencoded product form into a [`Product`] plus the
//! [`ModelState`] the page controller branches on.
//!
//! ```text
//! Id=3&Name=OstrichToy&Color=Grey&Price=85.12&Stock=133
//!      │
//!      ▼
//! ProductForm (every field as text)
//!      │  parse Id / Price / Stock   → format errors
//!      │  validate_product           → field rule errors
//!      ▼
//! (Product, ModelState)
//! ```
//!
//! Fields that fail to parse fall back to their defaults so the form can be
//! re-rendered with the rest of the submitted values intact.

use serde::Deserialize;
use std::str::FromStr;

use stockroom_core::validation::validate_product;
use stockroom_core::{ModelState, Money, Product, ValidationError};

/// Raw product form as posted by the Create and Edit pages.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProductForm {
    pub id: String,
    pub name: String,
    pub color: String,
    pub price: String,
    pub stock: String,
}

impl ProductForm {
    /// Binds the form, collecting every parse and rule failure.
    pub fn bind(self) -> (Product, ModelState) {
        let mut format_errors = Vec::new();

        let id = parse_field::<i64>("Id", &self.id, Product::UNASSIGNED_ID, &mut format_errors);
        let price = parse_field::<Money>("Price", &self.price, Money::zero(), &mut format_errors);
        let stock = parse_field::<i64>("Stock", &self.stock, 0, &mut format_errors);

        let product = Product {
            id,
            name: self.name.trim().to_string(),
            color: self.color.trim().to_string(),
            price,
            stock,
        };

        let mut state = validate_product(&product);
        for error in &format_errors {
            state.add_validation_error(error);
        }

        (product, state)
    }
}

/// Parses a numeric field; blank input means "not supplied" and yields the
/// default without an error.
fn parse_field<T>(field: &str, raw: &str, default: T, errors: &mut Vec<ValidationError>) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return default;
    }

    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            errors.push(ValidationError::InvalidFormat {
                field: field.to_string(),
                reason: e.to_string(),
            });
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: &str, name: &str, price: &str, stock: &str) -> ProductForm {
        ProductForm {
            id: id.to_string(),
            name: name.to_string(),
            color: "Grey".to_string(),
            price: price.to_string(),
            stock: stock.to_string(),
        }
    }

    #[test]
    fn test_valid_form_binds_cleanly() {
        let (product, state) = form("3", "OstrichToy", "85.12", "133").bind();

        assert!(state.is_valid());
        assert_eq!(
            product,
            Product::new("OstrichToy", "Grey", Money::from_cents(8512), 133).with_id(3)
        );
    }

    #[test]
    fn test_blank_id_means_unassigned() {
        let (product, state) = form("", "FiberPen", "12", "1500").bind();

        assert!(state.is_valid());
        assert_eq!(product.id, Product::UNASSIGNED_ID);
    }

    #[test]
    fn test_parse_failures_are_reported_per_field() {
        let (product, state) = form("x", "OstrichToy", "cheap", "lots").bind();

        assert!(!state.is_valid());
        assert_eq!(state.errors("Id").len(), 1);
        assert_eq!(state.errors("Price").len(), 1);
        assert_eq!(state.errors("Stock").len(), 1);

        // Unparsable values fall back, text fields survive
        assert_eq!(product.price, Money::zero());
        assert_eq!(product.name, "OstrichToy");
    }

    #[test]
    fn test_rule_failures_are_merged() {
        let (_, state) = form("", "", "-1", "5").bind();

        assert_eq!(state.errors("Name"), ["Name is required".to_string()]);
        assert_eq!(state.errors("Price"), ["Price must not be negative".to_string()]);
    }
}
