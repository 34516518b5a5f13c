//! # Validation Module
//!
//! Field rules for products.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form binding (apps/web)                                      │
//! │  ├── Text → i64 / Money parsing                                        │
//! │  └── THIS MODULE: field rules, collected into a ModelState             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Controller                                                   │
//! │  └── Branches on ModelState::is_valid()                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK (length(name) <= 100), CHECK (length(color) <= 50)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names are the form field names (`Name`, `Color`, `Price`, `Stock`)
//! so errors can be shown next to the input that caused them.
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::validate_product;
//! use stockroom_core::{Money, Product};
//!
//! let state = validate_product(&Product::new("", "Grey", Money::from_cents(100), 1));
//! assert!(!state.is_valid());
//! assert_eq!(state.errors("Name"), ["Name is required".to_string()]);
//! ```

use crate::error::ValidationError;
use crate::model_state::ModelState;
use crate::money::Money;
use crate::types::Product;
use crate::{MAX_COLOR_LEN, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 100 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "Name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "Name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a product color.
///
/// ## Rules
/// - May be empty
/// - At most 50 characters
pub fn validate_color(color: &str) -> ValidationResult<()> {
    if color.trim().chars().count() > MAX_COLOR_LEN {
        return Err(ValidationError::TooLong {
            field: "Color".to_string(),
            max: MAX_COLOR_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "Price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock quantity.
///
/// ## Rules
/// - Must be non-negative
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::Negative {
            field: "Stock".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Entity Validator
// =============================================================================

/// Runs every field rule and collects all failures.
pub fn validate_product(product: &Product) -> ModelState {
    let errors: Vec<ValidationError> = [
        validate_product_name(&product.name),
        validate_color(&product.color),
        validate_price(product.price),
        validate_stock(product.stock),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    ModelState::from(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("OstrichToy").is_ok());
        assert!(validate_product_name(&"A".repeat(100)).is_ok());

        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_color() {
        assert!(validate_color("").is_ok());
        assert!(validate_color("Grey").is_ok());
        assert!(validate_color(&"B".repeat(51)).is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 50 two-byte characters still fit the color column
        assert!(validate_color(&"é".repeat(50)).is_ok());
    }

    #[test]
    fn test_validate_price_and_stock() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(8512)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());

        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(1500).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_product_collects_every_failure() {
        let product = Product::new("", "C".repeat(60), Money::from_cents(-5), -1);
        let state = validate_product(&product);

        assert_eq!(state.error_count(), 4);
        assert!(!state.errors("Name").is_empty());
        assert!(!state.errors("Color").is_empty());
        assert!(!state.errors("Price").is_empty());
        assert!(!state.errors("Stock").is_empty());
    }

    #[test]
    fn test_validate_product_accepts_reference_products() {
        let toy = Product::new("OstrichToy", "Grey", Money::from_cents(8512), 133);
        let pen = Product::new("FiberPen", "Blue", Money::from_cents(1200), 1500);

        assert!(validate_product(&toy).is_valid());
        assert!(validate_product(&pen).is_valid());
    }
}
