//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Product
//! ```text
//! ┌─────────────────────────────┐
//! │          Product            │
//! │  ─────────────────────────  │
//! │  id     i64   (store-assigned, immutable)
//! │  name   ≤ 100 chars         │
//! │  color  ≤ 50 chars          │
//! │  price  Money (2 decimals)  │
//! │  stock  i64 (≥ 0)           │
//! └─────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is the only key controllers use to correlate a request path with a
//! stored record. A freshly submitted product carries `0` until the store
//! assigns one on create.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Entity
// =============================================================================

/// A record that can be stored behind a [`Repository`](crate::Repository).
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable type name used in errors and logs.
    const ENTITY_NAME: &'static str;

    /// Store-assigned identifier (`0` when unassigned).
    fn id(&self) -> i64;

    /// Sets the identifier. Only stores call this, on create.
    fn set_id(&mut self, id: i64);

    /// Whether the store has assigned an identifier yet.
    fn has_id(&self) -> bool {
        self.id() != 0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product kept in stock.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier.
    #[serde(default)]
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Color description.
    #[serde(default)]
    pub color: String,

    /// Unit price.
    pub price: Money,

    /// Units on hand.
    pub stock: i64,
}

impl Product {
    /// Identifier of a product that has not been stored yet.
    pub const UNASSIGNED_ID: i64 = 0;

    /// Creates an unsaved product.
    pub fn new(name: impl Into<String>, color: impl Into<String>, price: Money, stock: i64) -> Self {
        Product {
            id: Self::UNASSIGNED_ID,
            name: name.into(),
            color: color.into(),
            price,
            stock,
        }
    }

    /// Returns the same product with the given identifier.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Checks that a route identifier addresses this product.
    ///
    /// ## Returns
    /// * `Ok(())` - ids agree
    /// * `Err(CoreError::IdMismatch)` - the request targets a different record
    pub fn ensure_route_id(&self, route_id: i64) -> CoreResult<()> {
        if self.id != route_id {
            return Err(CoreError::IdMismatch {
                route_id,
                body_id: self.id,
            });
        }
        Ok(())
    }
}

impl Entity for Product {
    const ENTITY_NAME: &'static str = "Product";

    #[inline]
    fn id(&self) -> i64 {
        self.id
    }

    #[inline]
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_is_unassigned() {
        let product = Product::new("FiberPen", "Blue", Money::from_cents(1200), 1500);
        assert_eq!(product.id, Product::UNASSIGNED_ID);
        assert!(!product.has_id());
        assert!(product.with_id(11).has_id());
    }

    #[test]
    fn test_ensure_route_id() {
        let product = Product::new("OstrichToy", "Grey", Money::from_cents(8512), 133).with_id(3);
        assert!(product.ensure_route_id(3).is_ok());

        let err = product.ensure_route_id(0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::IdMismatch {
                route_id: 0,
                body_id: 3
            }
        ));
    }

    #[test]
    fn test_json_shape() {
        let product = Product::new("OstrichToy", "Grey", Money::from_cents(8512), 133).with_id(3);
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "OstrichToy");
        assert_eq!(json["color"], "Grey");
        assert_eq!(json["price"], 85.12);
        assert_eq!(json["stock"], 133);
    }

    #[test]
    fn test_json_without_id_deserializes_unassigned() {
        let product: Product =
            serde_json::from_str(r#"{"name":"FiberPen","color":"Blue","price":12,"stock":1500}"#)
                .unwrap();
        assert_eq!(product.id, 0);
        assert_eq!(product.price.cents(), 1200);
    }
}
