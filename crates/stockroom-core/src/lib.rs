//! # stockroom-core: Pure Domain Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It defines the `Product`
//! entity, the fixed-point `Money` type, field validation, and the generic
//! `Repository<T>` contract that every controller is written against.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/web (axum)                                 │   │
//! │  │   ProductsController (pages)   ProductsApiController (REST)     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Repository<Product>                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockroom-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ repository │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ Repository │  │ ModelState│  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ implemented by                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              stockroom-db (SQLite ProductRepository)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Entity)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Field rules for products
//! - [`model_state`] - Validation outcome the page controller branches on
//! - [`repository`] - The generic persistence contract
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::money::Money;
//! use stockroom_core::{Entity, Product};
//!
//! let toy = Product::new("OstrichToy", "Grey", Money::from_cents(8512), 133);
//! assert_eq!(toy.price.to_string(), "85.12");
//! assert!(!toy.has_id());
//! ```

pub mod error;
pub mod model_state;
pub mod money;
pub mod repository;
pub mod types;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod fake;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, RepositoryError, ValidationError};
pub use model_state::ModelState;
pub use money::Money;
pub use repository::{RepoResult, Repository, SharedRepository};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name (matches the `product.name` column).
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a product color (matches the `product.color` column).
pub const MAX_COLOR_LEN: usize = 50;
