//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - General domain errors                          │
//! │  ├── ValidationError  - Field rule failures                            │
//! │  └── RepositoryError  - What Repository<T> implementations report      │
//! │                                                                         │
//! │  stockroom-db errors (separate crate)                                  │
//! │  └── DbError          - sqlx failures, converted into RepositoryError  │
//! │                                                                         │
//! │  web errors (in app)                                                   │
//! │  └── WebError         - HTTP status + JSON body                        │
//! │                                                                         │
//! │  Flow: DbError → RepositoryError → WebError → HTTP response            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing entity on lookup is NOT an error: `get_by_id` returns
//! `Ok(None)`. `RepositoryError::NotFound` only appears when a mutation
//! targets a row that no longer exists.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Route identifier and body identifier disagree.
    #[error("Product id mismatch: route {route_id}, body {body_id}")]
    IdMismatch { route_id: i64, body_id: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These are collected into a [`ModelState`](crate::ModelState) by the
/// form binder rather than returned one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., "abc" for a price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Name of the field this error belongs to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::Negative { field }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Repository Error
// =============================================================================

/// Failures reported by a [`Repository`](crate::Repository) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A mutation targeted an entity that does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: i64 },

    /// A write collided with existing data (duplicate key, check constraint).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The backing store cannot be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Any other storage failure.
    #[error("Storage failure: {0}")]
    Storage(String),
}

impl RepositoryError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: i64) -> Self {
        RepositoryError::NotFound {
            entity: entity.into(),
            id,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::IdMismatch {
            route_id: 0,
            body_id: 3,
        };
        assert_eq!(err.to_string(), "Product id mismatch: route 0, body 3");

        let err = RepositoryError::not_found("Product", 42);
        assert_eq!(err.to_string(), "Product not found: 42");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "Name".to_string(),
        };
        assert_eq!(err.to_string(), "Name is required");
        assert_eq!(err.field(), "Name");

        let err = ValidationError::TooLong {
            field: "Color".to_string(),
            max: 50,
        };
        assert_eq!(err.to_string(), "Color must be at most 50 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Negative {
            field: "Stock".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
