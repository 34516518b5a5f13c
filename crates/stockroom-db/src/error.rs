//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RepositoryError (stockroom-core) ← What controllers see               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  WebError (apps/web) ← HTTP status + JSON body                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::RepositoryError;
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - UPDATE/DELETE affected zero rows
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: i64 },

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting a product with an id that is already taken
    #[error("Duplicate {field}: already exists")]
    UniqueViolation { field: String },

    /// CHECK / NOT NULL constraint violation.
    ///
    /// ## When This Occurs
    /// - A name longer than 100 characters slipped past validation
    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: i64) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id,
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports constraints as text:
                // "UNIQUE constraint failed: product.id"
                // "CHECK constraint failed: length(name) <= 100"
                if let Some(field) = msg.strip_prefix("UNIQUE constraint failed: ") {
                    DbError::UniqueViolation {
                        field: field.to_string(),
                    }
                } else if msg.contains("constraint failed") {
                    DbError::ConstraintViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// What the controllers get to see.
impl From<DbError> for RepositoryError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => RepositoryError::NotFound { entity, id },
            DbError::UniqueViolation { .. } | DbError::ConstraintViolation { .. } => {
                RepositoryError::Conflict(err.to_string())
            }
            DbError::ConnectionFailed(_) | DbError::PoolExhausted => {
                RepositoryError::Unavailable(err.to_string())
            }
            DbError::MigrationFailed(_) | DbError::QueryFailed(_) | DbError::Internal(_) => {
                RepositoryError::Storage(err.to_string())
            }
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_repository_not_found() {
        let err: RepositoryError = DbError::not_found("Product", 7).into();
        assert_eq!(err, RepositoryError::not_found("Product", 7));
    }

    #[test]
    fn test_constraint_errors_map_to_conflict() {
        let err: RepositoryError = DbError::UniqueViolation {
            field: "product.id".to_string(),
        }
        .into();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[test]
    fn test_pool_errors_map_to_unavailable() {
        let err: RepositoryError = DbError::from(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, RepositoryError::Unavailable(_)));

        let err: RepositoryError = DbError::from(sqlx::Error::PoolClosed).into();
        assert!(matches!(err, RepositoryError::Unavailable(_)));
    }
}
