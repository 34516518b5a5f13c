//! # Web Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Expected outcomes are NOT errors:                                     │
//! │    missing product, id mismatch, invalid form                          │
//! │    → PageResult / ApiResponse variants decided by the controller       │
//! │                                                                         │
//! │  Infrastructure failures ARE errors:                                   │
//! │                                                                         │
//! │  DbError ──► RepositoryError ──► WebError ──► HTTP response            │
//! │                                                                         │
//! │    NotFound     → 404  { "code": "NOT_FOUND",   ... }                  │
//! │    Conflict     → 409  { "code": "CONFLICT",    ... }                  │
//! │    Unavailable  → 500  { "code": "UNAVAILABLE", ... }                  │
//! │    Storage      → 500  { "code": "INTERNAL",    ... }                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Internal details are logged and replaced by a generic message so storage
//! errors never leak to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use stockroom_core::RepositoryError;

/// Error codes for HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Write rejected by the store (409)
    Conflict,

    /// Store unreachable (500)
    Unavailable,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::Unavailable | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error returned from handlers.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("[{code:?}] {message}")]
pub struct WebError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

impl WebError {
    /// Creates a new web error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        WebError {
            code,
            message: message.into(),
        }
    }

    /// HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

/// Converts repository errors to web errors.
impl From<RepositoryError> for WebError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => WebError::new(ErrorCode::NotFound, err.to_string()),
            RepositoryError::Conflict(detail) => {
                tracing::warn!(%detail, "Write rejected by the store");
                WebError::new(ErrorCode::Conflict, "The product conflicts with stored data")
            }
            RepositoryError::Unavailable(detail) => {
                tracing::error!(%detail, "Store unavailable");
                WebError::new(ErrorCode::Unavailable, "The product store is unavailable")
            }
            RepositoryError::Storage(detail) => {
                tracing::error!(%detail, "Store operation failed");
                WebError::new(ErrorCode::Internal, "Database operation failed")
            }
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Result type for handlers and controllers.
pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (RepositoryError::not_found("Product", 7), StatusCode::NOT_FOUND),
            (RepositoryError::Conflict("dup".into()), StatusCode::CONFLICT),
            (
                RepositoryError::Unavailable("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                RepositoryError::Storage("disk".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(WebError::from(err).status(), status);
        }
    }

    #[test]
    fn test_storage_details_are_not_leaked() {
        let err = WebError::from(RepositoryError::Storage("no such table: product".into()));

        assert_eq!(err.code, ErrorCode::Internal);
        assert!(!err.message.contains("product"));
    }

    #[test]
    fn test_body_shape() {
        let err = WebError::from(RepositoryError::not_found("Product", 42));
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 42");
    }
}
