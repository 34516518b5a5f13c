//! # Model State
//!
//! The outcome of binding and validating a submitted form.
//!
//! ```text
//! POST /products/create  (name=&price=abc&stock=5)
//!      │
//!      ▼
//! form binder ──► ModelState { Name: ["Name is required"],
//!      │                       Price: ["Price has invalid format: ..."] }
//!      ▼
//! ProductsController::create(product, &state)
//!      ├── state.is_valid()  → repository.create(), redirect to Index
//!      └── !state.is_valid() → re-render Create with the submitted product
//! ```
//!
//! Controllers never produce a `ModelState`; they only branch on it.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::ValidationError;

/// Field-keyed validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModelState {
    errors: BTreeMap<String, Vec<String>>,
}

impl ModelState {
    /// An empty (valid) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error message against a field.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Records a [`ValidationError`] under its own field name.
    pub fn add_validation_error(&mut self, error: &ValidationError) {
        self.add_error(error.field(), error.to_string());
    }

    /// `true` when no field has an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages recorded for `field` (empty when none).
    pub fn errors(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of fields with at least one error.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Iterates `(field, messages)` in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}

impl From<Vec<ValidationError>> for ModelState {
    fn from(errors: Vec<ValidationError>) -> Self {
        let mut state = ModelState::new();
        for error in &errors {
            state.add_validation_error(error);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_is_valid() {
        let state = ModelState::new();
        assert!(state.is_valid());
        assert!(state.errors("Id").is_empty());
    }

    #[test]
    fn test_add_error_invalidates() {
        let mut state = ModelState::new();
        state.add_error("Id", "Id field is necessary");
        state.add_error("Id", "Id must be positive");

        assert!(!state.is_valid());
        assert_eq!(state.error_count(), 1);
        assert_eq!(state.errors("Id").len(), 2);
    }

    #[test]
    fn test_from_validation_errors() {
        let state = ModelState::from(vec![
            ValidationError::Required {
                field: "Name".to_string(),
            },
            ValidationError::Negative {
                field: "Stock".to_string(),
            },
        ]);

        let fields: Vec<&str> = state.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["Name", "Stock"]);
        assert_eq!(state.errors("Name"), ["Name is required".to_string()]);
    }

    #[test]
    fn test_serializes_as_field_map() {
        let mut state = ModelState::new();
        state.add_error("Price", "Price must not be negative");

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["Price"][0], "Price must not be negative");
    }
}
