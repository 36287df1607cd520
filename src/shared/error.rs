//! Shared Error Types
//!
//! Error types for the pieces of the app that do not touch the network:
//! field validation and navigation. Network errors live with the HTTP client
//! in `egui_app::http`.
//!
//! # Error Categories
//!
//! - `FieldError` / `ValidationErrors` - form input that failed a field rule.
//!   These are returned as values for display, never raised as failures of
//!   the app itself.
//! - `RouteError` - navigation to a path the route table does not know.
//!
//! # Usage
//!
//! ```rust
//! use authportal::shared::error::FieldError;
//!
//! let error = FieldError::new("email", "Invalid email format");
//! assert_eq!(error.to_string(), "email: Invalid email format");
//! ```
use std::fmt;

use thiserror::Error;

/// A single field that failed validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// The field that failed validation
    pub field: &'static str,
    /// Human-readable error message
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All field errors produced by one validation pass, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for `field`, if it failed
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing was collected
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Navigation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route matches {0}")]
    NotFound(String),
}
