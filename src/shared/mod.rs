//! Shared Module
//!
//! Platform-agnostic pieces of the app: configuration, the request and
//! response types of the authentication API, form validation, and the route
//! table. Nothing in here touches the network or the UI toolkit.

/// Authentication payloads and responses
pub mod auth;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Form validation predicates
pub mod validation;

/// Route table and history navigation
pub mod routes;

/// Re-export commonly used types for convenience
pub use auth::{AuthOutcome, AuthTokens, LoginPayload, RegisterPayload, Role, UnrecognizedResponse};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::{FieldError, RouteError, ValidationErrors};
pub use routes::{History, Route, View, ROUTES};
pub use validation::{validate_login, validate_register, LoginForm, RegisterForm};
