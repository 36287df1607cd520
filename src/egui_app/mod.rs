//! egui Native Desktop App Module
//!
//! The desktop front-end: a home screen, a login screen and a registration
//! screen, talking to the remote authentication API.
//!
//! # Architecture
//!
//! - **`config`** - Configuration read from the environment (API URL, base path)
//! - **`http`** - The shared HTTP client and its error type
//! - **`auth`** - Login, registration and token refresh calls
//! - **`state`** - App state: router history, form inputs, in-flight attempts
//! - **`views`** - egui rendering of the three screens
//! - **`theme`** - Colors
//! - **`main`** - Application entry point (binary)
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the egui app:
//! // AUTHPORTAL_API_URL=http://127.0.0.1:3000 cargo run --bin authportal
//! ```

pub mod config;
pub mod http;
pub mod auth;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use http::{ApiClient, ApiError};
pub use auth::{AuthState, login, register, refresh_token};
pub use state::AppState;
