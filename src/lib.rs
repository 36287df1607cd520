//! authportal - Main Library
//!
//! A native desktop front-end with login and registration screens backed by a
//! remote HTTP authentication API.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no UI or network dependency
//!   - Request/response types for the auth API
//!   - Form validation predicates
//!   - Route table and history navigation
//!   - Configuration and error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - HTTP client and auth API calls
//!   - App state and the three screens
//!
//! # Usage
//!
//! ```rust,no_run
//! use authportal::egui_app::{login, ApiClient, Config};
//! use authportal::shared::LoginPayload;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let client = ApiClient::new(&config)?;
//! let payload = LoginPayload {
//!     identifier: "ada".to_string(),
//!     password: "secret".to_string(),
//! };
//! match login(&client, &payload).await? {
//!     Ok(tokens) => println!("access token: {}", tokens.access_token),
//!     Err(other) => println!("unexpected reply: {}", other.body),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - Network and HTTP status failures come back as `egui_app::ApiError`,
//!   wrapping the `reqwest` error unchanged.
//! - A successful reply that is not a token object is an
//!   `UnrecognizedResponse`, not an error.
//! - Validation failures are values (`ValidationErrors`) for display.

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
