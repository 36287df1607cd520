//! Common test utilities and helpers
//!
//! - Mock API server helpers built on wiremock
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod mock_server;

pub use mock_server::*;
