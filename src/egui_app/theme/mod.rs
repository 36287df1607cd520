//! Theme Module
//!
//! Colors shared by the auth screens.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::colors;
//!
//! ui.painter().rect_filled(rect, 0.0, colors::BG_DARK);
//! ```

pub mod colors;
