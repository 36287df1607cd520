//! Color constants for the auth screens
//!
//! A dark slate background with a blue accent.

use eframe::egui::Color32;

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x1E, 0x24, 0x2E);

/// Main area background
pub const BG_DARK: Color32 = Color32::from_rgb(0x14, 0x19, 0x21);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE6, 0xEA, 0xF0);

/// Labels and hints
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8A, 0x94, 0xA6);

/// Primary buttons and the active nav entry
pub const ACCENT: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);

pub const SUCCESS: Color32 = Color32::from_rgb(0x4A, 0xDE, 0x80);

/// Field and request errors
pub const ERROR: Color32 = Color32::from_rgb(0xF8, 0x71, 0x71);
