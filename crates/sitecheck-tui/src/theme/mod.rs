//! Light and dark themes for the terminal UI.
//!
//! This module provides:
//! - `palette` — Color sets for each [`ThemeMode`](sitecheck_app::config::ThemeMode)
//! - `styles` — Semantic style builder functions

pub mod palette;
pub mod styles;

pub use palette::Palette;
