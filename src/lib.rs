//! Site Check Library
//!
//! Terminal client for a website trust-check backend. The TUI lives in
//! `sitecheck-tui`; this crate adds the headless runner used by scripts.

pub mod headless;

// Re-export main entry points
pub use headless::{run_headless, HeadlessOptions};
pub use sitecheck_tui::run as run_tui;
