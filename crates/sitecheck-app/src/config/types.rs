//! Configuration types for Site Check
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - `BackendSettings`, `UiSettings`, `ReportSettings` - per-section settings
//! - `ThemeMode` - Light/dark presentation mode

use serde::{Deserialize, Serialize};
use sitecheck_core::prelude::*;
use url::Url;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub report: ReportSettings,
}

/// Analysis backend settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Scheme, host and port of the analysis service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the check endpoint
    #[serde(default = "default_check_path")]
    pub check_path: String,

    /// Request timeout in seconds; no timeout when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            check_path: default_check_path(),
            timeout_secs: None,
        }
    }
}

impl BackendSettings {
    /// Resolve the absolute URL of the check endpoint
    pub fn endpoint(&self) -> Result<Url> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_endpoint(&self.base_url, e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(Error::invalid_endpoint(
                &self.base_url,
                "URL cannot be used as a base",
            ));
        }
        base.join(&self.check_path)
            .map_err(|e| Error::invalid_endpoint(&self.check_path, e.to_string()))
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_check_path() -> String {
    "/check".to_string()
}

/// Presentation mode, flipped by the theme toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Theme at startup
    #[serde(default)]
    pub theme: ThemeMode,

    /// Open the report dialog after every successful check
    #[serde(default = "default_true")]
    pub show_report: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            show_report: true,
        }
    }
}

/// Detail report settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReportSettings {
    /// Report dialog width in cells
    #[serde(default = "default_report_width")]
    pub width: u16,

    /// Report dialog height in cells
    #[serde(default = "default_report_height")]
    pub height: u16,

    /// Also open the HTML report in a browser after each check
    #[serde(default)]
    pub open_in_browser: bool,

    /// Browser command; empty uses the platform opener
    #[serde(default)]
    pub browser: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            width: default_report_width(),
            height: default_report_height(),
            open_in_browser: false,
            browser: String::new(),
        }
    }
}

fn default_report_width() -> u16 {
    60
}

fn default_report_height() -> u16 {
    18
}

fn default_true() -> bool {
    true
}
