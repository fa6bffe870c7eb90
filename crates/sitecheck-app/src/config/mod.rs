//! Configuration file parsing for Site Check
//!
//! Supports `<config_dir>/site-check/config.toml` or an explicit `--config` path.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
