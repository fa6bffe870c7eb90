//! sitecheck-app - Application state and orchestration for Site Check
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the Engine abstraction shared by the TUI and headless runners, configuration
//! loading, and the HTTP client for the analysis backend.

pub mod actions;
pub mod client;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use client::{CheckService, HttpCheckClient};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Failure, OutputClass, OutputState, RequestId, UiMode};
