//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes

pub(crate) mod keys;
pub(crate) mod update;


use sitecheck_core::AnalysisResult;

use crate::message::Message;
use crate::state::RequestId;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// POST the URL to the backend.
    ///
    /// Any previous in-flight check is aborted when this is dispatched.
    RunCheck { request_id: RequestId, url: String },

    /// Write the report as HTML and open it in the system browser.
    ///
    /// Fire-and-forget OS call. If `browser` is empty, the platform
    /// default opener is used.
    OpenReport {
        request_id: RequestId,
        result: Box<AnalysisResult>,
        browser: String,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
