//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use sitecheck_core::AnalysisResult;

use crate::input_key::InputKey;
use crate::state::RequestId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner)
    Tick,

    /// Quit immediately (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // URL Input Messages
    // ─────────────────────────────────────────────────────────
    InputChar(char),
    /// Bracketed paste, inserted at the cursor
    Paste(String),
    InputBackspace,
    InputDelete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Clear the whole URL line
    ClearInput,

    // ─────────────────────────────────────────────────────────
    // Check Messages
    // ─────────────────────────────────────────────────────────
    /// Submit the current URL to the backend
    SubmitCheck,
    /// A check finished; `outcome` carries the error text on failure
    CheckCompleted {
        request_id: RequestId,
        outcome: Result<AnalysisResult, String>,
    },

    // ─────────────────────────────────────────────────────────
    // Presentation Messages
    // ─────────────────────────────────────────────────────────
    /// Flip light/dark mode
    ToggleTheme,
    /// Dismiss the report dialog
    CloseReport,
    /// Write the last report as HTML and open it in a browser
    OpenReportInBrowser,
    /// HTML report written and handed to the browser
    ReportOpened { path: PathBuf },
    /// HTML report could not be written or opened
    ReportOpenFailed { error: String },
}
