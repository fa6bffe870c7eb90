//! Application state (Model in TEA pattern)

use sitecheck_core::AnalysisResult;

use crate::config::{Settings, ThemeMode};

/// Text shown while a check is in flight
pub const CHECKING_TEXT: &str = "Checking...";

/// Text shown when the check is submitted with an empty URL
pub const EMPTY_INPUT_TEXT: &str = "Please enter a URL.";

/// Text shown for any transport or parse failure
pub const TRANSPORT_ERROR_TEXT: &str = "Error checking website.";

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// URL input and status line
    #[default]
    Normal,

    /// Detail report dialog over the main screen
    Report,
}

/// Sequence number of a submitted check
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visual class of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputClass {
    Neutral,
    Success,
    Failure,
}

/// Why the last check ended in the failure class
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// Submitted with an empty or whitespace-only URL
    EmptyInput,
    /// The backend answered with a non-genuine status
    Verdict(AnalysisResult),
    /// Network error, non-2xx status, or malformed body
    Transport { detail: String },
}

/// What the status line shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OutputState {
    #[default]
    Idle,
    Checking,
    Success(AnalysisResult),
    Failure(Failure),
}

impl OutputState {
    /// Classify a backend verdict
    pub fn from_result(result: AnalysisResult) -> Self {
        if result.is_genuine() {
            OutputState::Success(result)
        } else {
            OutputState::Failure(Failure::Verdict(result))
        }
    }

    pub fn text(&self) -> String {
        match self {
            OutputState::Idle => String::new(),
            OutputState::Checking => CHECKING_TEXT.to_string(),
            OutputState::Success(result) | OutputState::Failure(Failure::Verdict(result)) => {
                result.summary_line()
            }
            OutputState::Failure(Failure::EmptyInput) => EMPTY_INPUT_TEXT.to_string(),
            OutputState::Failure(Failure::Transport { .. }) => TRANSPORT_ERROR_TEXT.to_string(),
        }
    }

    pub fn class(&self) -> OutputClass {
        match self {
            OutputState::Idle | OutputState::Checking => OutputClass::Neutral,
            OutputState::Success(_) => OutputClass::Success,
            OutputState::Failure(_) => OutputClass::Failure,
        }
    }
}

/// Single-line URL editor with a character cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlInput {
    text: String,
    /// Cursor position in characters, `0..=len`
    cursor: usize,
}

impl UrlInput {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    /// The value a check is submitted with
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Insert text at the cursor, dropping control characters
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars().filter(|c| !c.is_control()) {
            self.insert(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

/// Result shown in the report dialog
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub request_id: RequestId,
    pub result: AnalysisResult,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,

    pub ui_mode: UiMode,

    /// Flipped by the theme toggle; starts from `settings.ui.theme`
    pub theme: ThemeMode,

    pub input: UrlInput,

    pub output: OutputState,

    /// Most recent completed result, kept for reopening in a browser
    pub report: Option<Report>,

    /// Latest submitted check that has not completed yet
    pub in_flight: Option<RequestId>,

    /// Transient notice shown under the status line (browser open results)
    pub notice: Option<String>,

    /// Spinner frame while checking
    pub animation_frame: u64,

    next_request: u64,

    should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            theme: settings.ui.theme,
            settings,
            ui_mode: UiMode::Normal,
            input: UrlInput::default(),
            output: OutputState::Idle,
            report: None,
            in_flight: None,
            notice: None,
            animation_frame: 0,
            next_request: 0,
            should_quit: false,
        }
    }

    /// Start a check with the current input.
    ///
    /// Returns the new request id and trimmed URL, or `None` (with the
    /// output set to the empty-input prompt) when there is nothing to check.
    pub fn begin_check(&mut self) -> Option<(RequestId, String)> {
        let url = self.input.trimmed().to_string();
        if url.is_empty() {
            self.output = OutputState::Failure(Failure::EmptyInput);
            return None;
        }

        self.next_request += 1;
        let request_id = RequestId(self.next_request);
        self.in_flight = Some(request_id);
        self.output = OutputState::Checking;
        // The previous verdict no longer describes what is being checked
        self.report = None;
        self.notice = None;
        self.animation_frame = 0;
        Some((request_id, url))
    }

    /// True if `request_id` is the most recently submitted check
    pub fn is_latest(&self, request_id: RequestId) -> bool {
        self.next_request == request_id.0
    }

    pub fn is_checking(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn open_report(&mut self, request_id: RequestId, result: AnalysisResult) {
        self.report = Some(Report { request_id, result });
        self.ui_mode = UiMode::Report;
    }

    pub fn close_report(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
