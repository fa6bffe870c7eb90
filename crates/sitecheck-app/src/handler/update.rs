//! Main update function - handles state transitions (TEA pattern)

use sitecheck_core::prelude::*;
use sitecheck_core::AnalysisResult;

use crate::message::Message;
use crate::state::{AppState, Failure, OutputState, Report, RequestId, UiMode};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state.is_checking() {
                state.animation_frame = state.animation_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // URL Input
        // ─────────────────────────────────────────────────────────
        Message::InputChar(c) => {
            state.input.insert(c);
            UpdateResult::none()
        }
        Message::Paste(text) => {
            // The report dialog has no text field
            if state.ui_mode == UiMode::Normal {
                state.input.insert_str(&text);
            }
            UpdateResult::none()
        }
        Message::InputBackspace => {
            state.input.backspace();
            UpdateResult::none()
        }
        Message::InputDelete => {
            state.input.delete();
            UpdateResult::none()
        }
        Message::CursorLeft => {
            state.input.move_left();
            UpdateResult::none()
        }
        Message::CursorRight => {
            state.input.move_right();
            UpdateResult::none()
        }
        Message::CursorHome => {
            state.input.move_home();
            UpdateResult::none()
        }
        Message::CursorEnd => {
            state.input.move_end();
            UpdateResult::none()
        }
        Message::ClearInput => {
            state.input.clear();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Checks
        // ─────────────────────────────────────────────────────────
        Message::SubmitCheck => handle_submit(state),

        Message::CheckCompleted {
            request_id,
            outcome,
        } => handle_check_completed(state, request_id, outcome),

        // ─────────────────────────────────────────────────────────
        // Presentation
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            state.toggle_theme();
            debug!("Theme switched to {}", state.theme);
            UpdateResult::none()
        }

        Message::CloseReport => {
            state.close_report();
            UpdateResult::none()
        }

        Message::OpenReportInBrowser => match &state.report {
            Some(report) => UpdateResult::action(UpdateAction::OpenReport {
                request_id: report.request_id,
                result: Box::new(report.result.clone()),
                browser: state.settings.report.browser.clone(),
            }),
            None => {
                state.notice = Some("No report to open yet".to_string());
                UpdateResult::none()
            }
        },

        Message::ReportOpened { path } => {
            info!("Opened report {}", path.display());
            state.notice = Some(format!("Report opened: {}", path.display()));
            UpdateResult::none()
        }

        Message::ReportOpenFailed { error } => {
            warn!("Failed to open report: {}", error);
            state.notice = Some(format!("Could not open report: {}", error));
            UpdateResult::none()
        }
    }
}

fn handle_submit(state: &mut AppState) -> UpdateResult {
    match state.begin_check() {
        Some((request_id, url)) => {
            info!("Checking {} (request {})", url, request_id);
            UpdateResult::action(UpdateAction::RunCheck { request_id, url })
        }
        None => {
            debug!("Submit ignored: empty URL");
            UpdateResult::none()
        }
    }
}

fn handle_check_completed(
    state: &mut AppState,
    request_id: RequestId,
    outcome: std::result::Result<AnalysisResult, String>,
) -> UpdateResult {
    // Latest-submitted wins; anything older was superseded
    if !state.is_latest(request_id) {
        debug!("Discarding stale response for request {}", request_id);
        return UpdateResult::none();
    }
    state.in_flight = None;

    match outcome {
        Ok(result) => {
            info!(
                "Request {} finished: {}",
                request_id,
                result.summary_line()
            );
            state.output = OutputState::from_result(result.clone());

            if state.settings.ui.show_report {
                state.open_report(request_id, result);
            } else {
                state.report = Some(Report { request_id, result });
            }

            if state.settings.report.open_in_browser {
                return UpdateResult::message(Message::OpenReportInBrowser);
            }
            UpdateResult::none()
        }
        Err(detail) => {
            warn!("Request {} failed: {}", request_id, detail);
            state.output = OutputState::Failure(Failure::Transport { detail });
            UpdateResult::none()
        }
    }
}
