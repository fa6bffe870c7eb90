//! Full-screen rendering tests for each UI mode

use sitecheck_app::config::ThemeMode;
use sitecheck_app::state::{Failure, OutputState, RequestId, UiMode, UrlInput};
use sitecheck_core::AnalysisResult;

use super::view;
use crate::test_utils::{sample_result, test_app_state, TestTerminal};
use crate::theme::palette;

fn render_screen(state: &sitecheck_app::AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

fn with_report(status: &str) -> sitecheck_app::AppState {
    let mut state = test_app_state();
    let result = sample_result(status);
    state.output = OutputState::from_result(result.clone());
    state.open_report(RequestId(1), result);
    state
}

// ===========================================================================
// Normal Mode
// ===========================================================================

#[test]
fn test_idle_screen() {
    let term = render_screen(&test_app_state());

    assert!(term.buffer_contains("Website Trust Check"));
    assert!(term.buffer_contains("Enter a website URL"));
    assert!(term.buffer_contains("[Enter] Check"));
}

#[test]
fn test_typed_url_and_checking_status() {
    let mut state = test_app_state();
    state.input = UrlInput::new("example.com");
    assert!(state.begin_check().is_some());

    let term = render_screen(&state);

    assert!(term.buffer_contains("example.com"));
    assert!(term.buffer_contains("Checking..."));
}

#[test]
fn test_empty_input_message() {
    let mut state = test_app_state();
    state.output = OutputState::Failure(Failure::EmptyInput);

    let term = render_screen(&state);
    assert!(term.buffer_contains("Please enter a URL."));
}

#[test]
fn test_notice_is_shown() {
    let mut state = test_app_state();
    state.notice = Some("Report opened: /tmp/report-1.html".into());

    let term = render_screen(&state);
    assert!(term.buffer_contains("Report opened: /tmp/report-1.html"));
}

#[test]
fn test_summary_line_under_input() {
    let mut state = with_report("Genuine");
    state.close_report();

    let term = render_screen(&state);

    assert!(term.buffer_contains("https://example.com — Genuine (Website reachable (HEAD, 200))"));
    assert!(!term.buffer_contains("Website Analysis Report"));
}

// ===========================================================================
// Report Mode
// ===========================================================================

#[test]
fn test_report_dialog_over_main_screen() {
    let term = render_screen(&with_report("Genuine"));

    assert!(term.buffer_contains("Website Analysis Report"));
    assert!(term.buffer_contains("Domain Age: 10000 days"));
    assert!(term.buffer_contains("Trust Score: 90/100"));
    assert!(term.buffer_contains("[o] Open in browser"));
}

#[test]
fn test_report_with_missing_fields() {
    let mut state = test_app_state();
    let result = AnalysisResult {
        url: Some("a.com".into()),
        status: Some("Suspicious".into()),
        ..Default::default()
    };
    state.open_report(RequestId(4), result);

    let term = render_screen(&state);

    assert!(term.buffer_contains("IP Address: Not Available"));
    assert!(term.buffer_contains("Purpose: Not available"));
    assert!(term.buffer_contains("Trust Score: ?/100"));
    assert!(!term.buffer_contains("Domain Age"));
}

#[test]
fn test_report_mode_without_result_renders_main_screen() {
    let mut state = test_app_state();
    state.ui_mode = UiMode::Report;
    state.report = None;

    let term = render_screen(&state);
    assert!(!term.buffer_contains("Website Analysis Report"));
}

#[test]
fn test_configured_dialog_size() {
    let mut state = with_report("Genuine");
    state.settings.report.width = 70;
    state.settings.report.height = 20;

    let term = render_screen(&state);

    // 70x20 centered in 80x24
    assert_eq!(term.cell_at(5, 2), Some("╭"));
    assert_eq!(term.cell_at(74, 21), Some("╯"));
}

// ===========================================================================
// Theme
// ===========================================================================

#[test]
fn test_theme_changes_background() {
    let mut state = test_app_state();
    state.theme = ThemeMode::Light;
    let light = render_screen(&state);

    state.toggle_theme();
    let dark = render_screen(&state);

    // Bottom-left corner is plain background in both modes
    assert_eq!(light.buffer()[(0, 20)].bg, palette::LIGHT.background);
    assert_eq!(dark.buffer()[(0, 20)].bg, palette::DARK.background);
    assert!(dark.buffer_contains("Dark"));
}
