//! Key event handlers for UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert a key press into a message for the current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Global bindings, valid in every mode
    match key {
        InputKey::CharCtrl('c') | InputKey::CharCtrl('q') => return Some(Message::Quit),
        InputKey::CharCtrl('t') | InputKey::F(2) => return Some(Message::ToggleTheme),
        _ => {}
    }

    match state.ui_mode {
        UiMode::Normal => handle_key_normal(key),
        UiMode::Report => handle_key_report(key),
    }
}

/// Keys while editing the URL
fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitCheck),
        InputKey::Char(c) => Some(Message::InputChar(c)),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::Delete => Some(Message::InputDelete),
        InputKey::Left => Some(Message::CursorLeft),
        InputKey::Right => Some(Message::CursorRight),
        InputKey::Home | InputKey::CharCtrl('a') => Some(Message::CursorHome),
        InputKey::End | InputKey::CharCtrl('e') => Some(Message::CursorEnd),
        InputKey::Esc | InputKey::CharCtrl('u') => Some(Message::ClearInput),
        InputKey::CharCtrl('o') => Some(Message::OpenReportInBrowser),
        _ => None,
    }
}

/// Keys while the report dialog is shown
fn handle_key_report(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter | InputKey::Char('q') => Some(Message::CloseReport),
        InputKey::Char('o') => Some(Message::OpenReportInBrowser),
        _ => None,
    }
}
