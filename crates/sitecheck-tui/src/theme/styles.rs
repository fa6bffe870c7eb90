//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use sitecheck_app::OutputClass;
use sitecheck_core::RowTone;

use super::Palette;

// --- Text styles ---
pub fn text(p: &Palette) -> Style {
    Style::default().fg(p.text)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.keybinding)
}

// --- Status styles ---

/// Style of the inline status line for each output class
pub fn output_class(p: &Palette, class: OutputClass) -> Style {
    match class {
        OutputClass::Neutral => text(p),
        OutputClass::Success => Style::default().fg(p.good).add_modifier(Modifier::BOLD),
        OutputClass::Failure => Style::default().fg(p.bad).add_modifier(Modifier::BOLD),
    }
}

/// Style of a report row value
pub fn row_tone(p: &Palette, tone: RowTone) -> Style {
    match tone {
        RowTone::Plain => text(p),
        RowTone::Good => Style::default().fg(p.good).add_modifier(Modifier::BOLD),
        RowTone::Bad => Style::default().fg(p.bad).add_modifier(Modifier::BOLD),
    }
}

// --- Block builders ---
pub fn panel_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border
        }))
        .style(Style::default().bg(p.background))
}

pub fn modal_block<'a>(p: &Palette, title: &'a str) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(accent_bold(p))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border_active))
        .style(Style::default().bg(p.popup_bg))
}
