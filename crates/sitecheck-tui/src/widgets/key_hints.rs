//! Key hint bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use sitecheck_app::UiMode;

use crate::theme::{styles, Palette};

/// Bottom bar listing the keys valid in the current mode
pub struct KeyHints<'a> {
    mode: UiMode,
    palette: &'a Palette,
}

impl<'a> KeyHints<'a> {
    pub fn new(mode: UiMode, palette: &'a Palette) -> Self {
        Self { mode, palette }
    }

    fn bindings(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Normal => &[
                ("Enter", "Check"),
                ("Esc", "Clear"),
                ("Ctrl+O", "Open report"),
                ("Ctrl+T", "Theme"),
                ("Ctrl+C", "Quit"),
            ],
            UiMode::Report => &[
                ("Esc", "Close"),
                ("o", "Open in browser"),
                ("Ctrl+T", "Theme"),
                ("Ctrl+C", "Quit"),
            ],
        }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key = styles::keybinding(self.palette);
        let dim = styles::text_muted(self.palette);

        let mut spans = vec![Span::raw(" ")];
        for (binding, label) in self.bindings() {
            spans.push(Span::styled(format!("[{binding}]"), key));
            spans.push(Span::styled(format!(" {label}  "), dim));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
