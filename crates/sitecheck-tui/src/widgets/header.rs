//! Title bar widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use sitecheck_app::config::ThemeMode;

use crate::theme::{styles, Palette};

/// Title bar showing the app name and the active theme
pub struct Header<'a> {
    palette: &'a Palette,
    theme: ThemeMode,
}

impl<'a> Header<'a> {
    pub fn new(palette: &'a Palette, theme: ThemeMode) -> Self {
        Self { palette, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        let title = Line::from(vec![
            Span::styled(" Website Trust Check", styles::accent_bold(self.palette)),
            Span::styled("  scam and phishing lookup", styles::text_muted(self.palette)),
        ]);
        Paragraph::new(title).render(inner, buf);

        let mode = match self.theme {
            ThemeMode::Light => "☀ Light ",
            ThemeMode::Dark => "☾ Dark ",
        };
        Paragraph::new(Span::styled(mode, styles::text_muted(self.palette)))
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}
