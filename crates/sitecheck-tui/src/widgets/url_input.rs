//! URL input box widget

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::Span,
    widgets::{Paragraph, Widget},
};
use sitecheck_app::state::UrlInput;

use crate::theme::{styles, Palette};

const PLACEHOLDER: &str = "Enter a website URL, e.g. https://example.com";

/// Bordered single-line editor for the URL
pub struct UrlInputField<'a> {
    input: &'a UrlInput,
    palette: &'a Palette,
    focused: bool,
}

impl<'a> UrlInputField<'a> {
    pub fn new(input: &'a UrlInput, palette: &'a Palette) -> Self {
        Self {
            input,
            palette,
            focused: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// First visible character so the cursor stays inside `width` columns
    fn scroll_offset(&self, width: usize) -> usize {
        let cursor = self.input.cursor();
        if width == 0 || cursor < width {
            0
        } else {
            cursor + 1 - width
        }
    }

    /// Terminal position of the text cursor when rendered into `area`
    pub fn cursor_position(&self, area: Rect) -> Position {
        let inner = styles::panel_block(self.palette, self.focused).inner(area);
        let width = inner.width as usize;
        let column = self.input.cursor() - self.scroll_offset(width);
        Position::new(inner.x + column as u16, inner.y)
    }
}

impl Widget for UrlInputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(self.palette, self.focused)
            .title(Span::styled(" URL ", styles::accent_bold(self.palette)));
        let inner = block.inner(area);
        block.render(area, buf);

        let span = if self.input.is_empty() {
            Span::styled(PLACEHOLDER, styles::text_muted(self.palette))
        } else {
            let width = inner.width as usize;
            let visible: String = self
                .input
                .value()
                .chars()
                .skip(self.scroll_offset(width))
                .take(width)
                .collect();
            Span::styled(visible, styles::text(self.palette))
        };
        Paragraph::new(span).render(inner, buf);
    }
}
