//! Inline result line under the URL input

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use sitecheck_app::state::OutputState;

use crate::theme::{styles, Palette};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Colored one-line summary of the last check
pub struct StatusLine<'a> {
    output: &'a OutputState,
    palette: &'a Palette,
    frame: u64,
}

impl<'a> StatusLine<'a> {
    pub fn new(output: &'a OutputState, palette: &'a Palette) -> Self {
        Self {
            output,
            palette,
            frame: 0,
        }
    }

    /// Spinner frame shown while checking
    pub fn frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = styles::output_class(self.palette, self.output.class());
        let mut spans = vec![Span::raw(" ")];

        if matches!(self.output, OutputState::Checking) {
            let glyph = SPINNER[(self.frame % SPINNER.len() as u64) as usize];
            spans.push(Span::styled(
                format!("{glyph} "),
                styles::accent_bold(self.palette),
            ));
        }
        spans.push(Span::styled(self.output.text(), style));

        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;
    use sitecheck_app::state::Failure;
    use sitecheck_core::AnalysisResult;

    fn render(output: &OutputState) -> TestTerminal {
        let mut term = TestTerminal::with_size(60, 2);
        term.render_widget(StatusLine::new(output, &LIGHT), Rect::new(0, 0, 60, 2));
        term
    }

    #[test]
    fn test_idle_is_blank() {
        let term = render(&OutputState::Idle);
        assert!(term.content().trim().is_empty());
    }

    #[test]
    fn test_checking_shows_spinner_and_text() {
        let term = render(&OutputState::Checking);
        assert!(term.buffer_contains("⠋ Checking..."));
    }

    #[test]
    fn test_verdict_colors() {
        let result = AnalysisResult {
            url: Some("a.com".into()),
            status: Some("Scam".into()),
            reason: Some("phishing".into()),
            ..Default::default()
        };
        let term = render(&OutputState::Failure(Failure::Verdict(result)));
        assert!(term.buffer_contains("a.com — Scam (phishing)"));
        assert_eq!(term.buffer()[(1, 0)].fg, LIGHT.bad);

        let term = render(&OutputState::Failure(Failure::Transport {
            detail: "refused".into(),
        }));
        assert!(term.buffer_contains("Error checking website."));
        assert!(!term.buffer_contains("refused"));
    }
}
