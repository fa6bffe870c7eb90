//! Detail report dialog
//!
//! Fixed-size modal listing every field of the last verdict, the terminal
//! counterpart of the HTML report.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};
use sitecheck_core::report::REPORT_HEADING;
use sitecheck_core::{report_rows, AnalysisResult};

use super::modal_overlay::{centered_rect, dim_background, render_shadow};
use crate::theme::{styles, Palette};

/// Modal showing the full report for one result
pub struct ReportDialog<'a> {
    result: &'a AnalysisResult,
    palette: &'a Palette,
    width: u16,
    height: u16,
}

impl<'a> ReportDialog<'a> {
    pub fn new(result: &'a AnalysisResult, palette: &'a Palette) -> Self {
        Self {
            result,
            palette,
            width: 60,
            height: 18,
        }
    }

    /// Requested dialog size; clamped to the screen when rendered
    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    fn body(&self) -> Vec<Line<'static>> {
        report_rows(self.result)
            .into_iter()
            .map(|row| {
                Line::from(vec![
                    Span::styled(format!("{}: ", row.label), styles::accent_bold(self.palette)),
                    Span::styled(row.value, styles::row_tone(self.palette, row.tone)),
                ])
            })
            .collect()
    }

    fn footer(&self) -> Line<'static> {
        let key = styles::keybinding(self.palette);
        let dim = styles::text_muted(self.palette);
        Line::from(vec![
            Span::styled("[Esc]", key),
            Span::styled(" Close  ", dim),
            Span::styled("[o]", key),
            Span::styled(" Open in browser", dim),
        ])
    }
}

impl Widget for ReportDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area, self.palette);

        let modal = centered_rect(self.width, self.height, area);
        render_shadow(buf, modal, self.palette);
        Clear.render(modal, buf);

        let title = format!(" {REPORT_HEADING} ");
        let block = styles::modal_block(self.palette, &title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [body_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let padding = Margin::new(1, 0);
        Paragraph::new(self.body())
            .wrap(Wrap { trim: false })
            .render(body_area.inner(padding), buf);
        Paragraph::new(self.footer()).render(footer_area.inner(padding), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::{DARK, LIGHT};

    fn suspicious() -> AnalysisResult {
        AnalysisResult {
            url: Some("a.com".into()),
            domain_name: Some("a.com".into()),
            ip: None,
            registrar_date: Some("2020-01-01".into()),
            trust_score: Some(42.0),
            status: Some("Suspicious".into()),
            reason: Some("newly registered".into()),
            purpose: None,
            ..Default::default()
        }
    }

    #[test]
    fn test_report_shows_fallbacks_and_score() {
        let result = suspicious();
        let mut term = TestTerminal::new();
        term.render_widget(ReportDialog::new(&result, &LIGHT), term.area());

        assert!(term.buffer_contains("Website Analysis Report"));
        assert!(term.buffer_contains("IP Address: Not Available"));
        assert!(term.buffer_contains("Purpose: Not available"));
        assert!(term.buffer_contains("Trust Score: 42/100"));
        assert!(term.buffer_contains("Registration Date: 2020-01-01"));
        assert!(term.buffer_contains("[Esc] Close"));
    }

    #[test]
    fn test_status_value_is_colored_by_verdict() {
        let result = suspicious();
        let mut term = TestTerminal::new();
        term.render_widget(ReportDialog::new(&result, &DARK), term.area());

        let content = term.content();
        let (row, line) = content
            .lines()
            .enumerate()
            .find(|(_, line)| line.contains("Status: Suspicious"))
            .unwrap();
        let column = line
            .chars()
            .collect::<Vec<_>>()
            .windows(10)
            .position(|w| w.iter().collect::<String>() == "Suspicious")
            .unwrap();
        assert_eq!(term.buffer()[(column as u16, row as u16)].fg, DARK.bad);
    }

    #[test]
    fn test_dialog_is_fixed_size_and_centered() {
        let result = suspicious();
        let mut term = TestTerminal::new();
        term.render_widget(
            ReportDialog::new(&result, &LIGHT).size(60, 18),
            term.area(),
        );

        // Rounded top-left corner of a 60x18 dialog centered in 80x24
        assert_eq!(term.cell_at(10, 3), Some("╭"));
        assert_eq!(term.cell_at(69, 20), Some("╯"));
    }
}
