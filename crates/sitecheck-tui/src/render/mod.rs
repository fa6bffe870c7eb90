//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use sitecheck_app::state::{AppState, UiMode};

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Pure function of the state: every pixel comes from `state`, including
/// the theme palette.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let palette = palette::for_mode(state.theme);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(widgets::Header::new(palette, state.theme), areas.header);

    let editing = state.ui_mode == UiMode::Normal;
    let input = widgets::UrlInputField::new(&state.input, palette).focused(editing);
    let cursor = input.cursor_position(areas.input);
    frame.render_widget(input, areas.input);

    frame.render_widget(
        widgets::StatusLine::new(&state.output, palette).frame(state.animation_frame),
        areas.status,
    );

    if let Some(notice) = &state.notice {
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {notice}"), styles::text_muted(palette))),
            areas.notice,
        );
    }

    frame.render_widget(widgets::KeyHints::new(state.ui_mode, palette), areas.help);

    match (state.ui_mode, &state.report) {
        (UiMode::Report, Some(report)) => {
            let size = &state.settings.report;
            frame.render_widget(
                widgets::ReportDialog::new(&report.result, palette).size(size.width, size.height),
                area,
            );
        }
        _ => {
            if editing {
                frame.set_cursor_position(cursor);
            }
        }
    }
}
