//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar
    pub header: Rect,

    /// Bordered URL input box
    pub input: Rect,

    /// Inline result line under the input
    pub status: Rect,

    /// Transient notice (report export results)
    pub notice: Rect,

    /// Key hints along the bottom edge
    pub help: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(3), // Input box
        Constraint::Length(2), // Status line (may wrap once)
        Constraint::Length(1), // Notice
        Constraint::Min(0),    // Empty space
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        input: chunks[1],
        status: chunks[2],
        notice: chunks[3],
        help: chunks[5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_standard_terminal() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header, Rect::new(0, 0, 80, 3));
        assert_eq!(layout.input, Rect::new(0, 3, 80, 3));
        assert_eq!(layout.status, Rect::new(0, 6, 80, 2));
        assert_eq!(layout.notice, Rect::new(0, 8, 80, 1));
        assert_eq!(layout.help, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_layout_tiny_terminal_does_not_panic() {
        let area = Rect::new(0, 0, 20, 5);
        let layout = create(area);
        for rect in [
            layout.header,
            layout.input,
            layout.status,
            layout.notice,
            layout.help,
        ] {
            assert!(rect.bottom() <= area.bottom());
        }
    }
}
