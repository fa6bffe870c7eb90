//! Color palettes for light and dark mode.

use ratatui::style::Color;
use sitecheck_app::config::ThemeMode;

/// Colors used by every widget, resolved once per frame from the theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    pub keybinding: Color,

    // --- Text ---
    pub text: Color,
    pub text_muted: Color,

    // --- Status ---
    pub good: Color,
    pub bad: Color,

    // --- Effects ---
    pub dim_fg: Color,
    pub dim_bg: Color,
    pub shadow: Color,
}

/// Light page with dark text
pub const LIGHT: Palette = Palette {
    background: Color::Rgb(248, 248, 248),
    popup_bg: Color::Rgb(255, 255, 255),
    border: Color::Rgb(190, 190, 190),
    border_active: Color::Rgb(37, 99, 235),
    accent: Color::Rgb(37, 99, 235),
    keybinding: Color::Rgb(180, 83, 9),
    text: Color::Rgb(17, 17, 17),
    text_muted: Color::Rgb(110, 110, 110),
    good: Color::Rgb(0, 128, 0),
    bad: Color::Rgb(200, 0, 0),
    dim_fg: Color::Rgb(170, 170, 170),
    dim_bg: Color::Rgb(225, 225, 225),
    shadow: Color::Rgb(160, 160, 160),
};

/// Dark page with light text
pub const DARK: Palette = Palette {
    background: Color::Rgb(18, 18, 18),
    popup_bg: Color::Rgb(30, 30, 36),
    border: Color::Rgb(72, 79, 88),
    border_active: Color::Rgb(88, 166, 255),
    accent: Color::Rgb(88, 166, 255),
    keybinding: Color::Rgb(234, 179, 8),
    text: Color::Rgb(230, 230, 230),
    text_muted: Color::Rgb(125, 133, 144),
    good: Color::Rgb(16, 185, 129),
    bad: Color::Rgb(244, 63, 94),
    dim_fg: Color::Rgb(72, 79, 88),
    dim_bg: Color::Rgb(10, 12, 16),
    shadow: Color::Rgb(5, 6, 8),
};

/// Palette for the given mode
pub fn for_mode(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_have_distinct_backgrounds() {
        assert_ne!(for_mode(ThemeMode::Light), for_mode(ThemeMode::Dark));
        assert_ne!(LIGHT.background, DARK.background);
        assert_ne!(LIGHT.text, DARK.text);
    }

    #[test]
    fn test_status_colors_differ_from_text() {
        for palette in [&LIGHT, &DARK] {
            assert_ne!(palette.good, palette.bad);
            assert_ne!(palette.good, palette.text);
            assert_ne!(palette.bad, palette.text);
        }
    }
}
