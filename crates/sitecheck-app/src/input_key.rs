//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into `InputKey` at its boundary so
//! the update logic (and its tests) never depend on crossterm types.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (letters, digits, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+t, ...)
    CharCtrl(char),

    Left,
    Right,
    Home,
    End,

    Enter,
    Esc,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_eq!(InputKey::CharCtrl('t'), InputKey::CharCtrl('t'));
        assert_ne!(InputKey::CharCtrl('t'), InputKey::Char('t'));
    }

    #[test]
    fn test_input_key_debug() {
        let key = InputKey::CharCtrl('c');
        let debug_str = format!("{:?}", key);
        assert!(debug_str.contains("CharCtrl"));
    }
}
