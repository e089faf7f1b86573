#![forbid(unsafe_code)]

//! The unit of drawable output.

use cedar_core::Color;
use unicode_width::UnicodeWidthChar;

/// One terminal cell: a character with foreground and background colors.
///
/// Cells are produced fresh by each draw call and never retained by the
/// element that drew them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    /// A blank cell painted with `bg`.
    #[inline]
    pub const fn blank(bg: Color) -> Self {
        Self {
            ch: ' ',
            fg: Color::Default,
            bg,
        }
    }

    /// A character on the default colors.
    #[inline]
    pub const fn from_char(ch: char) -> Self {
        Self {
            ch,
            fg: Color::Default,
            bg: Color::Default,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    /// The character actually written to the terminal.
    ///
    /// A cell spans exactly one column, so control characters and
    /// zero- or double-width characters are replaced by a space.
    pub fn display_char(&self) -> char {
        match self.ch.width() {
            Some(1) => self.ch,
            _ => ' ',
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Color::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_cell_is_space() {
        let cell = Cell::blank(Color::Blue);
        assert_eq!(cell.ch, ' ');
        assert_eq!(cell.bg, Color::Blue);
        assert_eq!(cell.fg, Color::Default);
    }

    #[test]
    fn builders_set_colors() {
        let cell = Cell::from_char('x').with_fg(Color::Red).with_bg(Color::White);
        assert_eq!(cell.fg, Color::Red);
        assert_eq!(cell.bg, Color::White);
    }

    #[test]
    fn display_char_keeps_single_width() {
        assert_eq!(Cell::from_char('a').display_char(), 'a');
        assert_eq!(Cell::from_char('╫').display_char(), '╫');
    }

    #[test]
    fn display_char_replaces_unrepresentable() {
        assert_eq!(Cell::from_char('\n').display_char(), ' ');
        assert_eq!(Cell::from_char('\u{1b}').display_char(), ' ');
        assert_eq!(Cell::from_char('界').display_char(), ' ');
        assert_eq!(Cell::from_char('\u{301}').display_char(), ' ');
    }
}
