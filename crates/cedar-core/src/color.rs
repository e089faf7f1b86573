#![forbid(unsafe_code)]

//! The 16 ANSI colors plus the terminal default.

/// A named terminal color.
///
/// The discriminant is the SGR foreground code; the background code is
/// ten higher. [`Color::Default`] resets to whatever the terminal uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Color {
    /// The terminal's own default color.
    #[default]
    Default = 0,
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,
    BrightBlack = 90,
    BrightRed = 91,
    BrightGreen = 92,
    BrightYellow = 93,
    BrightBlue = 94,
    BrightMagenta = 95,
    BrightCyan = 96,
    BrightWhite = 97,
}

impl Color {
    /// All named colors (everything except [`Color::Default`]).
    pub const NAMED: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    /// SGR parameter selecting this color as foreground.
    #[must_use]
    pub const fn foreground_code(self) -> u8 {
        match self {
            Self::Default => 39,
            other => other as u8,
        }
    }

    /// SGR parameter selecting this color as background.
    #[must_use]
    pub const fn background_code(self) -> u8 {
        match self {
            Self::Default => 49,
            other => other as u8 + 10,
        }
    }

    /// Parse a lowercase color name such as `"bright_blue"` or `"default"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "default" => Self::Default,
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            "bright_black" | "gray" | "grey" => Self::BrightBlack,
            "bright_red" => Self::BrightRed,
            "bright_green" => Self::BrightGreen,
            "bright_yellow" => Self::BrightYellow,
            "bright_blue" => Self::BrightBlue,
            "bright_magenta" => Self::BrightMagenta,
            "bright_cyan" => Self::BrightCyan,
            "bright_white" => Self::BrightWhite,
            _ => return None,
        };
        Some(color)
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        use crossterm::style::Color as Ct;
        match color {
            Color::Default => Ct::Reset,
            Color::Black => Ct::Black,
            Color::Red => Ct::DarkRed,
            Color::Green => Ct::DarkGreen,
            Color::Yellow => Ct::DarkYellow,
            Color::Blue => Ct::DarkBlue,
            Color::Magenta => Ct::DarkMagenta,
            Color::Cyan => Ct::DarkCyan,
            Color::White => Ct::Grey,
            Color::BrightBlack => Ct::DarkGrey,
            Color::BrightRed => Ct::Red,
            Color::BrightGreen => Ct::Green,
            Color::BrightYellow => Ct::Yellow,
            Color::BrightBlue => Ct::Blue,
            Color::BrightMagenta => Ct::Magenta,
            Color::BrightCyan => Ct::Cyan,
            Color::BrightWhite => Ct::White,
        }
    }
}
