#![forbid(unsafe_code)]

//! Cedar public facade crate.
//!
//! Re-exports the types an application needs to build an element tree,
//! paint it onto a terminal and read input, plus a prelude.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use cedar_core::event::{Event, Key, KeyEvent, Modifiers};
pub use cedar_core::terminal_session::{SessionOptions, TerminalSession};
pub use cedar_core::{Color, LimitsError, Point, Rect, Size, SizeLimits};

// --- Render re-exports -----------------------------------------------------

pub use cedar_render::{Cell, Grid, HeadlessSurface, Surface, TerminalSurface};

// --- Layout re-exports -----------------------------------------------------

pub use cedar_gui::{
    Anchor, Background, CenterRounding, DimensionValue, Draw, ElementId, ElementKind,
    ElementTree, FrameStats, GuiError, LayoutConfig, LocalBounds, UpdateState, Window,
    WindowConfig,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Cedar apps.
#[derive(Debug)]
pub enum Error {
    /// Element tree misuse or a failed frame.
    Gui(GuiError),
    /// Size limits whose minimum exceeds their maximum.
    Limits(LimitsError),
    /// I/O failure during terminal operations.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gui(err) => write!(f, "{err}"),
            Self::Limits(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gui(err) => Some(err),
            Self::Limits(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<GuiError> for Error {
    fn from(err: GuiError) -> Self {
        Self::Gui(err)
    }
}

impl From<LimitsError> for Error {
    fn from(err: LimitsError) -> Self {
        Self::Limits(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for Cedar APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Anchor, Background, Color, DimensionValue, ElementId, Error, Event, Key, KeyEvent,
        Result, SessionOptions, Size, TerminalSession, TerminalSurface, Window,
    };

    pub use crate::{core, gui, render};
}

pub use cedar_core as core;
pub use cedar_gui as gui;
pub use cedar_render as render;
