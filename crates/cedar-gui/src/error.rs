#![forbid(unsafe_code)]

//! Errors raised by element tree operations and rendering.

use std::fmt;
use std::io;

use cedar_core::Size;

use crate::element::ElementId;

/// Result alias for element tree operations.
pub type Result<T> = std::result::Result<T, GuiError>;

/// Element tree error.
///
/// Every variant except [`GuiError::Io`] is a usage error raised at the
/// point of the invalid call, before any state is changed.
#[derive(Debug)]
pub enum GuiError {
    /// Child index outside the container's slots.
    OutOfRange { index: usize, len: usize },
    /// Table cell outside the table's grid.
    CellOutOfRange {
        x: usize,
        y: usize,
        columns: usize,
        rows: usize,
    },
    /// `child` is not currently a child of `parent`.
    NotFound { parent: ElementId, child: ElementId },
    /// The call makes no sense for these arguments.
    InvalidArgument(&'static str),
    /// The handle refers to an element that was destroyed.
    StaleElement(ElementId),
    /// A container operation was called on a drawable element.
    NotALayout(ElementId),
    /// A canvas returned a grid that does not match its resolved size.
    DrawSize { expected: Size, actual: Size },
    /// The surface failed.
    Io(io::Error),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "child index {index} out of range for {len} slots")
            }
            Self::CellOutOfRange {
                x,
                y,
                columns,
                rows,
            } => write!(
                f,
                "cell ({x}, {y}) out of range for a {columns}x{rows} table"
            ),
            Self::NotFound { parent, child } => {
                write!(f, "{child:?} is not a child of {parent:?}")
            }
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::StaleElement(id) => write!(f, "{id:?} no longer exists"),
            Self::NotALayout(id) => write!(f, "{id:?} cannot hold children"),
            Self::DrawSize { expected, actual } => {
                write!(f, "canvas drew {actual} cells, expected {expected}")
            }
            Self::Io(e) => write!(f, "surface error: {e}"),
        }
    }
}

impl std::error::Error for GuiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GuiError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_messages() {
        let err = GuiError::OutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "child index 3 out of range for 2 slots");

        let err = GuiError::CellOutOfRange {
            x: 4,
            y: 0,
            columns: 2,
            rows: 2,
        };
        assert_eq!(err.to_string(), "cell (4, 0) out of range for a 2x2 table");

        let err = GuiError::DrawSize {
            expected: Size::new(3, 2),
            actual: Size::new(1, 1),
        };
        assert_eq!(err.to_string(), "canvas drew 1x1 cells, expected 3x2");
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err = GuiError::from(io::Error::other("boom"));
        assert!(matches!(err, GuiError::Io(_)));
        assert!(err.source().is_some());
        assert!(GuiError::InvalidArgument("x").source().is_none());
    }
}
