#![forbid(unsafe_code)]

//! Core: geometry, colors, input events, and the terminal session guard.

pub mod color;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod terminal_session;

pub use color::Color;
pub use geometry::{LimitsError, Point, Rect, Size, SizeLimits};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, info_span, trace, warn};
