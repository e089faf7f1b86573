#![forbid(unsafe_code)]

//! Render kernel: cells, grids, terminal surfaces, and the clipped blit.
//!
//! Drawable elements produce a [`grid::Grid`] of [`cell::Cell`]s; [`blit::blit`]
//! copies that grid onto a [`surface::Surface`] at a resolved position,
//! dropping every cell outside the visible region.

pub mod blit;
pub mod cell;
pub mod grid;
pub mod headless;
pub mod surface;

pub use blit::blit;
pub use cell::Cell;
pub use grid::{Grid, GridError};
pub use headless::HeadlessSurface;
pub use surface::{Surface, TerminalSurface};
