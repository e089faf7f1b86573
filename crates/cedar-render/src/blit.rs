#![forbid(unsafe_code)]

//! Copy a drawn grid onto a surface.

use std::io;

use cedar_core::{Point, Rect};

use crate::cell::Cell;
use crate::grid::Grid;
use crate::surface::Surface;

/// Paint `grid` with its top-left corner at `origin`, skipping every cell
/// whose absolute position falls outside `clip`.
///
/// Each visible cell costs exactly one cursor placement, one color pair and
/// one character on the surface. Returns the number of cells written.
pub fn blit<S: Surface + ?Sized>(
    grid: &Grid<Cell>,
    origin: Point,
    clip: Rect,
    surface: &mut S,
) -> io::Result<usize> {
    let extent = Rect::new(
        origin.x,
        origin.y,
        i32::try_from(grid.width()).unwrap_or(i32::MAX),
        i32::try_from(grid.height()).unwrap_or(i32::MAX),
    );
    let Some(visible) = extent.intersection(&clip) else {
        return Ok(0);
    };

    let mut written = 0;
    for y in visible.y..visible.bottom() {
        let Ok(row) = u16::try_from(y) else { continue };
        for x in visible.x..visible.right() {
            let Ok(col) = u16::try_from(x) else { continue };
            let Some(cell) = grid.get((x - origin.x) as usize, (y - origin.y) as usize) else {
                continue;
            };
            surface.set_cursor(col, row)?;
            surface.set_background(cell.bg)?;
            surface.set_foreground(cell.fg)?;
            surface.write_char(cell.display_char())?;
            written += 1;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        x = origin.x,
        y = origin.y,
        width = grid.width(),
        height = grid.height(),
        written,
        "blit"
    );

    Ok(written)
}
