//! Property-based invariant tests for grids and clipped blitting.
//!
//! 1. Blit writes exactly the cells in grid ∩ clip.
//! 2. Blit never touches a cell outside the clip.
//! 3. Every visible cell carries the grid's content.
//! 4. Grid resize keeps every item in the overlap and fills the rest.

use cedar_core::{Color, Point, Rect, Size};
use cedar_render::{Cell, Grid, HeadlessSurface, blit};
use proptest::prelude::*;

const SCREEN: i32 = 24;

// ── Helpers ─────────────────────────────────────────────────────────────

fn clip_strategy() -> impl Strategy<Value = Rect> {
    (0..SCREEN, 0..SCREEN, 0..=SCREEN, 0..=SCREEN).prop_map(|(x, y, w, h)| {
        Rect::new(x, y, w.min(SCREEN - x), h.min(SCREEN - y))
    })
}

fn origin_strategy() -> impl Strategy<Value = Point> {
    (-30i32..=30, -30i32..=30).prop_map(|(x, y)| Point::new(x, y))
}

fn filled(width: usize, height: usize) -> Grid<Cell> {
    Grid::new(width, height, Cell::from_char('#').with_bg(Color::Red))
}

fn visible_area(grid: &Grid<Cell>, origin: Point, clip: Rect) -> usize {
    let extent = Rect::new(origin.x, origin.y, grid.width() as i32, grid.height() as i32);
    extent
        .intersection(&clip)
        .map_or(0, |r| (r.width * r.height) as usize)
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn blit_writes_exactly_the_visible_cells(
        width in 0usize..=20,
        height in 0usize..=20,
        origin in origin_strategy(),
        clip in clip_strategy(),
    ) {
        let grid = filled(width, height);
        let mut surface = HeadlessSurface::new(Size::new(SCREEN, SCREEN));
        let written = blit(&grid, origin, clip, &mut surface).unwrap();
        prop_assert_eq!(written, visible_area(&grid, origin, clip));
        prop_assert_eq!(surface.chars_written(), written);
    }

    #[test]
    fn blit_never_writes_outside_clip(
        width in 0usize..=20,
        height in 0usize..=20,
        origin in origin_strategy(),
        clip in clip_strategy(),
    ) {
        let grid = filled(width, height);
        let extent = Rect::new(origin.x, origin.y, width as i32, height as i32);
        let mut surface = HeadlessSurface::new(Size::new(SCREEN, SCREEN));
        blit(&grid, origin, clip, &mut surface).unwrap();

        for ((x, y), cell) in surface.cells().enumerate() {
            let (x, y) = (x as i32, y as i32);
            if clip.contains(x, y) && extent.contains(x, y) {
                prop_assert_eq!(cell.ch, '#');
                prop_assert_eq!(cell.bg, Color::Red);
            } else {
                prop_assert_eq!(*cell, Cell::default());
            }
        }
    }

    #[test]
    fn resize_keeps_overlap(
        width in 0usize..=12,
        height in 0usize..=12,
        new_width in 0usize..=12,
        new_height in 0usize..=12,
    ) {
        let mut grid = Grid::from_fn(width, height, |x, y| Some((x, y)));
        grid.resize(new_width, new_height, None);
        prop_assert_eq!(grid.dimensions(), (new_width, new_height));

        for ((x, y), item) in grid.enumerate() {
            if x < width && y < height {
                prop_assert_eq!(*item, Some((x, y)));
            } else {
                prop_assert_eq!(*item, None);
            }
        }
    }
}
