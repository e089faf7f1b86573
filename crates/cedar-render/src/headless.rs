#![forbid(unsafe_code)]

//! In-memory surface for tests and snapshots.
//!
//! [`HeadlessSurface`] keeps a grid of the cells written so far plus a few
//! counters, so tests can assert both what ended up on screen and how much
//! work a frame did.

use std::io;

use cedar_core::{Color, Size};

use crate::cell::Cell;
use crate::grid::Grid;
use crate::surface::Surface;

/// A surface that records into memory.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    size: Size,
    cells: Grid<Cell>,
    cursor: (u16, u16),
    fg: Color,
    bg: Color,
    chars_written: usize,
    clears: usize,
    flushes: usize,
}

impl HeadlessSurface {
    /// Create a blank surface. Negative extents are treated as zero.
    pub fn new(size: Size) -> Self {
        let size = size.non_negative();
        Self {
            size,
            cells: Grid::new(size.width as usize, size.height as usize, Cell::default()),
            cursor: (0, 0),
            fg: Color::Default,
            bg: Color::Default,
            chars_written: 0,
            clears: 0,
            flushes: 0,
        }
    }

    /// Simulate the user resizing the terminal. Content that still fits is kept.
    pub fn set_size(&mut self, size: Size) {
        let size = size.non_negative();
        self.size = size;
        self.cells
            .resize(size.width as usize, size.height as usize, Cell::default());
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cells.get(x, y)
    }

    pub fn cells(&self) -> &Grid<Cell> {
        &self.cells
    }

    /// Characters of row `y` as a string.
    pub fn row_text(&self, y: usize) -> String {
        if y >= self.cells.height() {
            return String::new();
        }
        self.cells.row(y).iter().map(|c| c.ch).collect()
    }

    /// Background colors of row `y`.
    pub fn row_backgrounds(&self, y: usize) -> Vec<Color> {
        if y >= self.cells.height() {
            return Vec::new();
        }
        self.cells.row(y).iter().map(|c| c.bg).collect()
    }

    /// Number of characters written since creation or the last reset.
    pub fn chars_written(&self) -> usize {
        self.chars_written
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    pub fn reset_counters(&mut self) {
        self.chars_written = 0;
        self.clears = 0;
        self.flushes = 0;
    }
}

impl Surface for HeadlessSurface {
    fn size(&self) -> io::Result<Size> {
        Ok(self.size)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.cells.fill(Cell::default());
        self.clears += 1;
        Ok(())
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        self.cursor = (x, y);
        Ok(())
    }

    fn set_background(&mut self, color: Color) -> io::Result<()> {
        self.bg = color;
        Ok(())
    }

    fn set_foreground(&mut self, color: Color) -> io::Result<()> {
        self.fg = color;
        Ok(())
    }

    fn write_char(&mut self, ch: char) -> io::Result<()> {
        let (x, y) = self.cursor;
        if let Some(cell) = self.cells.get_mut(usize::from(x), usize::from(y)) {
            *cell = Cell {
                ch,
                fg: self.fg,
                bg: self.bg,
            };
        }
        self.chars_written += 1;
        self.cursor = (x.saturating_add(1), y);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
