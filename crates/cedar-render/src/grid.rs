#![forbid(unsafe_code)]

//! Fixed-size 2-D storage.
//!
//! # Layout
//!
//! Items are stored in row-major order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `items.len() == width * height`
//! 2. Every position holds an initialized value (no sparse cells)

use std::fmt;

/// A dense `width x height` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    items: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every position set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            items: vec![fill; width * height],
        }
    }

    /// Resize in place, keeping every item whose position still fits.
    ///
    /// New positions are set to `fill`.
    pub fn resize(&mut self, width: usize, height: usize, fill: T) {
        if width == self.width && height == self.height {
            return;
        }
        let mut items = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let item = if x < self.width && y < self.height {
                    self.items[y * self.width + x].clone()
                } else {
                    fill.clone()
                };
                items.push(item);
            }
        }
        self.width = width;
        self.height = height;
        self.items = items;
    }

    /// Set every position to `value`.
    pub fn fill(&mut self, value: T) {
        self.items.fill(value);
    }
}

impl<T> Grid<T> {
    /// Create a grid by calling `f(x, y)` for every position.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut items = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                items.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            items,
        }
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Check if the grid holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub const fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        self.in_bounds(x, y).then(|| y * self.width + x)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.index(x, y).map(|i| &self.items[i])
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.index(x, y).map(|i| &mut self.items[i])
    }

    /// Range-checked access.
    pub fn at(&self, x: usize, y: usize) -> Result<&T, GridError> {
        let err = self.out_of_range(x, y);
        self.get(x, y).ok_or(err)
    }

    /// Range-checked mutable access.
    pub fn at_mut(&mut self, x: usize, y: usize) -> Result<&mut T, GridError> {
        let err = self.out_of_range(x, y);
        self.get_mut(x, y).ok_or(err)
    }

    /// Replace the item at `(x, y)`, returning the previous one.
    pub fn replace(&mut self, x: usize, y: usize, value: T) -> Result<T, GridError> {
        let slot = self.at_mut(x, y)?;
        Ok(std::mem::replace(slot, value))
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.width;
        &self.items[start..start + self.width]
    }

    /// Items in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// `((x, y), item)` pairs in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let width = self.width.max(1);
        self.items
            .iter()
            .enumerate()
            .map(move |(i, item)| ((i % width, i / width), item))
    }

    fn out_of_range(&self, x: usize, y: usize) -> GridError {
        GridError::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Grid access outside the current dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "position ({x}, {y}) is outside the {width}x{height} grid"
            ),
        }
    }
}

impl std::error::Error for GridError {}
