#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Coordinates are signed: a resolved element may start left of or above
//! the visible surface and is clipped at blit time rather than rejected.

use std::fmt;

/// A position in terminal cells (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by `dx`/`dy` without overflowing.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// A width/height pair in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Number of cells covered, treating negative extents as empty.
    #[inline]
    pub const fn area(&self) -> u64 {
        let w = if self.width > 0 { self.width as u64 } else { 0 };
        let h = if self.height > 0 { self.height as u64 } else { 0 };
        w * h
    }

    /// Check if either extent is zero or negative.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Clamp both extents to a minimum of zero.
    #[inline]
    pub const fn non_negative(self) -> Self {
        Self {
            width: if self.width < 0 { 0 } else { self.width },
            height: if self.height < 0 { 0 } else { self.height },
        }
    }
}

impl From<(u16, u16)> for Size {
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(i32::from(width), i32::from(height))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A resolved rectangle: top-left point plus integer size.
///
/// This is what an element's local bounds become for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in cells.
    pub width: i32,
    /// Height in cells.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }
}

/// Minimum and maximum size a surface may take.
///
/// Built only through [`SizeLimits::new`], so `min <= max` holds on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeLimits {
    min: Size,
    max: Size,
}

impl SizeLimits {
    /// Limits that never constrain a non-negative size.
    pub const UNBOUNDED: Self = Self {
        min: Size::ZERO,
        max: Size::new(i32::MAX, i32::MAX),
    };

    /// Create limits, failing if `min` exceeds `max` on either axis.
    pub fn new(min: Size, max: Size) -> Result<Self, LimitsError> {
        if min.width > max.width || min.height > max.height {
            return Err(LimitsError { min, max });
        }
        Ok(Self { min, max })
    }

    /// Replace the minimum, keeping the current maximum.
    pub fn with_min(self, min: Size) -> Result<Self, LimitsError> {
        Self::new(min, self.max)
    }

    /// Replace the maximum, keeping the current minimum.
    pub fn with_max(self, max: Size) -> Result<Self, LimitsError> {
        Self::new(self.min, max)
    }

    #[inline]
    pub const fn min(&self) -> Size {
        self.min
    }

    #[inline]
    pub const fn max(&self) -> Size {
        self.max
    }

    /// Clamp a size into these limits, axis by axis.
    pub fn clamp(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min.width, self.max.width),
            size.height.clamp(self.min.height, self.max.height),
        )
    }
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Size limits whose minimum exceeds their maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitsError {
    pub min: Size,
    pub max: Size,
}

impl fmt::Display for LimitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "minimum size {} exceeds maximum size {}",
            self.min, self.max
        )
    }
}

impl std::error::Error for LimitsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2, 3, 4, 5);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 7));
        assert!(!rect.contains(6, 3));
        assert!(!rect.contains(2, 8));
    }

    #[test]
    fn rect_contains_negative_origin() {
        let rect = Rect::new(-3, -1, 4, 2);
        assert!(rect.contains(-3, -1));
        assert!(rect.contains(0, 0));
        assert!(!rect.contains(1, 0));
    }

    #[test]
    fn rect_intersection_overlaps() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 2, 4, 4);
        assert_eq!(a.intersection(&b), Some(Rect::new(2, 2, 2, 2)));
    }

    #[test]
    fn rect_intersection_adjacent_is_none() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(5, 0, 5, 5);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn rect_empty_when_size_not_positive() {
        assert!(Rect::new(0, 0, 0, 3).is_empty());
        assert!(Rect::new(0, 0, 3, -1).is_empty());
        assert!(!Rect::new(-5, -5, 1, 1).is_empty());
    }

    #[test]
    fn rect_edges_saturate() {
        let r = Rect::new(i32::MAX - 1, 0, 10, 1);
        assert_eq!(r.right(), i32::MAX);
    }

    #[test]
    fn size_non_negative_floors_at_zero() {
        assert_eq!(Size::new(-4, 7).non_negative(), Size::new(0, 7));
        assert_eq!(Size::new(-4, 7).area(), 0);
        assert_eq!(Size::new(3, 7).area(), 21);
    }

    #[test]
    fn size_from_terminal_tuple() {
        assert_eq!(Size::from((80u16, 24u16)), Size::new(80, 24));
    }

    #[test]
    fn limits_reject_min_above_max() {
        let err = SizeLimits::new(Size::new(10, 1), Size::new(5, 5)).unwrap_err();
        assert_eq!(err.min, Size::new(10, 1));
        assert_eq!(
            err.to_string(),
            "minimum size 10x1 exceeds maximum size 5x5"
        );
        assert!(SizeLimits::new(Size::new(1, 10), Size::new(5, 5)).is_err());
    }

    #[test]
    fn limits_clamp_each_axis() {
        let limits = SizeLimits::new(Size::new(20, 5), Size::new(100, 30)).unwrap();
        assert_eq!(limits.clamp(Size::new(10, 40)), Size::new(20, 30));
        assert_eq!(limits.clamp(Size::new(50, 10)), Size::new(50, 10));
    }

    #[test]
    fn limits_builders_revalidate() {
        let limits = SizeLimits::new(Size::new(2, 2), Size::new(8, 8)).unwrap();
        assert!(limits.with_min(Size::new(9, 1)).is_err());
        assert!(limits.with_max(Size::new(1, 8)).is_err());
        let widened = limits.with_max(Size::new(20, 20)).unwrap();
        assert_eq!(widened.max(), Size::new(20, 20));
        assert_eq!(widened.min(), Size::new(2, 2));
    }

    #[test]
    fn unbounded_limits_keep_sizes() {
        let size = Size::new(123, 45);
        assert_eq!(SizeLimits::default().clamp(size), size);
    }
}
