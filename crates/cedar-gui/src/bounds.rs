#![forbid(unsafe_code)]

//! Local bounds and their resolution to screen rectangles.
//!
//! # Algorithm
//!
//! Each axis is resolved on its own; x never looks at y:
//!
//! ```text
//! size = max(0, resolve(local_size, extent))
//! pos  = parent_pos + resolve(local_pos, extent)                        (Low)
//! pos  = parent_pos + extent - size + resolve(local_pos, extent)        (High)
//! pos  = parent_pos + resolve(local_pos, extent) + half(extent - size)  (Center)
//! ```
//!
//! Resolution is a pure function of its arguments. Nothing is cached between
//! frames; calling it twice with the same inputs gives the same rectangle.

use cedar_core::Rect;

use crate::anchor::{Anchor, AxisAnchor};
use crate::config::CenterRounding;
use crate::dimension::DimensionValue;

/// An element's position and size relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalBounds {
    pub x: DimensionValue,
    pub y: DimensionValue,
    pub width: DimensionValue,
    pub height: DimensionValue,
}

impl LocalBounds {
    pub const fn new(
        x: DimensionValue,
        y: DimensionValue,
        width: DimensionValue,
        height: DimensionValue,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Fill the parent: zero offset, full relative size.
    pub const FILL: Self = Self::new(
        DimensionValue::ZERO,
        DimensionValue::ZERO,
        DimensionValue::FULL,
        DimensionValue::FULL,
    );

    #[must_use]
    pub const fn with_position(mut self, x: DimensionValue, y: DimensionValue) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    #[must_use]
    pub const fn with_size(mut self, width: DimensionValue, height: DimensionValue) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Resolve against the parent's resolved rectangle.
    pub fn resolve(&self, anchor: Anchor, parent: Rect, rounding: CenterRounding) -> Rect {
        resolve_bounds(self, anchor, parent, rounding)
    }
}

impl Default for LocalBounds {
    fn default() -> Self {
        Self::FILL
    }
}

/// Resolve one axis, returning `(position, size)`.
pub fn resolve_axis(
    pos: DimensionValue,
    size: DimensionValue,
    anchor: AxisAnchor,
    parent_pos: i32,
    parent_extent: i32,
    rounding: CenterRounding,
) -> (i32, i32) {
    let size = size.resolve(parent_extent).max(0);
    let offset = i64::from(pos.resolve(parent_extent));
    let (parent_pos, extent, wide_size) = (
        i64::from(parent_pos),
        i64::from(parent_extent),
        i64::from(size),
    );

    let pos = match anchor {
        AxisAnchor::Low => parent_pos + offset,
        AxisAnchor::High => parent_pos + extent - wide_size + offset,
        AxisAnchor::Center => parent_pos + offset + rounding.half(extent - wide_size),
    };
    (saturate(pos), size)
}

/// Resolve both axes into a rectangle.
pub fn resolve_bounds(
    local: &LocalBounds,
    anchor: Anchor,
    parent: Rect,
    rounding: CenterRounding,
) -> Rect {
    let (x, width) = resolve_axis(
        local.x,
        local.width,
        anchor.horizontal(),
        parent.x,
        parent.width,
        rounding,
    );
    let (y, height) = resolve_axis(
        local.y,
        local.height,
        anchor.vertical(),
        parent.y,
        parent.height,
        rounding,
    );
    Rect::new(x, y, width, height)
}

#[inline]
fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use DimensionValue::{Absolute, Relative};

    const NEAREST: CenterRounding = CenterRounding::Nearest;

    #[test]
    fn low_anchor_measures_from_parent_start() {
        let (pos, size) = resolve_axis(Absolute(2), Absolute(5), AxisAnchor::Low, 10, 40, NEAREST);
        assert_eq!((pos, size), (12, 5));
    }

    #[test]
    fn high_anchor_measures_from_parent_end() {
        let (pos, size) =
            resolve_axis(Absolute(-1), Absolute(5), AxisAnchor::High, 10, 40, NEAREST);
        assert_eq!((pos, size), (10 + 40 - 5 - 1, 5));
    }

    #[test]
    fn center_splits_free_space() {
        let (pos, _) = resolve_axis(Absolute(0), Absolute(3), AxisAnchor::Center, 0, 10, NEAREST);
        assert_eq!(pos, 4);
        let (pos, _) = resolve_axis(
            Absolute(0),
            Absolute(3),
            AxisAnchor::Center,
            0,
            10,
            CenterRounding::Truncate,
        );
        assert_eq!(pos, 3);
    }

    #[test]
    fn center_with_offset() {
        let (pos, _) = resolve_axis(Absolute(2), Absolute(4), AxisAnchor::Center, 5, 10, NEAREST);
        assert_eq!(pos, 5 + 2 + 3);
    }

    #[test]
    fn negative_size_clamps_to_zero() {
        let (pos, size) = resolve_axis(Absolute(0), Absolute(-4), AxisAnchor::High, 0, 10, NEAREST);
        assert_eq!((pos, size), (10, 0));
        let (_, size) = resolve_axis(Absolute(0), Relative(-0.5), AxisAnchor::Low, 0, 10, NEAREST);
        assert_eq!(size, 0);
    }

    #[test]
    fn oversized_child_centers_with_negative_offset() {
        let (pos, size) = resolve_axis(Absolute(0), Absolute(13), AxisAnchor::Center, 0, 10, NEAREST);
        assert_eq!((pos, size), (-2, 13));
    }

    #[test]
    fn relative_position_and_size() {
        let local = LocalBounds::new(Relative(0.25), Absolute(0), Relative(0.5), Absolute(3));
        let rect = local.resolve(Anchor::TOP_LEFT, Rect::new(0, 0, 40, 10), NEAREST);
        assert_eq!(rect, Rect::new(10, 0, 20, 3));
    }

    #[test]
    fn default_bounds_fill_parent() {
        let parent = Rect::new(3, 4, 17, 9);
        assert_eq!(
            LocalBounds::default().resolve(Anchor::CENTER, parent, NEAREST),
            parent
        );
        assert_eq!(
            LocalBounds::FILL.resolve(Anchor::BOTTOM_RIGHT, parent, NEAREST),
            parent
        );
    }

    #[test]
    fn axes_do_not_interact() {
        let local = LocalBounds::new(Absolute(1), Absolute(2), Absolute(3), Absolute(4));
        let a = local.resolve(Anchor::LEFT, Rect::new(0, 0, 10, 10), NEAREST);
        let b = local.resolve(Anchor::LEFT, Rect::new(0, 0, 10, 99), NEAREST);
        assert_eq!((a.x, a.width), (b.x, b.width));
    }

    #[test]
    fn extreme_values_saturate() {
        let (pos, _) = resolve_axis(
            Absolute(i32::MAX),
            Absolute(0),
            AxisAnchor::Low,
            i32::MAX,
            0,
            NEAREST,
        );
        assert_eq!(pos, i32::MAX);
    }
}
