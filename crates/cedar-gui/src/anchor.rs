#![forbid(unsafe_code)]

//! Which parent edges an element is pinned to.

use bitflags::bitflags;

bitflags! {
    /// Edge flags. No flag on an axis means centered on that axis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Anchor: u8 {
        const TOP    = 0b0001;
        const LEFT   = 0b0010;
        const BOTTOM = 0b0100;
        const RIGHT  = 0b1000;

        const TOP_LEFT     = Self::TOP.bits() | Self::LEFT.bits();
        const TOP_RIGHT    = Self::TOP.bits() | Self::RIGHT.bits();
        const BOTTOM_LEFT  = Self::BOTTOM.bits() | Self::LEFT.bits();
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
    }
}

impl Anchor {
    /// Centered on both axes.
    pub const CENTER: Self = Self::empty();

    /// Placement along x.
    #[inline]
    pub fn horizontal(self) -> AxisAnchor {
        AxisAnchor::from_flags(self.contains(Self::LEFT), self.contains(Self::RIGHT))
    }

    /// Placement along y.
    #[inline]
    pub fn vertical(self) -> AxisAnchor {
        AxisAnchor::from_flags(self.contains(Self::TOP), self.contains(Self::BOTTOM))
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Placement along a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisAnchor {
    /// Offset from the top or left edge.
    Low,
    /// Offset from the bottom or right edge.
    High,
    /// Offset from the centered position.
    Center,
}

impl AxisAnchor {
    /// The low edge wins when both edges are set.
    #[inline]
    pub const fn from_flags(low: bool, high: bool) -> Self {
        if low {
            Self::Low
        } else if high {
            Self::High
        } else {
            Self::Center
        }
    }
}
