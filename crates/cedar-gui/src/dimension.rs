#![forbid(unsafe_code)]

//! Absolute-or-relative lengths.

/// A position or size along one axis.
///
/// `Absolute` is a cell count used as-is. `Relative` is a factor of the
/// parent's extent on the same axis (`1.0` = the full extent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DimensionValue {
    Absolute(i32),
    Relative(f32),
}

impl DimensionValue {
    /// The full parent extent.
    pub const FULL: Self = Self::Relative(1.0);

    /// Zero cells.
    pub const ZERO: Self = Self::Absolute(0);

    /// Convert to cells against `parent_extent`.
    ///
    /// Relative factors round to nearest with ties away from zero. A NaN or
    /// infinite factor resolves to 0. Total: never fails, never panics.
    pub fn resolve(self, parent_extent: i32) -> i32 {
        match self {
            Self::Absolute(n) => n,
            Self::Relative(factor) if !factor.is_finite() => 0,
            Self::Relative(factor) => {
                // `as` saturates on overflow.
                (f64::from(factor) * f64::from(parent_extent)).round() as i32
            }
        }
    }

    #[inline]
    pub const fn is_relative(&self) -> bool {
        matches!(self, Self::Relative(_))
    }
}

impl Default for DimensionValue {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i32> for DimensionValue {
    fn from(cells: i32) -> Self {
        Self::Absolute(cells)
    }
}

impl From<f32> for DimensionValue {
    fn from(factor: f32) -> Self {
        Self::Relative(factor)
    }
}
