#![forbid(unsafe_code)]

//! Layout and window configuration.
//!
//! Both structs follow the builder style: start from [`Default`] and chain
//! `with_*` calls.
//!
//! ```
//! use cedar_core::{Color, Size, SizeLimits};
//! use cedar_gui::{CenterRounding, LayoutConfig, WindowConfig};
//!
//! let limits = SizeLimits::new(Size::new(20, 5), Size::new(120, 40)).unwrap();
//! let config = WindowConfig::default()
//!     .with_layout(LayoutConfig::default().with_center_rounding(CenterRounding::Truncate))
//!     .with_size_limits(limits);
//! assert_eq!(config.layout.default_background, Color::Black);
//! ```

use cedar_core::{Color, SizeLimits};

/// How the centering offset `(extent - size) / 2` is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CenterRounding {
    /// Round to nearest, ties away from zero: 7 / 2 -> 4.
    #[default]
    Nearest,
    /// Integer division, toward zero: 7 / 2 -> 3.
    Truncate,
}

impl CenterRounding {
    /// Half of `free` cells, rounded by this policy.
    pub fn half(self, free: i64) -> i64 {
        match self {
            Self::Nearest => (free as f64 / 2.0).round() as i64,
            Self::Truncate => free / 2,
        }
    }
}

/// Settings consulted while resolving and painting the element tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutConfig {
    pub center_rounding: CenterRounding,
    /// Background used when inheritance reaches the top of the tree.
    pub default_background: Color,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center_rounding: CenterRounding::Nearest,
            default_background: Color::Black,
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn with_center_rounding(mut self, rounding: CenterRounding) -> Self {
        self.center_rounding = rounding;
        self
    }

    #[must_use]
    pub fn with_default_background(mut self, color: Color) -> Self {
        self.default_background = color;
        self
    }
}

/// Settings for a [`Window`](crate::Window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowConfig {
    pub layout: LayoutConfig,
    /// Clamp for the layout extent. Painting is still clipped to the
    /// physical surface.
    pub size_limits: Option<SizeLimits>,
    /// Clear the surface before repainting a resized frame.
    pub clear_on_resize: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            size_limits: None,
            clear_on_resize: true,
        }
    }
}

impl WindowConfig {
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_size_limits(mut self, limits: SizeLimits) -> Self {
        self.size_limits = Some(limits);
        self
    }

    #[must_use]
    pub fn with_clear_on_resize(mut self, clear: bool) -> Self {
        self.clear_on_resize = clear;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cedar_core::Size;

    #[test]
    fn nearest_rounds_ties_away_from_zero() {
        assert_eq!(CenterRounding::Nearest.half(7), 4);
        assert_eq!(CenterRounding::Nearest.half(-7), -4);
        assert_eq!(CenterRounding::Nearest.half(6), 3);
    }

    #[test]
    fn truncate_rounds_toward_zero() {
        assert_eq!(CenterRounding::Truncate.half(7), 3);
        assert_eq!(CenterRounding::Truncate.half(-7), -3);
    }

    #[test]
    fn defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.layout.center_rounding, CenterRounding::Nearest);
        assert_eq!(config.layout.default_background, Color::Black);
        assert!(config.size_limits.is_none());
        assert!(config.clear_on_resize);
    }

    #[test]
    fn builders_chain() {
        let limits = SizeLimits::new(Size::new(1, 1), Size::new(10, 10)).unwrap();
        let config = WindowConfig::default()
            .with_layout(LayoutConfig::default().with_default_background(Color::Blue))
            .with_size_limits(limits)
            .with_clear_on_resize(false);
        assert_eq!(config.layout.default_background, Color::Blue);
        assert_eq!(config.size_limits, Some(limits));
        assert!(!config.clear_on_resize);
    }
}
