//! Property-based invariant tests for dimension and bounds resolution.
//!
//! 1. Non-finite relative factors resolve to 0 for every extent.
//! 2. Absolute values ignore the extent.
//! 3. Relative resolution never panics.
//! 4. Low anchor with zero offset sits on the parent start.
//! 5. High anchor with zero offset ends on the parent end.
//! 6. A centered element as large as its parent sits on the parent start.
//! 7. Resolved sizes are never negative.
//! 8. Resolution is idempotent.
//! 9. The x axis never depends on y inputs.

use cedar_core::Rect;
use cedar_gui::{Anchor, AxisAnchor, CenterRounding, DimensionValue, LocalBounds, resolve_axis};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn dimension_strategy() -> impl Strategy<Value = DimensionValue> {
    prop_oneof![
        (-10_000i32..=10_000).prop_map(DimensionValue::Absolute),
        (-4.0f32..=4.0).prop_map(DimensionValue::Relative),
        Just(DimensionValue::Relative(f32::NAN)),
        Just(DimensionValue::Relative(f32::INFINITY)),
    ]
}

fn anchor_strategy() -> impl Strategy<Value = Anchor> {
    (0u8..16).prop_map(Anchor::from_bits_truncate)
}

fn rounding_strategy() -> impl Strategy<Value = CenterRounding> {
    prop_oneof![Just(CenterRounding::Nearest), Just(CenterRounding::Truncate)]
}

fn parent_strategy() -> impl Strategy<Value = Rect> {
    (-500i32..=500, -500i32..=500, 0i32..=1_000, 0i32..=1_000)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn bounds_strategy() -> impl Strategy<Value = LocalBounds> {
    (
        dimension_strategy(),
        dimension_strategy(),
        dimension_strategy(),
        dimension_strategy(),
    )
        .prop_map(|(x, y, w, h)| LocalBounds::new(x, y, w, h))
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn non_finite_factors_resolve_to_zero(extent in any::<i32>()) {
        prop_assert_eq!(DimensionValue::Relative(f32::NAN).resolve(extent), 0);
        prop_assert_eq!(DimensionValue::Relative(f32::INFINITY).resolve(extent), 0);
        prop_assert_eq!(DimensionValue::Relative(f32::NEG_INFINITY).resolve(extent), 0);
    }

    #[test]
    fn absolute_ignores_extent(n in any::<i32>(), extent in any::<i32>()) {
        prop_assert_eq!(DimensionValue::Absolute(n).resolve(extent), n);
    }

    #[test]
    fn relative_never_panics(factor in any::<f32>(), extent in any::<i32>()) {
        let _ = DimensionValue::Relative(factor).resolve(extent);
    }

    #[test]
    fn low_anchor_zero_offset_sits_on_start(
        size in dimension_strategy(),
        parent_pos in -10_000i32..=10_000,
        extent in 0i32..=10_000,
        rounding in rounding_strategy(),
    ) {
        let (pos, _) = resolve_axis(
            DimensionValue::Absolute(0), size, AxisAnchor::Low, parent_pos, extent, rounding,
        );
        prop_assert_eq!(pos, parent_pos);
    }

    #[test]
    fn high_anchor_zero_offset_ends_on_end(
        size in 0i32..=10_000,
        parent_pos in -10_000i32..=10_000,
        extent in 0i32..=10_000,
        rounding in rounding_strategy(),
    ) {
        let (pos, resolved) = resolve_axis(
            DimensionValue::Absolute(0),
            DimensionValue::Absolute(size),
            AxisAnchor::High,
            parent_pos,
            extent,
            rounding,
        );
        prop_assert_eq!(resolved, size);
        prop_assert_eq!(pos, parent_pos + extent - size);
    }

    #[test]
    fn centered_full_size_sits_on_start(
        parent_pos in -10_000i32..=10_000,
        extent in 0i32..=10_000,
        rounding in rounding_strategy(),
    ) {
        let (pos, size) = resolve_axis(
            DimensionValue::Absolute(0),
            DimensionValue::Absolute(extent),
            AxisAnchor::Center,
            parent_pos,
            extent,
            rounding,
        );
        prop_assert_eq!(size, extent);
        prop_assert_eq!(pos, parent_pos);
    }

    #[test]
    fn resolved_sizes_are_non_negative(
        local in bounds_strategy(),
        anchor in anchor_strategy(),
        parent in parent_strategy(),
        rounding in rounding_strategy(),
    ) {
        let rect = local.resolve(anchor, parent, rounding);
        prop_assert!(rect.width >= 0);
        prop_assert!(rect.height >= 0);
    }

    #[test]
    fn resolution_is_idempotent(
        local in bounds_strategy(),
        anchor in anchor_strategy(),
        parent in parent_strategy(),
        rounding in rounding_strategy(),
    ) {
        let first = local.resolve(anchor, parent, rounding);
        let second = local.resolve(anchor, parent, rounding);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn axes_are_independent(
        local in bounds_strategy(),
        other_y in dimension_strategy(),
        other_height in dimension_strategy(),
        anchor in anchor_strategy(),
        parent in parent_strategy(),
        other_parent_height in 0i32..=1_000,
    ) {
        let rounding = CenterRounding::Nearest;
        let a = local.resolve(anchor, parent, rounding);
        let changed = LocalBounds::new(local.x, other_y, local.width, other_height);
        let b = changed.resolve(
            anchor ^ (anchor & (Anchor::TOP | Anchor::BOTTOM)),
            Rect::new(parent.x, parent.y, parent.width, other_parent_height),
            rounding,
        );
        prop_assert_eq!((a.x, a.width), (b.x, b.width));
    }
}
