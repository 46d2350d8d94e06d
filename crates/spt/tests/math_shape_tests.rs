//! Tests for the P13 shape functions.
//!
//! These tests verify the branch-stabilised shape functions s(r):
//! - Branch selection at the exact switchover thresholds
//! - Agreement of each expansion with the closed form at its switchover
//! - Continuity of the dispatched function across branch edges
//! - Reference values of the closed form
//!
//! ## Test Organization
//!
//! 1. **Branch Selection** - Thresholds 1e-2, 1e-10 around unity, 100
//! 2. **Switchover Agreement** - Expansion vs closed form at the same r
//! 3. **Continuity** - Dispatched values on either side of each edge
//! 4. **Reference Values** - High-precision values of the closed form

use approx::assert_relative_eq;

use spt::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn all_channels() -> [Channel; 3] {
    Channel::ALL
}

// ============================================================================
// Branch Selection Tests
// ============================================================================

/// Test branch selection around the small-ratio threshold.
#[test]
fn test_branch_select_small_ratio() {
    assert_eq!(ShapeBranch::select(0.0099), ShapeBranch::SmallRatio);
    assert_eq!(ShapeBranch::select(1e-9), ShapeBranch::SmallRatio);
    assert_eq!(ShapeBranch::select(SMALL_RATIO), ShapeBranch::Exact);
    assert_eq!(ShapeBranch::select(0.0101), ShapeBranch::Exact);
}

/// Test branch selection around unity.
#[test]
fn test_branch_select_near_unity() {
    assert_eq!(ShapeBranch::select(1.0), ShapeBranch::NearUnity);
    assert_eq!(ShapeBranch::select(1.0 + 5e-11), ShapeBranch::NearUnity);
    assert_eq!(ShapeBranch::select(1.0 - 5e-11), ShapeBranch::NearUnity);
    assert_eq!(ShapeBranch::select(1.0 + 1e-9), ShapeBranch::Exact);
    assert_eq!(ShapeBranch::select(1.0 - 1e-9), ShapeBranch::Exact);
}

/// Test branch selection around the large-ratio threshold.
#[test]
fn test_branch_select_large_ratio() {
    assert_eq!(ShapeBranch::select(99.9), ShapeBranch::Exact);
    assert_eq!(ShapeBranch::select(LARGE_RATIO), ShapeBranch::Exact);
    assert_eq!(ShapeBranch::select(100.1), ShapeBranch::LargeRatio);
    assert_eq!(ShapeBranch::select(1e12), ShapeBranch::LargeRatio);
}

// ============================================================================
// Switchover Agreement Tests
// ============================================================================

/// Test that the small-r series matches the closed form at r = 1e-2.
#[test]
fn test_small_series_matches_exact() {
    for channel in all_channels() {
        let series = shape_with_branch(channel, ShapeBranch::SmallRatio, SMALL_RATIO);
        let exact = shape_with_branch(channel, ShapeBranch::Exact, SMALL_RATIO);
        assert_relative_eq!(series, exact, max_relative = 1e-6);
    }
}

/// Test that the large-r series matches the closed form at r = 100.
#[test]
fn test_large_series_matches_exact() {
    for channel in all_channels() {
        let series = shape_with_branch(channel, ShapeBranch::LargeRatio, LARGE_RATIO);
        let exact = shape_with_branch(channel, ShapeBranch::Exact, LARGE_RATIO);
        assert_relative_eq!(series, exact, max_relative = 1e-6);
    }
}

/// Test that the unity limit matches the closed form just outside its window.
#[test]
fn test_unity_limit_matches_exact() {
    for channel in all_channels() {
        for r in [1.0 - 1e-9, 1.0 + 1e-9] {
            let limit = shape_with_branch(channel, ShapeBranch::NearUnity, r);
            let exact = shape_with_branch(channel, ShapeBranch::Exact, r);
            assert_relative_eq!(limit, exact, max_relative = 1e-9);
        }
    }
}

/// Test the finite values at r = 1.
#[test]
fn test_unity_limit_values() {
    assert_eq!(p13_shape(Channel::DensityDensity, 1.0), -88.0);
    assert_eq!(p13_shape(Channel::DensityVelocity, 1.0), -152.0);
    assert_eq!(p13_shape(Channel::VelocityVelocity, 1.0), -72.0);
}

/// Test the r -> 0 and r -> infinity limits.
#[test]
fn test_asymptotic_limits() {
    assert_eq!(p13_shape(Channel::DensityDensity, 0.0), -168.0);
    assert_eq!(p13_shape(Channel::DensityVelocity, 0.0), -168.0);
    assert_eq!(p13_shape(Channel::VelocityVelocity, 0.0), -56.0);

    assert_relative_eq!(p13_shape(Channel::DensityDensity, 1e12), -488.0 / 5.0);
    assert_relative_eq!(p13_shape(Channel::DensityVelocity, 1e12), -200.0);
    assert_relative_eq!(p13_shape(Channel::VelocityVelocity, 1e12), -504.0 / 5.0);
}

// ============================================================================
// Continuity Tests
// ============================================================================

/// Test continuity of the dispatched function across the small-ratio edge.
///
/// The function itself moves by about 4e-6 (relative) between the two points.
#[test]
fn test_continuity_small_edge() {
    for channel in all_channels() {
        let below = p13_shape(channel, 0.0099);
        let above = p13_shape(channel, 0.0101);
        assert_relative_eq!(below, above, max_relative = 1e-5);
    }
}

/// Test continuity of the dispatched function across the unity window.
#[test]
fn test_continuity_unity_window() {
    for channel in all_channels() {
        let below = p13_shape(channel, 0.999_999_999);
        let at = p13_shape(channel, 1.0);
        let above = p13_shape(channel, 1.000_000_001);
        assert_relative_eq!(below, at, max_relative = 1e-6);
        assert_relative_eq!(above, at, max_relative = 1e-6);
    }
}

/// Test continuity of the dispatched function across the large-ratio edge.
#[test]
fn test_continuity_large_edge() {
    for channel in all_channels() {
        let below = p13_shape(channel, 99.9);
        let above = p13_shape(channel, 100.1);
        assert_relative_eq!(below, above, max_relative = 1e-6);
    }
}

/// Test that the dispatched function is finite over many decades.
#[test]
fn test_shape_finite_everywhere() {
    for channel in all_channels() {
        let mut r = 1e-10_f64;
        while r < 1e10 {
            assert!(p13_shape(channel, r).is_finite(), "s({r}) not finite");
            r *= 1.37;
        }
    }
}

// ============================================================================
// Reference Value Tests
// ============================================================================

/// Test the closed form against 50-digit reference values.
#[test]
fn test_exact_reference_values() {
    let cases = [
        (Channel::DensityDensity, 0.5, -129.337_935_335_367_29),
        (Channel::DensityDensity, 2.0, -93.296_517_317_061_68),
        (Channel::DensityVelocity, 0.5, -152.273_109_469_514_2),
        (Channel::DensityVelocity, 2.0, -185.037_213_853_649_35),
        (Channel::VelocityVelocity, 0.5, -58.402_761_201_220_37),
        (Channel::VelocityVelocity, 2.0, -92.259_303_463_412_34),
    ];
    for (channel, r, expected) in cases {
        assert_relative_eq!(p13_shape(channel, r), expected, max_relative = 1e-12);
    }
}

/// Test that the shape depends on q and k only through their ratio.
#[test]
fn test_shape_at_uses_ratio() {
    for channel in all_channels() {
        assert_eq!(
            p13_shape_at(channel, 0.2, 0.1),
            p13_shape(channel, 0.5)
        );
    }
}

/// Test generic evaluation in single precision.
#[test]
fn test_shape_f32() {
    let s32 = p13_shape(Channel::DensityDensity, 0.5_f32);
    assert!((s32 as f64 - (-129.337_935_335_367_29)).abs() < 1e-3);
}
