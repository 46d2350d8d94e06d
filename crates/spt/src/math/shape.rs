//! Shape functions of the P13 propagator integrals.
//!
//! ## Purpose
//!
//! After the angular integration, each P13 channel reduces to a one
//! dimensional integral over the loop wavenumber `q` of `q P_L(q) s(r)` with
//! `r = q / k`. This module evaluates the dimensionless shape `s(r)`.
//!
//! ## Design notes
//!
//! The closed form is a rational function of `r` plus
//! `3/r^3 (r^2 - 1)^3 w(r) ln((1 + r)/|1 - r|)`. It is analytically exact but
//! loses all significant digits to cancellation for small and large `r`, and
//! its logarithm diverges at `r = 1` even though `s` itself stays finite.
//! Four branches are therefore used:
//!
//! | Branch     | Domain              | Form                                   |
//! |------------|---------------------|----------------------------------------|
//! | SmallRatio | r < 1e-2            | series in r^2 up to r^6                |
//! | NearUnity  | abs(r - 1) < 1e-10  | finite limit plus slope times (r - 1)  |
//! | LargeRatio | r > 100             | series in 1/r^2 up to r^-6             |
//! | Exact      | everywhere else     | closed form                            |
//!
//! Branch selection is discrete; there is no blending across the edges.
//!
//! ## Invariants
//!
//! * Each expansion agrees with the closed form at its switchover point to
//!   well below the quadrature tolerance.
//! * `s(1)` equals the NearUnity limit for every channel.
//!
//! ## Non-goals
//!
//! * This module does not multiply by `q P_L(q)` or the channel prefactor.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::constant;
use crate::primitives::fields::Channel;

// ============================================================================
// Branch Thresholds
// ============================================================================

/// Below this ratio the small-`r` series is used.
pub const SMALL_RATIO: f64 = 1e-2;

/// Half-width of the neighbourhood of `r = 1` handled by the limit form.
pub const UNITY_WINDOW: f64 = 1e-10;

/// Above this ratio the large-`r` series is used.
pub const LARGE_RATIO: f64 = 100.0;

// ============================================================================
// Coefficient Tables
// ============================================================================

/// Literal coefficients of one channel's shape function.
struct ShapeCoefficients {
    /// Small-r series: `c0 + c1 r^2 + c2 r^4 + c3 r^6`.
    small: [f64; 4],

    /// Limit at r = 1 and slope: `c0 + c1 (r - 1)`.
    unity: [f64; 2],

    /// Large-r series: `c0 + c1 / r^2 + c2 / r^4 + c3 / r^6`.
    large: [f64; 4],

    /// Rational part of the closed form: `c0 / r^2 + c1 + c2 r^2 + c3 r^4`.
    rational: [f64; 4],

    /// Logarithm weight `w(r) = c0 r^2 + c1`.
    weight: [f64; 2],
}

/// Shape coefficients for P13 delta-delta.
const DD_SHAPE: ShapeCoefficients = ShapeCoefficients {
    small: [-168.0, 928.0 / 5.0, -4512.0 / 35.0, 416.0 / 21.0],
    unity: [-88.0, 8.0],
    large: [-488.0 / 5.0, 96.0 / 5.0, -160.0 / 21.0, -1376.0 / 1155.0],
    rational: [12.0, -158.0, 100.0, -42.0],
    weight: [7.0, 2.0],
};

/// Shape coefficients for P13 delta-theta.
const DT_SHAPE: ShapeCoefficients = ShapeCoefficients {
    small: [-168.0, 416.0 / 5.0, -2976.0 / 35.0, 224.0 / 15.0],
    unity: [-152.0, -56.0],
    large: [-200.0, 2208.0 / 35.0, -1312.0 / 105.0, -1888.0 / 1155.0],
    rational: [24.0, -202.0, 56.0, -30.0],
    weight: [5.0, 4.0],
};

/// Shape coefficients for P13 theta-theta.
const TT_SHAPE: ShapeCoefficients = ShapeCoefficients {
    small: [-56.0, -32.0 / 5.0, -96.0 / 7.0, 352.0 / 105.0],
    unity: [-72.0, -40.0],
    large: [-504.0 / 5.0, 1248.0 / 35.0, -608.0 / 105.0, -160.0 / 231.0],
    rational: [12.0, -82.0, 4.0, -6.0],
    weight: [1.0, 2.0],
};

const fn coefficients(channel: Channel) -> &'static ShapeCoefficients {
    match channel {
        Channel::DensityDensity => &DD_SHAPE,
        Channel::DensityVelocity => &DT_SHAPE,
        Channel::VelocityVelocity => &TT_SHAPE,
    }
}

// ============================================================================
// Branch Enum
// ============================================================================

/// Evaluation branch of a shape function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeBranch {
    /// Taylor series in `r^2`.
    SmallRatio,

    /// Removable-singularity limit at `r = 1`.
    NearUnity,

    /// Asymptotic series in `1/r^2`.
    LargeRatio,

    /// Closed form with the logarithm.
    Exact,
}

impl ShapeBranch {
    /// Branch used for ratio `r`.
    #[inline]
    pub fn select<T: Float>(r: T) -> Self {
        if r < constant(SMALL_RATIO) {
            ShapeBranch::SmallRatio
        } else if (r - T::one()).abs() < constant(UNITY_WINDOW) {
            ShapeBranch::NearUnity
        } else if r > constant(LARGE_RATIO) {
            ShapeBranch::LargeRatio
        } else {
            ShapeBranch::Exact
        }
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// Shape `s(r)` of a channel's P13 integrand at ratio `r = q / k`.
#[inline]
pub fn p13_shape<T: Float>(channel: Channel, r: T) -> T {
    shape_with_branch(channel, ShapeBranch::select(r), r)
}

/// Shape at loop wavenumber `q` for external wavenumber `k`.
#[inline]
pub fn p13_shape_at<T: Float>(channel: Channel, k: T, q: T) -> T {
    p13_shape(channel, q / k)
}

/// Evaluate a specific branch regardless of where `r` lies.
pub fn shape_with_branch<T: Float>(channel: Channel, branch: ShapeBranch, r: T) -> T {
    let c = coefficients(channel);
    let r2 = r * r;
    let r4 = r2 * r2;
    let r6 = r4 * r2;

    match branch {
        ShapeBranch::SmallRatio => {
            constant::<T>(c.small[0])
                + constant::<T>(c.small[1]) * r2
                + constant::<T>(c.small[2]) * r4
                + constant::<T>(c.small[3]) * r6
        }

        ShapeBranch::NearUnity => {
            constant::<T>(c.unity[0]) + constant::<T>(c.unity[1]) * (r - T::one())
        }

        ShapeBranch::LargeRatio => {
            constant::<T>(c.large[0])
                + constant::<T>(c.large[1]) / r2
                + constant::<T>(c.large[2]) / r4
                + constant::<T>(c.large[3]) / r6
        }

        ShapeBranch::Exact => {
            let one = T::one();
            let m = r * r - one;
            let log = ((one + r) / (one - r).abs()).ln();
            constant::<T>(c.rational[0]) / r2
                + constant::<T>(c.rational[1])
                + constant::<T>(c.rational[2]) * r2
                + constant::<T>(c.rational[3]) * r4
                + constant::<T>(3.0) / (r2 * r) * (m * m * m)
                    * (constant::<T>(c.weight[0]) * r * r + constant::<T>(c.weight[1]))
                    * log
        }
    }
}
