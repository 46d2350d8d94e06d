//! Second-order perturbation theory kernels.
//!
//! ## Purpose
//!
//! This module provides the symmetrised second-order mode-coupling kernels
//! F2 (density) and G2 (velocity divergence), written in terms of the three
//! wavenumber magnitudes of the triangle `k = q + r`.
//!
//! ## Design notes
//!
//! * **Magnitudes only**: The angle is eliminated through the law of cosines,
//!   `2 q.r = k^2 - q^2 - r^2`.
//! * **Clamping**: `q` and `r` are floored at the infrared cutoff before any
//!   division, since the P22 change of variables drives one of them to zero
//!   on the edge of the domain.
//! * **Hot path**: Evaluated at every cubature node of every P22 integral.
//!
//! ## Invariants
//!
//! * F2 and G2 are symmetric under `q <-> r`.
//! * Parallel halves, `q = r = k/2`, give F2 = G2 = 2.
//! * Antiparallel pairs, `q = r` with `k = 0`, give F2 = G2 = 0.
//!
//! ## Non-goals
//!
//! * This module does not integrate the kernels.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::fields::Channel;

/// Convert an `f64` literal into the working float type.
#[inline]
pub(crate) fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

// ============================================================================
// Kernels
// ============================================================================

/// F_2^{(s)}(q, k - q) for magnitudes `q = |q|`, `r = |k - q|`.
///
/// ```text
/// F2 = 5/7 + (1/14) (k^2 - q^2 - r^2)^2 / (q^2 r^2)
///          + (1/4) (k^2 - q^2 - r^2) (1/q^2 + 1/r^2)
/// ```
#[inline]
pub fn f2<T: Float>(k: T, q: T, r: T, qmin: T) -> T {
    let q = q.max(qmin);
    let r = r.max(qmin);
    let k2 = k * k;
    let q2 = q * q;
    let r2 = r * r;
    let s = k2 - q2 - r2;
    constant::<T>(5.0 / 7.0)
        + constant::<T>(1.0 / 14.0) * (s * s) / (q2 * r2)
        + constant::<T>(1.0 / 4.0) * s * (T::one() / q2 + T::one() / r2)
}

/// G_2^{(s)}(q, k - q) for magnitudes `q = |q|`, `r = |k - q|`.
///
/// ```text
/// G2 = 3/7 + (1/7) (k^2 - q^2 - r^2)^2 / (q^2 r^2)
///          + (1/4) (k^2 - q^2 - r^2) (1/q^2 + 1/r^2)
/// ```
#[inline]
pub fn g2<T: Float>(k: T, q: T, r: T, qmin: T) -> T {
    let q = q.max(qmin);
    let r = r.max(qmin);
    let k2 = k * k;
    let q2 = q * q;
    let r2 = r * r;
    let s = k2 - q2 - r2;
    constant::<T>(3.0 / 7.0)
        + constant::<T>(1.0 / 7.0) * (s * s) / (q2 * r2)
        + constant::<T>(1.0 / 4.0) * s * (T::one() / q2 + T::one() / r2)
}

/// Kernel product entering the P22 integrand of a channel.
///
/// F2^2 for delta-delta, F2 G2 for delta-theta and G2^2 for theta-theta.
#[inline]
pub fn mode_coupling<T: Float>(channel: Channel, k: T, q: T, r: T, qmin: T) -> T {
    match channel {
        Channel::DensityDensity => {
            let f = f2(k, q, r, qmin);
            f * f
        }
        Channel::DensityVelocity => f2(k, q, r, qmin) * g2(k, q, r, qmin),
        Channel::VelocityVelocity => {
            let g = g2(k, q, r, qmin);
            g * g
        }
    }
}
