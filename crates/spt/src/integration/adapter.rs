//! Quadrature adapter for the one-loop integrals.
//!
//! ## Purpose
//!
//! This module maps each loop term onto a call of the generic integrator:
//! it fixes the integration domain, applies the physical prefactor and
//! derives the absolute tolerance.
//!
//! ## Design notes
//!
//! * **P22 domain**: `log u in [0, ln(2 qmax / k)]`, `v in [0, 1]`, prefactor
//!   `V = k / (2 pi^2)`.
//! * **P13 domain**: `log q in [ln qmin, ln qmax]`, prefactor
//!   `V = k^2 P_L(k) / (N 4 pi^2)` with `N = 252` (dd, dt) or `84` (tt).
//! * **Absolute tolerance**: `epsrel P_L(k) / V`. After multiplying by `V`
//!   this bounds the absolute error of the loop term by `epsrel P_L(k)`, so
//!   the tolerance follows the linear spectrum rather than the loop result,
//!   which can be arbitrarily small or exactly zero.
//!
//! ## Invariants
//!
//! * `k <= 0` yields a P22 of exactly zero without touching the integrator.
//!
//! ## Non-goals
//!
//! * This module does not guard P13 against `k <= 0` or `P_L(k) = 0`.

// External dependencies
use core::f64::consts::PI;

// Internal dependencies
use crate::algorithms::integrands::{P13Integrand, P22Integrand};
use crate::integration::adaptive::Quadrature;
use crate::primitives::cutoffs::Cutoffs;
use crate::primitives::fields::Channel;
use crate::primitives::spectrum::LinearPowerSpectrum;

// ============================================================================
// P22
// ============================================================================

/// Prefactor of the P22 integral, `k / (2 pi^2)`.
#[inline]
pub fn p22_prefactor(k: f64) -> f64 {
    k / (2.0 * PI * PI)
}

/// Mode-coupling term P22 of `channel` at wavenumber `k`.
pub fn integrate_p22<Q, P>(
    quadrature: &Q,
    linear: &P,
    channel: Channel,
    k: f64,
    cutoffs: &Cutoffs,
    epsrel: f64,
) -> f64
where
    Q: Quadrature,
    P: LinearPowerSpectrum + ?Sized,
{
    if k <= 0.0 {
        return 0.0;
    }

    let (umin, umax): (f64, f64) = (1.0, 2.0 * cutoffs.qmax / k);
    let (vmin, vmax) = (0.0, 1.0);
    let lower = [umin.ln(), vmin];
    let upper = [umax.ln(), vmax];

    let integrand = P22Integrand::new(linear, channel, k, cutoffs.qmin);
    let v = p22_prefactor(k);
    let epsabs = epsrel * linear.evaluate(k) / v;

    let result = quadrature.integrate(
        |x: &[f64; 2]| integrand.evaluate(x[0], x[1]),
        lower,
        upper,
        epsrel,
        epsabs,
    );
    v * result.value
}

// ============================================================================
// P13
// ============================================================================

/// Prefactor of the P13 integral, `k^2 P_L(k) / (N 4 pi^2)`.
#[inline]
pub fn p13_prefactor(channel: Channel, k: f64, linear_k: f64) -> f64 {
    k * k / (channel.p13_denominator() * 4.0 * PI * PI) * linear_k
}

/// Propagator term P13 of `channel` at wavenumber `k`.
pub fn integrate_p13<Q, P>(
    quadrature: &Q,
    linear: &P,
    channel: Channel,
    k: f64,
    cutoffs: &Cutoffs,
    epsrel: f64,
) -> f64
where
    Q: Quadrature,
    P: LinearPowerSpectrum + ?Sized,
{
    let (a, b) = cutoffs.log_range();
    let linear_k = linear.evaluate(k);
    let v = p13_prefactor(channel, k, linear_k);
    let epsabs = epsrel * linear_k / v;

    let integrand = P13Integrand::new(linear, channel, k);
    let result = quadrature.integrate(
        |x: &[f64; 1]| integrand.evaluate(x[0]),
        [a],
        [b],
        epsrel,
        epsabs,
    );
    v * result.value
}
