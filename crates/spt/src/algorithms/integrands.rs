//! Integrands of the one-loop P22 and P13 terms.
//!
//! ## Purpose
//!
//! Each integrand closes over the linear spectrum, the external wavenumber
//! `k` and the channel, and evaluates the scalar integrand at a point of the
//! (transformed) integration domain.
//!
//! ## Design notes
//!
//! * **P22 coordinates**: With `u = exp(log u)`, `q = (k/2)(u - v)` and
//!   `r = (k/2)(u + v)`, the triangle `q, r >= 0`, `|q - r| <= k <= q + r`
//!   becomes the rectangle `u >= 1`, `v in [0, 1]`. The Jacobian, together
//!   with the `d log u` measure, contributes the factor `u q r`.
//! * **P13 coordinates**: Integrated in `log q`, so the measure contributes
//!   one power of `q`.
//! * **Normalisation**: Prefactors (`k / 2 pi^2` and the P13 prefactor) are
//!   applied by the integration adapter, not here.
//!
//! ## Non-goals
//!
//! * This module does not choose integration bounds or tolerances.

// Internal dependencies
use crate::math::kernel::mode_coupling;
use crate::math::shape::p13_shape;
use crate::primitives::fields::Channel;
use crate::primitives::spectrum::LinearPowerSpectrum;

// ============================================================================
// P22
// ============================================================================

/// Mode-coupling integrand over `(log u, v)`.
#[derive(Debug)]
pub struct P22Integrand<'a, P: ?Sized> {
    linear: &'a P,
    channel: Channel,
    k: f64,
    qmin: f64,
}

impl<'a, P> P22Integrand<'a, P>
where
    P: LinearPowerSpectrum + ?Sized,
{
    /// Bind the integrand to a spectrum, channel and external wavenumber.
    ///
    /// `qmin` is the floor applied to `q` and `r` inside F2/G2.
    pub fn new(linear: &'a P, channel: Channel, k: f64, qmin: f64) -> Self {
        Self {
            linear,
            channel,
            k,
            qmin,
        }
    }

    /// Integrand value at `(log u, v)`.
    #[inline]
    pub fn evaluate(&self, logu: f64, v: f64) -> f64 {
        let k = self.k;
        let u = logu.exp();
        let q = (k / 2.0) * (u - v);
        let r = (k / 2.0) * (u + v);
        u * q
            * r
            * self.linear.evaluate(q)
            * self.linear.evaluate(r)
            * mode_coupling(self.channel, k, q, r, self.qmin)
    }
}

// ============================================================================
// P13
// ============================================================================

/// Propagator integrand over `log q`.
#[derive(Debug)]
pub struct P13Integrand<'a, P: ?Sized> {
    linear: &'a P,
    channel: Channel,
    k: f64,
}

impl<'a, P> P13Integrand<'a, P>
where
    P: LinearPowerSpectrum + ?Sized,
{
    /// Bind the integrand to a spectrum, channel and external wavenumber.
    pub fn new(linear: &'a P, channel: Channel, k: f64) -> Self {
        Self { linear, channel, k }
    }

    /// Integrand value at `log q`.
    #[inline]
    pub fn evaluate(&self, logq: f64) -> f64 {
        let q = logq.exp();
        let r = q / self.k;
        q * self.linear.evaluate(q) * p13_shape(self.channel, r)
    }
}
