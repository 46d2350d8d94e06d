//! One-loop spectrum engine.
//!
//! ## Purpose
//!
//! This module provides [`SpectrumEngine`], which evaluates the one-loop
//! auto- and cross-spectra of the density and velocity-divergence fields:
//!
//! ```text
//! P_ab(k) = P_L(k) + P13_ab(k) + P22_ab(k)
//! ```
//!
//! ## Design notes
//!
//! * **Stateless queries**: Every query is a pure function of `k`, the field
//!   indices and the immutable engine state, so an engine can be shared
//!   across threads whenever its spectrum and cosmology are `Sync`.
//! * **Index dispatch**: Integer queries dispatch on `a * b`. Invalid products
//!   log one warning and return `0.0`; typed [`Channel`] queries cannot fail.
//! * **Borrowed collaborators**: The cosmology and linear spectrum are
//!   borrowed for the engine's lifetime. The cosmology is not read by the
//!   one-loop kernels.
//!
//! ## Invariants
//!
//! * `epsrel` is positive and finite, cutoffs satisfy `0 < qmin < qmax`.
//! * `P(k, a, b) == P(k, b, a)`.
//!
//! ## Non-goals
//!
//! * This module does not parallelise over `k` or cache integrand values.
//! * This module does not compute redshift-space or two-loop terms.

// External dependencies
use tracing::{debug, warn};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::integration::adapter::{integrate_p13, integrate_p22};
use crate::integration::adaptive::{AdaptiveCubature, Quadrature};
use crate::primitives::cutoffs::Cutoffs;
use crate::primitives::errors::SptError;
use crate::primitives::fields::Channel;
use crate::primitives::spectrum::LinearPowerSpectrum;

/// Default relative tolerance of the loop integrals.
pub const DEFAULT_EPSREL: f64 = 1e-4;

// ============================================================================
// Engine
// ============================================================================

/// One-loop SPT power spectra for a fixed linear spectrum.
#[derive(Debug, Clone)]
pub struct SpectrumEngine<'a, C: ?Sized, P: ?Sized, Q = AdaptiveCubature> {
    cosmology: &'a C,
    linear: &'a P,
    epsrel: f64,
    cutoffs: Cutoffs,
    quadrature: Q,
}

impl<'a, C, P> SpectrumEngine<'a, C, P, AdaptiveCubature>
where
    C: ?Sized,
    P: LinearPowerSpectrum + ?Sized,
{
    /// Create an engine with default cutoffs and integrator.
    pub fn new(cosmology: &'a C, linear: &'a P, epsrel: f64) -> Result<Self, SptError> {
        Self::with_parts(
            cosmology,
            linear,
            epsrel,
            Cutoffs::default(),
            AdaptiveCubature::default(),
        )
    }
}

impl<'a, C, P, Q> SpectrumEngine<'a, C, P, Q>
where
    C: ?Sized,
    P: LinearPowerSpectrum + ?Sized,
    Q: Quadrature,
{
    /// Create an engine from fully specified parts.
    pub fn with_parts(
        cosmology: &'a C,
        linear: &'a P,
        epsrel: f64,
        cutoffs: Cutoffs,
        quadrature: Q,
    ) -> Result<Self, SptError> {
        Validator::validate_tolerance(epsrel)?;
        Validator::validate_cutoffs(&cutoffs)?;
        Ok(Self {
            cosmology,
            linear,
            epsrel,
            cutoffs,
            quadrature,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Relative tolerance of the loop integrals.
    #[inline]
    pub fn epsrel(&self) -> f64 {
        self.epsrel
    }

    /// Loop-wavenumber cutoffs.
    #[inline]
    pub fn cutoffs(&self) -> Cutoffs {
        self.cutoffs
    }

    /// Cosmology the engine was built with.
    #[inline]
    pub fn cosmology(&self) -> &'a C {
        self.cosmology
    }

    /// Linear spectrum the engine was built with.
    #[inline]
    pub fn linear(&self) -> &'a P {
        self.linear
    }

    /// P_L(k).
    #[inline]
    pub fn linear_at(&self, k: f64) -> f64 {
        self.linear.evaluate(k)
    }

    /// Integrator in use.
    #[inline]
    pub fn quadrature(&self) -> &Q {
        &self.quadrature
    }

    // ========================================================================
    // Index-Based Queries
    // ========================================================================

    /// One-loop spectrum P_ab(k); `0.0` with a warning for invalid indices.
    pub fn p(&self, k: f64, a: i32, b: i32) -> f64 {
        match resolve(a, b) {
            Some(channel) => self.p_channel(channel, k),
            None => 0.0,
        }
    }

    /// Mode-coupling term P22_ab(k); `0.0` with a warning for invalid indices.
    pub fn p22(&self, k: f64, a: i32, b: i32) -> f64 {
        match resolve(a, b) {
            Some(channel) => self.p22_channel(channel, k),
            None => 0.0,
        }
    }

    /// Propagator term P13_ab(k); `0.0` with a warning for invalid indices.
    pub fn p13(&self, k: f64, a: i32, b: i32) -> f64 {
        match resolve(a, b) {
            Some(channel) => self.p13_channel(channel, k),
            None => 0.0,
        }
    }

    /// Scale-dependent growth proxy `1 + P13_dd(k) / (2 P_L(k))`.
    ///
    /// No guard against `P_L(k) = 0`; the result is then infinite or NaN.
    pub fn g(&self, k: f64) -> f64 {
        1.0 + 0.5 * self.p13_dd(k) / self.linear.evaluate(k)
    }

    // ========================================================================
    // Channel Queries
    // ========================================================================

    /// One-loop spectrum of a channel.
    pub fn p_channel(&self, channel: Channel, k: f64) -> f64 {
        self.linear.evaluate(k) + self.p13_channel(channel, k) + self.p22_channel(channel, k)
    }

    /// Mode-coupling term of a channel. Zero for `k <= 0`.
    pub fn p22_channel(&self, channel: Channel, k: f64) -> f64 {
        let value = integrate_p22(
            &self.quadrature,
            self.linear,
            channel,
            k,
            &self.cutoffs,
            self.epsrel,
        );
        debug!(k, channel = %channel, value, "computed P22");
        value
    }

    /// Propagator term of a channel.
    pub fn p13_channel(&self, channel: Channel, k: f64) -> f64 {
        let value = integrate_p13(
            &self.quadrature,
            self.linear,
            channel,
            k,
            &self.cutoffs,
            self.epsrel,
        );
        debug!(k, channel = %channel, value, "computed P13");
        value
    }

    /// P22_{delta delta}(k).
    pub fn p22_dd(&self, k: f64) -> f64 {
        self.p22_channel(Channel::DensityDensity, k)
    }

    /// P22_{delta theta}(k).
    pub fn p22_dt(&self, k: f64) -> f64 {
        self.p22_channel(Channel::DensityVelocity, k)
    }

    /// P22_{theta theta}(k).
    pub fn p22_tt(&self, k: f64) -> f64 {
        self.p22_channel(Channel::VelocityVelocity, k)
    }

    /// P13_{delta delta}(k).
    pub fn p13_dd(&self, k: f64) -> f64 {
        self.p13_channel(Channel::DensityDensity, k)
    }

    /// P13_{delta theta}(k).
    pub fn p13_dt(&self, k: f64) -> f64 {
        self.p13_channel(Channel::DensityVelocity, k)
    }

    /// P13_{theta theta}(k).
    pub fn p13_tt(&self, k: f64) -> f64 {
        self.p13_channel(Channel::VelocityVelocity, k)
    }
}

/// Map integer indices to a channel, warning once when they are invalid.
fn resolve(a: i32, b: i32) -> Option<Channel> {
    match Channel::from_indices(a, b) {
        Ok(channel) => Some(channel),
        Err(err) => {
            warn!(a, b, %err, "invalid field indices, returning 0");
            None
        }
    }
}
