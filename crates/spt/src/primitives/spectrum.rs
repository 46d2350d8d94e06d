//! Linear power spectrum interface.
//!
//! ## Purpose
//!
//! The one-loop integrals consume the linear spectrum only through point
//! evaluation. Any `Fn(f64) -> f64` qualifies; [`PowerLaw`] is a toy model
//! for tests and demonstrations.
//!
//! ## Invariants
//!
//! * Implementations return finite, non-negative values on `[qmin, qmax]`.
//! * Evaluation must be reentrant when an engine is shared across threads.
//!
//! ## Non-goals
//!
//! * This module does not compute transfer functions or normalisations.

/// Point evaluation of the linear matter power spectrum P_L(k).
pub trait LinearPowerSpectrum {
    /// P_L at wavenumber `k > 0`.
    fn evaluate(&self, k: f64) -> f64;
}

impl<F> LinearPowerSpectrum for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn evaluate(&self, k: f64) -> f64 {
        self(k)
    }
}

/// Power law `A k^n`, optionally damped by `exp(-k^2 / k_c^2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLaw {
    /// Amplitude `A`.
    pub amplitude: f64,

    /// Spectral index `n`.
    pub index: f64,

    /// Gaussian damping scale `k_c`.
    pub cutoff: Option<f64>,
}

impl PowerLaw {
    /// Undamped power law.
    pub const fn new(amplitude: f64, index: f64) -> Self {
        Self {
            amplitude,
            index,
            cutoff: None,
        }
    }

    /// Add Gaussian damping at scale `kc`.
    pub const fn with_cutoff(mut self, kc: f64) -> Self {
        self.cutoff = Some(kc);
        self
    }
}

impl LinearPowerSpectrum for PowerLaw {
    #[inline]
    fn evaluate(&self, k: f64) -> f64 {
        let p = self.amplitude * k.powf(self.index);
        match self.cutoff {
            Some(kc) => p * (-(k * k) / (kc * kc)).exp(),
            None => p,
        }
    }
}
