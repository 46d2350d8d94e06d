//! High-level API for one-loop spectra.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the engine parameters and re-exports the public types
//! of the lower layers.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for every parameter.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Deferred errors**: Setting a parameter twice is recorded and reported
//!   by `.build()`, never by the setter.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`SptBuilder`] via `Spt::new()`.
//! 2. Chain configuration methods (`.epsrel()`, `.cutoffs()`, ...).
//! 3. Call `.build(&cosmology, &linear)` to borrow the collaborators and
//!    obtain a [`SpectrumEngine`].

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::spectrum::{SpectrumEngine, DEFAULT_EPSREL};
pub use crate::integration::adaptive::{
    AdaptiveCubature, QuadResult, Quadrature, DEFAULT_MAX_EVALUATIONS,
};
pub use crate::math::kernel::{f2, g2, mode_coupling};
pub use crate::math::shape::{
    p13_shape, p13_shape_at, shape_with_branch, ShapeBranch, LARGE_RATIO, SMALL_RATIO,
    UNITY_WINDOW,
};
pub use crate::primitives::cutoffs::{Cutoffs, QMAX, QMIN};
pub use crate::primitives::errors::SptError;
pub use crate::primitives::fields::{Channel, Field};
pub use crate::primitives::spectrum::{LinearPowerSpectrum, PowerLaw};

/// Fluent builder for configuring a spectrum engine.
#[derive(Debug, Clone, Default)]
pub struct SptBuilder {
    /// Relative tolerance of the loop integrals.
    pub epsrel: Option<f64>,

    /// Loop-wavenumber cutoffs.
    pub cutoffs: Option<Cutoffs>,

    /// Evaluation budget of the default integrator, per integral.
    pub max_evaluations: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SptBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            epsrel: None,
            cutoffs: None,
            max_evaluations: None,
            duplicate_param: None,
        }
    }

    /// Set the relative tolerance (default `1e-4`).
    pub fn epsrel(mut self, epsrel: f64) -> Self {
        if self.epsrel.is_some() {
            self.duplicate_param = Some("epsrel");
        }
        self.epsrel = Some(epsrel);
        self
    }

    /// Set the infrared and ultraviolet cutoffs (default `1e-5`, `1e5`).
    pub fn cutoffs(mut self, qmin: f64, qmax: f64) -> Self {
        if self.cutoffs.is_some() {
            self.duplicate_param = Some("cutoffs");
        }
        self.cutoffs = Some(Cutoffs::new(qmin, qmax));
        self
    }

    /// Set the per-integral evaluation budget of the default integrator.
    pub fn max_evaluations(mut self, max_evaluations: usize) -> Self {
        if self.max_evaluations.is_some() {
            self.duplicate_param = Some("max_evaluations");
        }
        self.max_evaluations = Some(max_evaluations);
        self
    }

    /// Validate the configuration and build an engine with the default integrator.
    pub fn build<'a, C, P>(
        self,
        cosmology: &'a C,
        linear: &'a P,
    ) -> Result<SpectrumEngine<'a, C, P>, SptError>
    where
        C: ?Sized,
        P: LinearPowerSpectrum + ?Sized,
    {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let max_evaluations = self.max_evaluations.unwrap_or(DEFAULT_MAX_EVALUATIONS);
        Validator::validate_max_evaluations(max_evaluations)?;
        self.build_with(AdaptiveCubature::new(max_evaluations), cosmology, linear)
    }

    /// Validate the configuration and build an engine on a caller-supplied
    /// integrator. `max_evaluations` does not apply to it.
    pub fn build_with<'a, C, P, Q>(
        self,
        quadrature: Q,
        cosmology: &'a C,
        linear: &'a P,
    ) -> Result<SpectrumEngine<'a, C, P, Q>, SptError>
    where
        C: ?Sized,
        P: LinearPowerSpectrum + ?Sized,
        Q: Quadrature,
    {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        SpectrumEngine::with_parts(
            cosmology,
            linear,
            self.epsrel.unwrap_or(DEFAULT_EPSREL),
            self.cutoffs.unwrap_or_default(),
            quadrature,
        )
    }
}
