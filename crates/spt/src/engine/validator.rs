//! Input validation for engine configuration.
//!
//! ## Purpose
//!
//! This module checks the parameters a spectrum engine is constructed with:
//! relative tolerance, integration cutoffs and the integrator budget.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Construction-time only**: Per-query inputs (`k`, field indices) are not
//!   validated here; the engine applies its sentinel policy to those.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid inputs.

// Internal dependencies
use crate::primitives::cutoffs::Cutoffs;
use crate::primitives::errors::SptError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for engine configuration.
pub struct Validator;

impl Validator {
    /// Validate the relative error tolerance.
    pub fn validate_tolerance(epsrel: f64) -> Result<(), SptError> {
        if !epsrel.is_finite() || epsrel <= 0.0 {
            return Err(SptError::InvalidTolerance(epsrel));
        }
        Ok(())
    }

    /// Validate the loop-wavenumber cutoffs.
    pub fn validate_cutoffs(cutoffs: &Cutoffs) -> Result<(), SptError> {
        let Cutoffs { qmin, qmax } = *cutoffs;
        let finite = qmin.is_finite() && qmax.is_finite();
        if !finite || qmin <= 0.0 || qmin >= qmax {
            return Err(SptError::InvalidCutoffs { qmin, qmax });
        }
        Ok(())
    }

    /// Validate the integrator evaluation budget.
    pub fn validate_max_evaluations(max_evaluations: usize) -> Result<(), SptError> {
        if max_evaluations == 0 {
            return Err(SptError::InvalidEvaluationLimit(max_evaluations));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), SptError> {
        if let Some(param) = duplicate_param {
            return Err(SptError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
