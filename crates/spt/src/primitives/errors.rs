//! Error types for one-loop spectrum operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! a spectrum engine or validating field indices.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., both field indices).
//! * **Deferred**: Builder errors are recorded during configuration and surfaced by `build()`.
//! * **Construction-only**: Numeric queries never return errors; an invalid
//!   index there is a logged warning with a `0.0` sentinel.
//!
//! ## Key concepts
//!
//! 1. **Parameter validation**: Relative tolerance, cutoffs, evaluation budget.
//! 2. **Index validation**: Field index pairs whose product is not 1, 2 or 4.
//! 3. **Builder misuse**: Parameters configured more than once.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not describe integrator failures (those are warnings).

// External dependencies
use core::fmt::{Display, Formatter, Result};
use std::error::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for one-loop spectrum operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SptError {
    /// Relative error tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// Integration cutoffs must be positive, finite and ordered.
    InvalidCutoffs {
        /// Infrared cutoff on the loop wavenumber.
        qmin: f64,
        /// Ultraviolet cutoff on the loop wavenumber.
        qmax: f64,
    },

    /// The product of the field indices does not select a channel.
    InvalidFieldIndex {
        /// First field index.
        a: i32,
        /// Second field index.
        b: i32,
    },

    /// The integrator needs a non-zero evaluation budget.
    InvalidEvaluationLimit(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid relative tolerance: {tol} (must be > 0 and finite)")
            }
            Self::InvalidCutoffs { qmin, qmax } => {
                write!(
                    f,
                    "Invalid cutoffs: qmin = {qmin}, qmax = {qmax} (must satisfy 0 < qmin < qmax < inf)"
                )
            }
            Self::InvalidFieldIndex { a, b } => {
                write!(f, "Invalid field indices: a = {a}, b = {b} (a*b must be 1, 2 or 4)")
            }
            Self::InvalidEvaluationLimit(limit) => {
                write!(f, "Invalid evaluation limit: {limit} (must be at least 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for SptError {}
