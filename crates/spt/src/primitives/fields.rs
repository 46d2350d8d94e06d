//! Field indices and spectrum channels.
//!
//! ## Purpose
//!
//! Auto- and cross-spectra are requested with a pair of integer field
//! indices, 1 for the density contrast and 2 for the velocity divergence.
//! The product of the pair selects one of three channels.
//!
//! ## Invariants
//!
//! * Dispatch depends only on `a * b`, so `(a, b)` and `(b, a)` always agree.
//! * Products other than 1, 2 and 4 never map to a channel.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::errors::SptError;

// ============================================================================
// Field
// ============================================================================

/// A perturbed field entering a spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Field {
    /// Density contrast, delta.
    Density = 1,

    /// Velocity divergence, theta.
    Velocity = 2,
}

impl Field {
    /// Integer index used by the `(a, b)` query interface.
    #[inline]
    pub const fn index(self) -> i32 {
        self as i32
    }
}

// ============================================================================
// Channel
// ============================================================================

/// Auto- or cross-spectrum selected by a pair of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// P_{delta delta}.
    DensityDensity,

    /// P_{delta theta}, symmetric in its arguments.
    DensityVelocity,

    /// P_{theta theta}.
    VelocityVelocity,
}

impl Channel {
    /// All channels, in index-product order.
    pub const ALL: [Channel; 3] = [
        Channel::DensityDensity,
        Channel::DensityVelocity,
        Channel::VelocityVelocity,
    ];

    /// Resolve a channel from integer field indices.
    ///
    /// Only the product `a * b` is inspected, matching the convention that
    /// 1 selects delta-delta, 2 selects delta-theta and 4 selects theta-theta.
    pub fn from_indices(a: i32, b: i32) -> core::result::Result<Self, SptError> {
        match a.wrapping_mul(b) {
            1 => Ok(Channel::DensityDensity),
            2 => Ok(Channel::DensityVelocity),
            4 => Ok(Channel::VelocityVelocity),
            _ => Err(SptError::InvalidFieldIndex { a, b }),
        }
    }

    /// Resolve a channel from typed fields.
    pub const fn from_fields(a: Field, b: Field) -> Self {
        match (a, b) {
            (Field::Density, Field::Density) => Channel::DensityDensity,
            (Field::Velocity, Field::Velocity) => Channel::VelocityVelocity,
            _ => Channel::DensityVelocity,
        }
    }

    /// Short name, `"dd"`, `"dt"` or `"tt"`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Channel::DensityDensity => "dd",
            Channel::DensityVelocity => "dt",
            Channel::VelocityVelocity => "tt",
        }
    }

    /// Denominator `N` of the P13 prefactor `k^2 P_L(k) / (N 4 pi^2)`.
    #[inline]
    pub const fn p13_denominator(&self) -> f64 {
        match self {
            Channel::DensityDensity | Channel::DensityVelocity => 252.0,
            Channel::VelocityVelocity => 84.0,
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}
