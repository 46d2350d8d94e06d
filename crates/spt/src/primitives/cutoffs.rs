//! Infrared and ultraviolet cutoffs of the loop integrals.
//!
//! The loop wavenumber is integrated over `[qmin, qmax]`. `qmin` also acts as
//! the floor applied to wavevector magnitudes inside the F2/G2 kernels.

/// Default infrared cutoff.
pub const QMIN: f64 = 1e-5;

/// Default ultraviolet cutoff.
pub const QMAX: f64 = 1e5;

/// Limits of integration for the loop wavenumber.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cutoffs {
    /// Infrared cutoff.
    pub qmin: f64,

    /// Ultraviolet cutoff.
    pub qmax: f64,
}

impl Cutoffs {
    /// Create a cutoff pair. Validation happens when an engine is built.
    pub const fn new(qmin: f64, qmax: f64) -> Self {
        Self { qmin, qmax }
    }

    /// `(ln qmin, ln qmax)`, the P13 integration interval.
    #[inline]
    pub fn log_range(&self) -> (f64, f64) {
        (self.qmin.ln(), self.qmax.ln())
    }
}

impl Default for Cutoffs {
    fn default() -> Self {
        Self::new(QMIN, QMAX)
    }
}
