//! # SPT: One-Loop Perturbation Theory Power Spectra for Rust
//!
//! One-loop Standard Perturbation Theory corrections to the matter and
//! velocity power spectra, for large-scale-structure calculations.
//!
//! ## What is computed?
//!
//! Given a linear power spectrum P_L(k), the engine evaluates the auto- and
//! cross-spectra of the density contrast (delta, index 1) and the velocity
//! divergence (theta, index 2):
//!
//! ```text
//! P_ab(k) = P_L(k) + P13_ab(k) + P22_ab(k)
//! ```
//!
//! * **P22** is the mode-coupling term, a two-dimensional integral of the
//!   second-order kernels F2/G2 against two copies of P_L.
//! * **P13** is the propagator correction, a one-dimensional integral against
//!   a shape function evaluated in branch-stabilised form.
//!
//! ## Quick Start
//!
//! ```rust
//! use spt::prelude::*;
//!
//! // Toy linear spectrum: P_L(k) = 1e4 k exp(-k^2 / 0.3^2)
//! let linear = PowerLaw::new(1e4, 1.0).with_cutoff(0.3);
//! let cosmology = ();
//!
//! let engine = Spt::new()
//!     .epsrel(1e-3)
//!     .build(&cosmology, &linear)?;
//!
//! let k = 0.1;
//! let p13 = engine.p13(k, 1, 1);
//! let growth = engine.g(k);
//! assert!((growth - (1.0 + 0.5 * p13 / engine.linear_at(k))).abs() < 1e-12);
//! # Result::<(), SptError>::Ok(())
//! ```
//!
//! ### Full spectra
//!
//! ```rust,no_run
//! use spt::prelude::*;
//!
//! let linear = |k: f64| 2e4 * k / (1.0 + (k / 0.02).powi(3));
//! let engine = SpectrumEngine::new(&(), &linear, 1e-4)?;
//!
//! for k in [0.05, 0.1, 0.2] {
//!     let p_dd = engine.p(k, 1, 1);
//!     let p_dt = engine.p(k, 1, 2);
//!     let p_tt = engine.p(k, 2, 2);
//!     println!("{k:.3} {p_dd:.6e} {p_dt:.6e} {p_tt:.6e}");
//! }
//! # Result::<(), SptError>::Ok(())
//! ```
//!
//! ### Invalid indices
//!
//! Integer queries whose index product is not 1, 2 or 4 log a warning
//! through `tracing` and return `0.0`. Use [`prelude::Channel::from_indices`]
//! to validate a pair beforehand, or query by channel:
//!
//! ```rust
//! use spt::prelude::*;
//!
//! assert!(Channel::from_indices(1, 3).is_err());
//! assert_eq!(Channel::from_indices(2, 1)?, Channel::DensityVelocity);
//! # Result::<(), SptError>::Ok(())
//! ```
//!
//! ## Logging
//!
//! Warnings (invalid indices, integrator budget exhaustion) and per-term
//! debug events are emitted with `tracing`. Install a subscriber to see them.
//!
//! ## References
//!
//! - Bernardeau, Colombi, Gaztañaga & Scoccimarro (2002). "Large-scale structure
//!   of the Universe and cosmological perturbation theory"
//! - Genz & Malik (1980). "An adaptive algorithm for numerical integration over
//!   an N-dimensional rectangular region"

// Layer 1: Primitives - errors, indices, cutoffs, spectrum interface.
mod primitives;

// Layer 2: Math - F2/G2 kernels and P13 shape functions.
mod math;

// Layer 3: Algorithms - loop integrands.
mod algorithms;

// Layer 4: Integration - quadrature and the loop-term adapter.
mod integration;

// Layer 5: Engine - spectrum evaluation and validation.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        f2, g2, mode_coupling, p13_shape, p13_shape_at, shape_with_branch, AdaptiveCubature,
        Channel, Cutoffs, Field, LinearPowerSpectrum, PowerLaw, QuadResult, Quadrature,
        ShapeBranch, SpectrumEngine, SptBuilder as Spt, SptError, DEFAULT_EPSREL,
        DEFAULT_MAX_EVALUATIONS, LARGE_RATIO, QMAX, QMIN, SMALL_RATIO, UNITY_WINDOW,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod integration {
        pub use crate::integration::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
