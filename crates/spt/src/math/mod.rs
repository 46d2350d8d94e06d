//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical functions of one-loop
//! perturbation theory:
//! - Second-order mode-coupling kernels F2 and G2
//! - Branch-stabilised shape functions of the P13 integrals
//!
//! These are building blocks with no integration logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Integration
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// F2/G2 mode-coupling kernels.
pub mod kernel;

/// P13 shape functions.
pub mod shape;
