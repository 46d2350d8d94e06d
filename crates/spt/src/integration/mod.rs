//! Layer 4: Integration
//!
//! # Purpose
//!
//! This layer provides numerical integration: the generic [`adaptive::Quadrature`]
//! interface, a default adaptive cubature built on embedded rules, and the
//! adapter that maps the P22 and P13 loop terms onto integrator calls.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Integration ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Gauss-Kronrod and Genz-Malik rules.
pub mod rules;

/// Quadrature trait and adaptive cubature.
pub mod adaptive;

/// Domain, prefactor and tolerance handling for P22/P13.
pub mod adapter;
