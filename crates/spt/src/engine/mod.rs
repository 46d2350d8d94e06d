//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer exposes the one-loop spectra. It dispatches field-index
//! queries to channels, sums the linear, P13 and P22 contributions and
//! validates the engine configuration.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Integration
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// One-loop spectrum engine.
pub mod spectrum;

/// Validation utilities.
pub mod validator;
