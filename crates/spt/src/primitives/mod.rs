//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive types shared by every other layer:
//! errors, field indices, integration cutoffs and the linear spectrum
//! interface. It has zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Field indices and channels.
pub mod fields;

/// Loop integral cutoffs.
pub mod cutoffs;

/// Linear power spectrum interface.
pub mod spectrum;
