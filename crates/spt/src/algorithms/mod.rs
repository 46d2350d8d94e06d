//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer turns the kernels of Layer 2 into pointwise integrands of
//! the P22 and P13 loop integrals, closing over the linear spectrum.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// P22 and P13 integrands.
pub mod integrands;
