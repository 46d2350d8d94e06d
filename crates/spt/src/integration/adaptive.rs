//! Globally adaptive cubature.
//!
//! ## Purpose
//!
//! This module provides the [`Quadrature`] trait through which the engine
//! consumes numerical integration, and [`AdaptiveCubature`], the default
//! implementation.
//!
//! ## Design notes
//!
//! * **Global adaptivity**: Regions live in a max-heap keyed by error; the
//!   worst region is bisected along its suggested axis until the summed
//!   error meets `max(epsabs, epsrel |I|)`.
//! * **Budgeted**: Refinement stops when the next bisection would exceed the
//!   evaluation budget. The best estimate is returned with `converged = false`
//!   and a warning is logged.
//! * **Rules**: Gauss-Kronrod in one dimension, Genz-Malik otherwise.
//!
//! ## Invariants
//!
//! * The reported value and error are sums over the final region set.
//! * `evaluations` never exceeds the budget, except for the initial region.
//!
//! ## Non-goals
//!
//! * This module does not parallelise integrand evaluation.
//! * This module does not cache integrand values between calls.

// External dependencies
use core::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::warn;

// Internal dependencies
use crate::integration::rules::{
    gauss_kronrod, genz_malik, genz_malik_points, RuleEstimate, KRONROD_POINTS,
};

// ============================================================================
// Quadrature Interface
// ============================================================================

/// Outcome of a definite integral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadResult {
    /// Integral estimate.
    pub value: f64,

    /// Estimated absolute error.
    pub error: f64,

    /// Number of integrand evaluations spent.
    pub evaluations: usize,

    /// Whether the requested tolerance was met.
    pub converged: bool,
}

/// Adaptive integration over a `D`-dimensional box.
pub trait Quadrature {
    /// Integrate `f` over the box `[lower, upper]` to within
    /// `max(epsabs, epsrel |I|)`.
    fn integrate<const D: usize, F>(
        &self,
        f: F,
        lower: [f64; D],
        upper: [f64; D],
        epsrel: f64,
        epsabs: f64,
    ) -> QuadResult
    where
        F: Fn(&[f64; D]) -> f64;
}

// ============================================================================
// Adaptive Cubature
// ============================================================================

/// Default evaluation budget per integral.
pub const DEFAULT_MAX_EVALUATIONS: usize = 2_000_000;

/// h-adaptive cubature with a per-integral evaluation budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveCubature {
    max_evaluations: usize,
}

impl Default for AdaptiveCubature {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EVALUATIONS)
    }
}

impl AdaptiveCubature {
    /// Create an integrator that spends at most `max_evaluations` integrand
    /// calls per integral.
    pub const fn new(max_evaluations: usize) -> Self {
        Self { max_evaluations }
    }

    /// Evaluation budget per integral.
    #[inline]
    pub const fn max_evaluations(&self) -> usize {
        self.max_evaluations
    }
}

/// Box under refinement.
#[derive(Debug, Clone, Copy)]
struct Region<const D: usize> {
    center: [f64; D],
    halfwidth: [f64; D],
    estimate: RuleEstimate,
}

impl<const D: usize> Region<D> {
    fn new<F>(f: &F, center: [f64; D], halfwidth: [f64; D]) -> Self
    where
        F: Fn(&[f64; D]) -> f64,
    {
        let estimate = if D == 1 {
            let mut p = center;
            gauss_kronrod(
                |x| {
                    p[0] = x;
                    f(&p)
                },
                center[0],
                halfwidth[0],
            )
        } else {
            genz_malik(f, &center, &halfwidth)
        };
        Self {
            center,
            halfwidth,
            estimate,
        }
    }

    /// Bisect along the rule's suggested axis.
    fn split<F>(&self, f: &F) -> (Self, Self)
    where
        F: Fn(&[f64; D]) -> f64,
    {
        let axis = self.estimate.split_axis;
        let mut halfwidth = self.halfwidth;
        halfwidth[axis] *= 0.5;

        let mut left = self.center;
        left[axis] -= halfwidth[axis];
        let mut right = self.center;
        right[axis] += halfwidth[axis];

        (Self::new(f, left, halfwidth), Self::new(f, right, halfwidth))
    }
}

impl<const D: usize> PartialEq for Region<D> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<const D: usize> Eq for Region<D> {}

impl<const D: usize> PartialOrd for Region<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const D: usize> Ord for Region<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.estimate.error.total_cmp(&other.estimate.error)
    }
}

impl Quadrature for AdaptiveCubature {
    fn integrate<const D: usize, F>(
        &self,
        f: F,
        lower: [f64; D],
        upper: [f64; D],
        epsrel: f64,
        epsabs: f64,
    ) -> QuadResult
    where
        F: Fn(&[f64; D]) -> f64,
    {
        if D == 0 {
            return QuadResult {
                value: f(&lower),
                error: 0.0,
                evaluations: 1,
                converged: true,
            };
        }

        let points = if D == 1 {
            KRONROD_POINTS
        } else {
            genz_malik_points(D)
        };

        let mut center = [0.0; D];
        let mut halfwidth = [0.0; D];
        for i in 0..D {
            center[i] = 0.5 * (lower[i] + upper[i]);
            halfwidth[i] = 0.5 * (upper[i] - lower[i]);
        }

        let first = Region::new(&f, center, halfwidth);
        let mut evaluations = points;
        let mut value = first.estimate.value;
        let mut error = first.estimate.error;
        let mut converged = true;

        let mut heap = BinaryHeap::new();
        heap.push(first);

        while error > epsabs.max(epsrel * value.abs()) {
            if evaluations + 2 * points > self.max_evaluations {
                converged = false;
                break;
            }
            let Some(worst) = heap.pop() else {
                break;
            };
            let (left, right) = worst.split(&f);
            evaluations += 2 * points;

            value += left.estimate.value + right.estimate.value - worst.estimate.value;
            error += left.estimate.error + right.estimate.error - worst.estimate.error;
            heap.push(left);
            heap.push(right);
        }

        // Re-sum to drop the drift of the running updates.
        value = heap.iter().map(|r| r.estimate.value).sum();
        error = heap.iter().map(|r| r.estimate.error).sum();

        if !converged {
            warn!(
                dimensions = D,
                value,
                error,
                evaluations,
                max_evaluations = self.max_evaluations,
                "adaptive cubature hit its evaluation limit before converging"
            );
        }

        QuadResult {
            value,
            error,
            evaluations,
            converged,
        }
    }
}
