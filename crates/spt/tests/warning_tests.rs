//! Tests for logged warnings.
//!
//! Invalid field indices and an exhausted integrator budget are reported
//! through `tracing` rather than as errors. These tests install a counting
//! layer for the duration of each test.
//!
//! ## Test Organization
//!
//! 1. **Invalid Indices** - Exactly one warning per rejected query
//! 2. **Integrator Budget** - Warning on non-convergence only

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use spt::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Layer counting WARN events.
struct WarnCounter {
    count: Arc<AtomicUsize>,
}

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run `f` with a counting subscriber and return the number of warnings.
fn count_warnings<F: FnOnce()>(f: F) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter {
        count: Arc::clone(&count),
    });
    tracing::subscriber::with_default(subscriber, f);
    count.load(Ordering::SeqCst)
}

// ============================================================================
// Invalid Index Tests
// ============================================================================

/// Test that each rejected query logs exactly one warning.
#[test]
fn test_invalid_indices_warn_once() {
    let linear = PowerLaw::new(1e4, 1.0).with_cutoff(0.3);
    let engine = Spt::new().build(&(), &linear).unwrap();

    assert_eq!(count_warnings(|| assert_eq!(engine.p(0.1, 1, 3), 0.0)), 1);
    assert_eq!(count_warnings(|| assert_eq!(engine.p22(0.1, 3, 3), 0.0)), 1);
    assert_eq!(count_warnings(|| assert_eq!(engine.p13(0.1, 0, 2), 0.0)), 1);
}

/// Test that valid queries stay silent.
#[test]
fn test_valid_queries_do_not_warn() {
    let linear = PowerLaw::new(1e4, 1.0).with_cutoff(0.3);
    let engine = Spt::new().epsrel(1e-3).build(&(), &linear).unwrap();

    let warnings = count_warnings(|| {
        engine.p13(0.1, 1, 1);
        engine.p22(0.1, 2, 2);
        engine.p22(0.0, 1, 2);
        engine.g(0.1);
    });
    assert_eq!(warnings, 0);
}

// ============================================================================
// Integrator Budget Tests
// ============================================================================

/// Test that an exhausted budget logs one warning per integral.
#[test]
fn test_budget_exhaustion_warns() {
    let quad = AdaptiveCubature::new(45);

    let mut result = None;
    let warnings = count_warnings(|| {
        result = Some(quad.integrate(
            |x: &[f64; 1]| (50.0 * x[0]).sin(),
            [0.0],
            [10.0],
            1e-12,
            0.0,
        ));
    });

    assert_eq!(warnings, 1);
    assert!(!result.unwrap().converged);
}

/// Test that a starved engine still returns finite loop terms.
#[test]
fn test_starved_engine_warns_and_returns_estimate() {
    let linear = PowerLaw::new(1e4, 1.0).with_cutoff(0.3);
    let engine = Spt::new()
        .epsrel(1e-10)
        .max_evaluations(100)
        .build(&(), &linear)
        .unwrap();

    let mut value = f64::NAN;
    let warnings = count_warnings(|| value = engine.p13(0.1, 1, 1));

    assert_eq!(warnings, 1);
    assert!(value.is_finite());
}
