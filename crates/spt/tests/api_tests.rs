//! Tests for the fluent builder and engine construction.
//!
//! ## Test Organization
//!
//! 1. **Defaults** - Values applied when nothing is configured
//! 2. **Validation** - Rejected tolerances, cutoffs and budgets
//! 3. **Duplicates** - Parameters set more than once
//! 4. **Error Display** - Messages carry the offending values

use spt::prelude::*;

// ============================================================================
// Default Tests
// ============================================================================

/// Test the defaults of the builder.
#[test]
fn test_builder_defaults() {
    let linear = PowerLaw::new(1.0, 1.0);
    let engine = Spt::new().build(&(), &linear).unwrap();

    assert_eq!(engine.epsrel(), DEFAULT_EPSREL);
    assert_eq!(engine.epsrel(), 1e-4);
    assert_eq!(engine.cutoffs(), Cutoffs::new(1e-5, 1e5));
    assert_eq!(engine.quadrature().max_evaluations(), DEFAULT_MAX_EVALUATIONS);
    assert_eq!(engine.linear_at(3.0), 3.0);
}

/// Test that configured values reach the engine.
#[test]
fn test_builder_configured() {
    let linear = PowerLaw::new(1.0, 1.0);
    let cosmology = "planck";
    let engine = Spt::new()
        .epsrel(1e-6)
        .cutoffs(1e-3, 10.0)
        .max_evaluations(5_000)
        .build(&cosmology, &linear)
        .unwrap();

    assert_eq!(engine.epsrel(), 1e-6);
    assert_eq!(engine.cutoffs(), Cutoffs::new(1e-3, 10.0));
    assert_eq!(engine.quadrature().max_evaluations(), 5_000);
    assert_eq!(*engine.cosmology(), "planck");
    assert_eq!(engine.linear(), &linear);
}

/// Test direct construction matches the builder defaults.
#[test]
fn test_new_matches_builder() {
    let linear = PowerLaw::new(1.0, 1.0);
    let direct = SpectrumEngine::new(&(), &linear, 1e-4).unwrap();
    let built = Spt::new().build(&(), &linear).unwrap();

    assert_eq!(direct.epsrel(), built.epsrel());
    assert_eq!(direct.cutoffs(), built.cutoffs());
    assert_eq!(direct.quadrature(), built.quadrature());
}

/// Test that unsized collaborators are accepted.
#[test]
fn test_trait_object_spectrum() {
    let linear: Box<dyn LinearPowerSpectrum> = Box::new(PowerLaw::new(2.0, 0.0));
    let engine = SpectrumEngine::new(&(), linear.as_ref(), 1e-4).unwrap();

    assert_eq!(engine.linear_at(0.5), 2.0);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that non-positive or non-finite tolerances are rejected.
#[test]
fn test_invalid_tolerance() {
    let linear = PowerLaw::new(1.0, 1.0);
    for epsrel in [0.0, -1e-4, f64::NAN, f64::INFINITY] {
        let err = Spt::new().epsrel(epsrel).build(&(), &linear).unwrap_err();
        assert!(matches!(err, SptError::InvalidTolerance(_)));

        let err = SpectrumEngine::new(&(), &linear, epsrel).unwrap_err();
        assert!(matches!(err, SptError::InvalidTolerance(_)));
    }
}

/// Test that unordered or non-positive cutoffs are rejected.
#[test]
fn test_invalid_cutoffs() {
    let linear = PowerLaw::new(1.0, 1.0);
    for (qmin, qmax) in [(0.0, 1.0), (-1.0, 1.0), (1.0, 1.0), (2.0, 1.0), (1e-5, f64::INFINITY)] {
        let err = Spt::new().cutoffs(qmin, qmax).build(&(), &linear).unwrap_err();
        assert_eq!(err, SptError::InvalidCutoffs { qmin, qmax });
    }
}

/// Test that a zero evaluation budget is rejected.
#[test]
fn test_invalid_max_evaluations() {
    let linear = PowerLaw::new(1.0, 1.0);
    let err = Spt::new().max_evaluations(0).build(&(), &linear).unwrap_err();
    assert_eq!(err, SptError::InvalidEvaluationLimit(0));
}

/// Test that a custom integrator bypasses the budget check.
#[test]
fn test_build_with_custom_integrator() {
    let linear = PowerLaw::new(1.0, 1.0);
    let engine = Spt::new()
        .epsrel(1e-3)
        .build_with(AdaptiveCubature::new(123), &(), &linear)
        .unwrap();

    assert_eq!(engine.quadrature().max_evaluations(), 123);
    assert_eq!(engine.epsrel(), 1e-3);
}

// ============================================================================
// Duplicate Parameter Tests
// ============================================================================

/// Test that setting a parameter twice is reported by `build`.
#[test]
fn test_duplicate_parameters() {
    let linear = PowerLaw::new(1.0, 1.0);

    let err = Spt::new().epsrel(1e-3).epsrel(1e-4).build(&(), &linear).unwrap_err();
    assert_eq!(err, SptError::DuplicateParameter { parameter: "epsrel" });

    let err = Spt::new()
        .cutoffs(1e-4, 1e4)
        .cutoffs(1e-3, 1e3)
        .build(&(), &linear)
        .unwrap_err();
    assert_eq!(err, SptError::DuplicateParameter { parameter: "cutoffs" });

    let err = Spt::new()
        .max_evaluations(10)
        .max_evaluations(0)
        .build(&(), &linear)
        .unwrap_err();
    assert_eq!(
        err,
        SptError::DuplicateParameter {
            parameter: "max_evaluations"
        }
    );

    let err = Spt::new()
        .epsrel(1e-3)
        .epsrel(1e-3)
        .build_with(AdaptiveCubature::default(), &(), &linear)
        .unwrap_err();
    assert_eq!(err, SptError::DuplicateParameter { parameter: "epsrel" });
}

// ============================================================================
// Error Display Tests
// ============================================================================

/// Test that error messages carry the offending values.
#[test]
fn test_error_display() {
    let err = SptError::InvalidFieldIndex { a: 1, b: 3 };
    assert_eq!(
        err.to_string(),
        "Invalid field indices: a = 1, b = 3 (a*b must be 1, 2 or 4)"
    );

    let err = SptError::InvalidTolerance(-1.0);
    assert!(err.to_string().contains("-1"));

    let err = SptError::InvalidCutoffs { qmin: 2.0, qmax: 1.0 };
    let msg = err.to_string();
    assert!(msg.contains("qmin = 2") && msg.contains("qmax = 1"));

    let err = SptError::DuplicateParameter { parameter: "cutoffs" };
    assert!(err.to_string().contains("'cutoffs'"));

    let boxed: Box<dyn std::error::Error> = Box::new(SptError::InvalidEvaluationLimit(0));
    assert!(boxed.to_string().contains("evaluation limit"));
}
