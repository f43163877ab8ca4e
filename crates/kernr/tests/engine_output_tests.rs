//! Tests for the regression output structure.
//!
//! These tests verify the `RegressionFit` struct and its methods:
//! - Query methods (`has_residuals`, `has_diagnostics`, `num_features`)
//! - Optional-output population per builder configuration
//! - Consistency between fitted values, residuals, and labels
//! - Display formatting
//!
//! ## Test Organization
//!
//! 1. **Query Methods** - Presence of optional outputs
//! 2. **Output Contents** - Lengths and values of populated vectors
//! 3. **Display** - Summary and coefficient table formatting

use approx::assert_relative_eq;

use kernr::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn affine_training(n: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
    let features: Vec<Vec<f64>> = (0..n).map(|i| vec![i as f64]).collect();
    let labels: Vec<f64> = features.iter().map(|row| 1.0 + 2.0 * row[0]).collect();
    (features, labels)
}

// ============================================================================
// Query Method Tests
// ============================================================================

/// Test that a default fit carries no optional outputs.
#[test]
fn test_output_default_has_no_optional_outputs() {
    let (features, labels) = affine_training(5);

    let fit = LeastSquares::new()
        .build()
        .unwrap()
        .fit(&features, &labels)
        .unwrap();

    assert!(!fit.has_residuals());
    assert!(!fit.has_diagnostics());
    assert!(fit.fitted.is_none());
}

/// Test that requested outputs are reported as present.
#[test]
fn test_output_requested_outputs_are_present() {
    let (features, labels) = affine_training(5);

    let fit = LeastSquares::new()
        .return_residuals()
        .return_diagnostics()
        .build()
        .unwrap()
        .fit(&features, &labels)
        .unwrap();

    assert!(fit.has_residuals());
    assert!(fit.has_diagnostics());
    assert!(fit.fitted.is_some());
}

/// Test the sample and feature counts recorded on the result.
#[test]
fn test_output_counts() {
    let (features, labels) = affine_training(7);

    let fit = LeastSquares::new()
        .build()
        .unwrap()
        .fit(&features, &labels)
        .unwrap();

    assert_eq!(fit.samples, 7);
    assert_eq!(fit.num_features(), 1);
    assert_eq!(fit.num_features(), fit.model.num_features());
}

/// Test that the configured tolerance is recorded on the result.
#[test]
fn test_output_records_tolerance() {
    let (features, labels) = affine_training(4);

    let fit = LeastSquares::new()
        .tolerance(1e-9)
        .build()
        .unwrap()
        .fit(&features, &labels)
        .unwrap();

    assert_eq!(fit.tolerance, 1e-9);
}

// ============================================================================
// Output Content Tests
// ============================================================================

/// Test that populated vectors have one entry per sample.
#[test]
fn test_output_vector_lengths() {
    let (features, labels) = affine_training(6);

    let fit = LeastSquares::new()
        .return_residuals()
        .return_diagnostics()
        .build()
        .unwrap()
        .fit(&features, &labels)
        .unwrap();

    assert_eq!(fit.fitted.as_ref().unwrap().len(), 6);
    assert_eq!(fit.residuals.as_ref().unwrap().len(), 6);
}

/// Test that residuals satisfy y = fitted + residual per sample.
#[test]
fn test_output_residuals_are_label_minus_fitted() {
    let features: Vec<Vec<f64>> = (0..6).map(|i| vec![i as f64]).collect();
    let labels: Vec<f64> = features
        .iter()
        .enumerate()
        .map(|(i, row)| 1.0 + 2.0 * row[0] + if i % 2 == 0 { 0.25 } else { -0.25 })
        .collect();

    let fit = LeastSquares::new()
        .return_residuals()
        .build()
        .unwrap()
        .fit(&features, &labels)
        .unwrap();

    let fitted = fit.fitted.as_ref().unwrap();
    let residuals = fit.residuals.as_ref().unwrap();
    for i in 0..labels.len() {
        assert_relative_eq!(fitted[i] + residuals[i], labels[i], epsilon = 1e-10);
    }
}

/// Test that an exact fit produces near-zero residuals and a perfect R².
#[test]
fn test_output_exact_fit_residuals_vanish() {
    let (features, labels) = affine_training(5);

    let fit = LeastSquares::new()
        .return_residuals()
        .return_diagnostics()
        .build()
        .unwrap()
        .fit(&features, &labels)
        .unwrap();

    for &r in fit.residuals.as_ref().unwrap() {
        assert_relative_eq!(r, 0.0, epsilon = 1e-9);
    }
    assert_relative_eq!(
        fit.diagnostics.as_ref().unwrap().r_squared,
        1.0,
        epsilon = 1e-9
    );
}

/// Test that the model on the result remains usable for new queries.
#[test]
fn test_output_model_is_reusable() {
    let (features, labels) = affine_training(5);

    let fit = LeastSquares::new()
        .build()
        .unwrap()
        .fit(&features, &labels)
        .unwrap();

    let first = fit.model.predict(&[2.5]).unwrap();
    let second = fit.model.predict(&[2.5]).unwrap();
    assert_eq!(first, second);
    assert_relative_eq!(first, 6.0, max_relative = 1e-9);
}

// ============================================================================
// Validated Prediction Tests
// ============================================================================

/// Test that result-level prediction agrees with the raw model.
#[test]
fn test_output_predict_matches_model() {
    let (features, labels) = affine_training(5);

    let fit = LeastSquares::new()
        .build()
        .unwrap()
        .fit(&features, &labels)
        .unwrap();

    assert_eq!(fit.predict(&[3.0]).unwrap(), fit.model.predict(&[3.0]).unwrap());

    let queries = vec![vec![0.0], vec![1.5]];
    assert_eq!(
        fit.predict_many(&queries).unwrap(),
        fit.model.predict_many(&queries).unwrap()
    );
}

/// Test that result-level prediction rejects malformed queries.
#[test]
fn test_output_predict_validates_query() {
    let (features, labels) = affine_training(5);

    let fit = LeastSquares::new()
        .build()
        .unwrap()
        .fit(&features, &labels)
        .unwrap();

    assert_eq!(
        fit.predict(&[1.0, 2.0]).unwrap_err(),
        KernelError::DimensionMismatch {
            expected: 1,
            got: 2,
        }
    );
    assert!(matches!(
        fit.predict(&[f64::NAN]),
        Err(KernelError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the summary and coefficient table of the Display output.
#[test]
fn test_output_display_summary() {
    let (features, labels) = affine_training(5);

    let fit = LeastSquares::new()
        .build()
        .unwrap()
        .fit(&features, &labels)
        .unwrap();

    let rendered = format!("{fit}");
    assert!(rendered.contains("Summary:"));
    assert!(rendered.contains("Samples: 5"));
    assert!(rendered.contains("Features: 1"));
    assert!(rendered.contains("intercept"));
    assert!(rendered.contains("x1"));
    // Coefficient estimates are rendered to two decimals
    assert!(rendered.contains("1.00"));
    assert!(rendered.contains("2.00"));
}

/// Test that diagnostics are appended to the Display output when present.
#[test]
fn test_output_display_includes_diagnostics() {
    let (features, labels) = affine_training(5);

    let with = LeastSquares::new()
        .return_diagnostics()
        .build()
        .unwrap()
        .fit(&features, &labels)
        .unwrap();
    assert!(format!("{with}").contains("Fit Diagnostics:"));

    let without = LeastSquares::new()
        .build()
        .unwrap()
        .fit(&features, &labels)
        .unwrap();
    assert!(!format!("{without}").contains("Fit Diagnostics:"));
}
