//! Tests for diagnostic metrics computation.
//!
//! These tests verify the fit-quality metrics derived from residuals:
//! - RMSE, MAE, R², and residual SD against hand-computed values
//! - The perfect-fit and constant-label special cases
//! - Single-sample behavior
//! - Display formatting
//!
//! ## Test Organization
//!
//! 1. **Basic Metrics** - Hand-computed RMSE, MAE, R²
//! 2. **Special Cases** - Perfect fit, zero label variance, single sample
//! 3. **Display** - Formatting output

use approx::assert_relative_eq;

use kernr::prelude::*;

// ============================================================================
// Basic Metrics Tests
// ============================================================================

/// Test all metrics against hand-computed values.
///
/// For y = [0, 2, 4] and fitted = [0, 1, 3] the residuals are [0, 1, 1]:
/// RMSE = sqrt(2/3), MAE = 2/3, SS_tot = 8, R² = 1 - 2/8 = 0.75, and the
/// sample SD of the residuals is sqrt(1/3).
#[test]
fn test_diagnostics_hand_computed() {
    let labels = [0.0f64, 2.0, 4.0];
    let fitted = [0.0f64, 1.0, 3.0];

    let diagnostics = Diagnostics::compute(&labels, &fitted);

    assert_relative_eq!(diagnostics.rmse, (2.0f64 / 3.0).sqrt(), epsilon = 1e-12);
    assert_relative_eq!(diagnostics.mae, 2.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(diagnostics.r_squared, 0.75, epsilon = 1e-12);
    assert_relative_eq!(diagnostics.residual_sd, (1.0f64 / 3.0).sqrt(), epsilon = 1e-12);
}

/// Test that metrics are invariant to a common shift of labels and fit.
#[test]
fn test_diagnostics_shift_invariant_errors() {
    let labels = [0.0f64, 2.0, 4.0];
    let fitted = [0.0f64, 1.0, 3.0];

    let shifted_labels: Vec<f64> = labels.iter().map(|y| y + 100.0).collect();
    let shifted_fitted: Vec<f64> = fitted.iter().map(|f| f + 100.0).collect();

    let base = Diagnostics::compute(&labels, &fitted);
    let shifted = Diagnostics::compute(&shifted_labels, &shifted_fitted);

    assert_relative_eq!(base.rmse, shifted.rmse, epsilon = 1e-9);
    assert_relative_eq!(base.mae, shifted.mae, epsilon = 1e-9);
    assert_relative_eq!(base.residual_sd, shifted.residual_sd, epsilon = 1e-9);
}

// ============================================================================
// Special Case Tests
// ============================================================================

/// Test the perfect fit: zero errors and R² = 1.
#[test]
fn test_diagnostics_perfect_fit() {
    let labels = [1.0f64, 2.0, 3.0, 4.0];

    let diagnostics = Diagnostics::compute(&labels, &labels);

    assert_relative_eq!(diagnostics.rmse, 0.0, epsilon = 1e-12);
    assert_relative_eq!(diagnostics.mae, 0.0, epsilon = 1e-12);
    assert_relative_eq!(diagnostics.r_squared, 1.0, epsilon = 1e-12);
    assert_relative_eq!(diagnostics.residual_sd, 0.0, epsilon = 1e-12);
}

/// Test that zero label variance reports R² as 0 rather than dividing by zero.
#[test]
fn test_diagnostics_constant_labels() {
    let labels = [5.0f64, 5.0, 5.0];
    let fitted = [5.0f64, 5.0, 5.0];

    let diagnostics = Diagnostics::compute(&labels, &fitted);

    assert_eq!(diagnostics.r_squared, 0.0);
    assert_relative_eq!(diagnostics.rmse, 0.0, epsilon = 1e-12);
}

/// Test single-sample metrics: error magnitudes with a zero residual SD.
#[test]
fn test_diagnostics_single_sample() {
    let diagnostics = Diagnostics::compute(&[5.0f64], &[4.0f64]);

    assert_relative_eq!(diagnostics.rmse, 1.0, epsilon = 1e-12);
    assert_relative_eq!(diagnostics.mae, 1.0, epsilon = 1e-12);
    assert_eq!(diagnostics.residual_sd, 0.0);
}

/// Test single-precision computation through the f32 path.
#[test]
fn test_diagnostics_f32() {
    let labels = [0.0f32, 2.0, 4.0];
    let fitted = [0.0f32, 1.0, 3.0];

    let diagnostics = Diagnostics::compute(&labels, &fitted);

    assert_relative_eq!(diagnostics.mae, 2.0f32 / 3.0, epsilon = 1e-6);
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test that the Display output names each metric.
#[test]
fn test_diagnostics_display() {
    let diagnostics = Diagnostics::compute(&[0.0f64, 2.0, 4.0], &[0.0f64, 1.0, 3.0]);

    let rendered = format!("{diagnostics}");
    assert!(rendered.contains("Fit Diagnostics:"));
    assert!(rendered.contains("RMSE:"));
    assert!(rendered.contains("MAE:"));
    assert!(rendered.contains("R^2:"));
    assert!(rendered.contains("Residual SD:"));
}
