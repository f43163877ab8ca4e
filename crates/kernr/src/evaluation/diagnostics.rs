//! Diagnostic metrics for least-squares fit quality.
//!
//! ## Purpose
//!
//! This module computes goodness-of-fit metrics from a fitted model's
//! in-sample predictions: residual error magnitudes and the fraction of
//! label variance explained.
//!
//! ## Design notes
//!
//! * **Residual-based**: All metrics derive from `y - ŷ` and the labels.
//! * **Single pass**: Sums of squares are accumulated in one sweep.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Residual Metrics**: RMSE and MAE measure prediction error.
//! * **Goodness-of-Fit**: R² measures variance explained by the model.
//!
//! ## Invariants
//!
//! * RMSE, MAE, and residual SD are non-negative.
//! * R² <= 1 (R² = 1 is a perfect fit); reported as 0 when the label
//!   variance vanishes.
//!
//! ## Non-goals
//!
//! * This module does not perform the fitting itself.
//! * This module does not provide p-values or formal hypothesis tests.

// External dependencies
use num_traits::Float;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for assessing least-squares fit quality.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<T> {
    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Coefficient of determination (R²).
    pub r_squared: T,

    /// Residual standard deviation (sample SD of `y - ŷ`).
    pub residual_sd: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from labels and in-sample predictions.
    ///
    /// Both slices must have the same nonzero length; the caller guarantees
    /// this (the engine only invokes diagnostics on validated, fitted data).
    pub fn compute(labels: &[T], fitted: &[T]) -> Self {
        let n = labels.len();
        let n_t = T::from(n).unwrap_or_else(T::one);

        let mut sum_y = T::zero();
        let mut sum_y_sq = T::zero();
        let mut sum_r = T::zero();
        let mut sum_r_sq = T::zero();
        let mut sum_abs_r = T::zero();

        for (&yi, &fi) in labels.iter().zip(fitted.iter()) {
            let r = yi - fi;
            sum_y = sum_y + yi;
            sum_y_sq = sum_y_sq + yi * yi;
            sum_r = sum_r + r;
            sum_r_sq = sum_r_sq + r * r;
            sum_abs_r = sum_abs_r + r.abs();
        }

        let rmse = (sum_r_sq / n_t).sqrt();
        let mae = sum_abs_r / n_t;

        // R²: 1 - SS_res / SS_tot, with a guard against zero label variance
        let ss_tot = sum_y_sq - (sum_y * sum_y) / n_t;
        let r_squared = if ss_tot > T::from(1e-12).unwrap() * sum_y_sq.abs() {
            T::one() - sum_r_sq / ss_tot
        } else {
            T::zero()
        };

        let residual_sd = if n > 1 {
            let var = (sum_r_sq - (sum_r * sum_r) / n_t) / (n_t - T::one());
            var.max(T::zero()).sqrt()
        } else {
            T::zero()
        };

        Self {
            rmse,
            mae,
            r_squared,
            residual_sd,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Diagnostics:")?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  R^2:          {:.6}", self.r_squared)?;
        write!(f, "  Residual SD:  {:.6}", self.residual_sd)
    }
}
