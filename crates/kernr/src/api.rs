//! High-level API for the algorithm kernels.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for configuring least-squares fits, and direct re-exports of the
//! one-shot search kernels.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//! * **One-shot kernels**: `find_pair` and `binary_search` take no
//!   configuration, so no builder applies; they are exposed as plain
//!   functions.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LeastSquaresBuilder`] via `LeastSquares::new()`.
//! 2. Chain configuration methods (`.tolerance()`, `.return_diagnostics()`, ...).
//! 3. Call `.build()` to obtain a validated [`LeastSquaresFitter`].
//! 4. Call `.fit(&features, &labels)` to obtain a [`RegressionFit`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::dot::DotKernel;

// Publicly re-exported types
pub use crate::algorithms::pair_sum::find_pair;
pub use crate::algorithms::regression::{fit_normal_equations, LinearModel};
pub use crate::algorithms::search::binary_search;
pub use crate::engine::output::RegressionFit;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::KernelError;

// ============================================================================
// Least-Squares Builder
// ============================================================================

/// Fluent builder for configuring a least-squares fit.
#[derive(Debug, Clone)]
pub struct LeastSquaresBuilder<T> {
    /// Relative pivot tolerance for the Cholesky solve.
    pub tolerance: Option<T>,

    /// Enable fit-quality diagnostics.
    pub return_diagnostics: Option<bool>,

    /// Return residuals `y - ŷ`.
    pub compute_residuals: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for LeastSquaresBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LeastSquaresBuilder<T> {
    /// Create a new builder with default parameters.
    pub fn new() -> Self {
        Self {
            tolerance: None,
            return_diagnostics: None,
            compute_residuals: None,
            duplicate_param: None,
        }
    }

    /// Set the relative pivot tolerance for singularity detection.
    ///
    /// Defaults to `1e-12`.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param.get_or_insert("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Request fit-quality diagnostics (RMSE, MAE, R², residual SD).
    pub fn return_diagnostics(mut self) -> Self {
        if self.return_diagnostics.is_some() {
            self.duplicate_param.get_or_insert("return_diagnostics");
        }
        self.return_diagnostics = Some(true);
        self
    }

    /// Request residuals `y - ŷ` alongside the fitted model.
    pub fn return_residuals(mut self) -> Self {
        if self.compute_residuals.is_some() {
            self.duplicate_param.get_or_insert("return_residuals");
        }
        self.compute_residuals = Some(true);
        self
    }

    /// Build the fitter, validating the configuration.
    pub fn build(self) -> Result<LeastSquaresFitter<T>, KernelError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate tolerance
        if let Some(tolerance) = self.tolerance {
            Validator::validate_tolerance(tolerance)?;
        }

        Ok(LeastSquaresFitter {
            tolerance: self.tolerance.unwrap_or_else(|| T::from(1e-12).unwrap()),
            return_diagnostics: self.return_diagnostics.unwrap_or(false),
            compute_residuals: self.compute_residuals.unwrap_or(false),
        })
    }
}

// ============================================================================
// Least-Squares Fitter
// ============================================================================

/// Validated least-squares fitter.
#[derive(Debug)]
pub struct LeastSquaresFitter<T: Float> {
    tolerance: T,
    return_diagnostics: bool,
    compute_residuals: bool,
}

impl<T: Float + DotKernel> LeastSquaresFitter<T> {
    /// Fit an affine model to the provided training data.
    ///
    /// `features` holds one row per sample, all of the same width `m`;
    /// `labels` holds one response per sample. The fitted model carries
    /// `m + 1` coefficients, intercept first.
    ///
    /// In-sample predictions are populated on the result whenever residuals
    /// or diagnostics are requested.
    ///
    /// # Errors
    ///
    /// * [`KernelError::EmptyInput`], [`KernelError::MismatchedInputs`],
    ///   [`KernelError::DimensionMismatch`], or
    ///   [`KernelError::InvalidNumericValue`] when the training data violates
    ///   its contract.
    /// * [`KernelError::SingularMatrix`] when the Gram matrix is not positive
    ///   definite (collinear features, or fewer samples than coefficients).
    pub fn fit(&self, features: &[Vec<T>], labels: &[T]) -> Result<RegressionFit<T>, KernelError> {
        Validator::validate_training_inputs(features, labels)?;

        let model = fit_normal_equations(features, labels, self.tolerance)?;

        // Optional in-sample predictions and derived outputs
        let wants_fitted = self.compute_residuals || self.return_diagnostics;
        let fitted = if wants_fitted {
            let mut predictions = Vec::with_capacity(features.len());
            for row in features {
                predictions.push(model.predict(row)?);
            }
            Some(predictions)
        } else {
            None
        };

        let residuals = match (self.compute_residuals, &fitted) {
            (true, Some(predictions)) => Some(
                labels
                    .iter()
                    .zip(predictions.iter())
                    .map(|(&y, &p)| y - p)
                    .collect(),
            ),
            _ => None,
        };

        let diagnostics = match (self.return_diagnostics, &fitted) {
            (true, Some(predictions)) => Some(Diagnostics::compute(labels, predictions)),
            _ => None,
        };

        Ok(RegressionFit {
            model,
            samples: features.len(),
            fitted,
            residuals,
            diagnostics,
            tolerance: self.tolerance,
        })
    }
}
