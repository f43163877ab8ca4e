//! Least-squares fitting via the normal equations.
//!
//! ## Purpose
//!
//! This module provides the closed-form ordinary least-squares kernel: it
//! assembles the normal equations for an affine model and solves them by
//! Cholesky factorization, producing an immutable [`LinearModel`].
//!
//! ## Design notes
//!
//! * **Implicit design matrix**: The Gram matrix `XᵗX` and moment vector
//!   `Xᵗy` are accumulated in one pass over the samples; the `n × (m+1)`
//!   design matrix (ones column prepended) is never materialized.
//! * **Stable solve**: The system is solved by Cholesky factorization rather
//!   than explicit inversion, matching the closed-form result
//!   `θ = (XᵗX)⁻¹ Xᵗ y` for well-conditioned inputs.
//! * **Singularity**: A Gram matrix that is not positive definite (collinear
//!   columns, or fewer samples than coefficients) aborts the fit with
//!   [`KernelError::SingularMatrix`] instead of returning NaN.
//!
//! ## Key concepts
//!
//! * **Model lifecycle**: Created by fitting, read-only for every prediction,
//!   no mutation API.
//! * **Dimension contract**: Every query must have exactly the training
//!   width; a mismatch is an error, never a silent truncation.
//!
//! ## Invariants
//!
//! * `coefficients.len() == m + 1`; `coefficients[0]` is the intercept.
//! * Fitting and prediction are deterministic for identical inputs.
//!
//! ## Non-goals
//!
//! * This module does not validate raw training inputs (engine responsibility).
//! * This module does not perform regularization or iterative refinement.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::cholesky::{cholesky_factorize, cholesky_solve};
use crate::math::dot::DotKernel;
use crate::primitives::errors::KernelError;

// ============================================================================
// LinearModel
// ============================================================================

/// Fitted affine model: an intercept followed by one weight per feature.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel<T: Float> {
    /// Coefficient vector `[intercept, w_1, ..., w_m]`.
    coefficients: Vec<T>,
}

impl<T: Float> LinearModel<T> {
    /// Wrap a coefficient vector produced by a fit.
    pub(crate) fn new(coefficients: Vec<T>) -> Self {
        debug_assert!(!coefficients.is_empty());
        Self { coefficients }
    }

    /// Full coefficient vector, intercept first.
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Intercept term (the coefficient of the implicit ones column).
    pub fn intercept(&self) -> T {
        self.coefficients[0]
    }

    /// Feature weights, excluding the intercept.
    pub fn weights(&self) -> &[T] {
        &self.coefficients[1..]
    }

    /// Number of features the model was fitted on.
    pub fn num_features(&self) -> usize {
        self.coefficients.len() - 1
    }
}

impl<T: Float + DotKernel> LinearModel<T> {
    /// Predict the response for a single feature vector.
    ///
    /// Evaluates `θ₀ + Σ θₖ·xₖ`.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::DimensionMismatch`] when the query length
    /// differs from the training width.
    pub fn predict(&self, features: &[T]) -> Result<T, KernelError> {
        let expected = self.num_features();
        if features.len() != expected {
            return Err(KernelError::DimensionMismatch {
                expected,
                got: features.len(),
            });
        }

        Ok(self.intercept() + T::dot(self.weights(), features))
    }

    /// Predict the response for each query in a batch.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::DimensionMismatch`] on the first query whose
    /// length differs from the training width.
    pub fn predict_many(&self, queries: &[Vec<T>]) -> Result<Vec<T>, KernelError> {
        queries.iter().map(|q| self.predict(q)).collect()
    }
}

// ============================================================================
// Normal-Equation Fit
// ============================================================================

/// Fit an affine model by ordinary least squares.
///
/// Accumulates the Gram matrix `XᵗX` and moment vector `Xᵗy` over the
/// samples, then solves `XᵗX · θ = Xᵗ y` by Cholesky factorization. Inputs
/// are assumed pre-validated: non-empty, matched lengths, uniform row width,
/// finite values.
///
/// Rows of width zero are permitted and degenerate to an intercept-only fit
/// (the label mean).
///
/// # Errors
///
/// Returns [`KernelError::SingularMatrix`] when the Gram matrix is not
/// positive definite to within `tolerance` (relative to its largest diagonal
/// entry): collinear feature columns, or fewer samples than coefficients.
pub fn fit_normal_equations<T: Float>(
    features: &[Vec<T>],
    labels: &[T],
    tolerance: T,
) -> Result<LinearModel<T>, KernelError> {
    let m = features.first().map_or(0, Vec::len);
    let p = m + 1;

    // Lower triangle of X^T X and the full X^T y, accumulated per sample
    let mut gram = vec![T::zero(); p * p];
    let mut moment = vec![T::zero(); p];

    for (row, &label) in features.iter().zip(labels.iter()) {
        gram[0] = gram[0] + T::one();
        moment[0] = moment[0] + label;

        for j in 1..p {
            let zj = row[j - 1];
            gram[j * p] = gram[j * p] + zj;
            moment[j] = moment[j] + zj * label;

            for k in 1..=j {
                gram[j * p + k] = gram[j * p + k] + zj * row[k - 1];
            }
        }
    }

    match cholesky_factorize(&mut gram, p, tolerance) {
        Ok(()) => Ok(LinearModel::new(cholesky_solve(&gram, p, &moment))),
        Err(pivot) => Err(KernelError::SingularMatrix { pivot }),
    }
}
