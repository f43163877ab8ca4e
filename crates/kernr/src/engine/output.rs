//! Output types for least-squares fitting.
//!
//! ## Purpose
//!
//! This module defines the `RegressionFit` struct which encapsulates the
//! outputs of a least-squares fit: the fitted model plus any requested
//! in-sample predictions, residuals, and diagnostics.
//!
//! ## Design notes
//!
//! * **Memory efficiency**: All optional outputs use `Option<Vec<T>>`.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Key concepts
//!
//! * **Optional outputs**: Vectors are only populated when requested on the
//!   builder.
//! * **Model access**: The fitted [`LinearModel`] is carried by value and
//!   remains usable after the fit result is dropped.
//! * **Validated prediction**: `predict`/`predict_many` check query width and
//!   finiteness before delegating to the model.
//!
//! ## Invariants
//!
//! * All populated vectors have length equal to the number of samples.
//! * The model's coefficient count is the feature width plus one.
//!
//! ## Non-goals
//!
//! * This module does not perform the fitting itself.
//! * This module does not provide serialization/deserialization logic.

// External dependencies
use num_traits::Float;
use std::fmt::{self, Display, Formatter};

// Internal dependencies
use crate::algorithms::regression::LinearModel;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::dot::DotKernel;
use crate::primitives::errors::KernelError;

// ============================================================================
// Result Structure
// ============================================================================

/// Output of a least-squares fit.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionFit<T: Float> {
    /// The fitted model, reusable read-only for predictions.
    pub model: LinearModel<T>,

    /// Number of training samples.
    pub samples: usize,

    /// In-sample predictions `ŷ`, if requested.
    pub fitted: Option<Vec<T>>,

    /// Residuals `y - ŷ`, if requested.
    pub residuals: Option<Vec<T>>,

    /// Diagnostic metrics (RMSE, R², etc.), if requested.
    pub diagnostics: Option<Diagnostics<T>>,

    /// Pivot tolerance used by the solve.
    pub tolerance: T,
}

impl<T: Float> RegressionFit<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Check if residuals were computed.
    pub fn has_residuals(&self) -> bool {
        self.residuals.is_some()
    }

    /// Check if diagnostics were computed.
    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics.is_some()
    }

    /// Number of features the model was fitted on.
    pub fn num_features(&self) -> usize {
        self.model.num_features()
    }
}

// ============================================================================
// Prediction Methods
// ============================================================================

impl<T: Float + DotKernel> RegressionFit<T> {
    /// Predict the response for a single query, validating it first.
    ///
    /// Unlike [`LinearModel::predict`], the query is checked for width and
    /// finiteness before evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::DimensionMismatch`] when the query length
    /// differs from the training width, or
    /// [`KernelError::InvalidNumericValue`] when it contains NaN or infinite
    /// values.
    pub fn predict(&self, query: &[T]) -> Result<T, KernelError> {
        Validator::validate_query(query, self.num_features())?;
        self.model.predict(query)
    }

    /// Predict the response for each query in a batch, validating each.
    ///
    /// # Errors
    ///
    /// Returns the first validation error encountered.
    pub fn predict_many(&self, queries: &[Vec<T>]) -> Result<Vec<T>, KernelError> {
        queries.iter().map(|q| self.predict(q)).collect()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for RegressionFit<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Samples: {}", self.samples)?;
        writeln!(f, "  Features: {}", self.num_features())?;
        writeln!(f)?;

        writeln!(f, "Coefficients:")?;
        writeln!(f, "  {:>9} {:>12}", "Term", "Estimate")?;
        writeln!(f, "  {}", "-".repeat(22))?;
        writeln!(f, "  {:>9} {:>12.2}", "intercept", self.model.intercept())?;
        for (k, &w) in self.model.weights().iter().enumerate() {
            writeln!(f, "  {:>9} {:>12.2}", format!("x{}", k + 1), w)?;
        }

        if let Some(ref diagnostics) = self.diagnostics {
            writeln!(f)?;
            write!(f, "{diagnostics}")?;
        }

        Ok(())
    }
}
