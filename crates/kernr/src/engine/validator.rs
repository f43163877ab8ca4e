//! Input validation for least-squares configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for solver parameters and
//! training/query data. It checks requirements such as matched lengths,
//! uniform feature widths, and finite values.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Dimension contract**: All feature rows must share one width; queries
//!   must match it exactly.
//! * **Finite checks**: Training and query data must be free of NaN/Inf.
//! * **Rank is not checked here**: Rank deficiency (including `n < m + 1`)
//!   surfaces from the solve as `SingularMatrix`, keeping the failure
//!   deterministic and exact.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the fitting itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KernelError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for least-squares configuration and input data.
///
/// Provides static methods for validating solver parameters and input data.
/// All methods return `Result<(), KernelError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate training inputs for a least-squares fit.
    pub fn validate_training_inputs<T: Float>(
        features: &[Vec<T>],
        labels: &[T],
    ) -> Result<(), KernelError> {
        // Check 1: Non-empty arrays
        if features.is_empty() || labels.is_empty() {
            return Err(KernelError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = features.len();
        if n != labels.len() {
            return Err(KernelError::MismatchedInputs {
                samples: n,
                labels: labels.len(),
            });
        }

        // Check 3: Uniform feature width
        let width = features[0].len();
        for row in features.iter() {
            if row.len() != width {
                return Err(KernelError::DimensionMismatch {
                    expected: width,
                    got: row.len(),
                });
            }
        }

        // Check 4: All values finite
        for (i, row) in features.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                if !v.is_finite() {
                    return Err(KernelError::InvalidNumericValue(format!(
                        "x[{}][{}]={}",
                        i,
                        j,
                        v.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }
        for (i, &v) in labels.iter().enumerate() {
            if !v.is_finite() {
                return Err(KernelError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a prediction query against the fitted width.
    pub fn validate_query<T: Float>(features: &[T], expected: usize) -> Result<(), KernelError> {
        if features.len() != expected {
            return Err(KernelError::DimensionMismatch {
                expected,
                got: features.len(),
            });
        }

        for (j, &v) in features.iter().enumerate() {
            if !v.is_finite() {
                return Err(KernelError::InvalidNumericValue(format!(
                    "query[{}]={}",
                    j,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the solve tolerance.
    pub fn validate_tolerance<T: Float>(tolerance: T) -> Result<(), KernelError> {
        if tolerance <= T::zero() || !tolerance.is_finite() {
            return Err(KernelError::InvalidTolerance(
                tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Check that no builder parameter was configured twice.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), KernelError> {
        match duplicate {
            Some(parameter) => Err(KernelError::DuplicateParameter { parameter }),
            None => Ok(()),
        }
    }
}
