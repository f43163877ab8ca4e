//! Error types for kernel operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during kernel
//! invocation, covering input validation, parameter constraints, and
//! numerical failure of the least-squares solve.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Deferred**: Builder misconfiguration is caught and stored until `build()`.
//! * **Terminal outcomes are not errors**: a search that finds no match
//!   returns `Option::None` from the kernel itself; only contract violations
//!   and numerical failure are represented here.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, mismatched lengths, non-finite values.
//! 2. **Dimension contract**: Every feature vector must match the training width.
//! 3. **Numerical failure**: A Gram matrix that is not positive definite.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for kernel operations.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Training arrays are empty; fitting requires at least one sample.
    EmptyInput,

    /// Feature rows and labels must have the same number of elements.
    MismatchedInputs {
        /// Number of feature rows provided.
        samples: usize,
        /// Number of labels provided.
        labels: usize,
    },

    /// A feature vector's length disagrees with the training set's width.
    DimensionMismatch {
        /// Expected number of features per vector.
        expected: usize,
        /// Number of features actually provided.
        got: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Solve tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// The Gram matrix is not positive definite; the least-squares solution
    /// is not unique (collinear feature columns, or fewer samples than
    /// coefficients).
    SingularMatrix {
        /// Pivot column at which the Cholesky factorization broke down.
        pivot: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for KernelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { samples, labels } => {
                write!(
                    f,
                    "Length mismatch: {samples} feature rows, {labels} labels"
                )
            }
            Self::DimensionMismatch { expected, got } => {
                write!(
                    f,
                    "Dimension mismatch: expected {expected} features, got {got}"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::SingularMatrix { pivot } => {
                write!(
                    f,
                    "Singular matrix: Gram matrix is not positive definite at pivot column {pivot}"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for KernelError {}
