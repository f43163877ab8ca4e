//! # kernr — Deterministic Algorithm Kernels for Rust
//!
//! Three independent, stateless kernels that recur across classic
//! programming exercises, implemented once with precise contracts:
//!
//! - **Pair-sum lookup** — find one pair of positions whose values sum to a
//!   target, in a single hash-map scan.
//! - **Bounded binary search** — locate an exact match in a sorted sequence
//!   or report absence.
//! - **Least-squares regression** — fit an affine model by the closed-form
//!   normal equations and predict on new inputs.
//!
//! The kernels share no state and have no ordering dependency; each call is
//! a finite, bounded computation over its own inputs, safe to invoke from
//! any number of threads.
//!
//! ## Quick Start
//!
//! ### Search kernels
//!
//! ```rust
//! use kernr::prelude::*;
//!
//! // One pair of positions summing to the target, earliest-seen index first
//! assert_eq!(find_pair(&[2, 7, 11, 15], 9), Some((0, 1)));
//!
//! // Exact match in a sorted sequence
//! assert_eq!(binary_search(&[1, 3, 5, 7, 9, 11], 7), Some(3));
//! assert_eq!(binary_search(&[1, 3, 5, 7, 9, 11], 4), None);
//! ```
//!
//! Absence is a normal outcome, not an error: both kernels return
//! `Option::None` when no match exists, and on an empty sequence.
//!
//! ### Least-squares regression
//!
//! ```rust
//! use kernr::prelude::*;
//!
//! // y = 1 + 2x, exactly
//! let features: Vec<Vec<f64>> = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]];
//! let labels = vec![3.0, 5.0, 7.0, 9.0];
//!
//! let fit = LeastSquares::new()
//!     .return_diagnostics()
//!     .build()?
//!     .fit(&features, &labels)?;
//!
//! assert!((fit.model.intercept() - 1.0).abs() < 1e-6);
//! assert!((fit.model.weights()[0] - 2.0).abs() < 1e-6);
//!
//! // The model is immutable after fitting and reusable for any number of queries
//! let prediction = fit.model.predict(&[5.0])?;
//! assert!((prediction - 11.0).abs() < 1e-6);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Fitting returns a `Result<RegressionFit<T>, KernelError>`. A Gram matrix
//! that is not positive definite — collinear feature columns, or fewer
//! samples than coefficients — fails with `SingularMatrix` rather than
//! producing NaN:
//!
//! ```rust
//! use kernr::prelude::*;
//!
//! // Two collinear columns: no unique least-squares solution
//! let features = vec![vec![1.0, 2.0], vec![2.0, 4.0], vec![3.0, 6.0]];
//! let labels = vec![1.0, 2.0, 3.0];
//!
//! let result = LeastSquares::new().build()?.fit(&features, &labels);
//! assert!(matches!(result, Err(KernelError::SingularMatrix { .. })));
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! Every failure mode is a well-defined return with a named cause; the
//! kernels never log, retry, or partially recover internally.
//!
//! ## References
//!
//! - Golub, G. H. & Van Loan, C. F. (2013). "Matrix Computations", 4th ed.
//!   (normal equations, Cholesky factorization)
//! - Cormen, T. H. et al. (2009). "Introduction to Algorithms", 3rd ed.
//!   (binary search)

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - the three kernels.
mod algorithms;

// Layer 4: Evaluation - fit-quality diagnostics.
mod evaluation;

// Layer 5: Engine - validation and result types.
mod engine;

// High-level fluent API.
mod api;

// Standard kernr prelude.
pub mod prelude {
    pub use crate::api::{
        binary_search, find_pair, Diagnostics, KernelError, LeastSquaresBuilder as LeastSquares,
        LeastSquaresFitter, LinearModel, RegressionFit,
    };
    pub use crate::math::dot::DotKernel;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
