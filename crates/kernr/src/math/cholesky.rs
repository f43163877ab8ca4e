//! Cholesky factorization for symmetric positive definite systems.
//!
//! ## Purpose
//!
//! This module provides the dense linear solve behind the normal-equation
//! fit: a lower-triangular Cholesky factorization with a pivot tolerance,
//! followed by forward and back substitution.
//!
//! ## Design notes
//!
//! * **Stability**: Cholesky on the Gram matrix avoids explicit inversion and
//!   unpivoted Gaussian elimination.
//! * **Breakdown detection**: A pivot at or below `tolerance * max_diagonal`
//!   reports the offending column instead of producing NaN.
//! * **Storage**: Matrices are dense, row-major `&[T]` slices of length `dim * dim`.
//! * **Generics**: All routines are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Factorization**: `A = L Lᵗ` with `L` lower triangular.
//! * **Relative pivot threshold**: Scaling by the largest diagonal entry keeps
//!   the tolerance meaningful across input magnitudes.
//!
//! ## Invariants
//!
//! * The input matrix must be symmetric; only the lower triangle is read.
//! * After success, the lower triangle of the buffer holds `L`.
//!
//! ## Non-goals
//!
//! * This module does not assemble the Gram matrix.
//! * This module does not provide pivoted or rank-revealing factorizations.

// External dependencies
use num_traits::Float;

// ============================================================================
// Factorization
// ============================================================================

/// Factorize a symmetric positive definite matrix in place as `L Lᵗ`.
///
/// On success the lower triangle of `matrix` holds `L`; entries above the
/// diagonal are left untouched and must not be read afterwards.
///
/// # Errors
///
/// Returns `Err(column)` when the pivot at `column` falls at or below
/// `tolerance * max_diagonal`, i.e., the matrix is not positive definite to
/// within the tolerance.
pub fn cholesky_factorize<T: Float>(
    matrix: &mut [T],
    dim: usize,
    tolerance: T,
) -> Result<(), usize> {
    debug_assert_eq!(matrix.len(), dim * dim);

    // Relative pivot threshold, scaled by the largest diagonal entry
    let mut scale = T::zero();
    for j in 0..dim {
        let d = matrix[j * dim + j];
        if d > scale {
            scale = d;
        }
    }
    let threshold = tolerance * scale;

    for j in 0..dim {
        // Pivot: a_jj - sum_k l_jk^2
        let mut d = matrix[j * dim + j];
        for k in 0..j {
            let l_jk = matrix[j * dim + k];
            d = d - l_jk * l_jk;
        }

        if d <= threshold {
            return Err(j);
        }

        let l_jj = d.sqrt();
        matrix[j * dim + j] = l_jj;

        // Column below the pivot: l_ij = (a_ij - sum_k l_ik * l_jk) / l_jj
        for i in (j + 1)..dim {
            let mut s = matrix[i * dim + j];
            for k in 0..j {
                s = s - matrix[i * dim + k] * matrix[j * dim + k];
            }
            matrix[i * dim + j] = s / l_jj;
        }
    }

    Ok(())
}

// ============================================================================
// Triangular Solves
// ============================================================================

/// Solve `L Lᵗ x = rhs` given a factor produced by [`cholesky_factorize`].
///
/// Performs a forward substitution with `L` followed by a back substitution
/// with `Lᵗ`, reading only the lower triangle of `factor`.
pub fn cholesky_solve<T: Float>(factor: &[T], dim: usize, rhs: &[T]) -> Vec<T> {
    debug_assert_eq!(factor.len(), dim * dim);
    debug_assert_eq!(rhs.len(), dim);

    // Forward: L z = rhs
    let mut x = rhs.to_vec();
    for i in 0..dim {
        let mut s = x[i];
        for k in 0..i {
            s = s - factor[i * dim + k] * x[k];
        }
        x[i] = s / factor[i * dim + i];
    }

    // Backward: Lᵗ x = z
    for i in (0..dim).rev() {
        let mut s = x[i];
        for k in (i + 1)..dim {
            s = s - factor[k * dim + i] * x[k];
        }
        x[i] = s / factor[i * dim + i];
    }

    x
}
