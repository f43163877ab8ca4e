//! Dot products for prediction and matrix assembly.
//!
//! ## Purpose
//!
//! This module provides the inner-product primitive used by model prediction
//! and by the normal-equation assembly, with a generic scalar path and
//! SIMD-optimized specializations for `f32` and `f64`.
//!
//! ## Design notes
//!
//! * **Generics**: The scalar path works for any `Float` type.
//! * **Specialization**: `f64` uses 2-lane and `f32` uses 8-lane SIMD accumulation.
//! * **Dispatch**: The [`DotKernel`] trait selects the best path at compile time.
//!
//! ## Invariants
//!
//! * Both slices must have the same length (the shorter length is used).
//! * Accumulation order is fixed, so results are deterministic per type.
//!
//! ## Non-goals
//!
//! * This module does not validate input dimensions.
//! * This module does not provide BLAS-style matrix-matrix products.

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x2};

// ============================================================================
// Generic Accumulation
// ============================================================================

/// Scalar dot product (generic Float).
#[inline]
pub fn dot_scalar<T: Float>(a: &[T], b: &[T]) -> T {
    let n = a.len().min(b.len());

    let mut sum = T::zero();
    for i in 0..n {
        sum = sum + a[i] * b[i];
    }

    sum
}

// ============================================================================
// Specialized Accumulation (SIMD)
// ============================================================================

/// SIMD-optimized dot product (f64).
#[inline]
pub fn dot_simd_f64(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());

    let mut i = 0;
    let mut acc = f64x2::splat(0.0);

    unsafe {
        while i + 2 <= n {
            let av = f64x2::new([*a.get_unchecked(i), *a.get_unchecked(i + 1)]);
            let bv = f64x2::new([*b.get_unchecked(i), *b.get_unchecked(i + 1)]);

            acc += av * bv;

            i += 2;
        }
    }

    let mut sum = acc.reduce_add();

    unsafe {
        while i < n {
            sum += *a.get_unchecked(i) * *b.get_unchecked(i);
            i += 1;
        }
    }

    sum
}

/// SIMD-optimized dot product (f32).
#[inline]
pub fn dot_simd_f32(a: &[f32], b: &[f32]) -> f32 {
    let n = a.len().min(b.len());

    let mut i = 0;
    let mut acc = f32x8::splat(0.0);

    unsafe {
        while i + 8 <= n {
            let av = f32x8::new([
                *a.get_unchecked(i),
                *a.get_unchecked(i + 1),
                *a.get_unchecked(i + 2),
                *a.get_unchecked(i + 3),
                *a.get_unchecked(i + 4),
                *a.get_unchecked(i + 5),
                *a.get_unchecked(i + 6),
                *a.get_unchecked(i + 7),
            ]);
            let bv = f32x8::new([
                *b.get_unchecked(i),
                *b.get_unchecked(i + 1),
                *b.get_unchecked(i + 2),
                *b.get_unchecked(i + 3),
                *b.get_unchecked(i + 4),
                *b.get_unchecked(i + 5),
                *b.get_unchecked(i + 6),
                *b.get_unchecked(i + 7),
            ]);

            acc += av * bv;

            i += 8;
        }
    }

    let mut sum = acc.reduce_add();

    unsafe {
        while i < n {
            sum += *a.get_unchecked(i) * *b.get_unchecked(i);
            i += 1;
        }
    }

    sum
}

// ============================================================================
// Dispatch Trait
// ============================================================================

/// Trait for dispatching between generic and specialized dot products.
///
/// Types default to the scalar path; `f32` and `f64` override it with their
/// SIMD-optimized implementations.
pub trait DotKernel: Float {
    /// Compute the dot product of two equal-length slices.
    #[inline]
    fn dot(a: &[Self], b: &[Self]) -> Self {
        dot_scalar(a, b)
    }
}

impl DotKernel for f64 {
    #[inline]
    fn dot(a: &[f64], b: &[f64]) -> f64 {
        dot_simd_f64(a, b)
    }
}

impl DotKernel for f32 {
    #[inline]
    fn dot(a: &[f32], b: &[f32]) -> f32 {
        dot_simd_f32(a, b)
    }
}
