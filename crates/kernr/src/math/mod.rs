//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the kernels:
//! - Dot products (scalar and SIMD-specialized)
//! - Cholesky factorization and triangular solves
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Dot products with SIMD specializations.
pub mod dot;

/// Cholesky factorization and SPD solves.
pub mod cholesky;
