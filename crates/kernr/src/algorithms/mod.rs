//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the three deterministic kernels:
//! - Exact pair-sum lookup over an integer sequence
//! - Bounded binary search over a sorted integer sequence
//! - Closed-form least-squares fitting via the normal equations
//!
//! Each kernel is a pure, stateless function over fully materialized inputs.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Exact pair-sum lookup.
pub mod pair_sum;

/// Bounded binary search.
pub mod search;

/// Least-squares fitting and the fitted model type.
pub mod regression;
