//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer handles the boundary around the algorithm kernels: input
//! validation before fitting and the result types returned to callers.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

/// Result types.
pub mod output;
