//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-fit quality assessment: residual-based metrics
//! for a fitted least-squares model.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit-quality metrics.
pub mod diagnostics;
