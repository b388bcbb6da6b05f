//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the radix pipeline: stable per-bit partitioning,
//! pass scheduling with uniform-column skipping, two-word composition for
//! doubles, input validation, and result assembly.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Stable bit partitioning strategies.
pub mod partition;

/// Pipeline driver and pluggable rank pass.
pub mod executor;

/// Fail-fast input and configuration validation.
pub mod validator;

/// Result and summary types.
pub mod output;
