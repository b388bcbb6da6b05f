//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure key mathematics: order-preserving bit
//! transforms from numeric types to unsigned 32-bit keys, and single-pass key
//! statistics (maximum, bit-column counts, minimal bit width).
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Key encodings: numeric values to sortable unsigned keys.
pub mod encode;

/// Key statistics: maximum, bit-column counts, bit width.
pub mod stats;
