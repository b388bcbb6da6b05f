//! Fail-fast validation for argsort configuration and buffers.
//!
//! ## Purpose
//!
//! This module checks caller-supplied configuration and order buffers before
//! the engine allocates or mutates anything: stride bounds, order-buffer
//! length, preset-entry ranges, and duplicate builder parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Before mutation**: Preset order entries are checked in a read-only
//!   pass so a rejected buffer is returned to the caller untouched.
//! * **Bijection required**: A preset buffer must be a permutation of the
//!   index-base-adjusted range. A duplicate entry would drive the
//!   single-sweep partition cursors out of bounds, so duplicates are
//!   rejected here instead of trusted downstream.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic; caller buffers are never mutated.
//! * A validated preset buffer normalizes to a bijection over `0..n`.
//!
//! ## Non-goals
//!
//! * This module does not sort or transform anything.

// Internal dependencies
use crate::primitives::errors::ArgsortError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for argsort configuration and buffers.
///
/// Provides static methods returning `Result<(), ArgsortError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the element stride.
    pub fn validate_stride(stride: usize) -> Result<(), ArgsortError> {
        if stride < 1 {
            return Err(ArgsortError::InvalidStride(stride));
        }
        Ok(())
    }

    /// Validate that the caller's order buffer matches the element count.
    pub fn validate_order_buffer(order_len: usize, n: usize) -> Result<(), ArgsortError> {
        if order_len != n {
            return Err(ArgsortError::MismatchedOrderBuffer { order_len, n });
        }
        Ok(())
    }

    /// Validate preset order entries against the index base, read-only.
    ///
    /// Every entry must lie in `[base, base + n)` and appear exactly once, so
    /// the normalized buffer is a bijection over `0..n`.
    pub fn validate_preset_order(
        order: &[usize],
        base: usize,
        n: usize,
    ) -> Result<(), ArgsortError> {
        let mut seen = vec![false; n];
        for (position, &entry) in order.iter().enumerate() {
            if entry < base || entry - base >= n {
                return Err(ArgsortError::InvalidOrderEntry {
                    position,
                    entry,
                    base,
                    n,
                });
            }
            if seen[entry - base] {
                return Err(ArgsortError::DuplicateOrderEntry { position, entry });
            }
            seen[entry - base] = true;
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ArgsortError> {
        if let Some(param) = duplicate_param {
            return Err(ArgsortError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
