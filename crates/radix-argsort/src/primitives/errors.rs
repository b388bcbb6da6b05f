//! Error types for argsort operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring or
//! running an index sort, covering input validation, order-buffer handling,
//! and internal invariant checks.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Two classes**: Caller mistakes are ordinary recoverable errors; a broken
//!   partition invariant is a defect report, never caused by input data.
//! * **No-std**: The type is `core`-only; no allocation is needed to build it.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Configuration validation**: Zero stride, duplicate builder parameters.
//! 2. **Order-buffer validation**: Length mismatches, out-of-range or
//!    duplicated preset entries.
//! 3. **Invariant violations**: Single-sweep partition cursors failing to meet.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Validation errors are raised before caller buffers are mutated.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for argsort operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgsortError {
    /// Element stride must be at least 1.
    InvalidStride(usize),

    /// The caller's order buffer length must equal the number of ranked elements.
    MismatchedOrderBuffer {
        /// Length of the supplied order buffer.
        order_len: usize,
        /// Number of elements addressed by the strided view.
        n: usize,
    },

    /// A preset order entry falls outside the index-base-adjusted valid range.
    InvalidOrderEntry {
        /// Position of the offending entry in the order buffer.
        position: usize,
        /// The entry value as supplied by the caller.
        entry: usize,
        /// The configured index base.
        base: usize,
        /// Number of ranked elements.
        n: usize,
    },

    /// A preset order entry appears more than once; the initial permutation
    /// must be a bijection.
    DuplicateOrderEntry {
        /// Position of the repeated entry in the order buffer.
        position: usize,
        /// The entry value as supplied by the caller.
        entry: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The single-sweep partition cursors did not meet their expected totals.
    ///
    /// This is a defect report: it cannot be triggered by caller input, only
    /// by an inconsistency between the bit-column counts and the partition
    /// sweep itself.
    PartitionInvariant {
        /// Final front (bit-clear) cursor position.
        front: usize,
        /// Final back (bit-set) cursor position.
        back: usize,
        /// Number of keys with the partition bit set.
        ones: usize,
        /// Number of elements being partitioned.
        n: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ArgsortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidStride(stride) => {
                write!(f, "Invalid stride: {stride} (must be at least 1)")
            }
            Self::MismatchedOrderBuffer { order_len, n } => {
                write!(
                    f,
                    "Order buffer length mismatch: buffer has {order_len} entries, input has {n} elements"
                )
            }
            Self::InvalidOrderEntry {
                position,
                entry,
                base,
                n,
            } => {
                write!(
                    f,
                    "Invalid order entry at position {position}: {entry} (must be in [{base}, {})",
                    base + n
                )
            }
            Self::DuplicateOrderEntry { position, entry } => {
                write!(
                    f,
                    "Duplicate order entry at position {position}: {entry} (the preset order must be a bijection)"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::PartitionInvariant {
                front,
                back,
                ones,
                n,
            } => {
                write!(
                    f,
                    "Partition invariant broken: front={front}, back={back}, ones={ones}, n={n}"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ArgsortError {}
