//! Stable bit partitioning strategies.
//!
//! ## Purpose
//!
//! This module implements the single radix pass: stably reorder the current
//! permutation so that entries whose key has a given bit clear come first, in
//! their existing relative order, followed by entries with the bit set,
//! likewise in order.
//!
//! ## Design notes
//!
//! * **Two strategies, one result**: The two-sweep gather and the single-sweep
//!   split are behavior-equivalent and must produce bit-identical output; the
//!   single sweep exists purely for throughput on scalar processors.
//! * **Cursor check**: The single sweep verifies that its front and back
//!   cursors meet the totals implied by the bit-column count, and reports a
//!   mismatch as a defect rather than producing a corrupt permutation.
//! * **No key movement**: Only permutation entries move; keys are read-only.
//!
//! ## Invariants
//!
//! * `dst` is a permutation of `src` after every successful call.
//! * Relative order within each bit group is preserved (stability).
//!
//! ## Non-goals
//!
//! * This module does not choose which bits to partition by (engine decides).

// Internal dependencies
use crate::primitives::errors::ArgsortError;

// ============================================================================
// Partition Strategy
// ============================================================================

/// How a single stable bit partition is swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartitionStrategy {
    /// Two passes over the source: gather bit-clear entries, then bit-set
    /// entries. The historical vector-machine-friendly variant.
    TwoSweep,

    /// One pass with a front cursor for bit-clear entries and a back cursor
    /// (starting at `n - ones`) for bit-set entries.
    #[default]
    SingleSweep,
}

// ============================================================================
// Stable Bit Partition
// ============================================================================

/// Stably partition `src` into `dst` by one key bit.
///
/// `ones` is the number of keys with the bit set, taken from the bit-column
/// counts. Uniform columns (`ones == 0` or `ones == n`) are the caller's
/// responsibility to skip.
pub fn partition_by_bit(
    keys: &[u32],
    mask: u32,
    ones: usize,
    src: &[usize],
    dst: &mut [usize],
    strategy: PartitionStrategy,
) -> Result<(), ArgsortError> {
    match strategy {
        PartitionStrategy::TwoSweep => {
            let mut k = 0;
            for &idx in src {
                if keys[idx] & mask == 0 {
                    dst[k] = idx;
                    k += 1;
                }
            }
            for &idx in src {
                if keys[idx] & mask != 0 {
                    dst[k] = idx;
                    k += 1;
                }
            }
            Ok(())
        }
        PartitionStrategy::SingleSweep => {
            let n = src.len();
            let mut front = 0;
            let mut back = n - ones;
            for &idx in src {
                if keys[idx] & mask == 0 {
                    dst[front] = idx;
                    front += 1;
                } else {
                    dst[back] = idx;
                    back += 1;
                }
            }
            if front + ones != n || back != n {
                return Err(ArgsortError::PartitionInvariant {
                    front,
                    back,
                    ones,
                    n,
                });
            }
            Ok(())
        }
    }
}
