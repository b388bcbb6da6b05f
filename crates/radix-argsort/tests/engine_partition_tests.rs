#![cfg(feature = "dev")]
//! Tests for the stable bit partition.
//!
//! These tests verify the single radix pass used by the engine:
//! - Stability within the bit-clear and bit-set groups
//! - Behavior equivalence of the two sweep strategies
//! - The single-sweep cursor invariant check
//!
//! ## Test Organization
//!
//! 1. **Stability** - relative order within groups
//! 2. **Strategy Equivalence** - bit-identical output
//! 3. **Invariant Check** - defect reporting on cursor mismatch

use radix_argsort::internals::engine::partition::{partition_by_bit, PartitionStrategy};
use radix_argsort::internals::primitives::errors::ArgsortError;

/// Count the keys with the mask bit set.
fn ones_of(keys: &[u32], mask: u32) -> usize {
    keys.iter().filter(|&&k| k & mask != 0).count()
}

// ============================================================================
// Stability Tests
// ============================================================================

/// Test that a partition preserves relative order within each group.
#[test]
fn test_partition_is_stable() {
    let keys = [1_u32, 0, 1, 0, 1];
    let src = [0_usize, 1, 2, 3, 4];
    let mut dst = [0_usize; 5];

    partition_by_bit(&keys, 1, 3, &src, &mut dst, PartitionStrategy::SingleSweep).unwrap();

    // Clear group (indices 1, 3) first, set group (0, 2, 4) after, both in order.
    assert_eq!(dst, [1, 3, 0, 2, 4]);
}

/// Test a partition starting from a non-identity permutation.
#[test]
fn test_partition_respects_incoming_order() {
    let keys = [2_u32, 3, 2, 3];
    let src = [3_usize, 2, 1, 0];
    let mut dst = [0_usize; 4];

    partition_by_bit(&keys, 1, 2, &src, &mut dst, PartitionStrategy::TwoSweep).unwrap();

    // Bit 0 clear for keys 2 (indices 2, 0 in incoming order), set for keys 3.
    assert_eq!(dst, [2, 0, 3, 1]);
}

// ============================================================================
// Strategy Equivalence Tests
// ============================================================================

/// Test that both sweeps produce bit-identical partitions.
#[test]
fn test_sweeps_are_equivalent() {
    // Deterministic pseudo-random keys.
    let mut state = 0x1234_5678_u32;
    let keys: Vec<u32> = (0..256)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            state
        })
        .collect();
    let src: Vec<usize> = (0..keys.len()).collect();

    for bit in 0..8 {
        let mask = 1_u32 << bit;
        let ones = ones_of(&keys, mask);
        let mut two = vec![0_usize; keys.len()];
        let mut single = vec![0_usize; keys.len()];

        partition_by_bit(&keys, mask, ones, &src, &mut two, PartitionStrategy::TwoSweep).unwrap();
        partition_by_bit(
            &keys,
            mask,
            ones,
            &src,
            &mut single,
            PartitionStrategy::SingleSweep,
        )
        .unwrap();

        assert_eq!(two, single, "Sweeps diverged on bit {bit}");
    }
}

// ============================================================================
// Invariant Check Tests
// ============================================================================

/// Test that an inconsistent ones count is reported as a defect.
#[test]
fn test_cursor_invariant_violation() {
    let keys = [1_u32, 0, 0];
    let src = [0_usize, 1, 2];
    let mut dst = [0_usize; 3];

    // The actual count of set bits is 1; claim 2 to break the cursors.
    let err = partition_by_bit(&keys, 1, 2, &src, &mut dst, PartitionStrategy::SingleSweep)
        .unwrap_err();

    assert_eq!(
        err,
        ArgsortError::PartitionInvariant {
            front: 2,
            back: 2,
            ones: 2,
            n: 3
        }
    );
}
