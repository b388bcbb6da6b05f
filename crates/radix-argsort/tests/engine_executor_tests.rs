#![cfg(feature = "dev")]
//! Tests for the radix pipeline driver.
//!
//! These tests verify the engine behind the public API:
//! - The built-in 32-bit rank pass (order, stability, pass accounting)
//! - The full typed pipeline over strided views
//! - The two-word composition for doubles
//! - Rank pass injection
//!
//! ## Test Organization
//!
//! 1. **Rank Pass** - the built-in 32-bit engine
//! 2. **Pipeline** - typed runs over strided views
//! 3. **Injection** - custom rank pass replacement

use approx::assert_relative_eq;
use num_traits::Float;

use radix_argsort::internals::engine::executor::{ArgsortConfig, ArgsortExecutor};
use radix_argsort::internals::engine::output::RankSummary;
use radix_argsort::internals::engine::partition::PartitionStrategy;
use radix_argsort::internals::primitives::errors::ArgsortError;
use radix_argsort::internals::primitives::layout::{fill_identity, StridedSlice};

/// Read the data back through an order, failing if it ever decreases.
fn assert_ascending<T: Float>(data: &[T], order: &[usize]) {
    for pair in order.windows(2) {
        assert!(
            data[pair[0]] <= data[pair[1]],
            "Read-back must be non-decreasing"
        );
    }
}

// ============================================================================
// Rank Pass Tests
// ============================================================================

/// Test that the built-in pass produces an ascending bijection.
#[test]
fn test_rank_keys_ascending_bijection() {
    // Deterministic pseudo-random keys.
    let mut state = 0x2545_F491_u32;
    let keys: Vec<u32> = (0..512)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            state
        })
        .collect();
    let mut order: Vec<usize> = vec![0; keys.len()];
    fill_identity(&mut order);

    let summary =
        ArgsortExecutor::rank_keys(&keys, &mut order, PartitionStrategy::SingleSweep).unwrap();

    assert_eq!(summary.n, keys.len());
    assert_eq!(
        summary.passes + summary.skipped_columns,
        summary.bits_considered
    );

    let mut seen = vec![false; keys.len()];
    for &idx in &order {
        assert!(!seen[idx], "Order must be a bijection");
        seen[idx] = true;
    }
    for pair in order.windows(2) {
        assert!(keys[pair[0]] <= keys[pair[1]]);
    }
}

/// Test that equal keys cost zero passes and keep their order.
#[test]
fn test_rank_keys_all_equal() {
    let keys = [0b111_u32; 4];
    let mut order = [3_usize, 1, 0, 2];

    let summary =
        ArgsortExecutor::rank_keys(&keys, &mut order, PartitionStrategy::SingleSweep).unwrap();

    assert_eq!(order, [3, 1, 0, 2], "Stability preserves the seeded order");
    assert_eq!(summary.bits_considered, 3);
    assert_eq!(summary.passes, 0);
    assert_eq!(summary.skipped_columns, 3);
}

/// Test per-column skip accounting.
#[test]
fn test_rank_keys_skip_accounting() {
    // Bit 0 mixed, bit 1 set in both keys.
    let keys = [2_u32, 3];
    let mut order = [0_usize, 1];

    let summary =
        ArgsortExecutor::rank_keys(&keys, &mut order, PartitionStrategy::TwoSweep).unwrap();

    assert_eq!(order, [0, 1]);
    assert_eq!(summary.bits_considered, 2);
    assert_eq!(summary.passes, 1);
    assert_eq!(summary.skipped_columns, 1);
}

/// Test the empty key set.
#[test]
fn test_rank_keys_empty() {
    let mut order: [usize; 0] = [];

    let summary =
        ArgsortExecutor::rank_keys(&[], &mut order, PartitionStrategy::SingleSweep).unwrap();

    assert_eq!(
        summary,
        RankSummary {
            n: 0,
            bits_considered: 0,
            passes: 0,
            skipped_columns: 0
        }
    );
}

// ============================================================================
// Pipeline Tests
// ============================================================================

/// Test the typed pipeline on a strided signed field.
#[test]
fn test_run_strided_signed() {
    // Interleaved (key, payload) pairs; rank the key field.
    let data = [5_i32, 100, -2, 200, 9, 300, -7, 400];
    let view = StridedSlice::new(&data, 2, 0).unwrap();
    let mut order = vec![0_usize; view.len()];
    fill_identity(&mut order);

    ArgsortExecutor::run(&view, &mut order, &ArgsortConfig::default()).unwrap();

    assert_eq!(order, vec![3, 1, 0, 2]);
}

/// Test that the double pipeline matches IEEE total order.
#[test]
fn test_run_double_two_word_composition() {
    let data = [
        1.0_f64,
        f64::from_bits(1.0_f64.to_bits() + 1),
        -1e300,
        0.25,
        -0.0,
        0.0,
        1e300,
        0.25,
    ];
    let view = StridedSlice::new(&data, 1, 0).unwrap();
    let mut order = vec![0_usize; view.len()];
    fill_identity(&mut order);

    let summary = ArgsortExecutor::run(&view, &mut order, &ArgsortConfig::default()).unwrap();

    let mut expected: Vec<usize> = (0..data.len()).collect();
    expected.sort_by(|&a, &b| data[a].total_cmp(&data[b]));

    assert_eq!(order, expected);
    assert_ascending(&data, &order);
    assert_eq!(summary.n, data.len());
    assert_eq!(
        summary.passes + summary.skipped_columns,
        summary.bits_considered,
        "Accounting must cover both key words"
    );
}

/// Test the smallest float read through its ranked order.
#[test]
fn test_run_float_read_back() {
    let data = [0.3_f32, -1.75, 0.3 + 0.1, 2.5e-8];
    let view = StridedSlice::new(&data, 1, 0).unwrap();
    let mut order = vec![0_usize; view.len()];
    fill_identity(&mut order);

    ArgsortExecutor::run(&view, &mut order, &ArgsortConfig::default()).unwrap();

    assert_ascending(&data, &order);
    assert_relative_eq!(data[order[0]], -1.75);
    assert_relative_eq!(data[order[1]], 2.5e-8);
}

/// Test that the zero-copy unsigned path matches the gathered path.
#[test]
fn test_run_contiguous_matches_strided() {
    let contiguous = [9_u32, 1, 8, 2, 7, 3];
    // The same keys interleaved with padding, forcing the gather path.
    let padded = [9_u32, 0, 1, 0, 8, 0, 2, 0, 7, 0, 3, 0];

    let direct_view = StridedSlice::new(&contiguous, 1, 0).unwrap();
    let gather_view = StridedSlice::new(&padded, 2, 0).unwrap();

    let mut direct = vec![0_usize; 6];
    let mut gathered = vec![0_usize; 6];
    fill_identity(&mut direct);
    fill_identity(&mut gathered);

    ArgsortExecutor::run(&direct_view, &mut direct, &ArgsortConfig::default()).unwrap();
    ArgsortExecutor::run(&gather_view, &mut gathered, &ArgsortConfig::default()).unwrap();

    assert_eq!(direct, gathered);
}

// ============================================================================
// Injection Tests
// ============================================================================

/// A stand-in rank pass that reverses the order and tags its summary.
fn reversing_pass(
    keys: &[u32],
    order: &mut [usize],
    _strategy: PartitionStrategy,
) -> Result<RankSummary, ArgsortError> {
    order.reverse();
    Ok(RankSummary {
        n: keys.len(),
        bits_considered: 99,
        passes: 0,
        skipped_columns: 0,
    })
}

/// Test that an installed custom pass replaces the built-in engine.
#[test]
fn test_custom_rank_pass_injection() {
    let data = [10_u32, 20, 30];
    let view = StridedSlice::new(&data, 1, 0).unwrap();
    let mut order = vec![0_usize, 1, 2];

    let config = ArgsortConfig {
        strategy: PartitionStrategy::default(),
        custom_rank_pass: Some(reversing_pass),
    };
    let summary = ArgsortExecutor::run(&view, &mut order, &config).unwrap();

    assert_eq!(order, vec![2, 1, 0]);
    assert_eq!(summary.bits_considered, 99, "Summary comes from the custom pass");
}
