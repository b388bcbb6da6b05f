//! Execution engine for index sorting.
//!
//! ## Purpose
//!
//! This module drives the radix pipeline: encode keys from the strided view,
//! scan key statistics, select the bit width, run the stable partition loop
//! over the double-buffered permutation, and compose two 32-bit pipelines for
//! 64-bit doubles.
//!
//! ## Design notes
//!
//! * **Keys never move**: Passes permute indices only; the key buffer is
//!   read-only after encoding.
//! * **Pass skipping**: Uniform bit columns carry no ordering information and
//!   are skipped; a non-negative-only signed input therefore costs the same
//!   number of passes as its unsigned equivalent.
//! * **Composite keys**: `f64` runs the pipeline twice over the same order
//!   buffer — low word first, high word second. Each pass is stable, so the
//!   second sort preserves low-word order within equal high words and the
//!   result is the exact 64-bit two-key order.
//! * **Pluggable pass**: The 32-bit rank pass is a plain function pointer so a
//!   platform-tuned implementation can replace the built-in one per model; the
//!   composite pipeline reuses whichever pass is installed.
//! * **Zero-copy keys**: Contiguous `u32` input is ranked directly from the
//!   caller's slice; every other case encodes into an owned working buffer.
//!
//! ## Invariants
//!
//! * The order buffer is a bijection over `0..n` before and after every pass.
//! * All scratch (keys, statistics, ping-pong buffer) is dropped before
//!   return on every exit path.
//!
//! ## Non-goals
//!
//! * This module does not validate input (handled by `validator`).
//! * This module does not apply index-base adjustment (handled by the API).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use bytemuck::cast_slice;

// Internal dependencies
use crate::engine::output::RankSummary;
use crate::engine::partition::{partition_by_bit, PartitionStrategy};
use crate::math::encode::{KeyKind, SortKey};
use crate::math::stats::KeyStats;
use crate::primitives::buffer::{KeyBuf, PingPong};
use crate::primitives::errors::ArgsortError;
use crate::primitives::layout::StridedSlice;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a pluggable 32-bit rank pass.
///
/// Orders the permutation ascending by the given encoded keys. Must be stable
/// with respect to the incoming permutation. The built-in implementation is
/// [`ArgsortExecutor::rank_keys`].
pub type RankPassFn = fn(
    &[u32],            // encoded keys
    &mut [usize],      // order (in: initial permutation, out: ranked)
    PartitionStrategy, // sweep strategy
) -> Result<RankSummary, ArgsortError>;

/// Resolved engine configuration for one model.
#[derive(Debug, Clone, Copy)]
pub struct ArgsortConfig {
    /// Sweep strategy for the partition passes.
    pub strategy: PartitionStrategy,

    /// Alternate rank pass installed in place of the built-in engine.
    pub custom_rank_pass: Option<RankPassFn>,
}

impl Default for ArgsortConfig {
    fn default() -> Self {
        Self {
            strategy: PartitionStrategy::default(),
            custom_rank_pass: None,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Radix pipeline driver.
pub struct ArgsortExecutor;

impl ArgsortExecutor {
    /// Rank a pre-encoded 32-bit key set: the built-in LSD radix pass.
    ///
    /// Stable: entries with equal keys keep their incoming relative order.
    pub fn rank_keys(
        keys: &[u32],
        order: &mut [usize],
        strategy: PartitionStrategy,
    ) -> Result<RankSummary, ArgsortError> {
        let n = keys.len();
        if n == 0 {
            return Ok(RankSummary::trivial(0));
        }

        let stats = KeyStats::scan(keys);
        let bits_considered = stats.bit_width();

        let mut passes = 0;
        let mut skipped_columns = 0;
        let mut buffers = PingPong::new(order);

        for bit in 0..bits_considered {
            if stats.column_is_uniform(bit, n) {
                skipped_columns += 1;
                continue;
            }
            let ones = stats.bit_counts[bit];
            let mask = 1_u32 << bit;
            let (src, dst) = buffers.split();
            partition_by_bit(keys, mask, ones, src, dst, strategy)?;
            buffers.flip();
            passes += 1;
        }

        buffers.finish();

        Ok(RankSummary {
            n,
            bits_considered,
            passes,
            skipped_columns,
        })
    }

    /// Run the full pipeline for a typed strided view.
    ///
    /// The order buffer must already be validated, normalized to zero-based
    /// indices, and of length `view.len()`.
    pub fn run<T: SortKey>(
        view: &StridedSlice<'_, T>,
        order: &mut [usize],
        config: &ArgsortConfig,
    ) -> Result<RankSummary, ArgsortError> {
        let n = view.len();
        if n == 0 {
            return Ok(RankSummary::trivial(0));
        }

        let pass: RankPassFn = config.custom_rank_pass.unwrap_or(Self::rank_keys);

        // Primary word (the only word for single-word kinds).
        let keys = Self::primary_keys(view);
        let mut summary = pass(keys.as_slice(), order, config.strategy)?;
        drop(keys);

        // High word for composite kinds, seeded with the low-word order.
        if T::KIND.is_composite() {
            let high: Vec<u32> = view.iter().map(SortKey::high_word_key).collect();
            let high_summary = pass(&high, order, config.strategy)?;
            summary = summary.merge(high_summary);
        }

        Ok(summary)
    }

    /// Encode the primary key word for every element of the view.
    ///
    /// Contiguous unsigned input borrows the caller's slice; everything else
    /// gathers into an owned working buffer.
    fn primary_keys<'a, T: SortKey>(view: &StridedSlice<'a, T>) -> KeyBuf<'a> {
        if T::KIND == KeyKind::Uint32 && view.is_contiguous() {
            KeyBuf::Borrowed(cast_slice(view.data()))
        } else {
            KeyBuf::Owned(view.iter().map(SortKey::sort_key).collect())
        }
    }
}
