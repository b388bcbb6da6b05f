//! Key statistics: maximum, bit-column counts, bit width.
//!
//! ## Purpose
//!
//! This module computes, in one pass over a key set, the maximum key and the
//! number of keys with each bit set. The engine uses the maximum to bound the
//! number of bit passes and the per-column counts to skip columns that carry
//! no ordering information.
//!
//! ## Design notes
//!
//! * **Single pass**: One O(n·32) sweep; no sortedness assumption.
//! * **Seeded maximum**: The maximum is seeded from the first key, matching
//!   the convention that statistics are only computed for non-empty key sets.
//! * **Pre-encoded keys**: Statistics always run on encoded keys, so a signed
//!   input with only non-negative values shows up as a uniform (all-set) sign
//!   column and is skipped by the partition loop rather than special-cased.
//!
//! ## Invariants
//!
//! * `bit_counts[b] <= n` for every bit `b`.
//! * No key has a bit set at or above `bit_width()` unless the width is 32.
//!
//! ## Non-goals
//!
//! * This module does not decide which partition strategy to use.

// Internal dependencies
use crate::math::encode::SIGN_BIT;

/// Number of bits in a key word.
pub const KEY_BITS: usize = 32;

// ============================================================================
// Key Statistics
// ============================================================================

/// Per-invocation statistics over an encoded key set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStats {
    /// Maximum key value.
    pub max_key: u32,

    /// For each bit position, how many keys have that bit set.
    pub bit_counts: [usize; KEY_BITS],
}

impl KeyStats {
    /// Scan a key set in one pass.
    ///
    /// An empty key set yields zero statistics; the engine never partitions
    /// with them.
    pub fn scan(keys: &[u32]) -> Self {
        let mut max_key = keys.first().copied().unwrap_or(0);
        let mut bit_counts = [0_usize; KEY_BITS];

        for &key in keys {
            if key > max_key {
                max_key = key;
            }
            for bit in 0..KEY_BITS {
                bit_counts[bit] += ((key >> bit) & 1) as usize;
            }
        }

        Self {
            max_key,
            bit_counts,
        }
    }

    /// Minimal number of low-order bits that can distinguish any two keys.
    ///
    /// Zero when all keys are zero; the full 32 whenever the top bit
    /// participates.
    #[inline]
    pub fn bit_width(&self) -> usize {
        if self.max_key & SIGN_BIT != 0 {
            KEY_BITS
        } else if self.max_key == 0 {
            0
        } else {
            KEY_BITS - self.max_key.leading_zeros() as usize
        }
    }

    /// Whether a bit column is uniform (all clear or all set) across `n` keys.
    #[inline]
    pub fn column_is_uniform(&self, bit: usize, n: usize) -> bool {
        let ones = self.bit_counts[bit];
        ones == 0 || ones == n
    }
}
