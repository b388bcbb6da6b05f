//! Result and summary types for index sorting.
//!
//! ## Purpose
//!
//! This module defines the [`ArgsortResult`] returned by the allocating API
//! and the [`RankSummary`] describing what the engine actually did: how many
//! elements were ranked, how many bit passes ran, and how many columns were
//! skipped as uniform.
//!
//! ## Design notes
//!
//! * **Status analog**: `summary.n` plays the role of the legacy
//!   success-status return (status equals the element count).
//! * **Composite accounting**: For doubles, counts accumulate over both the
//!   low-word and high-word pipelines.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `passes + skipped_columns == bits_considered` for the built-in engine.
//! * `order` is a bijection over the index-base-adjusted range.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Rank Summary
// ============================================================================

/// Accounting for one completed sort invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankSummary {
    /// Number of elements ranked.
    pub n: usize,

    /// Bit positions examined by the pass loop (summed over key words).
    pub bits_considered: usize,

    /// Partition passes actually performed.
    pub passes: usize,

    /// Bit columns skipped as uniform (all clear or all set).
    pub skipped_columns: usize,
}

impl RankSummary {
    /// Summary of a trivially complete invocation over `n` elements.
    pub(crate) fn trivial(n: usize) -> Self {
        Self {
            n,
            bits_considered: 0,
            passes: 0,
            skipped_columns: 0,
        }
    }

    /// Accumulate the accounting of a second key-word pipeline.
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            n: self.n,
            bits_considered: self.bits_considered + other.bits_considered,
            passes: self.passes + other.passes,
            skipped_columns: self.skipped_columns + other.skipped_columns,
        }
    }
}

impl Display for RankSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Elements: {}", self.n)?;
        writeln!(
            f,
            "  Bit passes: {} of {} considered ({} uniform columns skipped)",
            self.passes, self.bits_considered, self.skipped_columns
        )
    }
}

// ============================================================================
// Argsort Result
// ============================================================================

/// Output of an allocating sort invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgsortResult {
    /// Ascending index permutation (index-base adjusted).
    pub order: Vec<usize>,

    /// Pass accounting for the invocation.
    pub summary: RankSummary,
}

impl Display for ArgsortResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.summary.fmt(f)?;
        writeln!(f, "Order:")?;
        write!(f, " ")?;
        for entry in &self.order {
            write!(f, " {entry}")?;
        }
        writeln!(f)
    }
}
