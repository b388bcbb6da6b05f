//! Working key buffer and double-buffered order scratch.
//!
//! ## Purpose
//!
//! This module provides the two pieces of invocation-local scratch memory the
//! engine needs: a working copy of the encoded keys, and the pair of order
//! buffers that the partition passes ping-pong between.
//!
//! ## Design notes
//!
//! * **Borrow when possible**: Contiguous unsigned input already is its own
//!   key set, so [`KeyBuf`] can borrow the caller's slice instead of copying.
//! * **One scratch vector**: [`PingPong`] pairs the caller's order buffer with
//!   a single owned scratch vector; no per-pass allocation.
//! * **Tagged live buffer**: Which buffer holds the current result is tracked
//!   by an explicit [`Live`] tag, not by pointer juggling, and the result is
//!   copied into the caller's buffer only when it ended up in the scratch.
//! * **Invocation-local**: Both structures are created at call entry and
//!   dropped before return on every exit path.
//!
//! ## Invariants
//!
//! * The scratch vector always has the same length as the caller's buffer.
//! * After [`PingPong::finish`], the caller's buffer holds the live result.
//!
//! ## Non-goals
//!
//! * This module does not partition or encode anything; it only owns memory.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::Deref;
use num_traits::Zero;

// ============================================================================
// Working Key Buffer
// ============================================================================

/// The encoded key set for one invocation.
///
/// Owned when the input is strided, offset, or needs encoding; borrowed when
/// the caller's slice can serve as the key set directly.
#[derive(Debug)]
pub enum KeyBuf<'a> {
    /// The caller's contiguous `u32` slice, used in place.
    Borrowed(&'a [u32]),

    /// An owned copy holding encoded or gathered keys.
    Owned(Vec<u32>),
}

impl KeyBuf<'_> {
    /// The keys as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        match self {
            Self::Borrowed(keys) => keys,
            Self::Owned(keys) => keys,
        }
    }
}

impl Deref for KeyBuf<'_> {
    type Target = [u32];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

// ============================================================================
// Double-Buffered Order Scratch
// ============================================================================

/// Which of the two order buffers holds the live result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Live {
    /// The caller's buffer is live.
    Caller,

    /// The owned scratch vector is live.
    Scratch,
}

/// Ping-pong pair of equal-length order buffers.
///
/// Each partition pass reads from the live buffer and writes to the other,
/// then [`flip`](PingPong::flip) swaps the roles. The caller's buffer starts
/// live, matching an even number of passes leaving it authoritative.
#[derive(Debug)]
pub struct PingPong<'a> {
    /// The caller's order buffer.
    caller: &'a mut [usize],

    /// Owned scratch of the same length.
    scratch: Vec<usize>,

    /// Which buffer holds the current result.
    live: Live,
}

impl<'a> PingPong<'a> {
    /// Pair the caller's buffer with a freshly allocated scratch vector.
    pub fn new(caller: &'a mut [usize]) -> Self {
        let n = caller.len();
        Self {
            caller,
            scratch: vec![usize::zero(); n],
            live: Live::Caller,
        }
    }

    /// Borrow the live buffer as the pass source and the other as destination.
    #[inline]
    pub fn split(&mut self) -> (&[usize], &mut [usize]) {
        match self.live {
            Live::Caller => (&self.caller[..], &mut self.scratch[..]),
            Live::Scratch => (&self.scratch[..], &mut self.caller[..]),
        }
    }

    /// Swap the roles of the two buffers after a completed pass.
    #[inline]
    pub fn flip(&mut self) {
        self.live = match self.live {
            Live::Caller => Live::Scratch,
            Live::Scratch => Live::Caller,
        };
    }

    /// Which buffer currently holds the result.
    #[inline]
    pub fn live(&self) -> Live {
        self.live
    }

    /// The current result.
    #[inline]
    pub fn live_slice(&self) -> &[usize] {
        match self.live {
            Live::Caller => self.caller,
            Live::Scratch => &self.scratch,
        }
    }

    /// Ensure the caller's buffer holds the result, copying from the scratch
    /// if it finished live.
    pub fn finish(self) {
        if self.live == Live::Scratch {
            self.caller.copy_from_slice(&self.scratch);
        }
    }
}
