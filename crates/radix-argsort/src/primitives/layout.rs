//! Strided input views and index-base adjustment.
//!
//! ## Purpose
//!
//! This module translates between the caller's data layout and the engine's
//! internal conventions: it addresses one field of a possibly interleaved
//! array through a fixed stride and start offset, and converts order entries
//! between the caller's index base and the zero-based indices used internally.
//!
//! ## Design notes
//!
//! * **Read-only**: A [`StridedSlice`] never mutates the underlying data.
//! * **Derived length**: The element count follows from the slice length,
//!   stride, and offset; there is no separately supplied count to get wrong.
//! * **Copy elements**: Elements are returned by value; all supported key
//!   types are small `Copy` scalars.
//!
//! ## Key concepts
//!
//! * **Stride/offset addressing**: Element `i` lives at `offset + i * stride`.
//! * **Index base**: The caller's numbering origin for order entries (e.g.,
//!   1 for Fortran-style indexing). Subtracted on entry, added back on exit.
//!
//! ## Invariants
//!
//! * `stride >= 1` for every constructed view.
//! * `get(i)` is in bounds for all `i < len()`.
//!
//! ## Non-goals
//!
//! * This module does not validate order buffers (handled by the validator).
//! * This module does not extract or encode keys.

// Internal dependencies
use crate::primitives::errors::ArgsortError;

// ============================================================================
// Strided Input View
// ============================================================================

/// Read-only strided view over one field of a numeric slice.
#[derive(Debug, Clone, Copy)]
pub struct StridedSlice<'a, T> {
    /// Underlying data, externally owned.
    data: &'a [T],

    /// Element stride (1 = contiguous).
    stride: usize,

    /// Start offset of the first element.
    offset: usize,
}

impl<'a, T: Copy> StridedSlice<'a, T> {
    /// Create a view with the given stride and start offset.
    pub fn new(data: &'a [T], stride: usize, offset: usize) -> Result<Self, ArgsortError> {
        if stride < 1 {
            return Err(ArgsortError::InvalidStride(stride));
        }
        Ok(Self {
            data,
            stride,
            offset,
        })
    }

    /// Number of addressable elements.
    #[inline]
    pub fn len(&self) -> usize {
        if self.offset >= self.data.len() {
            0
        } else {
            (self.data.len() - self.offset + self.stride - 1) / self.stride
        }
    }

    /// Whether the view addresses no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at logical position `i`.
    #[inline]
    pub fn get(&self, i: usize) -> T {
        self.data[self.offset + i * self.stride]
    }

    /// Iterate the addressed elements in logical order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        let tail = if self.offset >= self.data.len() {
            &self.data[self.data.len()..]
        } else {
            &self.data[self.offset..]
        };
        tail.iter().step_by(self.stride).copied()
    }

    /// Whether the view covers the underlying slice one-to-one.
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.stride == 1 && self.offset == 0
    }

    /// The underlying slice.
    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }
}

// ============================================================================
// Index-Base Adjustment
// ============================================================================

/// Fill an order buffer with the identity permutation `0..n`.
#[inline]
pub fn fill_identity(order: &mut [usize]) {
    for (i, entry) in order.iter_mut().enumerate() {
        *entry = i;
    }
}

/// Normalize caller-supplied order entries to zero-based indices.
///
/// Entries must already be validated to lie in `[base, base + n)`.
#[inline]
pub fn normalize_order(order: &mut [usize], base: usize) {
    if base != 0 {
        for entry in order.iter_mut() {
            *entry -= base;
        }
    }
}

/// Re-adjust zero-based order entries to the caller's index base.
#[inline]
pub fn restore_order(order: &mut [usize], base: usize) {
    if base != 0 {
        for entry in order.iter_mut() {
            *entry += base;
        }
    }
}
