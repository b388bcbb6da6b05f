//! Key encodings: numeric values to sortable unsigned keys.
//!
//! ## Purpose
//!
//! This module maps each supported numeric type to an unsigned 32-bit key
//! whose plain unsigned ordering reproduces the type's natural numeric
//! ordering. The radix engine then only ever compares bits.
//!
//! ## Design notes
//!
//! * **Unsigned**: identity; the bits already sort correctly.
//! * **Signed**: flipping the sign bit moves two's-complement negatives below
//!   non-negatives under unsigned comparison.
//! * **Float**: the standard IEEE-754 transform — negative values are
//!   complemented wholesale (reversing their order), non-negative values get
//!   the sign bit set (offsetting them above the negatives).
//! * **Double**: the float transform split across the two 32-bit words of the
//!   `f64` bit pattern. `to_bits` fixes the word order, so no endianness
//!   handling is needed.
//!
//! ## Key concepts
//!
//! * **Total order**: the float encodings induce IEEE total order: `-0.0`
//!   sorts immediately before `+0.0`, and NaNs order by payload beyond the
//!   infinities. Read back numerically, the result is still non-decreasing.
//! * **Composite kinds**: `f64` contributes two key words; the engine sorts by
//!   the low word first and the high word second (see the executor).
//!
//! ## Invariants
//!
//! * For single-word kinds: `a <= b` (numerically) iff
//!   `a.sort_key() <= b.sort_key()` (unsigned).
//! * For `f64`: numeric order equals lexicographic order of
//!   `(high_word_key, sort_key)`.
//!
//! ## Non-goals
//!
//! * This module does not scan, partition, or allocate.

// External dependencies
use bytemuck::Pod;

// ============================================================================
// Bit Masks
// ============================================================================

/// Sign bit of a 32-bit word.
pub const SIGN_BIT: u32 = 0x8000_0000;

/// All 32 bits set.
pub const MASK_ALL: u32 = 0xFFFF_FFFF;

// ============================================================================
// Key Kinds
// ============================================================================

/// Numeric class of a sortable key type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Unsigned 32-bit integers.
    Uint32,

    /// Signed 32-bit integers.
    Int32,

    /// IEEE 754 32-bit floats.
    Float32,

    /// IEEE 754 64-bit doubles (two key words).
    Float64,
}

impl KeyKind {
    /// Whether this kind contributes two key words.
    #[inline]
    pub fn is_composite(self) -> bool {
        matches!(self, Self::Float64)
    }
}

// ============================================================================
// Bit Transforms
// ============================================================================

/// Signed 32-bit integer to sortable key: flip the sign bit.
#[inline]
pub fn encode_signed(value: i32) -> u32 {
    (value as u32) ^ SIGN_BIT
}

/// IEEE 32-bit float bit pattern to sortable key.
///
/// Negative values (sign bit set) are ones'-complemented, non-negative values
/// get the sign bit set.
#[inline]
pub fn encode_float_bits(bits: u32) -> u32 {
    if bits & SIGN_BIT != 0 {
        bits ^ MASK_ALL
    } else {
        bits ^ SIGN_BIT
    }
}

/// Low word of an `f64` bit pattern to sortable key.
///
/// Complemented when the double is negative (the high word carries the sign),
/// unchanged otherwise.
#[inline]
pub fn encode_double_low(bits: u64) -> u32 {
    let low = bits as u32;
    if bits >> 63 != 0 {
        low ^ MASK_ALL
    } else {
        low
    }
}

/// High word of an `f64` bit pattern to sortable key: the float transform
/// applied to the high word.
#[inline]
pub fn encode_double_high(bits: u64) -> u32 {
    encode_float_bits((bits >> 32) as u32)
}

// ============================================================================
// SortKey Trait
// ============================================================================

mod sealed {
    pub trait Sealed {}

    impl Sealed for u32 {}
    impl Sealed for i32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Numeric types the engine can rank.
///
/// Sealed: the set of supported encodings is fixed by the engine design.
pub trait SortKey: sealed::Sealed + Copy + Pod {
    /// Numeric class of this type.
    const KIND: KeyKind;

    /// Primary sortable key word (the low word for composite kinds).
    #[doc(hidden)]
    fn sort_key(self) -> u32;

    /// High sortable key word for composite kinds.
    ///
    /// Identical to [`sort_key`](SortKey::sort_key) for single-word kinds,
    /// which never use it.
    #[doc(hidden)]
    fn high_word_key(self) -> u32;
}

impl SortKey for u32 {
    const KIND: KeyKind = KeyKind::Uint32;

    #[inline]
    fn sort_key(self) -> u32 {
        self
    }

    #[inline]
    fn high_word_key(self) -> u32 {
        self
    }
}

impl SortKey for i32 {
    const KIND: KeyKind = KeyKind::Int32;

    #[inline]
    fn sort_key(self) -> u32 {
        encode_signed(self)
    }

    #[inline]
    fn high_word_key(self) -> u32 {
        encode_signed(self)
    }
}

impl SortKey for f32 {
    const KIND: KeyKind = KeyKind::Float32;

    #[inline]
    fn sort_key(self) -> u32 {
        encode_float_bits(self.to_bits())
    }

    #[inline]
    fn high_word_key(self) -> u32 {
        encode_float_bits(self.to_bits())
    }
}

impl SortKey for f64 {
    const KIND: KeyKind = KeyKind::Float64;

    #[inline]
    fn sort_key(self) -> u32 {
        encode_double_low(self.to_bits())
    }

    #[inline]
    fn high_word_key(self) -> u32 {
        encode_double_high(self.to_bits())
    }
}
