//! # radix-argsort — index sorting for numeric slices
//!
//! A radix-based argsort primitive for numerical-model codebases: given a
//! slice of `u32`, `i32`, `f32`, or `f64` values, it produces the permutation
//! of element indices that reads the values in ascending order. The caller's
//! data is never reordered, which makes the primitive suitable for sorting one
//! field of a large interleaved record array in place of the records
//! themselves.
//!
//! The engine is a stable least-significant-bit-first radix sort over
//! order-preserving 32-bit key encodings, with adaptive bit-width selection
//! and uniform-column skipping. 64-bit doubles are handled as two sequential
//! 32-bit passes (low word, then high word), which the stability of each pass
//! composes into the exact 64-bit order.
//!
//! ## Quick Start
//!
//! ```rust
//! use radix_argsort::prelude::*;
//!
//! let data = vec![3_i32, -1, 2, -5, 0];
//!
//! // Build the model
//! let model = Argsort::new().build()?;
//!
//! // Rank the data
//! let result = model.argsort(&data)?;
//!
//! assert_eq!(result.order, vec![3, 1, 4, 2, 0]);
//! // Reading the data through the order yields [-5, -1, 0, 2, 3].
//! # Result::<(), ArgsortError>::Ok(())
//! ```
//!
//! ## Strided and externally indexed input
//!
//! ```rust
//! use radix_argsort::prelude::*;
//!
//! // Interleaved records of (key, payload); sort by the key field only.
//! let records = vec![9.0_f64, 100.0, 4.0, 200.0, 7.0, 300.0];
//!
//! let model = Argsort::new()
//!     .stride(2)          // one key every two elements
//!     .offset(0)          // key field starts at element 0
//!     .index_base(1)      // 1-based order entries (Fortran convention)
//!     .build()?;
//!
//! let result = model.argsort(&records)?;
//! assert_eq!(result.order, vec![2, 3, 1]);
//! # Result::<(), ArgsortError>::Ok(())
//! ```
//!
//! ## Reusing a caller-owned order buffer
//!
//! `argsort_into` overwrites a caller-supplied buffer instead of allocating;
//! with `.preset_order()` the buffer supplies the initial permutation and the
//! sort refines it stably.
//!
//! ```rust
//! use radix_argsort::prelude::*;
//!
//! let data = vec![2_u32, 2, 1];
//! let mut order = vec![0_usize; 3];
//!
//! let model = Argsort::new().build()?;
//! let summary = model.argsort_into(&data, &mut order)?;
//!
//! assert_eq!(summary.n, 3);
//! assert_eq!(order, vec![2, 0, 1]);
//! # Result::<(), ArgsortError>::Ok(())
//! ```
//!
//! ## Error handling
//!
//! All operations return `Result<_, ArgsortError>`. Configuration mistakes
//! (zero stride, mismatched buffer lengths, out-of-range or duplicated preset
//! entries) fail before the caller's buffers are touched; a broken internal
//! partition invariant is
//! reported as [`ArgsortError::PartitionInvariant`] and indicates a defect,
//! not bad input.
//!
//! [`ArgsortError::PartitionInvariant`]: prelude::ArgsortError

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - buffers, strided layout, error types.
mod primitives;

// Layer 2: Math - key encodings and key statistics.
mod math;

// Layer 3: Engine - partitioning, orchestration, validation, output.
mod engine;

// High-level fluent API for index sorting.
mod api;

// Standard argsort prelude.
pub mod prelude {
    pub use crate::api::{
        ArgsortBuilder as Argsort, ArgsortError, ArgsortResult, KeyKind,
        PartitionStrategy::{self, SingleSweep, TwoSweep},
        RankSummary, SortKey,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
