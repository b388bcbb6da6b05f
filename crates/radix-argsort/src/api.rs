//! High-level API for index sorting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder pattern for configuring the input layout (stride, offset,
//! index base), the initial permutation convention, and the partition
//! strategy, ending in a reusable sort model.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration is validated once, in `build()`.
//! * **Type-Safe**: One generic `argsort` over the sealed [`SortKey`] types;
//!   an unsupported element type is a compile error, not a status code.
//! * **Reusable**: A built model is immutable and can rank any number of
//!   slices; all scratch state is invocation-local.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `Argsort::new()` → chain parameters → `build()`.
//! * **Two entry points**: `argsort` allocates the order buffer; `argsort_into`
//!   overwrites a caller-owned buffer and can start from a preset permutation.
//! * **Injection**: The partition strategy and (for development or vendor
//!   alternates) the whole 32-bit rank pass are per-model configuration, not
//!   process-wide state.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::executor::{ArgsortConfig, ArgsortExecutor, RankPassFn};
use crate::engine::validator::Validator;
use crate::primitives::layout::{fill_identity, normalize_order, restore_order, StridedSlice};

// Publicly re-exported types
pub use crate::engine::output::{ArgsortResult, RankSummary};
pub use crate::engine::partition::PartitionStrategy;
pub use crate::math::encode::{KeyKind, SortKey};
pub use crate::primitives::errors::ArgsortError;

// ============================================================================
// Argsort Builder
// ============================================================================

/// Fluent builder for configuring an index-sort model.
#[derive(Debug, Clone)]
pub struct ArgsortBuilder {
    /// Element stride (1 = contiguous).
    pub stride: Option<usize>,

    /// Start offset of the sorted field.
    pub offset: Option<usize>,

    /// Caller's numbering origin for order entries.
    pub index_base: Option<usize>,

    /// Partition sweep strategy.
    pub strategy: Option<PartitionStrategy>,

    /// Whether `argsort_into` buffers supply the initial permutation.
    pub preset_order: Option<bool>,

    // ======================================
    // DEV
    // ======================================
    /// Custom 32-bit rank pass.
    #[doc(hidden)]
    pub custom_rank_pass: Option<RankPassFn>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for ArgsortBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgsortBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            stride: None,
            offset: None,
            index_base: None,
            strategy: None,
            preset_order: None,
            custom_rank_pass: None,
            duplicate_param: None,
        }
    }

    /// Set the element stride (1 = contiguous, default).
    pub fn stride(mut self, stride: usize) -> Self {
        if self.stride.is_some() {
            self.duplicate_param = Some("stride");
        }
        self.stride = Some(stride);
        self
    }

    /// Set the start offset of the sorted field (default 0).
    pub fn offset(mut self, offset: usize) -> Self {
        if self.offset.is_some() {
            self.duplicate_param = Some("offset");
        }
        self.offset = Some(offset);
        self
    }

    /// Set the caller's index base for order entries (default 0).
    pub fn index_base(mut self, base: usize) -> Self {
        if self.index_base.is_some() {
            self.duplicate_param = Some("index_base");
        }
        self.index_base = Some(base);
        self
    }

    /// Set the partition sweep strategy (default: single sweep).
    pub fn strategy(mut self, strategy: PartitionStrategy) -> Self {
        if self.strategy.is_some() {
            self.duplicate_param = Some("strategy");
        }
        self.strategy = Some(strategy);
        self
    }

    /// Treat `argsort_into` buffers as preset initial permutations.
    pub fn preset_order(mut self) -> Self {
        if self.preset_order.is_some() {
            self.duplicate_param = Some("preset_order");
        }
        self.preset_order = Some(true);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Install an alternate 32-bit rank pass (only for dev/vendor alternates).
    #[doc(hidden)]
    pub fn custom_rank_pass(mut self, pass: RankPassFn) -> Self {
        self.custom_rank_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the sort model.
    pub fn build(self) -> Result<RadixArgsort, ArgsortError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate stride
        let stride = self.stride.unwrap_or(1);
        Validator::validate_stride(stride)?;

        Ok(RadixArgsort {
            stride,
            offset: self.offset.unwrap_or(0),
            index_base: self.index_base.unwrap_or(0),
            preset_order: self.preset_order.unwrap_or(false),
            config: ArgsortConfig {
                strategy: self.strategy.unwrap_or_default(),
                custom_rank_pass: self.custom_rank_pass,
            },
        })
    }
}

// ============================================================================
// Argsort Model
// ============================================================================

/// Reusable index-sort model.
#[derive(Debug, Clone, Copy)]
pub struct RadixArgsort {
    stride: usize,
    offset: usize,
    index_base: usize,
    preset_order: bool,
    config: ArgsortConfig,
}

impl RadixArgsort {
    /// Rank a slice ascending, allocating the order buffer.
    ///
    /// The order is identity-initialized and returned index-base adjusted;
    /// the input data is never reordered.
    pub fn argsort<T: SortKey>(&self, data: &[T]) -> Result<ArgsortResult, ArgsortError> {
        let view = StridedSlice::new(data, self.stride, self.offset)?;
        let n = view.len();

        let mut order: Vec<usize> = vec![0; n];
        fill_identity(&mut order);

        let summary = ArgsortExecutor::run(&view, &mut order, &self.config)?;
        restore_order(&mut order, self.index_base);

        Ok(ArgsortResult { order, summary })
    }

    /// Rank a slice ascending into a caller-owned order buffer.
    ///
    /// With [`preset_order`](ArgsortBuilder::preset_order) configured, the
    /// buffer supplies the initial permutation (index-base adjusted, and
    /// required to be a bijection) and the sort refines it stably; otherwise
    /// it is identity-initialized. On success the returned summary's `n`
    /// equals the number of ranked elements; a buffer rejected by validation
    /// is left untouched.
    pub fn argsort_into<T: SortKey>(
        &self,
        data: &[T],
        order: &mut [usize],
    ) -> Result<RankSummary, ArgsortError> {
        let view = StridedSlice::new(data, self.stride, self.offset)?;
        let n = view.len();

        Validator::validate_order_buffer(order.len(), n)?;

        if self.preset_order {
            Validator::validate_preset_order(order, self.index_base, n)?;
            normalize_order(order, self.index_base);
        } else {
            fill_identity(order);
        }

        let summary = ArgsortExecutor::run(&view, order, &self.config)?;
        restore_order(order, self.index_base);

        Ok(summary)
    }
}
