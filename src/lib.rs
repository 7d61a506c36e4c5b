//! # kedja
//!
//! A chainable sequence-processing library: lazily registered filters with
//! exactly-once materialization, shape-aware equality resolution,
//! order-preserving deduplication, and a two-strategy parallel map.
//!
//! ## Overview
//!
//! [`Sequence`](sequence::Sequence) wraps an ordered in-memory collection.
//! Filters registered on it are pure metadata until the next reading
//! operation, which applies the whole batch conjunctively in one stable
//! in-place pass. On top of that core, the crate provides:
//!
//! - **Ordered operations**: distinct, dedup, reverse, sort, take/drop,
//!   chunking, windowing — all in place, all chainable.
//! - **Equality resolution**: compile-time shape classification
//!   ([`resolve::ShapeOf`]) and content-derived structural hashing
//!   ([`resolve::StructuralHash`]) so container-like elements deduplicate by
//!   content while membership queries stay conservative.
//! - **Parallel mapping**: per-element or batched fan-out over scoped
//!   threads, order-preserving, with a mandatory join barrier (`parallel`
//!   feature, enabled by default).
//! - **Integer convenience**: [`ints::IntSequence`] with range construction
//!   and integer aggregation.
//!
//! ## Feature Flags
//!
//! - `parallel` (default): scoped-thread parallel mapping
//!   ([`Sequence::par_map`](sequence::Sequence::par_map)).
//!
//! ## Example
//!
//! ```rust
//! use kedja::prelude::*;
//!
//! let survivors = Sequence::of([3, 1, 4, 1, 5, 9, 2, 6])
//!     .filter(|n| *n > 1)
//!     .distinct()
//!     .sorted()
//!     .to_vec();
//! assert_eq!(survivors, vec![2, 3, 4, 5, 6, 9]);
//!
//! let total = IntSequence::range(1, 100).filter(|n| n % 7 == 0).sum();
//! assert_eq!(total, 735);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kedja::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ints::IntSequence;
    pub use crate::resolve::Shape;
    pub use crate::resolve::ShapeOf;
    pub use crate::resolve::StructuralHash;
    #[cfg(feature = "parallel")]
    pub use crate::sequence::ParallelStrategy;
    pub use crate::sequence::Predicate;
    pub use crate::sequence::Sequence;
}

pub mod ints;
pub mod resolve;
pub mod sequence;
