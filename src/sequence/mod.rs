//! The chainable ordered sequence and its operations.
//!
//! [`Sequence`] wraps an ordered, fully materialized in-memory collection
//! and exposes:
//!
//! - lazy, conjunctive filter registration applied exactly once per batch
//!   by the next reading operation ([`filter`](Sequence::filter));
//! - in-place ordered operations — [`distinct`](Sequence::distinct),
//!   [`distinct_structural`](Sequence::distinct_structural),
//!   [`dedup`](Sequence::dedup), [`reversed`](Sequence::reversed),
//!   [`sorted`](Sequence::sorted), [`take`](Sequence::take),
//!   [`drop`](Sequence::drop), [`chunked`](Sequence::chunked),
//!   [`windowed`](Sequence::windowed);
//! - eager transforms producing new sequences — [`map`](Sequence::map),
//!   [`flat_map`](Sequence::flat_map), [`plus`](Sequence::plus),
//!   [`Sequence::merge`];
//! - terminal reads — [`to_vec`](Sequence::to_vec),
//!   [`reduce`](Sequence::reduce), [`group_by`](Sequence::group_by),
//!   [`any`](Sequence::any), [`count`](Sequence::count),
//!   [`sum`](Sequence::sum), [`join_to_string`](Sequence::join_to_string),
//!   and friends;
//! - with the `parallel` feature, a two-strategy parallel map
//!   ([`par_map`](Sequence::par_map)).
//!
//! # Examples
//!
//! ```rust
//! use kedja::sequence::Sequence;
//!
//! let rendered = Sequence::of([3, 1, 2, 2, 3])
//!     .filter(|n| *n > 1)
//!     .distinct()
//!     .sorted()
//!     .join_to_string("-");
//! assert_eq!(rendered, "2-3");
//! ```

mod core;
mod merging;
mod ordered;
#[cfg(feature = "parallel")]
mod parallel;
mod terminal;

pub use self::core::Predicate;
pub use self::core::Sequence;
#[cfg(feature = "parallel")]
pub use parallel::ParallelStrategy;
