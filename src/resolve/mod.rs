//! Equality and identity resolution for sequence elements.
//!
//! Deduplication and membership queries need to decide when two elements are
//! "the same", and the safe answer depends on the element's shape:
//!
//! - [`Shape`] / [`ShapeOf`]: classifies an element type as directly
//!   comparable by value, an aggregate of comparable fields, or
//!   container-like (sequences, mappings, fixed-size arrays, function
//!   references). The classification is fixed when a
//!   [`Sequence`](crate::sequence::Sequence) is constructed and drives the
//!   conservative membership policy for container-like elements.
//! - [`StructuralHash`]: a content-derived key that compares container-like
//!   values by their contents rather than their backing storage, with an
//!   explicit "cannot be hashed" escape for shapes such as boxed closures.
//!
//! # Examples
//!
//! ```rust
//! use kedja::resolve::{Shape, ShapeOf, StructuralHash};
//!
//! assert_eq!(<i32 as ShapeOf>::SHAPE, Shape::Value);
//! assert_eq!(<Vec<i32> as ShapeOf>::SHAPE, Shape::Container);
//!
//! // Content-based: two separately allocated vectors hash alike.
//! let first = vec![1, 2];
//! let second = vec![1, 2];
//! assert_eq!(first.structural_hash(), second.structural_hash());
//! ```

mod shape;
mod structural;

pub use shape::Shape;
pub use shape::ShapeOf;
pub use structural::StructuralHash;

pub(crate) use structural::content_hash;
