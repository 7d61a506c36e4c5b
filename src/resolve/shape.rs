//! Compile-time element shape classification.
//!
//! [`ShapeOf`] replaces runtime type inspection with a trait bound: every
//! element type declares its [`Shape`] as an associated constant, and the
//! impls below cover the primitive, aggregate, and container types a caller
//! is likely to put in a sequence. Types outside the grid either implement
//! the trait themselves (one line for a user struct) or are tagged
//! explicitly through [`Sequence::with_shape`](crate::sequence::Sequence::with_shape).

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;

// =============================================================================
// Shape
// =============================================================================

/// Classification of an element type for equality purposes.
///
/// The shape is fixed when a sequence is constructed and decides which
/// comparison strategy membership queries and deduplication may safely use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Directly comparable by value: numbers, booleans, characters, strings.
    Value,
    /// An aggregate whose fields are themselves comparable: tuples, options,
    /// user structs of comparable fields.
    Aggregate,
    /// Container-like: ordered sequences, mappings, sets, fixed-size arrays,
    /// and function references. Plain value equality is not trusted for
    /// these; membership queries degrade to a conservative "not found".
    Container,
}

impl Shape {
    /// Whether membership queries may compare elements of this shape by value.
    pub(crate) const fn is_comparable(self) -> bool {
        !matches!(self, Self::Container)
    }
}

// =============================================================================
// ShapeOf
// =============================================================================

/// Declares the [`Shape`] of an element type.
///
/// Implement this for your own aggregate types to use the shape-bounded
/// sequence constructors:
///
/// ```rust
/// use kedja::resolve::{Shape, ShapeOf};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl ShapeOf for Point {
///     const SHAPE: Shape = Shape::Aggregate;
/// }
/// ```
pub trait ShapeOf {
    /// The shape class of this type.
    const SHAPE: Shape;
}

impl<T: ShapeOf + ?Sized> ShapeOf for &T {
    const SHAPE: Shape = T::SHAPE;
}

impl<T: ShapeOf + ?Sized> ShapeOf for Box<T> {
    const SHAPE: Shape = T::SHAPE;
}

// =============================================================================
// Value shapes
// =============================================================================

macro_rules! impl_value_shape {
    ($($target:ty),* $(,)?) => {
        $(
            impl ShapeOf for $target {
                const SHAPE: Shape = Shape::Value;
            }
        )*
    };
}

impl_value_shape!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, str,
    String,
);

// =============================================================================
// Aggregate shapes
// =============================================================================

impl<T: ShapeOf> ShapeOf for Option<T> {
    const SHAPE: Shape = Shape::Aggregate;
}

macro_rules! impl_aggregate_shape_for_tuple {
    ($($member:ident),+) => {
        impl<$($member: ShapeOf),+> ShapeOf for ($($member,)+) {
            const SHAPE: Shape = Shape::Aggregate;
        }
    };
}

impl_aggregate_shape_for_tuple!(A, B);
impl_aggregate_shape_for_tuple!(A, B, C);
impl_aggregate_shape_for_tuple!(A, B, C, D);

// =============================================================================
// Container shapes
// =============================================================================

impl<T> ShapeOf for Vec<T> {
    const SHAPE: Shape = Shape::Container;
}

impl<T> ShapeOf for VecDeque<T> {
    const SHAPE: Shape = Shape::Container;
}

impl<T, const N: usize> ShapeOf for [T; N] {
    const SHAPE: Shape = Shape::Container;
}

impl<T> ShapeOf for [T] {
    const SHAPE: Shape = Shape::Container;
}

impl<K, V, S> ShapeOf for HashMap<K, V, S> {
    const SHAPE: Shape = Shape::Container;
}

impl<K, V> ShapeOf for BTreeMap<K, V> {
    const SHAPE: Shape = Shape::Container;
}

impl<T, S> ShapeOf for HashSet<T, S> {
    const SHAPE: Shape = Shape::Container;
}

impl<T> ShapeOf for BTreeSet<T> {
    const SHAPE: Shape = Shape::Container;
}

macro_rules! impl_container_shape_for_fn {
    ($($argument:ident),*) => {
        impl<$($argument,)* R> ShapeOf for fn($($argument),*) -> R {
            const SHAPE: Shape = Shape::Container;
        }

        impl<$($argument,)* R> ShapeOf for dyn Fn($($argument),*) -> R {
            const SHAPE: Shape = Shape::Container;
        }
    };
}

impl_container_shape_for_fn!();
impl_container_shape_for_fn!(A);
impl_container_shape_for_fn!(A, B);
impl_container_shape_for_fn!(A, B, C);

// =============================================================================
// Tests
// =============================================================================
