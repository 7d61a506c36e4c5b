//! The ordered container and its filter materializer.
//!
//! [`Sequence`] owns a fully materialized backing vector plus a queue of
//! pending predicates. Registering a filter touches no elements; the first
//! operation that reads the sequence applies every pending predicate in one
//! stable in-place pass and clears the queue. The two-state design keeps
//! laziness explicit: a sequence is either "pending predicates" or
//! "materialized", never both after a public call returns.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::resolve::Shape;
use crate::resolve::ShapeOf;

/// A registered element predicate, applied at the next materialization.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool>;

/// Pending queues are short in practice; this many predicates live inline
/// before the queue spills to the heap.
const INLINE_PREDICATES: usize = 4;

// =============================================================================
// Sequence Definition
// =============================================================================

/// A chainable, ordered, in-memory sequence with lazily applied filters.
///
/// Insertion order is the iteration and output order. Filters registered
/// with [`filter`](Self::filter) are pure metadata until the next reading
/// operation, which applies them all conjunctively in a single pass.
///
/// # Receiver conventions
///
/// - In-place operations (`filter`, `distinct`, `reversed`, `take`, ...)
///   borrow mutably and return `&mut Self` so calls chain on one container.
/// - Producing operations (`map`, `flat_map`, `plus`, `par_map`) materialize
///   the source and return a brand-new sequence, leaving the source usable.
/// - Terminal reads return plain values or plain collections.
///
/// A sequence is not safe for concurrent mutation from multiple callers; the
/// only internal concurrency is the fan-out inside
/// [`par_map`](Self::par_map).
///
/// # Examples
///
/// ```rust
/// use kedja::sequence::Sequence;
///
/// let survivors = Sequence::of([1, 2, 3, 4, 5, 6])
///     .filter(|n| n % 2 == 0)
///     .filter(|n| *n > 2)
///     .to_vec();
/// assert_eq!(survivors, vec![4, 6]);
/// ```
pub struct Sequence<T> {
    pub(crate) elements: Vec<T>,
    pending: SmallVec<[Predicate<T>; INLINE_PREDICATES]>,
    shape: Shape,
}

// =============================================================================
// Construction
// =============================================================================

impl<T: ShapeOf> Sequence<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Creates a sequence that takes over the caller's buffer without
    /// copying. [`into_vec`](Self::into_vec) hands the same buffer back.
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::with_shape(elements, T::SHAPE)
    }

    /// Creates a sequence from the given elements.
    ///
    /// Arrays serve as the literal form: `Sequence::of([1, 2, 3])`.
    pub fn of(elements: impl IntoIterator<Item = T>) -> Self {
        Self::from_vec(elements.into_iter().collect())
    }
}

impl<T: ShapeOf + Clone> Sequence<T> {
    /// Creates a sequence backed by a copy of the given slice, preserving
    /// the caller's storage.
    pub fn copy_from(elements: &[T]) -> Self {
        Self::from_vec(elements.to_vec())
    }
}

impl<T: ShapeOf> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> {
    /// Creates a sequence with an explicitly supplied shape tag, for element
    /// types without a [`ShapeOf`] impl.
    pub fn with_shape(elements: Vec<T>, shape: Shape) -> Self {
        Self {
            elements,
            pending: SmallVec::new(),
            shape,
        }
    }

    /// The shape class recorded at construction.
    pub fn shape(&self) -> Shape {
        self.shape
    }
}

// =============================================================================
// Filter registration and materialization
// =============================================================================

impl<T> Sequence<T> {
    /// Registers a predicate to apply at the next reading operation.
    ///
    /// Registration is O(1) and touches no elements; all registered
    /// predicates are applied conjunctively, in registration order with
    /// short-circuiting, by the next operation that inspects the sequence.
    pub fn filter(&mut self, predicate: impl Fn(&T) -> bool + 'static) -> &mut Self {
        self.pending.push(Box::new(predicate));
        self
    }

    /// Applies all pending predicates in one stable in-place pass and
    /// clears the queue. A no-op when nothing is pending, so repeated calls
    /// are idempotent. Removed elements are dropped during the pass.
    pub(crate) fn materialize(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending);
        self.elements
            .retain(|element| pending.iter().all(|keep| keep(element)));
    }

    /// Number of predicates awaiting materialization.
    #[cfg(test)]
    pub(crate) fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

// =============================================================================
// Buffer access
// =============================================================================

impl<T> Sequence<T> {
    /// Materializes and clones the backing elements out.
    pub fn to_vec(&mut self) -> Vec<T>
    where
        T: Clone,
    {
        self.materialize();
        self.elements.clone()
    }

    /// Materializes and consumes the sequence, returning the backing buffer.
    pub fn into_vec(mut self) -> Vec<T> {
        self.materialize();
        self.elements
    }
}

// =============================================================================
// Eager transforms
// =============================================================================

impl<T> Sequence<T> {
    /// Materializes, then returns a new sequence holding the results of
    /// applying `transform` to each element in order. The source stays
    /// materialized and otherwise unchanged.
    pub fn map<U: ShapeOf>(&mut self, transform: impl FnMut(&T) -> U) -> Sequence<U> {
        self.materialize();
        Sequence::from_vec(self.elements.iter().map(transform).collect())
    }

    /// Materializes, then returns a single sequence of every element yielded
    /// by the sequences `transform` produces, in order.
    pub fn flat_map<U: ShapeOf>(
        &mut self,
        mut transform: impl FnMut(&T) -> Sequence<U>,
    ) -> Sequence<U> {
        self.materialize();
        let mut flattened = Vec::new();
        for element in &self.elements {
            flattened.append(&mut transform(element).into_vec());
        }
        Sequence::from_vec(flattened)
    }

    /// Accumulates a value starting from `start`, combining the accumulator
    /// with each element from left to right.
    pub fn reduce<U>(&mut self, start: U, combine: impl FnMut(U, &T) -> U) -> U {
        self.materialize();
        self.elements.iter().fold(start, combine)
    }

    /// Groups elements by the key `key_of` produces for each, preserving
    /// first-seen key order across the grouping's iteration; per-group order
    /// is insertion order.
    pub fn group_by<K>(&mut self, mut key_of: impl FnMut(&T) -> K) -> IndexMap<K, Vec<T>>
    where
        K: Hash + Eq,
        T: Clone,
    {
        self.materialize();
        let mut groups: IndexMap<K, Vec<T>> = IndexMap::with_capacity(self.elements.len());
        for element in &self.elements {
            groups.entry(key_of(element)).or_default().push(element.clone());
        }
        groups
    }
}

// =============================================================================
// Debug
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Sequence")
            .field("elements", &self.elements)
            .field("pending", &self.pending.len())
            .field("shape", &self.shape)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
