//! Concatenation of sequences: `plus`, `append`, and `merge`.
//!
//! All three materialize their inputs first, then concatenate in argument
//! order with no deduplication and no reordering; the result's length is the
//! sum of the inputs' materialized lengths.

use crate::resolve::ShapeOf;
use crate::sequence::Sequence;

impl<T: ShapeOf + Clone> Sequence<T> {
    /// Returns a new sequence holding this sequence's elements followed by
    /// `other`'s. Both sources are materialized and left otherwise
    /// unchanged.
    pub fn plus(&mut self, other: &mut Self) -> Self {
        self.materialize();
        other.materialize();
        let mut merged = Vec::with_capacity(self.elements.len() + other.elements.len());
        merged.extend_from_slice(&self.elements);
        merged.extend_from_slice(&other.elements);
        Self::from_vec(merged)
    }
}

impl<T: ShapeOf> Sequence<T> {
    /// Concatenates any number of sequences into a new one, in argument
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kedja::sequence::Sequence;
    ///
    /// let merged = Sequence::merge([
    ///     Sequence::of([1, 2]),
    ///     Sequence::of([3]),
    ///     Sequence::of([4, 5]),
    /// ]);
    /// assert_eq!(merged.into_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn merge(sequences: impl IntoIterator<Item = Self>) -> Self {
        let mut merged = Vec::new();
        for mut sequence in sequences {
            sequence.materialize();
            merged.append(&mut sequence.elements);
        }
        Self::from_vec(merged)
    }
}

impl<T> Sequence<T> {
    /// Appends the given elements to this sequence in place.
    pub fn append(&mut self, elements: impl IntoIterator<Item = T>) -> &mut Self {
        self.materialize();
        self.elements.extend(elements);
        self
    }
}

// =============================================================================
// Tests
// =============================================================================
