//! Terminal read operations.
//!
//! Every operation here materializes pending filters before inspecting the
//! elements. Empty-source aggregations return the type's zero-equivalent
//! (`Default::default()`, or the additive zero from `Sum`) rather than
//! failing; the one shape-dependent policy is [`contains`](Sequence::contains),
//! which conservatively reports false for container-like element shapes.

use std::fmt::Display;
use std::iter::Sum;

use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Calls `action` on each element in order.
    pub fn for_each(&mut self, action: impl FnMut(&T)) {
        self.materialize();
        self.elements.iter().for_each(action);
    }

    /// Whether at least one element matches the predicate.
    pub fn any(&mut self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        self.materialize();
        self.elements.iter().any(|element| predicate(element))
    }

    /// Whether every element matches the predicate. True for an empty
    /// sequence.
    pub fn all(&mut self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        self.materialize();
        self.elements.iter().all(|element| predicate(element))
    }

    /// Whether no element matches the predicate.
    pub fn none(&mut self, predicate: impl FnMut(&T) -> bool) -> bool {
        !self.any(predicate)
    }

    /// Number of elements after materialization.
    pub fn count(&mut self) -> usize {
        self.materialize();
        self.elements.len()
    }

    /// Number of elements matching the predicate.
    pub fn count_by(&mut self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.materialize();
        self.elements
            .iter()
            .filter(|element| predicate(element))
            .count()
    }
}

// =============================================================================
// Element selection
// =============================================================================

impl<T: Clone + Default> Sequence<T> {
    /// The first element, or the type's default when the sequence is empty.
    pub fn first(&mut self) -> T {
        self.materialize();
        self.elements.first().cloned().unwrap_or_default()
    }

    /// The last element, or the type's default when the sequence is empty.
    pub fn last(&mut self) -> T {
        self.materialize();
        self.elements.last().cloned().unwrap_or_default()
    }

    /// The first element matching the predicate, or the type's default when
    /// none does.
    pub fn first_by(&mut self, mut predicate: impl FnMut(&T) -> bool) -> T {
        self.materialize();
        self.elements
            .iter()
            .find(|element| predicate(element))
            .cloned()
            .unwrap_or_default()
    }
}

// =============================================================================
// Aggregation
// =============================================================================

impl<T> Sequence<T> {
    /// Sum of all elements; the additive zero for an empty sequence.
    pub fn sum(&mut self) -> T
    where
        T: Clone + Sum,
    {
        self.materialize();
        self.elements.iter().cloned().sum()
    }

    /// The smallest element, or the type's default for an empty sequence.
    pub fn min(&mut self) -> T
    where
        T: Ord + Clone + Default,
    {
        self.materialize();
        self.elements.iter().min().cloned().unwrap_or_default()
    }

    /// The largest element, or the type's default for an empty sequence.
    pub fn max(&mut self) -> T
    where
        T: Ord + Clone + Default,
    {
        self.materialize();
        self.elements.iter().max().cloned().unwrap_or_default()
    }

    /// Sum of the values `selector` produces for each element.
    pub fn sum_by(&mut self, mut selector: impl FnMut(&T) -> i64) -> i64 {
        self.materialize();
        self.elements.iter().map(|element| selector(element)).sum()
    }
}

// =============================================================================
// Rendering and membership
// =============================================================================

impl<T> Sequence<T> {
    /// Renders every element with its `Display` impl, separated by
    /// `separator`.
    pub fn join_to_string(&mut self, separator: &str) -> String
    where
        T: Display,
    {
        self.materialize();
        let mut joined = String::new();
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                joined.push_str(separator);
            }
            joined.push_str(&element.to_string());
        }
        joined
    }

    /// Whether `element` is present in the sequence.
    ///
    /// For container-like element shapes this always reports false, even for
    /// a value present by content: safe value comparison cannot be
    /// guaranteed generically for those shapes, so membership degrades
    /// conservatively. Pending filters are still applied first.
    pub fn contains(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.materialize();
        if !self.shape().is_comparable() {
            return false;
        }
        self.elements.contains(element)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::sequence::Sequence;

    #[test]
    fn test_empty_selection_yields_zero_equivalents() {
        let mut empty = Sequence::<i32>::new();
        assert_eq!(empty.first(), 0);
        assert_eq!(empty.last(), 0);
        assert_eq!(empty.min(), 0);
        assert_eq!(empty.max(), 0);
        assert_eq!(empty.sum(), 0);
    }

    #[test]
    fn test_contains_is_conservative_for_container_shapes() {
        let mut nested = Sequence::of([vec![1, 2], vec![3]]);
        assert!(!nested.contains(&vec![1, 2]));
    }

    #[test]
    fn test_contains_materializes_before_answering() {
        let mut nested = Sequence::of([vec![1, 2], vec![3]]);
        nested.filter(|chunk| chunk.len() == 1);
        assert!(!nested.contains(&vec![1, 2]));
        assert_eq!(nested.count(), 1);
    }

    #[test]
    fn test_join_to_string_mixed_rendering() {
        assert_eq!(Sequence::of([1, 2, 3]).join_to_string(", "), "1, 2, 3");
        assert_eq!(Sequence::<i32>::new().join_to_string(", "), "");
    }
}
