//! Integer-specialized sequence wrapper.
//!
//! [`IntSequence`] wraps a `Sequence<i64>` and adds range construction plus
//! integer aggregation (`sum`, `min`, `max`, `average`, `sorted`). It is a
//! plain consumer of the public [`Sequence`] contract; nothing here reaches
//! into pending-filter or shape state.
//!
//! # Examples
//!
//! ```rust
//! use kedja::ints::IntSequence;
//!
//! let total = IntSequence::range(1, 10).filter(|n| n % 2 == 0).sum();
//! assert_eq!(total, 30);
//! ```

use crate::sequence::Sequence;

/// A fluent sequence of `i64` values.
///
/// Construction covers the same three modes as [`Sequence`] plus inclusive
/// ranges; aggregations return 0 for an empty sequence.
#[derive(Debug)]
pub struct IntSequence {
    inner: Sequence<i64>,
}

// =============================================================================
// Construction
// =============================================================================

impl IntSequence {
    /// A sequential sequence from `from` to `to`, both inclusive. Empty when
    /// `to < from`.
    pub fn range(from: i64, to: i64) -> Self {
        if to < from {
            return Self::of([]);
        }
        Self {
            inner: Sequence::of(from..=to),
        }
    }

    /// A sequence of the given values.
    pub fn of(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            inner: Sequence::of(values),
        }
    }

    /// A sequence taking over the caller's buffer without copying.
    pub fn from_vec(values: Vec<i64>) -> Self {
        Self {
            inner: Sequence::from_vec(values),
        }
    }

    /// A sequence backed by a copy of the given slice.
    pub fn copy_from(values: &[i64]) -> Self {
        Self {
            inner: Sequence::copy_from(values),
        }
    }
}

// =============================================================================
// Integer aggregation
// =============================================================================

impl IntSequence {
    /// Sum of all values; 0 when empty.
    pub fn sum(&mut self) -> i64 {
        self.inner.sum()
    }

    /// The smallest value; 0 when empty.
    pub fn min(&mut self) -> i64 {
        self.inner.min()
    }

    /// The largest value; 0 when empty.
    pub fn max(&mut self) -> i64 {
        self.inner.max()
    }

    /// Arithmetic mean, truncated toward zero; 0 when empty.
    pub fn average(&mut self) -> i64 {
        let count = i64::try_from(self.inner.count()).unwrap_or(i64::MAX);
        if count == 0 {
            return 0;
        }
        self.inner.sum() / count
    }

    /// Sorts the values in increasing order.
    pub fn sorted(&mut self) -> &mut Self {
        self.inner.sorted();
        self
    }
}

// =============================================================================
// Adapter operations
// =============================================================================

impl IntSequence {
    /// See [`Sequence::filter`].
    pub fn filter(&mut self, predicate: impl Fn(&i64) -> bool + 'static) -> &mut Self {
        self.inner.filter(predicate);
        self
    }

    /// See [`Sequence::distinct`].
    pub fn distinct(&mut self) -> &mut Self {
        self.inner.distinct();
        self
    }

    /// See [`Sequence::reversed`].
    pub fn reversed(&mut self) -> &mut Self {
        self.inner.reversed();
        self
    }

    /// See [`Sequence::take`].
    pub fn take(&mut self, count: usize) -> &mut Self {
        self.inner.take(count);
        self
    }

    /// See [`Sequence::drop`].
    pub fn drop(&mut self, count: usize) -> &mut Self {
        self.inner.drop(count);
        self
    }

    /// See [`Sequence::on_each`].
    pub fn on_each(&mut self, inspect: impl FnMut(&i64)) -> &mut Self {
        self.inner.on_each(inspect);
        self
    }

    /// See [`Sequence::apply_on_each`].
    pub fn apply_on_each(&mut self, transform: impl FnMut(&i64) -> i64) -> &mut Self {
        self.inner.apply_on_each(transform);
        self
    }

    /// See [`Sequence::append`].
    pub fn append(&mut self, values: impl IntoIterator<Item = i64>) -> &mut Self {
        self.inner.append(values);
        self
    }
}

// =============================================================================
// Terminal passthroughs
// =============================================================================

impl IntSequence {
    /// See [`Sequence::to_vec`].
    pub fn to_vec(&mut self) -> Vec<i64> {
        self.inner.to_vec()
    }

    /// See [`Sequence::count`].
    pub fn count(&mut self) -> usize {
        self.inner.count()
    }

    /// See [`Sequence::first`].
    pub fn first(&mut self) -> i64 {
        self.inner.first()
    }

    /// See [`Sequence::last`].
    pub fn last(&mut self) -> i64 {
        self.inner.last()
    }

    /// See [`Sequence::contains`].
    pub fn contains(&mut self, value: i64) -> bool {
        self.inner.contains(&value)
    }

    /// See [`Sequence::join_to_string`].
    pub fn join_to_string(&mut self, separator: &str) -> String {
        self.inner.join_to_string(separator)
    }
}

// =============================================================================
// Escape to the generic sequence
// =============================================================================

impl IntSequence {
    /// Borrows the wrapped generic sequence.
    pub fn as_sequence(&self) -> &Sequence<i64> {
        &self.inner
    }

    /// Mutably borrows the wrapped generic sequence.
    pub fn as_sequence_mut(&mut self) -> &mut Sequence<i64> {
        &mut self.inner
    }

    /// Unwraps into the generic sequence.
    pub fn into_sequence(self) -> Sequence<i64> {
        self.inner
    }
}

impl From<Sequence<i64>> for IntSequence {
    fn from(inner: Sequence<i64>) -> Self {
        Self { inner }
    }
}
