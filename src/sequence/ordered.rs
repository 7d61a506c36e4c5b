//! In-place ordered operations: deduplication, reversal, sorting,
//! prefix/suffix trimming, chunking, and windowing.
//!
//! Every operation here materializes pending filters first, mutates the
//! backing vector in place, and returns `&mut Self` for chaining.

use std::cmp::Ordering;
use std::hash::Hash;

use rustc_hash::FxBuildHasher;
use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::resolve::StructuralHash;
use crate::resolve::content_hash;
use crate::sequence::Sequence;

/// Dedup key for elements compared through the structural-hash policy.
///
/// Values whose structural hash succeeds share a key when their contents
/// match; a value that cannot be hashed keys on its own slot, so it is only
/// ever identical to itself.
#[derive(PartialEq, Eq, Hash)]
enum StructuralKey {
    Content(u64),
    Slot(usize),
}

// =============================================================================
// Deduplication
// =============================================================================

impl<T> Sequence<T> {
    /// Compacts the sequence to the first occurrence of each element,
    /// preserving order.
    ///
    /// Equality is exact: candidate elements are bucketed by content hash
    /// and confirmed with `==`, so hash collisions never merge unequal
    /// elements. Standard containers hash and compare by content, which
    /// makes two separately allocated vectors with equal elements collapse
    /// to one entry.
    ///
    /// Runs in one forward pass, O(n) time and O(n) auxiliary key storage.
    pub fn distinct(&mut self) -> &mut Self
    where
        T: Hash + Eq,
    {
        self.materialize();
        let mut seen: FxHashMap<u64, SmallVec<[usize; 1]>> =
            FxHashMap::with_capacity_and_hasher(self.elements.len(), FxBuildHasher::default());
        let mut kept = 0;
        for index in 0..self.elements.len() {
            let digest = content_hash(&self.elements[index]);
            let slots = seen.entry(digest).or_default();
            if slots
                .iter()
                .any(|&slot| self.elements[slot] == self.elements[index])
            {
                continue;
            }
            slots.push(kept);
            self.elements.swap(kept, index);
            kept += 1;
        }
        self.elements.truncate(kept);
        self
    }

    /// Compacts the sequence to the first occurrence of each element, keyed
    /// by [`StructuralHash`], for element types that cannot offer
    /// `Hash + Eq`.
    ///
    /// Two values with equal structural hashes merge without further
    /// comparison; a value whose hash is unavailable falls back to storage
    /// identity and is never merged with anything, even a structurally equal
    /// value. Both caveats are deliberate: this is the weak-guarantee path
    /// for shapes outside exact equality.
    pub fn distinct_structural(&mut self) -> &mut Self
    where
        T: StructuralHash,
    {
        self.materialize();
        let mut seen: FxHashSet<StructuralKey> =
            FxHashSet::with_capacity_and_hasher(self.elements.len(), FxBuildHasher::default());
        let mut kept = 0;
        for index in 0..self.elements.len() {
            let key = match self.elements[index].structural_hash() {
                Some(digest) => StructuralKey::Content(digest),
                None => StructuralKey::Slot(index),
            };
            if !seen.insert(key) {
                continue;
            }
            self.elements.swap(kept, index);
            kept += 1;
        }
        self.elements.truncate(kept);
        self
    }

    /// Removes consecutive duplicate elements, keeping the first of each
    /// run.
    pub fn dedup(&mut self) -> &mut Self
    where
        T: PartialEq,
    {
        self.materialize();
        self.elements.dedup();
        self
    }
}

// =============================================================================
// Reordering
// =============================================================================

impl<T> Sequence<T> {
    /// Reverses the backing elements in place.
    pub fn reversed(&mut self) -> &mut Self {
        self.materialize();
        self.elements.reverse();
        self
    }

    /// Sorts the backing elements in increasing order (stable).
    pub fn sorted(&mut self) -> &mut Self
    where
        T: Ord,
    {
        self.materialize();
        self.elements.sort();
        self
    }

    /// Sorts the backing elements with the given comparator (stable).
    pub fn sorted_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) -> &mut Self {
        self.materialize();
        self.elements.sort_by(compare);
        self
    }
}

// =============================================================================
// Prefix and suffix trimming
// =============================================================================

impl<T> Sequence<T> {
    /// Keeps the first `count` elements. Counts beyond the current length
    /// clamp to the length; `take(0)` clears the sequence.
    pub fn take(&mut self, count: usize) -> &mut Self {
        self.materialize();
        self.elements.truncate(count);
        self
    }

    /// Removes the first `count` elements. Counts beyond the current length
    /// clamp to the length; `drop(0)` is a no-op.
    pub fn drop(&mut self, count: usize) -> &mut Self {
        self.materialize();
        let count = count.min(self.elements.len());
        self.elements.drain(..count);
        self
    }
}

// =============================================================================
// Per-element visitors
// =============================================================================

impl<T> Sequence<T> {
    /// Calls `inspect` on each element in order, then returns the sequence
    /// for further chaining.
    pub fn on_each(&mut self, mut inspect: impl FnMut(&T)) -> &mut Self {
        self.materialize();
        for element in &self.elements {
            inspect(element);
        }
        self
    }

    /// Replaces each element with `transform` applied to it, in place and in
    /// order.
    pub fn apply_on_each(&mut self, mut transform: impl FnMut(&T) -> T) -> &mut Self {
        self.materialize();
        for element in &mut self.elements {
            *element = transform(element);
        }
        self
    }
}

// =============================================================================
// Chunking and windowing
// =============================================================================

impl<T: Clone> Sequence<T> {
    /// Splits the sequence into consecutive chunks of `size` elements; the
    /// last chunk may be shorter. Concatenating the chunks reproduces the
    /// sequence.
    ///
    /// `size` must be positive; the core does not validate it.
    pub fn chunked(&mut self, size: usize) -> Vec<Vec<T>> {
        self.materialize();
        self.elements.chunks(size).map(<[T]>::to_vec).collect()
    }

    /// Returns windows of `size` elements, each starting `step` elements
    /// after the previous one.
    ///
    /// Without `partial`, every returned window has exactly `size` elements,
    /// so a sequence shorter than `size` yields no windows. With `partial`,
    /// at most one trailing shorter window covers the remainder.
    ///
    /// `size` and `step` must be positive; the core does not validate them.
    pub fn windowed(&mut self, size: usize, step: usize, partial: bool) -> Vec<Vec<T>> {
        self.materialize();
        let length = self.elements.len();
        let mut windows = Vec::with_capacity(length / step.max(1) + 1);
        let mut start = 0;
        while start + size <= length {
            windows.push(self.elements[start..start + size].to_vec());
            start += step;
        }
        if partial && start < length {
            windows.push(self.elements[start..].to_vec());
        }
        windows
    }
}

// =============================================================================
// Tests
// =============================================================================
