//! Parallel mapping over a materialized sequence.
//!
//! The engine partitions the index range over scoped worker threads. Each
//! index is owned by exactly one worker and each worker writes into its own
//! disjoint output slots, so writes never race and the result preserves the
//! source's index-to-position correspondence regardless of scheduling.
//!
//! `std::thread::scope` provides the join barrier: the call cannot return
//! before every worker finishes, and a worker panic resurfaces in the
//! caller once all workers have been joined.

use std::thread;

use crate::resolve::ShapeOf;
use crate::sequence::Sequence;

/// Work-distribution strategy for [`Sequence::par_map`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParallelStrategy {
    /// One worker per element. The simplest partitioning; not recommended
    /// for very large sequences because every element costs a thread.
    PerElement,
    /// Contiguous segments, one worker per segment. The segment count is
    /// derived from the host's available parallel execution units and the
    /// source length; every segment holds at least one index and only the
    /// last may be shorter.
    #[default]
    Batched,
}

impl<T: Sync> Sequence<T> {
    /// Materializes, then returns a new sequence where the element at each
    /// index is `transform` applied to the source element at that index.
    /// Order is always preserved, under either strategy.
    ///
    /// Blocks until every worker has finished. `transform` must be safe to
    /// call concurrently; it shares no mutable state beyond the disjoint
    /// output slot each call owns. A panic inside `transform` is not caught:
    /// it is fatal to the whole call, with no partial result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kedja::sequence::{ParallelStrategy, Sequence};
    ///
    /// let roots = Sequence::of([1.0_f64, 4.0, 9.0])
    ///     .par_map(ParallelStrategy::Batched, |n| n.sqrt())
    ///     .into_vec();
    /// assert_eq!(roots, vec![1.0, 2.0, 3.0]);
    /// ```
    pub fn par_map<U>(
        &mut self,
        strategy: ParallelStrategy,
        transform: impl Fn(&T) -> U + Sync,
    ) -> Sequence<U>
    where
        U: Send + ShapeOf,
    {
        self.materialize();
        if self.elements.is_empty() {
            return Sequence::from_vec(Vec::new());
        }

        let mut results: Vec<Option<U>> = Vec::new();
        results.resize_with(self.elements.len(), || None);
        let transform = &transform;

        match strategy {
            ParallelStrategy::PerElement => {
                thread::scope(|scope| {
                    for (slot, element) in results.iter_mut().zip(&self.elements) {
                        scope.spawn(move || *slot = Some(transform(element)));
                    }
                });
            }
            ParallelStrategy::Batched => {
                let workers = num_cpus::get().clamp(1, self.elements.len());
                let segment = self.elements.len().div_ceil(workers);
                thread::scope(|scope| {
                    for (slots, elements) in
                        results.chunks_mut(segment).zip(self.elements.chunks(segment))
                    {
                        scope.spawn(move || {
                            for (slot, element) in slots.iter_mut().zip(elements) {
                                *slot = Some(transform(element));
                            }
                        });
                    }
                });
            }
        }

        Sequence::from_vec(results.into_iter().flatten().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
