//! Unit tests for in-place ordered operations: deduplication, reversal,
//! sorting, trimming, chunking, and windowing.

use kedja::sequence::Sequence;

// =============================================================================
// distinct
// =============================================================================

#[test]
fn test_distinct_removes_later_duplicates() {
    assert_eq!(
        Sequence::of([1, 2, 2, 2, 3]).distinct().to_vec(),
        vec![1, 2, 3]
    );
}

#[test]
fn test_distinct_preserves_first_occurrence_order() {
    assert_eq!(
        Sequence::of([3, 1, 3, 2, 1]).distinct().to_vec(),
        vec![3, 1, 2]
    );
}

#[test]
fn test_distinct_is_idempotent() {
    let mut sequence = Sequence::of([1, 2, 3, 3]);
    sequence.distinct();
    let once = sequence.to_vec();
    sequence.distinct();
    assert_eq!(sequence.to_vec(), once);
}

#[test]
fn test_distinct_on_strings() {
    let words = Sequence::of(["b".to_string(), "a".to_string(), "b".to_string()])
        .distinct()
        .to_vec();
    assert_eq!(words, vec!["b".to_string(), "a".to_string()]);
}

#[test]
fn test_distinct_collapses_equal_contents_across_allocations() {
    // Two separately allocated vectors with the same contents become one.
    let deduplicated = Sequence::of([vec![1, 2], vec![3], vec![1, 2]])
        .distinct()
        .to_vec();
    assert_eq!(deduplicated, vec![vec![1, 2], vec![3]]);
}

#[test]
fn test_distinct_structural_collapses_float_containers() {
    let deduplicated = Sequence::of([vec![1.5_f64, 2.5], vec![1.5, 2.5], vec![3.5]])
        .distinct_structural()
        .to_vec();
    assert_eq!(deduplicated, vec![vec![1.5, 2.5], vec![3.5]]);
}

#[test]
fn test_distinct_structural_is_idempotent() {
    let mut sequence = Sequence::of([vec![1, 2], vec![1, 2], vec![3]]);
    sequence.distinct_structural();
    let once = sequence.to_vec();
    sequence.distinct_structural();
    assert_eq!(sequence.to_vec(), once);
}

#[test]
fn test_dedup_only_removes_consecutive_runs() {
    assert_eq!(
        Sequence::of([1, 1, 2, 2, 1]).dedup().to_vec(),
        vec![1, 2, 1]
    );
}

// =============================================================================
// reversed / sorted
// =============================================================================

#[test]
fn test_reversed() {
    assert_eq!(Sequence::of([1, 2, 3]).reversed().to_vec(), vec![3, 2, 1]);
    assert_eq!(
        Sequence::of([1, 2, 3, 4]).reversed().to_vec(),
        vec![4, 3, 2, 1]
    );
}

#[test]
fn test_reversed_applies_pending_filters_first() {
    let mut sequence = Sequence::of([1, 2, 3, 4]);
    sequence.filter(|n| n % 2 == 0);
    assert_eq!(sequence.reversed().to_vec(), vec![4, 2]);
}

#[test]
fn test_sorted_is_increasing() {
    assert_eq!(
        Sequence::of([5, 3, 1, 4, 2]).sorted().to_vec(),
        vec![1, 2, 3, 4, 5]
    );
}

#[test]
fn test_sorted_by_comparator() {
    let descending = Sequence::of([2, 5, 1]).sorted_by(|a, b| b.cmp(a)).to_vec();
    assert_eq!(descending, vec![5, 2, 1]);
}

// =============================================================================
// take / drop
// =============================================================================

#[test]
fn test_take_keeps_the_prefix() {
    assert_eq!(Sequence::of([1, 2, 3, 4]).take(2).to_vec(), vec![1, 2]);
}

#[test]
fn test_take_beyond_length_keeps_everything() {
    assert_eq!(Sequence::of([1, 2]).take(10).to_vec(), vec![1, 2]);
}

#[test]
fn test_drop_removes_the_prefix() {
    assert_eq!(Sequence::of([1, 2, 3, 4]).drop(2).to_vec(), vec![3, 4]);
}

#[test]
fn test_drop_beyond_length_clears() {
    assert_eq!(Sequence::of([1, 2]).drop(10).to_vec(), Vec::<i32>::new());
}

#[test]
fn test_take_then_drop_partition_without_overlap() {
    let source = [1, 2, 3, 4, 5];
    for boundary in 0..=source.len() {
        let prefix = Sequence::of(source).take(boundary).to_vec();
        let suffix = Sequence::of(source).drop(boundary).to_vec();
        let mut rejoined = prefix;
        rejoined.extend(suffix);
        assert_eq!(rejoined, source);
    }
}

// =============================================================================
// on_each / apply_on_each
// =============================================================================

#[test]
fn test_on_each_visits_in_order_and_chains() {
    let mut visited = Vec::new();
    let unchanged = Sequence::of([1, 2, 3])
        .on_each(|n| visited.push(*n))
        .to_vec();
    assert_eq!(visited, vec![1, 2, 3]);
    assert_eq!(unchanged, vec![1, 2, 3]);
}

#[test]
fn test_apply_on_each_rewrites_in_place() {
    assert_eq!(
        Sequence::of([1, 2, 3]).apply_on_each(|n| n * n).to_vec(),
        vec![1, 4, 9]
    );
}

// =============================================================================
// chunked
// =============================================================================

#[test]
fn test_chunked_with_short_final_chunk() {
    let chunks = Sequence::of([1, 2, 3, 4, 5, 6, 7]).chunked(2);
    assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![7]]);
}

#[test]
fn test_chunked_concatenation_reproduces_the_sequence() {
    let source: Vec<i32> = (0..23).collect();
    let chunks = Sequence::from_vec(source.clone()).chunked(5);
    let rejoined: Vec<i32> = chunks.iter().flatten().copied().collect();
    assert_eq!(rejoined, source);
    for chunk in &chunks[..chunks.len() - 1] {
        assert_eq!(chunk.len(), 5);
    }
}

#[test]
fn test_chunked_larger_than_sequence() {
    assert_eq!(Sequence::of([1, 2]).chunked(10), vec![vec![1, 2]]);
}

// =============================================================================
// windowed
// =============================================================================

#[test]
fn test_windowed_full_windows_only() {
    let windows = Sequence::of([1, 2, 3, 4, 5]).windowed(3, 1, false);
    assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
}

#[test]
fn test_windowed_with_step() {
    let windows = Sequence::of([1, 2, 3, 4, 5, 6]).windowed(2, 3, false);
    assert_eq!(windows, vec![vec![1, 2], vec![4, 5]]);
}

#[test]
fn test_windowed_partial_adds_exactly_one_window() {
    let source: Vec<i32> = (1..=7).collect();
    let full = Sequence::from_vec(source.clone()).windowed(3, 3, false);
    let with_partial = Sequence::from_vec(source).windowed(3, 3, true);
    assert_eq!(full, vec![vec![1, 2, 3], vec![4, 5, 6]]);
    assert_eq!(
        with_partial,
        vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]
    );
    assert_eq!(with_partial.len(), full.len() + 1);
}

#[test]
fn test_windowed_evenly_covered_adds_nothing() {
    let source: Vec<i32> = (1..=6).collect();
    let full = Sequence::from_vec(source.clone()).windowed(3, 3, false);
    let with_partial = Sequence::from_vec(source).windowed(3, 3, true);
    assert_eq!(full, with_partial);
}

#[test]
fn test_windowed_shorter_than_size() {
    assert_eq!(
        Sequence::of([1, 2]).windowed(5, 1, false),
        Vec::<Vec<i32>>::new()
    );
    assert_eq!(Sequence::of([1, 2]).windowed(5, 1, true), vec![vec![1, 2]]);
}
