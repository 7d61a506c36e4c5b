//! Unit tests for the integer-specialized sequence.

use kedja::ints::IntSequence;

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_range_is_inclusive_on_both_ends() {
    assert_eq!(IntSequence::range(1, 5).to_vec(), vec![1, 2, 3, 4, 5]);
    assert_eq!(IntSequence::range(3, 3).to_vec(), vec![3]);
}

#[test]
fn test_range_is_empty_when_reversed() {
    assert_eq!(IntSequence::range(5, 1).count(), 0);
}

#[test]
fn test_of_and_from_vec_and_copy_from() {
    assert_eq!(IntSequence::of([2, 1]).to_vec(), vec![2, 1]);
    assert_eq!(IntSequence::from_vec(vec![4, 5]).to_vec(), vec![4, 5]);

    let source = vec![7, 8];
    assert_eq!(IntSequence::copy_from(&source).to_vec(), vec![7, 8]);
    assert_eq!(source, vec![7, 8]);
}

// =============================================================================
// Aggregation
// =============================================================================

#[test]
fn test_sum() {
    assert_eq!(IntSequence::range(1, 10).sum(), 55);
    assert_eq!(IntSequence::of([]).sum(), 0);
}

#[test]
fn test_min_and_max() {
    assert_eq!(IntSequence::of([4, -2, 9]).min(), -2);
    assert_eq!(IntSequence::of([4, -2, 9]).max(), 9);
    assert_eq!(IntSequence::of([]).min(), 0);
    assert_eq!(IntSequence::of([]).max(), 0);
}

#[test]
fn test_average_truncates() {
    assert_eq!(IntSequence::of([1, 2, 3, 4]).average(), 2);
    assert_eq!(IntSequence::of([2, 4]).average(), 3);
    assert_eq!(IntSequence::of([]).average(), 0);
}

#[test]
fn test_sorted() {
    assert_eq!(IntSequence::of([3, 1, 2]).sorted().to_vec(), vec![1, 2, 3]);
}

// =============================================================================
// Adapters stay on the public contract
// =============================================================================

#[test]
fn test_filter_chain() {
    let survivors = IntSequence::range(1, 20)
        .filter(|n| n % 2 == 0)
        .filter(|n| n % 3 == 0)
        .to_vec();
    assert_eq!(survivors, vec![6, 12, 18]);
}

#[test]
fn test_distinct_reversed_take_drop() {
    assert_eq!(
        IntSequence::of([1, 2, 2, 3]).distinct().to_vec(),
        vec![1, 2, 3]
    );
    assert_eq!(IntSequence::of([1, 2, 3]).reversed().to_vec(), vec![3, 2, 1]);
    assert_eq!(IntSequence::range(1, 9).take(3).to_vec(), vec![1, 2, 3]);
    assert_eq!(IntSequence::range(1, 5).drop(3).to_vec(), vec![4, 5]);
}

#[test]
fn test_apply_on_each_and_append() {
    assert_eq!(
        IntSequence::of([1, 2, 3]).apply_on_each(|n| n * 10).to_vec(),
        vec![10, 20, 30]
    );
    assert_eq!(IntSequence::of([1]).append([2, 3]).to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_filtered_aggregation() {
    let mut evens = IntSequence::range(1, 10);
    evens.filter(|n| n % 2 == 0);
    assert_eq!(evens.sum(), 30);
    assert_eq!(evens.count(), 5);
}

// =============================================================================
// Terminals and escape hatch
// =============================================================================

#[test]
fn test_first_last_contains_join() {
    assert_eq!(IntSequence::range(2, 6).first(), 2);
    assert_eq!(IntSequence::range(2, 6).last(), 6);
    assert!(IntSequence::range(2, 6).contains(4));
    assert!(!IntSequence::range(2, 6).contains(9));
    assert_eq!(IntSequence::of([1, 2]).join_to_string("-"), "1-2");
}

#[test]
fn test_escape_to_the_generic_sequence() {
    let mut sequence = IntSequence::range(1, 4).into_sequence();
    let squares = sequence.map(|n| n * n).into_vec();
    assert_eq!(squares, vec![1, 4, 9, 16]);
}
