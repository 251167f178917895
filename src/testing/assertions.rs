//! Assertion functions for testing operator outputs.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Panics unless both sides hold the same number of elements.
fn check_len<T: Debug>(actual: &[T], expected: &[T]) {
    if actual.len() != expected.len() {
        panic!(
            "Collection length mismatch: got {} element(s), wanted {}\n  expected: {expected:?}\n  actual:   {actual:?}",
            actual.len(),
            expected.len()
        );
    }
}

/// Assert that an operator produced exactly `expected`, element by element.
///
/// # Panics
///
/// Panics on a length difference, or at the first index whose elements differ.
///
/// # Example
///
/// ```
/// use sequery::from_slice;
/// use sequery::testing::assert_collections_equal;
///
/// let xs = [3, 1, 2];
/// assert_collections_equal(&from_slice(&xs).ordered(), &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    check_len(actual, expected);
    if let Some(i) = actual.iter().zip(expected).position(|(a, e)| a != e) {
        panic!(
            "Collection mismatch at index {i}: {:?} != {:?}\n  expected: {expected:?}\n  actual:   {actual:?}",
            actual[i], expected[i]
        );
    }
}

/// Assert that `actual` is a permutation of `expected`: every element occurs
/// the same number of times on both sides.
///
/// Useful when the order of a result is irrelevant to the test, e.g. when
/// comparing the values of a [`Grouping`](crate::Grouping) built from a set.
///
/// ```
/// use sequery::testing::assert_collections_unordered_equal;
///
/// assert_collections_unordered_equal(&[3, 1, 2, 1], &[1, 1, 2, 3]);
/// ```
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    fn tally<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
        let mut counts = HashMap::new();
        for item in items {
            *counts.entry(item).or_insert(0) += 1;
        }
        counts
    }

    check_len(actual, expected);
    let actual_counts = tally(actual);
    let expected_counts = tally(expected);
    let differing: Vec<&&T> = expected_counts
        .keys()
        .filter(|k| actual_counts.get(*k) != expected_counts.get(*k))
        .collect();
    if !differing.is_empty() {
        panic!(
            "Collection content mismatch, counts differ for {differing:?}\n  expected: {expected:?}\n  actual:   {actual:?}"
        );
    }
}

/// Assert that two floats are within `tolerance` of each other.
///
/// # Panics
///
/// Panics if `|actual - expected| > tolerance`.
///
/// # Example
///
/// ```
/// use sequery::testing::assert_approx_eq;
///
/// assert_approx_eq(0.1 + 0.2, 0.3, 1e-9);
/// ```
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Float mismatch:\n  Expected: {expected}\n  Actual: {actual}\n  Tolerance: {tolerance}"
    );
}
