//! Property-based tests for the sequence operators using proptest.

use proptest::prelude::*;
use sequery::*;
use std::collections::HashSet;

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Tagged {
    key: u8,
    seq: usize,
}

// Elements carry their original position so stability is observable.
fn tagged_strategy() -> impl Strategy<Value = Vec<Tagged>> {
    prop::collection::vec(0u8..5, 0..60).prop_map(|keys| {
        keys.into_iter()
            .enumerate()
            .map(|(seq, key)| Tagged { key, seq })
            .collect()
    })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// take(n) followed by skip(n) reassembles the source.
    #[test]
    fn take_then_skip_reassembles(
        items in prop::collection::vec(any::<i32>(), 0..100),
        n in 0usize..120,
    ) {
        let s = from_slice(&items);
        let mut joined = s.take(n);
        joined.extend(s.skip(n));
        prop_assert_eq!(joined, items.clone());
    }

    /// Filter never returns more items than the input, in source order.
    #[test]
    fn filter_is_an_ordered_subset(
        items in prop::collection::vec(any::<i16>(), 0..100),
        threshold in any::<i16>(),
    ) {
        let kept = from_slice(&items).filter(|n| *n > threshold);
        prop_assert!(kept.len() <= items.len());
        prop_assert_eq!(kept.len(), from_slice(&items).count_where(|n| *n > threshold));
        let mut rest = items.iter();
        for k in &kept {
            prop_assert!(rest.any(|n| n == k));
        }
    }

    /// Distinct is idempotent and keeps exactly the set of values.
    #[test]
    fn distinct_is_idempotent(items in prop::collection::vec(0i32..20, 0..100)) {
        let once = from_slice(&items).distinct();
        let twice = from_slice(&once).distinct();
        prop_assert_eq!(&once, &twice);

        let expected: HashSet<i32> = items.iter().copied().collect();
        prop_assert_eq!(once.len(), expected.len());
    }

    /// all(p) agrees with !any(!p).
    #[test]
    fn all_is_dual_of_any(
        items in prop::collection::vec(any::<i32>(), 0..50),
        pivot in any::<i32>(),
    ) {
        let s = from_slice(&items);
        prop_assert_eq!(s.all(|n| *n >= pivot), !s.any_match(|n| *n < pivot));
    }

    /// find_index points at the element first_or_default_by returns.
    #[test]
    fn find_index_matches_first(
        items in prop::collection::vec(0u8..10, 0..50),
        target in 0u8..10,
    ) {
        let s = from_slice(&items);
        let first = s.first_or_default_by(|n| *n == target);
        let idx = s.find_index(|n| *n == target);
        prop_assert_eq!(first, idx.map(|i| &items[i]));
    }

    /// Sorting by key keeps equal keys in source order in both directions.
    #[test]
    fn order_by_is_stable(items in tagged_strategy()) {
        let s = from_slice(&items);
        for sorted in [s.order_by(|t| t.key), s.order_by_descending(|t| t.key)] {
            prop_assert_eq!(sorted.len(), items.len());
            for pair in sorted.windows(2) {
                if pair[0].key == pair[1].key {
                    prop_assert!(pair[0].seq < pair[1].seq);
                }
            }
        }
    }

    /// Grouping partitions the source without losing or reordering elements.
    #[test]
    fn group_by_partitions(items in tagged_strategy()) {
        let groups = from_slice(&items).group_by(|t| t.key);
        let total: usize = groups.iter().map(|(_, vs)| vs.len()).sum();
        prop_assert_eq!(total, items.len());
        for (key, vs) in groups.iter() {
            prop_assert!(vs.iter().all(|t| t.key == *key));
            prop_assert!(vs.windows(2).all(|w| w[0].seq < w[1].seq));
        }
    }

    /// Sum and average agree with a direct fold.
    #[test]
    fn sum_and_average_agree(items in prop::collection::vec(-1000i32..1000, 0..100)) {
        let s = from_slice(&items);
        let direct: f64 = items.iter().map(|n| f64::from(*n)).sum();
        prop_assert_eq!(s.sum(), direct);
        if items.is_empty() {
            prop_assert_eq!(s.average(), 0.0);
        } else {
            prop_assert!((s.average() - direct / items.len() as f64).abs() < 1e-9);
        }
    }

    /// An absent source behaves like an empty one everywhere.
    #[test]
    fn absent_source_is_empty(n in any::<usize>()) {
        let s: Sequence<'_, i32> = absent();
        prop_assert!(s.take(n).is_empty());
        prop_assert!(s.skip(n).is_empty());
        prop_assert!(!s.any());
        prop_assert!(s.all(|_| false));
        prop_assert_eq!(s.count(), 0);
        prop_assert_eq!(s.sum(), 0.0);
        prop_assert!(s.group_by(|x| *x).is_empty());
    }
}
