//! Property tests for dskit-heapify
//!
//! Heap-order invariants for the sift and heapify primitives.

use dskit_heapify::{max_heapify, max_sift_up, min_heapify, min_sift_up};

use proptest::prelude::*;

fn is_min_heap(data: &[i64]) -> bool {
    (0..data.len()).all(|i| {
        [2 * i + 1, 2 * i + 2]
            .into_iter()
            .filter(|&c| c < data.len())
            .all(|c| data[i] <= data[c])
    })
}

fn is_max_heap(data: &[i64]) -> bool {
    (0..data.len()).all(|i| {
        [2 * i + 1, 2 * i + 2]
            .into_iter()
            .filter(|&c| c < data.len())
            .all(|c| data[i] >= data[c])
    })
}

proptest! {
    /// Bottom-up build yields min-heap order for arbitrary input.
    #[test]
    fn prop_min_heapify_establishes_heap_order(mut data in proptest::collection::vec(any::<i64>(), 0..200)) {
        min_heapify(&mut data);
        prop_assert!(is_min_heap(&data));
    }

    /// Bottom-up build yields max-heap order for arbitrary input.
    #[test]
    fn prop_max_heapify_establishes_heap_order(mut data in proptest::collection::vec(any::<i64>(), 0..200)) {
        max_heapify(&mut data);
        prop_assert!(is_max_heap(&data));
    }

    /// Heapify permutes: the multiset of elements is unchanged.
    #[test]
    fn prop_heapify_preserves_elements(data in proptest::collection::vec(any::<i64>(), 0..200)) {
        let mut heaped = data.clone();
        min_heapify(&mut heaped);
        let mut before = data;
        before.sort();
        heaped.sort();
        prop_assert_eq!(before, heaped);
    }

    /// Pushing onto a valid heap and sifting up restores the invariant.
    #[test]
    fn prop_sift_up_after_push_restores_order(
        mut data in proptest::collection::vec(any::<i64>(), 0..100),
        extra in any::<i64>(),
    ) {
        min_heapify(&mut data);
        data.push(extra);
        let last = data.len() - 1;
        min_sift_up(&mut data, last);
        prop_assert!(is_min_heap(&data));
    }

    /// Same for the max-heap instantiation.
    #[test]
    fn prop_max_sift_up_after_push_restores_order(
        mut data in proptest::collection::vec(any::<i64>(), 0..100),
        extra in any::<i64>(),
    ) {
        max_heapify(&mut data);
        data.push(extra);
        let last = data.len() - 1;
        max_sift_up(&mut data, last);
        prop_assert!(is_max_heap(&data));
    }
}
