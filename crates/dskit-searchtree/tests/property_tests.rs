//! Property tests for dskit-searchtree
//!
//! Ordering validity, builder round-trips, height bounds, and
//! delete-preserves-validity over arbitrary inputs.

use dskit_searchtree::{SearchNode, TreeError, build_search_tree};

use proptest::prelude::*;

proptest! {
    /// Incremental insertion always yields a valid tree whose in-order
    /// traversal is the sorted input.
    #[test]
    fn prop_incremental_insert_is_valid(values in proptest::collection::vec(any::<i64>(), 1..100)) {
        let mut root = SearchNode::new(values[0]);
        for v in &values[1..] {
            root.insert(*v);
        }

        prop_assert!(root.is_valid());
        prop_assert_eq!(root.node_count(), values.len());

        let mut expected = values;
        expected.sort();
        prop_assert_eq!(root.to_vec(), expected);
    }

    /// Builder round-trip: a tree built from sorted unique values reads back
    /// exactly, and its height respects the log bound.
    #[test]
    fn prop_builder_round_trip_and_height_bound(raw in proptest::collection::btree_set(any::<i64>(), 1..200)) {
        let values: Vec<i64> = raw.into_iter().collect();
        let root = build_search_tree(values.clone()).expect("nonempty");

        prop_assert!(root.is_valid());
        prop_assert_eq!(root.to_vec(), values.clone());
        prop_assert!(root.height() <= (values.len().ilog2() as usize) + 1);
        prop_assert!(root.is_balanced(0));
    }

    /// Deleting any present value keeps the tree valid and shrinks the count
    /// by exactly one.
    #[test]
    fn prop_delete_preserves_validity(
        raw in proptest::collection::btree_set(any::<i64>(), 1..100),
        pick in any::<prop::sample::Index>(),
    ) {
        let values: Vec<i64> = raw.into_iter().collect();
        let target = values[pick.index(values.len())];
        let mut root = build_search_tree(values.clone()).map(Box::new);

        SearchNode::delete_from(&mut root, &target).expect("target present");

        match root.as_deref() {
            None => prop_assert_eq!(values.len(), 1),
            Some(tree) => {
                prop_assert!(tree.is_valid());
                prop_assert_eq!(tree.node_count(), values.len() - 1);
                prop_assert!(!tree.contains(&target));
            }
        }
    }

    /// Draining a tree by repeated deletion visits every value exactly once
    /// and stays valid at every step.
    #[test]
    fn prop_delete_drains_cleanly(raw in proptest::collection::btree_set(any::<i64>(), 1..40)) {
        let values: Vec<i64> = raw.into_iter().collect();
        let mut root = build_search_tree(values.clone()).map(Box::new);

        for (i, v) in values.iter().enumerate() {
            SearchNode::delete_from(&mut root, v).expect("present");
            if let Some(tree) = root.as_deref() {
                prop_assert!(tree.is_valid());
                prop_assert_eq!(tree.node_count(), values.len() - i - 1);
            }
        }
        prop_assert!(root.is_none());
    }

    /// Deleting an absent value errors and leaves the tree byte-identical.
    #[test]
    fn prop_delete_absent_is_error(raw in proptest::collection::btree_set(0i64..1000, 1..50), absent in 1000i64..2000) {
        let values: Vec<i64> = raw.into_iter().collect();
        let mut root = build_search_tree(values.clone()).map(Box::new);
        let before = root.clone();

        let result = SearchNode::delete_from(&mut root, &absent);
        prop_assert_eq!(result, Err(TreeError::NotFound));
        prop_assert_eq!(root, before);
    }

    /// parent_of agrees with the child links for every non-root value.
    #[test]
    fn prop_parent_of_agrees_with_links(raw in proptest::collection::btree_set(any::<i64>(), 2..60)) {
        let values: Vec<i64> = raw.into_iter().collect();
        let root = build_search_tree(values.clone()).expect("nonempty");

        for v in &values {
            match root.parent_of(v) {
                None => prop_assert_eq!(*v, root.value),
                Some(parent) => {
                    let is_left = parent.left.as_deref().is_some_and(|n| n.value == *v);
                    let is_right = parent.right.as_deref().is_some_and(|n| n.value == *v);
                    prop_assert!(is_left || is_right);
                }
            }
        }
    }
}
