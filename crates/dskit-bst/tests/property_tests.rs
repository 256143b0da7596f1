//! Property tests for dskit-bst
//!
//! Wrapper-level validity, traversal agreement, and delete invariants.

use dskit_bst::{Bst, BstError, BstNode};

use proptest::prelude::*;

proptest! {
    /// from_values always produces a valid tree whose in-order traversal is
    /// the sorted input.
    #[test]
    fn prop_from_values_is_valid(values in proptest::collection::vec(any::<i64>(), 0..150)) {
        let tree = Bst::from_values(values.clone());
        prop_assert!(tree.is_valid());
        prop_assert_eq!(tree.len(), values.len());

        let mut expected = values;
        expected.sort();
        prop_assert_eq!(tree.inorder(), expected);
    }

    /// Level-order and in-order visit the same multiset of values.
    #[test]
    fn prop_traversals_agree_on_contents(values in proptest::collection::vec(any::<i64>(), 0..150)) {
        let tree = Bst::from_values(values);
        let mut level = tree.level_order();
        level.sort();
        prop_assert_eq!(level, tree.inorder());
    }

    /// Height bound for balanced construction over distinct values.
    #[test]
    fn prop_height_bound(raw in proptest::collection::btree_set(any::<i64>(), 1..200)) {
        let values: Vec<i64> = raw.into_iter().collect();
        let tree = Bst::from_values(values.clone());
        let height = tree.root().map_or(0, BstNode::height);
        prop_assert!(height <= (values.len().ilog2() as usize) + 1);
        prop_assert!(tree.root().is_some_and(BstNode::is_balanced));
    }

    /// Deleting a present value keeps validity and drops len by one; deleting
    /// an absent value is an untouched-tree error.
    #[test]
    fn prop_delete_invariants(
        raw in proptest::collection::btree_set(0i64..500, 1..80),
        pick in any::<prop::sample::Index>(),
        absent in 500i64..1000,
    ) {
        let values: Vec<i64> = raw.into_iter().collect();
        let target = values[pick.index(values.len())];

        let mut tree = Bst::from_values(values.clone());
        tree.delete(&target).expect("target present");
        prop_assert!(tree.is_valid());
        prop_assert_eq!(tree.len(), values.len() - 1);
        prop_assert!(!tree.contains(&target));

        let before = tree.inorder();
        prop_assert_eq!(tree.delete(&absent), Err(BstError::NotFound));
        prop_assert_eq!(tree.inorder(), before);
    }

    /// Mapping then reading in order equals mapping the in-order reading and
    /// sorting, and the rebuilt tree is valid.
    #[test]
    fn prop_map_rebuild_is_valid(raw in proptest::collection::btree_set(-100i64..100, 0..60)) {
        let values: Vec<i64> = raw.into_iter().collect();
        let tree = Bst::from_values(values.clone());

        let mapped = tree.map(|v| v.wrapping_mul(*v));
        prop_assert!(mapped.is_valid());

        let mut expected: Vec<i64> = values.iter().map(|v| v.wrapping_mul(*v)).collect();
        expected.sort();
        prop_assert_eq!(mapped.inorder(), expected);
    }
}
