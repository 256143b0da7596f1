//! Binary search tree for dskit, second variant.
//!
//! Independent of `dskit-searchtree`: this variant pairs a plain node type
//! ([`BstNode`]) with an owning wrapper ([`Bst`]) that holds the root link,
//! so callers never juggle root reassignment after deletion. It also carries
//! the traversals the other variant lacks: level-order (breadth-first) and
//! an in-order map that rebuilds a balanced tree from the mapped values.

use std::collections::VecDeque;
use std::fmt;

/// Error conditions for tree mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BstError {
    /// The value named for deletion is not present in the tree.
    NotFound,
}

impl fmt::Display for BstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BstError::NotFound => write!(f, "value not present in tree"),
        }
    }
}

impl std::error::Error for BstError {}

type Link<T> = Option<Box<BstNode<T>>>;

/// A node of the tree. Left descendants are strictly smaller, right
/// descendants greater or equal (ties go right on insertion).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BstNode<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> BstNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Height of this subtree; a lone node has height 1.
    pub fn height(&self) -> usize {
        1 + link_height(&self.left).max(link_height(&self.right))
    }

    pub fn node_count(&self) -> usize {
        1 + self.left.as_deref().map_or(0, BstNode::node_count)
            + self.right.as_deref().map_or(0, BstNode::node_count)
    }

    /// Balance heuristic for this variant: height stays within
    /// `floor(log2(count)) + 1`. Reported only; nothing rebalances.
    pub fn is_balanced(&self) -> bool {
        self.height() <= (self.node_count().ilog2() as usize) + 1
    }

    /// Node holding the smallest value of this subtree.
    pub fn min_node(&self) -> &BstNode<T> {
        self.left.as_deref().map_or(self, BstNode::min_node)
    }

    /// Node holding the largest value of this subtree.
    pub fn max_node(&self) -> &BstNode<T> {
        self.right.as_deref().map_or(self, BstNode::max_node)
    }

    pub fn min_value(&self) -> &T {
        &self.min_node().value
    }

    pub fn max_value(&self) -> &T {
        &self.max_node().value
    }

    /// In-order values: ascending for a valid tree.
    pub fn inorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.node_count());
        self.inorder_into(&mut out);
        out
    }

    fn inorder_into(&self, out: &mut Vec<T>)
    where
        T: Clone,
    {
        if let Some(left) = self.left.as_deref() {
            left.inorder_into(out);
        }
        out.push(self.value.clone());
        if let Some(right) = self.right.as_deref() {
            right.inorder_into(out);
        }
    }

    /// Breadth-first values, top level first, left to right within a level.
    pub fn level_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.node_count());
        let mut queue = VecDeque::new();
        queue.push_back(self);

        while let Some(cur) = queue.pop_front() {
            out.push(cur.value.clone());
            if let Some(left) = cur.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = cur.right.as_deref() {
                queue.push_back(right);
            }
        }
        out
    }

    /// Iterate values in order over a materialized snapshot.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        fn collect<'a, T>(node: &'a BstNode<T>, out: &mut Vec<&'a T>) {
            if let Some(left) = node.left.as_deref() {
                collect(left, out);
            }
            out.push(&node.value);
            if let Some(right) = node.right.as_deref() {
                collect(right, out);
            }
        }

        let mut items = Vec::with_capacity(self.node_count());
        collect(self, &mut items);
        items.into_iter()
    }
}

impl<T: Ord> BstNode<T> {
    /// Insert by comparison descent; ties go right.
    pub fn insert(&mut self, value: T) {
        if value < self.value {
            match &mut self.left {
                Some(node) => node.insert(value),
                None => self.left = Some(Box::new(BstNode::new(value))),
            }
        } else {
            match &mut self.right {
                Some(node) => node.insert(value),
                None => self.right = Some(Box::new(BstNode::new(value))),
            }
        }
    }

    /// Find the node holding `value` by ordered descent.
    pub fn find(&self, value: &T) -> Option<&BstNode<T>> {
        use std::cmp::Ordering;
        match value.cmp(&self.value) {
            Ordering::Equal => Some(self),
            Ordering::Less => self.left.as_deref()?.find(value),
            Ordering::Greater => self.right.as_deref()?.find(value),
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Ordering invariant check by bound propagation.
    pub fn is_valid(&self) -> bool {
        fn within<T: Ord>(node: &BstNode<T>, min: Option<&T>, max: Option<&T>) -> bool {
            if min.is_some_and(|m| node.value < *m) || max.is_some_and(|m| node.value >= *m) {
                return false;
            }
            node.left
                .as_deref()
                .is_none_or(|l| within(l, min, Some(&node.value)))
                && node
                    .right
                    .as_deref()
                    .is_none_or(|r| within(r, Some(&node.value), max))
        }
        within(self, None, None)
    }
}

fn link_height<T>(link: &Link<T>) -> usize {
    link.as_deref().map_or(0, BstNode::height)
}

/// An owning binary search tree.
///
/// The wrapper keeps the root link private, so deletion (including root
/// deletion, which changes the root) never requires the caller to reassign
/// anything.
#[derive(Debug, Clone)]
pub struct Bst<T> {
    root: Link<T>,
}

impl<T> Default for Bst<T> {
    fn default() -> Self {
        Self { root: None }
    }
}

impl<T: Ord> Bst<T> {
    /// An empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Build a height-balanced tree: sort the values externally (merge sort
    /// from `dskit-sort`), then insert range medians first.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self
    where
        T: Clone,
    {
        let collected: Vec<T> = values.into_iter().collect();
        if collected.is_empty() {
            return Self::new();
        }

        let sorted = dskit_sort::merge_sort(&collected);
        let mut tree = Self::new();
        tree.insert_medians(&sorted, 0, sorted.len() - 1);
        tree
    }

    fn insert_medians(&mut self, arr: &[T], left: usize, right: usize)
    where
        T: Clone,
    {
        let mid = (right - left) / 2 + left;
        self.insert(arr[mid].clone());

        if left < mid {
            self.insert_medians(arr, left, mid - 1);
        }
        if right > mid {
            self.insert_medians(arr, mid + 1, right);
        }
    }

    pub fn insert(&mut self, value: T) {
        match self.root.as_deref_mut() {
            Some(node) => node.insert(value),
            None => self.root = Some(Box::new(BstNode::new(value))),
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.root.as_deref().is_some_and(|n| n.contains(value))
    }

    /// Delete `value` from the tree. Fails without mutation when the value
    /// is absent; deleting the last node leaves the tree empty.
    pub fn delete(&mut self, value: &T) -> Result<(), BstError> {
        Self::delete_link(&mut self.root, value)
    }

    fn delete_link(link: &mut Link<T>, value: &T) -> Result<(), BstError> {
        use std::cmp::Ordering;

        let ord = match link.as_deref() {
            None => return Err(BstError::NotFound),
            Some(node) => value.cmp(&node.value),
        };

        match ord {
            Ordering::Less => Self::delete_link(
                &mut link.as_mut().ok_or(BstError::NotFound)?.left,
                value,
            ),
            Ordering::Greater => Self::delete_link(
                &mut link.as_mut().ok_or(BstError::NotFound)?.right,
                value,
            ),
            Ordering::Equal => {
                let Some(mut node) = link.take() else {
                    return Err(BstError::NotFound);
                };
                *link = match (node.left.take(), node.right.take()) {
                    (None, None) => None,
                    (Some(child), None) | (None, Some(child)) => Some(child),
                    (left, right) => {
                        let mut left = left;
                        let mut right = right;
                        // Promote from the taller (or equal) side to keep the
                        // splice from skewing the tree further.
                        let mut replacement = if link_height(&left) >= link_height(&right) {
                            Self::take_max(&mut left)
                        } else {
                            Self::take_min(&mut right)
                        };
                        if let Some(rep) = replacement.as_deref_mut() {
                            rep.left = left;
                            rep.right = right;
                        }
                        replacement
                    }
                };
                Ok(())
            }
        }
    }

    /// Detach the maximum node of the subtree, promoting its left child.
    fn take_max(link: &mut Link<T>) -> Link<T> {
        let mut node = link.take()?;
        if node.right.is_some() {
            let detached = Self::take_max(&mut node.right);
            *link = Some(node);
            detached
        } else {
            *link = node.left.take();
            Some(node)
        }
    }

    /// Detach the minimum node of the subtree, promoting its right child.
    fn take_min(link: &mut Link<T>) -> Link<T> {
        let mut node = link.take()?;
        if node.left.is_some() {
            let detached = Self::take_min(&mut node.left);
            *link = Some(node);
            detached
        } else {
            *link = node.right.take();
            Some(node)
        }
    }

    pub fn root(&self) -> Option<&BstNode<T>> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.root.as_deref().map_or(0, BstNode::node_count)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn inorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.root.as_deref().map_or_else(Vec::new, BstNode::inorder)
    }

    pub fn level_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.root
            .as_deref()
            .map_or_else(Vec::new, BstNode::level_order)
    }

    pub fn is_valid(&self) -> bool {
        self.root.as_deref().is_none_or(BstNode::is_valid)
    }

    /// Map every value in order and rebuild a balanced tree from the results.
    pub fn map<U, F>(&self, f: F) -> Bst<U>
    where
        U: Ord + Clone,
        F: FnMut(&T) -> U,
    {
        match self.root.as_deref() {
            None => Bst::new(),
            Some(node) => Bst::from_values(node.iter().map(f).collect::<Vec<U>>()),
        }
    }
}
