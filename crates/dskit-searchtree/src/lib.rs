//! Binary search tree with structural deletion for dskit.
//!
//! [`SearchNode`] is an unbalanced BST node that owns its children outright:
//! no parent pointers, no shared ownership. Parent lookup is recomputed by a
//! breadth-first walk, and deletion threads ownership down through the links
//! so the tree never needs a back-reference.
//!
//! Balance is reported, never enforced: [`SearchNode::is_balanced`] is a
//! `log2(count)` heuristic, and [`build_search_tree`] bounds height by
//! inserting range medians first, but nothing rebalances after mutation.

use std::collections::VecDeque;
use std::fmt;

/// Error conditions for tree mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The value named for deletion is not present in the tree.
    NotFound,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::NotFound => write!(f, "value not present in tree"),
        }
    }
}

impl std::error::Error for TreeError {}

/// An owning link to a subtree. `None` is the empty subtree.
pub type Link<T> = Option<Box<SearchNode<T>>>;

/// A binary search tree node.
///
/// Invariant: everything in `left` is strictly less than `value`, everything
/// in `right` is greater or equal (insertion ties go right).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> SearchNode<T> {
    /// Create a childless node.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Height of the subtree rooted here: 1 for a leaf, 1 + the taller
    /// child's height otherwise.
    pub fn height(&self) -> usize {
        1 + link_height(&self.left).max(link_height(&self.right))
    }

    /// Number of nodes in the subtree rooted here.
    pub fn node_count(&self) -> usize {
        1 + self.left.as_deref().map_or(0, SearchNode::node_count)
            + self.right.as_deref().map_or(0, SearchNode::node_count)
    }

    /// Balance heuristic: `floor(log2(count)) < height + tolerance`.
    ///
    /// An approximation, not an AVL check; a tree can pass with mildly
    /// lopsided subtrees.
    pub fn is_balanced(&self, tolerance: usize) -> bool {
        (self.node_count().ilog2() as usize) < self.height() + tolerance
    }

    /// The node holding the smallest value in this subtree.
    pub fn min_node(&self) -> &SearchNode<T> {
        let mut cur = self;
        while let Some(next) = cur.left.as_deref() {
            cur = next;
        }
        cur
    }

    /// The node holding the largest value in this subtree.
    pub fn max_node(&self) -> &SearchNode<T> {
        let mut cur = self;
        while let Some(next) = cur.right.as_deref() {
            cur = next;
        }
        cur
    }

    /// In-order values, ascending for a valid tree.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Iterate values in order. The traversal materializes before iteration,
    /// so the iterator is a restartable snapshot of the tree.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let mut items = Vec::with_capacity(self.node_count());
        self.collect_in_order(&mut items);
        items.into_iter()
    }

    fn collect_in_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Some(left) = self.left.as_deref() {
            left.collect_in_order(out);
        }
        out.push(&self.value);
        if let Some(right) = self.right.as_deref() {
            right.collect_in_order(out);
        }
    }
}

impl<T: Ord> SearchNode<T> {
    /// Insert by comparison descent, creating a leaf in the first empty slot.
    /// Ties go right.
    pub fn insert(&mut self, value: T) {
        if value < self.value {
            match &mut self.left {
                Some(node) => node.insert(value),
                None => self.left = Some(Box::new(SearchNode::new(value))),
            }
        } else {
            match &mut self.right {
                Some(node) => node.insert(value),
                None => self.right = Some(Box::new(SearchNode::new(value))),
            }
        }
    }

    /// Find the node holding `value` by ordered descent, O(height).
    pub fn find(&self, value: &T) -> Option<&SearchNode<T>> {
        let mut cur = self;
        loop {
            if *value < cur.value {
                cur = cur.left.as_deref()?;
            } else if *value > cur.value {
                cur = cur.right.as_deref()?;
            } else {
                return Some(cur);
            }
        }
    }

    /// Whether `value` is present. Absence is an expected outcome here, not
    /// an error.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Direct parent of the node holding `value`, found by a breadth-first
    /// walk from this node. `None` when `value` is absent or held by this
    /// node itself (the walk's root has no parent).
    pub fn parent_of(&self, value: &T) -> Option<&SearchNode<T>> {
        self.find(value)?;

        let mut queue = VecDeque::new();
        queue.push_back(self);

        while let Some(cur) = queue.pop_front() {
            for child in [cur.left.as_deref(), cur.right.as_deref()]
                .into_iter()
                .flatten()
            {
                if child.value == *value {
                    return Some(cur);
                }
                queue.push_back(child);
            }
        }
        None
    }

    /// Delete `value` from the tree owned by `root`, rewriting the root link
    /// in place. Deleting the last node leaves `None` behind; deleting an
    /// absent value fails without touching the tree.
    ///
    /// A node with two children is replaced by the maximum of its left
    /// subtree when the left side is at least as tall, otherwise by the
    /// minimum of its right subtree. The replacement is structurally
    /// detached from its extreme position, then spliced in with the deleted
    /// node's children. Taller-subtree selection is a height heuristic, not
    /// a balance guarantee.
    pub fn delete_from(root: &mut Link<T>, value: &T) -> Result<(), TreeError> {
        let link = Self::find_link(root, value).ok_or(TreeError::NotFound)?;
        let Some(mut node) = link.take() else {
            return Err(TreeError::NotFound);
        };

        match (node.left.is_some(), node.right.is_some()) {
            (false, false) => {
                // Leaf: the owning link stays empty.
            }
            (true, false) => *link = node.left.take(),
            (false, true) => *link = node.right.take(),
            (true, true) => {
                let replacement = if link_height(&node.left) >= link_height(&node.right) {
                    Self::detach_max(&mut node.left)
                } else {
                    Self::detach_min(&mut node.right)
                };
                if let Some(mut replacement) = replacement {
                    replacement.left = node.left.take();
                    replacement.right = node.right.take();
                    *link = Some(replacement);
                }
            }
        }

        Ok(())
    }

    /// The owning link of the node holding `value`, by ordered descent.
    fn find_link<'a>(link: &'a mut Link<T>, value: &T) -> Option<&'a mut Link<T>> {
        use std::cmp::Ordering;

        let ord = match link.as_deref() {
            None => return None,
            Some(node) => value.cmp(&node.value),
        };

        match ord {
            Ordering::Equal => Some(link),
            Ordering::Less => Self::find_link(&mut link.as_mut()?.left, value),
            Ordering::Greater => Self::find_link(&mut link.as_mut()?.right, value),
        }
    }

    /// Detach the maximum node of the subtree at `link`, promoting its left
    /// child into the vacated position.
    fn detach_max(link: &mut Link<T>) -> Option<Box<SearchNode<T>>> {
        let mut node = link.take()?;
        if node.right.is_some() {
            let detached = Self::detach_max(&mut node.right);
            *link = Some(node);
            detached
        } else {
            *link = node.left.take();
            Some(node)
        }
    }

    /// Detach the minimum node of the subtree at `link`, promoting its right
    /// child into the vacated position.
    fn detach_min(link: &mut Link<T>) -> Option<Box<SearchNode<T>>> {
        let mut node = link.take()?;
        if node.left.is_some() {
            let detached = Self::detach_min(&mut node.left);
            *link = Some(node);
            detached
        } else {
            *link = node.right.take();
            Some(node)
        }
    }

    /// Verify the ordering invariant by min/max-bound traversal: left
    /// descendants strictly below, right descendants greater or equal.
    pub fn is_valid(&self) -> bool {
        self.is_valid_within(None, None)
    }

    fn is_valid_within(&self, min: Option<&T>, max: Option<&T>) -> bool {
        if min.is_some_and(|m| self.value < *m) || max.is_some_and(|m| self.value >= *m) {
            return false;
        }

        self.left
            .as_deref()
            .is_none_or(|l| l.is_valid_within(min, Some(&self.value)))
            && self
                .right
                .as_deref()
                .is_none_or(|r| r.is_valid_within(Some(&self.value), max))
    }
}

fn link_height<T>(link: &Link<T>) -> usize {
    link.as_deref().map_or(0, SearchNode::height)
}

impl<T: fmt::Display> fmt::Display for SearchNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut items = Vec::with_capacity(self.node_count());
        self.collect_in_order(&mut items);
        for (i, value) in items.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

/// Build a height-balanced tree from arbitrary values.
///
/// The input is flattened, sorted externally (via `dskit-sort`'s merge
/// sort), then inserted median-of-range first, left half before right half.
/// For n sorted distinct values the result has height at most
/// `floor(log2(n)) + 1`; with duplicates balance is attempted, not
/// guaranteed. Empty input yields no tree.
pub fn build_search_tree<T>(values: impl IntoIterator<Item = T>) -> Option<SearchNode<T>>
where
    T: Ord + Clone,
{
    let collected: Vec<T> = values.into_iter().collect();
    if collected.is_empty() {
        return None;
    }

    let sorted = dskit_sort::merge_sort(&collected);
    let mut root: Option<SearchNode<T>> = None;
    insert_medians(&sorted, &mut root, 0, sorted.len() - 1);
    root
}

fn insert_medians<T: Ord + Clone>(arr: &[T], root: &mut Option<SearchNode<T>>, left: usize, right: usize) {
    let mid = (right - left) / 2 + left;

    match root {
        Some(node) => node.insert(arr[mid].clone()),
        None => *root = Some(SearchNode::new(arr[mid].clone())),
    }

    if left < mid {
        insert_medians(arr, root, left, mid - 1);
    }
    if right > mid {
        insert_medians(arr, root, mid + 1, right);
    }
}
