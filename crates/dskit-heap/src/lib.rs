//! Binary heap for dskit.
//!
//! This crate provides an array-backed binary heap whose min/max behavior is
//! selected by [`HeapOrder`] at construction. Single-element fix-up is
//! delegated to the sift primitives in `dskit-heapify`.

use dskit_heapify::{heapify_by, max_prefers, min_prefers, sift_down_by, sift_up_by};
use serde::{Deserialize, Serialize};

/// Ordering mode for the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeapOrder {
    Min,
    Max,
}

impl HeapOrder {
    /// The strict preference predicate for this ordering.
    fn prefers<T: Ord>(self) -> fn(&T, &T) -> bool {
        match self {
            HeapOrder::Min => min_prefers,
            HeapOrder::Max => max_prefers,
        }
    }
}

/// An array-backed binary heap.
///
/// Index 0 is the root; the children of index `i` live at `2i + 1` and
/// `2i + 2`. The invariant is that every parent compares favorably (per the
/// heap's [`HeapOrder`]) against both of its children.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heap<T> {
    data: Vec<T>,
    order: HeapOrder,
}

impl<T: Ord> Heap<T> {
    /// Create a new empty heap with the given ordering.
    pub fn new(order: HeapOrder) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    /// Create a new empty min-heap.
    pub fn min() -> Self {
        Self::new(HeapOrder::Min)
    }

    /// Create a new empty max-heap.
    pub fn max() -> Self {
        Self::new(HeapOrder::Max)
    }

    /// Build a heap from arbitrary values with the linear bottom-up build.
    /// An empty vector yields an empty heap.
    pub fn from_vec(order: HeapOrder, mut values: Vec<T>) -> Self {
        heapify_by(&mut values, order.prefers());
        Self {
            data: values,
            order,
        }
    }

    /// Number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The root element without removing it, or `None` on an empty heap.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Insert a single value: push onto the end, then sift up.
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        sift_up_by(&mut self.data, last, self.order.prefers());
    }

    /// Insert a batch of values.
    ///
    /// When the batch outnumbers half the current heap it is cheaper to
    /// append everything and rebuild in one heapify pass than to sift each
    /// element up individually. Heap order is not sortedness, so the rebuild
    /// goes through [`heapify_by`] rather than a merge of two heapified
    /// buffers; [`merge_sorted`] exists for genuinely sorted inputs.
    pub fn insert_all(&mut self, values: impl IntoIterator<Item = T>) {
        let batch: Vec<T> = values.into_iter().collect();
        if batch.is_empty() {
            return;
        }

        if batch.len() > self.data.len() / 2 {
            self.data.extend(batch);
            heapify_by(&mut self.data, self.order.prefers());
        } else {
            for value in batch {
                self.insert(value);
            }
        }
    }

    /// Remove and return the root, or `None` on an empty heap.
    pub fn extract(&mut self) -> Option<T> {
        if self.data.len() <= 1 {
            return self.data.pop();
        }

        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let top = self.data.pop();
        let len = self.data.len();
        sift_down_by(&mut self.data, 0, len, self.order.prefers());
        top
    }

    /// Drain the heap in extraction order: ascending for a min-heap,
    /// descending for a max-heap.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.data.len());
        while let Some(value) = self.extract() {
            result.push(value);
        }
        result
    }

    /// Iterate over the backing buffer in storage order (not sorted order).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// The backing buffer in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

/// Two-pointer merge of two already-sorted (nondecreasing) sequences.
///
/// This assumes sortedness, which heapify does not provide; do not feed it
/// raw heap buffers.
pub fn merge_sorted<T: Ord>(a: Vec<T>, b: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let mut a = a.into_iter().peekable();
    let mut b = b.into_iter().peekable();

    loop {
        let take_a = match (a.peek(), b.peek()) {
            (Some(x), Some(y)) => x <= y,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_a { a.next() } else { b.next() };
        if let Some(value) = next {
            merged.push(value);
        }
    }

    merged
}
