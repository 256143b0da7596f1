//! Heap fix-up primitives for dskit.
//!
//! This crate provides the comparator-parameterized sift-down/sift-up
//! building blocks shared by `dskit-heap` and `dskit-sort`'s heap sort,
//! along with concrete min/max instantiations.
//!
//! The comparator is a strict preference predicate: `prefers(a, b)` answers
//! whether `a` should sit above `b` in the heap. For a min-heap that is
//! `a < b`, for a max-heap `a > b`. Strictness matters: a `<=`-style
//! predicate would swap equal elements forever during a sift.

/// Strict min-heap preference: `a` belongs above `b` when `a < b`.
pub fn min_prefers<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

/// Strict max-heap preference: `a` belongs above `b` when `a > b`.
pub fn max_prefers<T: Ord>(a: &T, b: &T) -> bool {
    a > b
}

/// Restores the heap invariant rooted at `index`, assuming both child
/// subtrees already satisfy it.
///
/// Only the first `heap_size` elements of `data` are treated as part of the
/// heap; heap sort shrinks this bound while the slice keeps its full length.
/// On ties the current element stays put.
pub fn sift_down_by<T>(data: &mut [T], index: usize, heap_size: usize, prefers: impl Fn(&T, &T) -> bool) {
    let heap_size = heap_size.min(data.len());
    let mut idx = index;

    loop {
        let left = 2 * idx + 1;
        let right = 2 * idx + 2;

        if left >= heap_size {
            // No children inside the heap bound: idx is a leaf.
            break;
        }

        let mut child = left;
        if right < heap_size && prefers(&data[right], &data[left]) {
            child = right;
        }

        if prefers(&data[child], &data[idx]) {
            data.swap(idx, child);
            idx = child;
        } else {
            break;
        }
    }
}

/// Restores the heap invariant upward from `index`, assuming every other
/// element already satisfies it. Used after pushing onto the end of a heap.
pub fn sift_up_by<T>(data: &mut [T], index: usize, prefers: impl Fn(&T, &T) -> bool) {
    let mut idx = index;

    while idx > 0 {
        let parent = (idx - 1) / 2;
        if prefers(&data[idx], &data[parent]) {
            data.swap(idx, parent);
            idx = parent;
        } else {
            break;
        }
    }
}

/// Establishes the heap invariant over an arbitrary slice with the linear
/// bottom-up build: sift down every index from `len / 2` to the root.
pub fn heapify_by<T>(data: &mut [T], prefers: impl Fn(&T, &T) -> bool) {
    let n = data.len();
    for i in (0..=n / 2).rev() {
        sift_down_by(data, i, n, &prefers);
    }
}

/// Sift down under min-heap order.
pub fn min_sift_down<T: Ord>(data: &mut [T], index: usize, heap_size: usize) {
    sift_down_by(data, index, heap_size, min_prefers);
}

/// Sift down under max-heap order.
pub fn max_sift_down<T: Ord>(data: &mut [T], index: usize, heap_size: usize) {
    sift_down_by(data, index, heap_size, max_prefers);
}

/// Sift up under min-heap order.
pub fn min_sift_up<T: Ord>(data: &mut [T], index: usize) {
    sift_up_by(data, index, min_prefers);
}

/// Sift up under max-heap order.
pub fn max_sift_up<T: Ord>(data: &mut [T], index: usize) {
    sift_up_by(data, index, max_prefers);
}

/// Bottom-up min-heap build.
pub fn min_heapify<T: Ord>(data: &mut [T]) {
    heapify_by(data, min_prefers);
}

/// Bottom-up max-heap build.
pub fn max_heapify<T: Ord>(data: &mut [T]) {
    heapify_by(data, max_prefers);
}
