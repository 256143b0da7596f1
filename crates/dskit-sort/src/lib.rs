//! Comparison sorts for dskit.
//!
//! In-place sorts over `&mut [T]` plus an allocating merge sort. Heap sort
//! is built on the sift primitives from `dskit-heapify`.

use dskit_heapify::{max_heapify, max_sift_down};

/// Exchange sort: for each position, swap in anything smaller found after it.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        for j in i + 1..n {
            if arr[i] > arr[j] {
                arr.swap(i, j);
            }
        }
    }
}

/// Adjacent-swap bubble sort that stops as soon as a full pass makes no
/// swap. Each pass floats the largest remaining element to the end, so the
/// scanned range shrinks by one per pass.
pub fn bubble_sort_early_exit<T: Ord>(arr: &mut [T]) {
    let mut end = arr.len();

    loop {
        let mut swapped = false;
        for j in 1..end {
            if arr[j - 1] > arr[j] {
                arr.swap(j - 1, j);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        end -= 1;
    }
}

/// Selection sort: repeatedly move the minimum of the unsorted tail forward.
pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if arr[j] < arr[min] {
                min = j;
            }
        }
        arr.swap(i, min);
    }
}

/// Insertion sort: walk each element back to its place among the sorted head.
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut cur = i;
        while cur > 0 && arr[cur] < arr[cur - 1] {
            arr.swap(cur, cur - 1);
            cur -= 1;
        }
    }
}

/// Shell sort with the Knuth gap sequence (`3h + 1`), shrinking by rounded
/// division by three.
pub fn shell_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();

    let mut gap = 1;
    while gap <= n / 9 {
        gap = 3 * gap + 1;
    }

    while gap > 0 {
        for i in gap..n {
            let mut cur = i;
            while cur >= gap && arr[cur] < arr[cur - gap] {
                arr.swap(cur, cur - gap);
                cur -= gap;
            }
        }
        gap = (gap + 1) / 3;
    }
}

/// Quicksort with the first element of each range as the pivot.
pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    quick_sort_by(arr, |_lo, _hi| 0);
}

/// Quicksort with the middle element of each range as the pivot. Behaves
/// much better than [`quick_sort`] on already-sorted input.
pub fn quick_sort_mid_pivot<T: Ord>(arr: &mut [T]) {
    quick_sort_by(arr, |lo, hi| (hi - lo) / 2 + lo);
}

/// Shared quicksort skeleton; `pick` chooses a pivot index within `lo..=hi`.
fn quick_sort_by<T: Ord>(arr: &mut [T], pick: fn(usize, usize) -> usize) {
    if arr.len() <= 1 {
        return;
    }

    let hi = arr.len() - 1;
    let pivot = pick(0, hi);
    arr.swap(pivot, hi);

    // Lomuto partition against the pivot parked at the top.
    let mut store = 0;
    for i in 0..hi {
        if arr[i] < arr[hi] {
            arr.swap(i, store);
            store += 1;
        }
    }
    arr.swap(store, hi);

    let (left, rest) = arr.split_at_mut(store);
    quick_sort_by(left, pick);
    quick_sort_by(&mut rest[1..], pick);
}

/// Stable merge sort producing a new vector.
pub fn merge_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }

    let mid = arr.len() / 2;
    let left = merge_sort(&arr[..mid]);
    let right = merge_sort(&arr[mid..]);
    merge(left, right)
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        if let Some(value) = next {
            merged.push(value);
        }
    }

    merged
}

/// Heap sort: build a max-heap, then repeatedly swap the root past the
/// shrinking heap bound and sift the new root down.
pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    max_heapify(arr);
    for end in (1..arr.len()).rev() {
        arr.swap(0, end);
        max_sift_down(arr, 0, end);
    }
}
