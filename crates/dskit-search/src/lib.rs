//! Binary search for dskit.
//!
//! Both variants require pre-sorted input and probe the middle of the
//! remaining range, reporting a hit as value plus index. Absence is an
//! expected outcome and comes back as `None`, not an error.

use std::cmp::Ordering;

/// A successful search: the matched value and where it sits in the slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found<T> {
    pub value: T,
    pub index: usize,
}

/// Recursive binary search over a sorted slice.
pub fn binary_search<T: Ord + Clone>(arr: &[T], target: &T) -> Option<Found<T>> {
    if arr.is_empty() {
        return None;
    }
    search_range(arr, target, 0, arr.len() - 1)
}

fn search_range<T: Ord + Clone>(arr: &[T], target: &T, left: usize, right: usize) -> Option<Found<T>> {
    let mid = (right - left) / 2 + left;

    match target.cmp(&arr[mid]) {
        Ordering::Equal => Some(Found {
            value: arr[mid].clone(),
            index: mid,
        }),
        _ if left >= right => None,
        Ordering::Less => {
            if mid > left {
                search_range(arr, target, left, mid - 1)
            } else {
                None
            }
        }
        Ordering::Greater => search_range(arr, target, mid + 1, right),
    }
}

/// Iterative binary search over a sorted slice.
pub fn binary_search_iterative<T: Ord + Clone>(arr: &[T], target: &T) -> Option<Found<T>> {
    let mut left = 0;
    let mut right = arr.len().checked_sub(1)?;

    while left <= right {
        let mid = (right - left) / 2 + left;

        match target.cmp(&arr[mid]) {
            Ordering::Equal => {
                return Some(Found {
                    value: arr[mid].clone(),
                    index: mid,
                });
            }
            Ordering::Less => {
                if mid == 0 {
                    return None;
                }
                right = mid - 1;
            }
            Ordering::Greater => left = mid + 1,
        }
    }

    None
}
