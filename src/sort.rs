//! Comparison sorts.

use tracing::trace;

/// Sorts `arr` in place with bubble sort.
///
/// Pass `i` walks the unsorted prefix `0..n-i-1` swapping adjacent
/// out-of-order pairs, which parks the largest remaining element at the end
/// of the prefix. Every pass runs to completion; there is no early exit, so
/// the comparison count is always `n(n-1)/2`.
pub fn bubble_sort<T: PartialOrd>(arr: &mut [T]) {
    let n = arr.len();
    if n < 2 {
        return;
    }

    let mut swaps: usize = 0;
    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swaps += 1;
            }
        }
    }
    trace!(len = n, swaps, "bubble sort finished");
}

/// Returns a sorted copy of `arr` using top-down merge sort.
///
/// Stable: equal elements keep their relative order.
pub fn merge_sort<T: PartialOrd + Clone>(arr: &[T]) -> Vec<T> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }

    let mid = arr.len() / 2;
    let left = merge_sort(&arr[..mid]);
    let right = merge_sort(&arr[mid..]);
    merge(left, right)
}

/// Merges two sorted runs into one sorted vector, preferring `left` on ties.
pub fn merge<T: PartialOrd>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
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
        result.extend(next);
    }

    result
}
