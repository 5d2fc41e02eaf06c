//! Generic in-place sort over a capability trait.
//!
//! [`sort`] only ever asks three things of the data: how many elements
//! there are, whether element `i` sorts before element `j`, and to swap two
//! elements. Any collection implementing [`Sortable`] can be sorted without
//! exposing its elements or their layout.
//!
//! # Algorithm
//!
//! Introsort:
//! - Quicksort with a median-of-three pivot for large ranges
//! - Heapsort once recursion exceeds `2 * log2(n)` levels, bounding the
//!   worst case at O(n log n)
//! - Insertion sort for ranges of [`INSERTION_SORT_THRESHOLD`] or fewer
//!
//! Recursion always descends into the smaller partition, so stack depth is
//! O(log n). The sort is not stable; for byte sequences equal elements are
//! indistinguishable, so this is never observable.

/// Ranges this short are finished with insertion sort.
const INSERTION_SORT_THRESHOLD: usize = 12;

/// The capabilities an in-place comparison sort needs.
///
/// Indices passed to `less` and `swap` are always in `[0, len())`.
/// Implementations should panic on anything else.
pub trait Sortable {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` iff element `i` sorts strictly before element `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchange elements `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);
}

/// Sort `data` in place. Not stable.
pub fn sort<S: Sortable + ?Sized>(data: &mut S) {
    let n = data.len();
    let depth_limit = 2 * (usize::BITS - n.leading_zeros()) as usize;
    introsort(data, 0, n, depth_limit);
    tracing::trace!(len = n, depth_limit, "sorted in place");
}

/// Returns `true` if no element sorts strictly before its predecessor.
pub fn is_sorted<S: Sortable + ?Sized>(data: &S) -> bool {
    (1..data.len()).all(|i| !data.less(i, i - 1))
}

/// Sort the half-open range `[lo, hi)`.
fn introsort<S: Sortable + ?Sized>(data: &mut S, mut lo: usize, mut hi: usize, mut depth: usize) {
    while hi - lo > INSERTION_SORT_THRESHOLD {
        if depth == 0 {
            heapsort(data, lo, hi);
            return;
        }
        depth -= 1;

        let p = partition(data, lo, hi);
        if p - lo < hi - (p + 1) {
            introsort(data, lo, p, depth);
            lo = p + 1;
        } else {
            introsort(data, p + 1, hi, depth);
            hi = p;
        }
    }
    insertion_sort(data, lo, hi);
}

/// Lomuto partition around the median of `lo`, mid and `hi - 1`.
///
/// Returns the pivot's final index. Requires `hi - lo >= 3`.
fn partition<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) -> usize {
    let mid = lo + (hi - lo) / 2;
    median_of_three(data, lo, mid, hi - 1);

    let pivot = hi - 1;
    data.swap(mid, pivot);

    let mut store = lo;
    for i in lo..pivot {
        if data.less(i, pivot) {
            data.swap(i, store);
            store += 1;
        }
    }
    data.swap(store, pivot);
    store
}

/// Order elements `a`, `b`, `c` so that `b` holds the median.
fn median_of_three<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize, c: usize) {
    if data.less(b, a) {
        data.swap(a, b);
    }
    if data.less(c, b) {
        data.swap(b, c);
        if data.less(b, a) {
            data.swap(a, b);
        }
    }
}

fn insertion_sort<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) {
    for i in (lo + 1)..hi {
        let mut j = i;
        while j > lo && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

fn heapsort<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) {
    let n = hi - lo;
    for root in (0..n / 2).rev() {
        sift_down(data, lo, root, n);
    }
    for end in (1..n).rev() {
        data.swap(lo, lo + end);
        sift_down(data, lo, 0, end);
    }
}

/// Restore the max-heap property below `root` for the heap `[base, base + end)`.
fn sift_down<S: Sortable + ?Sized>(data: &mut S, base: usize, mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && data.less(base + child, base + child + 1) {
            child += 1;
        }
        if !data.less(base + root, base + child) {
            return;
        }
        data.swap(base + root, base + child);
        root = child;
    }
}
