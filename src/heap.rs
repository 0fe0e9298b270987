//! The binary min-heap engine, [`MinHeap`].

use std::fmt;

use crate::algo::{percolate_down, percolate_up};
use crate::core::{HeapError, Storage};

/// A priority queue implemented as a binary min-heap over a growable array.
///
/// The backing vector is read as a complete binary tree through the standard
/// implicit mapping: the element at position `i` has children at `2i + 1` and
/// `2i + 2` and its parent at `(i - 1) / 2`. Heap order means every parent is
/// less than or equal to each of its children, so the minimum always sits at
/// position 0.
///
/// # Time Complexity
///
/// | [insert] | [peek_min] | [extract_min] | [build] |
/// |----------|------------|---------------|---------|
/// | *O*(log *n*) | *O*(1) | *O*(log *n*) | *O*(*n*) |
///
/// [insert]: MinHeap::insert
/// [peek_min]: MinHeap::peek_min
/// [extract_min]: MinHeap::extract_min
/// [build]: MinHeap::build
///
/// # Examples
///
/// ```
/// use oraheap::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.insert(20);
/// heap.insert(6);
/// heap.insert(100);
///
/// assert_eq!(heap.peek_min(), Ok(&6));
/// assert_eq!(heap.extract_min(), Ok(6));
/// assert_eq!(heap.extract_min(), Ok(20));
/// assert_eq!(heap.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    data: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        MinHeap { data: Vec::new() }
    }

    /// Creates an empty heap able to hold at least `capacity` elements
    /// without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Adds `value` to the heap.
    ///
    /// The value lands in the first free slot of the backing array and then
    /// percolates upward to its resting position. Runs in O(log n).
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        percolate_up(&mut self.data, last);
    }

    /// Returns a reference to the minimum element without removing it.
    ///
    /// Side-effect free: consecutive calls return the same element. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] when the heap holds no elements.
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Removes and returns the minimum element.
    ///
    /// The last element overwrites the vacated root and percolates down over
    /// the reduced length. Runs in O(log n).
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] when the heap holds no elements; the
    /// failed call leaves the heap untouched.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        let min = self.data.swap_remove(0);
        let n = self.data.len();
        percolate_down(&mut self.data, 0, n);
        Ok(min)
    }

    /// Replaces the heap's contents with a heap built from `source`.
    ///
    /// The elements are copied out of `source` in their given order into a
    /// fresh backing vector, which is then heapified bottom-up: every parent
    /// position from `n / 2 - 1` down to 0 percolates down over the full
    /// length. This costs O(n) overall, against the O(n log n) of repeated
    /// insertion.
    ///
    /// The heap takes an independent copy: later writes to `source` are
    /// never visible through the heap, and heap mutations never touch
    /// `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use oraheap::MinHeap;
    ///
    /// let values = vec![100, 20, 6, 200, 90, 150, 300];
    /// let mut heap = MinHeap::new();
    /// heap.build(&values);
    ///
    /// assert_eq!(heap.peek_min(), Ok(&6));
    /// assert_eq!(heap.len(), 7);
    /// ```
    pub fn build<S>(&mut self, source: &S)
    where
        S: Storage<Item = T> + ?Sized,
        T: Clone,
    {
        let n = source.len();
        let mut data = Vec::with_capacity(n);
        for i in 0..n {
            data.push(source.get(i).clone());
        }
        for i in (0..n / 2).rev() {
            percolate_down(&mut data, i, n);
        }
        self.data = data;
    }

    /// Returns the number of elements in the heap. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap holds no elements. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes all elements, resetting the heap to the empty state.
    ///
    /// The backing vector is replaced outright (its capacity included)
    /// rather than drained element by element. Clearing an empty heap is a
    /// no-op.
    pub fn clear(&mut self) {
        if self.data.is_empty() {
            return;
        }
        self.data = Vec::new();
    }

    /// Returns the elements in internal array order.
    ///
    /// This is the implicit-tree layout, not sorted order, and the placement
    /// of equal keys within it is unspecified. Intended for diagnostics and
    /// invariant checking.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Ord> Default for MinHeap<T> {
    /// Creates an empty heap.
    fn default() -> Self {
        MinHeap::new()
    }
}

// Human-readable rendering for diagnostics: the full element sequence in
// internal array order, e.g. `HEAP [6, 20, 90]`.
impl<T: fmt::Debug> fmt::Display for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HEAP {:?}", self.data)
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    /// Seeds a heap by inserting each element in turn.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = MinHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
