//! Shared heap algorithms (percolation primitives and heapsort).
//!
//! The two percolation routines are the crux of the crate: [`MinHeap`] and
//! [`heapsort`] both maintain heap order exclusively through them. Both are
//! generic over [`Storage`], so the same code path serves the heap's owned
//! vector and any caller-supplied container.
//!
//! The main entry point is [`heapsort`].
//!
//! [`MinHeap`]: crate::heap::MinHeap

use crate::core::Storage;

/// Sorts the storage in place into non-ascending order.
///
/// Two phases over the same backing array, with no copy and no allocation
/// beyond O(1) temporaries:
///
/// 1. **Heapify**: establish min-heap order bottom-up by percolating down
///    every parent position, from the last parent toward the root. Deep
///    subtrees dominate the node count but need only short percolation
///    paths, so this pass is O(n).
/// 2. **Selection**: repeatedly swap the current minimum (position 0) with
///    the last position of the still-unsorted prefix, then percolate down
///    over the shrunk prefix. Successive minima accumulate at the back,
///    yielding descending order overall.
///
/// Total time is O(n log n). Inputs of length 0 or 1 are returned unchanged.
///
/// # Arguments
///
/// * `data` - The storage to be sorted. Accepts `&mut Vec<T>`, `&mut [T]`,
///   `&mut VecDeque<T>`, or any custom [`Storage`] implementation.
///
/// # Examples
///
/// ```
/// use oraheap::heapsort;
///
/// let mut data = vec![100, 20, 6, 200, 90, 150, 300];
/// heapsort(&mut data);
///
/// assert_eq!(data, vec![300, 200, 150, 100, 90, 20, 6]);
/// ```
pub fn heapsort<S>(data: &mut S)
where
    S: Storage + ?Sized,
    S::Item: Ord,
{
    let n = data.len();
    if n <= 1 {
        return;
    }

    // 1. Heapify bottom-up, starting at the last position that has a child.
    for i in (0..n / 2).rev() {
        percolate_down(data, i, n);
    }

    // 2. Swap the minimum into its final slot at the end of the unsorted
    //    prefix, then repair heap order over [0, k).
    for k in (1..n).rev() {
        data.swap(0, k);
        percolate_down(data, 0, k);
    }
}

/// Moves the element at `i` toward the leaves until the subtree rooted at
/// the original `i` satisfies heap order.
///
/// `k` is the exclusive upper bound on valid positions; passing a bound
/// short of the full length lets [`heapsort`] keep its sorted suffix out of
/// reach. Runs in O(log k).
pub(crate) fn percolate_down<S>(data: &mut S, mut i: usize, k: usize)
where
    S: Storage + ?Sized,
    S::Item: Ord,
{
    while 2 * i + 1 < k {
        let left = 2 * i + 1;
        let right = left + 1;

        // The left child stands in whenever the right child is out of bounds,
        // and wins ties.
        let child = if right >= k || data.get(left) <= data.get(right) {
            left
        } else {
            right
        };

        // Equal keys already satisfy heap order; ties never force a swap.
        if data.get(i) <= data.get(child) {
            return;
        }

        data.swap(i, child);
        i = child;
    }
}

/// Moves the element at `i` toward the root while its parent is strictly
/// greater. Runs in O(log n) for n stored elements.
pub(crate) fn percolate_up<S>(data: &mut S, mut i: usize)
where
    S: Storage + ?Sized,
    S::Item: Ord,
{
    while i > 0 {
        let parent = (i - 1) / 2;
        if data.get(parent) <= data.get(i) {
            return;
        }
        data.swap(i, parent);
        i = parent;
    }
}
