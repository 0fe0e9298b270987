//! Core traits and types for Oraheap.
//!
//! This module defines:
//! - [`Storage`]: The backing-array contract the heap algorithms operate through.
//! - [`HeapError`]: Error type returned by fallible heap operations.

use std::collections::VecDeque;

/// Errors returned by fallible heap operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HeapError {
    /// The heap holds no elements.
    #[error("heap is empty")]
    Empty,
}

/// A contract for index-addressable, mutable element storage.
///
/// This trait lets the heap algorithms run over any container offering O(1)
/// indexed access (e.g., `Vec<T>`, slices, `VecDeque<T>`, or custom
/// structures like parallel-array records) without copying the elements out
/// first.
///
/// Only [`get`](Storage::get), [`swap`](Storage::swap), and
/// [`len`](Storage::len) are exercised by the percolation routines;
/// [`set`](Storage::set) completes the indexed-mutation surface for
/// implementors.
///
/// # Panics
///
/// An out-of-bounds index passed to any method here is a programming error.
/// Implementations propagate the underlying container's bounds panic
/// unchanged, exactly like slice indexing.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use oraheap::core::Storage;
///
/// struct Scores {
///     data: Vec<u32>,
/// }
///
/// impl Storage for Scores {
///     type Item = u32;
///
///     fn get(&self, index: usize) -> &u32 {
///         &self.data[index]
///     }
///
///     fn set(&mut self, index: usize, value: u32) {
///         self.data[index] = value;
///     }
///
///     fn swap(&mut self, a: usize, b: usize) {
///         self.data.swap(a, b);
///     }
///
///     fn len(&self) -> usize {
///         self.data.len()
///     }
/// }
/// ```
pub trait Storage {
    /// The element type held by the container.
    type Item;

    /// Returns a reference to the element at `index`.
    fn get(&self, index: usize) -> &Self::Item;

    /// Overwrites the element at `index` with `value`.
    fn set(&mut self, index: usize, value: Self::Item);

    /// Exchanges the elements at positions `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);

    /// Returns the number of elements in the container.
    fn len(&self) -> usize;

    /// Returns `true` if the container is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Blanket implementation for slices; covers arrays through unsized coercion.
impl<T> Storage for [T] {
    type Item = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl<T> Storage for Vec<T> {
    type Item = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Implementation for VecDeque.
// Provides O(1) random access, so it is suitable for the heap algorithms.
impl<T> Storage for VecDeque<T> {
    type Item = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }

    fn len(&self) -> usize {
        self.len()
    }
}
