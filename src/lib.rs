//! # Oraheap
//!
//! `oraheap` is a compact binary min-heap and in-place heapsort library built
//! around pluggable backing storage.
//!
//! It provides priority-queue semantics (insert, peek-minimum, extract-minimum)
//! with the standard logarithmic bounds, linear-time bulk heap construction,
//! and a heapsort that orders any mutable indexed container **non-ascending**
//! without allocating.
//!
//! ## Key Features
//!
//! - **Priority queue**: [`MinHeap`] keeps the smallest element at the root
//!   across inserts and extractions, and bulk-loads from an existing
//!   collection in O(n) via [`build`](MinHeap::build).
//! - **In-Place Heapsort**: [`heapsort`] sorts with O(1) auxiliary space by
//!   heapifying the caller's own storage and repeatedly swapping the minimum
//!   into its final slot.
//! - **Pluggable storage**: The [`Storage`] trait lets the same percolation
//!   primitives drive `Vec<T>`, slices, `VecDeque<T>`, or custom containers
//!   (e.g. parallel-array records) without copying the underlying data.
//!
//! ## Usage
//!
//! ### Priority queue
//!
//! ```rust
//! use oraheap::MinHeap;
//!
//! let mut heap: MinHeap<i32> = [100, 20, 6, 200].into_iter().collect();
//! heap.insert(90);
//!
//! assert_eq!(heap.extract_min(), Ok(6));
//! assert_eq!(heap.extract_min(), Ok(20));
//! assert_eq!(heap.len(), 3);
//! ```
//!
//! ### Heapsort
//!
//! ```rust
//! use oraheap::heapsort;
//!
//! let mut data = vec![100, 20, 6, 200, 90, 150, 300];
//! heapsort(&mut data);
//!
//! assert_eq!(data, vec![300, 200, 150, 100, 90, 20, 6]);
//! ```
//!
//! ### Custom storage
//!
//! To sort elements living in your own container, implement the [`Storage`]
//! trait.
//!
//! ```rust
//! use oraheap::{Storage, heapsort};
//!
//! struct Readings {
//!     celsius: Vec<i32>,
//! }
//!
//! impl Storage for Readings {
//!     type Item = i32;
//!
//!     fn get(&self, index: usize) -> &i32 {
//!         &self.celsius[index]
//!     }
//!
//!     fn set(&mut self, index: usize, value: i32) {
//!         self.celsius[index] = value;
//!     }
//!
//!     fn swap(&mut self, a: usize, b: usize) {
//!         self.celsius.swap(a, b);
//!     }
//!
//!     fn len(&self) -> usize {
//!         self.celsius.len()
//!     }
//! }
//!
//! let mut readings = Readings {
//!     celsius: vec![18, -4, 31, 7],
//! };
//! heapsort(&mut readings);
//!
//! assert_eq!(readings.celsius, vec![31, 18, 7, -4]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **`insert` / `extract_min`**: O(log n); percolation walks a single
//!   root-to-leaf path.
//! - **`build` / heapify**: O(n) bottom-up construction, cheaper than n
//!   individual inserts.
//! - **`heapsort`**: O(n log n) worst case, fully in place.
//!
//! Equal keys never force a swap during percolation; no stability guarantee
//! is made for their relative order. All operations are synchronous
//! single-threaded mutations, so sharing a heap across threads takes the same
//! external synchronization as any `&mut`-based structure.

pub mod algo;
pub mod core;
pub mod heap;

pub use crate::algo::heapsort;
pub use crate::core::{HeapError, Storage};
pub use crate::heap::MinHeap;

pub mod prelude {
    pub use crate::algo::heapsort;
    pub use crate::core::{HeapError, Storage};
    pub use crate::heap::MinHeap;
}
