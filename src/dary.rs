//! Generic M-ary heap (priority queue) backed by a flat `Vec`.
//!
//! [`DaryHeap`] stores its elements as a complete M-ary tree in breadth-first
//! order: the root lives at index 0, the k-th child (1 ≤ k ≤ M) of the node at
//! index `i` lives at `M * i + k`, and the parent of a non-root node at index
//! `i` lives at `(i - 1) / M`. No parent or child pointers are stored; the
//! shape of the tree is entirely index arithmetic over the arity.
//!
//! The ordering policy is a comparator value implementing
//! [`Priority`](crate::compare::Priority), fixed as a type parameter at
//! construction. The default, [`MinFirst`](crate::compare::MinFirst), yields a
//! min-heap over any `T: Ord`.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity       |
//! |---------------------|------------------|
//! | `push`              | O(log_M n)       |
//! | `pop`               | O(M · log_M n)   |
//! | `peek`              | O(1)             |
//! | `from_vec`          | O(n)             |
//! | `merge`             | O(n log_M n)     |
//!
//! # Example
//!
//! ```rust
//! use arity_heap::{DaryHeap, HeapError};
//!
//! let mut heap = DaryHeap::with_arity(3);
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//!
//! assert_eq!(heap.peek(), Ok(&3));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Ok(8));
//! assert_eq!(heap.pop(), Err(HeapError::Underflow));
//! ```

use std::fmt;

use crate::compare::{MinFirst, Priority};

/// Error type for heap operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `peek` or `pop` was called on an empty heap
    Underflow,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Underflow => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// An M-ary heap parameterized over the element type and a comparator.
///
/// The heap surfaces the element with the highest priority under the
/// comparator: `peek` borrows it, `pop` removes it. With the default
/// [`MinFirst`] comparator this is the smallest element.
///
/// # Heap-order invariant
///
/// For every non-root index `i`, the element at `i` does not strictly outrank
/// the element at its parent. Every public mutating operation leaves the
/// backing storage in this state.
///
/// # Arity
///
/// The arity is fixed at construction and must be at least 1. Arity 0 makes
/// the parent arithmetic meaningless and is rejected with a panic. Arity 1 is
/// accepted but degenerates to a sorted chain where `push` and `pop` are O(n);
/// 2 and above give the usual logarithmic tree shape.
#[derive(Debug, Clone)]
pub struct DaryHeap<T, C = MinFirst> {
    data: Vec<T>,
    arity: usize,
    cmp: C,
}

impl<T: Ord> DaryHeap<T, MinFirst> {
    /// Creates an empty binary min-heap.
    pub fn new() -> Self {
        Self::with_arity(2)
    }

    /// Creates an empty min-heap with the given arity.
    ///
    /// # Panics
    /// Panics if `arity` is 0.
    pub fn with_arity(arity: usize) -> Self {
        Self::with_comparator(arity, MinFirst)
    }

    /// Creates an empty min-heap with the given arity and room for at least
    /// `capacity` elements before reallocating.
    ///
    /// # Panics
    /// Panics if `arity` is 0.
    pub fn with_capacity(arity: usize, capacity: usize) -> Self {
        let mut heap = Self::with_arity(arity);
        heap.data.reserve(capacity);
        heap
    }
}

impl<T, C: Priority<T>> DaryHeap<T, C> {
    /// Creates an empty heap with the given arity and comparator.
    ///
    /// This is the full constructor; `new` and `with_arity` delegate to it
    /// with the [`MinFirst`] comparator.
    ///
    /// # Panics
    /// Panics if `arity` is 0.
    pub fn with_comparator(arity: usize, cmp: C) -> Self {
        assert!(arity >= 1, "heap arity must be at least 1");
        DaryHeap {
            data: Vec::new(),
            arity,
            cmp,
        }
    }

    /// Builds a heap out of an existing vector in O(n).
    ///
    /// Uses bottom-up heapify: sift down every internal node starting from
    /// the last parent. Cheaper than pushing the elements one at a time.
    ///
    /// # Panics
    /// Panics if `arity` is 0.
    pub fn from_vec(arity: usize, cmp: C, data: Vec<T>) -> Self {
        let mut heap = DaryHeap {
            data,
            arity,
            cmp,
        };
        assert!(heap.arity >= 1, "heap arity must be at least 1");
        if heap.data.len() > 1 {
            let last_parent = (heap.data.len() - 2) / heap.arity;
            for index in (0..=last_parent).rev() {
                heap.sift_down(index);
            }
        }
        heap
    }

    /// Returns true if the heap contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the arity fixed at construction.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns how many elements the heap can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns a reference to the comparator.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Removes all elements, keeping the allocated storage.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the backing storage as a slice, in tree layout order.
    ///
    /// Only the first element is the highest-priority one; the rest appear in
    /// an arbitrary order consistent with the heap-order invariant.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator over the elements in tree layout order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Inserts an element, maintaining the heap-order invariant.
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns a reference to the highest-priority element without removing
    /// it.
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Underflow)
    }

    /// Removes and returns the highest-priority element.
    ///
    /// The last element of the backing storage is moved over the root and
    /// sifted down until the heap-order invariant holds again.
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty; the heap is
    /// left unchanged.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Underflow);
        }
        let item = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(item)
    }

    /// Merges another heap into this one, consuming the other heap.
    ///
    /// Re-pushes the other heap's elements one at a time; the other heap's
    /// arity and comparator are discarded.
    pub fn merge(&mut self, other: Self) {
        self.data.reserve(other.data.len());
        for item in other.data {
            self.push(item);
        }
    }

    /// Drains the heap into a vector sorted by priority, highest first.
    ///
    /// With the default [`MinFirst`] comparator this is ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Move the element at `index` toward the root until its parent has
    /// equal or higher priority.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / self.arity;
            if self.cmp.outranks(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `index` toward the leaves until no child outranks
    /// it.
    ///
    /// Scans all up-to-M children at each level and picks the best of
    /// {node, children}, preferring the node on ties so equal-priority
    /// elements cause no swap.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let mut best = index;
            let first_child = self.arity * index + 1;
            let end = first_child.saturating_add(self.arity).min(len);
            for child in first_child..end {
                if self.cmp.outranks(&self.data[child], &self.data[best]) {
                    best = child;
                }
            }
            if best != index {
                self.data.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Priority<T> + Default> Default for DaryHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(2, C::default())
    }
}

impl<T: Ord> From<Vec<T>> for DaryHeap<T, MinFirst> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(2, MinFirst, data)
    }
}

impl<T: Ord> FromIterator<T> for DaryHeap<T, MinFirst> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}
