//! Generic M-ary heap and recursive linked-list transformations
//!
//! This crate provides a small set of self-contained data structures:
//!
//! - **[`DaryHeap`]**: a `Vec`-backed M-ary priority queue, generic over the
//!   element type and a [`Priority`] comparator chosen at construction;
//!   O(log_M n) push and pop, O(1) peek, O(n) heapify from a vector
//! - **[`list`]**: an exclusively-owned singly-linked list with recursive
//!   partition-by-pivot and filter-by-predicate transformations
//! - **[`dijkstra`]**: lazy Dijkstra shortest path using a `DaryHeap` as the
//!   priority frontier
//!
//! # Example
//!
//! ```rust
//! use arity_heap::{DaryHeap, HeapError};
//!
//! let mut heap = DaryHeap::new(); // binary min-heap
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//! assert_eq!(heap.peek(), Ok(&3));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Ok(8));
//! assert_eq!(heap.pop(), Err(HeapError::Underflow));
//! ```

pub mod compare;
pub mod dary;
pub mod dijkstra;
pub mod list;

// Re-export the main types for convenience
pub use compare::{MaxFirst, MinFirst, Priority};
pub use dary::{DaryHeap, HeapError};
