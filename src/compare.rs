//! Priority comparators for the heap types in this crate.
//!
//! A comparator is a value whose [`Priority`] implementation decides which of
//! two elements outranks the other. The comparator type is a type parameter of
//! [`DaryHeap`](crate::DaryHeap), fixed at construction, so comparisons are
//! statically dispatched.
//!
//! Three kinds of comparator are available:
//!
//! - [`MinFirst`]: the least element (by `Ord`) outranks — a min-heap. This is
//!   the default.
//! - [`MaxFirst`]: the greatest element outranks — a max-heap.
//! - Any closure or function of type `Fn(&T, &T) -> bool`, via a blanket
//!   implementation.
//!
//! # Example
//!
//! ```rust
//! use arity_heap::{DaryHeap, MaxFirst};
//!
//! // Order pairs by their second component, largest first.
//! let mut heap = DaryHeap::with_comparator(2, |a: &(u32, u32), b: &(u32, u32)| a.1 > b.1);
//! heap.push((1, 10));
//! heap.push((2, 30));
//! heap.push((3, 20));
//! assert_eq!(heap.peek(), Ok(&(2, 30)));
//!
//! // The same policy for plain integers, as a named comparator.
//! let mut heap = DaryHeap::with_comparator(2, MaxFirst);
//! heap.push(1u32);
//! heap.push(3);
//! assert_eq!(heap.pop(), Ok(3));
//! ```

/// A binary priority predicate over `T`.
///
/// `outranks(a, b)` returns `true` when `a` takes strictly higher priority
/// than `b` — the element the heap should surface first. The induced relation
/// must be a strict weak ordering (irreflexive, asymmetric, transitive); a
/// comparator that violates this is a logic error. The heap stays memory-safe
/// under such a comparator, but the order of popped elements is unspecified.
pub trait Priority<T> {
    /// Returns `true` when `a` takes strictly higher priority than `b`.
    fn outranks(&self, a: &T, b: &T) -> bool;
}

/// Comparator that ranks the least element (by `Ord`) first.
///
/// The default comparator of [`DaryHeap`](crate::DaryHeap): a heap using it
/// is a min-heap and pops elements in ascending order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord> Priority<T> for MinFirst {
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Comparator that ranks the greatest element (by `Ord`) first.
///
/// A heap using it is a max-heap and pops elements in descending order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord> Priority<T> for MaxFirst {
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T, F> Priority<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_first_ranks_lesser() {
        assert!(MinFirst.outranks(&1, &2));
        assert!(!MinFirst.outranks(&2, &1));
        assert!(!MinFirst.outranks(&1, &1));
    }

    #[test]
    fn max_first_ranks_greater() {
        assert!(MaxFirst.outranks(&2, &1));
        assert!(!MaxFirst.outranks(&1, &2));
        assert!(!MaxFirst.outranks(&1, &1));
    }

    #[test]
    fn closures_are_comparators() {
        let by_len = |a: &&str, b: &&str| a.len() < b.len();
        assert!(by_len.outranks(&"ab", &"abcd"));
        assert!(!by_len.outranks(&"abcd", &"ab"));
    }
}
