//! Recursive transformations over an owned singly-linked list.
//!
//! A list is a chain of [`Node`]s where each node exclusively owns its
//! successor through a `Box`. The two transformations, [`partition`] and
//! [`remove_if`], consume the list they are given and redistribute ownership
//! of every node into their outputs; no node is ever copied or shared, and a
//! removed node is dropped exactly once.
//!
//! Both transformations are recursive, so stack depth is proportional to list
//! length. They are meant for the short lists of an exercise-sized workload,
//! not for millions of nodes.
//!
//! # Example
//!
//! ```rust
//! use arity_heap::list;
//!
//! let head = list::build([1, 7, 3, 9, 2]);
//! let (le, gt) = list::partition(head, &3);
//! assert_eq!(list::iter(&le).copied().collect::<Vec<_>>(), vec![1, 3, 2]);
//! assert_eq!(list::iter(&gt).copied().collect::<Vec<_>>(), vec![7, 9]);
//! ```

/// An owned link: either empty or a boxed node.
pub type Link<T> = Option<Box<Node<T>>>;

/// A singly-linked list node owning its successor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    /// Creates a node with no successor.
    pub fn new(value: T) -> Self {
        Node { value, next: None }
    }
}

/// Builds a list from an iterator, preserving iteration order.
pub fn build<T>(values: impl IntoIterator<Item = T>) -> Link<T> {
    let mut head = None;
    let mut tail = &mut head;
    for value in values {
        let node = tail.insert(Box::new(Node::new(value)));
        tail = &mut node.next;
    }
    head
}

/// Borrowing iterator over the values of a list.
pub fn iter<T>(head: &Link<T>) -> Iter<'_, T> {
    Iter {
        next: head.as_deref(),
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}

/// Splits a list around a pivot, consuming it.
///
/// Returns `(le, gt)`: nodes whose value is less than or equal to the pivot,
/// then nodes whose value is greater. Every node of the input lands in
/// exactly one output, and relative order is preserved within each.
pub fn partition<T: Ord>(head: Link<T>, pivot: &T) -> (Link<T>, Link<T>) {
    match head {
        None => (None, None),
        Some(mut node) => {
            let (le, gt) = partition(node.next.take(), pivot);
            if node.value <= *pivot {
                node.next = le;
                (Some(node), gt)
            } else {
                node.next = gt;
                (le, Some(node))
            }
        }
    }
}

/// Removes every node whose value satisfies the predicate, consuming the
/// list.
///
/// Note the polarity: matching nodes are *dropped*, the rest are kept in
/// their original order.
pub fn remove_if<T, F>(head: Link<T>, mut pred: F) -> Link<T>
where
    F: FnMut(&T) -> bool,
{
    remove_if_rec(head, &mut pred)
}

fn remove_if_rec<T, F>(head: Link<T>, pred: &mut F) -> Link<T>
where
    F: FnMut(&T) -> bool,
{
    match head {
        None => None,
        Some(mut node) => {
            let rest = remove_if_rec(node.next.take(), pred);
            if pred(&node.value) {
                rest
            } else {
                node.next = rest;
                Some(node)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Copy>(head: &Link<T>) -> Vec<T> {
        iter(head).copied().collect()
    }

    #[test]
    fn test_build_and_iter() {
        let head = build([1, 2, 3]);
        assert_eq!(values(&head), vec![1, 2, 3]);

        let empty: Link<i32> = build([]);
        assert!(empty.is_none());
        assert_eq!(iter(&empty).count(), 0);
    }

    #[test]
    fn test_partition_splits_around_pivot() {
        let head = build([5, 1, 8, 3, 9, 2, 7]);
        let (le, gt) = partition(head, &5);
        assert_eq!(values(&le), vec![5, 1, 3, 2]);
        assert_eq!(values(&gt), vec![8, 9, 7]);
    }

    #[test]
    fn test_partition_pivot_boundary() {
        // Values equal to the pivot go to the first output.
        let head = build([4, 4, 4]);
        let (le, gt) = partition(head, &4);
        assert_eq!(values(&le), vec![4, 4, 4]);
        assert!(gt.is_none());
    }

    #[test]
    fn test_partition_empty_and_one_sided() {
        let (le, gt) = partition(None::<Box<Node<i32>>>, &0);
        assert!(le.is_none());
        assert!(gt.is_none());

        let (le, gt) = partition(build([1, 2, 3]), &10);
        assert_eq!(values(&le), vec![1, 2, 3]);
        assert!(gt.is_none());

        let (le, gt) = partition(build([11, 12, 13]), &10);
        assert!(le.is_none());
        assert_eq!(values(&gt), vec![11, 12, 13]);
    }

    #[test]
    fn test_partition_keeps_every_node() {
        let input = vec![3, 1, 4, 1, 5, 9, 2, 6];
        let (le, gt) = partition(build(input.clone()), &4);

        let mut combined = values(&le);
        combined.extend(values(&gt));
        combined.sort_unstable();

        let mut expected = input;
        expected.sort_unstable();
        assert_eq!(combined, expected);
    }

    #[test]
    fn test_remove_if_drops_matches() {
        let head = build([1, 2, 3, 4, 5, 6]);
        let kept = remove_if(head, |v| v % 2 != 0);
        assert_eq!(values(&kept), vec![2, 4, 6]);
    }

    #[test]
    fn test_remove_if_extremes() {
        let kept = remove_if(build([1, 3, 5]), |_| true);
        assert!(kept.is_none());

        let kept = remove_if(build([1, 3, 5]), |_| false);
        assert_eq!(values(&kept), vec![1, 3, 5]);

        let kept = remove_if(None::<Box<Node<i32>>>, |_| true);
        assert!(kept.is_none());
    }

    #[test]
    fn test_remove_if_stateful_predicate() {
        // FnMut predicate: drop every other node.
        let mut keep = false;
        let kept = remove_if(build([10, 20, 30, 40]), move |_| {
            keep = !keep;
            keep
        });
        assert_eq!(values(&kept), vec![20, 40]);
    }
}
