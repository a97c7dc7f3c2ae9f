//! Dijkstra's shortest path over a [`DaryHeap`] frontier.
//!
//! This is the lazy variant of the algorithm: the heap has no `decrease_key`,
//! so whenever a shorter route to an already-queued node is found the node is
//! simply pushed again with the lower cost, and stale entries are skipped when
//! popped. Distances and predecessors live in `FxHashMap`s keyed by node
//! state.
//!
//! # Example
//!
//! ```rust
//! use arity_heap::dijkstra::{shortest_path, Successors};
//!
//! #[derive(Clone, PartialEq, Eq, Hash, Debug)]
//! struct GridPos { x: i32, y: i32 }
//!
//! impl Successors for GridPos {
//!     type Cost = u32;
//!
//!     fn successors(&self) -> Vec<(Self, u32)> {
//!         [(1, 0), (-1, 0), (0, 1), (0, -1)]
//!             .iter()
//!             .map(|&(dx, dy)| (GridPos { x: self.x + dx, y: self.y + dy }, 1))
//!             .filter(|(p, _)| (0..8).contains(&p.x) && (0..8).contains(&p.y))
//!             .collect()
//!     }
//! }
//!
//! let start = GridPos { x: 0, y: 0 };
//! let goal = GridPos { x: 2, y: 2 };
//! let (path, cost) = shortest_path(&start, &goal).unwrap();
//! assert_eq!(cost, 4); // Manhattan distance
//! assert_eq!(path.len(), 5);
//! ```

use std::hash::Hash;
use std::ops::Add;

use rustc_hash::FxHashMap;

use crate::dary::DaryHeap;

/// Arity of the frontier heap. Wider than binary so the hot sift-down path
/// touches fewer cache lines per level.
const FRONTIER_ARITY: usize = 4;

/// Edge-weight requirements: orderable, copyable, addable, with a zero value
/// from `Default`.
pub trait Cost: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// A node in a search graph.
///
/// Implementors define the graph implicitly: `successors` returns every
/// neighbor reachable from this node together with the edge cost. Node state
/// is hashed and cloned into the search bookkeeping, so keep it small.
pub trait Successors: Clone + Eq + Hash {
    /// The cost type for edge weights (e.g. `u32`, `u64`).
    type Cost: Cost;

    /// Returns all successor nodes along with the cost to reach them.
    fn successors(&self) -> Vec<(Self, Self::Cost)>;
}

/// Runs Dijkstra's algorithm from `start` until `goal` is settled.
///
/// Returns the path from start to goal inclusive and its total cost, or
/// `None` if the goal is unreachable. If `start == goal` the path is the
/// single start node with zero cost.
pub fn shortest_path<N: Successors>(start: &N, goal: &N) -> Option<(Vec<N>, N::Cost)> {
    let mut dist: FxHashMap<N, N::Cost> = FxHashMap::default();
    let mut prev: FxHashMap<N, N> = FxHashMap::default();
    let mut frontier = DaryHeap::with_comparator(
        FRONTIER_ARITY,
        |a: &(N::Cost, N), b: &(N::Cost, N)| a.0 < b.0,
    );

    dist.insert(start.clone(), N::Cost::default());
    frontier.push((N::Cost::default(), start.clone()));

    while let Ok((cost, node)) = frontier.pop() {
        // Lazy deletion: a cheaper entry for this node was already settled.
        if dist.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        if node == *goal {
            return Some((reconstruct_path(&prev, node), cost));
        }

        for (next, edge_cost) in node.successors() {
            let tentative = cost + edge_cost;
            let improved = match dist.get(&next) {
                Some(&known) => tentative < known,
                None => true,
            };
            if improved {
                dist.insert(next.clone(), tentative);
                prev.insert(next.clone(), node.clone());
                frontier.push((tentative, next));
            }
        }
    }

    None
}

/// Walks the predecessor map back from `goal` and reverses.
fn reconstruct_path<N: Successors>(prev: &FxHashMap<N, N>, goal: N) -> Vec<N> {
    let mut path = Vec::new();
    let mut current = goal;
    while let Some(parent) = prev.get(&current) {
        let parent = parent.clone();
        path.push(current);
        current = parent;
    }
    path.push(current);
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Small explicit weighted digraph over `u32` node ids.
    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    struct Vertex {
        id: u32,
        edges: &'static [(u32, u32, u32)],
    }

    impl Successors for Vertex {
        type Cost = u32;

        fn successors(&self) -> Vec<(Self, u32)> {
            self.edges
                .iter()
                .filter(|(from, _, _)| *from == self.id)
                .map(|&(_, to, w)| {
                    (
                        Vertex {
                            id: to,
                            edges: self.edges,
                        },
                        w,
                    )
                })
                .collect()
        }
    }

    // 0 --1--> 1 --1--> 2
    // 0 -----10-------> 2
    // 3 is disconnected
    const EDGES: &[(u32, u32, u32)] = &[(0, 1, 1), (1, 2, 1), (0, 2, 10)];

    fn vertex(id: u32) -> Vertex {
        Vertex { id, edges: EDGES }
    }

    #[test]
    fn test_prefers_cheaper_multi_hop_path() {
        let (path, cost) = shortest_path(&vertex(0), &vertex(2)).unwrap();
        assert_eq!(cost, 2);
        let ids: Vec<u32> = path.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_unreachable_goal() {
        assert_eq!(shortest_path(&vertex(0), &vertex(3)), None);
    }

    #[test]
    fn test_start_is_goal() {
        let (path, cost) = shortest_path(&vertex(1), &vertex(1)).unwrap();
        assert_eq!(cost, 0);
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].id, 1);
    }

    #[test]
    fn test_grid_shortest_path() {
        #[derive(Clone, PartialEq, Eq, Hash, Debug)]
        struct Pos(i32, i32);

        impl Successors for Pos {
            type Cost = u64;

            fn successors(&self) -> Vec<(Self, u64)> {
                [(1, 0), (-1, 0), (0, 1), (0, -1)]
                    .iter()
                    .map(|&(dx, dy)| (Pos(self.0 + dx, self.1 + dy), 1))
                    .filter(|(p, _)| (0..16).contains(&p.0) && (0..16).contains(&p.1))
                    .collect()
            }
        }

        let (path, cost) = shortest_path(&Pos(0, 0), &Pos(10, 5)).unwrap();
        assert_eq!(cost, 15);
        assert_eq!(path.len(), 16);
        assert_eq!(path.first(), Some(&Pos(0, 0)));
        assert_eq!(path.last(), Some(&Pos(10, 5)));
    }
}
