/*!
Breadth-first traversal over labelled graphs.

This module provides:
- [`Bfs`], a lazy breadth-first iterator that reports every visited node together with
  its predecessor and its hop distance from the start,
- the [`Traversal`] trait exposing traversal-derived queries (reachability, hop distances)
  directly as methods on graph data structures.

Only outgoing edges are followed.
*/

use std::collections::VecDeque;

use fxhash::{FxHashMap, FxHashSet};

use super::*;

/// A node yielded by [`Bfs`] together with its position in the implied BFS tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BfsItem<'a> {
    /// The visited node
    pub node: &'a str,
    /// The node from which `node` was discovered first; `None` for start nodes
    pub predecessor: Option<&'a str>,
    /// Number of hops from the start node of the current search
    pub depth: usize,
}

/// Breadth-first search iterator.
///
/// Nodes are marked visited when they are enqueued, so every node is yielded at most once
/// and its predecessor is always the node that discovered it first.
pub struct Bfs<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: FxHashSet<&'a str>,
    queue: VecDeque<BfsItem<'a>>,
}

impl<'a, G> Bfs<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new BFS starting at `start`.
    /// If `start` is not registered, the search yields nothing.
    pub fn new(graph: &'a G, start: &str) -> Self {
        let mut bfs = Self {
            graph,
            visited: FxHashSet::default(),
            queue: VecDeque::new(),
        };

        if let Some(start) = graph.find_label(start) {
            bfs.push_start(start);
        }

        bfs
    }

    fn push_start(&mut self, start: &'a str) {
        self.visited.insert(start);
        self.queue.push_back(BfsItem {
            node: start,
            predecessor: None,
            depth: 0,
        });
    }

    /// Returns *true* if `u` has been discovered so far
    pub fn did_visit_node(&self, u: &str) -> bool {
        self.visited.contains(u)
    }

    /// Tries to restart the search at a yet unvisited node (in registration order) and returns
    /// *true* iff successful. Requires that the search came to a hold earlier,
    /// i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.queue.is_empty());
        match self.graph.vertices().find(|u| !self.visited.contains(u)) {
            None => false,
            Some(u) => {
                self.push_start(u);
                true
            }
        }
    }
}

impl<'a, G> Iterator for Bfs<'a, G>
where
    G: AdjacencyList,
{
    type Item = BfsItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(popped.node) {
            if self.visited.insert(v) {
                self.queue.push_back(BfsItem {
                    node: v,
                    predecessor: Some(popped.node),
                    depth: popped.depth + 1,
                });
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.graph.len() - self.visited.len() + self.queue.len()),
        )
    }
}

/// Traversal-based queries available on every graph.
pub trait Traversal: AdjacencyList {
    /// Returns a breadth-first search iterator starting at `start`.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = SparseGraph::from_edges([("a", "b"), ("a", "c"), ("b", "d")]);
    ///
    /// let order: Vec<_> = g.bfs("a").map(|item| item.node).collect();
    /// assert_eq!(order, vec!["a", "b", "c", "d"]);
    /// ```
    fn bfs(&self, start: &str) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Returns the number of hops from `start` to every node reachable from it (including `start`).
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjMatrixGraph::from_edges([("a", "b"), ("b", "c"), ("a", "c"), ("d", "a")]);
    ///
    /// let distances = g.hop_distances_from("a");
    /// assert_eq!(distances["c"], 1);
    /// assert!(!distances.contains_key("d"));
    /// ```
    fn hop_distances_from(&self, start: &str) -> FxHashMap<&str, usize> {
        self.bfs(start)
            .map(|item| (item.node, item.depth))
            .collect()
    }
}

impl<G> Traversal for G where G: AdjacencyList {}
