/*!
# Substructure Generators

This module provides utility methods to connect labels of a graph into common motifs:

- **Paths**
- **Cycles**
- **Cliques**
- **Complete bipartite graphs**

Missing labels are registered on the fly, just like with any other edge insertion.

# Example

```rust
use lgraphs::{prelude::*, gens::*};

let mut g = SparseGraph::new();
g.connect_path(["a", "b", "c"]);
g.connect_undirected_cycle(["c", "d", "e"]);

assert!(g.has_edge("a", "b") && !g.has_edge("b", "a"));
assert!(g.has_edge("e", "c") && g.has_edge("c", "e"));
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given labels in order with a **directed path**.
    ///
    /// # Example
    /// ```rust
    /// use lgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = AdjMatrixGraph::new();
    /// g.connect_path(["0", "1", "2", "3"]);
    ///
    /// assert!(g.has_edge("0", "1"));
    /// assert!(g.has_edge("2", "3"));
    /// assert!(!g.has_edge("1", "0"));
    /// ```
    fn connect_path<'a, P>(&mut self, labels_on_path: P)
    where
        P: IntoIterator<Item = &'a str>;

    /// Connects the given labels in order with a path of **undirected** edges.
    fn connect_undirected_path<'a, P>(&mut self, labels_on_path: P)
    where
        P: IntoIterator<Item = &'a str>;

    /// Connects the given labels with a **directed cycle**.
    /// A single label receives a self-edge.
    fn connect_cycle<'a, C>(&mut self, labels_in_cycle: C)
    where
        C: IntoIterator<Item = &'a str>;

    /// Connects the given labels with a cycle of **undirected** edges.
    fn connect_undirected_cycle<'a, C>(&mut self, labels_in_cycle: C)
    where
        C: IntoIterator<Item = &'a str>;

    /// Connects all given labels pairwise in both directions.
    /// If `with_loops` is `true`, each node also gets a self-edge.
    ///
    /// # Example
    /// ```rust
    /// use lgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = SparseGraph::new();
    /// g.connect_clique(["0", "1", "2"], false);
    ///
    /// assert!(g.reaches_all_others("0"));
    /// assert_eq!(g.count_self_edges(), 0);
    /// ```
    fn connect_clique<'a, C>(&mut self, labels: C, with_loops: bool)
    where
        C: IntoIterator<Item = &'a str>;

    /// Connects every label of `left` with every label of `right` in both directions.
    fn connect_biclique<'a, L, R>(&mut self, left: L, right: R)
    where
        L: IntoIterator<Item = &'a str>,
        R: IntoIterator<Item = &'a str>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<'a, P>(&mut self, labels_on_path: P)
    where
        P: IntoIterator<Item = &'a str>,
    {
        for (u, v) in labels_on_path.into_iter().tuple_windows() {
            self.add_directed_edge(u, v);
        }
    }

    fn connect_undirected_path<'a, P>(&mut self, labels_on_path: P)
    where
        P: IntoIterator<Item = &'a str>,
    {
        for (u, v) in labels_on_path.into_iter().tuple_windows() {
            self.add_undirected_edge(u, v);
        }
    }

    fn connect_cycle<'a, C>(&mut self, labels_in_cycle: C)
    where
        C: IntoIterator<Item = &'a str>,
    {
        let mut iter = labels_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_directed_edge(prev, cur);
                prev = cur;
            }

            self.add_directed_edge(prev, first);
        }
    }

    fn connect_undirected_cycle<'a, C>(&mut self, labels_in_cycle: C)
    where
        C: IntoIterator<Item = &'a str>,
    {
        let mut iter = labels_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_undirected_edge(prev, cur);
                prev = cur;
            }

            self.add_undirected_edge(prev, first);
        }
    }

    fn connect_clique<'a, C>(&mut self, labels: C, with_loops: bool)
    where
        C: IntoIterator<Item = &'a str>,
    {
        let labels = labels.into_iter().collect_vec();
        for &u in &labels {
            for &v in &labels {
                if u != v || with_loops {
                    self.add_directed_edge(u, v);
                }
            }
        }
    }

    fn connect_biclique<'a, L, R>(&mut self, left: L, right: R)
    where
        L: IntoIterator<Item = &'a str>,
        R: IntoIterator<Item = &'a str>,
    {
        let right = right.into_iter().collect_vec();
        for u in left {
            for &v in &right {
                self.add_undirected_edge(u, v);
            }
        }
    }
}
