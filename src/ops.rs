use fxhash::FxHashSet;
use itertools::Itertools;

use crate::{edge::LabelledEdge, error::Result, label::*};

/// Provides getters pertaining to the node-set of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all labels in the order they were registered.
    fn vertices(&self) -> impl Iterator<Item = &str> + '_;

    /// Returns *true* if a node with the given label is registered
    fn contains_node(&self, u: &str) -> bool;

    /// Returns the label as stored by the graph, i.e. borrowed for the lifetime of the graph,
    /// or `None` if `u` is not registered.
    fn find_label(&self, u: &str) -> Option<&str> {
        self.vertices().find(|&v| v == u)
    }

    /// Returns the set of all registered labels.
    fn all_nodes(&self) -> FxHashSet<Label> {
        self.vertices().map(str::to_owned).collect()
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the labels `v` such that edge `(u, v)` is present.
    /// The order is deterministic for a given store but differs between stores.
    /// Yields nothing if `u` is not registered.
    fn neighbors_of(&self, u: &str) -> impl Iterator<Item = &str> + '_;

    /// Returns the number of outgoing neighbors of `u`
    fn degree_of(&self, u: &str) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns *true* if the edge `(u, v)` is present
    fn has_edge(&self, u: &str, v: &str) -> bool {
        self.neighbors_of(u).any(|w| w == v)
    }

    /// Returns the number of nodes `u` with a self-edge `(u, u)`.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let mut g = SparseGraph::new();
    /// g.add_node("2").unwrap();
    /// g.add_directed_edge("1", "1");
    /// assert_eq!(g.count_self_edges(), 1);
    ///
    /// g.add_directed_edge("2", "2");
    /// assert_eq!(g.count_self_edges(), 2);
    /// ```
    fn count_self_edges(&self) -> NumNodes {
        self.vertices().filter(|&u| self.has_edge(u, u)).count() as NumNodes
    }

    /// Returns *true* if `u` has an edge to every *other* registered node.
    /// Self-edges are irrelevant. Returns *false* if `u` is not registered.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let mut g = AdjMatrixGraph::new();
    /// g.add_undirected_edge("1", "2");
    /// assert!(g.reaches_all_others("1"));
    /// assert!(g.reaches_all_others("2"));
    ///
    /// g.add_node("3").unwrap();
    /// assert!(!g.reaches_all_others("1"));
    /// ```
    fn reaches_all_others(&self, u: &str) -> bool {
        if !self.contains_node(u) {
            return false;
        }

        let reached: FxHashSet<&str> = self.neighbors_of(u).collect();
        self.vertices().all(|v| v == u || reached.contains(v))
    }

    /// Returns an iterator over all outgoing edges of `u`
    fn edges_of(&self, u: &str) -> impl Iterator<Item = LabelledEdge> + '_ {
        let from = u.to_owned();
        self.neighbors_of(u)
            .map(move |v| LabelledEdge::new(from.clone(), v))
    }

    /// Returns an iterator over all edges in the graph, grouped by source in registration order.
    fn edges(&self) -> impl Iterator<Item = LabelledEdge> + '_ {
        self.vertices().flat_map(move |u| self.edges_of(u))
    }

    /// Returns all edges of the graph in sorted order
    fn ordered_edges(&self) -> Vec<LabelledEdge> {
        self.edges().sorted().collect_vec()
    }

    /// Returns the number of (directed) edges of the graph
    fn number_of_edges(&self) -> usize {
        self.vertices().map(|u| self.degree_of(u) as usize).sum()
    }
}

/// Trait for mutating the node- and edge-set of a graph.
/// Nodes can only be added; neither nodes nor edges can be removed.
pub trait GraphEdgeEditing: AdjacencyList {
    /// Registers a new node without any edges.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateNode`](crate::error::GraphError::DuplicateNode) if the label is already registered.
    fn add_node(&mut self, u: &str) -> Result<()>;

    /// Adds the directed edge `(u, v)`, registering missing endpoints first.
    /// Returns *true* if the edge was present before (in which case nothing changes).
    fn try_add_directed_edge(&mut self, u: &str, v: &str) -> bool;

    /// Adds the directed edge `(u, v)`, registering missing endpoints first.
    /// Adding an existing edge is a no-op.
    fn add_directed_edge(&mut self, u: &str, v: &str) {
        self.try_add_directed_edge(u, v);
    }

    /// Adds both directed edges `(u, v)` and `(v, u)`
    fn add_undirected_edge(&mut self, u: &str, v: &str) {
        self.add_directed_edge(u, v);
        self.add_directed_edge(v, u);
    }

    /// Adds all directed edges of the iterator
    fn add_directed_edges<I, E>(&mut self, edges: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<LabelledEdge>,
    {
        for LabelledEdge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_directed_edge(&u, &v);
        }
    }

    /// Adds all edges of the iterator in both directions
    fn add_undirected_edges<I, E>(&mut self, edges: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<LabelledEdge>,
    {
        for LabelledEdge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_undirected_edge(&u, &v);
        }
    }
}

/// Provides constructors for empty graphs
pub trait GraphNew: Sized {
    /// Creates an empty, unnamed graph
    fn new() -> Self;

    /// Creates an empty graph carrying the given name
    fn with_name(name: impl Into<String>) -> Self;

    /// Returns the name of the graph, if one was given
    fn name(&self) -> Option<&str>;
}

/// Provides bulk construction of graphs
pub trait GraphFromEdges: GraphNew + GraphEdgeEditing {
    /// Creates a new graph containing exactly the given directed edges and their endpoints.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let g = SparseGraph::from_edges([("a", "b"), ("b", "c"), ("a", "b")]);
    /// assert_eq!(g.number_of_nodes(), 3);
    /// assert_eq!(g.number_of_edges(), 2);
    /// ```
    fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<LabelledEdge>,
    {
        let mut graph = Self::new();
        graph.add_directed_edges(edges);
        graph
    }
}

impl<G> GraphFromEdges for G where G: GraphNew + GraphEdgeEditing {}
