/*!
# Sparse Graph Representation

[`SparseGraph`] keeps one record per node inside an arena owned by the graph.
A record stores its label and an ordered list of references to the records of its
out-neighbors, so walking from a node to a neighbor is a direct hop into the arena.
The graph is the sole owner of all records; records never own each other.

Since records only know their out-neighbors, [`AdjacencyList::count_self_edges`] and
[`AdjacencyList::reaches_all_others`] are expressed through [`AdjacencyList::neighbors_of`]
and scale with the number of nodes times the out-degree.
*/

use fxhash::FxHashMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::testing::test_graph_ops;

use super::*;

/// Number of neighbors stored inline before a record spills onto the heap
const INLINE_NEIGHBORS: usize = 4;

/// A node of a [`SparseGraph`]
#[derive(Debug, Clone)]
struct NodeRecord {
    label: Label,
    /// Out-neighbors in insertion order; entries are positions in the arena
    next: SmallVec<[NodeId; INLINE_NEIGHBORS]>,
}

impl NodeRecord {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_owned(),
            next: SmallVec::new(),
        }
    }
}

/// A directed graph backed by per-node neighbor lists.
///
/// Neighbors are reported in the order their edges were added.
#[derive(Debug, Clone, Default)]
pub struct SparseGraph {
    name: Option<String>,
    ids: FxHashMap<Label, NodeId>,
    nodes: Vec<NodeRecord>,
}

impl SparseGraph {
    /// Registers `label` without checking for duplicates and returns its position in the arena
    fn add_node_unchecked(&mut self, label: &str) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.ids.insert(label.to_owned(), id);
        self.nodes.push(NodeRecord::new(label));
        id
    }

    /// Returns the arena position of `label`, registering the node first if necessary
    fn id_or_insert(&mut self, label: &str) -> NodeId {
        match self.ids.get(label) {
            Some(&id) => id,
            None => {
                trace!(label, "registering endpoint of new edge");
                self.add_node_unchecked(label)
            }
        }
    }

    fn record(&self, label: &str) -> Option<&NodeRecord> {
        self.ids.get(label).map(|&id| &self.nodes[id as usize])
    }
}

impl GraphNew for SparseGraph {
    fn new() -> Self {
        Self::default()
    }

    fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl GraphNodeOrder for SparseGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nodes.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|record| record.label.as_str())
    }

    fn contains_node(&self, u: &str) -> bool {
        self.ids.contains_key(u)
    }

    fn find_label(&self, u: &str) -> Option<&str> {
        self.ids.get_key_value(u).map(|(label, _)| label.as_str())
    }
}

impl AdjacencyList for SparseGraph {
    fn neighbors_of(&self, u: &str) -> impl Iterator<Item = &str> + '_ {
        self.record(u).into_iter().flat_map(move |record| {
            record
                .next
                .iter()
                .map(move |&v| self.nodes[v as usize].label.as_str())
        })
    }

    fn degree_of(&self, u: &str) -> NumNodes {
        self.record(u)
            .map_or(0, |record| record.next.len() as NumNodes)
    }
}

impl GraphEdgeEditing for SparseGraph {
    fn add_node(&mut self, u: &str) -> Result<()> {
        if self.ids.contains_key(u) {
            return Err(GraphError::DuplicateNode(u.to_owned()));
        }

        self.add_node_unchecked(u);
        Ok(())
    }

    fn try_add_directed_edge(&mut self, u: &str, v: &str) -> bool {
        let u = self.id_or_insert(u);
        let v = self.id_or_insert(v);

        let next = &mut self.nodes[u as usize].next;
        if next.contains(&v) {
            true
        } else {
            next.push(v);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_in_insertion_order() {
        let mut graph = SparseGraph::new();
        graph.add_directed_edge("a", "d");
        graph.add_directed_edge("a", "b");
        graph.add_directed_edge("a", "c");
        graph.add_directed_edge("a", "b");

        assert_eq!(graph.neighbors_of("a").collect::<Vec<_>>(), vec!["d", "b", "c"]);
        assert_eq!(graph.degree_of("a"), 3);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec!["a", "d", "b", "c"]);
        assert_eq!(graph.name(), None);
    }

    #[test]
    fn records_spill_beyond_inline_capacity() {
        let mut graph = SparseGraph::new();
        let targets = (0..3 * INLINE_NEIGHBORS).map(|i| i.to_string()).collect::<Vec<_>>();
        for v in &targets {
            graph.add_directed_edge("hub", v);
        }

        assert_eq!(graph.degree_of("hub") as usize, targets.len());
        assert!(graph.reaches_all_others("hub"));
        assert!(!graph.reaches_all_others("0"));
    }
}

test_graph_ops!(
    test_sparse_graph,
    SparseGraph,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);
