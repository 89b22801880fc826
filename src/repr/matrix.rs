/*!
# Dense Graph Representation

[`AdjMatrixGraph`] stores adjacency as a growable square matrix of booleans.
Row and column `i` belong to the node with id `i` as assigned by a [`LabelIndex`].

Registering a node grows every existing row by one cell and appends a new row,
keeping the matrix square. This is linear in the current number of nodes.
In turn, edge lookups, [`AdjacencyList::count_self_edges`] and
[`AdjacencyList::reaches_all_others`] only perform direct index lookups.
*/

use tracing::trace;

use crate::{testing::test_graph_ops, utils::LabelIndex};

use super::*;

/// A directed graph backed by a dense adjacency matrix.
///
/// Neighbors are reported in registration order of the neighbor.
#[derive(Debug, Clone, Default)]
pub struct AdjMatrixGraph {
    name: Option<String>,
    index: LabelIndex,
    matrix: Vec<Vec<bool>>,
}

impl AdjMatrixGraph {
    /// Registers `label` without checking for duplicates and returns its id
    fn add_node_unchecked(&mut self, label: &str) -> NodeId {
        for row in &mut self.matrix {
            row.push(false);
        }
        self.matrix.push(vec![false; self.matrix.len() + 1]);

        self.index.insert(label)
    }

    /// Returns the id of `label`, registering the node first if necessary
    fn id_or_insert(&mut self, label: &str) -> NodeId {
        match self.index.id_of(label) {
            Some(id) => id,
            None => {
                trace!(label, "registering endpoint of new edge");
                self.add_node_unchecked(label)
            }
        }
    }

    /// Returns the matrix row of `label`, if registered
    fn row_of(&self, label: &str) -> Option<&[bool]> {
        self.index
            .id_of(label)
            .map(|u| self.matrix[u as usize].as_slice())
    }
}

impl GraphNew for AdjMatrixGraph {
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

impl GraphNodeOrder for AdjMatrixGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.index.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.index.labels()
    }

    fn contains_node(&self, u: &str) -> bool {
        self.index.contains(u)
    }

    fn find_label(&self, u: &str) -> Option<&str> {
        self.index.id_of(u).map(|id| self.index.label_of(id))
    }
}

impl AdjacencyList for AdjMatrixGraph {
    fn neighbors_of(&self, u: &str) -> impl Iterator<Item = &str> + '_ {
        self.row_of(u).into_iter().flat_map(move |row| {
            row.iter()
                .enumerate()
                .filter_map(move |(v, &edge)| edge.then(|| self.index.label_of(v as NodeId)))
        })
    }

    fn degree_of(&self, u: &str) -> NumNodes {
        self.row_of(u)
            .map_or(0, |row| row.iter().filter(|&&edge| edge).count() as NumNodes)
    }

    fn has_edge(&self, u: &str, v: &str) -> bool {
        match (self.index.id_of(u), self.index.id_of(v)) {
            (Some(u), Some(v)) => self.matrix[u as usize][v as usize],
            _ => false,
        }
    }

    fn count_self_edges(&self) -> NumNodes {
        (0..self.matrix.len())
            .filter(|&u| self.matrix[u][u])
            .count() as NumNodes
    }

    fn reaches_all_others(&self, u: &str) -> bool {
        let Some(u) = self.index.id_of(u) else {
            return false;
        };

        self.matrix[u as usize]
            .iter()
            .enumerate()
            .all(|(v, &edge)| edge || v == u as usize)
    }
}

impl GraphEdgeEditing for AdjMatrixGraph {
    fn add_node(&mut self, u: &str) -> Result<()> {
        if self.index.contains(u) {
            return Err(GraphError::DuplicateNode(u.to_owned()));
        }

        self.add_node_unchecked(u);
        Ok(())
    }

    fn try_add_directed_edge(&mut self, u: &str, v: &str) -> bool {
        let u = self.id_or_insert(u) as usize;
        let v = self.id_or_insert(v) as usize;

        std::mem::replace(&mut self.matrix[u][v], true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_stays_square() {
        let mut graph = AdjMatrixGraph::new();
        assert_eq!(graph.count_self_edges(), 0);

        for (i, label) in ["a", "b", "c", "d"].into_iter().enumerate() {
            graph.add_node(label).unwrap();
            assert_eq!(graph.matrix.len(), i + 1);
            assert!(graph.matrix.iter().all(|row| row.len() == i + 1));
        }

        graph.add_directed_edge("d", "e");
        assert_eq!(graph.matrix.len(), 5);
        assert!(graph.matrix.iter().all(|row| row.len() == 5));
        assert!(graph.matrix[3][4]);
    }

    #[test]
    fn neighbors_in_registration_order() {
        let mut graph = AdjMatrixGraph::with_name("order");
        for label in ["a", "b", "c", "d"] {
            graph.add_node(label).unwrap();
        }

        graph.add_directed_edge("a", "d");
        graph.add_directed_edge("a", "b");
        graph.add_directed_edge("a", "c");

        assert_eq!(graph.neighbors_of("a").collect::<Vec<_>>(), vec!["b", "c", "d"]);
        assert_eq!(graph.name(), Some("order"));
    }
}

test_graph_ops!(
    test_adj_matrix_graph,
    AdjMatrixGraph,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);
