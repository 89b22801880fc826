/*!
# Graph Generators

This module provides helpers to populate labelled graphs, either with deterministic
substructures (paths, cycles, cliques, complete bipartite graphs) or at random.

Random generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using the builder methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

Nodes of generated graphs are labelled `"0"` to `"n - 1"`.
The [`RandomGraph`] trait wraps these generators into constructors for whole graphs.
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Returns the label used by generators for the `i`-th node
pub fn label_of(i: NumNodes) -> Label {
    i.to_string()
}

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<LabelledEdge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = LabelledEdge>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
/// All nodes `"0"..="n - 1"` are registered, even if they end up isolated.
pub trait RandomGraph: Sized {
    /// Creates a random directed `G(n,p)` graph using edge probability `p`.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;

    /// Creates a random `G(n,p)` graph where every sampled edge is added in both directions.
    /// Self-loops are never sampled.
    fn gnp_undirected<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;

    /// Creates a random bipartite graph with sides `"0".."left - 1"` and `"left".."left + right - 1"`.
    /// Every edge between the two sides is added (in both directions) with probability `p`.
    fn random_bipartite<R>(rng: &mut R, left: NumNodes, right: NumNodes, p: f64) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        let mut graph = with_nodes::<G>(n);
        graph.add_directed_edges(Gnp::new().nodes(n).prob(p).stream(rng));
        graph
    }

    fn gnp_undirected<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        let mut graph = with_nodes::<G>(n);
        graph.add_undirected_edges(
            Gnp::new()
                .nodes(n)
                .prob(p)
                .undirected(true)
                .stream(rng),
        );
        graph
    }

    fn random_bipartite<R>(rng: &mut R, left: NumNodes, right: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        assert!(p.is_valid_probability());

        let mut graph = with_nodes::<G>(left + right);
        for u in 0..left {
            for v in left..(left + right) {
                if rng.random_bool(p) {
                    graph.add_undirected_edge(&label_of(u), &label_of(v));
                }
            }
        }
        graph
    }
}

/// Creates a graph with the nodes `"0"..="n - 1"` registered in order
fn with_nodes<G>(n: NumNodes) -> G
where
    G: GraphNew + GraphEdgeEditing,
{
    let mut graph = G::new();
    for u in 0..n {
        graph
            .add_node(&label_of(u))
            .expect("generated labels are unique and the graph starts empty");
    }
    graph
}

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl Probability for f64 {
    fn is_valid_probability(&self) -> bool {
        (0.0..=1.0).contains(self)
    }
}
