/*!
`lgraphs` is a small graph data structure & algorithms library for graphs that are
- **l**abelled : Nodes are identified by externally supplied string labels
- unweighted : Edges are boolean facts, either present or absent
- directed : An undirected edge is simply the pair of both directed edges

# Representation

Nodes are identified by their [`Label`](crate::label::Label). Internally, every store assigns
a dense [`NodeId`](crate::label::NodeId) to each label at registration time. Ids are handed out
in increasing order and are never reused. They never leave a store: all public operations speak
in labels only.

### Available Representations

See the [`repr`] module for both storage backends:

- [`AdjMatrixGraph`](crate::repr::AdjMatrixGraph): a dense, growable square matrix of booleans
- [`SparseGraph`](crate::repr::SparseGraph): a sparse arena of node records holding neighbor lists

Both implement the same contract (see [`ops`]) and produce identical results for identical
sequences of calls. Algorithms never look past this contract.

# Design

Algorithms are provided as configurable structs (see [`Scheduler`](crate::algo::Scheduler))
that one can alter using the *Setter* pattern before running them on a graph.
The commonly used functionality is also implemented via traits on the graph itself, e.g.
`graph.find_route("a", "b")` or `graph.compute_schedule()`.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes labels, edges, errors, the graph contract and both representations,
- [`algo`] includes traversal, route finding and two-way scheduling,
- [`gens`] includes helpers to connect labels into paths, cycles and cliques as well as random graphs.

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices.

```
use lgraphs::{prelude::*, algo::*};

let mut g = SparseGraph::new();
g.add_directed_edge("1", "2");
g.add_directed_edge("2", "3");

assert_eq!(g.find_route("1", "3").unwrap(), vec!["1", "2", "3"]);
assert!(g.find_route("3", "1").is_err());
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod label;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

/// `lgraphs::prelude` includes labels, edges, errors, all graph contract traits as well as both representations.
pub mod prelude {
    pub use super::{edge::*, error::*, label::*, ops::*, repr::*};
}
