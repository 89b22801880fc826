/*!
# Graph Representations

Both representations implement the full graph contract of [`crate::ops`] and are
interchangeable: given identical sequences of calls, they report the same nodes,
the same neighborhoods (as sets), the same self-edge counts and the same
`reaches_all_others` answers.

- [`AdjMatrixGraph`]: dense boolean adjacency matrix over a stable `label <-> id` index.
- [`SparseGraph`]: arena of node records, each holding an ordered list of its out-neighbors.

The only observable difference is the order in which neighbors are reported.
*/

use crate::{error::*, label::*, ops::*};

mod matrix;
mod sparse;

pub use matrix::*;
pub use sparse::*;

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn assert_same_observations(dense: &AdjMatrixGraph, sparse: &SparseGraph) {
        assert_eq!(dense.number_of_nodes(), sparse.number_of_nodes());
        assert!(dense.vertices().eq(sparse.vertices()));
        assert_eq!(dense.all_nodes(), sparse.all_nodes());
        assert_eq!(dense.count_self_edges(), sparse.count_self_edges());
        assert_eq!(dense.number_of_edges(), sparse.number_of_edges());

        for u in dense.vertices() {
            assert_eq!(
                dense.neighbors_of(u).collect::<BTreeSet<_>>(),
                sparse.neighbors_of(u).collect::<BTreeSet<_>>()
            );
            assert_eq!(dense.degree_of(u), sparse.degree_of(u));
            assert_eq!(dense.reaches_all_others(u), sparse.reaches_all_others(u));
        }
    }

    /// Both stores report the same graph for any interleaving of node and edge insertions
    #[test]
    fn stores_agree_on_mixed_operations() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);

        for n in [3u32, 6, 12, 25] {
            for _ in 0..10 {
                let mut dense = AdjMatrixGraph::new();
                let mut sparse = SparseGraph::new();

                for step in 0..(4 * n) {
                    let u = rng.random_range(0..n).to_string();
                    let v = rng.random_range(0..n).to_string();

                    match rng.random_range(0..3) {
                        0 => assert_eq!(dense.add_node(&u), sparse.add_node(&u)),
                        1 => assert_eq!(
                            dense.try_add_directed_edge(&u, &v),
                            sparse.try_add_directed_edge(&u, &v)
                        ),
                        _ => {
                            dense.add_undirected_edge(&u, &v);
                            sparse.add_undirected_edge(&u, &v);
                        }
                    }

                    if step % n == 0 {
                        assert_same_observations(&dense, &sparse);
                    }
                }

                assert_same_observations(&dense, &sparse);
            }
        }
    }

    #[test]
    fn stores_agree_on_small_cases() {
        let mut dense = AdjMatrixGraph::new();
        let mut sparse = SparseGraph::new();

        for u in ["1", "2"] {
            dense.add_node(u).unwrap();
            sparse.add_node(u).unwrap();
        }
        dense.add_directed_edge("1", "1");
        sparse.add_directed_edge("1", "1");
        assert_eq!(dense.count_self_edges(), 1);
        assert_same_observations(&dense, &sparse);

        dense.add_undirected_edge("1", "2");
        sparse.add_undirected_edge("1", "2");
        assert!(dense.reaches_all_others("1") && dense.reaches_all_others("2"));
        assert_same_observations(&dense, &sparse);

        dense.add_node("3").unwrap();
        sparse.add_node("3").unwrap();
        assert!(!sparse.reaches_all_others("1") && !sparse.reaches_all_others("2"));
        assert_same_observations(&dense, &sparse);
    }
}
