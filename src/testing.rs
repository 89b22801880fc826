/// Every representation should pass the same contract tests.
/// Expected behavior is derived from a plain `BTreeMap<String, BTreeSet<String>>` reference.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{edge::LabelledEdge, error::*, ops::*, repr::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;
            use std::collections::{BTreeMap, BTreeSet};

            /// Creates a list of at most `m_ub` random edges between the labels `"0".."n-1"`
            fn random_edges<R: Rng>(rng: &mut R, n: u32, m_ub: u32) -> Vec<LabelledEdge> {
                (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    LabelledEdge::new(u.to_string(), v.to_string())
                }).collect_vec()
            }

            /// Reference adjacency of the given edges
            fn reference(edges: &[LabelledEdge]) -> BTreeMap<String, BTreeSet<String>> {
                let mut adj: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
                for LabelledEdge(u, v) in edges {
                    adj.entry(v.clone()).or_default();
                    adj.entry(u.clone()).or_default().insert(v.clone());
                }
                adj
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            let graph = <$graph>::new();

            assert_eq!(graph.number_of_nodes(), 0);
            assert_eq!(graph.number_of_edges(), 0);
            assert!(graph.is_empty());
            assert_eq!(graph.vertices().count(), 0);
            assert_eq!(graph.count_self_edges(), 0);
            assert_eq!(graph.name(), None);

            let graph = <$graph>::with_name("conflicts");
            assert_eq!(graph.name(), Some("conflicts"));
            assert!(graph.is_empty());
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [5u32, 10, 20] {
                for m_ub in [n, n * 3, n * 8] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub);
                        let adj = reference(&edges);
                        let graph = <$graph>::from_edges(edges.iter());

                        assert_eq!(graph.number_of_nodes() as usize, adj.len());
                        assert_eq!(
                            graph.number_of_edges(),
                            adj.values().map(BTreeSet::len).sum::<usize>()
                        );
                        assert_eq!(
                            graph.all_nodes().into_iter().collect::<BTreeSet<_>>(),
                            adj.keys().cloned().collect::<BTreeSet<_>>()
                        );

                        let self_edges = adj.iter().filter(|(u, nbs)| nbs.contains(*u)).count();
                        assert_eq!(graph.count_self_edges() as usize, self_edges);

                        for (u, nbs) in &adj {
                            assert_eq!(graph.find_label(u), Some(u.as_str()));

                            let neighbors = graph.neighbors_of(u).map(str::to_owned).collect::<BTreeSet<_>>();
                            assert_eq!(&neighbors, nbs);
                            assert_eq!(graph.degree_of(u) as usize, nbs.len());

                            let reaches_all = adj.keys().all(|v| v == u || nbs.contains(v));
                            assert_eq!(graph.reaches_all_others(u), reaches_all);

                            for v in adj.keys() {
                                assert_eq!(graph.has_edge(u, v), nbs.contains(v));
                            }
                        }

                        let mut expected = edges.clone();
                        expected.sort_unstable();
                        expected.dedup();
                        assert_eq!(graph.ordered_edges(), expected);
                    }
                }
            }
        }

        #[test]
        fn test_unknown_labels() {
            let mut graph = <$graph>::new();
            graph.add_directed_edge("a", "b");

            assert_eq!(graph.neighbors_of("z").count(), 0);
            assert_eq!(graph.degree_of("z"), 0);
            assert!(!graph.has_edge("z", "a"));
            assert!(!graph.has_edge("a", "z"));
            assert!(!graph.reaches_all_others("z"));
            assert!(!graph.contains_node("z"));
            assert_eq!(graph.find_label("z"), None);
            assert_eq!(graph.find_label("b"), Some("b"));
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [5u32, 10, 20] {
                for m_ub in [n, n * 3, n * 8] {
                    let edges = random_edges(rng, n, m_ub);
                    let mut graph = <$graph>::new();
                    let mut seen = BTreeSet::new();

                    for LabelledEdge(u, v) in &edges {
                        let existed = !seen.insert((u.clone(), v.clone()));
                        assert_eq!(graph.try_add_directed_edge(u, v), existed);
                        assert!(graph.has_edge(u, v));
                        assert!(graph.contains_node(u));
                        assert!(graph.contains_node(v));
                    }

                    assert_eq!(graph.number_of_edges(), seen.len());
                }
            }
        }

        #[test]
        fn test_add_node() {
            let mut graph = <$graph>::new();
            graph.add_node("1").unwrap();
            graph.add_node("2").unwrap();

            assert_eq!(graph.add_node("1"), Err(GraphError::DuplicateNode("1".into())));
            assert_eq!(graph.number_of_nodes(), 2);
            assert_eq!(graph.degree_of("1"), 0);

            // edges register their endpoints silently, explicit registration afterwards fails
            graph.add_directed_edge("2", "3");
            assert_eq!(graph.number_of_nodes(), 3);
            assert!(graph.add_node("3").is_err());
            assert_eq!(graph.vertices().collect_vec(), vec!["1", "2", "3"]);
        }

        #[test]
        fn test_idempotent_edges() {
            let mut graph = <$graph>::new();
            graph.add_directed_edge("1", "2");
            graph.add_directed_edge("1", "2");
            assert_eq!(graph.neighbors_of("1").count(), 1);

            graph.add_undirected_edge("1", "2");
            assert_eq!(graph.neighbors_of("1").count(), 1);
            assert_eq!(graph.neighbors_of("2").collect_vec(), vec!["1"]);
            assert_eq!(graph.number_of_edges(), 2);
        }

        #[test]
        fn test_self_edges() {
            let mut graph = <$graph>::new();
            graph.add_node("1").unwrap();
            graph.add_node("2").unwrap();
            assert_eq!(graph.count_self_edges(), 0);

            graph.add_directed_edge("1", "1");
            assert_eq!(graph.count_self_edges(), 1);

            graph.add_directed_edge("2", "2");
            assert_eq!(graph.count_self_edges(), 2);

            graph.add_undirected_edge("1", "1");
            assert_eq!(graph.count_self_edges(), 2);
            assert_eq!(graph.neighbors_of("1").collect_vec(), vec!["1"]);
        }

        #[test]
        fn test_reaches_all_others() {
            let mut graph = <$graph>::new();
            graph.add_undirected_edge("1", "2");
            assert!(graph.reaches_all_others("1"));
            assert!(graph.reaches_all_others("2"));

            graph.add_node("3").unwrap();
            assert!(!graph.reaches_all_others("1"));
            assert!(!graph.reaches_all_others("2"));
            assert!(!graph.reaches_all_others("3"));

            // self-edges are irrelevant
            graph.add_directed_edge("3", "3");
            graph.add_directed_edge("3", "1");
            assert!(!graph.reaches_all_others("3"));
            graph.add_directed_edge("3", "2");
            assert!(graph.reaches_all_others("3"));

            let mut single = <$graph>::new();
            single.add_node("only").unwrap();
            assert!(single.reaches_all_others("only"));
        }
    };
}

pub(crate) use test_graph_ops;
