/*!
# Shortest Routes

Computes unweighted shortest paths following directed edges only.
An undirected edge can be used in both directions as it is stored as two directed edges.

Among several shortest routes, the one implied by the neighbor order of the underlying
store is returned. Different stores may thus return different (but equally short) routes.
*/

use std::collections::VecDeque;

use fxhash::{FxHashMap, FxHashSet};
use tracing::debug;

use super::*;

/// Computes a shortest route from `from` to `to` using breadth-first search.
///
/// The returned route starts with `from`, ends with `to` and contains `k + 1` labels
/// if `to` is `k` hops away. For `from == to`, the route is `[from]`.
///
/// # Errors
/// Returns [`GraphError::NoRoute`] if there is no directed path from `from` to `to`
/// (in particular if `from != to` and either node is not registered).
pub fn find_route<G>(graph: &G, from: &str, to: &str) -> Result<Vec<Label>>
where
    G: AdjacencyList,
{
    let mut visited: FxHashSet<&str> = FxHashSet::default();
    let mut predecessor: FxHashMap<&str, &str> = FxHashMap::default();
    let mut queue = VecDeque::from([from]);
    visited.insert(from);

    while let Some(u) = queue.pop_front() {
        if u == to {
            let route = reconstruct_route(&predecessor, to);
            debug!(from, to, hops = route.len() - 1, "found route");
            return Ok(route);
        }

        for v in graph.neighbors_of(u) {
            // marking at enqueue time keeps the first discovery as predecessor
            if visited.insert(v) {
                predecessor.insert(v, u);
                queue.push_back(v);
            }
        }
    }

    debug!(from, to, explored = visited.len(), "no route");
    Err(GraphError::NoRoute {
        from: from.to_owned(),
        to: to.to_owned(),
    })
}

/// Walks the predecessor chain back from `end` and returns it in forward order.
/// The start of the search is the only node on the chain without a predecessor.
fn reconstruct_route(predecessor: &FxHashMap<&str, &str>, end: &str) -> Vec<Label> {
    let mut route = vec![end.to_owned()];
    let mut current = end;
    while let Some(&prev) = predecessor.get(current) {
        route.push(prev.to_owned());
        current = prev;
    }

    route.reverse();
    route
}

/// Route queries available on every graph.
pub trait Routing: AdjacencyList {
    /// Computes a shortest directed route from `from` to `to`. See [`find_route`].
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjMatrixGraph::from_edges([("1", "2"), ("2", "3")]);
    ///
    /// assert_eq!(g.find_route("1", "3").unwrap(), vec!["1", "2", "3"]);
    /// assert_eq!(g.find_route("2", "2").unwrap(), vec!["2"]);
    /// assert!(matches!(g.find_route("1", "4"), Err(GraphError::NoRoute { .. })));
    /// ```
    fn find_route(&self, from: &str, to: &str) -> Result<Vec<Label>> {
        find_route(self, from, to)
    }

    /// Returns *true* iff [`Routing::find_route`] would succeed, without building the route.
    fn has_route(&self, from: &str, to: &str) -> bool {
        from == to || self.bfs(from).any(|item| item.node == to)
    }
}

impl<G> Routing for G where G: AdjacencyList {}
