use super::*;

/// `G(n,p)` graphs generate every possible edge between `n` nodes with probability `p`
/// independent from each other.
///
/// If `undirected` is set, only pairs `(u, v)` with `u < v` are sampled, so the caller can
/// add each sampled edge in both directions without creating self-loops.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: Option<f64>,
    undirected: bool,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p`
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.p = Some(prob);
        self
    }

    /// Restricts sampling to pairs `u < v`
    pub fn undirected(mut self, undirected: bool) -> Self {
        self.undirected = undirected;
        self
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = LabelledEdge>
    where
        R: Rng,
    {
        let p = self.p.expect("Probability of Gnp was not set!");
        let n = self.n;
        let undirected = self.undirected;

        (0..n)
            .flat_map(move |u| {
                let lb = if undirected { u + 1 } else { 0 };
                (lb..n).map(move |v| (u, v))
            })
            .filter(move |_| rng.random_bool(p))
            .map(|(u, v)| LabelledEdge(label_of(u), label_of(v)))
    }
}
