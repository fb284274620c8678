use itertools::Itertools;
use rand_distr::{Bernoulli, Distribution};

use super::*;

/// `G(n,p)` generator over **ordered** pairs of distinct nodes.
///
/// For every `(u, v)` with `u != v` (in row-major order) a Bernoulli trial with success
/// probability `p` decides whether `Edge(u, v)` is emitted. Since graphs are undirected, both
/// `(u, v)` and `(v, u)` get a chance to insert `{u, v}`; a failed trial never removes an edge.
/// An unordered pair is thus connected with probability `1 - (1 - p)^2`.
#[derive(Debug, Copy, Clone)]
pub struct Gnp {
    n: NumNodes,
    p: f64,
}

impl Default for Gnp {
    /// `G(n, 1/2)` with `n = 0`
    fn default() -> Self {
        Self { n: 0, p: 0.5 }
    }
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p`. The value is validated when the edges are generated.
    pub fn prob(mut self, prob: f64) -> Self {
        self.p = prob;
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
    fn stream<R: Rng>(&self, rng: &mut R) -> Result<impl Iterator<Item = Edge>> {
        let trial = Bernoulli::new(self.p).map_err(|_| GraphError::InvalidProbability(self.p))?;
        let n = self.n;

        Ok((0..n)
            .cartesian_product(0..n)
            .filter(|(u, v)| u != v)
            .filter_map(move |(u, v)| trial.sample(rng).then_some(Edge(u, v))))
    }
}
