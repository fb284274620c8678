/*!
# Graph Generators

Random graphs, random layouts and deterministic substructures.

Generators follow a builder pattern for fluent configuration:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`, passing an explicit random number generator.

The [`RandomGraph`] trait wraps this into a single constructor on the graph type, e.g.
`AdjMatrix::gnp(rng, n, p)`. Seeding `rng` makes the result reproducible.
*/

use rand::Rng;
use tracing::debug;

use crate::prelude::*;

mod gnp;
mod layout;
mod substructures;

pub use gnp::*;
pub use layout::*;
pub use substructures::*;

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
    fn generate<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng,
    {
        Ok(self.stream(rng)?.collect())
    }

    /// Creates a lazy iterator (stream) over generated edges.
    ///
    /// # Errors
    /// Fails if the generator is configured with invalid parameters.
    fn stream<R>(&self, rng: &mut R) -> Result<impl Iterator<Item = Edge>>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph: every ordered pair `(u, v)` of distinct nodes is
    /// considered once and, with probability `p`, the undirected edge `{u, v}` is inserted.
    ///
    /// # Examples
    /// ```
    /// use fleury::{prelude::*, gens::*};
    /// use rand::SeedableRng;
    /// use rand_pcg::Pcg64Mcg;
    ///
    /// let rng = &mut Pcg64Mcg::seed_from_u64(42);
    /// let g = AdjMatrix::gnp(rng, 6, 1.0).unwrap();
    /// assert_eq!(g.number_of_edges(), 15);
    /// ```
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Result<Self>
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch + GraphEdgeOrder,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Result<Self>
    where
        R: Rng,
    {
        let graph = Self::from_edges(n, Gnp::new().nodes(n).prob(p).stream(rng)?)?;
        debug!(n, p, m = graph.number_of_edges(), "generated G(n,p) graph");
        Ok(graph)
    }
}
