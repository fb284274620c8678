/*!
`fleury` decides whether an undirected graph admits an Eulerian walk and constructs one if it does.

# Representation

Graphs are stored as a dense adjacency matrix ([`AdjMatrix`](crate::repr::AdjMatrix)) over vertices
numbered `0` to `n - 1`. Every vertex carries a display label (`A, B, C, …` by creation order),
a cached degree and an optional position used for drawing. Edges are undirected, unweighted and
unique: `Edge(u, v)` and `Edge(v, u)` denote the same edge.

The matrix is the single source of truth for edge existence. Degrees are cached per vertex and
every edge mutation updates matrix and degrees in the same call.

# Eulerian walks

An Eulerian walk uses every edge exactly once. [`Eulerian::classify`](crate::algo::Eulerian::classify)
reports whether a graph has
- no such walk ([`EulerianKind::NoWalk`](crate::algo::EulerianKind::NoWalk)),
- an open walk between its two odd-degree vertices ([`EulerianKind::OpenPath`](crate::algo::EulerianKind::OpenPath)), or
- a closed walk ([`EulerianKind::ClosedCircuit`](crate::algo::EulerianKind::ClosedCircuit)).

[`FleuryWalk::find_eulerian_walk`](crate::algo::FleuryWalk::find_eulerian_walk) builds the walk with
Fleury's algorithm: starting from an odd vertex (or vertex `0`), it repeatedly takes the first edge
in index order that is not a bridge of the remaining graph, removing edges from a private working
copy so that the caller's graph is left untouched.

# Usage

```rust
use fleury::{prelude::*, algo::*};

let graph = AdjMatrix::from_edges(3, [(0, 1), (1, 2)]).unwrap();
assert_eq!(graph.classify(), EulerianKind::OpenPath);

let walk = graph.find_eulerian_walk().unwrap();
assert_eq!(walk.display(&graph).to_string(), "A -> B -> C");
```

Besides [`prelude`] and [`algo`], the crate contains
- [`gens`]: random `G(n,p)` graphs, random layouts and common substructures (paths, cycles, stars),
- [`io`]: a writer for the DOT language of GraphViz to visualize graphs and walks.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod vertex;

pub use edge::*;
pub use error::*;
pub use node::*;
pub use vertex::*;

/// `fleury::prelude` includes definitions for nodes, edges, vertices and errors, all basic graph
/// operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*, vertex::*};
}
