/*!
# Graph Algorithms

This module provides the algorithms behind Eulerian walk construction. They are implemented as
traits on the graph itself, so that
```rust
use fleury::algo::*;
```
suffices to call `graph.classify()` or `graph.find_eulerian_walk()`.

- [`Traversal`]: explicit-stack depth-first reachability,
- [`Connectivity`]: connectivity among the non-isolated nodes,
- [`Eulerian`]: classification into no walk / open path / closed circuit,
- [`SafeEdge`]: the bridge test used to decide whether an edge may be taken now,
- [`FleuryWalk`]: Fleury's algorithm.
*/

mod bridges;
mod connectivity;
mod eulerian;
mod fleury;
mod traversal;

use crate::prelude::*;

pub use bridges::*;
pub use connectivity::*;
pub use eulerian::*;
pub use fleury::*;
pub use traversal::*;
