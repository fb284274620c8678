use std::ops::Deref;

use tracing::trace;

use super::*;

/// Bridge test used by Fleury's algorithm to decide whether an edge may be taken now
pub trait SafeEdge {
    /// Returns *true* if the edge `{u, v}` can be taken from `u` without cutting `u` off from
    /// any node it currently reaches. This is the case if
    /// - `u` has degree `1` (the move is forced, so there is nothing to avoid), or
    /// - removing `{u, v}` does not shrink the set of nodes reachable from `u`.
    ///
    /// A missing edge is never safe. The graph is temporarily modified during the test but
    /// identical to its previous state once this method returns.
    ///
    /// # Examples
    /// ```
    /// use fleury::{prelude::*, algo::*};
    ///
    /// // 1 - 0 - 2 - 3 - 1 plus the pendant edge 0 - 4
    /// let mut g = AdjMatrix::from_edges(5, [(0, 1), (0, 2), (2, 3), (3, 1), (0, 4)]).unwrap();
    ///
    /// assert!(g.is_safe_edge(0, 1).unwrap());
    /// assert!(!g.is_safe_edge(0, 4).unwrap());
    /// assert!(g.is_safe_edge(4, 0).unwrap());
    /// ```
    fn is_safe_edge(&mut self, u: Node, v: Node) -> Result<bool>;
}

impl<G> SafeEdge for G
where
    G: AdjacencyList + AdjacencyTest + GraphEdgeEditing,
{
    fn is_safe_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        if !self.has_edge(u, v) {
            return Ok(false);
        }

        if self.degree_of(u) == 1 {
            return Ok(true);
        }

        let before = self.reachable_count(u);
        let after = TentativeRemoval::new(self, u, v)?.reachable_count(u);

        trace!(u, v, before, after, "bridge test");
        Ok(after >= before)
    }
}

/// Removes an edge from a graph for as long as the guard lives.
///
/// The edge is added back when the guard is dropped, including during unwinding, so both matrix
/// entries and both cached degrees are restored. The guard holds the only (mutable) borrow of the
/// graph, hence nobody can observe the graph without the edge except through the guard.
pub struct TentativeRemoval<'a, G>
where
    G: GraphEdgeEditing,
{
    graph: &'a mut G,
    edge: Edge,
    removed: bool,
}

impl<'a, G> TentativeRemoval<'a, G>
where
    G: GraphEdgeEditing,
{
    /// Removes `{u, v}` from `graph`. If the edge does not exist, the guard is a no-op.
    pub fn new(graph: &'a mut G, u: Node, v: Node) -> Result<Self> {
        let removed = graph.remove_edge(u, v)?;
        Ok(Self {
            graph,
            edge: Edge(u, v),
            removed,
        })
    }

    /// The edge hidden by this guard
    pub fn edge(&self) -> Edge {
        self.edge
    }
}

impl<G> Deref for TentativeRemoval<'_, G>
where
    G: GraphEdgeEditing,
{
    type Target = G;

    fn deref(&self) -> &Self::Target {
        self.graph
    }
}

impl<G> Drop for TentativeRemoval<'_, G>
where
    G: GraphEdgeEditing,
{
    fn drop(&mut self) {
        if self.removed {
            let Edge(u, v) = self.edge;
            let restored = self.graph.add_edge(u, v);
            debug_assert_eq!(restored, Ok(true));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn leaves_of_star_are_forced() {
        let mut graph = AdjMatrix::new(8);
        graph.connect_star(0, 1..8).unwrap();
        let before = graph.clone();

        for leaf in 1..8 {
            assert!(graph.is_safe_edge(leaf, 0).unwrap());
            // from the center, every edge is a bridge
            assert!(!graph.is_safe_edge(0, leaf).unwrap());
        }

        assert_eq!(graph, before);
    }

    #[test]
    fn path_edges_are_bridges() {
        let mut graph = AdjMatrix::new(3);
        graph.connect_path(0..3).unwrap();

        assert!(!graph.is_safe_edge(1, 0).unwrap());
        assert!(!graph.is_safe_edge(1, 2).unwrap());
        assert!(graph.is_safe_edge(0, 1).unwrap());
        assert!(graph.is_safe_edge(2, 1).unwrap());
    }

    #[test]
    fn cycle_edges_are_safe() {
        let mut graph = AdjMatrix::new(5);
        graph.connect_cycle(0..5).unwrap();
        let before = graph.clone();

        for u in 0..5 {
            for v in graph.adjacent(u).unwrap() {
                assert!(graph.is_safe_edge(u, v).unwrap());
            }
        }

        assert_eq!(graph, before);
        assert_degree_invariant(&graph);
    }

    #[test]
    fn missing_edge_is_not_safe() {
        let mut graph = AdjMatrix::from_edges(3, [(0, 1)]).unwrap();
        assert!(!graph.is_safe_edge(0, 2).unwrap());
        assert!(!graph.is_safe_edge(2, 0).unwrap());
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn invalid_vertex() {
        let mut graph = AdjMatrix::from_edges(3, [(0, 1)]).unwrap();
        assert_eq!(
            graph.is_safe_edge(0, 3),
            Err(GraphError::InvalidVertexReference { vertex: 3, n: 3 })
        );
    }

    #[test]
    fn removal_is_undone_on_drop() {
        let mut graph = AdjMatrix::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        let before = graph.clone();

        {
            let removal = TentativeRemoval::new(&mut graph, 1, 2).unwrap();
            assert_eq!(removal.edge(), Edge(1, 2));
            assert!(!removal.has_edge(1, 2));
            assert_eq!(removal.degree_of(1), 1);
            assert_eq!(removal.number_of_edges(), 1);
        }

        assert_eq!(graph, before);
    }

    #[test]
    fn removal_of_missing_edge_is_noop() {
        let mut graph = AdjMatrix::from_edges(3, [(0, 1)]).unwrap();
        {
            let removal = TentativeRemoval::new(&mut graph, 0, 2).unwrap();
            assert!(!removal.has_edge(0, 2));
        }
        assert!(!graph.has_edge(0, 2));
        assert_degree_invariant(&graph);
    }

    #[test]
    fn removal_is_undone_on_panic() {
        let mut graph = AdjMatrix::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        let before = graph.clone();

        let result = catch_unwind(AssertUnwindSafe(|| {
            let removal = TentativeRemoval::new(&mut graph, 0, 1).unwrap();
            assert!(removal.has_edge(0, 1), "edge is hidden");
        }));

        assert!(result.is_err());
        assert_eq!(graph, before);
    }
}
