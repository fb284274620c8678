use std::fmt::Display;

use itertools::Itertools;
use tracing::{debug, trace};

use super::*;

/// An Eulerian walk together with the classification of the graph it was built for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EulerianWalk {
    kind: EulerianKind,
    trail: Vec<Node>,
}

impl EulerianWalk {
    /// Whether the walk is an open path or a closed circuit
    pub fn kind(&self) -> EulerianKind {
        self.kind
    }

    /// The visited nodes in order; one more than the number of edges
    pub fn trail(&self) -> &[Node] {
        &self.trail
    }

    /// Consumes the walk and returns its trail
    pub fn into_trail(self) -> Vec<Node> {
        self.trail
    }

    /// Number of edges traversed by the walk
    pub fn number_of_edges(&self) -> NumEdges {
        (self.trail.len() - 1) as NumEdges
    }

    /// Returns the edges in the order they are traversed
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.trail.iter().tuple_windows().map(|(&u, &v)| Edge(u, v))
    }

    /// Formats the walk with the labels of `graph` as `A -> B -> C`
    pub fn display<'a>(&'a self, graph: &'a AdjMatrix) -> TrailDisplay<'a> {
        TrailDisplay { walk: self, graph }
    }
}

/// Helper returned by [`EulerianWalk::display`]
pub struct TrailDisplay<'a> {
    walk: &'a EulerianWalk,
    graph: &'a AdjMatrix,
}

impl Display for TrailDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.walk
                .trail
                .iter()
                .map(|&u| self.graph.label_of(u))
                .format(" -> ")
        )
    }
}

/// Fleury's algorithm for constructing Eulerian walks
pub trait FleuryWalk {
    /// Constructs an Eulerian walk with Fleury's algorithm.
    ///
    /// The walk starts at the lowest-index odd node of an Eulerian path or at node `0` (more
    /// precisely, the lowest-index non-isolated node) of an Eulerian circuit. From the current node
    /// it always takes the first edge in index order that passes [`SafeEdge::is_safe_edge`] and
    /// deletes it, until the current node has no edges left.
    ///
    /// All deletions happen on a private copy; `self` is never modified.
    ///
    /// # Errors
    /// Returns [`GraphError::NotEulerian`] if the graph is classified as
    /// [`EulerianKind::NoWalk`].
    ///
    /// # Examples
    /// ```
    /// use fleury::{prelude::*, algo::*};
    ///
    /// let g = AdjMatrix::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    /// let walk = g.find_eulerian_walk().unwrap();
    ///
    /// assert_eq!(walk.kind(), EulerianKind::ClosedCircuit);
    /// assert_eq!(walk.trail(), &[0, 1, 2, 3, 0]);
    /// ```
    fn find_eulerian_walk(&self) -> Result<EulerianWalk>;
}

impl<G> FleuryWalk for G
where
    G: AdjacencyList + AdjacencyTest + GraphEdgeEditing + GraphEdgeOrder + Clone,
{
    fn find_eulerian_walk(&self) -> Result<EulerianWalk> {
        let mut work = self.clone();

        let kind = work.classify();
        let Some(start) = work.walk_start(kind) else {
            debug!(n = work.number_of_nodes(), "graph has no eulerian walk");
            return Err(GraphError::NotEulerian);
        };

        let expected_len = work.number_of_edges() as usize + 1;
        let mut trail = Vec::with_capacity(expected_len);
        trail.push(start);

        let mut current = start;
        while let Some(next) = next_safe_neighbor(&mut work, current)? {
            work.remove_edge(current, next)?;
            trace!(from = current, to = next, "take edge");

            trail.push(next);
            current = next;
        }

        debug_assert_eq!(trail.len(), expected_len);
        debug_assert!(work.is_singleton_graph());
        debug!(%kind, start, len = trail.len(), "constructed eulerian walk");

        Ok(EulerianWalk { kind, trail })
    }
}

/// Returns the first neighbor `v` of `u` in index order such that `{u, v}` is safe to take
fn next_safe_neighbor<G>(graph: &mut G, u: Node) -> Result<Option<Node>>
where
    G: AdjacencyList + SafeEdge,
{
    let candidates = graph.neighbors_of(u).collect_vec();
    for v in candidates {
        if graph.is_safe_edge(u, v)? {
            return Ok(Some(v));
        }
    }
    Ok(None)
}
