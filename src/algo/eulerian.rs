use std::fmt::Display;

use super::*;

/// Result of classifying a graph by the Eulerian walks it admits
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EulerianKind {
    /// Neither an Eulerian path nor an Eulerian circuit exists
    NoWalk,
    /// An Eulerian path between the two odd-degree vertices exists
    OpenPath,
    /// An Eulerian circuit exists
    ClosedCircuit,
}

impl EulerianKind {
    /// Returns *true* if the graph admits an Eulerian path or circuit
    pub fn has_walk(&self) -> bool {
        !matches!(self, EulerianKind::NoWalk)
    }
}

impl Display for EulerianKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let desc = match self {
            EulerianKind::NoWalk => "not eulerian",
            EulerianKind::OpenPath => "eulerian path (semi-eulerian)",
            EulerianKind::ClosedCircuit => "eulerian circuit (eulerian)",
        };
        write!(f, "{desc}")
    }
}

pub trait Eulerian: Connectivity + AdjacencyTest + GraphEdgeOrder {
    /// Returns an iterator over all nodes of odd degree in index order.
    ///
    /// A self-loop occupies a single matrix entry and thus adds only `1` to the cached degree,
    /// while a walk enters and leaves its node through it. Loops are therefore not counted here.
    fn odd_degree_vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices()
            .filter(|&u| (self.degree_of(u) - self.has_self_loop(u) as NumNodes) % 2 == 1)
    }

    /// Classifies the graph:
    /// - a graph without nodes has no walk,
    /// - a graph without edges has the trivial closed walk iff it consists of a single node,
    /// - a disconnected graph (ignoring isolated nodes) has no walk,
    /// - otherwise the number of odd-degree nodes decides: `0` gives a circuit, `2` gives a path
    ///   and everything else gives no walk.
    ///
    /// # Examples
    /// ```
    /// use fleury::{prelude::*, algo::*};
    ///
    /// let path = AdjMatrix::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    /// assert_eq!(path.classify(), EulerianKind::OpenPath);
    ///
    /// let triangle = AdjMatrix::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
    /// assert_eq!(triangle.classify(), EulerianKind::ClosedCircuit);
    /// ```
    fn classify(&self) -> EulerianKind {
        if self.is_empty() {
            return EulerianKind::NoWalk;
        }

        if self.is_singleton_graph() {
            return if self.number_of_nodes() == 1 {
                EulerianKind::ClosedCircuit
            } else {
                EulerianKind::NoWalk
            };
        }

        if !self.is_connected() {
            return EulerianKind::NoWalk;
        }

        match self.odd_degree_vertices().count() {
            0 => EulerianKind::ClosedCircuit,
            2 => EulerianKind::OpenPath,
            _ => EulerianKind::NoWalk,
        }
    }

    /// Returns the node an Eulerian walk of the given kind starts at:
    /// the lowest-index odd node for a path and the lowest-index non-isolated node (`0` if there
    /// is none) for a circuit.
    fn walk_start(&self, kind: EulerianKind) -> Option<Node> {
        match kind {
            EulerianKind::NoWalk => None,
            EulerianKind::OpenPath => self.odd_degree_vertices().next(),
            EulerianKind::ClosedCircuit => {
                (!self.is_empty()).then(|| self.first_non_isolated().unwrap_or(0))
            }
        }
    }
}

impl<G> Eulerian for G where G: AdjacencyList + AdjacencyTest + GraphEdgeOrder {}
