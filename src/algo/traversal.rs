/*!
Depth-first reachability.

The traversal keeps an explicit stack instead of recursing, so its depth is bounded by the
number of nodes and never by the call stack. Only the *set* of visited nodes is relevant to the
algorithms in this crate: connectivity checks compare it against all non-isolated nodes and the
bridge test compares its cardinality before and after removing an edge.
*/

use super::*;

/// Depth-first search iterator over all nodes reachable from a start node.
///
/// Every node is yielded exactly once; the start node comes first.
pub struct DFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<Node>,
}

impl<'a, G> DFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            stack: vec![start],
        }
    }

    /// Runs the traversal to completion and returns the set of all reachable nodes
    pub fn into_visited(mut self) -> NodeBitSet {
        while self.next().is_some() {}
        self.visited
    }
}

impl<G> Iterator for DFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.stack.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.stack.len(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.stack.len()),
        )
    }
}

/// Traversal algorithms exposed directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start` in depth-first order.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use fleury::{prelude::*, algo::*};
    ///
    /// let g = AdjMatrix::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns the set of nodes reachable from `start`, including `start` itself.
    ///
    /// # Examples
    /// ```
    /// use fleury::{prelude::*, algo::*};
    ///
    /// let g = AdjMatrix::from_edges(4, [(0, 1), (2, 3)]).unwrap();
    ///
    /// let reached = g.depth_first_reach(1).unwrap();
    /// assert!(reached.get_bit(0) && reached.get_bit(1));
    /// assert!(!reached.get_bit(2) && !reached.get_bit(3));
    /// ```
    fn depth_first_reach(&self, start: Node) -> Result<NodeBitSet> {
        self.check_vertex(start)?;
        Ok(self.dfs(start).into_visited())
    }

    /// Returns the number of nodes reachable from `start`, including `start` itself.
    /// ** Panics if `start >= n` **
    fn reachable_count(&self, start: Node) -> NumNodes {
        self.dfs(start).into_visited().cardinality()
    }
}

impl<G: AdjacencyList> Traversal for G {}
