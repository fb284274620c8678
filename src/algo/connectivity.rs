use super::*;

pub trait Connectivity: Traversal {
    /// Returns *true* if all nodes with at least one neighbor lie in the same connected component.
    ///
    /// Isolated nodes are ignored, as they do not affect whether every edge can be reached.
    /// A graph without any edge is therefore vacuously connected.
    ///
    /// The search starts at the lowest-index node with positive degree.
    fn is_connected(&self) -> bool;

    /// Returns the lowest-index node with positive degree, if any
    fn first_non_isolated(&self) -> Option<Node> {
        self.vertices_with_neighbors().next()
    }
}

impl<G> Connectivity for G
where
    G: AdjacencyList,
{
    fn is_connected(&self) -> bool {
        let Some(root) = self.first_non_isolated() else {
            return true;
        };

        let reached = self.dfs(root).into_visited();
        self.vertices_with_neighbors().all(|u| reached.get_bit(u))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;

    #[test]
    fn edgeless_graphs_are_vacuously_connected() {
        for n in [0, 1, 2, 10] {
            let graph = AdjMatrix::new(n);
            assert!(graph.is_connected());
            assert_eq!(graph.first_non_isolated(), None);
        }
    }

    #[test]
    fn isolated_nodes_are_ignored() {
        let mut graph = AdjMatrix::new(6);
        graph.connect_cycle([1, 3, 4]).unwrap();

        assert!(graph.is_connected());
        assert_eq!(graph.first_non_isolated(), Some(1));
    }

    #[test]
    fn two_components() {
        let mut graph = AdjMatrix::new(4);
        graph.add_edges([(0, 1), (2, 3)]).unwrap();
        assert!(!graph.is_connected());

        graph.add_edge(1, 2).unwrap();
        assert!(graph.is_connected());

        graph.remove_edge(1, 2).unwrap();
        assert!(!graph.is_connected());
    }

    #[test]
    fn self_loop_on_its_own_is_a_component() {
        let mut graph = AdjMatrix::new(3);
        graph.add_edges([(0, 1), (2, 2)]).unwrap();
        assert!(!graph.is_connected());
    }
}
