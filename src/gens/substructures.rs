/*!
# Substructure Generators

Utility methods to add common motifs to an already existing graph:

- **Paths**
- **Cycles**
- **Stars**
- **Cliques**

These are the usual building blocks for graphs with a known Eulerian classification: cycles and
odd cliques only have even degrees, paths have exactly two odd endpoints and stars with more than
two leaves have too many odd nodes.

# Example

```rust
use fleury::{prelude::*, gens::*};

let mut g = AdjMatrix::new(6);
g.connect_path([0, 1, 2]).unwrap();
g.connect_cycle([2, 3, 4]).unwrap();
g.connect_star(5, [0, 4]).unwrap();

assert_eq!(
    g.edges(true).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(0, 5), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4), Edge(4, 5)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, stars, cliques)
/// inside an already existing graph.
///
/// Edges that already exist are left untouched.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// Each consecutive pair of nodes is connected by a single edge.
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**.
    ///
    /// - Consecutive nodes are connected by edges.
    /// - Additionally, the last node is connected back to the first.
    ///
    /// A single node is thus connected to itself by a self-loop.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>;

    /// Connects `center` to every node in `leaves`.
    fn connect_star<L>(&mut self, center: Node, leaves: L) -> Result<()>
    where
        L: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (complete subgraph) without self-loops.
    fn connect_clique<C>(&mut self, nodes: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur)?;
                prev = cur;
            }

            self.add_edge(prev, first)?;
        }
        Ok(())
    }

    fn connect_star<L>(&mut self, center: Node, leaves: L) -> Result<()>
    where
        L: IntoIterator<Item = Node>,
    {
        for leaf in leaves {
            self.add_edge(center, leaf)?;
        }
        Ok(())
    }

    fn connect_clique<C>(&mut self, nodes: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().unique().collect_vec();
        for (&u, &v) in nodes.iter().tuple_combinations() {
            self.add_edge(u, v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_path() {
        {
            let mut g = AdjMatrix::new(6);
            g.connect_path([]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjMatrix::new(6);
            g.connect_path([1]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjMatrix::new(6);
            g.connect_path([2, 1]).unwrap();
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(2, 1));
        }

        {
            let mut g = AdjMatrix::new(6);
            g.connect_path([0, 3, 1, 4]).unwrap();
            assert_eq!(
                g.edges(true).collect_vec(),
                vec![Edge(0, 3), Edge(1, 3), Edge(1, 4)]
            );
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = AdjMatrix::new(6);
            g.connect_cycle([]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjMatrix::new(6);
            g.connect_cycle([1]).unwrap();
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(1, 1));
        }

        {
            let mut g = AdjMatrix::new(6);
            g.connect_cycle([0, 3, 1, 4]).unwrap();
            assert_eq!(
                g.edges(true).collect_vec(),
                vec![Edge(0, 3), Edge(0, 4), Edge(1, 3), Edge(1, 4)]
            );
        }
    }

    #[test]
    fn test_connect_star() {
        let mut g = AdjMatrix::new(5);
        g.connect_star(2, [0, 1, 3, 4]).unwrap();

        assert_eq!(g.degree_of(2), 4);
        assert!([0, 1, 3, 4].iter().all(|&u| g.degree_of(u) == 1));
        assert_eq!(g.number_of_edges(), 4);
    }

    #[test]
    fn test_connect_clique() {
        {
            let mut g = AdjMatrix::new(6);
            g.connect_clique([1]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjMatrix::new(6);
            g.connect_clique([1, 2, 4, 2]).unwrap();
            assert_eq!(g.number_of_edges(), 3);
            assert!(!g.has_self_loop(2));
        }

        {
            let mut g = AdjMatrix::new(6);
            g.connect_clique(0..6).unwrap();
            assert_eq!(g.number_of_edges(), 15);
        }
    }

    #[test]
    fn invalid_nodes_are_reported() {
        let mut g = AdjMatrix::new(3);
        assert_eq!(
            g.connect_path([0, 1, 7]),
            Err(GraphError::InvalidVertexReference { vertex: 7, n: 3 })
        );
        // the edges before the invalid node were added
        assert!(g.has_edge(0, 1));
    }
}
