use std::fmt::Display;

use itertools::Itertools;
use tracing::debug;

use super::*;

/// An undirected graph stored as a flat `n x n` adjacency matrix.
///
/// Entry `i * n + j` is *true* iff the edge `{i, j}` exists. The matrix is always symmetric.
/// Self-loops occupy a single diagonal entry and contribute `1` to the degree of their node,
/// so that the degree of `u` always equals the number of *true* entries in row `u`.
///
/// `Clone` yields a deep copy that shares no state with the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjMatrix {
    vertices: Vec<Vertex>,
    matrix: Vec<bool>,
    num_edges: NumEdges,
}

impl AdjMatrix {
    /// Builds a graph from a flattened row-major adjacency matrix and one position per vertex.
    ///
    /// `positions` is parallel to the vertices (length `n`), not to the matrix entries (length `n^2`).
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidShape`] if the length of `matrix` is not a perfect square,
    /// if `positions` does not hold exactly one entry per vertex or if `matrix` is not symmetric.
    pub fn from_matrix(matrix: Vec<bool>, positions: &[Position]) -> Result<Self> {
        let side = matrix.len().isqrt();
        if side * side != matrix.len() {
            return Err(GraphError::shape(format!(
                "matrix of length {} is not square",
                matrix.len()
            )));
        }

        if positions.len() != side {
            return Err(GraphError::shape(format!(
                "{} positions given for {side} vertices",
                positions.len()
            )));
        }

        if let Some((i, j)) = (0..side)
            .tuple_combinations()
            .find(|&(i, j)| matrix[i * side + j] != matrix[j * side + i])
        {
            return Err(GraphError::shape(format!(
                "matrix is not symmetric at ({i},{j})"
            )));
        }

        let mut graph = Self::new(side as NumNodes);
        graph.matrix = matrix;
        for (vertex, &pos) in graph.vertices.iter_mut().zip(positions) {
            vertex.set_position(pos);
        }
        graph.recompute_all_degrees();

        debug!(
            n = graph.number_of_nodes(),
            m = graph.number_of_edges(),
            "built graph from adjacency matrix"
        );
        Ok(graph)
    }

    /// Recomputes the degree of every vertex (and the number of edges) from the matrix.
    /// Used after the matrix was filled in bulk.
    pub fn recompute_all_degrees(&mut self) {
        let n = self.len();
        let mut loops = 0;
        let mut entries = 0;

        for (u, vertex) in self.vertices.iter_mut().enumerate() {
            let row = &self.matrix[u * n..(u + 1) * n];
            let degree = row.iter().filter(|&&x| x).count();
            vertex.degree = degree as NumNodes;
            entries += degree;
            loops += row[u] as usize;
        }

        self.num_edges = ((entries - loops) / 2 + loops) as NumEdges;
    }

    /// Returns the vertex-record of `u`
    pub fn vertex(&self, u: Node) -> Result<&Vertex> {
        self.check_vertex(u)?;
        Ok(&self.vertices[u as usize])
    }

    /// Returns all vertex-records in index order
    pub fn vertex_data(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the label of `u`
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Node) -> &str {
        self.vertices[u as usize].label()
    }

    /// Returns the flattened row-major adjacency matrix
    pub fn matrix(&self) -> &[bool] {
        &self.matrix
    }

    /// Returns row `u` of the adjacency matrix
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[bool] {
        let n = self.len();
        let u = u as usize;
        &self.matrix[u * n..(u + 1) * n]
    }

    /// Assigns a position to `u`. Positions are never interpreted by graph algorithms.
    pub fn set_position(&mut self, u: Node, position: Position) -> Result<()> {
        self.check_vertex(u)?;
        self.vertices[u as usize].set_position(position);
        Ok(())
    }

    #[inline]
    fn index(&self, u: Node, v: Node) -> usize {
        u as usize * self.len() + v as usize
    }
}

impl GraphNew for AdjMatrix {
    fn new(n: NumNodes) -> Self {
        Self {
            vertices: (0..n).map(Vertex::new).collect(),
            matrix: vec![false; n as usize * n as usize],
            num_edges: 0,
        }
    }
}

impl GraphNodeOrder for AdjMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjMatrix {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjMatrix {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter_map(|(v, &x)| x.then_some(v as Node))
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.vertices[u as usize].degree
    }
}

impl AdjacencyTest for AdjMatrix {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        self.matrix[self.index(u, v)]
    }
}

impl GraphEdgeEditing for AdjMatrix {
    fn try_set_edge(&mut self, u: Node, v: Node, present: bool) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        let uv = self.index(u, v);
        if self.matrix[uv] == present {
            return Ok(false);
        }

        let vu = self.index(v, u);
        self.matrix[uv] = present;
        self.matrix[vu] = present;

        if present {
            self.vertices[u as usize].degree += 1;
            if u != v {
                self.vertices[v as usize].degree += 1;
            }
            self.num_edges += 1;
        } else {
            self.vertices[u as usize].degree -= 1;
            if u != v {
                self.vertices[v as usize].degree -= 1;
            }
            self.num_edges -= 1;
        }

        Ok(true)
    }
}

impl GraphFromScratch for AdjMatrix {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self> {
        let mut graph = Self::new(n);
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            graph.check_vertex(u)?;
            graph.check_vertex(v)?;
            let (uv, vu) = (graph.index(u, v), graph.index(v, u));
            graph.matrix[uv] = true;
            graph.matrix[vu] = true;
        }
        graph.recompute_all_degrees();
        Ok(graph)
    }
}

impl Display for AdjMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for u in self.vertices() {
            writeln!(
                f,
                "{} (degree {}): {}",
                self.label_of(u),
                self.degree_of(u),
                self.neighbors_of(u).map(|v| self.label_of(v)).join(" ")
            )?;
        }
        Ok(())
    }
}
