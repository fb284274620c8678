//! Shared assertions and fixtures for unit tests.

use itertools::Itertools;
use rand::Rng;

use crate::{prelude::*, algo::*};

/// Asserts that every cached degree equals the number of *true* entries in its matrix row and
/// that the matrix is symmetric
pub(crate) fn assert_degree_invariant(graph: &AdjMatrix) {
    let n = graph.len();
    let matrix = graph.matrix();

    for u in 0..n {
        let row_count = matrix[u * n..(u + 1) * n].iter().filter(|&&x| x).count();
        assert_eq!(
            graph.degree_of(u as Node) as usize,
            row_count,
            "cached degree of {u} diverged from the matrix"
        );

        for v in 0..n {
            assert_eq!(matrix[u * n + v], matrix[v * n + u]);
        }
    }
}

/// Number of undirected edges of a loop-free graph, counted from the raw matrix
pub(crate) fn edges_in_matrix(graph: &AdjMatrix) -> usize {
    graph.matrix().iter().filter(|&&x| x).count() / 2
}

/// Asserts that `walk` is a valid Eulerian walk of `graph`: consecutive entries are adjacent,
/// every edge is used exactly once and the walk is closed iff `walk.kind` says so
pub(crate) fn assert_valid_walk(graph: &AdjMatrix, walk: &EulerianWalk) {
    let trail = walk.trail();
    assert_eq!(trail.len(), graph.number_of_edges() as usize + 1);

    let mut used = trail
        .iter()
        .tuple_windows()
        .map(|(&u, &v)| {
            assert!(graph.has_edge(u, v), "walk uses missing edge {u}-{v}");
            Edge(u, v).normalized()
        })
        .collect_vec();
    used.sort_unstable();
    let before = used.len();
    used.dedup();
    assert_eq!(before, used.len(), "walk uses an edge twice");
    assert_eq!(used, graph.edges(true).collect_vec());

    let closed = trail.first() == trail.last();
    match walk.kind() {
        EulerianKind::ClosedCircuit => assert!(closed),
        EulerianKind::OpenPath => assert!(!closed),
        EulerianKind::NoWalk => panic!("walk reported for a graph without Eulerian walk"),
    }
}

/// Creates a random connected graph in which every vertex has even degree: the union of a few
/// edge-disjoint random cycles through vertex `0`
pub(crate) fn random_eulerian_graph<R: Rng>(rng: &mut R, n: NumNodes, cycles: usize) -> AdjMatrix {
    assert!(n >= 3);
    loop {
        let mut graph = AdjMatrix::new(n);
        let mut edge_disjoint = true;
        for _ in 0..cycles {
            let len = rng.random_range(3..=n) as usize;
            let mut others = (1..n).collect_vec();
            for i in 0..(len - 1) {
                let j = rng.random_range(i..others.len());
                others.swap(i, j);
            }

            let mut cycle = vec![0];
            cycle.extend_from_slice(&others[..len - 1]);
            cycle.push(0);

            for (&u, &v) in cycle.iter().tuple_windows() {
                edge_disjoint &= graph.add_edge(u, v).unwrap();
            }
        }

        // a reused edge breaks the parity of its endpoints
        if edge_disjoint {
            return graph;
        }
    }
}
