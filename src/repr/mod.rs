/*!
# Graph Representations

Graphs in this crate are stored as a dense, row-major boolean adjacency matrix
([`AdjMatrix`]) next to an array of [`Vertex`]-records that cache the degree of every node.
The matrix is the only source of truth for edge existence; degrees and the number of edges are
caches that every mutating operation keeps in sync.
*/

use crate::{ops::*, *};

mod matrix;

pub use matrix::*;
