/*!
# Vertex Data

Every node of a graph carries a [`Vertex`] with its display label, its cached degree and an
optional position on a drawing canvas. The label is assigned by creation order
(`A, B, …, Z, AA, AB, …`), the degree is maintained by the graph on every edge mutation and the
position is only ever read or written by layout and visualization code.
*/

use std::fmt::Display;

use crate::{Node, NumNodes};

/// A point on the drawing canvas
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Label, cached degree and optional position of a single node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vertex {
    label: String,
    pub(crate) degree: NumNodes,
    position: Option<Position>,
}

impl Vertex {
    /// Creates a vertex with the label belonging to index `u`, degree `0` and no position
    pub fn new(u: Node) -> Self {
        Self {
            label: label_of(u),
            degree: 0,
            position: None,
        }
    }

    /// Display identifier of the vertex
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of edges currently incident to the vertex
    pub fn degree(&self) -> NumNodes {
        self.degree
    }

    /// Position on the drawing canvas, if one was assigned
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }
}

/// Returns the label of the `u`-th vertex in bijective base 26: `0 -> A`, `25 -> Z`, `26 -> AA`, ...
pub fn label_of(u: Node) -> String {
    let mut x = u as u64 + 1;
    let mut rev = Vec::with_capacity(4);
    while x > 0 {
        x -= 1;
        rev.push(b'A' + (x % 26) as u8);
        x /= 26;
    }
    rev.iter().rev().map(|&c| c as char).collect()
}
