use thiserror::Error;

use crate::{Node, NumNodes};

/// Errors reported by graph construction, edge editing and walk construction.
///
/// All of them are recoverable: they describe a bad input, never a corrupted graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// The flattened adjacency matrix and the position array do not describe the same graph
    #[error("invalid graph shape: {reason}")]
    InvalidShape { reason: String },
    /// A walk was requested for a graph without Eulerian path or circuit
    #[error("graph has neither an Eulerian path nor an Eulerian circuit")]
    NotEulerian,
    /// A vertex index outside of `0..n`
    #[error("vertex {vertex} does not belong to a graph with {n} vertices")]
    InvalidVertexReference { vertex: Node, n: NumNodes },
    /// An edge probability outside of `[0, 1]`
    #[error("invalid edge probability {0}")]
    InvalidProbability(f64),
}

impl GraphError {
    pub(crate) fn shape<S: Into<String>>(reason: S) -> Self {
        Self::InvalidShape {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
