//! Error types for lexgraph operations.
//!
//! Missing optional attributes are never errors; they resolve to documented
//! defaults at the point of use. Errors here are reserved for bad
//! parameters, graphs that contradict themselves, and the loader's I/O and
//! parsing failures.

use thiserror::Error;

use crate::types::NodeId;

/// Result type for lexgraph operations.
pub type Result<T> = std::result::Result<T, LexgraphError>;

/// Errors that can occur during corpus loading and retrieval.
#[derive(Debug, Error)]
pub enum LexgraphError {
    /// A retrieval parameter was outside its documented range.
    #[error("invalid {name}: {value} ({expected})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// The graph source referenced a node it could not then resolve.
    #[error("graph inconsistency: unknown node {0}")]
    UnknownNode(NodeId),

    /// The graph source listed a neighbor without a connecting edge.
    #[error("graph inconsistency: no edge {from} -> {to}")]
    UnknownEdge { from: NodeId, to: NodeId },

    /// A corpus file that parses but does not describe a valid graph.
    #[error("invalid corpus: {0}")]
    InvalidCorpus(String),

    /// I/O errors (wrapped).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LexgraphError {
    /// Similarity threshold outside `[0, 1]`, NaN included.
    pub fn invalid_threshold(value: f64) -> Self {
        Self::InvalidParameter {
            name: "similarity_threshold",
            value,
            expected: "must be within [0, 1]",
        }
    }

    pub fn unknown_node(id: impl Into<NodeId>) -> Self {
        Self::UnknownNode(id.into())
    }

    pub fn unknown_edge(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self::UnknownEdge {
            from: from.into(),
            to: to.into(),
        }
    }
}
