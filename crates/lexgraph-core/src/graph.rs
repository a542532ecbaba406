//! Read access to a corpus graph.
//!
//! Retrieval is a trait client rather than owner of a concrete graph type,
//! so it can run against any backend that can enumerate nodes, walk
//! outgoing edges, and resolve edge attributes. The petgraph-backed
//! implementation lives in the corpus crate; tests substitute small
//! hand-rolled graphs.

use crate::types::{EdgeData, NodeData, NodeId};

/// Read-only view of a directed corpus graph.
///
/// All access goes through `&self`, so independent retrieval calls may
/// share one graph as long as nobody mutates it mid-call.
pub trait CorpusGraph {
    /// Node attributes by id.
    fn node(&self, id: &NodeId) -> Option<&NodeData>;

    /// Every node paired with its attributes, in the backend's stable
    /// iteration order. Seed selection relies on this order as the
    /// tie-break for equal scores.
    fn nodes(&self) -> Vec<(NodeId, &NodeData)>;

    /// Targets of the outgoing edges of `id`. Unknown ids yield an empty
    /// list.
    fn neighbors(&self, id: &NodeId) -> Vec<NodeId>;

    /// Attributes of the edge `from -> to`.
    fn edge(&self, from: &NodeId, to: &NodeId) -> Option<&EdgeData>;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;
}
