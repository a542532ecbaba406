//! JSON corpus files.
//!
//! A corpus file is a flat node/edge listing:
//!
//! ```json
//! {
//!   "nodes": [
//!     {"id": "uu-39-1999/pasal-1", "partType": "Pasal", "content": "..."}
//!   ],
//!   "edges": [
//!     {"from": "uu-39-1999/pasal-1", "to": "uu-39-1999/pasal-2",
//!      "relation": "miripDengan", "weight": 0.82}
//!   ]
//! }
//! ```
//!
//! `partType`, `content`, `relation`, and `weight` are all optional and
//! stay absent in the graph when omitted. Duplicate node ids and edges
//! naming unknown endpoints are load errors; a file that references nodes
//! it never declares would make traversal fail much later and much less
//! clearly.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use lexgraph_core::error::{LexgraphError, Result};
use lexgraph_core::graph::CorpusGraph;
use lexgraph_core::types::{EdgeData, NodeData, NodeId};

use crate::graph_impl::PetCorpusGraph;

/// On-disk corpus model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusFile {
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// One node entry in a corpus file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSpec {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// One edge entry in a corpus file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl CorpusFile {
    /// Materialize the listing into a graph, validating as it goes.
    pub fn into_graph(self) -> Result<PetCorpusGraph> {
        let mut graph = PetCorpusGraph::new();

        for node in self.nodes {
            let id = NodeId::from(node.id);
            if graph.contains_node(&id) {
                return Err(LexgraphError::InvalidCorpus(format!(
                    "duplicate node id {id}"
                )));
            }
            graph.add_node(
                id,
                NodeData {
                    content: node.content,
                    part_type: node.part_type,
                },
            );
        }

        for edge in self.edges {
            let from = NodeId::from(edge.from);
            let to = NodeId::from(edge.to);
            for endpoint in [&from, &to] {
                if !graph.contains_node(endpoint) {
                    return Err(LexgraphError::InvalidCorpus(format!(
                        "edge {from} -> {to} references unknown node {endpoint}"
                    )));
                }
            }
            graph.set_edge(
                from,
                to,
                EdgeData {
                    relation: edge.relation,
                    weight: edge.weight,
                },
            )?;
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "corpus materialized"
        );
        Ok(graph)
    }
}

/// Parse a corpus from its JSON text.
pub fn parse_corpus(json: &str) -> Result<PetCorpusGraph> {
    let file: CorpusFile = serde_json::from_str(json)?;
    file.into_graph()
}

/// Load a corpus file from disk.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<PetCorpusGraph> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = json.len(), "corpus file read");
    parse_corpus(&json)
}
