//! The traversal output stream.

use serde::Serialize;

use lexgraph_core::types::NodeId;

/// Relation label on the self-record that opens every seed's output. This
/// is fabricated by the engine, not read from the corpus, so it is not
/// part of the corpus schema.
pub const QUERY_SIMILARITY: &str = "query_similarity";

/// One record in the traversal output.
///
/// Records come out in presentation order: each seed's own
/// `query_similarity` record first, then that seed's expansion records in
/// dequeue order. Consumers must keep this order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    /// Node the record was emitted from. `None` only for seed records.
    pub from_node: Option<NodeId>,
    pub to_node: NodeId,
    /// `query_similarity` for seed records, otherwise the literal edge
    /// relation (empty string when the edge carries none).
    pub relation: String,
    /// Seed score, or the edge weight of a similarity edge. `None` for
    /// reference records and for non-similarity article edges.
    pub similarity_score: Option<f64>,
    /// Node content, empty string when the node has none. `None` for
    /// reference records, which structurally carry no content.
    pub content: Option<String>,
}

impl ResultRecord {
    /// Seed self-record opening a seed's output block.
    pub fn seed(to_node: NodeId, score: f64, content: String) -> Self {
        Self {
            from_node: None,
            to_node,
            relation: QUERY_SIMILARITY.to_string(),
            similarity_score: Some(score),
            content: Some(content),
        }
    }

    /// Record for an article-like neighbor reached over `relation`.
    pub fn article(
        from_node: NodeId,
        to_node: NodeId,
        relation: impl Into<String>,
        similarity_score: Option<f64>,
        content: String,
    ) -> Self {
        Self {
            from_node: Some(from_node),
            to_node,
            relation: relation.into(),
            similarity_score,
            content: Some(content),
        }
    }

    /// Record for a reference edge.
    pub fn reference(from_node: NodeId, to_node: NodeId, relation: impl Into<String>) -> Self {
        Self {
            from_node: Some(from_node),
            to_node,
            relation: relation.into(),
            similarity_score: None,
            content: None,
        }
    }

    /// True for the `query_similarity` self-records.
    pub fn is_seed(&self) -> bool {
        self.relation == QUERY_SIMILARITY
    }
}
