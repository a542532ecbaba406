//! Shared types used across all lexgraph crates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a node in the corpus graph.
///
/// Corpora bring their own identifier scheme (document numbers, article
/// paths such as `"uu-39-1999/pasal-1"`), so this wraps the corpus string
/// instead of generating ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Attributes stored on a corpus graph node.
///
/// Both fields are optional: structural nodes (chapter headings, the
/// document root) often carry no content, and only article-like parts carry
/// a `part_type` worth matching on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    /// Substantive text of the part, when it has any.
    pub content: Option<String>,
    /// Corpus-specific part tag, e.g. "Pasal" or "Article".
    pub part_type: Option<String>,
}

impl NodeData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_part_type(mut self, part_type: impl Into<String>) -> Self {
        self.part_type = Some(part_type.into());
        self
    }
}

/// Attributes stored on a corpus graph edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    /// Typed relation label, e.g. "similarTo" or "mengingat".
    pub relation: Option<String>,
    /// Link strength, normally present on similarity edges only.
    pub weight: Option<f64>,
}

impl EdgeData {
    pub fn new(relation: impl Into<String>) -> Self {
        Self {
            relation: Some(relation.into()),
            weight: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Relation label, defaulting to the empty string when absent.
    pub fn relation_or_default(&self) -> &str {
        self.relation.as_deref().unwrap_or("")
    }
}

/// A seed candidate: a node plus its similarity score against the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredNode {
    pub node: NodeId,
    /// Word-overlap score in `[0, 1]`.
    pub score: f64,
}

impl ScoredNode {
    pub fn new(node: impl Into<NodeId>, score: f64) -> Self {
        Self {
            node: node.into(),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_displays_inner_string() {
        let id = NodeId::from("uu-39-1999/pasal-1");
        assert_eq!(id.to_string(), "uu-39-1999/pasal-1");
        assert_eq!(id.as_str(), "uu-39-1999/pasal-1");
    }

    #[test]
    fn node_data_builder_sets_fields() {
        let node = NodeData::new()
            .with_content("isi pasal")
            .with_part_type("Pasal");
        assert_eq!(node.content.as_deref(), Some("isi pasal"));
        assert_eq!(node.part_type.as_deref(), Some("Pasal"));
    }

    #[test]
    fn edge_relation_defaults_to_empty_string() {
        let edge = EdgeData::default();
        assert_eq!(edge.relation_or_default(), "");
        assert_eq!(edge.weight, None);

        let edge = EdgeData::new("miripDengan").with_weight(0.8);
        assert_eq!(edge.relation_or_default(), "miripDengan");
        assert_eq!(edge.weight, Some(0.8));
    }
}
