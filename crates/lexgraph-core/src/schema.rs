//! Corpus label vocabulary.
//!
//! Different corpora tag the same three roles with different strings. The
//! Indonesian statutory corpus this engine was first built for links
//! articles with "miripDengan" edges, consideration clauses with
//! "mengingat" edges, and tags article nodes with "Pasal"; an English
//! corpus would use "similarTo", "references", "Article". The traversal
//! policy only ever compares against this schema, never against hard-coded
//! literals.

use serde::{Deserialize, Serialize};

/// Binds the relation labels and the article marker that traversal matches
/// against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusSchema {
    /// Label of similarity edges. Their weight becomes the record score.
    #[serde(default = "default_similar_relation")]
    pub similar_relation: String,
    /// Label of reference edges. They propagate without content.
    #[serde(default = "default_reference_relation")]
    pub reference_relation: String,
    /// Substring marking a node's `part_type` as article-like.
    #[serde(default = "default_article_marker")]
    pub article_marker: String,
}

fn default_similar_relation() -> String {
    "similarTo".to_string()
}

fn default_reference_relation() -> String {
    "references".to_string()
}

fn default_article_marker() -> String {
    "Article".to_string()
}

impl Default for CorpusSchema {
    fn default() -> Self {
        Self {
            similar_relation: default_similar_relation(),
            reference_relation: default_reference_relation(),
            article_marker: default_article_marker(),
        }
    }
}

impl CorpusSchema {
    /// True when `part_type` contains the article marker.
    ///
    /// An absent `part_type` never matches. The check is substring
    /// containment, so "Pasal 12" and "Pasal-Penjelasan" both count as
    /// article-like under the marker "Pasal".
    pub fn is_article(&self, part_type: Option<&str>) -> bool {
        part_type.is_some_and(|p| p.contains(&self.article_marker))
    }

    /// True when `relation` is the similarity label.
    pub fn is_similar(&self, relation: &str) -> bool {
        relation == self.similar_relation
    }

    /// True when `relation` is the reference label.
    pub fn is_reference(&self, relation: &str) -> bool {
        relation == self.reference_relation
    }
}
