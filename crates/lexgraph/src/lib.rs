//! # Lexgraph
//!
//! Bounded graph retrieval over statutory document corpora.
//!
//! A corpus is a directed graph of document parts: article-like parts carry
//! substantive text, structural parts (chapters, preambles, document roots)
//! usually carry none, and edges are labeled with typed relations such as
//! similarity links and normative references. Retrieval seeds on word
//! overlap between the query and node content, then expands each seed
//! breadth-first along the relation vocabulary, under a per-seed depth
//! limit and one result cap shared by every seed.
//!
//! ## Quick Start
//!
//! ```rust
//! use lexgraph::prelude::*;
//!
//! let graph = parse_corpus(
//!     r#"{
//!         "nodes": [
//!             {"id": "act-12/art-1", "partType": "Article", "content": "freedom of assembly and association"},
//!             {"id": "act-12/art-2", "partType": "Article", "content": "freedom of peaceful assembly"},
//!             {"id": "act-9", "content": null}
//!         ],
//!         "edges": [
//!             {"from": "act-12/art-1", "to": "act-12/art-2", "relation": "similarTo", "weight": 0.72},
//!             {"from": "act-12/art-1", "to": "act-9", "relation": "references"}
//!         ]
//!     }"#,
//! )
//! .unwrap();
//!
//! let query = Query::new("freedom of assembly")
//!     .with_threshold(0.5)
//!     .with_max_depth(1);
//! let records = Retriever::new(&graph).retrieve(&query).unwrap();
//!
//! for record in &records {
//!     println!("{} ({})", record.to_node, record.relation);
//! }
//! ```
//!
//! ## Architecture
//!
//! Lexgraph is organized into three crates:
//!
//! - [`lexgraph_core`] - shared types, the corpus schema, the word-overlap
//!   scorer, the [`CorpusGraph`](lexgraph_core::graph::CorpusGraph) trait,
//!   error types
//! - [`lexgraph_corpus`] - petgraph-backed graph storage and the JSON
//!   corpus loader
//! - [`lexgraph_query`] - query parameters, seed selection, bounded
//!   breadth-first traversal
//!
//! ## Key Concepts
//!
//! ### Relation policy
//!
//! During expansion, each neighbor of the current node is classified once:
//!
//! | Neighbor | Record | Carries | Frontier |
//! |----------|--------|---------|----------|
//! | Article-like part | relation + edge weight as score (similarity edges only) | content | grows |
//! | Target of a reference edge | relation only | no content | grows |
//! | Anything else | none | - | pruned |
//!
//! The vocabulary behind "article-like", "similarity", and "reference" is
//! a [`CorpusSchema`](lexgraph_core::schema::CorpusSchema); the defaults
//! fit English-labeled corpora and Indonesian statute corpora override
//! them with `"Pasal"`, `"miripDengan"`, `"mengingat"`.
//!
//! ### Result stream
//!
//! Retrieval returns one flat, ordered list of
//! [`ResultRecord`](lexgraph_query::ResultRecord)s: each seed's own
//! `query_similarity` record first, then that seed's expansion records in
//! traversal order. The order is the presentation order and consumers
//! must not re-sort it. When the shared result cap is reached the stream
//! simply ends, mid-expansion if need be.

// Re-export all subcrates
pub use lexgraph_core as core;
pub use lexgraph_corpus as corpus;
pub use lexgraph_query as query;

/// Prelude module for convenient imports.
///
/// ```rust
/// use lexgraph::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use lexgraph_core::schema::CorpusSchema;
    pub use lexgraph_core::types::{EdgeData, NodeData, NodeId, ScoredNode};

    // Core traits and functions
    pub use lexgraph_core::graph::CorpusGraph;
    pub use lexgraph_core::similarity::word_overlap;

    // Error types
    pub use lexgraph_core::error::{LexgraphError, Result};

    // Corpus storage and loading
    pub use lexgraph_corpus::{load_corpus, parse_corpus, CorpusFile, PetCorpusGraph};

    // Retrieval
    pub use lexgraph_query::{select_seeds, Query, ResultRecord, Retriever, QUERY_SIMILARITY};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
