//! # Lexgraph Query
//!
//! Retrieval over a statutory corpus graph, in two phases:
//!
//! 1. **Seed selection** scans every content-bearing node, scores it
//!    against the query by word overlap, and keeps a ranked, bounded list
//!    of entry points.
//! 2. **Bounded traversal** expands each seed breadth-first along the
//!    corpus's similarity and reference edges, under a per-seed depth
//!    limit and one result cap shared by all seeds.
//!
//! The output is an ordered stream of [`ResultRecord`]s whose order is the
//! presentation order; consumers render it, they never re-sort it.
//!
//! ## Quick Start
//!
//! ```rust
//! use lexgraph_corpus::parse_corpus;
//! use lexgraph_query::{Query, Retriever};
//!
//! let graph = parse_corpus(
//!     r#"{
//!         "nodes": [
//!             {"id": "art-1", "partType": "Article", "content": "freedom of assembly"},
//!             {"id": "art-2", "partType": "Article", "content": "freedom of speech"}
//!         ],
//!         "edges": [
//!             {"from": "art-1", "to": "art-2", "relation": "similarTo", "weight": 0.7}
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
//! assert_eq!(records[0].to_node.as_str(), "art-1");
//! ```

pub mod query;
pub mod record;
pub mod seed;
pub mod traversal;

pub use query::Query;
pub use record::{ResultRecord, QUERY_SIMILARITY};
pub use seed::select_seeds;
pub use traversal::Retriever;
