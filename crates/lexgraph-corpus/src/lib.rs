//! # Lexgraph Corpus
//!
//! Corpus graph storage for lexgraph: a petgraph-backed directed graph
//! keyed by the corpus's own node ids, plus the JSON loader that
//! materializes corpus files into it.
//!
//! Corpus construction (scraping, sectioning documents into parts, linking
//! similar or referenced parts) happens upstream of this crate; lexgraph
//! consumes the finished graph read-only.
//!
//! ## Quick Start
//!
//! ```rust
//! use lexgraph_corpus::parse_corpus;
//! use lexgraph_core::prelude::*;
//!
//! let graph = parse_corpus(
//!     r#"{
//!         "nodes": [
//!             {"id": "pasal-1", "partType": "Pasal", "content": "hak asasi manusia"},
//!             {"id": "pasal-2", "partType": "Pasal", "content": "hak warga negara"}
//!         ],
//!         "edges": [
//!             {"from": "pasal-1", "to": "pasal-2", "relation": "miripDengan", "weight": 0.8}
//!         ]
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.neighbors(&NodeId::from("pasal-1")).len(), 1);
//! ```

pub mod graph_impl;
pub mod loader;

pub use graph_impl::PetCorpusGraph;
pub use loader::{load_corpus, parse_corpus, CorpusFile, EdgeSpec, NodeSpec};
