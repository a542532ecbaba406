//! # Lexgraph Core
//!
//! Core types and traits for bounded retrieval over statutory document
//! graphs.
//!
//! A statutory corpus is modeled as a directed graph: articles, headings,
//! and consideration clauses as nodes, typed links ("similar to",
//! "references", and whatever else the corpus defines) as edges. This crate
//! holds the pieces every other lexgraph crate agrees on:
//!
//! - **types** - node identifiers, node/edge attributes, scored seeds
//! - **graph** - the read-only [`graph::CorpusGraph`] trait retrieval runs against
//! - **schema** - the per-corpus binding of relation labels and the
//!   article marker
//! - **similarity** - the word-overlap scorer used for seeding
//! - **error** - the shared error enum and `Result` alias
//!
//! ## Quick Start
//!
//! ```rust
//! use lexgraph_core::prelude::*;
//!
//! let node = NodeData::new()
//!     .with_content("hak asasi manusia")
//!     .with_part_type("Pasal");
//!
//! let score = word_overlap("hak asasi", node.content.as_deref().unwrap_or(""));
//! assert_eq!(score, 1.0);
//! ```

pub mod error;
pub mod graph;
pub mod prelude;
pub mod schema;
pub mod similarity;
pub mod types;
