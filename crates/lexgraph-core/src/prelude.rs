//! Lexgraph core prelude, the imports nearly every consumer wants.
//!
//! ```rust
//! use lexgraph_core::prelude::*;
//! ```

pub use crate::error::{LexgraphError, Result};
pub use crate::graph::CorpusGraph;
pub use crate::schema::CorpusSchema;
pub use crate::similarity::word_overlap;
pub use crate::types::{EdgeData, NodeData, NodeId, ScoredNode};
