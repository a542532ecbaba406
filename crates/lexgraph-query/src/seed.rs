//! Seed selection: rank content nodes against the query.

use std::cmp::Ordering;

use tracing::debug;

use lexgraph_core::graph::CorpusGraph;
use lexgraph_core::similarity::word_overlap;
use lexgraph_core::types::ScoredNode;

use crate::query::Query;

/// Scan every node that has content, keep those scoring at least the
/// query's threshold, rank by score descending, and truncate to the
/// query's `max_seeds`.
///
/// The sort is stable, so equal scores keep the graph's node-iteration
/// order. Pure read; nothing on the graph changes.
pub fn select_seeds<G: CorpusGraph>(graph: &G, query: &Query) -> Vec<ScoredNode> {
    let mut scanned = 0usize;
    let mut seeds: Vec<ScoredNode> = Vec::new();

    for (id, data) in graph.nodes() {
        let Some(content) = data.content.as_deref() else {
            continue;
        };
        scanned += 1;

        let score = word_overlap(&query.text, content);
        if score >= query.similarity_threshold {
            seeds.push(ScoredNode { node: id, score });
        }
    }

    seeds.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    seeds.truncate(query.max_seeds);

    debug!(scanned, kept = seeds.len(), "seed selection finished");
    seeds
}
