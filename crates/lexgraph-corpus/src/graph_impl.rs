//! Concrete implementation of the CorpusGraph trait using petgraph.
//!
//! Backed by petgraph's directed `Graph` with a HashMap index for O(1)
//! node lookup by corpus id. Nodes are never removed, so petgraph's
//! node-index order is insertion order; seed selection leans on that as
//! its tie-break for equal scores.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use lexgraph_core::error::{LexgraphError, Result};
use lexgraph_core::graph::CorpusGraph;
use lexgraph_core::types::{EdgeData, NodeData, NodeId};

#[derive(Debug)]
struct NodeEntry {
    id: NodeId,
    data: NodeData,
}

/// Petgraph-backed directed corpus graph.
#[derive(Debug)]
pub struct PetCorpusGraph {
    graph: DiGraph<NodeEntry, EdgeData>,
    /// Map from corpus id to petgraph's internal index.
    node_index: HashMap<NodeId, NodeIndex>,
}

impl PetCorpusGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Insert a node. If the id already exists, its attributes are
    /// replaced and the graph structure is untouched.
    pub fn add_node(&mut self, id: impl Into<NodeId>, data: NodeData) -> NodeId {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(&id) {
            self.graph[idx].data = data;
            return id;
        }
        let idx = self.graph.add_node(NodeEntry {
            id: id.clone(),
            data,
        });
        self.node_index.insert(id.clone(), idx);
        id
    }

    /// Add or update the edge `from -> to`. If the edge exists, its
    /// attributes are replaced.
    pub fn set_edge(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        data: EdgeData,
    ) -> Result<()> {
        let from = from.into();
        let to = to.into();
        let Some(&from_idx) = self.node_index.get(&from) else {
            return Err(LexgraphError::UnknownNode(from));
        };
        let Some(&to_idx) = self.node_index.get(&to) else {
            return Err(LexgraphError::UnknownNode(to));
        };

        if let Some(edge_idx) = self.graph.find_edge(from_idx, to_idx) {
            self.graph[edge_idx] = data;
        } else {
            self.graph.add_edge(from_idx, to_idx, data);
        }
        Ok(())
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node_index.contains_key(id)
    }

    /// Edge tally per relation label (absent labels count under ""),
    /// sorted by frequency descending, label ascending for ties.
    pub fn relation_counts(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for edge_idx in self.graph.edge_indices() {
            let relation = self.graph[edge_idx].relation_or_default();
            *counts.entry(relation).or_insert(0) += 1;
        }
        let mut counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(relation, count)| (relation.to_string(), count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }
}

impl Default for PetCorpusGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusGraph for PetCorpusGraph {
    fn node(&self, id: &NodeId) -> Option<&NodeData> {
        self.node_index.get(id).map(|&idx| &self.graph[idx].data)
    }

    fn nodes(&self) -> Vec<(NodeId, &NodeData)> {
        self.graph
            .node_indices()
            .map(|idx| {
                let entry = &self.graph[idx];
                (entry.id.clone(), &entry.data)
            })
            .collect()
    }

    fn neighbors(&self, id: &NodeId) -> Vec<NodeId> {
        let Some(&idx) = self.node_index.get(id) else {
            return Vec::new();
        };

        // petgraph walks adjacency newest-edge-first; present outgoing
        // edges in insertion order instead.
        let mut targets: Vec<NodeId> = self
            .graph
            .neighbors(idx)
            .map(|other| self.graph[other].id.clone())
            .collect();
        targets.reverse();
        targets
    }

    fn edge(&self, from: &NodeId, to: &NodeId) -> Option<&EdgeData> {
        let from_idx = self.node_index.get(from)?;
        let to_idx = self.node_index.get(to)?;
        let edge_idx = self.graph.find_edge(*from_idx, *to_idx)?;
        Some(&self.graph[edge_idx])
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
