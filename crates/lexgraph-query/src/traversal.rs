//! Bounded breadth-first expansion from ranked seeds.
//!
//! Each seed opens its own output block with a `query_similarity` record,
//! then expands breadth-first under the per-seed depth limit. The
//! branching policy comes from the corpus schema: article-like neighbors
//! propagate with their content, reference edges propagate without
//! content, every other neighbor is pruned silently. One result cap spans
//! all seeds; the moment it is reached the whole call stops, mid-scan if
//! need be, and whatever was collected so far is the result.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use lexgraph_core::error::{LexgraphError, Result};
use lexgraph_core::graph::CorpusGraph;
use lexgraph_core::schema::CorpusSchema;
use lexgraph_core::types::{NodeId, ScoredNode};

use crate::query::Query;
use crate::record::ResultRecord;
use crate::seed::select_seeds;

/// Collects records up to a fixed capacity shared across seeds.
struct BoundedSink {
    records: Vec<ResultRecord>,
    capacity: usize,
}

impl BoundedSink {
    fn new(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    /// Append a record. Returns false once the capacity is reached, which
    /// callers treat as terminal for the rest of the call. The append
    /// itself is unconditional so the record that hits the cap is kept,
    /// and so the opening seed record survives even a capacity of zero.
    fn push(&mut self, record: ResultRecord) -> bool {
        self.records.push(record);
        self.records.len() < self.capacity
    }

    fn into_records(self) -> Vec<ResultRecord> {
        self.records
    }
}

/// The retrieval engine: seed selection plus bounded expansion over a
/// borrowed, read-only corpus graph.
pub struct Retriever<'g, G: CorpusGraph> {
    graph: &'g G,
    schema: CorpusSchema,
}

impl<'g, G: CorpusGraph> Retriever<'g, G> {
    /// Engine over `graph` with the default schema.
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            schema: CorpusSchema::default(),
        }
    }

    pub fn with_schema(mut self, schema: CorpusSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Validate, select seeds, traverse. The one-call entry point.
    pub fn retrieve(&self, query: &Query) -> Result<Vec<ResultRecord>> {
        query.validate()?;
        let seeds = self.select_seeds(query);
        self.traverse(&seeds, query)
    }

    /// Rank seed candidates for `query`. See [`select_seeds`].
    pub fn select_seeds(&self, query: &Query) -> Vec<ScoredNode> {
        select_seeds(self.graph, query)
    }

    /// Expand every seed breadth-first, in seed-list order, under the
    /// shared result cap.
    ///
    /// The returned order is the presentation order: each seed's own
    /// record first, then its expansion records in dequeue order.
    pub fn traverse(&self, seeds: &[ScoredNode], query: &Query) -> Result<Vec<ResultRecord>> {
        let mut sink = BoundedSink::new(query.max_results);

        for seed in seeds {
            let Some(node) = self.graph.node(&seed.node) else {
                return Err(LexgraphError::UnknownNode(seed.node.clone()));
            };
            let content = node.content.clone().unwrap_or_default();
            if !sink.push(ResultRecord::seed(seed.node.clone(), seed.score, content)) {
                break;
            }
            if !self.expand_seed(seed, query, &mut sink)? {
                break;
            }
        }

        let records = sink.into_records();
        debug!(
            seeds = seeds.len(),
            records = records.len(),
            "traversal finished"
        );
        Ok(records)
    }

    /// BFS for one seed. Returns Ok(false) when the global cap was hit.
    fn expand_seed(
        &self,
        seed: &ScoredNode,
        query: &Query,
        sink: &mut BoundedSink,
    ) -> Result<bool> {
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();
        queue.push_back((seed.node.clone(), 0));

        while let Some((node_id, depth)) = queue.pop_front() {
            if depth > query.max_depth {
                continue;
            }
            if !visited.insert(node_id.clone()) {
                // Enqueued a second time before its first dequeue
                // (converging paths); already expanded.
                continue;
            }

            for neighbor in self.graph.neighbors(&node_id) {
                if visited.contains(&neighbor) {
                    continue;
                }

                let Some(edge) = self.graph.edge(&node_id, &neighbor) else {
                    return Err(LexgraphError::unknown_edge(node_id, neighbor));
                };
                let relation = edge.relation_or_default();
                let Some(neighbor_data) = self.graph.node(&neighbor) else {
                    return Err(LexgraphError::UnknownNode(neighbor));
                };

                if self.schema.is_article(neighbor_data.part_type.as_deref()) {
                    let score = if self.schema.is_similar(relation) {
                        edge.weight
                    } else {
                        None
                    };
                    let record = ResultRecord::article(
                        node_id.clone(),
                        neighbor.clone(),
                        relation,
                        score,
                        neighbor_data.content.clone().unwrap_or_default(),
                    );
                    queue.push_back((neighbor, depth + 1));
                    if !sink.push(record) {
                        return Ok(false);
                    }
                } else if self.schema.is_reference(relation) {
                    let record =
                        ResultRecord::reference(node_id.clone(), neighbor.clone(), relation);
                    queue.push_back((neighbor, depth + 1));
                    if !sink.push(record) {
                        return Ok(false);
                    }
                }
                // Anything else is pruned without a record.
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use lexgraph_core::types::{EdgeData, NodeData};
    use lexgraph_corpus::PetCorpusGraph;

    fn statutory() -> CorpusSchema {
        CorpusSchema {
            similar_relation: "miripDengan".to_string(),
            reference_relation: "mengingat".to_string(),
            article_marker: "Pasal".to_string(),
        }
    }

    fn article(content: &str) -> NodeData {
        NodeData::new().with_content(content).with_part_type("Pasal")
    }

    /// A "hak asasi manusia", B "hak warga negara" (article), C unrelated,
    /// one similarity edge A -> B at 0.8.
    fn scenario_graph() -> PetCorpusGraph {
        let mut graph = PetCorpusGraph::new();
        graph.add_node("a", NodeData::new().with_content("hak asasi manusia"));
        graph.add_node("b", article("hak warga negara"));
        graph.add_node("c", NodeData::new().with_content("tidak terkait"));
        graph
            .set_edge("a", "b", EdgeData::new("miripDengan").with_weight(0.8))
            .unwrap();
        graph
    }

    #[test]
    fn similar_article_is_reached_with_edge_weight() {
        let graph = scenario_graph();
        let retriever = Retriever::new(&graph).with_schema(statutory());
        let query = Query::new("hak asasi").with_threshold(0.3).with_max_depth(1);

        // B itself clears the 0.3 threshold ("hak" is one of two query
        // words), so it is both A's neighbor and a seed in its own right.
        let seeds = retriever.select_seeds(&query);
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0], ScoredNode::new("a", 1.0));
        assert_eq!(seeds[1], ScoredNode::new("b", 0.5));

        let records = retriever.retrieve(&query).unwrap();
        assert_eq!(
            records,
            vec![
                ResultRecord::seed(NodeId::from("a"), 1.0, "hak asasi manusia".to_string()),
                ResultRecord::article(
                    NodeId::from("a"),
                    NodeId::from("b"),
                    "miripDengan",
                    Some(0.8),
                    "hak warga negara".to_string(),
                ),
                ResultRecord::seed(NodeId::from("b"), 0.5, "hak warga negara".to_string()),
            ]
        );
        assert!(records.iter().all(|r| r.to_node.as_str() != "c"));
    }

    #[test]
    fn depth_zero_still_emits_direct_neighbors() {
        let mut graph = scenario_graph();
        graph.add_node("d", article("kewajiban dasar manusia"));
        graph
            .set_edge("b", "d", EdgeData::new("miripDengan").with_weight(0.9))
            .unwrap();

        let retriever = Retriever::new(&graph).with_schema(statutory());
        // Threshold 0.6 leaves A as the only seed.
        let query = Query::new("hak asasi").with_threshold(0.6).with_max_depth(0);

        let records = retriever.retrieve(&query).unwrap();
        assert_eq!(
            records,
            vec![
                ResultRecord::seed(NodeId::from("a"), 1.0, "hak asasi manusia".to_string()),
                ResultRecord::article(
                    NodeId::from("a"),
                    NodeId::from("b"),
                    "miripDengan",
                    Some(0.8),
                    "hak warga negara".to_string(),
                ),
            ]
        );
        // B was dequeued past the depth limit, so its own neighbors stay out.
        assert!(records.iter().all(|r| r.to_node.as_str() != "d"));
    }

    #[test]
    fn reference_edges_propagate_without_content() {
        let mut graph = PetCorpusGraph::new();
        graph.add_node("a", NodeData::new().with_content("hak asasi"));
        graph.add_node("u", NodeData::new());
        graph.add_node("v", NodeData::new());
        graph.set_edge("a", "u", EdgeData::new("mengingat")).unwrap();
        graph.set_edge("u", "v", EdgeData::new("mengingat")).unwrap();

        let retriever = Retriever::new(&graph).with_schema(statutory());
        let query = Query::new("hak asasi").with_threshold(0.5).with_max_depth(2);

        let records = retriever.retrieve(&query).unwrap();
        assert_eq!(
            records,
            vec![
                ResultRecord::seed(NodeId::from("a"), 1.0, "hak asasi".to_string()),
                ResultRecord::reference(NodeId::from("a"), NodeId::from("u"), "mengingat"),
                ResultRecord::reference(NodeId::from("u"), NodeId::from("v"), "mengingat"),
            ]
        );
    }

    #[test]
    fn unmatched_neighbors_are_pruned_silently() {
        let mut graph = PetCorpusGraph::new();
        graph.add_node("a", NodeData::new().with_content("hak asasi"));
        graph.add_node("x", NodeData::new());
        graph.add_node("y", article("hak hak hak"));
        graph.set_edge("a", "x", EdgeData::new("dasarHukum")).unwrap();
        graph
            .set_edge("x", "y", EdgeData::new("miripDengan").with_weight(0.9))
            .unwrap();

        let retriever = Retriever::new(&graph).with_schema(statutory());
        let query = Query::new("hak asasi").with_threshold(0.9).with_max_depth(5);

        // X is neither article-like nor referenced, so the frontier dies
        // there and Y stays unreachable.
        let records = retriever.retrieve(&query).unwrap();
        assert_eq!(
            records,
            vec![ResultRecord::seed(
                NodeId::from("a"),
                1.0,
                "hak asasi".to_string()
            )]
        );
    }

    #[test]
    fn article_check_precedes_reference_check() {
        let mut graph = PetCorpusGraph::new();
        graph.add_node("a", NodeData::new().with_content("hak asasi"));
        graph.add_node("b", article("ketentuan penutup"));
        graph
            .set_edge("a", "b", EdgeData::new("mengingat").with_weight(0.7))
            .unwrap();

        let retriever = Retriever::new(&graph).with_schema(statutory());
        let query = Query::new("hak asasi").with_threshold(0.9).with_max_depth(1);

        let records = retriever.retrieve(&query).unwrap();
        // An article reached over a reference edge keeps its content, and
        // the weight does not count as a score (not a similarity edge).
        assert_eq!(
            records[1],
            ResultRecord::article(
                NodeId::from("a"),
                NodeId::from("b"),
                "mengingat",
                None,
                "ketentuan penutup".to_string(),
            )
        );
    }

    #[test]
    fn similarity_edge_without_weight_scores_null() {
        let mut graph = PetCorpusGraph::new();
        graph.add_node("a", NodeData::new().with_content("hak asasi"));
        graph.add_node("b", article("hak pilih"));
        graph.set_edge("a", "b", EdgeData::new("miripDengan")).unwrap();

        let retriever = Retriever::new(&graph).with_schema(statutory());
        let query = Query::new("hak asasi").with_threshold(0.9).with_max_depth(1);

        let records = retriever.retrieve(&query).unwrap();
        assert_eq!(records[1].similarity_score, None);
        assert_eq!(records[1].relation, "miripDengan");
    }

    #[test]
    fn cycles_terminate_with_a_single_expansion() {
        let mut graph = PetCorpusGraph::new();
        graph.add_node("a", NodeData::new().with_content("hak asasi"));
        graph.add_node("b", article("penjelasan umum"));
        graph
            .set_edge("a", "b", EdgeData::new("miripDengan").with_weight(0.8))
            .unwrap();
        graph
            .set_edge("b", "a", EdgeData::new("miripDengan").with_weight(0.8))
            .unwrap();

        let retriever = Retriever::new(&graph).with_schema(statutory());
        let query = Query::new("hak asasi").with_threshold(0.9).with_max_depth(10);

        let records = retriever.retrieve(&query).unwrap();
        // Seed record plus one hop; the back-edge to A is already visited.
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn converging_paths_expand_a_node_once() {
        let mut graph = PetCorpusGraph::new();
        graph.add_node("a", NodeData::new().with_content("hak asasi"));
        for id in ["b", "c", "d", "e"] {
            graph.add_node(id, article("penjelasan"));
        }
        for (from, to) in [("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("d", "e")] {
            graph
                .set_edge(from, to, EdgeData::new("miripDengan").with_weight(0.5))
                .unwrap();
        }

        let retriever = Retriever::new(&graph).with_schema(statutory());
        let query = Query::new("hak asasi").with_threshold(0.9).with_max_depth(10);

        let records = retriever.retrieve(&query).unwrap();
        // D is scanned from both B and C before its first dequeue, so its
        // record appears twice; its own children are emitted only once.
        let to_d = records.iter().filter(|r| r.to_node.as_str() == "d").count();
        let to_e = records.iter().filter(|r| r.to_node.as_str() == "e").count();
        assert_eq!(to_d, 2);
        assert_eq!(to_e, 1);
        assert_eq!(records.len(), 6);
    }

    #[test]
    fn global_cap_spans_all_seeds() {
        let mut graph = PetCorpusGraph::new();
        graph.add_node("s1", NodeData::new().with_content("alpha beta"));
        graph.add_node("s2", NodeData::new().with_content("alpha"));
        graph.add_node("n1", article("lorem ipsum"));
        graph.add_node("n2", article("dolor sit"));
        graph
            .set_edge("s1", "n1", EdgeData::new("miripDengan").with_weight(0.9))
            .unwrap();
        graph
            .set_edge("s2", "n2", EdgeData::new("miripDengan").with_weight(0.9))
            .unwrap();

        let retriever = Retriever::new(&graph).with_schema(statutory());
        let query = Query::new("alpha beta")
            .with_threshold(0.3)
            .with_max_depth(3)
            .with_max_results(3);

        let records = retriever.retrieve(&query).unwrap();
        // The third record (S2's own) hits the cap, so S2 never expands.
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].to_node.as_str(), "s1");
        assert_eq!(records[1].to_node.as_str(), "n1");
        assert_eq!(records[2].to_node.as_str(), "s2");
        assert!(records[2].is_seed());
    }

    #[test]
    fn cap_of_zero_emits_only_the_first_seed_record() {
        let graph = scenario_graph();
        let retriever = Retriever::new(&graph).with_schema(statutory());
        let query = Query::new("hak asasi")
            .with_threshold(0.3)
            .with_max_results(0);

        let records = retriever.retrieve(&query).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].is_seed());
        assert_eq!(records[0].to_node.as_str(), "a");
    }

    #[test]
    fn cap_stops_mid_neighbor_scan() {
        let mut graph = PetCorpusGraph::new();
        graph.add_node("a", NodeData::new().with_content("hak asasi"));
        for id in ["b", "c", "d"] {
            graph.add_node(id, article("penjelasan"));
        }
        for id in ["b", "c", "d"] {
            graph
                .set_edge("a", id, EdgeData::new("miripDengan").with_weight(0.5))
                .unwrap();
        }

        let retriever = Retriever::new(&graph).with_schema(statutory());
        let query = Query::new("hak asasi")
            .with_threshold(0.9)
            .with_max_results(2);

        let records = retriever.retrieve(&query).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].to_node.as_str(), "b");
    }

    #[test]
    fn seeds_do_not_share_visited_state() {
        let mut graph = PetCorpusGraph::new();
        graph.add_node("s1", NodeData::new().with_content("alpha beta"));
        graph.add_node("s2", NodeData::new().with_content("alpha gamma"));
        graph.add_node("shared", article("penjelasan"));
        graph
            .set_edge("s1", "shared", EdgeData::new("miripDengan").with_weight(0.4))
            .unwrap();
        graph
            .set_edge("s2", "shared", EdgeData::new("miripDengan").with_weight(0.6))
            .unwrap();

        let retriever = Retriever::new(&graph).with_schema(statutory());
        let query = Query::new("alpha").with_threshold(0.5).with_max_depth(1);

        let records = retriever.retrieve(&query).unwrap();
        let hits: Vec<&ResultRecord> = records
            .iter()
            .filter(|r| r.to_node.as_str() == "shared")
            .collect();
        assert_eq!(hits.len(), 2, "each seed reaches the shared node afresh");
        assert_eq!(hits[0].similarity_score, Some(0.4));
        assert_eq!(hits[1].similarity_score, Some(0.6));
    }

    #[test]
    fn empty_seed_list_produces_no_records() {
        let graph = scenario_graph();
        let retriever = Retriever::new(&graph).with_schema(statutory());
        let records = retriever.traverse(&[], &Query::new("hak asasi")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn hand_built_seed_without_content_defaults_to_empty() {
        let mut graph = PetCorpusGraph::new();
        graph.add_node("bare", NodeData::new());

        let retriever = Retriever::new(&graph).with_schema(statutory());
        let records = retriever
            .traverse(&[ScoredNode::new("bare", 0.0)], &Query::new(""))
            .unwrap();
        assert_eq!(records[0].content.as_deref(), Some(""));
    }

    #[test]
    fn unknown_seed_fails_fast() {
        let graph = scenario_graph();
        let retriever = Retriever::new(&graph).with_schema(statutory());
        let err = retriever
            .traverse(&[ScoredNode::new("ghost", 1.0)], &Query::new("hak"))
            .unwrap_err();
        assert!(matches!(err, LexgraphError::UnknownNode(id) if id.as_str() == "ghost"));
    }

    /// Misreports a neighbor it cannot back with an edge.
    struct LyingGraph {
        a: NodeData,
        b: NodeData,
    }

    impl CorpusGraph for LyingGraph {
        fn node(&self, id: &NodeId) -> Option<&NodeData> {
            match id.as_str() {
                "a" => Some(&self.a),
                "b" => Some(&self.b),
                _ => None,
            }
        }

        fn nodes(&self) -> Vec<(NodeId, &NodeData)> {
            vec![
                (NodeId::from("a"), &self.a),
                (NodeId::from("b"), &self.b),
            ]
        }

        fn neighbors(&self, id: &NodeId) -> Vec<NodeId> {
            if id.as_str() == "a" {
                vec![NodeId::from("b")]
            } else {
                Vec::new()
            }
        }

        fn edge(&self, _from: &NodeId, _to: &NodeId) -> Option<&EdgeData> {
            None
        }

        fn node_count(&self) -> usize {
            2
        }

        fn edge_count(&self) -> usize {
            0
        }
    }

    #[test]
    fn neighbor_without_resolvable_edge_fails_fast() {
        let graph = LyingGraph {
            a: NodeData::new().with_content("hak asasi"),
            b: NodeData::new(),
        };

        let retriever = Retriever::new(&graph).with_schema(statutory());
        let err = retriever
            .traverse(&[ScoredNode::new("a", 1.0)], &Query::new("hak asasi"))
            .unwrap_err();
        assert!(matches!(
            err,
            LexgraphError::UnknownEdge { from, to }
                if from.as_str() == "a" && to.as_str() == "b"
        ));
    }

    #[test]
    fn retrieve_rejects_bad_thresholds_before_seeding() {
        let graph = scenario_graph();
        let retriever = Retriever::new(&graph).with_schema(statutory());

        for bad in [1.5, -0.1, f64::NAN] {
            let err = retriever
                .retrieve(&Query::new("hak").with_threshold(bad))
                .unwrap_err();
            assert!(matches!(err, LexgraphError::InvalidParameter { .. }));
        }
    }

    #[test]
    fn bounded_sink_is_terminal_at_capacity() {
        let mut sink = BoundedSink::new(2);
        assert!(sink.push(ResultRecord::seed(NodeId::from("a"), 1.0, String::new())));
        assert!(!sink.push(ResultRecord::seed(NodeId::from("b"), 1.0, String::new())));
        assert_eq!(sink.into_records().len(), 2);

        // Capacity zero still keeps the one unconditional append.
        let mut sink = BoundedSink::new(0);
        assert!(!sink.push(ResultRecord::seed(NodeId::from("a"), 1.0, String::new())));
        assert_eq!(sink.into_records().len(), 1);
    }
}
