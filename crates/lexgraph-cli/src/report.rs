//! Rendering of the retrieval record stream.
//!
//! Two text layouts plus raw JSON. The grouped layout separates the seed
//! section from the traversal section and groups traversal records under
//! their source node in first-appearance order. Scores print as `{:.2}`;
//! absent scores and content print as `N/A` rather than being skipped, so
//! a legitimate 0.00 score is never hidden.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use lexgraph::prelude::{NodeId, ResultRecord};

const RULE: &str = "----------------------------------------";

fn score_cell(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{s:.2}"),
        None => "N/A".to_string(),
    }
}

fn content_cell(content: Option<&str>) -> &str {
    content.unwrap_or("N/A")
}

/// Split the stream into seed records and traversal records grouped by
/// source node. Both keep first-appearance order; the stream order within
/// a group is preserved.
fn partition(
    records: &[ResultRecord],
) -> (Vec<&ResultRecord>, Vec<(&NodeId, Vec<&ResultRecord>)>) {
    let mut seeds = Vec::new();
    let mut groups: Vec<(&NodeId, Vec<&ResultRecord>)> = Vec::new();

    for record in records {
        if record.is_seed() {
            seeds.push(record);
        } else if let Some(from) = &record.from_node {
            match groups.iter_mut().find(|(node, _)| *node == from) {
                Some((_, members)) => members.push(record),
                None => groups.push((from, vec![record])),
            }
        }
    }

    (seeds, groups)
}

/// Plain grouped report, the layout written to results files.
pub fn grouped_text(records: &[ResultRecord]) -> String {
    let (seeds, groups) = partition(records);
    let mut out = String::new();

    out.push_str("Initial Query Similarity Results:\n\n");
    for record in seeds {
        out.push_str(&format!("  Initial Node: {}\n", record.to_node));
        out.push_str(&format!(
            "  Similarity Score with Query: {}\n",
            score_cell(record.similarity_score)
        ));
        out.push_str(&format!(
            "  Content: {}\n",
            content_cell(record.content.as_deref())
        ));
        out.push_str(RULE);
        out.push('\n');
    }

    out.push_str("\nGraph Traversal Results:\n\n");
    for (from, members) in groups {
        out.push_str(&format!("From Node: {from}\n"));
        for record in members {
            out.push_str(&format!("  To Node: {}\n", record.to_node));
            out.push_str(&format!("  Relation: {}\n", record.relation));
            out.push_str(&format!(
                "  Similarity Score: {}\n",
                score_cell(record.similarity_score)
            ));
            out.push_str(&format!(
                "  Content: {}\n",
                content_cell(record.content.as_deref())
            ));
            out.push_str(RULE);
            out.push('\n');
        }
    }

    out
}

/// Plain flat report: one block per record in stream order.
pub fn flat_text(records: &[ResultRecord]) -> String {
    let mut out = String::new();

    out.push_str("Traversal Results:\n\n");
    for record in records {
        let from = record
            .from_node
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        out.push_str(&format!("From Node: {from}\n"));
        out.push_str(&format!("To Node: {}\n", record.to_node));
        out.push_str(&format!("Relation: {}\n", record.relation));
        out.push_str(&format!(
            "Similarity Score: {}\n",
            score_cell(record.similarity_score)
        ));
        out.push_str(&format!(
            "Content: {}\n",
            content_cell(record.content.as_deref())
        ));
        out.push_str(RULE);
        out.push('\n');
    }

    out
}

/// Pretty JSON of the raw record stream.
pub fn json_text(records: &[ResultRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("Failed to serialize records")
}

/// Colored grouped report on stdout.
pub fn print_grouped(records: &[ResultRecord]) {
    let (seeds, groups) = partition(records);

    println!("{}", "Initial Query Similarity Results:".blue().bold());
    println!();
    for record in seeds {
        println!("  Initial Node: {}", record.to_node.to_string().cyan());
        println!(
            "  Similarity Score with Query: {}",
            score_cell(record.similarity_score).green()
        );
        println!("  Content: {}", content_cell(record.content.as_deref()));
        println!("{}", RULE.dimmed());
    }

    println!();
    println!("{}", "Graph Traversal Results:".blue().bold());
    println!();
    for (from, members) in groups {
        println!("From Node: {}", from.to_string().cyan().bold());
        for record in members {
            println!("  To Node: {}", record.to_node.to_string().cyan());
            println!("  Relation: {}", record.relation);
            println!(
                "  Similarity Score: {}",
                score_cell(record.similarity_score)
            );
            println!("  Content: {}", content_cell(record.content.as_deref()));
            println!("{}", RULE.dimmed());
        }
    }
}

/// Colored flat report on stdout.
pub fn print_flat(records: &[ResultRecord]) {
    println!("{}", "Traversal Results:".blue().bold());
    println!();
    for record in records {
        let from = record
            .from_node
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        println!("From Node: {}", from.cyan());
        println!("To Node: {}", record.to_node.to_string().cyan());
        println!("Relation: {}", record.relation);
        println!(
            "Similarity Score: {}",
            score_cell(record.similarity_score)
        );
        println!("Content: {}", content_cell(record.content.as_deref()));
        println!("{}", RULE.dimmed());
    }
}

/// Write `content` to `file_name` under `results_dir`, creating the
/// directory if needed. Returns the full path.
pub fn save(results_dir: &str, file_name: &str, content: &str) -> Result<PathBuf> {
    let dir = Path::new(results_dir);
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(file_name);
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
