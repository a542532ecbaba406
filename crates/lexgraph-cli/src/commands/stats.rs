//! Show corpus statistics.

use anyhow::{Context, Result};
use colored::Colorize;

use lexgraph::prelude::*;

use crate::config::Config;

pub fn run(corpus: Option<String>) -> Result<()> {
    let config = Config::load()?;

    let corpus_path = corpus.unwrap_or_else(|| config.corpus.path.clone());
    let graph = load_corpus(&corpus_path)
        .with_context(|| format!("Failed to load corpus: {corpus_path}"))?;

    // Tally node kinds under the configured schema
    let mut with_content = 0;
    let mut article_like = 0;
    for (_, data) in graph.nodes() {
        if data.content.is_some() {
            with_content += 1;
        }
        if config.schema.is_article(data.part_type.as_deref()) {
            article_like += 1;
        }
    }

    println!("{}", "Corpus Statistics".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("{}", "Graph Structure".blue().bold());
    println!("  Corpus file:       {}", corpus_path.cyan());
    println!(
        "  Total nodes:       {}",
        graph.node_count().to_string().cyan()
    );
    println!(
        "  Total edges:       {}",
        graph.edge_count().to_string().cyan()
    );
    println!();

    println!("{}", "Node Kinds".blue().bold());
    println!(
        "  With content:      {}",
        with_content.to_string().cyan()
    );
    println!(
        "  Article-like:      {} (marker: {})",
        article_like.to_string().cyan(),
        config.schema.article_marker
    );
    println!();

    println!("{}", "Relations".blue().bold());
    let counts = graph.relation_counts();
    if counts.is_empty() {
        println!("  (no edges)");
    } else {
        for (relation, count) in counts {
            let label = if relation.is_empty() {
                "(unlabeled)".to_string()
            } else {
                relation
            };
            println!("  {:<18} {}", label, count.to_string().cyan());
        }
    }

    println!();
    println!("{}", "═".repeat(40).dimmed());

    Ok(())
}
