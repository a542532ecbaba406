//! Query a corpus graph.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use lexgraph::prelude::*;

use crate::config::Config;
use crate::report;

#[derive(Args)]
pub struct QueryArgs {
    /// Search query
    pub query: String,

    /// Corpus file to load (default: from lexgraph.toml)
    #[arg(short, long)]
    pub corpus: Option<String>,

    /// Minimum seed similarity in [0, 1] (default: from config)
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Traversal depth limit per seed (default: from config)
    #[arg(short = 'd', long)]
    pub max_depth: Option<usize>,

    /// Maximum number of seed nodes (default: from config)
    #[arg(long)]
    pub max_seeds: Option<usize>,

    /// Result cap shared across all seeds (default: from config)
    #[arg(short = 'n', long)]
    pub max_results: Option<usize>,

    /// Output format: grouped, flat, or json
    #[arg(short, long, default_value = "grouped")]
    pub format: String,

    /// Also save the report to this file under the results directory
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn run(args: QueryArgs) -> Result<()> {
    if !matches!(args.format.as_str(), "grouped" | "flat" | "json") {
        bail!("Unknown format: {}. Use grouped, flat, or json.", args.format);
    }

    let config = Config::load()?;

    let corpus_path = args.corpus.unwrap_or_else(|| config.corpus.path.clone());
    let graph = load_corpus(&corpus_path)
        .with_context(|| format!("Failed to load corpus: {corpus_path}"))?;

    let query = Query::new(&args.query)
        .with_threshold(args.threshold.unwrap_or(config.query.similarity_threshold))
        .with_max_depth(args.max_depth.unwrap_or(config.query.max_depth))
        .with_max_seeds(args.max_seeds.unwrap_or(config.query.max_seeds))
        .with_max_results(args.max_results.unwrap_or(config.query.max_results));

    let records = Retriever::new(&graph)
        .with_schema(config.schema.clone())
        .retrieve(&query)?;

    if records.is_empty() {
        println!(
            "{} No results found for: {}",
            "•".yellow(),
            args.query.cyan()
        );
        return Ok(());
    }

    match args.format.as_str() {
        "flat" => report::print_flat(&records),
        "json" => println!("{}", report::json_text(&records)?),
        _ => report::print_grouped(&records),
    }

    if let Some(file_name) = &args.output {
        let content = match args.format.as_str() {
            "flat" => report::flat_text(&records),
            "json" => report::json_text(&records)?,
            _ => report::grouped_text(&records),
        };
        let path = report::save(&config.report.results_dir, file_name, &content)?;
        println!();
        println!(
            "{} Saved report to {}",
            "✓".green(),
            path.display().to_string().cyan()
        );
    }

    println!();
    println!(
        "{} {} records",
        "✓".green(),
        records.len().to_string().cyan()
    );

    Ok(())
}
