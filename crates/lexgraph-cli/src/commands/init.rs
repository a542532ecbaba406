//! Initialize a new lexgraph project.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::config::Config;

/// A minimal corpus in the default (English) schema, enough to try the
/// query command against.
const SAMPLE_CORPUS: &str = r#"{
    "nodes": [
        {"id": "act-12/art-1", "partType": "Article", "content": "freedom of assembly and association"},
        {"id": "act-12/art-2", "partType": "Article", "content": "freedom of peaceful assembly"},
        {"id": "act-12/ch-1", "partType": "Chapter"},
        {"id": "act-9", "content": null}
    ],
    "edges": [
        {"from": "act-12/art-1", "to": "act-12/art-2", "relation": "similarTo", "weight": 0.72},
        {"from": "act-12/art-1", "to": "act-9", "relation": "references"}
    ]
}
"#;

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = path
        .map(|p| Path::new(&p).to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap());

    println!("{} Initializing lexgraph project...", "→".blue());

    // Create the results directory
    let config = Config::default();
    let results_dir = base_path.join(&config.report.results_dir);
    std::fs::create_dir_all(&results_dir)
        .with_context(|| format!("Failed to create {}", results_dir.display()))?;
    println!("  {} Created {}", "✓".green(), results_dir.display());

    // Keep generated reports out of version control
    let gitignore_path = results_dir.join(".gitignore");
    if !gitignore_path.exists() {
        std::fs::write(&gitignore_path, "*.txt\n*.json\n")?;
        println!("  {} Created {}", "✓".green(), gitignore_path.display());
    }

    // Create default config
    let config_path = base_path.join("lexgraph.toml");
    if !config_path.exists() {
        config.save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
    }

    // Create a sample corpus
    let sample_path = base_path.join("corpus.sample.json");
    if !sample_path.exists() {
        std::fs::write(&sample_path, SAMPLE_CORPUS)
            .with_context(|| format!("Failed to write {}", sample_path.display()))?;
        println!("  {} Created {}", "✓".green(), sample_path.display());
    }

    println!();
    println!("{} Lexgraph project initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!(
        "  {} lexgraph query \"freedom of assembly\" --corpus corpus.sample.json",
        "1.".blue()
    );
    println!("  {} lexgraph stats --corpus corpus.sample.json", "2.".blue());
    println!("  {} point [corpus].path in lexgraph.toml at your corpus", "3.".blue());

    Ok(())
}
