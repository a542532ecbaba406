//! Configuration management for the lexgraph CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use lexgraph::prelude::CorpusSchema;

/// Lexgraph project configuration (`lexgraph.toml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub query: QueryConfig,
    /// Relation labels and the article marker of the corpus. The defaults
    /// fit English-labeled corpora; Indonesian statute corpora set
    /// "miripDengan", "mengingat", "Pasal".
    #[serde(default)]
    pub schema: CorpusSchema,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    #[serde(default = "default_corpus_path")]
    pub path: String,
}

/// Retrieval defaults, overridable per invocation with CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_threshold")]
    pub similarity_threshold: f64,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    #[serde(default = "default_max_seeds")]
    pub max_seeds: usize,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_results_dir")]
    pub results_dir: String,
}

// Default value functions
fn default_corpus_path() -> String { "corpus.json".to_string() }
fn default_threshold() -> f64 { 0.3 }
fn default_max_depth() -> usize { 2 }
fn default_max_seeds() -> usize { 5000 }
fn default_max_results() -> usize { 5000 }
fn default_results_dir() -> String { "results".to_string() }

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus: CorpusConfig::default(),
            query: QueryConfig::default(),
            schema: CorpusSchema::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_threshold(),
            max_depth: default_max_depth(),
            max_seeds: default_max_seeds(),
            max_results: default_max_results(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
        }
    }
}

impl Config {
    /// Load config from lexgraph.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        if let Some(path) = find_config_file() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find lexgraph.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join("lexgraph.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_file_yields_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.corpus.path, "corpus.json");
        assert_eq!(config.query.similarity_threshold, 0.3);
        assert_eq!(config.query.max_depth, 2);
        assert_eq!(config.query.max_results, 5000);
        assert_eq!(config.schema.article_marker, "Article");
        assert_eq!(config.report.results_dir, "results");
    }

    #[test]
    fn partial_config_overrides_only_named_fields() {
        let config: Config = toml::from_str(
            r#"
            [query]
            similarity_threshold = 0.5

            [schema]
            similar_relation = "miripDengan"
            reference_relation = "mengingat"
            article_marker = "Pasal"
            "#,
        )
        .unwrap();
        assert_eq!(config.query.similarity_threshold, 0.5);
        assert_eq!(config.query.max_depth, 2);
        assert_eq!(config.schema.similar_relation, "miripDengan");
        assert_eq!(config.corpus.path, "corpus.json");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.query.max_seeds, config.query.max_seeds);
        assert_eq!(parsed.schema, config.schema);
    }
}
