//! Lexgraph CLI - query statutory corpus graphs from the command line.

mod commands;
mod config;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lexgraph")]
#[command(author, version, about = "Lexgraph - bounded retrieval over statutory corpus graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (engine debug logs)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new lexgraph project
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Query a corpus graph
    Query(commands::query::QueryArgs),

    /// Show corpus statistics
    Stats {
        /// Corpus file to load (default: from lexgraph.toml)
        #[arg(short, long)]
        corpus: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Query(args) => commands::query::run(args),
        Commands::Stats { corpus } => commands::stats::run(corpus),
    }
}
