//! textor CLI - incremental full-text index and search
//!
//! One invocation scans the directory, re-indexes the delta, and answers
//! the supplied terms.

use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use textor::{Config, FingerprintStore, Indexer, InvertedIndex, PlainTextExtractor, QueryEngine};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "textor")]
#[command(author, version, about = "Incremental full-text index and multi-term search", long_about = None)]
struct Cli {
    /// Directory tree to index
    directory: PathBuf,

    /// Terms to find; only files containing all of them match
    #[arg(required = true)]
    terms: Vec<String>,

    /// Directory for persisted index state
    #[arg(long, default_value = "data", env = "TEXTOR_DATA_DIR")]
    data_dir: PathBuf,

    /// Output matching files as JSON
    #[arg(long, env = "TEXTOR_JSON")]
    json: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Validate input before any indexing work.
    if !cli.directory.exists() {
        eprintln!("{} Directory doesn't exist.", "Error:".red().bold());
        std::process::exit(1);
    }
    if !cli.directory.is_dir() {
        eprintln!("{} Path is not a directory.", "Error:".red().bold());
        std::process::exit(1);
    }

    println!("{} {:?}", "Processing".cyan().bold(), cli.directory);

    let config = Config::new(cli.directory).with_data_dir(cli.data_dir);
    config.ensure_data_dir()?;

    let mut fingerprints = FingerprintStore::load(config.fingerprints_path())?;
    let mut index = InvertedIndex::load(config.tokens_path())?;

    let indexer = Indexer::new(config, PlainTextExtractor::new());
    let stats = indexer.run(&mut fingerprints, &mut index)?;
    println!("{} {}", "✓".green(), stats);

    let engine = QueryEngine::new(&index);
    let matches = engine.search(&cli.terms)?;

    if cli.json {
        let files: Vec<&String> = matches.iter().collect();
        println!("{}", serde_json::to_string_pretty(&files)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!(
            "No files contain all terms: {}",
            cli.terms.join(", ").yellow()
        );
        return Ok(());
    }

    println!(
        "\n{} files contain all terms {}:\n",
        matches.len().to_string().green().bold(),
        cli.terms.join(", ").cyan()
    );
    for file in &matches {
        println!("{}", file);
    }

    Ok(())
}
