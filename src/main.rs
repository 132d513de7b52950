//! Sitesage main entry point
//!
//! Crawls the given seed URLs, then drops into an interactive loop answering
//! free-text questions against the first seed's collection.

use anyhow::Context;
use clap::Parser;
use sitesage::config::{load_config_with_hash, Config};
use sitesage::crawler::Crawler;
use sitesage::embedder::HttpEmbedder;
use sitesage::index::SqliteIndex;
use sitesage::query::QueryEngine;
use sitesage::url::collection_name;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

/// Sitesage: crawl a site, embed its pages, and ask it questions
#[derive(Parser, Debug)]
#[command(name = "sitesage")]
#[command(version)]
#[command(about = "Crawl a site into a vector index and query it", long_about = None)]
struct Cli {
    /// One or more seed URLs, comma-separated
    #[arg(value_name = "SEEDS")]
    seeds: String,

    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured maximum crawl depth
    #[arg(long, value_name = "DEPTH")]
    max_depth: Option<u32>,

    /// Skip the interactive question loop after crawling
    #[arg(long)]
    no_query: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) =
                load_config_with_hash(path).context("failed to load configuration")?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    let seeds: Vec<String> = cli
        .seeds
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    anyhow::ensure!(!seeds.is_empty(), "no seed URLs given");

    let max_depth = cli.max_depth.unwrap_or(config.crawler.max_depth);

    // Construct the collaborators once; crawler and query engine share them.
    let embedder = Arc::new(HttpEmbedder::new(&config.embedder)?);
    let store = SqliteIndex::open(Path::new(&config.index.database_path))
        .context("failed to open index database")?;
    let store: Arc<Mutex<dyn sitesage::IndexStore>> = Arc::new(Mutex::new(store));

    let crawler = Crawler::new(config, embedder.clone(), store.clone())?;
    let summary = crawler.crawl(&seeds, max_depth).await?;

    println!(
        "Total number of unique URLs found: {}",
        summary.urls_visited
    );

    if cli.no_query {
        return Ok(());
    }

    let collection = collection_name(&seeds[0])?;
    let engine = QueryEngine::new(embedder, store);
    run_query_loop(&engine, &collection).await?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitesage=info,warn"),
            1 => EnvFilter::new("sitesage=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Interactive read loop: one question per line, "exit" terminates
async fn run_query_loop(engine: &QueryEngine, collection: &str) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("Ask a question (or type 'exit' to quit): ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF behaves like "exit"
            break;
        }

        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("exit") {
            break;
        }

        match engine.answer(question, collection).await {
            Ok(Some(result)) => {
                println!("Best Match:");
                println!("{}", result.text);
                println!("Source URL:");
                println!("{}", result.url);
            }
            Ok(None) => {
                println!("No relevant information found.");
            }
            Err(e) => {
                tracing::error!("Query failed: {}", e);
            }
        }
    }

    Ok(())
}
