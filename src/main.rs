// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use savor::{verify_index, Catalog, EngineConfig, SearchEngine};

mod cli;
use cli::{display, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so `--json` output stays clean
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.engine_config();

    match cli.command {
        Commands::Search {
            catalog,
            query,
            limit,
            json,
        } => run_search(&catalog, config, &query, limit, json).await,
        Commands::Inspect { catalog } => run_inspect(&catalog, config).await,
        Commands::Repl { catalog, limit } => run_repl(&catalog, config, limit).await,
    }
}

fn open_engine(path: &Path, config: EngineConfig) -> Result<SearchEngine<Catalog>> {
    let catalog = Catalog::from_path(path)?;
    info!(
        path = %path.display(),
        restaurants = catalog.restaurants.len(),
        "Catalog loaded"
    );
    Ok(SearchEngine::new(catalog, config))
}

async fn run_search(
    path: &Path,
    config: EngineConfig,
    query: &str,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let engine = open_engine(path, config)?;
    engine
        .ensure_ready()
        .await
        .context("failed to build search index")?;

    let start = Instant::now();
    let results = engine.search(query, limit).await?;
    let elapsed = start.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        display::print_results(query, &results, elapsed);
    }
    Ok(())
}

async fn run_inspect(path: &Path, config: EngineConfig) -> Result<()> {
    let engine = open_engine(path, config)?;
    let index = engine
        .ensure_ready()
        .await
        .context("failed to build search index")?;

    if let Some(report) = engine.last_report() {
        display::print_report(&report);
    }
    let verification = verify_index(&index).context("index failed verification")?;
    display::print_verification(&verification);
    Ok(())
}

async fn run_repl(path: &Path, config: EngineConfig, limit: Option<usize>) -> Result<()> {
    let engine = open_engine(path, config)?;
    engine
        .ensure_ready()
        .await
        .context("failed to build search index")?;
    if let Some(report) = engine.last_report() {
        eprintln!("{}", report);
    }
    eprintln!("Type a query, ':rebuild' to reload menus, or Ctrl-D to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let query = line.trim();
        match query {
            "" => continue,
            ":rebuild" => {
                let index = engine.rebuild().await.context("rebuild failed")?;
                eprintln!("Rebuilt: {} records", index.len());
            }
            _ => {
                let start = Instant::now();
                let results = engine.search(query, limit).await?;
                display::print_results(query, &results, start.elapsed());
            }
        }
    }
    Ok(())
}
