// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;

use castlens::config::Config;
use castlens::logging::init_tracing;
use castlens::repository::CastRepository;

mod cli;
use cli::display;
use cli::{Cli, Commands, SearchArgs};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // clap already folded DATA_FILE_PATH into `--data`.
    let config = Config::resolve(cli.data, None);
    let repo = CastRepository::from_config(&config);

    match cli.command {
        Commands::Search(args) => run_search(&repo, &args).await,
        Commands::Stats { json } => run_stats(&repo, json).await,
    }
}

async fn run_search(repo: &CastRepository, args: &SearchArgs) -> Result<()> {
    let filters = args.to_filters();
    let response = repo
        .search(&filters)
        .await
        .context("search failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let offset = filters.page_offset();
    display::print_summary(response.total, offset, response.results.len());
    for (i, cast) in response.results.iter().enumerate() {
        display::print_card(offset + i + 1, cast);
    }
    if let Some(suggestions) = &response.suggestions {
        display::print_suggestions(suggestions);
    }
    if response.total > 0 {
        display::print_facets(&response.facets);
    }
    Ok(())
}

async fn run_stats(repo: &CastRepository, json: bool) -> Result<()> {
    let stats = repo
        .stats()
        .await
        .with_context(|| format!("could not load {}", repo.path().display()))?;
    if json {
        println!("{}", serde_json::to_string(&stats)?);
    } else {
        println!("{} casts in {}", stats.total, repo.path().display());
    }
    Ok(())
}
