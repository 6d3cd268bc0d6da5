// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use folio::{Searcher, SearcherConfig};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, Cli, Commands, Mode};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SearcherConfig::with_ngram_order(cli.ngrams);
    let searcher = load_with_spinner(&cli, config)?;

    match cli.command {
        Commands::Search {
            query,
            mode,
            limit,
            json,
        } => match mode {
            Mode::Ranked => {
                let hits = searcher.search_ranked(&query);
                if json {
                    print_json(&hits[..hits.len().min(limit)])?;
                } else {
                    display::print_ranked(&query, &hits, limit);
                }
            }
            Mode::Phrase => {
                let hits = searcher.search_phrase(&query);
                if json {
                    print_json(&hits[..hits.len().min(limit)])?;
                } else {
                    display::print_phrase(&query, &hits, limit);
                }
            }
            Mode::Literal => {
                let hits = searcher.search_literal(&query);
                if json {
                    print_json(&hits[..hits.len().min(limit)])?;
                } else {
                    display::print_literal(&query, &hits, limit);
                }
            }
        },
        Commands::Inspect { json } => {
            let stats = searcher.stats();
            if json {
                print_json(&stats)?;
            } else {
                display::print_stats(&stats);
            }
        }
    }

    Ok(())
}

/// Load the corpus, with a spinner on stderr while the index builds.
fn load_with_spinner(cli: &Cli, config: SearcherConfig) -> Result<Searcher> {
    let spinner = atty::is(atty::Stream::Stderr).then(|| {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}") {
            pb.set_style(style);
        }
        pb.set_message(format!("indexing {}", cli.corpus.display()));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let loaded = Searcher::load_file(&cli.corpus, config)
        .with_context(|| format!("could not build an index from {}", cli.corpus.display()));

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    loaded
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to encode results")?;
    println!("{}", out);
    Ok(())
}
