// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Two subcommands: `search` to query the corpus in one of three modes, and
//! `inspect` to print index statistics. The corpus path and n-gram order are
//! global and can come from the environment, so a shell session can point at
//! a corpus once and then run many queries.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use folio::DEFAULT_NGRAM_ORDER;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "TF-IDF and phrase search over a literary corpus",
    version
)]
pub struct Cli {
    /// Corpus text file (UTF-8, blank lines between documents)
    #[arg(long, env = "FOLIO_CORPUS", global = true, default_value = "completeworks.txt")]
    pub corpus: PathBuf,

    /// Longest phrase, in words, indexed for ranking boosts
    #[arg(long, env = "FOLIO_NGRAMS", global = true, default_value_t = DEFAULT_NGRAM_ORDER)]
    pub ngrams: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the corpus and display results
    Search {
        /// Search query
        query: String,

        /// How to interpret the query
        #[arg(short, long, value_enum, default_value_t = Mode::Ranked)]
        mode: Mode,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Print statistics and the fingerprint of the built index
    Inspect {
        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// TF-IDF ranked documents
    Ranked,
    /// Paragraphs containing the phrase, with act/scene/play or sonnet
    Phrase,
    /// Exact occurrences with surrounding text
    Literal,
}
