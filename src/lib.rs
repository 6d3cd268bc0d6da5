// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked and phrase search over a single literary corpus.
//!
//! The corpus is loaded once, split into documents at blank lines, tokenized,
//! and indexed. Queries then run against the immutable result.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────── index ─────────────────────────────┐
//! │  text (suffix array) ─► segment ─► tokenize ─► inverted (TF/DF) │
//! └──────────────┬───────────────────────────────────────┬─────────┘
//!                ▼                                       ▼
//!          structure                                 scoring
//!   (act/scene/play/sonnet)                        (TF-IDF math)
//!                │                                       │
//!                └──────────────► search ◄───────────────┘
//!                        ranked · phrase · literal
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use folio::{Searcher, SearcherConfig};
//!
//! let searcher = Searcher::load_file("completeworks.txt", SearcherConfig::default())?;
//!
//! for hit in searcher.search_ranked("love is not love").iter().take(3) {
//!     println!("{:.4} {}", hit.score, hit.snippet);
//! }
//! for hit in searcher.search_phrase("to be or not to be") {
//!     println!("{:?} {:?}", hit.play, hit.lines);
//! }
//! ```
//!
//! # Verification
//!
//! Build-phase invariants are checked by `verify::contracts` in debug builds
//! before a `Searcher` is returned.

pub mod config;
pub mod error;
pub mod index;
pub mod scoring;
pub mod search;
pub mod structure;
pub mod types;
pub mod utils;
pub mod verify;

#[doc(hidden)]
pub mod testing;

pub use config::{SearcherConfig, DEFAULT_NGRAM_ORDER};
pub use error::LoadError;
pub use search::Searcher;
pub use structure::StructuralLocator;
pub use types::{
    Boundary, IndexStats, LiteralHit, Location, PhraseHit, PlayContext, RankedHit, Span, Token,
};
pub use utils::normalize;
