// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query entry points.
//!
//! `Searcher` is built once and then only read. Three kinds of query run
//! against it:
//!
//! - **ranked**: TF-IDF over documents with n-gram boosting
//! - **phrase**: paragraphs matching the query text, tagged with where they sit
//! - **literal**: every exact occurrence with surrounding context

mod searcher;
pub mod literal;
pub mod phrase;
pub mod ranked;

pub use searcher::*;
