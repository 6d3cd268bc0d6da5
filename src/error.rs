// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Load-phase failures. Queries never fail, so this is the only error type.

use std::path::PathBuf;
use thiserror::Error;

/// Why a `Searcher` could not be built. Any of these aborts startup; no
/// partially built index is ever handed out.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read corpus {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus is not valid UTF-8 (first invalid byte at offset {offset})")]
    InvalidUtf8 { offset: usize },

    #[error("pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
