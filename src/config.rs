// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build-time knobs for a `Searcher`.

use crate::error::LoadError;
use serde::Deserialize;

/// Default longest phrase, in tokens, that gets its own TF entry.
pub const DEFAULT_NGRAM_ORDER: usize = 5;

/// Configuration fixed for the lifetime of a `Searcher`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearcherConfig {
    /// Longest n-gram counted at index time and boosted at query time.
    /// `1` disables phrase boosting.
    pub ngram_order: usize,
}

impl Default for SearcherConfig {
    fn default() -> Self {
        SearcherConfig {
            ngram_order: DEFAULT_NGRAM_ORDER,
        }
    }
}

impl SearcherConfig {
    pub fn with_ngram_order(ngram_order: usize) -> Self {
        SearcherConfig { ngram_order }
    }

    pub fn validate(&self) -> Result<(), LoadError> {
        if self.ngram_order == 0 {
            return Err(LoadError::InvalidConfig(
                "ngram order must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
