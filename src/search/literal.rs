// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Literal search: every exact occurrence, straight from the suffix array.

use crate::index::TextIndex;
use crate::types::LiteralHit;
use crate::utils::{ceil_char_boundary, floor_char_boundary};

/// Bytes of context kept on each side of an occurrence.
pub const CONTEXT_BYTES: usize = 250;

/// Occurrences of `query` in corpus order, each with up to [`CONTEXT_BYTES`]
/// before and after it. Context edges are widened to char boundaries, so a hit
/// near a multi-byte character can carry a few extra bytes.
pub fn find_literal(text: &TextIndex, query: &str) -> Vec<LiteralHit> {
    let corpus = text.text();
    text.all_occurrences(query)
        .into_iter()
        .map(|offset| {
            let start = floor_char_boundary(corpus, offset.saturating_sub(CONTEXT_BYTES));
            let end = ceil_char_boundary(corpus, offset + query.len() + CONTEXT_BYTES);
            LiteralHit {
                offset,
                context: corpus[start..end].to_string(),
            }
        })
        .collect()
}
