// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenization: whitespace runs delimit raw tokens, normalization makes terms.
//!
//! ```text
//! "To be, or\r\nnot"
//!  └──┘ └───┘└┘  └─┘
//!   to   be  or   ·   ← "not" has no whitespace after it, so it is not a token
//! ```
//!
//! A raw token is the gap before a whitespace run. Its span ends where the
//! whitespace run ends. Tokens that normalize to nothing ("--", "’") are
//! dropped but the scan continues past them.

use super::text::TextIndex;
use crate::types::{Span, Token};
use crate::utils::normalize;
use regex::Regex;

/// ASCII whitespace runs.
pub const WHITESPACE: &str = r"(?-u:\s)+";

/// Split the corpus into surviving terms, in corpus order.
pub fn tokenize(index: &TextIndex, whitespace: &Regex) -> Vec<Token> {
    let text = index.text();
    let mut tokens = Vec::new();
    let mut start = 0;

    for run in index.all_matches(whitespace) {
        let term = normalize(&text[start..run.start]);
        if !term.is_empty() {
            tokens.push(Token {
                term,
                span: Span::new(start, run.end),
            });
        }
        start = run.end;
    }

    tokens
}

/// Split a query into normalized terms, one per whitespace-separated piece.
///
/// Unlike indexing, empty terms are kept: "to -- be" yields `["to", "", "be"]`
/// so that term scores stay aligned with what the user typed. Empty terms never
/// match anything.
pub fn query_terms(query: &str) -> Vec<String> {
    query.split(char::is_whitespace).map(normalize).collect()
}
