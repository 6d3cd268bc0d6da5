// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Phrase search: find the paragraph around a quoted line.
//!
//! The query is wrapped in a paragraph pattern: any run of non-blank lines
//! leading up to the matching line, the matching line itself, and the line
//! after it.
//!
//! ```text
//! Let me not to the marriage of true minds      ← preceding lines
//! Admit impediments. Love is not love           ← contains the query
//! Which alters when it alteration finds,        ← following line
//! ```
//!
//! The query is first tried verbatim (case-insensitive). If that finds
//! nothing, its words are tried in order with anything on the same line
//! between them, so "to be or not to be" still finds "To be, or not to be,".

use crate::index::TextIndex;
use crate::types::Span;
use regex::Regex;
use tracing::warn;

/// Separator between words of the bag-of-words fallback: anything on the same
/// line, as little as possible.
const WORD_GAP: &str = r"[^\r\n]*?";

/// Wrap a pattern fragment so the match covers its whole paragraph.
pub fn paragraph_pattern(core: &str) -> String {
    format!(r"(?i)(?:[^\r\n]+\r?\n)*[^\r\n]*{core}[^\r\n]*(?:\r?\n[^\r\n]*)?")
}

/// The query verbatim, trimmed. `None` for a blank query.
pub fn exact_pattern(query: &str) -> Option<String> {
    let query = query.trim();
    (!query.is_empty()).then(|| paragraph_pattern(&regex::escape(query)))
}

/// The query's words in order, separated by anything on the same line.
pub fn bag_of_words_pattern(query: &str) -> Option<String> {
    let words: Vec<String> = query.split_whitespace().map(regex::escape).collect();
    (!words.is_empty()).then(|| paragraph_pattern(&words.join(WORD_GAP)))
}

/// Paragraph spans matching `query`, exact pattern first, then the fallback.
pub fn find_paragraphs(text: &TextIndex, query: &str) -> Vec<Span> {
    let Some(exact) = exact_pattern(query) else {
        return Vec::new();
    };

    let spans = matches_of(text, &exact);
    if !spans.is_empty() {
        return spans;
    }

    match bag_of_words_pattern(query) {
        // A single word produces the same pattern twice.
        Some(bag) if bag != exact => matches_of(text, &bag),
        _ => Vec::new(),
    }
}

fn matches_of(text: &TextIndex, pattern: &str) -> Vec<Span> {
    match Regex::new(pattern) {
        Ok(regex) => text.all_matches(&regex),
        Err(err) => {
            // Escaped input always parses; this is the size limit on huge queries.
            warn!(error = %err, "phrase pattern rejected");
            Vec::new()
        }
    }
}
