// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The pattern-matching leaf everything else stands on.
//!
//! `TextIndex` owns the corpus and a suffix array over its bytes. It answers
//! two questions, both in byte offsets:
//!
//! | Query                 | Backed by        | Cost                 |
//! |-----------------------|------------------|----------------------|
//! | `all_occurrences(s)`  | suffix array     | O(|s| log n + k)     |
//! | `all_matches(regex)`  | linear regex scan| O(n)                 |
//!
//! Byte offsets from both agree with each other and with `str` slicing, so a
//! document span, a token span and a regex match can be compared directly.

use super::sais::build_suffix_array;
use crate::types::Span;
use regex::Regex;

/// The corpus plus its suffix array. Immutable once built.
#[derive(Debug)]
pub struct TextIndex {
    text: String,
    suffix_array: Vec<usize>,
}

impl TextIndex {
    /// Build the suffix array over `text`. Linear time (SA-IS).
    pub fn new(text: String) -> Self {
        let suffix_array = build_suffix_array(text.as_bytes());
        TextIndex { text, suffix_array }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn suffix_array(&self) -> &[usize] {
        &self.suffix_array
    }

    /// The corpus text of a span.
    ///
    /// Spans produced by this crate always fall on char boundaries.
    #[inline]
    pub fn slice(&self, span: Span) -> &str {
        &self.text[span.start..span.end]
    }

    /// All non-overlapping matches of `pattern`, in corpus order.
    pub fn all_matches(&self, pattern: &Regex) -> Vec<Span> {
        pattern
            .find_iter(&self.text)
            .map(|m| Span::new(m.start(), m.end()))
            .collect()
    }

    /// Start offsets of every occurrence of `literal`, ascending.
    ///
    /// Occurrences may overlap ("aa" occurs twice in "aaa"). The empty literal
    /// has no occurrences.
    pub fn all_occurrences(&self, literal: &str) -> Vec<usize> {
        let needle = literal.as_bytes();
        if needle.is_empty() {
            return Vec::new();
        }

        let bytes = self.text.as_bytes();
        // Suffixes with `needle` as a prefix form one contiguous run of the
        // suffix array. Truncating a sorted sequence keeps it sorted, which makes
        // both predicates monotone.
        let lo = self
            .suffix_array
            .partition_point(|&pos| &bytes[pos..] < needle);
        let hi = self.suffix_array.partition_point(|&pos| {
            let suffix = &bytes[pos..];
            &suffix[..suffix.len().min(needle.len())] <= needle
        });

        let mut offsets = self.suffix_array[lo..hi.max(lo)].to_vec();
        offsets.sort_unstable();
        offsets
    }
}
