// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The shapes that flow between the build phase and the query entry points.
//!
//! Every position in this crate is a byte offset into the corpus. Spans are
//! half-open. Result types derive `Serialize` so a front end can encode them
//! without knowing anything about the index.
//!
//! # Invariants
//!
//! - **Span**: `start <= end <= corpus.len()`. Document spans are never empty
//!   unless the corpus itself is empty.
//! - **Boundary**: tables are sorted ascending by `start`.
//! - **RankedHit**: `score > 0.0`, `term_scores.len()` equals the number of
//!   query tokens.

use serde::Serialize;

// =============================================================================
// OFFSETS
// =============================================================================

/// A half-open byte range `[start, end)` into the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Check if two spans share no byte.
    pub fn non_overlapping(&self, other: &Span) -> bool {
        self.end <= other.start || other.end <= self.start
    }
}

/// A normalized term and the source span of the raw token it came from.
///
/// The span runs from the first byte of the raw token to the end of the
/// whitespace run that terminated it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub term: String,
    pub span: Span,
}

/// One structural marker: an act or scene heading, a play title, a sonnet
/// number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Boundary {
    pub start: usize,
    pub end: usize,
    /// The heading text with line-break artifacts removed.
    pub label: String,
}

// =============================================================================
// STRUCTURAL LOCATION
// =============================================================================

/// Where an offset sits inside a play. Each field is filled independently:
/// a prologue has a play but no act yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayContext {
    pub act: Option<String>,
    pub scene: Option<String>,
    pub play: Option<String>,
}

/// Classification of a corpus offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Location {
    /// Front matter before any sonnet or play.
    Unknown,
    /// Verse territory, inside a numbered sonnet.
    Sonnet { number: String },
    /// Drama territory, at or after the first play title.
    Drama(PlayContext),
}

// =============================================================================
// QUERY RESULTS
// =============================================================================

/// A document that scored above zero for a ranked query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RankedHit {
    /// Index of the document in corpus order.
    pub document: usize,
    pub score: f64,
    /// Unigram count of the document (before short-document padding).
    #[serde(rename = "doc-size")]
    pub document_length: usize,
    /// The literal corpus text of the document span.
    pub snippet: String,
    /// One score per query token position, in query order.
    pub term_scores: Vec<f64>,
}

/// A paragraph that matched a phrase query, with whatever structural metadata
/// applies to its start offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseHit {
    pub offset: usize,
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub act: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sonnet: Option<String>,
}

impl PhraseHit {
    pub fn new(offset: usize, lines: Vec<String>, location: Location) -> Self {
        let mut hit = PhraseHit {
            offset,
            lines,
            act: None,
            scene: None,
            play: None,
            sonnet: None,
        };
        match location {
            Location::Unknown => {}
            Location::Sonnet { number } => hit.sonnet = Some(number),
            Location::Drama(context) => {
                hit.act = context.act;
                hit.scene = context.scene;
                hit.play = context.play;
            }
        }
        hit
    }
}

/// An exact occurrence of a literal query and the text around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiteralHit {
    pub offset: usize,
    pub context: String,
}

/// Summary of a built index, for the `inspect` command and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub corpus_bytes: usize,
    pub documents: usize,
    pub tokens: usize,
    pub vocabulary: usize,
    pub tf_entries: usize,
    pub ngram_order: usize,
    pub acts: usize,
    pub scenes: usize,
    pub plays: usize,
    pub sonnets: usize,
    pub fingerprint: u32,
}
