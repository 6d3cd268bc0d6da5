// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus segmentation: blank-line runs split the corpus into documents.
//!
//! ```text
//! "From fairest…\r\n\r\nWhen forty…\r\n\r\n\r\nLet me not…"
//!  └── doc 0 ──┘└ gap ┘└── doc 1 ──┘└─ gap ──┘└── doc 2 ──┘
//! ```
//!
//! # Invariants
//!
//! 1. **ORDERED**: spans ascend by start and never overlap.
//! 2. **COVERING**: spans plus the separator gaps tile the whole corpus; the
//!    first span starts at the end of any leading separator, the last ends at
//!    the corpus length.
//! 3. **NON_EMPTY**: no span is empty unless the corpus is empty, in which
//!    case there is exactly one span `[0, 0)`.

use super::text::TextIndex;
use crate::types::Span;
use regex::Regex;

/// Two or more consecutive line breaks.
pub const DOCUMENT_BREAK: &str = r"(?:\r?\n){2,}";

/// Document spans and the lookup array used to assign offsets to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub documents: Vec<Span>,
    /// `documents[i].end` for every document but the last, ascending.
    pub ends: Vec<usize>,
}

impl Segmentation {
    /// Index of the document that owns `offset`: the first document whose end
    /// is strictly greater than the offset. Offsets past every end belong to
    /// the last document.
    #[inline]
    pub fn document_at(&self, offset: usize) -> usize {
        self.ends.partition_point(|&end| end <= offset)
    }
}

/// Split the corpus at every match of `boundary`.
pub fn segment(index: &TextIndex, boundary: &Regex) -> Segmentation {
    let corpus_len = index.len();
    let mut documents = Vec::new();
    let mut start = 0;

    for gap in index.all_matches(boundary) {
        // A separator touching the end would leave an empty trailing document;
        // the last document absorbs it instead and still ends at corpus_len.
        if gap.end >= corpus_len {
            break;
        }
        // A separator at the very start only moves the first document's start.
        if gap.start <= start {
            start = gap.end;
            continue;
        }
        documents.push(Span::new(start, gap.start));
        start = gap.end;
    }
    documents.push(Span::new(start, corpus_len));

    let ends = documents[..documents.len() - 1]
        .iter()
        .map(|doc| doc.end)
        .collect();

    Segmentation { documents, ends }
}
