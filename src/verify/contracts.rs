// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the load phase.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract                      | Property                                    |
//! |-------------------------------|---------------------------------------------|
//! | `check_partition`             | documents ascend, never overlap, end at EOF |
//! | `check_boundaries_sorted`     | each structural table ascends by start      |
//! | `check_suffix_array_sorted`   | sampled neighbours are in suffix order      |
//! | `check_index_consistent`      | lengths sum to tokens, DF lists ascend      |
//!
//! ```ignore
//! use folio::verify::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_partition(&segmentation.documents, corpus.len());
//! ```

use crate::index::InvertedIndex;
use crate::types::{Boundary, Span};

/// Suffix array neighbours compared by `check_suffix_array_sorted`.
const SUFFIX_SAMPLE: usize = 1024;

/// Check that document spans partition the corpus.
///
/// # Panics (debug builds only)
/// Panics if spans overlap, are out of order, are empty in a non-empty corpus,
/// or the last one does not end at `corpus_len`.
#[inline]
pub fn check_partition(documents: &[Span], corpus_len: usize) {
    debug_assert!(
        !documents.is_empty(),
        "Contract violation: segmentation produced no documents"
    );

    for (i, doc) in documents.iter().enumerate() {
        debug_assert!(
            doc.start <= doc.end && doc.end <= corpus_len,
            "Contract violation: document {} span {:?} outside corpus of {} bytes",
            i,
            doc,
            corpus_len
        );
        debug_assert!(
            corpus_len == 0 || !doc.is_empty(),
            "Contract violation: document {} is empty",
            i
        );
    }

    for (i, pair) in documents.windows(2).enumerate() {
        debug_assert!(
            pair[0].end <= pair[1].start,
            "Contract violation: documents {} and {} overlap ({:?}, {:?})",
            i,
            i + 1,
            pair[0],
            pair[1]
        );
    }

    debug_assert!(
        documents.last().map(|doc| doc.end) == Some(corpus_len),
        "Contract violation: last document does not end at corpus length {}",
        corpus_len
    );
}

/// Check that a boundary table ascends strictly by start.
#[inline]
pub fn check_boundaries_sorted(name: &str, table: &[Boundary]) {
    for (i, pair) in table.windows(2).enumerate() {
        debug_assert!(
            pair[0].start < pair[1].start,
            "Contract violation: {} table unsorted at {}: {} >= {}",
            name,
            i,
            pair[0].start,
            pair[1].start
        );
    }
}

/// Check the suffix array is a permutation in suffix order.
///
/// Comparing every neighbour pair is O(n²) in the worst case on repetitive
/// text, so only an evenly spaced sample of pairs is compared.
pub fn check_suffix_array_sorted(text: &[u8], suffix_array: &[usize]) {
    debug_assert_eq!(
        suffix_array.len(),
        text.len(),
        "Contract violation: suffix array length {} != text length {}",
        suffix_array.len(),
        text.len()
    );

    if suffix_array.len() < 2 {
        return;
    }

    let step = (suffix_array.len() / SUFFIX_SAMPLE).max(1);
    for i in (1..suffix_array.len()).step_by(step) {
        let (a, b) = (suffix_array[i - 1], suffix_array[i]);
        debug_assert!(
            a < text.len() && b < text.len(),
            "Contract violation: suffix array entry out of range at {}",
            i
        );
        if a < text.len() && b < text.len() {
            debug_assert!(
                text[a..] < text[b..],
                "Contract violation: suffix array unsorted at {} (positions {}, {})",
                i,
                a,
                b
            );
        }
    }
}

/// Check the TF/DF/length tables agree with each other.
pub fn check_index_consistent(index: &InvertedIndex) {
    let total: usize = index.document_lengths().iter().sum();
    debug_assert_eq!(
        total,
        index.token_count(),
        "Contract violation: document lengths sum to {} but {} tokens were indexed",
        total,
        index.token_count()
    );

    for (term, docs) in index.unigrams() {
        debug_assert!(
            docs.windows(2).all(|w| w[0] < w[1]),
            "Contract violation: DF list for {:?} not strictly ascending",
            term
        );
        debug_assert_eq!(
            docs.len(),
            index.postings(term).len(),
            "Contract violation: DF({:?}) disagrees with its posting list",
            term
        );
    }
}
