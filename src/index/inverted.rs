// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction: TF, DF, n-gram TF and document lengths.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTINGS_SORTED**: every posting list is strictly ascending by document.
//!    Tokens are visited in corpus order and documents are assigned
//!    monotonically, so appending keeps lists sorted without a final sort.
//! 2. **DF_UNIGRAM_ONLY**: the DF table only holds unigrams. N-gram TF entries
//!    exist purely as a ranking boost.
//! 3. **DF_MATCHES_TF**: for a unigram, the DF set equals the documents of its
//!    posting list.
//! 4. **LENGTHS_SUM**: document lengths add up to the number of tokens.
//!
//! N-gram windows follow token order and ignore document boundaries: the last
//! words of one document and the first words of the next form an n-gram that
//! is credited to the earlier document.

use crate::types::Token;
use serde::Serialize;
use std::collections::HashMap;

use super::segment::Segmentation;

/// Occurrences of one term in one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Posting {
    pub doc: usize,
    pub count: u32,
}

/// Term → documents, read-only after `build`.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    /// Unigram and n-gram term frequencies.
    term_freq: HashMap<String, Vec<Posting>>,
    /// Unigram document sets, ascending and unique.
    doc_freq: HashMap<String, Vec<usize>>,
    /// Unigram count per document.
    doc_lengths: Vec<usize>,
    token_count: usize,
    ngram_order: usize,
}

/// Count one more occurrence of `term` in `doc`.
fn bump(term_freq: &mut HashMap<String, Vec<Posting>>, term: &str, doc: usize) {
    if let Some(postings) = term_freq.get_mut(term) {
        match postings.last_mut() {
            Some(last) if last.doc == doc => last.count += 1,
            _ => postings.push(Posting { doc, count: 1 }),
        }
    } else {
        term_freq.insert(term.to_string(), vec![Posting { doc, count: 1 }]);
    }
}

impl InvertedIndex {
    /// Build the tables from the surviving tokens.
    ///
    /// `ngram_order` is the longest phrase counted; `1` counts unigrams only.
    pub fn build(tokens: &[Token], segmentation: &Segmentation, ngram_order: usize) -> Self {
        let doc_count = segmentation.documents.len();
        let last_doc = doc_count.saturating_sub(1);

        let mut term_freq: HashMap<String, Vec<Posting>> = HashMap::new();
        let mut doc_freq: HashMap<String, Vec<usize>> = HashMap::new();
        let mut doc_lengths = vec![0usize; doc_count];
        let mut gram = String::new();

        for (i, token) in tokens.iter().enumerate() {
            let doc = segmentation.document_at(token.span.start).min(last_doc);
            let term = token.term.as_str();

            bump(&mut term_freq, term, doc);

            let docs = doc_freq.entry(token.term.clone()).or_default();
            if docs.last() != Some(&doc) {
                docs.push(doc);
            }

            // Windows of 2..=order tokens starting here, across documents.
            gram.clear();
            gram.push_str(term);
            let longest = ngram_order.max(1).min(tokens.len() - i);
            for next in &tokens[i + 1..i + longest] {
                gram.push(' ');
                gram.push_str(&next.term);
                bump(&mut term_freq, &gram, doc);
            }

            if let Some(length) = doc_lengths.get_mut(doc) {
                *length += 1;
            }
        }

        InvertedIndex {
            term_freq,
            doc_freq,
            doc_lengths,
            token_count: tokens.len(),
            ngram_order,
        }
    }

    /// Postings for a unigram or space-joined n-gram; empty when unseen.
    pub fn postings(&self, term: &str) -> &[Posting] {
        self.term_freq.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// TF(term, doc).
    pub fn term_frequency(&self, term: &str, doc: usize) -> u32 {
        count_in(self.postings(term), doc)
    }

    /// Documents containing the unigram at least once, ascending.
    pub fn documents_containing(&self, term: &str) -> &[usize] {
        self.doc_freq.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// DF(term): number of distinct documents containing the unigram.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.documents_containing(term).len()
    }

    /// Unigram count of a document; 0 for an unknown document.
    pub fn document_length(&self, doc: usize) -> usize {
        self.doc_lengths.get(doc).copied().unwrap_or(0)
    }

    pub fn document_lengths(&self) -> &[usize] {
        &self.doc_lengths
    }

    pub fn document_count(&self) -> usize {
        self.doc_lengths.len()
    }

    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Distinct unigrams.
    pub fn vocabulary_size(&self) -> usize {
        self.doc_freq.len()
    }

    /// Distinct TF keys, unigrams and n-grams together.
    pub fn tf_entries(&self) -> usize {
        self.term_freq.len()
    }

    pub fn ngram_order(&self) -> usize {
        self.ngram_order
    }

    /// CRC32 over every table, visited in sorted term order.
    ///
    /// Two builds of the same corpus with the same order produce the same value.
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&(self.ngram_order as u64).to_le_bytes());

        let mut terms: Vec<&String> = self.term_freq.keys().collect();
        terms.sort_unstable();
        for term in terms {
            hasher.update(term.as_bytes());
            hasher.update(&[0]);
            for posting in &self.term_freq[term] {
                hasher.update(&(posting.doc as u64).to_le_bytes());
                hasher.update(&posting.count.to_le_bytes());
            }
        }

        let mut unigrams: Vec<&String> = self.doc_freq.keys().collect();
        unigrams.sort_unstable();
        for term in unigrams {
            hasher.update(term.as_bytes());
            hasher.update(&[0]);
            for &doc in &self.doc_freq[term] {
                hasher.update(&(doc as u64).to_le_bytes());
            }
        }

        for &length in &self.doc_lengths {
            hasher.update(&(length as u64).to_le_bytes());
        }

        hasher.finalize()
    }

    pub(crate) fn unigrams(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.doc_freq.iter().map(|(t, d)| (t.as_str(), d.as_slice()))
    }
}

/// Count for `doc` in a sorted posting list.
#[inline]
pub fn count_in(postings: &[Posting], doc: usize) -> u32 {
    postings
        .binary_search_by_key(&doc, |p| p.doc)
        .map(|i| postings[i].count)
        .unwrap_or(0)
}
