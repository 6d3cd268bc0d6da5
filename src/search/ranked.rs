// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked search: score every document against a query with TF-IDF.
//!
//! A query is compiled once into a [`QueryPlan`]: for each query position, the
//! `ln(idf)`-ready IDF of its term and the posting lists of every phrase that
//! starts there, each with its weight. Scoring a document is then a handful of
//! binary searches per position.
//!
//! ```text
//! query: "love is not love"      order 5
//!
//! pos 0  love ×1   "love is" ×2   "love is not" ×3   "love is not love" ×4
//! pos 1  is   ×1   "is not"  ×2   "is not love" ×3
//! pos 2  not  ×1   "not love" ×2
//! pos 3  love ×1
//! ```
//!
//! A document that appears in no posting list scores exactly zero and would be
//! dropped by the positivity filter, so only documents in the union of the
//! plan's posting lists are visited.

use crate::index::inverted::count_in;
use crate::index::{InvertedIndex, Posting};
use crate::scoring::{effective_length, inverse_document_frequency, ngram_weight, term_score};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One document's score, before it is dressed up as a `RankedHit`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDocument {
    pub document: usize,
    pub score: f64,
    pub term_scores: Vec<f64>,
}

/// A phrase starting at some query position, with its TF boost weight.
#[derive(Debug, Clone, Copy)]
struct WeightedPostings<'a> {
    weight: u64,
    postings: &'a [Posting],
}

#[derive(Debug, Clone)]
struct PositionPlan<'a> {
    idf: f64,
    /// Index 0 is the unigram (weight 1), then n-grams of length 2, 3, …
    grams: Vec<WeightedPostings<'a>>,
}

/// Everything needed to score any document for one query.
#[derive(Debug, Clone)]
pub struct QueryPlan<'a> {
    index: &'a InvertedIndex,
    positions: Vec<PositionPlan<'a>>,
}

impl<'a> QueryPlan<'a> {
    /// Resolve every term and phrase key of `terms` against the index.
    ///
    /// Phrase keys are built exactly as at index time: consecutive terms joined
    /// by one space, up to the index's n-gram order.
    pub fn new(index: &'a InvertedIndex, terms: &[String]) -> Self {
        let total_docs = index.document_count();
        let order = index.ngram_order().max(1);

        let positions = (0..terms.len())
            .map(|i| {
                let idf = inverse_document_frequency(total_docs, index.document_frequency(&terms[i]));
                let longest = order.min(terms.len() - i);
                let grams = (1..=longest)
                    .map(|k| WeightedPostings {
                        weight: ngram_weight(k),
                        postings: index.postings(&terms[i..i + k].join(" ")),
                    })
                    .collect();
                PositionPlan { idf, grams }
            })
            .collect();

        QueryPlan { index, positions }
    }

    /// Number of query positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Documents that occur in at least one of the plan's posting lists,
    /// ascending.
    pub fn candidates(&self) -> Vec<usize> {
        let mut docs: Vec<usize> = self
            .positions
            .iter()
            .flat_map(|position| position.grams.iter())
            .flat_map(|gram| gram.postings.iter().map(|p| p.doc))
            .collect();
        docs.sort_unstable();
        docs.dedup();
        docs
    }

    /// Total and per-position scores for `doc`.
    pub fn score(&self, doc: usize) -> (f64, Vec<f64>) {
        let length = effective_length(self.index.document_length(doc));
        let term_scores: Vec<f64> = self
            .positions
            .iter()
            .map(|position| {
                let tf: u64 = position
                    .grams
                    .iter()
                    .map(|gram| gram.weight * u64::from(count_in(gram.postings, doc)))
                    .sum();
                term_score(tf, length, position.idf)
            })
            .collect();
        let total = term_scores.iter().sum();
        (total, term_scores)
    }
}

/// Score all candidate documents and keep those with a strictly positive
/// total. Output is in document order; the caller sorts.
pub fn score_documents(index: &InvertedIndex, terms: &[String]) -> Vec<ScoredDocument> {
    let plan = QueryPlan::new(index, terms);
    let candidates = plan.candidates();

    let keep = |&doc: &usize| {
        let (score, term_scores) = plan.score(doc);
        (score > 0.0).then_some(ScoredDocument {
            document: doc,
            score,
            term_scores,
        })
    };

    #[cfg(feature = "parallel")]
    let scored = candidates.par_iter().filter_map(keep).collect();
    #[cfg(not(feature = "parallel"))]
    let scored = candidates.iter().filter_map(keep).collect();

    scored
}
