// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The searcher: one immutable context built at startup, shared by every query.
//!
//! # Load phase
//!
//! ```text
//! bytes ──utf8──► TextIndex (suffix array)
//!                   ├──► segment ──► documents ─┐
//!                   ├──► tokenize ──► tokens ───┴──► InvertedIndex
//!                   └──► StructuralLocator
//! ```
//!
//! Any failure aborts the load. A `Searcher` that exists is complete.
//!
//! # Queries
//!
//! All query methods take `&self` and never fail. A `Searcher` is `Send + Sync`
//! and can sit behind an `Arc` for concurrent readers.

use crate::config::SearcherConfig;
use crate::error::LoadError;
use crate::index::{
    query_terms, segment, tokenize, InvertedIndex, Segmentation, TextIndex, DOCUMENT_BREAK,
    WHITESPACE,
};
use crate::scoring::ranking::compare_hits;
use crate::structure::StructuralLocator;
use crate::types::{IndexStats, LiteralHit, PhraseHit, RankedHit, Span};
use crate::verify::contracts;
use regex::Regex;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use super::literal::find_literal;
use super::phrase::find_paragraphs;
use super::ranked::score_documents;

/// A fully built, read-only search index over one corpus.
#[derive(Debug)]
pub struct Searcher {
    text: TextIndex,
    segmentation: Segmentation,
    index: InvertedIndex,
    structure: StructuralLocator,
    config: SearcherConfig,
}

impl Searcher {
    /// Build every structure over `corpus`.
    ///
    /// # Errors
    ///
    /// - [`LoadError::InvalidConfig`] for an n-gram order of zero
    /// - [`LoadError::InvalidUtf8`] if the corpus is not UTF-8
    /// - [`LoadError::Pattern`] if a built-in pattern fails to compile
    pub fn load(corpus: Vec<u8>, config: SearcherConfig) -> Result<Self, LoadError> {
        config.validate()?;
        let started = Instant::now();

        let text = String::from_utf8(corpus).map_err(|err| LoadError::InvalidUtf8 {
            offset: err.utf8_error().valid_up_to(),
        })?;

        let stage = Instant::now();
        let text = TextIndex::new(text);
        debug!(bytes = text.len(), elapsed = ?stage.elapsed(), "suffix array built");

        let stage = Instant::now();
        let segmentation = segment(&text, &Regex::new(DOCUMENT_BREAK)?);
        let tokens = tokenize(&text, &Regex::new(WHITESPACE)?);
        debug!(
            documents = segmentation.documents.len(),
            tokens = tokens.len(),
            elapsed = ?stage.elapsed(),
            "corpus segmented and tokenized"
        );

        let stage = Instant::now();
        let index = InvertedIndex::build(&tokens, &segmentation, config.ngram_order);
        debug!(
            vocabulary = index.vocabulary_size(),
            tf_entries = index.tf_entries(),
            elapsed = ?stage.elapsed(),
            "inverted index built"
        );

        let stage = Instant::now();
        let structure = StructuralLocator::build(&text)?;
        debug!(
            acts = structure.acts().len(),
            scenes = structure.scenes().len(),
            plays = structure.plays().len(),
            sonnets = structure.sonnets().len(),
            elapsed = ?stage.elapsed(),
            "structural tables built"
        );

        contracts::check_partition(&segmentation.documents, text.len());
        contracts::check_suffix_array_sorted(text.text().as_bytes(), text.suffix_array());
        contracts::check_index_consistent(&index);
        contracts::check_boundaries_sorted("act", structure.acts());
        contracts::check_boundaries_sorted("scene", structure.scenes());
        contracts::check_boundaries_sorted("play", structure.plays());
        contracts::check_boundaries_sorted("sonnet", structure.sonnets());

        info!(
            documents = segmentation.documents.len(),
            ngram_order = config.ngram_order,
            elapsed = ?started.elapsed(),
            "corpus loaded"
        );

        Ok(Searcher {
            text,
            segmentation,
            index,
            structure,
            config,
        })
    }

    /// Read `path` and [`load`](Self::load) it.
    pub fn load_file(path: impl AsRef<Path>, config: SearcherConfig) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let corpus = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), bytes = corpus.len(), "read corpus");
        Self::load(corpus, config)
    }

    /// Documents scoring above zero for `query`, best first.
    ///
    /// Equal scores are ordered by document index.
    pub fn search_ranked(&self, query: &str) -> Vec<RankedHit> {
        let terms = query_terms(query);
        if terms.iter().all(String::is_empty) {
            return Vec::new();
        }

        let mut hits: Vec<RankedHit> = score_documents(&self.index, &terms)
            .into_iter()
            .map(|scored| RankedHit {
                document: scored.document,
                score: scored.score,
                document_length: self.index.document_length(scored.document),
                snippet: self.text.slice(self.segmentation.documents[scored.document]).to_string(),
                term_scores: scored.term_scores,
            })
            .collect();
        hits.sort_by(compare_hits);

        debug!(query, hits = hits.len(), "ranked search");
        hits
    }

    /// Paragraphs containing `query`, in corpus order, with structural tags.
    pub fn search_phrase(&self, query: &str) -> Vec<PhraseHit> {
        let hits: Vec<PhraseHit> = find_paragraphs(&self.text, query)
            .into_iter()
            .map(|span| {
                let lines = self.text.slice(span).lines().map(str::to_string).collect();
                PhraseHit::new(span.start, lines, self.structure.locate(span.start))
            })
            .collect();

        debug!(query, hits = hits.len(), "phrase search");
        hits
    }

    /// Every exact occurrence of `query`, in corpus order, with context.
    pub fn search_literal(&self, query: &str) -> Vec<LiteralHit> {
        find_literal(&self.text, query)
    }

    pub fn structure(&self) -> &StructuralLocator {
        &self.structure
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn config(&self) -> SearcherConfig {
        self.config
    }

    pub fn text(&self) -> &str {
        self.text.text()
    }

    /// Document spans in corpus order.
    pub fn documents(&self) -> &[Span] {
        &self.segmentation.documents
    }

    pub fn document_count(&self) -> usize {
        self.segmentation.documents.len()
    }

    /// Corpus text of document `doc`, if it exists.
    pub fn document_text(&self, doc: usize) -> Option<&str> {
        self.segmentation.documents.get(doc).map(|&span| self.text.slice(span))
    }

    /// Document owning a corpus offset.
    pub fn document_at(&self, offset: usize) -> usize {
        self.segmentation.document_at(offset)
    }

    pub fn term_frequency(&self, term: &str, doc: usize) -> u32 {
        self.index.term_frequency(term, doc)
    }

    pub fn document_frequency(&self, term: &str) -> usize {
        self.index.document_frequency(term)
    }

    pub fn document_length(&self, doc: usize) -> usize {
        self.index.document_length(doc)
    }

    /// CRC32 of the TF, DF and length tables.
    pub fn fingerprint(&self) -> u32 {
        self.index.fingerprint()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            corpus_bytes: self.text.len(),
            documents: self.document_count(),
            tokens: self.index.token_count(),
            vocabulary: self.index.vocabulary_size(),
            tf_entries: self.index.tf_entries(),
            ngram_order: self.index.ngram_order(),
            acts: self.structure.acts().len(),
            scenes: self.structure.scenes().len(),
            plays: self.structure.plays().len(),
            sonnets: self.structure.sonnets().len(),
            fingerprint: self.fingerprint(),
        }
    }
}
