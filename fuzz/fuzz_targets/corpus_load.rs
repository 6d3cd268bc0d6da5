// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the load phase.
//!
//! Arbitrary bytes either fail as invalid UTF-8 or load into an index whose
//! documents partition the corpus.

#![no_main]

use arbitrary::Arbitrary;
use folio::{LoadError, Searcher, SearcherConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    corpus: Vec<u8>,
    order: u8,
}

fuzz_target!(|input: Input| {
    let order = usize::from(input.order % 6);
    let valid_utf8 = std::str::from_utf8(&input.corpus).is_ok();

    match Searcher::load(input.corpus, SearcherConfig::with_ngram_order(order)) {
        Ok(searcher) => {
            assert!(valid_utf8 && order > 0);
            let docs = searcher.documents();
            assert_eq!(docs.last().map(|d| d.end), Some(searcher.text().len()));
            assert!(docs.windows(2).all(|w| w[0].end <= w[1].start));
        }
        Err(LoadError::InvalidConfig(_)) => assert_eq!(order, 0),
        Err(LoadError::InvalidUtf8 { .. }) => assert!(!valid_utf8),
        Err(other) => panic!("unexpected load error: {}", other),
    }
});
