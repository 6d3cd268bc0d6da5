// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Arbitrary query strings against a fixed corpus. Queries never fail, so
//! the only acceptable outcomes are results that satisfy the ranking and
//! phrase invariants.

#![no_main]

use folio::testing::sample_searcher;
use folio::Searcher;
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

fuzz_target!(|query: &str| {
    static SEARCHER: OnceLock<Searcher> = OnceLock::new();
    let searcher = SEARCHER.get_or_init(sample_searcher);

    let ranked = searcher.search_ranked(query);
    for hit in &ranked {
        assert!(hit.score > 0.0, "non-positive score {}", hit.score);
        assert!(hit.document < searcher.document_count());
    }
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score, "ranked results out of order");
    }

    for hit in searcher.search_phrase(query) {
        assert!(hit.offset <= searcher.text().len());
        assert!(hit.act.is_none() || hit.sonnet.is_none());
    }

    for hit in searcher.search_literal(query) {
        assert!(searcher.text()[hit.offset..].starts_with(query));
    }
});
