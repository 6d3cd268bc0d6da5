//! Shared test utilities and fixtures.

#![allow(dead_code)]

use folio::{Searcher, SearcherConfig};
use std::sync::LazyLock;

// Re-export canonical test utilities from folio::testing
pub use folio::testing::{paragraphs, sample_corpus, searcher_for, SAMPLE_DOCUMENTS};

// ============================================================================
// FIXTURE FILES (corpus-fixtures feature)
// ============================================================================

/// The 154 sonnets, one document per sonnet body and number line.
pub const SONNETS_PATH: &str = "data/sonnets.txt";

/// The complete works, CRLF line endings.
pub const COMPLETE_WORKS_PATH: &str = "data/completeworks.txt";

// ============================================================================
// CACHED SEARCHERS
// ============================================================================

/// The sample corpus, loaded once per test binary.
pub static SAMPLE: LazyLock<Searcher> = LazyLock::new(folio::testing::sample_searcher);

/// Load text with the default n-gram order.
pub fn load(text: &str) -> Searcher {
    searcher_for(text, SearcherConfig::default())
}

/// Load text with a specific n-gram order.
pub fn load_with_order(text: &str, order: usize) -> Searcher {
    searcher_for(text, SearcherConfig::with_ngram_order(order))
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Documents ascend, never overlap, and the last one ends at the corpus end.
pub fn assert_partition(searcher: &Searcher) {
    let docs = searcher.documents();
    assert!(!docs.is_empty(), "no documents");
    for pair in docs.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "documents overlap or are out of order: {:?} {:?}",
            pair[0],
            pair[1]
        );
    }
    for doc in docs {
        assert!(doc.start <= doc.end);
        if !searcher.text().is_empty() {
            assert!(!doc.is_empty(), "empty document {:?}", doc);
        }
    }
    assert_eq!(docs.last().map(|d| d.end), Some(searcher.text().len()));
}

/// The gaps between documents (and before the first) hold only line breaks.
pub fn assert_gaps_are_line_breaks(searcher: &Searcher) {
    let text = searcher.text();
    let mut previous_end = 0;
    for doc in searcher.documents() {
        let gap = &text[previous_end..doc.start];
        assert!(
            gap.chars().all(|c| c == '\r' || c == '\n'),
            "gap {:?} contains more than line breaks",
            gap
        );
        previous_end = doc.end;
    }
}
