//! Segmentation invariants over generated corpora.

use super::common::{assert_gaps_are_line_breaks, assert_partition, load};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Lines of words, spaces, punctuation and the occasional curly quote.
fn line_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ,.;’-]{0,20}").unwrap()
}

/// Line endings, including runs that form blank lines.
fn break_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["\n", "\r\n", "\n\n", "\r\n\r\n", "\n\n\n", "\r\n\r\n\r\n"])
}

fn corpus_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((line_strategy(), break_strategy()), 0..20).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(line, br)| line + br)
            .collect::<String>()
    })
}

proptest! {
    #[test]
    fn prop_documents_partition_corpus(corpus in corpus_strategy()) {
        let searcher = load(&corpus);
        assert_partition(&searcher);
        assert_gaps_are_line_breaks(&searcher);
    }

    #[test]
    fn prop_offsets_map_to_their_document(corpus in corpus_strategy()) {
        let searcher = load(&corpus);
        for (i, span) in searcher.documents().iter().enumerate() {
            for offset in span.start..span.end {
                prop_assert_eq!(searcher.document_at(offset), i);
            }
        }
        prop_assert_eq!(searcher.document_at(usize::MAX), searcher.document_count() - 1);
    }

    #[test]
    fn prop_lengths_sum_to_tokens(corpus in corpus_strategy()) {
        let searcher = load(&corpus);
        let total: usize = (0..searcher.document_count()).map(|d| searcher.document_length(d)).sum();
        prop_assert_eq!(total, searcher.stats().tokens);
    }
}
