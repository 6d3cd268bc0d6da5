//! Ranked-search invariants over generated corpora and queries.

use super::common::{load, load_with_order};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// A small vocabulary so queries actually hit.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["thy", "love", "not", "be", "to", "fair", "rose", "time", "the"])
        .prop_map(str::to_string)
}

fn corpus_strategy() -> impl Strategy<Value = String> {
    let document = prop::collection::vec(word_strategy(), 1..12).prop_map(|w| w.join(" "));
    prop::collection::vec(document, 1..10).prop_map(|docs| docs.join("\n\n") + "\n")
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![word_strategy(), Just("--".to_string()), Just("Love,".to_string())],
        0..6,
    )
    .prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn prop_scores_positive_and_sorted(corpus in corpus_strategy(), query in query_strategy()) {
        let searcher = load(&corpus);
        let hits = searcher.search_ranked(&query);
        for hit in &hits {
            prop_assert!(hit.score > 0.0);
            prop_assert!(hit.score.is_finite());
        }
        for pair in hits.windows(2) {
            prop_assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].document < pair[1].document)
            );
        }
    }

    #[test]
    fn prop_one_score_per_query_token(corpus in corpus_strategy(), query in query_strategy()) {
        let searcher = load(&corpus);
        let tokens = query.split(char::is_whitespace).count();
        for hit in searcher.search_ranked(&query) {
            prop_assert_eq!(hit.term_scores.len(), tokens);
            let sum: f64 = hit.term_scores.iter().sum();
            prop_assert!((sum - hit.score).abs() < 1e-12);
        }
    }

    #[test]
    fn prop_snippet_is_document_text(corpus in corpus_strategy(), query in query_strategy()) {
        let searcher = load(&corpus);
        for hit in searcher.search_ranked(&query) {
            prop_assert_eq!(searcher.document_text(hit.document), Some(hit.snippet.as_str()));
            prop_assert_eq!(hit.document_length, searcher.document_length(hit.document));
        }
    }

    #[test]
    fn prop_reload_is_deterministic(corpus in corpus_strategy(), order in 1usize..6) {
        let a = load_with_order(&corpus, order);
        let b = load_with_order(&corpus, order);
        prop_assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn prop_df_never_exceeds_documents(corpus in corpus_strategy(), word in word_strategy()) {
        let searcher = load(&corpus);
        let df = searcher.document_frequency(&word);
        prop_assert!(df <= searcher.document_count());
        let with_tf = (0..searcher.document_count())
            .filter(|&d| searcher.term_frequency(&word, d) > 0)
            .count();
        prop_assert_eq!(df, with_tf);
    }
}
