//! Suffix array invariants: literal search agrees with a linear scan.

use super::common::load;
use folio::index::build_suffix_array;
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabets make repeats, and repeats are where SA-IS recurses.
fn bytes_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![0u8, b'a', b'b', b'c', b'\n', 0xff]), 0..200)
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab’ \n]{0,120}").unwrap()
}

proptest! {
    #[test]
    fn prop_suffix_array_sorted_and_complete(bytes in bytes_strategy()) {
        let sa = build_suffix_array(&bytes);
        prop_assert_eq!(sa.len(), bytes.len());

        let mut positions = sa.clone();
        positions.sort_unstable();
        prop_assert_eq!(positions, (0..bytes.len()).collect::<Vec<_>>());

        for pair in sa.windows(2) {
            prop_assert!(bytes[pair[0]..] < bytes[pair[1]..]);
        }
    }

    #[test]
    fn prop_literal_matches_linear_scan(text in text_strategy(), needle in "[ab’]{1,4}") {
        let searcher = load(&text);
        let found: Vec<usize> = searcher.search_literal(&needle).iter().map(|h| h.offset).collect();

        let haystack = text.as_bytes();
        let expected: Vec<usize> = (0..haystack.len())
            .filter(|&i| haystack[i..].starts_with(needle.as_bytes()))
            .collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn prop_literal_context_contains_match(text in text_strategy(), needle in "[ab]{1,3}") {
        let searcher = load(&text);
        for hit in searcher.search_literal(&needle) {
            prop_assert!(hit.context.contains(needle.as_str()));
        }
    }
}
