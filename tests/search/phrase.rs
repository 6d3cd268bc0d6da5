//! Phrase search and structural tagging.

use super::common::{load, SAMPLE};

#[test]
fn test_case_insensitive_exact_phrase() {
    let hits = SAMPLE.search_phrase("LET ME NOT TO THE MARRIAGE");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].lines[0], "Let me not to the marriage of true minds");
    assert_eq!(hits[0].sonnet.as_deref(), Some("116"));
}

#[test]
fn test_fallback_tags_drama() {
    let hits = SAMPLE.search_phrase("to be or not to be");
    assert_eq!(hits.len(), 1);
    let hit = &hits[0];
    assert_eq!(hit.lines[0], "HAMLET.");
    assert_eq!(hit.lines[1], "To be, or not to be, that is the question:");
    assert_eq!(hit.act.as_deref(), Some("ACT III"));
    assert_eq!(hit.scene.as_deref(), Some("SCENE I. A room in the Castle."));
    assert!(hit.sonnet.is_none());
}

#[test]
fn test_front_matter_has_no_tags() {
    let hits = SAMPLE.search_phrase("by William Shakespeare");
    assert_eq!(hits.len(), 1);
    let hit = &hits[0];
    assert!(hit.act.is_none() && hit.scene.is_none() && hit.play.is_none() && hit.sonnet.is_none());
}

#[test]
fn test_all_paragraphs_returned_in_corpus_order() {
    let hits = SAMPLE.search_phrase("the Castle");
    assert_eq!(hits.len(), 3);
    assert!(hits.windows(2).all(|w| w[0].offset < w[1].offset));
    // The contents listing belongs to the play but precedes any act heading.
    assert_eq!(hits[0].act.as_deref(), Some("ACT I"));
    assert!(hits[0].scene.is_none());
}

#[test]
fn test_lines_drop_line_endings() {
    for hit in SAMPLE.search_phrase("thy") {
        assert!(hit.lines.iter().all(|l| !l.contains('\r') && !l.contains('\n')));
    }
}

#[test]
fn test_metacharacters_match_literally() {
    let searcher = load("Is this a dagger (which I see)?\nCome, let me clutch thee.\n");
    assert_eq!(searcher.search_phrase("dagger (which").len(), 1);
    assert!(searcher.search_phrase("d.gger").is_empty());
}

#[test]
fn test_serialized_hit_omits_missing_metadata() {
    let hits = SAMPLE.search_phrase("Admit impediments");
    let json = serde_json::to_value(&hits[0]).unwrap();
    assert_eq!(json["sonnet"], "116");
    assert!(json.get("act").is_none());
    assert!(json["lines"].is_array());
}
