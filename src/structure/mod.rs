// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural locator: which act, scene, play or sonnet an offset falls in.
//!
//! Four boundary tables are matched once at load time and kept sorted by
//! start offset. A lookup is a binary search for the last boundary starting
//! at or before the offset.
//!
//! ```text
//! … THE SONNETS ── 1 ── 2 ── … ── 154 ── HAMLET ── ACT I ── SCENE I ── …
//!   └──────────── verse ──────────────┘  └────────── drama ───────────…
//!                                        ^ first play title
//! ```
//!
//! Everything before the first play title is verse territory; an offset there
//! either sits inside a numbered sonnet or in the front matter. Everything from
//! the first play title on is drama, described by its enclosing act, scene and
//! play, each of which may be absent (a play's prologue has no act yet).

use crate::index::TextIndex;
use crate::types::{Boundary, Location, PlayContext};
use regex::Regex;

/// An act heading, to the end of its line.
pub const ACT_HEADING: &str = r"\bACT [IVXLC]+\b[^\r\n]*";

/// A scene heading, to the end of its line.
pub const SCENE_HEADING: &str = r"\bSCENE [IVXLC]+\b[^\r\n]*";

/// A title line, blank lines, then a line starting with `Contents`.
pub const PLAY_TITLE: &str = r"(?m)^[^\r\n]*[^\s][^\r\n]*\r?\n(?:[ \t]*\r?\n)+Contents\b";

/// A number alone on a line between blank lines.
pub const SONNET_NUMBER: &str = r"\r?\n\r?\n[ \t]*\d+[ \t]*\r?\n\r?\n";

/// Sorted boundary tables for one corpus.
#[derive(Debug, Clone, Default)]
pub struct StructuralLocator {
    acts: Vec<Boundary>,
    scenes: Vec<Boundary>,
    plays: Vec<Boundary>,
    sonnets: Vec<Boundary>,
}

impl StructuralLocator {
    /// Match the four heading patterns against the corpus.
    pub fn build(index: &TextIndex) -> Result<Self, regex::Error> {
        Ok(StructuralLocator {
            acts: table(index, &Regex::new(ACT_HEADING)?, heading_label),
            scenes: table(index, &Regex::new(SCENE_HEADING)?, heading_label),
            plays: table(index, &Regex::new(PLAY_TITLE)?, title_label),
            sonnets: table(index, &Regex::new(SONNET_NUMBER)?, number_label),
        })
    }

    /// Act, scene and play enclosing `offset`, each looked up independently.
    pub fn lookup_play_context(&self, offset: usize) -> PlayContext {
        PlayContext {
            act: last_at_or_before(&self.acts, offset).map(|b| b.label.clone()),
            scene: last_at_or_before(&self.scenes, offset).map(|b| b.label.clone()),
            play: last_at_or_before(&self.plays, offset).map(|b| b.label.clone()),
        }
    }

    /// Number of the sonnet enclosing `offset`, digits only.
    pub fn lookup_sonnet(&self, offset: usize) -> Option<String> {
        last_at_or_before(&self.sonnets, offset).map(|b| b.label.clone())
    }

    /// Classify `offset` as front matter, sonnet, or drama.
    pub fn locate(&self, offset: usize) -> Location {
        let in_drama = self.plays.first().is_some_and(|play| offset >= play.start);
        if in_drama {
            return Location::Drama(self.lookup_play_context(offset));
        }

        let in_sonnets = self.sonnets.first().is_some_and(|s| offset >= s.start);
        match self.lookup_sonnet(offset) {
            Some(number) if in_sonnets => Location::Sonnet { number },
            _ => Location::Unknown,
        }
    }

    pub fn acts(&self) -> &[Boundary] {
        &self.acts
    }

    pub fn scenes(&self) -> &[Boundary] {
        &self.scenes
    }

    pub fn plays(&self) -> &[Boundary] {
        &self.plays
    }

    pub fn sonnets(&self) -> &[Boundary] {
        &self.sonnets
    }
}

/// All matches of `pattern`, labelled. Matches come back in corpus order, so
/// the table is already sorted.
fn table(index: &TextIndex, pattern: &Regex, label: fn(&str) -> String) -> Vec<Boundary> {
    index
        .all_matches(pattern)
        .into_iter()
        .map(|span| Boundary {
            start: span.start,
            end: span.end,
            label: label(index.slice(span)),
        })
        .collect()
}

#[inline]
fn last_at_or_before(table: &[Boundary], offset: usize) -> Option<&Boundary> {
    let after = table.partition_point(|b| b.start <= offset);
    after.checked_sub(1).map(|i| &table[i])
}

fn heading_label(raw: &str) -> String {
    raw.replace(['\r', '\n'], "").trim().to_string()
}

/// The title is the first line of the match.
fn title_label(raw: &str) -> String {
    raw.lines().next().unwrap_or_default().trim().to_string()
}

fn number_label(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
