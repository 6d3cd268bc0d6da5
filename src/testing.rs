// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. The sample
//! corpus mirrors the layout of the complete-works text in miniature: CRLF
//! line endings, a front-matter table of contents, a sonnets section with
//! centred numbers, and one play with its own contents listing.

#![doc(hidden)]

use crate::config::SearcherConfig;
use crate::search::Searcher;

const SAMPLE_CORPUS: &str = concat!(
    "The Complete Works of William Shakespeare\r\n",
    "\r\n",
    "by William Shakespeare\r\n",
    "\r\n",
    "\r\n",
    "    Contents\r\n",
    "\r\n",
    "    THE TRAGEDY OF HAMLET, PRINCE OF DENMARK\r\n",
    "    THE SONNETS\r\n",
    "\r\n",
    "\r\n",
    "THE SONNETS\r\n",
    "\r\n",
    "                    1\r\n",
    "\r\n",
    "From fairest creatures we desire increase,\r\n",
    "That thereby beauty’s rose might never die,\r\n",
    "But as the riper should by time decease,\r\n",
    "\r\n",
    "                    2\r\n",
    "\r\n",
    "When forty winters shall besiege thy brow,\r\n",
    "And dig deep trenches in thy beauty’s field,\r\n",
    "\r\n",
    "                    116\r\n",
    "\r\n",
    "Let me not to the marriage of true minds\r\n",
    "Admit impediments. Love is not love\r\n",
    "Which alters when it alteration finds,\r\n",
    "Or bends with the remover to remove.\r\n",
    "\r\n",
    "\r\n",
    "THE TRAGEDY OF HAMLET, PRINCE OF DENMARK\r\n",
    "\r\n",
    "\r\n",
    "Contents\r\n",
    "\r\n",
    "ACT I\r\n",
    "Scene I. Elsinore. A platform before the Castle.\r\n",
    "\r\n",
    "ACT I\r\n",
    "\r\n",
    "SCENE I. Elsinore. A platform before the Castle.\r\n",
    "\r\n",
    "Enter Francisco and Barnardo, two sentinels.\r\n",
    "\r\n",
    "BARNARDO.\r\n",
    "Who’s there?\r\n",
    "\r\n",
    "ACT III\r\n",
    "\r\n",
    "SCENE I. A room in the Castle.\r\n",
    "\r\n",
    "HAMLET.\r\n",
    "To be, or not to be, that is the question:\r\n",
    "Whether ’tis nobler in the mind to suffer\r\n",
);

/// Number of documents the sample corpus segments into.
pub const SAMPLE_DOCUMENTS: usize = 21;

/// A small CRLF corpus with front matter, three sonnets and one play.
pub fn sample_corpus() -> &'static str {
    SAMPLE_CORPUS
}

/// Load the sample corpus with the default configuration.
pub fn sample_searcher() -> Searcher {
    searcher_for(SAMPLE_CORPUS, SearcherConfig::default())
}

/// Load arbitrary text, panicking on failure.
pub fn searcher_for(text: &str, config: SearcherConfig) -> Searcher {
    Searcher::load(text.as_bytes().to_vec(), config).expect("test corpus must load")
}

/// Join paragraphs with a blank line, LF line endings.
pub fn paragraphs(parts: &[&str]) -> String {
    parts.join("\n\n") + "\n"
}
