// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

/// Normalize a raw token into a term: keep ASCII letters and digits, lowercase.
///
/// Everything else is dropped, including apostrophes and accented letters, so
/// "Who’s" becomes "whos" and "--" becomes the empty string. Callers decide
/// what an empty term means.
///
/// - "Fairest," → "fairest"
/// - "HAMLET." → "hamlet"
/// - "’tis" → "tis"
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Largest char boundary `<= index`, clamped to the text length.
pub fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut i = index.min(text.len());
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Smallest char boundary `>= index`, clamped to the text length.
pub fn ceil_char_boundary(text: &str, index: usize) -> usize {
    let mut i = index.min(text.len());
    while !text.is_char_boundary(i) {
        i += 1;
    }
    i
}
