// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SA-IS: suffix array by induced sorting, over the raw corpus bytes.
//!
//! ```text
//! Input: "banana"  ->  symbols b+1 a+1 n+1 a+1 n+1 a+1 $   ($ = 0)
//!
//!   types:  L  S  L  S  L  L  S
//!   LMS:       1     3        6
//!
//! 1. Drop LMS suffixes at their bucket tails, induce L then S types.
//! 2. Name LMS substrings; recurse if two share a name.
//! 3. Seed buckets with the sorted LMS suffixes, induce again.
//!
//! Output: [5, 3, 1, 0, 4, 2]
//! ```
//!
//! Every byte is shifted up by one before sorting so that symbol 0 is free for
//! the sentinel. A corpus may therefore contain NUL bytes without breaking the
//! uniqueness of the sentinel.
//!
//! Time and space are O(n).
//!
//! Reference: Nong, Zhang, Chan (2009), "Linear Suffix Array Construction by
//! Almost Pure Induced-Sorting".

/// Slot not yet filled during induction.
const EMPTY: usize = usize::MAX;

/// Number of distinct symbols after shifting bytes: 256 bytes + the sentinel.
const BYTE_ALPHABET: usize = 257;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SuffixType {
    /// Smaller than the suffix that follows it.
    S,
    /// Larger than the suffix that follows it.
    L,
}

/// Build the suffix array of `text`.
///
/// `result[i]` is the start of the i-th smallest suffix. The empty text has an
/// empty suffix array.
pub fn build_suffix_array(text: &[u8]) -> Vec<usize> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut symbols: Vec<usize> = Vec::with_capacity(text.len() + 1);
    symbols.extend(text.iter().map(|&b| b as usize + 1));
    symbols.push(0);

    let sa = sais(&symbols, BYTE_ALPHABET);

    // The sentinel suffix always sorts first; everything after it is a real suffix.
    sa.into_iter().filter(|&pos| pos < text.len()).collect()
}

/// Core SA-IS over an integer alphabet.
///
/// Requires the last symbol to be the unique smallest one. The reduced string
/// built for the recursive call keeps that property, because the sentinel's
/// LMS substring always receives name 0 and sits at the end.
fn sais(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    let n = text.len();
    if n == 1 {
        return vec![0];
    }

    let types = classify(text);
    let lms_positions: Vec<usize> = (1..n).filter(|&i| is_lms(&types, i)).collect();
    let bucket_sizes = bucket_sizes(text, alphabet_size);

    // First pass: LMS suffixes in text order, only their relative LMS-substring
    // order is trusted afterwards.
    let mut sa = vec![EMPTY; n];
    induce(text, &types, &bucket_sizes, &lms_positions, &mut sa);

    // Name each LMS substring by its rank among distinct LMS substrings.
    let mut names = vec![EMPTY; n];
    let mut name = 0usize;
    let mut previous: Option<usize> = None;
    for &pos in &sa {
        if !is_lms(&types, pos) {
            continue;
        }
        if let Some(prev) = previous {
            if !lms_substrings_equal(text, &types, prev, pos) {
                name += 1;
            }
        }
        names[pos] = name;
        previous = Some(pos);
    }
    let distinct = name + 1;

    let reduced: Vec<usize> = lms_positions.iter().map(|&pos| names[pos]).collect();

    let order: Vec<usize> = if distinct < lms_positions.len() {
        sais(&reduced, distinct)
    } else {
        // All names unique: the name is the rank.
        let mut order = vec![0; reduced.len()];
        for (i, &rank) in reduced.iter().enumerate() {
            order[rank] = i;
        }
        order
    };

    let sorted_lms: Vec<usize> = order.iter().map(|&i| lms_positions[i]).collect();
    induce(text, &types, &bucket_sizes, &sorted_lms, &mut sa);

    sa
}

/// Seed `sa` with `lms` (placed so that their given order is preserved inside
/// each bucket), then induce L-type and S-type suffixes.
fn induce(
    text: &[usize],
    types: &[SuffixType],
    bucket_sizes: &[usize],
    lms: &[usize],
    sa: &mut [usize],
) {
    sa.fill(EMPTY);

    let mut tails = bucket_tails(bucket_sizes);
    for &pos in lms.iter().rev() {
        let c = text[pos];
        tails[c] -= 1;
        sa[tails[c]] = pos;
    }

    let mut heads = bucket_heads(bucket_sizes);
    for i in 0..sa.len() {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos - 1;
        if types[j] == SuffixType::L {
            let c = text[j];
            sa[heads[c]] = j;
            heads[c] += 1;
        }
    }

    let mut tails = bucket_tails(bucket_sizes);
    for i in (0..sa.len()).rev() {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos - 1;
        if types[j] == SuffixType::S {
            let c = text[j];
            tails[c] -= 1;
            sa[tails[c]] = j;
        }
    }
}

fn classify(text: &[usize]) -> Vec<SuffixType> {
    let n = text.len();
    let mut types = vec![SuffixType::S; n];
    for i in (0..n - 1).rev() {
        types[i] = match text[i].cmp(&text[i + 1]) {
            std::cmp::Ordering::Greater => SuffixType::L,
            std::cmp::Ordering::Less => SuffixType::S,
            std::cmp::Ordering::Equal => types[i + 1],
        };
    }
    types
}

#[inline]
fn is_lms(types: &[SuffixType], i: usize) -> bool {
    i > 0 && i < types.len() && types[i] == SuffixType::S && types[i - 1] == SuffixType::L
}

fn bucket_sizes(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    let mut sizes = vec![0; alphabet_size];
    for &c in text {
        sizes[c] += 1;
    }
    sizes
}

fn bucket_heads(sizes: &[usize]) -> Vec<usize> {
    let mut sum = 0;
    sizes
        .iter()
        .map(|&size| {
            let head = sum;
            sum += size;
            head
        })
        .collect()
}

fn bucket_tails(sizes: &[usize]) -> Vec<usize> {
    let mut sum = 0;
    sizes
        .iter()
        .map(|&size| {
            sum += size;
            sum
        })
        .collect()
}

/// Two LMS substrings are equal when they have the same symbols and types up to
/// and including the next LMS position.
fn lms_substrings_equal(text: &[usize], types: &[SuffixType], a: usize, b: usize) -> bool {
    let sentinel = text.len() - 1;
    if a == sentinel || b == sentinel {
        return a == b;
    }

    let mut k = 0;
    loop {
        let (i, j) = (a + k, b + k);
        // The sentinel is unique, so reaching it on one side means a mismatch
        // before either index can run off the end.
        if text[i] != text[j] || types[i] != types[j] {
            return false;
        }
        if k > 0 {
            let (lms_i, lms_j) = (is_lms(types, i), is_lms(types, j));
            if lms_i || lms_j {
                return lms_i && lms_j;
            }
        }
        k += 1;
    }
}
