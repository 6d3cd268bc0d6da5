// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind ranked search.
//!
//! ```text
//! idf        = N / (DF(t) + 1)
//! tf         = TF(t, d) + Σ_{k=2..order} k · TF(t_i … t_{i+k-1}, d)
//! Nt         = len(d) + 100   if len(d) < 100
//!            = len(d)         otherwise
//! termScore  = (tf / Nt) · ln(idf)
//! ```
//!
//! `idf` is never zero: an unseen term has `DF = 0` and `idf = N`. It can drop
//! below 1 for a term present in nearly every document, making `ln(idf)`
//! negative; the positivity filter in the ranker handles that.

/// Documents with fewer unigrams than this are padded.
pub const SHORT_DOCUMENT_LENGTH: usize = 100;

/// Padding added to a short document's length.
pub const SHORT_DOCUMENT_PADDING: usize = 100;

/// `N / (DF + 1)`.
#[inline]
pub fn inverse_document_frequency(total_docs: usize, doc_freq: usize) -> f64 {
    total_docs as f64 / (doc_freq as f64 + 1.0)
}

/// Document length used as the TF denominator. Never zero.
#[inline]
pub fn effective_length(document_length: usize) -> usize {
    if document_length < SHORT_DOCUMENT_LENGTH {
        document_length + SHORT_DOCUMENT_PADDING
    } else {
        document_length
    }
}

/// Multiplier for a matched phrase of `k` tokens. Longer phrases count more.
#[inline]
pub fn ngram_weight(k: usize) -> u64 {
    k as u64
}

/// `(tf / Nt) · ln(idf)`.
#[inline]
pub fn term_score(tf: u64, effective_length: usize, idf: f64) -> f64 {
    (tf as f64 / effective_length as f64) * idf.ln()
}
