// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: everything built once during the load phase.
//!
//! Leaves first:
//! - **text**: corpus + suffix array, literal and regex lookups
//! - **segment**: blank-line runs split the corpus into documents
//! - **tokenize**: whitespace runs split it into normalized terms
//! - **inverted**: TF, DF, n-gram TF and document lengths

mod sais;
pub mod inverted;
pub mod segment;
pub mod text;
pub mod tokenize;

pub use inverted::{InvertedIndex, Posting};
pub use sais::build_suffix_array;
pub use segment::{segment, Segmentation, DOCUMENT_BREAK};
pub use text::TextIndex;
pub use tokenize::{query_terms, tokenize, WHITESPACE};
