// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how ranked results get their numbers and their order.
//!
//! The formula is plain TF-IDF with two twists: phrase matches add weighted
//! n-gram counts to the term frequency, and short documents are padded so a
//! three-word fragment cannot outrank a sonnet on a single hit.

mod core;
pub mod ranking;

pub use core::*;
