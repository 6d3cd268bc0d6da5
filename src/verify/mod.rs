// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts over the built index.
//!
//! Every check is a `debug_assert!`, so release builds pay nothing. Debug
//! builds, and therefore every test run, check the load phase's output before
//! a `Searcher` is handed out.

pub mod contracts;
