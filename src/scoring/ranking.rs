// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering for ranked search.

use crate::types::RankedHit;
use std::cmp::Ordering;

/// Compare two ranked hits.
///
/// 1. **Score**, descending.
/// 2. **Document index**, ascending, so equal scores come back in corpus order
///    on every run.
pub fn compare_hits(a: &RankedHit, b: &RankedHit) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.document.cmp(&b.document))
}
