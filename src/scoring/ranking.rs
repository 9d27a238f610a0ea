// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking.

use std::cmp::Ordering;

use crate::types::SearchResult;

/// Compare two search results for ranking.
///
/// Sort order:
/// 1. **Boost** - higher `match_score` first
/// 2. **Type** - restaurants before dishes
/// 3. **Title** - alphabetical
/// 4. **Id** - final tiebreaker so equal titles still order deterministically
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.match_score()
        .total_cmp(&a.match_score())
        .then_with(|| a.result_type().cmp(&b.result_type()))
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.id.cmp(&b.id))
}
