// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts.
//!
//! Debug-mode assertions for properties the rest of the crate relies on. In
//! release builds every function here compiles to nothing.
//!
//! | Contract                 | Property                                      |
//! |--------------------------|-----------------------------------------------|
//! | `check_index_well_formed`| no dangling ids, prefix-closed id sets        |
//! | `check_results_ranked`   | output sorted by boost, type, title, id       |
//! | `check_within_limit`     | never more results than requested             |

use std::cmp::Ordering;

use crate::index::SearchIndex;
use crate::scoring::compare_results;
use crate::types::SearchResult;

use super::verify_index;

/// Panics in debug builds if `index` violates a structural invariant.
#[inline]
pub fn check_index_well_formed(index: &SearchIndex) {
    if cfg!(debug_assertions) {
        if let Err(error) = verify_index(index) {
            panic!("index invariant violated: {}", error);
        }
    }
}

/// Panics in debug builds if `results` are not in ranking order.
#[inline]
pub fn check_results_ranked(results: &[SearchResult]) {
    debug_assert!(
        results
            .windows(2)
            .all(|pair| compare_results(&pair[0], &pair[1]) != Ordering::Greater),
        "results out of ranking order"
    );
}

#[inline]
pub fn check_within_limit(results: &[SearchResult], limit: usize) {
    debug_assert!(
        results.len() <= limit,
        "{} results exceed limit {}",
        results.len(),
        limit
    );
}
