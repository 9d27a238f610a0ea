// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query engine.
//!
//! A query is tokenized exactly like indexed text. Each token walks the trie
//! once; the node it lands on already holds every result with a word starting
//! with that token. Tokens combine with AND: `"chicken biryani"` needs some
//! word starting with `chicken` and some (possibly different) word starting
//! with `biryani`, in any field of the same result. Adjacency is not required.
//!
//! Queries never fail. Too short, no tokens, and no matches all come back as
//! an empty list.

pub mod utils;

use crate::index::SearchIndex;
use crate::scoring::compare_results;
use crate::types::SearchResult;
use crate::util::{query_len, tokenize};
use crate::verify::contracts::{check_results_ranked, check_within_limit};

use utils::intersect_candidates;

/// Results returned when the caller does not ask for a limit.
pub const DEFAULT_LIMIT: usize = 20;

/// Shorter queries return nothing; a single character matches too much to be
/// useful.
pub const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub limit: usize,
    pub min_query_len: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            limit: DEFAULT_LIMIT,
            min_query_len: MIN_QUERY_LEN,
        }
    }
}

/// Search `index` for `query`, returning at most `limit` ranked results.
pub fn search(index: &SearchIndex, query: &str, limit: usize) -> Vec<SearchResult> {
    search_with_options(
        index,
        query,
        &SearchOptions {
            limit,
            ..SearchOptions::default()
        },
    )
}

pub fn search_with_options(
    index: &SearchIndex,
    query: &str,
    options: &SearchOptions,
) -> Vec<SearchResult> {
    if options.limit == 0 || query_len(query) < options.min_query_len {
        return Vec::new();
    }

    let tokens = tokenize(query);
    let ids = intersect_candidates(index.trie(), &tokens);
    if ids.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<&SearchResult> = ids.into_iter().filter_map(|id| index.get(id)).collect();

    // Partition first so only the survivors pay for a full sort
    if results.len() > options.limit {
        results.select_nth_unstable_by(options.limit, |a, b| compare_results(a, b));
        results.truncate(options.limit);
    }
    results.sort_unstable_by(|a, b| compare_results(a, b));

    let results: Vec<SearchResult> = results.into_iter().cloned().collect();
    check_within_limit(&results, options.limit);
    check_results_ranked(&results);
    results
}
