// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate-set intersection.

use std::collections::HashSet;

use crate::trie::Trie;
use crate::types::ResultId;

/// Ids matching every token as a prefix, with AND semantics.
///
/// Short-circuits to empty as soon as one token has no candidates. The
/// intersection starts from the smallest set so the running set only shrinks
/// from there.
pub fn intersect_candidates<'a>(trie: &'a Trie, tokens: &[String]) -> HashSet<&'a ResultId> {
    let mut sets: Vec<&HashSet<ResultId>> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match trie.prefix_matches(token) {
            Some(ids) if !ids.is_empty() => sets.push(ids),
            _ => return HashSet::new(),
        }
    }

    sets.sort_by_key(|ids| ids.len());
    let Some((&smallest, rest)) = sets.split_first() else {
        return HashSet::new();
    };

    let mut survivors: HashSet<&ResultId> = smallest.iter().collect();
    for ids in rest {
        survivors.retain(|id| ids.contains(*id));
        if survivors.is_empty() {
            break;
        }
    }
    survivors
}
