// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index verification.
//!
//! Two complementary checks:
//!
//! 1. [`verify_index`] walks the whole trie and returns the first invariant
//!    violation, or a [`VerificationReport`] with structural statistics. The
//!    `inspect` command and the tests use it.
//!
//! 2. **Runtime contracts** in [`contracts`] that panic in debug builds when a
//!    freshly built index or a ranked result list is malformed. Free in
//!    release builds.

pub mod contracts;
mod types;

pub use types::*;

use std::collections::HashSet;

use crate::index::SearchIndex;
use crate::trie::TrieNode;
use crate::types::ResultId;

/// Check every structural invariant of `index`.
///
/// - every id in a trie node has a record (no dangling references);
/// - a child's ids are a subset of its parent's (ids are added along the whole
///   path, so a child can never know a result its parent does not);
/// - every leaf ends a word.
pub fn verify_index(index: &SearchIndex) -> Result<VerificationReport, InvariantError> {
    let mut report = VerificationReport {
        records: index.len(),
        ..VerificationReport::default()
    };

    // (node, path to it, parent's id set; None for children of the root)
    let mut stack: Vec<(&TrieNode, String, Option<&HashSet<ResultId>>)> = index
        .trie()
        .root()
        .children()
        .map(|(c, child)| (child, c.to_string(), None))
        .collect();

    while let Some((node, path, parent_ids)) = stack.pop() {
        report.nodes += 1;
        report.id_references += node.result_ids().len();
        report.max_depth = report.max_depth.max(path.chars().count());

        if node.is_end_of_word() {
            report.words += 1;
        } else if node.children().next().is_none() {
            return Err(InvariantError::LeafNotWord { path });
        }

        for id in node.result_ids() {
            if index.get(id).is_none() {
                return Err(InvariantError::DanglingResultId {
                    id: id.to_string(),
                    path,
                });
            }
            if parent_ids.is_some_and(|parent| !parent.contains(id)) {
                return Err(InvariantError::MissingFromParent {
                    id: id.to_string(),
                    path,
                });
            }
        }

        for (c, child) in node.children() {
            let mut child_path = path.clone();
            child_path.push(c);
            stack.push((child, child_path, Some(node.result_ids())));
        }
    }

    Ok(report)
}
