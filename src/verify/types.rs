// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Verification results.

use std::fmt;

/// Error type for invariant violations. `path` is the token prefix spelled
/// from the root to the offending node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A trie node references an id with no record.
    DanglingResultId { id: String, path: String },
    /// A node holds an id its parent does not.
    MissingFromParent { id: String, path: String },
    /// A node with no children that does not end a word.
    LeafNotWord { path: String },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::DanglingResultId { id, path } => {
                write!(f, "node '{}' references unknown result '{}'", path, id)
            }
            InvariantError::MissingFromParent { id, path } => {
                write!(
                    f,
                    "node '{}' holds result '{}' missing from its parent",
                    path, id
                )
            }
            InvariantError::LeafNotWord { path } => {
                write!(f, "leaf node '{}' does not end a word", path)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Structural statistics gathered while verifying.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    pub records: usize,
    pub nodes: usize,
    /// Nodes that end a token.
    pub words: usize,
    /// Sum of id-set sizes over all nodes.
    pub id_references: usize,
    pub max_depth: usize,
}

impl VerificationReport {
    /// Average number of ids per node.
    pub fn mean_fanout(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.id_references as f64 / self.nodes as f64
        }
    }
}
