// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What a build did, for logs and the `inspect` command.

use std::fmt;
use std::time::Duration;

/// Why a restaurant's dishes are missing from the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Failed(String),
    TimedOut(Duration),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Failed(error) => write!(f, "fetch failed: {}", error),
            SkipReason::TimedOut(limit) => write!(f, "timed out after {:?}", limit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedMenu {
    pub restaurant_id: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub restaurants: usize,
    pub dishes: usize,
    pub tokens: usize,
    pub trie_nodes: usize,
    /// Restaurants indexed without their menu.
    pub skipped: Vec<SkippedMenu>,
    pub elapsed: Duration,
}

impl BuildReport {
    /// True when every menu made it into the index.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} restaurants │ {} dishes │ {} tokens │ {} nodes │ {:.1?}",
            self.restaurants, self.dishes, self.tokens, self.trie_nodes, self.elapsed
        )?;
        if !self.is_complete() {
            write!(f, " │ {} menus skipped", self.skipped.len())?;
        }
        Ok(())
    }
}
