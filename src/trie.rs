// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character trie with result ids on every node.
//!
//! A plain trie marks only the node that ends a word, so answering "what starts
//! with `chi`?" means walking the whole subtree under `c → h → i`. Here every
//! node along a token's path records the result id, which turns prefix lookup
//! into a walk of `prefix.len()` steps followed by a set read.
//!
//! ```text
//! insert("cake", d-1)        root
//!                              └─ c {d-1}
//!                                  └─ a {d-1}
//!                                      └─ k {d-1}
//!                                          └─ e {d-1} (end of word)
//! ```
//!
//! The price is memory and insert time: a token of length n adds the id to n
//! sets. Inserts happen once per build, lookups happen on every keystroke.
//!
//! There is no removal. The trie only grows until it is thrown away.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::types::ResultId;
use crate::util::tokenize;

/// One node of the trie. The root never holds ids.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_end_of_word: bool,
    result_ids: HashSet<ResultId>,
}

impl TrieNode {
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(c, node)| (*c, node))
    }

    /// True if some inserted token ends exactly here.
    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    /// Every result whose indexed text has a token passing through this node.
    pub fn result_ids(&self) -> &HashSet<ResultId> {
        &self.result_ids
    }
}

#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    node_count: usize,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Nodes below the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Tokenize `text` and register every token under `id`.
    ///
    /// Returns the number of tokens inserted.
    pub fn insert(&mut self, text: &str, id: &ResultId) -> usize {
        let tokens = tokenize(text);
        for token in &tokens {
            self.insert_token(token, id);
        }
        tokens.len()
    }

    /// Register one already-normalized token under `id`.
    pub fn insert_token(&mut self, token: &str, id: &ResultId) {
        if token.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for c in token.chars() {
            node = match node.children.entry(c) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    self.node_count += 1;
                    entry.insert(TrieNode::default())
                }
            };
            node.result_ids.insert(ResultId::clone(id));
        }
        node.is_end_of_word = true;
    }

    /// Follow `prefix` from the root. `None` if the path breaks partway.
    pub fn find(&self, prefix: &str) -> Option<&TrieNode> {
        prefix.chars().try_fold(&self.root, |node, c| node.child(c))
    }

    /// Ids of every result with an indexed token starting with `prefix`.
    ///
    /// The empty prefix matches nothing: it would land on the root, which
    /// holds no ids.
    pub fn prefix_matches(&self, prefix: &str) -> Option<&HashSet<ResultId>> {
        if prefix.is_empty() {
            return None;
        }
        self.find(prefix).map(TrieNode::result_ids)
    }
}
