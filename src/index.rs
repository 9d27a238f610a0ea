// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search index: a trie of result ids plus the records they point at.
//!
//! The trie stores ids only. `items` is the single place full records live,
//! so a query resolves ids to records after intersection, never before.
//!
//! # Invariants
//!
//! - Every id in any trie node exists as a key in `items`.
//! - `items[id].id == id`.
//!
//! Both hold as long as records go in through [`SearchIndex::insert_result`]
//! before their text is indexed, which is what `add_restaurant` and `add_menu`
//! do. `verify::verify_index` checks them after the fact.

use std::collections::HashMap;

use crate::search::{search, DEFAULT_LIMIT};
use crate::trie::Trie;
use crate::types::{MenuItem, RestaurantSummary, ResultId, ResultType, SearchResult};

#[derive(Debug, Default, Clone)]
pub struct SearchIndex {
    trie: Trie,
    items: HashMap<ResultId, SearchResult>,
    token_count: usize,
}

impl SearchIndex {
    pub fn new() -> Self {
        SearchIndex::default()
    }

    /// Store `result`, replacing any earlier record with the same id.
    ///
    /// Returns the shared id to index text under.
    pub fn insert_result(&mut self, result: SearchResult) -> ResultId {
        let id = ResultId::from(result.id.as_str());
        self.items.insert(ResultId::clone(&id), result);
        id
    }

    /// Tokenize `text` into the trie under `id`.
    pub fn insert_text(&mut self, text: &str, id: &ResultId) {
        self.token_count += self.trie.insert(text, id);
    }

    /// Index a restaurant by name, category, and each cuisine tag.
    pub fn add_restaurant(&mut self, restaurant: &RestaurantSummary) -> ResultId {
        let id = self.insert_result(SearchResult::restaurant(restaurant));

        self.insert_text(&restaurant.name, &id);
        self.insert_text(&restaurant.category, &id);
        for cuisine in &restaurant.cuisine {
            self.insert_text(cuisine, &id);
        }

        id
    }

    /// Index every item of `restaurant`'s menu by item name and category.
    ///
    /// Returns the number of dishes added.
    pub fn add_menu(&mut self, restaurant: &RestaurantSummary, items: &[MenuItem]) -> usize {
        for (position, item) in items.iter().enumerate() {
            let id = self.insert_result(SearchResult::dish(restaurant, position, item));
            self.insert_text(&item.item_name, &id);
            self.insert_text(&item.category, &id);
        }
        items.len()
    }

    pub fn get(&self, id: &str) -> Option<&SearchResult> {
        self.items.get(id)
    }

    pub fn items(&self) -> impl Iterator<Item = &SearchResult> {
        self.items.values()
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Tokens inserted so far, counting repeats.
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    pub fn count_of(&self, result_type: ResultType) -> usize {
        self.items()
            .filter(|result| result.result_type() == result_type)
            .count()
    }

    /// Search with the default limit and minimum query length.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        search(self, query, DEFAULT_LIMIT)
    }
}
