// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix search over restaurants and their menus.
//!
//! Restaurants and dishes are tokenized into a character trie. Every node on a
//! token's path remembers which results pass through it, so a prefix lookup is
//! a walk of `prefix.len()` steps with no subtree traversal. Multi-word queries
//! intersect the per-token sets (AND semantics) and the survivors are ranked by
//! the restaurant's display priority.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  provider.rs │────▶│   build/     │────▶│   index.rs   │
//! │ (restaurants,│     │ (fan-out menu│     │ (trie + item │
//! │    menus)    │     │  fetches)    │     │     map)     │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             ▲                    │
//!                             │                    ▼
//!                      ┌──────────────┐     ┌──────────────┐
//!                      │  engine.rs   │────▶│   search/    │
//!                      │ (lazy, once) │     │ (intersect,  │
//!                      └──────────────┘     │    rank)     │
//!                                           └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use savor::{Catalog, EngineConfig, SearchEngine};
//!
//! let catalog = Catalog::from_path("catalog.json")?;
//! let engine = SearchEngine::new(catalog, EngineConfig::default());
//!
//! let results = engine.search("chicken biry", None).await?;
//! ```
//!
//! The index is built once per engine and never updated in place. A changed
//! menu shows up only after [`SearchEngine::invalidate`] or
//! [`SearchEngine::rebuild`].

pub mod build;
pub mod config;
pub mod engine;
pub mod error;
mod index;
pub mod provider;
mod scoring;
mod search;
pub mod testing;
mod trie;
mod types;
mod util;
pub mod verify;

pub use build::{build_index, BuildReport, SkipReason, SkippedMenu};
pub use config::{EngineConfig, MenuFailurePolicy};
pub use engine::{EngineState, SearchEngine};
pub use error::{BuildError, CatalogError, ProviderError};
pub use index::SearchIndex;
pub use provider::{Catalog, CatalogRestaurant, MenuProvider, ProviderPair, RestaurantProvider};
pub use scoring::{compare_results, match_score};
pub use search::{search, search_with_options, SearchOptions, DEFAULT_LIMIT, MIN_QUERY_LEN};
pub use trie::{Trie, TrieNode};
pub use types::{
    dish_result_id, restaurant_result_id, MenuItem, RestaurantSummary, ResultId, ResultKind,
    ResultType, SearchResult,
};
pub use util::{normalize, query_len, tokenize};
pub use verify::{verify_index, InvariantError, VerificationReport};
