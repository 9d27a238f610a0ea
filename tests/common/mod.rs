//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use savor::{
    tokenize, Catalog, EngineConfig, MenuItem, MenuProvider, ProviderError, RestaurantProvider,
    RestaurantSummary, ResultKind, SearchEngine, SearchIndex, SearchResult,
};

// Re-export canonical test utilities from savor::testing
pub use savor::testing::{fixture_catalog, fixture_index, menu_item, restaurant};

// ============================================================================
// FIXTURES
// ============================================================================

pub fn fixture_engine() -> SearchEngine<Catalog> {
    SearchEngine::new(fixture_catalog(), EngineConfig::default())
}

/// Index one restaurant per name, each with no menu.
pub fn index_of_names(names: &[String]) -> SearchIndex {
    let mut index = SearchIndex::new();
    for (i, name) in names.iter().enumerate() {
        index.add_restaurant(&restaurant(&format!("r{}", i), name, "", &[], None));
    }
    index
}

pub fn titles(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.title.as_str()).collect()
}

/// Every token a result was indexed under, rebuilt from its own fields.
pub fn indexed_tokens(result: &SearchResult) -> Vec<String> {
    let mut tokens = tokenize(&result.title);
    match &result.kind {
        ResultKind::Restaurant {
            category, cuisine, ..
        } => {
            tokens.extend(tokenize(category));
            for tag in cuisine {
                tokens.extend(tokenize(tag));
            }
        }
        ResultKind::Dish { category, .. } => tokens.extend(tokenize(category)),
    }
    tokens
}

// ============================================================================
// SCRIPTED PROVIDER
// ============================================================================

/// A catalog-backed provider that can be told to misbehave.
#[derive(Default)]
pub struct ScriptedProvider {
    catalog: Catalog,
    failing_menus: HashSet<String>,
    stalled_menus: HashSet<String>,
    list_delay: Option<Duration>,
    listing_fails: AtomicBool,
    list_calls: AtomicUsize,
    menu_calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(catalog: Catalog) -> Self {
        ScriptedProvider {
            catalog,
            ..ScriptedProvider::default()
        }
    }

    /// Menu fetches for `restaurant_id` return an error.
    pub fn failing_menu(mut self, restaurant_id: &str) -> Self {
        self.failing_menus.insert(restaurant_id.to_string());
        self
    }

    /// Menu fetches for `restaurant_id` never complete.
    pub fn stalled_menu(mut self, restaurant_id: &str) -> Self {
        self.stalled_menus.insert(restaurant_id.to_string());
        self
    }

    /// Listing sleeps first, so concurrent callers overlap.
    pub fn with_list_delay(mut self, delay: Duration) -> Self {
        self.list_delay = Some(delay);
        self
    }

    pub fn set_listing_fails(&self, fails: bool) {
        self.listing_fails.store(fails, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn menu_calls(&self) -> usize {
        self.menu_calls.load(Ordering::SeqCst)
    }
}

impl RestaurantProvider for ScriptedProvider {
    async fn list_public_restaurants(&self) -> Result<Vec<RestaurantSummary>, ProviderError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.list_delay {
            tokio::time::sleep(delay).await;
        }
        if self.listing_fails.load(Ordering::SeqCst) {
            return Err(ProviderError::msg("restaurant listing unavailable"));
        }
        self.catalog.list_public_restaurants().await
    }
}

impl MenuProvider for ScriptedProvider {
    async fn get_menu_items(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, ProviderError> {
        self.menu_calls.fetch_add(1, Ordering::SeqCst);
        if self.stalled_menus.contains(restaurant_id) {
            std::future::pending::<()>().await;
        }
        if self.failing_menus.contains(restaurant_id) {
            return Err(ProviderError::msg(format!(
                "menu service down for {}",
                restaurant_id
            )));
        }
        self.catalog.get_menu_items(restaurant_id).await
    }
}
