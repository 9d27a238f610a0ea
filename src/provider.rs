// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where restaurants and menus come from.
//!
//! The index depends on two read-only collaborators: one lists live
//! restaurants, the other returns a restaurant's menu. Anything async can sit
//! behind them: a database, an HTTP API, a spreadsheet export. [`Catalog`] is
//! the in-memory implementation used by the CLI and the tests.
//!
//! # Catalog file format
//!
//! ```json
//! {
//!   "restaurants": [
//!     { "id": "spice-garden", "name": "Spice Garden", "category": "Restaurant",
//!       "cuisine": ["North Indian"], "address": "4 Park St", "priority": 2 }
//!   ],
//!   "menus": {
//!     "spice-garden": [
//!       { "itemName": "Chicken Biryani", "category": "Biryani", "price": 220 }
//!     ]
//!   }
//! }
//! ```
//!
//! A restaurant with `"live": false` is kept in the file but never listed.

use std::collections::HashMap;
use std::fs;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, ProviderError};
use crate::types::{MenuItem, RestaurantSummary};

/// Lists restaurants that are publicly visible right now.
pub trait RestaurantProvider: Send + Sync {
    fn list_public_restaurants(
        &self,
    ) -> impl Future<Output = Result<Vec<RestaurantSummary>, ProviderError>> + Send;
}

/// Returns one restaurant's menu.
///
/// Dish ids are positional, so the order must not change during a build.
pub trait MenuProvider: Send + Sync {
    fn get_menu_items(
        &self,
        restaurant_id: &str,
    ) -> impl Future<Output = Result<Vec<MenuItem>, ProviderError>> + Send;
}

impl<T: RestaurantProvider> RestaurantProvider for Arc<T> {
    fn list_public_restaurants(
        &self,
    ) -> impl Future<Output = Result<Vec<RestaurantSummary>, ProviderError>> + Send {
        (**self).list_public_restaurants()
    }
}

impl<T: MenuProvider> MenuProvider for Arc<T> {
    fn get_menu_items(
        &self,
        restaurant_id: &str,
    ) -> impl Future<Output = Result<Vec<MenuItem>, ProviderError>> + Send {
        (**self).get_menu_items(restaurant_id)
    }
}

/// Two separate collaborators presented as one source.
#[derive(Debug, Clone)]
pub struct ProviderPair<R, M> {
    pub restaurants: R,
    pub menus: M,
}

impl<R, M> ProviderPair<R, M> {
    pub fn new(restaurants: R, menus: M) -> Self {
        ProviderPair { restaurants, menus }
    }
}

impl<R: RestaurantProvider, M: Send + Sync> RestaurantProvider for ProviderPair<R, M> {
    fn list_public_restaurants(
        &self,
    ) -> impl Future<Output = Result<Vec<RestaurantSummary>, ProviderError>> + Send {
        self.restaurants.list_public_restaurants()
    }
}

impl<R: Send + Sync, M: MenuProvider> MenuProvider for ProviderPair<R, M> {
    fn get_menu_items(
        &self,
        restaurant_id: &str,
    ) -> impl Future<Output = Result<Vec<MenuItem>, ProviderError>> + Send {
        self.menus.get_menu_items(restaurant_id)
    }
}

/// A restaurant entry in a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRestaurant {
    #[serde(flatten)]
    pub summary: RestaurantSummary,
    #[serde(default = "default_live")]
    pub live: bool,
}

fn default_live() -> bool {
    true
}

/// In-memory restaurants and menus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub restaurants: Vec<CatalogRestaurant>,
    #[serde(default)]
    pub menus: HashMap<String, Vec<MenuItem>>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Catalog::from_json(&content)
    }

    /// Add a live restaurant with its menu.
    pub fn with_restaurant(mut self, summary: RestaurantSummary, menu: Vec<MenuItem>) -> Self {
        self.menus.insert(summary.id.clone(), menu);
        self.restaurants.push(CatalogRestaurant {
            summary,
            live: true,
        });
        self
    }

    /// Take a restaurant off the public listing. Returns false if unknown.
    pub fn set_live(&mut self, restaurant_id: &str, live: bool) -> bool {
        match self
            .restaurants
            .iter_mut()
            .find(|r| r.summary.id == restaurant_id)
        {
            Some(restaurant) => {
                restaurant.live = live;
                true
            }
            None => false,
        }
    }

    pub fn live_restaurants(&self) -> Vec<RestaurantSummary> {
        self.restaurants
            .iter()
            .filter(|r| r.live)
            .map(|r| r.summary.clone())
            .collect()
    }

    /// A restaurant without a menu entry has an empty menu.
    pub fn menu(&self, restaurant_id: &str) -> Vec<MenuItem> {
        self.menus.get(restaurant_id).cloned().unwrap_or_default()
    }
}

impl RestaurantProvider for Catalog {
    async fn list_public_restaurants(&self) -> Result<Vec<RestaurantSummary>, ProviderError> {
        Ok(self.live_restaurants())
    }
}

impl MenuProvider for Catalog {
    async fn get_menu_items(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, ProviderError> {
        Ok(self.menu(restaurant_id))
    }
}
