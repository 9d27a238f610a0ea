// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Records that flow into and out of the index.
//!
//! Providers hand us `RestaurantSummary` and `MenuItem`. Callers get back
//! `SearchResult`, a denormalized record that is ready to display. The trie
//! never holds these records; it holds result ids, and the index keeps exactly
//! one record per id.
//!
//! # Result ids
//!
//! | Kind       | Id format                      | Example               |
//! |------------|--------------------------------|-----------------------|
//! | Restaurant | `r-<restaurantId>`             | `r-spice-garden`      |
//! | Dish       | `d-<restaurantId>-<itemIndex>` | `d-spice-garden-0`    |
//!
//! Dish ids are positional. A provider must return a menu in a stable order
//! for the duration of one build; nothing is assumed across builds.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::scoring::match_score;

/// Shared result id. Every trie node on a token's path holds a clone, so this
/// is reference-counted rather than an owned `String`.
pub type ResultId = Arc<str>;

/// A live restaurant as reported by the listing provider.
///
/// Visibility filtering is the provider's job; anything returned here gets
/// indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub cuisine: Vec<String>,
    #[serde(default)]
    pub address: String,
    /// Admin-assigned display priority. Lower numbers rank higher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
}

/// One entry of a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub item_name: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
}

/// Discriminant of a result, ordered the way ranking breaks ties:
/// restaurants before dishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    Restaurant,
    Dish,
}

/// The part of a result that depends on what kind of entity it is.
///
/// Only restaurants carry a `match_score`; a dish cannot be boosted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResultKind {
    #[serde(rename_all = "camelCase")]
    Restaurant {
        match_score: f64,
        category: String,
        cuisine: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Dish {
        restaurant_name: String,
        category: String,
        price: f64,
    },
}

/// What users see when they get a search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Navigation target. Dishes deep-link to their category section.
    pub url: String,
    pub restaurant_id: String,
    #[serde(flatten)]
    pub kind: ResultKind,
}

impl SearchResult {
    /// Build the record for a restaurant. The score is fixed here and never
    /// recomputed per query.
    pub fn restaurant(restaurant: &RestaurantSummary) -> Self {
        SearchResult {
            id: restaurant_result_id(&restaurant.id),
            title: restaurant.name.clone(),
            subtitle: join_subtitle(&restaurant.category, &restaurant.address),
            url: restaurant_url(&restaurant.id),
            restaurant_id: restaurant.id.clone(),
            kind: ResultKind::Restaurant {
                match_score: match_score(restaurant.priority),
                category: restaurant.category.clone(),
                cuisine: restaurant.cuisine.clone(),
            },
        }
    }

    /// Build the record for the item at `position` in `restaurant`'s menu.
    pub fn dish(restaurant: &RestaurantSummary, position: usize, item: &MenuItem) -> Self {
        let mut url = restaurant_url(&restaurant.id);
        let anchor = category_anchor(&item.category);
        if !anchor.is_empty() {
            url.push('#');
            url.push_str(&anchor);
        }

        SearchResult {
            id: dish_result_id(&restaurant.id, position),
            title: item.item_name.clone(),
            subtitle: join_subtitle(&format_price(item.price), &restaurant.name),
            url,
            restaurant_id: restaurant.id.clone(),
            kind: ResultKind::Dish {
                restaurant_name: restaurant.name.clone(),
                category: item.category.clone(),
                price: item.price,
            },
        }
    }

    pub fn result_type(&self) -> ResultType {
        match self.kind {
            ResultKind::Restaurant { .. } => ResultType::Restaurant,
            ResultKind::Dish { .. } => ResultType::Dish,
        }
    }

    /// Ranking boost. Always 0 for dishes.
    pub fn match_score(&self) -> f64 {
        match self.kind {
            ResultKind::Restaurant { match_score, .. } => match_score,
            ResultKind::Dish { .. } => 0.0,
        }
    }
}

pub fn restaurant_result_id(restaurant_id: &str) -> String {
    format!("r-{}", restaurant_id)
}

pub fn dish_result_id(restaurant_id: &str, position: usize) -> String {
    format!("d-{}-{}", restaurant_id, position)
}

fn restaurant_url(restaurant_id: &str) -> String {
    format!("/restaurant/{}", restaurant_id)
}

/// "Main Course" -> "main-course"
fn category_anchor(category: &str) -> String {
    category
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn format_price(price: f64) -> String {
    if price.is_finite() && price.fract() == 0.0 {
        format!("₹{:.0}", price)
    } else {
        format!("₹{}", price)
    }
}

fn join_subtitle(first: &str, second: &str) -> String {
    match (first.is_empty(), second.is_empty()) {
        (false, false) => format!("{} • {}", first, second),
        (false, true) => first.to_string(),
        (true, false) => second.to_string(),
        (true, true) => String::new(),
    }
}
