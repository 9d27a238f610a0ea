//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::index::SearchIndex;
use crate::provider::Catalog;
use crate::types::{MenuItem, RestaurantSummary};

/// Create a restaurant with an empty address.
pub fn restaurant(
    id: &str,
    name: &str,
    category: &str,
    cuisine: &[&str],
    priority: Option<f64>,
) -> RestaurantSummary {
    RestaurantSummary {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        cuisine: cuisine.iter().map(|c| c.to_string()).collect(),
        address: String::new(),
        priority,
    }
}

pub fn menu_item(name: &str, category: &str, price: f64) -> MenuItem {
    MenuItem {
        item_name: name.to_string(),
        category: category.to_string(),
        price,
    }
}

/// The two restaurants every scenario test starts from.
///
/// | Restaurant    | Priority | Dish            |
/// |---------------|----------|-----------------|
/// | Cups N Crumbs | 1        | Chocolate Cake  |
/// | Spice Garden  | none     | Chicken Biryani |
pub fn fixture_restaurants() -> Vec<(RestaurantSummary, Vec<MenuItem>)> {
    let mut cups = restaurant(
        "cups-n-crumbs",
        "Cups N Crumbs",
        "Cafe",
        &["Bakery"],
        Some(1.0),
    );
    cups.address = "MG Road".to_string();

    let mut spice = restaurant(
        "spice-garden",
        "Spice Garden",
        "Restaurant",
        &["North Indian"],
        None,
    );
    spice.address = "Park Street".to_string();

    vec![
        (cups, vec![menu_item("Chocolate Cake", "Desserts", 150.0)]),
        (spice, vec![menu_item("Chicken Biryani", "Biryani", 220.0)]),
    ]
}

pub fn fixture_catalog() -> Catalog {
    fixture_restaurants()
        .into_iter()
        .fold(Catalog::new(), |catalog, (summary, menu)| {
            catalog.with_restaurant(summary, menu)
        })
}

/// The fixture catalog indexed synchronously.
pub fn fixture_index() -> SearchIndex {
    let mut index = SearchIndex::new();
    for (summary, menu) in fixture_restaurants() {
        index.add_restaurant(&summary);
        index.add_menu(&summary, &menu);
    }
    index
}
