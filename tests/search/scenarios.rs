//! The two-restaurant fixture, query by query.
//!
//! Cups N Crumbs (priority 1, Cafe, Bakery) serves Chocolate Cake (Desserts).
//! Spice Garden (no priority, Restaurant, North Indian) serves Chicken Biryani
//! (Biryani).

use super::common::{fixture_index, titles};
use savor::{search, ResultKind, ResultType, DEFAULT_LIMIT};

#[test]
fn name_prefix_finds_the_restaurant_not_its_dish() {
    let results = search(&fixture_index(), "cup", DEFAULT_LIMIT);

    assert_eq!(titles(&results), vec!["Cups N Crumbs"]);
    assert_eq!(results[0].result_type(), ResultType::Restaurant);
    assert_eq!(results[0].id, "r-cups-n-crumbs");
    assert_eq!(results[0].match_score(), 100.0);
}

#[test]
fn dish_name_finds_the_dish_under_its_restaurant() {
    let results = search(&fixture_index(), "cake", DEFAULT_LIMIT);

    assert_eq!(titles(&results), vec!["Chocolate Cake"]);
    let dish = &results[0];
    assert_eq!(dish.id, "d-cups-n-crumbs-0");
    assert_eq!(dish.restaurant_id, "cups-n-crumbs");
    assert_eq!(dish.subtitle, "₹150 • Cups N Crumbs");
    assert_eq!(dish.url, "/restaurant/cups-n-crumbs#desserts");
    match &dish.kind {
        ResultKind::Dish {
            restaurant_name,
            price,
            ..
        } => {
            assert_eq!(restaurant_name, "Cups N Crumbs");
            assert_eq!(*price, 150.0);
        }
        other => panic!("expected a dish, got {:?}", other),
    }
}

#[test]
fn every_query_token_must_match() {
    let index = fixture_index();

    assert_eq!(
        titles(&search(&index, "chicken biryani", DEFAULT_LIMIT)),
        vec!["Chicken Biryani"]
    );
    // Order of tokens is irrelevant
    assert_eq!(
        titles(&search(&index, "biryani chicken", DEFAULT_LIMIT)),
        vec!["Chicken Biryani"]
    );
}

#[test]
fn category_word_matches_only_what_is_tagged_with_it() {
    let results = search(&fixture_index(), "biryani", DEFAULT_LIMIT);

    assert_eq!(titles(&results), vec!["Chicken Biryani"]);
    assert_eq!(results[0].result_type(), ResultType::Dish);
}

#[test]
fn single_character_is_below_the_minimum() {
    let index = fixture_index();

    assert!(search(&index, "a", DEFAULT_LIMIT).is_empty());
    assert!(search(&index, "c", DEFAULT_LIMIT).is_empty());
}

#[test]
fn unknown_prefix_is_empty() {
    assert!(search(&fixture_index(), "xyz123", DEFAULT_LIMIT).is_empty());
}

#[test]
fn only_genuine_prefixes_match() {
    let index = fixture_index();

    assert_eq!(
        titles(&search(&index, "ch", DEFAULT_LIMIT)),
        vec!["Chicken Biryani", "Chocolate Cake"]
    );
    // Substrings and typos never match
    assert!(search(&index, "hicken", DEFAULT_LIMIT).is_empty());
    assert!(search(&index, "icken", DEFAULT_LIMIT).is_empty());
    assert!(search(&index, "chiken", DEFAULT_LIMIT).is_empty());
}

#[test]
fn cuisine_and_category_tags_are_searchable() {
    let index = fixture_index();

    assert_eq!(titles(&search(&index, "bakery", DEFAULT_LIMIT)), vec!["Cups N Crumbs"]);
    assert_eq!(titles(&search(&index, "north ind", DEFAULT_LIMIT)), vec!["Spice Garden"]);
    assert_eq!(titles(&search(&index, "cafe", DEFAULT_LIMIT)), vec!["Cups N Crumbs"]);
    assert_eq!(titles(&search(&index, "dess", DEFAULT_LIMIT)), vec!["Chocolate Cake"]);
}
