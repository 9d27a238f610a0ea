//! Inputs at the edges: empty, delimiter-only, mixed case, repeated words.

use super::common::{fixture_index, menu_item, restaurant, titles};
use savor::{search, search_with_options, SearchIndex, SearchOptions, DEFAULT_LIMIT};

#[test]
fn blank_and_delimiter_only_queries_are_empty() {
    let index = fixture_index();

    for query in ["", "   ", "\t\n", "--", ", .", " - "] {
        assert!(
            search(&index, query, DEFAULT_LIMIT).is_empty(),
            "expected nothing for {:?}",
            query
        );
    }
}

#[test]
fn short_query_with_padding_is_still_short() {
    assert!(search(&fixture_index(), "   c   ", DEFAULT_LIMIT).is_empty());
}

#[test]
fn case_and_delimiters_in_the_query_are_ignored() {
    let index = fixture_index();

    assert_eq!(titles(&search(&index, "CHOCOLATE", DEFAULT_LIMIT)), vec!["Chocolate Cake"]);
    assert_eq!(
        titles(&search(&index, "chicken,biryani.", DEFAULT_LIMIT)),
        vec!["Chicken Biryani"]
    );
    assert_eq!(titles(&search(&index, "north-indian", DEFAULT_LIMIT)), vec!["Spice Garden"]);
}

#[test]
fn repeated_query_tokens_do_not_change_results() {
    let index = fixture_index();

    assert_eq!(
        search(&index, "cake cake cake", DEFAULT_LIMIT),
        search(&index, "cake", DEFAULT_LIMIT)
    );
}

#[test]
fn a_one_letter_token_counts_if_the_query_is_long_enough() {
    // "n" alone is too short, but "cups n" is fine and "n" must prefix a word
    let index = fixture_index();

    assert_eq!(titles(&search(&index, "cups n", DEFAULT_LIMIT)), vec!["Cups N Crumbs"]);
    assert!(search(&index, "n", DEFAULT_LIMIT).is_empty());
}

#[test]
fn longer_than_any_word_is_empty() {
    assert!(search(&fixture_index(), "chocolates", DEFAULT_LIMIT).is_empty());
}

#[test]
fn empty_index_returns_nothing() {
    assert!(search(&SearchIndex::new(), "anything", DEFAULT_LIMIT).is_empty());
}

#[test]
fn zero_limit_returns_nothing() {
    assert!(search(&fixture_index(), "cake", 0).is_empty());
}

#[test]
fn minimum_length_is_configurable() {
    let index = fixture_index();
    let options = SearchOptions {
        limit: DEFAULT_LIMIT,
        min_query_len: 1,
    };

    // "c" now passes the guard: Cups N Crumbs, Chocolate Cake, Chicken Biryani
    assert_eq!(search_with_options(&index, "c", &options).len(), 3);
}

#[test]
fn a_word_repeated_across_fields_is_one_result() {
    let mut index = SearchIndex::new();
    let host = restaurant("h", "Biryani House", "Biryani", &["Biryani"], None);
    index.add_restaurant(&host);
    index.add_menu(&host, &[menu_item("Biryani", "Biryani", 200.0)]);

    let results = search(&index, "biryani", DEFAULT_LIMIT);
    assert_eq!(titles(&results), vec!["Biryani House", "Biryani"]);
}

#[test]
fn non_ascii_text_is_matched_by_character() {
    let mut index = SearchIndex::new();
    index.add_restaurant(&restaurant("k", "Kōji Ramen", "", &["日本料理"], None));

    assert_eq!(titles(&search(&index, "kō", DEFAULT_LIMIT)), vec!["Kōji Ramen"]);
    assert_eq!(titles(&search(&index, "日本", DEFAULT_LIMIT)), vec!["Kōji Ramen"]);
}
