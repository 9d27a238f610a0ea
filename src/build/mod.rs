// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction.
//!
//! 1. List live restaurants. If this fails there is nothing to index, so the
//!    build fails.
//! 2. Index each restaurant (name, category, cuisines) with its priority
//!    boost.
//! 3. Fetch every menu concurrently, each bounded by the menu timeout.
//! 4. Index every dish (item name, category) under its positional id.
//!
//! A menu that fails or times out is handled by [`MenuFailurePolicy`]: `Skip`
//! keeps the restaurant searchable without its dishes, `Abort` fails the build.

pub mod parallel;
mod report;

use std::time::Instant;

use tracing::{info, warn};

use crate::config::{EngineConfig, MenuFailurePolicy};
use crate::error::BuildError;
use crate::index::SearchIndex;
use crate::provider::{MenuProvider, RestaurantProvider};
use crate::verify::contracts::check_index_well_formed;

pub use parallel::MenuOutcome;
pub use report::{BuildReport, SkipReason, SkippedMenu};

/// Build a fresh index from `provider`.
pub async fn build_index<P>(
    provider: &P,
    config: &EngineConfig,
) -> Result<(SearchIndex, BuildReport), BuildError>
where
    P: RestaurantProvider + MenuProvider,
{
    let started = Instant::now();

    let restaurants = provider
        .list_public_restaurants()
        .await
        .map_err(BuildError::Restaurants)?;

    let mut index = SearchIndex::new();
    for restaurant in &restaurants {
        index.add_restaurant(restaurant);
    }

    let outcomes = match config.menu_failure_policy {
        MenuFailurePolicy::Skip => {
            parallel::fetch_menus(provider, &restaurants, config.menu_timeout).await
        }
        MenuFailurePolicy::Abort => {
            parallel::fetch_menus_fail_fast(provider, &restaurants, config.menu_timeout)
                .await?
                .into_iter()
                .map(MenuOutcome::Loaded)
                .collect()
        }
    };

    let mut report = BuildReport {
        restaurants: restaurants.len(),
        ..BuildReport::default()
    };

    for (restaurant, outcome) in restaurants.iter().zip(outcomes) {
        let reason = match outcome {
            MenuOutcome::Loaded(items) => {
                report.dishes += index.add_menu(restaurant, &items);
                continue;
            }
            MenuOutcome::Failed(error) => SkipReason::Failed(error.to_string()),
            MenuOutcome::TimedOut(limit) => SkipReason::TimedOut(limit),
        };

        warn!(
            restaurant_id = %restaurant.id,
            %reason,
            "Indexing restaurant without its menu"
        );
        report.skipped.push(SkippedMenu {
            restaurant_id: restaurant.id.clone(),
            reason,
        });
    }

    check_index_well_formed(&index);

    report.tokens = index.token_count();
    report.trie_nodes = index.trie().node_count();
    report.elapsed = started.elapsed();

    info!(
        restaurants = report.restaurants,
        dishes = report.dishes,
        skipped = report.skipped.len(),
        elapsed_ms = report.elapsed.as_millis() as u64,
        "Search index built"
    );

    Ok((index, report))
}
