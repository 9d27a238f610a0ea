// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Concurrent menu fetching.
//!
//! Menu reads are I/O-bound and independent, so the builder issues all of them
//! at once and waits for the lot (fan-out/fan-in). Nothing here touches the
//! index: outcomes come back in restaurant order and the caller applies them
//! one by one, so the trie is only ever mutated by a single task.
//!
//! Each fetch is bounded by the configured timeout. A provider that never
//! answers would otherwise hold the whole index hostage.

use std::time::Duration;

use futures::future::join_all;
use futures::stream::{FuturesOrdered, TryStreamExt};
use tracing::debug;

use crate::error::{BuildError, ProviderError};
use crate::provider::MenuProvider;
use crate::types::{MenuItem, RestaurantSummary};

/// How one restaurant's menu fetch ended.
#[derive(Debug)]
pub enum MenuOutcome {
    Loaded(Vec<MenuItem>),
    Failed(ProviderError),
    TimedOut(Duration),
}

/// Fetch every menu, isolating failures. The result is aligned with
/// `restaurants`.
pub async fn fetch_menus<P>(
    provider: &P,
    restaurants: &[RestaurantSummary],
    timeout: Option<Duration>,
) -> Vec<MenuOutcome>
where
    P: MenuProvider,
{
    join_all(
        restaurants
            .iter()
            .map(|restaurant| fetch_menu(provider, &restaurant.id, timeout)),
    )
    .await
}

/// Fetch every menu, failing on the first error or timeout in restaurant
/// order.
///
/// All fetches run at once, but outcomes are read in order: a later
/// restaurant that fails fast does not pre-empt an earlier one still
/// pending. Remaining fetches are dropped once the failure is reported.
pub async fn fetch_menus_fail_fast<P>(
    provider: &P,
    restaurants: &[RestaurantSummary],
    timeout: Option<Duration>,
) -> Result<Vec<Vec<MenuItem>>, BuildError>
where
    P: MenuProvider,
{
    restaurants
        .iter()
        .map(|restaurant| async move {
            match fetch_menu(provider, &restaurant.id, timeout).await {
                MenuOutcome::Loaded(items) => Ok(items),
                MenuOutcome::Failed(source) => Err(BuildError::Menu {
                    restaurant_id: restaurant.id.clone(),
                    source,
                }),
                MenuOutcome::TimedOut(timeout) => Err(BuildError::MenuTimeout {
                    restaurant_id: restaurant.id.clone(),
                    timeout,
                }),
            }
        })
        .collect::<FuturesOrdered<_>>()
        .try_collect()
        .await
}

async fn fetch_menu<P>(provider: &P, restaurant_id: &str, timeout: Option<Duration>) -> MenuOutcome
where
    P: MenuProvider,
{
    let fetch = provider.get_menu_items(restaurant_id);
    let result = match timeout {
        Some(limit) => match tokio::time::timeout(limit, fetch).await {
            Ok(result) => result,
            Err(_) => return MenuOutcome::TimedOut(limit),
        },
        None => fetch.await,
    };

    match result {
        Ok(items) => {
            debug!(restaurant_id, items = items.len(), "Fetched menu");
            MenuOutcome::Loaded(items)
        }
        Err(error) => MenuOutcome::Failed(error),
    }
}
