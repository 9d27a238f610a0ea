// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only building can fail. Queries treat bad input as "no results".

use std::error::Error as StdError;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// A failure reported by a restaurant or menu provider.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct ProviderError(Box<dyn StdError + Send + Sync>);

impl ProviderError {
    pub fn new(error: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        ProviderError(error.into())
    }

    pub fn msg(message: impl Into<String>) -> Self {
        let message: String = message.into();
        ProviderError(message.into())
    }
}

impl From<std::io::Error> for ProviderError {
    fn from(error: std::io::Error) -> Self {
        ProviderError::new(error)
    }
}

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("failed to list restaurants: {0}")]
    Restaurants(#[source] ProviderError),

    #[error("failed to load menu for restaurant {restaurant_id}: {source}")]
    Menu {
        restaurant_id: String,
        #[source]
        source: ProviderError,
    },

    #[error("menu for restaurant {restaurant_id} did not load within {timeout:?}")]
    MenuTimeout {
        restaurant_id: String,
        timeout: Duration,
    },
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
