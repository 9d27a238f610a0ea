// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Defaults work out of the box. `EngineConfig::from_env` lets a deployment
//! override them without a rebuild:
//!
//! | Variable                    | Default | Meaning                          |
//! |-----------------------------|---------|----------------------------------|
//! | `SAVOR_DEFAULT_LIMIT`       | 20      | Results when no limit is given   |
//! | `SAVOR_MIN_QUERY_LEN`       | 2       | Shorter queries return nothing   |
//! | `SAVOR_MENU_TIMEOUT_MS`     | 10000   | Per-menu fetch bound, 0 = none   |
//! | `SAVOR_MENU_FAILURE_POLICY` | skip    | `skip` or `abort`                |
//!
//! A malformed value logs a warning and falls back to the default.

use std::env;
use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::Duration;

use tracing::{debug, warn};

use crate::search::{SearchOptions, DEFAULT_LIMIT, MIN_QUERY_LEN};

pub const DEFAULT_MENU_TIMEOUT: Duration = Duration::from_secs(10);

/// What the builder does when one restaurant's menu cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MenuFailurePolicy {
    /// Index the restaurant without its dishes and log the omission.
    #[default]
    Skip,
    /// Fail the whole build on the first failure, in restaurant order.
    Abort,
}

impl FromStr for MenuFailurePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(MenuFailurePolicy::Skip),
            "abort" => Ok(MenuFailurePolicy::Abort),
            other => Err(format!("unknown menu failure policy '{}'", other)),
        }
    }
}

impl Display for MenuFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuFailurePolicy::Skip => write!(f, "skip"),
            MenuFailurePolicy::Abort => write!(f, "abort"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub default_limit: usize,
    pub min_query_len: usize,
    /// `None` waits forever.
    pub menu_timeout: Option<Duration>,
    pub menu_failure_policy: MenuFailurePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            default_limit: DEFAULT_LIMIT,
            min_query_len: MIN_QUERY_LEN,
            menu_timeout: Some(DEFAULT_MENU_TIMEOUT),
            menu_failure_policy: MenuFailurePolicy::Skip,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = EngineConfig::default();
        let timeout_ms = try_load(
            &lookup,
            "SAVOR_MENU_TIMEOUT_MS",
            DEFAULT_MENU_TIMEOUT.as_millis() as u64,
        );

        EngineConfig {
            default_limit: try_load(&lookup, "SAVOR_DEFAULT_LIMIT", defaults.default_limit),
            min_query_len: try_load(&lookup, "SAVOR_MIN_QUERY_LEN", defaults.min_query_len),
            menu_timeout: (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms)),
            menu_failure_policy: try_load(
                &lookup,
                "SAVOR_MENU_FAILURE_POLICY",
                defaults.menu_failure_policy,
            ),
        }
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn with_min_query_len(mut self, len: usize) -> Self {
        self.min_query_len = len;
        self
    }

    pub fn with_menu_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.menu_timeout = timeout;
        self
    }

    pub fn with_menu_failure_policy(mut self, policy: MenuFailurePolicy) -> Self {
        self.menu_failure_policy = policy;
        self
    }

    /// Query options for one call; `limit` overrides the default.
    pub fn search_options(&self, limit: Option<usize>) -> SearchOptions {
        SearchOptions {
            limit: limit.unwrap_or(self.default_limit),
            min_query_len: self.min_query_len,
        }
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        debug!("{key} not set, using default: {default}");
        return default;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value '{raw}': {e}; using default: {default}");
        default
    })
}
