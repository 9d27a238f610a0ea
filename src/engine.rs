// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search service: one engine, one lazily built index.
//!
//! ```text
//! Uninitialized ──ensure_ready──▶ Initializing ──ok──▶ Ready
//!       ▲                              │                 │
//!       └────────────err───────────────┘                 │
//!       └──────────────────invalidate────────────────────┘
//! ```
//!
//! The first caller builds; concurrent first callers wait on the same build
//! lock and then find the published index instead of building again. Once
//! published, the index is an immutable `Arc`, so a query clones a pointer
//! under a read lock and runs without holding anything.
//!
//! There is no incremental update. A changed restaurant or menu is picked up by
//! `invalidate` (next query rebuilds) or `rebuild` (build now, swap when done;
//! queries keep using the old index meanwhile).

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::build::{build_index, BuildReport};
use crate::config::EngineConfig;
use crate::error::BuildError;
use crate::index::SearchIndex;
use crate::provider::{MenuProvider, RestaurantProvider};
use crate::search::search_with_options;
use crate::types::SearchResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Uninitialized,
    Initializing,
    Ready,
}

pub struct SearchEngine<P> {
    provider: P,
    config: EngineConfig,
    index: RwLock<Option<Arc<SearchIndex>>>,
    report: RwLock<Option<BuildReport>>,
    build_lock: Mutex<()>,
    building: AtomicBool,
    /// Bumped by `invalidate` so a build that started earlier does not
    /// publish a stale index.
    generation: AtomicU64,
}

/// Clears the building flag even if the build future is dropped.
struct BuildingGuard<'a>(&'a AtomicBool);

impl<'a> BuildingGuard<'a> {
    fn enter(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        BuildingGuard(flag)
    }
}

impl Drop for BuildingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<P> SearchEngine<P>
where
    P: RestaurantProvider + MenuProvider,
{
    pub fn new(provider: P, config: EngineConfig) -> Self {
        SearchEngine {
            provider,
            config,
            index: RwLock::new(None),
            report: RwLock::new(None),
            build_lock: Mutex::new(()),
            building: AtomicBool::new(false),
            generation: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn state(&self) -> EngineState {
        if self.index.read().is_some() {
            EngineState::Ready
        } else if self.building.load(Ordering::Acquire) {
            EngineState::Initializing
        } else {
            EngineState::Uninitialized
        }
    }

    /// The published index, if one is ready.
    pub fn snapshot(&self) -> Option<Arc<SearchIndex>> {
        self.index.read().clone()
    }

    /// Report of the build behind the most recently published index.
    pub fn last_report(&self) -> Option<BuildReport> {
        self.report.read().clone()
    }

    /// Build the index unless it is already built.
    ///
    /// A failed build leaves the engine uninitialized; the next call retries.
    pub async fn ensure_ready(&self) -> Result<Arc<SearchIndex>, BuildError> {
        if let Some(index) = self.snapshot() {
            return Ok(index);
        }

        let _lock = self.build_lock.lock().await;
        if let Some(index) = self.snapshot() {
            debug!("Index was built by a concurrent caller");
            return Ok(index);
        }

        self.build_and_publish().await
    }

    /// Build a fresh index and swap it in. Queries keep the old index until
    /// the new one is ready.
    pub async fn rebuild(&self) -> Result<Arc<SearchIndex>, BuildError> {
        let _lock = self.build_lock.lock().await;
        self.build_and_publish().await
    }

    /// Drop the published index. The next `ensure_ready` or `search` rebuilds.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        if self.index.write().take().is_some() {
            info!("Search index invalidated");
        }
    }

    /// Search, building the index first if needed.
    ///
    /// Only a failed build is an error. `limit` defaults to the configured
    /// default limit.
    pub async fn search(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<SearchResult>, BuildError> {
        let index = self.ensure_ready().await?;
        Ok(search_with_options(
            &index,
            query,
            &self.config.search_options(limit),
        ))
    }

    /// Search the published index without building. `None` until ready.
    pub fn search_ready(&self, query: &str, limit: Option<usize>) -> Option<Vec<SearchResult>> {
        let index = self.snapshot()?;
        Some(search_with_options(
            &index,
            query,
            &self.config.search_options(limit),
        ))
    }

    async fn build_and_publish(&self) -> Result<Arc<SearchIndex>, BuildError> {
        let generation = self.generation.load(Ordering::Acquire);
        let (index, report) = {
            let _building = BuildingGuard::enter(&self.building);
            build_index(&self.provider, &self.config).await?
        };

        let index = Arc::new(index);
        if self.generation.load(Ordering::Acquire) == generation {
            *self.index.write() = Some(Arc::clone(&index));
            *self.report.write() = Some(report);
        } else {
            debug!("Index invalidated during build; not publishing");
        }

        Ok(index)
    }
}
