// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the savor command-line interface.
//!
//! Three subcommands over a JSON catalog: `search` runs one query, `inspect`
//! builds the index and prints its shape, `repl` keeps one engine alive and
//! reads queries from stdin. Engine settings come from `SAVOR_*` variables;
//! the global flags override them.

pub mod display;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use savor::{EngineConfig, MenuFailurePolicy};

#[derive(Parser)]
#[command(
    name = "savor",
    about = "Instant prefix search over restaurants and dishes",
    version
)]
pub struct Cli {
    /// Per-menu fetch timeout in milliseconds (0 waits forever)
    #[arg(long, global = true)]
    pub menu_timeout_ms: Option<u64>,

    /// What to do when a restaurant's menu cannot be loaded
    #[arg(long, global = true, value_enum)]
    pub on_menu_failure: Option<MenuFailurePolicy>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog and print ranked results
    Search {
        /// Catalog JSON with restaurants and menus
        #[arg(short, long)]
        catalog: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build the index for a catalog and print its structure
    Inspect {
        #[arg(short, long)]
        catalog: PathBuf,
    },

    /// Read queries from stdin against one long-lived engine
    Repl {
        #[arg(short, long)]
        catalog: PathBuf,

        #[arg(short, long)]
        limit: Option<usize>,
    },
}

impl Cli {
    /// Environment config with command-line overrides applied.
    pub fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig::from_env();
        if let Some(ms) = self.menu_timeout_ms {
            config = config.with_menu_timeout((ms > 0).then(|| Duration::from_millis(ms)));
        }
        if let Some(policy) = self.on_menu_failure {
            config = config.with_menu_failure_policy(policy);
        }
        config
    }
}
