//! High-level async planner API.
//!
//! This module provides the [`Planner`] interface used by the CLI and the MCP
//! server. The planner coordinates the pure engine with the SQLite store:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  CLI / MCP      │    │    Planner      │    │    Database     │
//! │  (params,       │───▶│ (plan_ops,      │───▶│  (load, apply,  │
//! │   intents)      │    │  intent_ops)    │    │   save, history)│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`plan_ops`]: Reading, resetting and replacing the stored plan
//! - [`intent_ops`]: Applying intents and reading the intent history
//!
//! Every operation opens its own connection on a blocking thread via
//! `tokio::task::spawn_blocking`; the engine itself stays synchronous.
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use gantry_core::{models::{Intent, ShiftMode}, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/gantry.db"))
//!     .seed_default_plan(true)
//!     .build()
//!     .await?;
//!
//! let applied = planner
//!     .apply_intent(&Intent::ShiftTaskDates {
//!         target: "W1 Truing".to_string(),
//!         delta_days: 1,
//!         mode: ShiftMode::Forward,
//!     })
//!     .await?;
//! println!("{}", applied.diff);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::ids::IdStrategy;

pub mod builder;
pub mod intent_ops;
pub mod plan_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for the stored plan.
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) id_strategy: IdStrategy,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf, id_strategy: IdStrategy) -> Self {
        Self {
            db_path,
            id_strategy,
        }
    }

    /// Path of the backing SQLite file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }
}
