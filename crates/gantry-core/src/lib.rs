//! Core library for the Gantry schedule editor.
//!
//! Gantry applies structured editing intents ("shift W1 Truing forward two
//! days", "move the shipping milestone to the 28th") to a plan of dated tasks.
//! Each application yields a [`models::PlanDiff`] of before/after records and a
//! new plan; the input plan is never mutated.
//!
//! # Layers
//!
//! - **Pure engine** ([`engine`], [`projector`], [`resolver`], [`dates`],
//!   [`ids`]): no I/O, identifiers injected through [`ids::IdGenerator`]
//! - **Boundary types** ([`models`], [`params`]): serde shapes for plans,
//!   intents, diffs and the loose tool-call payload
//! - **Persistence** ([`store`], [`db`]): the [`store::PlanStore`] seam and
//!   the SQLite store with intent history
//! - **Facade** ([`planner`]): async API for the CLI and MCP server
//! - **Presentation** ([`display`]): markdown `Display` implementations
//!
//! # Quick Start
//!
//! ```rust
//! use gantry_core::{
//!     defaults::default_plan,
//!     engine::apply_intent,
//!     ids::SequentialIdGenerator,
//!     models::{Intent, ShiftMode},
//! };
//!
//! let plan = default_plan();
//! let intent = Intent::ShiftTaskDates {
//!     target: "W1 Truing".to_string(),
//!     delta_days: 2,
//!     mode: ShiftMode::Forward,
//! };
//!
//! let diff = apply_intent(&plan, &intent, &mut SequentialIdGenerator::default())?;
//! let next = plan.apply_diff(&diff);
//!
//! assert_eq!(diff.len(), 1);
//! assert_eq!(next.task("w1_true").unwrap().start.to_string(), "2025-08-23");
//! # Ok::<(), gantry_core::PlannerError>(())
//! ```

pub mod dates;
pub mod db;
pub mod defaults;
pub mod display;
pub mod engine;
pub mod error;
pub mod ids;
pub mod models;
pub mod params;
pub mod planner;
pub mod projector;
pub mod resolver;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{ApplyResult, History, OperationStatus, TaskNames};
pub use error::{PlannerError, Result, TargetKind};
pub use ids::{IdGenerator, IdStrategy};
pub use models::{Change, HistoryEntry, Intent, Plan, PlanDiff, ShiftMode, Task};
pub use params::{ActionKind, PlanningAction, ShowHistory};
pub use planner::{Planner, PlannerBuilder};
pub use store::{AppliedIntent, MemoryStore, PlanStore};
