//! Data models for plans, tasks, intents and diffs.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so the data structures stay free of
//! presentation logic.
//!
//! # Wire format
//!
//! All models serialize to the JSON shapes exchanged with the language step
//! and stored on disk:
//!
//! ```json
//! { "tasks": [
//!   { "id": "w1_spoke", "name": "W1 Spoking", "start": "2025-08-19",
//!     "end": "2025-08-20", "dependsOn": ["w1_cut"] }
//! ] }
//! ```
//!
//! Intents are tagged by `action` and diff records by `type`.
//!
//! # Examples
//!
//! ```rust
//! use gantry_core::models::{Intent, Plan, Task};
//! use jiff::civil::date;
//!
//! let plan = Plan::new(vec![Task::new(
//!     "w1_cut",
//!     "W1 Cutting",
//!     date(2025, 8, 18),
//!     date(2025, 8, 18),
//! )]);
//! assert_eq!(plan.task_names(), vec!["W1 Cutting".to_string()]);
//!
//! let intent: Intent = serde_json::from_str(
//!     r#"{"action":"extend_task","target":"W1 Cutting","delta_days":2}"#,
//! )
//! .unwrap();
//! assert_eq!(intent.action(), "extend_task");
//! ```

pub mod diff;
pub mod history;
pub mod intent;
pub mod plan;
pub mod task;


pub use diff::{Change, PlanDiff};
pub use history::HistoryEntry;
pub use intent::{Intent, ShiftMode};
pub use plan::Plan;
pub use task::Task;
