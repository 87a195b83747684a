//! Display formatting for plans, diffs and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); collections and
//! operation results get newtype wrappers. Everything renders as markdown so
//! the same text works in the terminal renderer and in MCP responses.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │ (Plan, Diff...) │───▶│ (TaskNames,     │───▶│    Output       │
//! │                 │    │  ApplyResult)   │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (TaskNames, History)
//! - [`results`]: Operation result types (ApplyResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use gantry_core::{display::OperationStatus, models::{Plan, Task}};
//! use jiff::civil::date;
//!
//! let plan = Plan::new(vec![Task::new("pack", "Packaging", date(2025, 8, 26), date(2025, 8, 26))]);
//! assert!(plan.to_string().contains("| pack | Packaging |"));
//!
//! let status = OperationStatus::success("Plan reset to 11 default tasks".to_string());
//! assert_eq!(status.to_string(), "Success: Plan reset to 11 default tasks\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{History, TaskNames};
pub use datetime::{DateRange, LocalDateTime};
pub use results::ApplyResult;
pub use status::OperationStatus;
