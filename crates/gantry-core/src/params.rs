//! Parameter structures for gantry operations
//!
//! This module holds the framework-neutral parameter types shared by the CLI
//! and the MCP server. The central one is [`PlanningAction`], the flat payload
//! a language model returns from its `apply_planning_action` tool call. It is
//! deliberately loose (every field but `action` is optional) because that is
//! what the model is given as a schema; converting it into a typed
//! [`Intent`] is where a malformed payload gets rejected.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Tool call JSON  │    │ PlanningAction  │    │     Intent      │
//! │ / CLI arguments │───▶│ (loose, serde)  │───▶│ (typed, engine) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers add their own derives on wrapper types (clap on the CLI
//! side, `schemars::JsonSchema` through the `schema` feature here) so this
//! module stays free of UI framework dependencies.
//!
//! # Examples
//!
//! ```rust
//! use gantry_core::{models::Intent, params::PlanningAction};
//!
//! let raw: PlanningAction = serde_json::from_str(
//!     r#"{"action":"move_milestone","target":"Ship to Customer","to_date":"2025-08-28"}"#,
//! )?;
//! let intent = Intent::try_from(raw)?;
//! assert_eq!(intent.action(), "move_milestone");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    dates::parse_date,
    error::{PlannerError, Result},
    models::{Intent, ShiftMode},
};

/// The five planning actions a tool call may request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum ActionKind {
    ShiftTaskDates,
    ExtendTask,
    CreateTask,
    MoveMilestone,
    ShiftPhase,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::ShiftTaskDates => "shift_task_dates",
            ActionKind::ExtendTask => "extend_task",
            ActionKind::CreateTask => "create_task",
            ActionKind::MoveMilestone => "move_milestone",
            ActionKind::ShiftPhase => "shift_phase",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw planning action as returned by the language model's tool call.
///
/// Which optional fields are required depends on `action`; see
/// `TryFrom<PlanningAction> for Intent`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanningAction {
    /// Which planning action to perform
    pub action: ActionKind,
    /// Exact task name, or a substring of task names for shift_phase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Number of whole days to shift or extend by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta_days: Option<i64>,
    /// Direction for shift_task_dates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ShiftMode>,
    /// Name of the task to create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Start date (YYYY-MM-DD) of the task to create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// End date (YYYY-MM-DD) of the task to create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// Ids of tasks the created task depends on
    #[serde(rename = "dependsOn", default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
    /// Owner of the created task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// New start date (YYYY-MM-DD) for move_milestone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
}

impl PlanningAction {
    /// An action with every optional field unset.
    pub fn new(action: ActionKind) -> Self {
        Self {
            action,
            target: None,
            delta_days: None,
            mode: None,
            name: None,
            start: None,
            end: None,
            depends_on: None,
            assignee: None,
            to_date: None,
        }
    }
}

fn required<T>(action: ActionKind, field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| {
        PlannerError::invalid_input(field).with_reason(format!("required for {action}"))
    })
}

fn required_text(action: ActionKind, field: &str, value: Option<String>) -> Result<String> {
    let value = required(action, field, value)?;
    if value.trim().is_empty() {
        return Err(PlannerError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(value)
}

impl TryFrom<PlanningAction> for Intent {
    type Error = PlannerError;

    /// Validates a raw action and converts it into a typed intent.
    ///
    /// # Errors
    ///
    /// - `PlannerError::InvalidInput` naming the first missing or empty field
    /// - `PlannerError::DateParse` for a date that is not `YYYY-MM-DD`
    fn try_from(raw: PlanningAction) -> Result<Intent> {
        let PlanningAction {
            action,
            target,
            delta_days,
            mode,
            name,
            start,
            end,
            depends_on,
            assignee,
            to_date,
        } = raw;

        let intent = match action {
            ActionKind::ShiftTaskDates => Intent::ShiftTaskDates {
                target: required_text(action, "target", target)?,
                delta_days: required(action, "delta_days", delta_days)?,
                mode: required(action, "mode", mode)?,
            },
            ActionKind::ExtendTask => Intent::ExtendTask {
                target: required_text(action, "target", target)?,
                delta_days: required(action, "delta_days", delta_days)?,
            },
            ActionKind::CreateTask => Intent::CreateTask {
                name: required_text(action, "name", name)?,
                start: parse_date(&required(action, "start", start)?)?,
                end: parse_date(&required(action, "end", end)?)?,
                depends_on,
                assignee,
            },
            ActionKind::MoveMilestone => Intent::MoveMilestone {
                target: required_text(action, "target", target)?,
                to_date: parse_date(&required(action, "to_date", to_date)?)?,
            },
            ActionKind::ShiftPhase => Intent::ShiftPhase {
                target: required_text(action, "target", target)?,
                delta_days: required(action, "delta_days", delta_days)?,
            },
        };
        Ok(intent)
    }
}

impl From<&Intent> for PlanningAction {
    fn from(intent: &Intent) -> Self {
        match intent.clone() {
            Intent::ShiftTaskDates {
                target,
                delta_days,
                mode,
            } => PlanningAction {
                target: Some(target),
                delta_days: Some(delta_days),
                mode: Some(mode),
                ..PlanningAction::new(ActionKind::ShiftTaskDates)
            },
            Intent::ExtendTask { target, delta_days } => PlanningAction {
                target: Some(target),
                delta_days: Some(delta_days),
                ..PlanningAction::new(ActionKind::ExtendTask)
            },
            Intent::CreateTask {
                name,
                start,
                end,
                depends_on,
                assignee,
            } => PlanningAction {
                name: Some(name),
                start: Some(start.to_string()),
                end: Some(end.to_string()),
                depends_on,
                assignee,
                ..PlanningAction::new(ActionKind::CreateTask)
            },
            Intent::MoveMilestone { target, to_date } => PlanningAction {
                target: Some(target),
                to_date: Some(to_date.to_string()),
                ..PlanningAction::new(ActionKind::MoveMilestone)
            },
            Intent::ShiftPhase { target, delta_days } => PlanningAction {
                target: Some(target),
                delta_days: Some(delta_days),
                ..PlanningAction::new(ActionKind::ShiftPhase)
            },
        }
    }
}

/// Parameters for listing applied intents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowHistory {
    /// Maximum number of entries to return, most recent first
    #[serde(default = "ShowHistory::default_limit")]
    pub limit: u32,
}

impl ShowHistory {
    fn default_limit() -> u32 {
        10
    }
}

impl Default for ShowHistory {
    fn default() -> Self {
        Self {
            limit: Self::default_limit(),
        }
    }
}
