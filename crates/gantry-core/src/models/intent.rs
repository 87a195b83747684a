//! Validated planning intents.

use std::{fmt, str::FromStr};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Direction of a `shift_task_dates` intent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum ShiftMode {
    /// Later in time
    Forward,
    /// Earlier in time
    Backward,
}

impl ShiftMode {
    /// Applies the direction to an unsigned-looking delta.
    ///
    /// A negative `delta_days` combined with `Backward` moves forward; the
    /// sign is taken as given.
    pub fn signed(self, delta_days: i64) -> i64 {
        match self {
            ShiftMode::Forward => delta_days,
            ShiftMode::Backward => delta_days.saturating_neg(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftMode::Forward => "forward",
            ShiftMode::Backward => "backward",
        }
    }
}

impl FromStr for ShiftMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" => Ok(ShiftMode::Forward),
            "backward" => Ok(ShiftMode::Backward),
            _ => Err(format!("Invalid shift mode: {s}")),
        }
    }
}

impl fmt::Display for ShiftMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One planning action, already validated against the action schema.
///
/// The set of actions is closed: the engine matches on it exhaustively, so a
/// new action is a compile error everywhere it still needs handling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Intent {
    /// Move both dates of one task
    ShiftTaskDates {
        target: String,
        delta_days: i64,
        mode: ShiftMode,
    },
    /// Move the end date of one task; negative deltas shorten it
    ExtendTask { target: String, delta_days: i64 },
    /// Append a new task
    CreateTask {
        name: String,
        start: Date,
        end: Date,
        #[serde(
            rename = "dependsOn",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        depends_on: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        assignee: Option<String>,
    },
    /// Relocate a task's start, keeping its duration
    MoveMilestone { target: String, to_date: Date },
    /// Shift every task whose name contains `target`
    ShiftPhase { target: String, delta_days: i64 },
}

impl Intent {
    /// The wire name of the action.
    pub fn action(&self) -> &'static str {
        match self {
            Intent::ShiftTaskDates { .. } => "shift_task_dates",
            Intent::ExtendTask { .. } => "extend_task",
            Intent::CreateTask { .. } => "create_task",
            Intent::MoveMilestone { .. } => "move_milestone",
            Intent::ShiftPhase { .. } => "shift_phase",
        }
    }

    /// The name or phase term the intent resolves against, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Intent::ShiftTaskDates { target, .. }
            | Intent::ExtendTask { target, .. }
            | Intent::MoveMilestone { target, .. }
            | Intent::ShiftPhase { target, .. } => Some(target),
            Intent::CreateTask { .. } => None,
        }
    }
}
