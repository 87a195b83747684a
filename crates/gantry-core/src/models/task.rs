//! Task model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A unit of work with calendar start and end dates.
///
/// Dates carry no time of day. `start <= end` is expected but not enforced;
/// an `extend_task` with a large negative delta can produce an inverted task
/// and it is up to the caller to reject that on ingestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Stable identifier, unique within a plan
    pub id: String,

    /// Display label; lookups treat it case-insensitively
    pub name: String,

    /// First day of the task
    pub start: Date,

    /// Last day of the task
    pub end: Date,

    /// Ids of tasks this one waits on (not checked for existence or cycles)
    #[serde(
        rename = "dependsOn",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub depends_on: Option<Vec<String>>,

    /// Free-text owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

impl Task {
    /// Creates a task with no dependencies and no assignee.
    pub fn new(id: impl Into<String>, name: impl Into<String>, start: Date, end: Date) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start,
            end,
            depends_on: None,
            assignee: None,
        }
    }

    /// Sets the dependency list.
    pub fn with_depends_on<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends_on = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the assignee.
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }
}
