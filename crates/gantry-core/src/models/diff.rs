//! Plan diffs produced by applying an intent.

use serde::{Deserialize, Serialize};

use super::Task;

/// One change record in a [`PlanDiff`].
///
/// Updates carry whole before/after snapshots rather than field patches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Change {
    /// An existing task was replaced
    Update {
        #[serde(rename = "taskId")]
        task_id: String,
        before: Task,
        after: Task,
    },
    /// A task was appended
    Create { task: Task },
}

impl Change {
    /// Builds an update record keyed by the `before` task's id.
    pub fn update(before: Task, after: Task) -> Self {
        Change::Update {
            task_id: before.id.clone(),
            before,
            after,
        }
    }

    /// Builds a create record.
    pub fn create(task: Task) -> Self {
        Change::Create { task }
    }

    /// Id of the task this record touches.
    pub fn task_id(&self) -> &str {
        match self {
            Change::Update { task_id, .. } => task_id,
            Change::Create { task } => &task.id,
        }
    }
}

/// Ordered change records from one intent application.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanDiff {
    pub changes: Vec<Change>,
}

impl PlanDiff {
    pub fn new(changes: Vec<Change>) -> Self {
        Self { changes }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Update records in diff order.
    pub fn updates(&self) -> impl Iterator<Item = (&str, &Task, &Task)> {
        self.changes.iter().filter_map(|c| match c {
            Change::Update {
                task_id,
                before,
                after,
            } => Some((task_id.as_str(), before, after)),
            Change::Create { .. } => None,
        })
    }

    /// Created tasks in diff order.
    pub fn creates(&self) -> impl Iterator<Item = &Task> {
        self.changes.iter().filter_map(|c| match c {
            Change::Create { task } => Some(task),
            Change::Update { .. } => None,
        })
    }
}
