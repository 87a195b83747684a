//! Plan model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{PlanDiff, Task};
use crate::projector;

/// An insertion-ordered collection of tasks.
///
/// Creating a task appends it; updating a task keeps its position.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// Tasks in plan order
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Plan {
    /// Creates a plan from tasks in the given order.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Names of every task in plan order.
    ///
    /// This is the only "known names" context handed to the upstream language
    /// step that turns a transcript into an intent.
    pub fn task_names(&self) -> Vec<String> {
        self.tasks.iter().map(|t| t.name.clone()).collect()
    }

    /// Looks up a task by its id.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns the next plan state with `diff` folded in. `self` is left
    /// untouched.
    pub fn apply_diff(&self, diff: &PlanDiff) -> Plan {
        Plan {
            tasks: projector::project(&self.tasks, diff),
        }
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the plan has no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
