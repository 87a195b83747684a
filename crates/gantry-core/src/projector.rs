//! Folds a [`PlanDiff`] onto a task list.

use std::collections::HashMap;

use crate::models::{PlanDiff, Task};

/// Returns the task list after `diff`.
///
/// Every task named by an update record is replaced by that record's `after`
/// snapshot in its original position; created tasks are then appended in
/// diff order. Update records for ids not in `tasks` are ignored.
///
/// Projection is not idempotent for creates: projecting the same diff twice
/// appends the created tasks twice. Apply each diff exactly once.
pub fn project(tasks: &[Task], diff: &PlanDiff) -> Vec<Task> {
    let replacements: HashMap<&str, &Task> = diff
        .updates()
        .map(|(task_id, _, after)| (task_id, after))
        .collect();

    tasks
        .iter()
        .map(|task| {
            replacements
                .get(task.id.as_str())
                .map_or_else(|| task.clone(), |after| (*after).clone())
        })
        .chain(diff.creates().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::Change;

    fn create_tasks() -> Vec<Task> {
        vec![
            Task::new("a", "Alpha", date(2024, 1, 1), date(2024, 1, 2)),
            Task::new("b", "Beta", date(2024, 1, 3), date(2024, 1, 4)),
            Task::new("c", "Gamma", date(2024, 1, 5), date(2024, 1, 6)),
        ]
    }

    #[test]
    fn test_update_keeps_position() {
        let tasks = create_tasks();
        let mut after = tasks[1].clone();
        after.end = date(2024, 1, 9);
        let diff = PlanDiff::new(vec![Change::update(tasks[1].clone(), after.clone())]);

        let next = project(&tasks, &diff);
        assert_eq!(next.len(), 3);
        assert_eq!(next[0], tasks[0]);
        assert_eq!(next[1], after);
        assert_eq!(next[2], tasks[2]);
    }

    #[test]
    fn test_creates_append_in_diff_order() {
        let tasks = create_tasks();
        let d = date(2024, 2, 1);
        let diff = PlanDiff::new(vec![
            Change::create(Task::new("x", "X", d, d)),
            Change::create(Task::new("y", "Y", d, d)),
        ]);

        let ids: Vec<_> = project(&tasks, &diff).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["a", "b", "c", "x", "y"]);
    }

    #[test]
    fn test_input_is_untouched() {
        let tasks = create_tasks();
        let snapshot = tasks.clone();
        let mut after = tasks[0].clone();
        after.name = "Renamed".to_string();
        let diff = PlanDiff::new(vec![Change::update(tasks[0].clone(), after)]);

        let next = project(&tasks, &diff);
        assert_eq!(tasks, snapshot);
        assert_eq!(next[0].name, "Renamed");
    }

    #[test]
    fn test_unknown_update_ids_are_ignored() {
        let tasks = create_tasks();
        let d = date(2024, 2, 1);
        let ghost = Task::new("ghost", "Ghost", d, d);
        let diff = PlanDiff::new(vec![Change::update(ghost.clone(), ghost)]);

        assert_eq!(project(&tasks, &diff), tasks);
    }

    #[test]
    fn test_empty_diff_is_identity() {
        let tasks = create_tasks();
        assert_eq!(project(&tasks, &PlanDiff::default()), tasks);
    }
}
