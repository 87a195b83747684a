//! Intent dispatcher: turns a validated intent into a plan diff.
//!
//! [`apply_intent`] reads the plan, resolves the intent's target, computes
//! the new task states and returns them as a [`PlanDiff`]. It never mutates
//! the plan and never touches storage; folding the diff into the next plan is
//! [`crate::projector`]'s job and persisting it is the caller's.
//!
//! ```text
//! (plan, intent) ──▶ apply_intent ──▶ PlanDiff ──▶ project ──▶ next tasks
//!                     │      │
//!                resolver  dates
//! ```
//!
//! Because nothing is mutated, a failed application has no side effects: the
//! caller still holds the plan it passed in and no diff exists.
//!
//! # Examples
//!
//! ```rust
//! use gantry_core::{
//!     engine::apply_intent,
//!     ids::SequentialIdGenerator,
//!     models::{Intent, Plan, ShiftMode, Task},
//! };
//! use jiff::civil::date;
//!
//! let plan = Plan::new(vec![Task::new(
//!     "d1",
//!     "Design",
//!     date(2024, 3, 10),
//!     date(2024, 3, 20),
//! )]);
//! let intent = Intent::ShiftTaskDates {
//!     target: "design".to_string(),
//!     delta_days: 5,
//!     mode: ShiftMode::Backward,
//! };
//!
//! let diff = apply_intent(&plan, &intent, &mut SequentialIdGenerator::default())?;
//! let next = plan.apply_diff(&diff);
//! assert_eq!(next.tasks[0].start, date(2024, 3, 5));
//! assert_eq!(next.tasks[0].end, date(2024, 3, 15));
//! # Ok::<(), gantry_core::PlannerError>(())
//! ```

use std::collections::HashSet;

use log::debug;

use crate::{
    dates,
    error::{PlannerError, Result, TargetKind},
    ids::{allocate_id, IdGenerator},
    models::{Change, Intent, Plan, PlanDiff, Task},
    resolver,
};

#[cfg(test)]
mod tests;

/// Computes the diff that `intent` makes to `plan`.
///
/// # Errors
///
/// - `PlannerError::TargetNotFound` when a named task or phase matches nothing
/// - `PlannerError::DateOutOfRange` when a shift leaves the calendar
/// - `PlannerError::IdGenerationCollision` when `ids` keeps returning taken ids
pub fn apply_intent(plan: &Plan, intent: &Intent, ids: &mut dyn IdGenerator) -> Result<PlanDiff> {
    let tasks = plan.tasks.as_slice();

    let changes = match intent {
        Intent::ShiftTaskDates {
            target,
            delta_days,
            mode,
        } => {
            let task = resolve(tasks, target, TargetKind::Task)?;
            let after = dates::shift_dates(task, mode.signed(*delta_days))?;
            vec![Change::update(task.clone(), after)]
        }
        Intent::ExtendTask { target, delta_days } => {
            let task = resolve(tasks, target, TargetKind::Task)?;
            let after = Task {
                end: dates::add_days(task.end, *delta_days)?,
                ..task.clone()
            };
            vec![Change::update(task.clone(), after)]
        }
        Intent::CreateTask {
            name,
            start,
            end,
            depends_on,
            assignee,
        } => {
            let existing: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
            let task = Task {
                id: allocate_id(ids, &existing)?,
                name: name.clone(),
                start: *start,
                end: *end,
                depends_on: depends_on.clone(),
                assignee: assignee.clone(),
            };
            vec![Change::create(task)]
        }
        Intent::MoveMilestone { target, to_date } => {
            let task = resolve(tasks, target, TargetKind::Milestone)?;
            let span = dates::duration_days(task).max(0);
            let after = Task {
                start: *to_date,
                end: dates::add_days(*to_date, span)?,
                ..task.clone()
            };
            vec![Change::update(task.clone(), after)]
        }
        Intent::ShiftPhase { target, delta_days } => {
            let matched = resolver::find_by_phase(tasks, target);
            if matched.is_empty() {
                return Err(PlannerError::target_not_found(TargetKind::Phase, target));
            }
            matched
                .into_iter()
                .map(|task| -> Result<Change> {
                    let after = dates::shift_dates(task, *delta_days)?;
                    Ok(Change::update(task.clone(), after))
                })
                .collect::<Result<Vec<_>>>()?
        }
    };

    debug!(
        "{} produced {} change(s) against {} task(s)",
        intent.action(),
        changes.len(),
        tasks.len()
    );
    Ok(PlanDiff::new(changes))
}

fn resolve<'a>(tasks: &'a [Task], target: &str, kind: TargetKind) -> Result<&'a Task> {
    resolver::find_by_name(tasks, target)
        .ok_or_else(|| PlannerError::target_not_found(kind, target))
}
