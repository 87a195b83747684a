//! Display implementations for domain models.
//!
//! Plans render as a markdown table, diffs as a bullet list of before/after
//! date ranges, intents as a single summary line.

use std::fmt;

use super::datetime::{DateRange, LocalDateTime};
use crate::{
    dates::duration_days,
    models::{Change, HistoryEntry, Intent, Plan, PlanDiff, Task},
};

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`: {}", self.name, self.id, DateRange(self))?;
        if let Some(assignee) = &self.assignee {
            write!(f, " ({assignee})")?;
        }
        Ok(())
    }
}

/// Escapes pipes so a cell cannot split a table row.
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl Task {
    fn fmt_row(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depends_on = self
            .depends_on
            .as_ref()
            .filter(|deps| !deps.is_empty())
            .map(|deps| deps.join(", "))
            .unwrap_or_else(|| "-".to_string());

        writeln!(
            f,
            "| {} | {} | {} | {} | {} | {} | {} |",
            table_cell(&self.id),
            table_cell(&self.name),
            self.start,
            self.end,
            duration_days(self),
            table_cell(&depends_on),
            table_cell(self.assignee.as_deref().unwrap_or("-")),
        )
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tasks.is_empty() {
            return writeln!(f, "No tasks in this plan.");
        }

        writeln!(f, "| Id | Task | Start | End | Span | Depends on | Assignee |")?;
        writeln!(f, "|----|------|-------|-----|-----:|------------|----------|")?;
        for task in &self.tasks {
            task.fmt_row(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Update {
                task_id,
                before,
                after,
            } => write!(
                f,
                "Updated **{}** `{task_id}`: {} → {}",
                after.name,
                DateRange(before),
                DateRange(after)
            ),
            Change::Create { task } => write!(
                f,
                "Created **{}** `{}`: {}",
                task.name,
                task.id,
                DateRange(task)
            ),
        }
    }
}

impl fmt::Display for PlanDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.changes.is_empty() {
            return writeln!(f, "No changes.");
        }
        for change in &self.changes {
            writeln!(f, "- {change}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::ShiftTaskDates {
                target,
                delta_days,
                mode,
            } => write!(f, "shift '{target}' {mode} by {delta_days} day(s)"),
            Intent::ExtendTask { target, delta_days } => {
                write!(f, "extend '{target}' by {delta_days} day(s)")
            }
            Intent::CreateTask {
                name, start, end, ..
            } => write!(f, "create '{name}' from {start} to {end}"),
            Intent::MoveMilestone { target, to_date } => {
                write!(f, "move milestone '{target}' to {to_date}")
            }
            Intent::ShiftPhase { target, delta_days } => {
                write!(f, "shift phase '{target}' by {delta_days} day(s)")
            }
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {}", self.id, self.intent.action())?;
        writeln!(f)?;
        writeln!(f, "- Intent: {}", self.intent)?;
        writeln!(f, "- Applied: {}", LocalDateTime(&self.applied_at))?;
        writeln!(f)?;
        write!(f, "{}", self.diff)
    }
}
