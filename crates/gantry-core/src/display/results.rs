//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{models::Intent, store::AppliedIntent};

/// Wrapper type for displaying the result of applying an intent.
///
/// Shows the intent summary and the diff; the resulting plan is appended
/// when requested with [`ApplyResult::with_plan`].
///
/// # Examples
///
/// ```rust
/// use gantry_core::{
///     display::ApplyResult,
///     models::{Intent, Plan, PlanDiff},
///     store::AppliedIntent,
/// };
///
/// let intent = Intent::ExtendTask { target: "Packaging".to_string(), delta_days: 1 };
/// let applied = AppliedIntent { diff: PlanDiff::default(), plan: Plan::default() };
///
/// let output = ApplyResult::new(&intent, &applied).to_string();
/// assert!(output.contains("Applied extend_task: extend 'Packaging' by 1 day(s)"));
/// ```
pub struct ApplyResult<'a> {
    pub intent: &'a Intent,
    pub applied: &'a AppliedIntent,
    pub show_plan: bool,
}

impl<'a> ApplyResult<'a> {
    pub fn new(intent: &'a Intent, applied: &'a AppliedIntent) -> Self {
        Self {
            intent,
            applied,
            show_plan: false,
        }
    }

    /// Also render the plan the diff produced.
    pub fn with_plan(mut self, show_plan: bool) -> Self {
        self.show_plan = show_plan;
        self
    }
}

impl<'a> fmt::Display for ApplyResult<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Applied {}: {}", self.intent.action(), self.intent)?;
        writeln!(f)?;
        writeln!(f, "## Changes")?;
        writeln!(f)?;
        write!(f, "{}", self.applied.diff)?;

        if self.show_plan {
            writeln!(f)?;
            writeln!(f, "## Plan")?;
            writeln!(f)?;
            write!(f, "{}", self.applied.plan)?;
        }
        Ok(())
    }
}
