//! Persistence boundary for plans.
//!
//! The engine never loads or saves anything itself. Callers inject a
//! [`PlanStore`] and run the read-modify-write cycle through
//! [`apply_to_store`], or use the SQLite [`crate::db::Database`] which runs the
//! same cycle inside a single transaction.
//!
//! # Concurrency
//!
//! A store is only as safe as its `load`/`save` pair. Two callers that load
//! the same plan and save their own results will silently lose one update;
//! callers sharing a [`MemoryStore`] must serialize whole cycles themselves
//! (for example behind a `tokio::sync::Mutex`).

use log::debug;

use crate::{
    engine::apply_intent,
    error::Result,
    ids::IdGenerator,
    models::{Intent, Plan, PlanDiff},
};

/// Source and sink of the current plan.
pub trait PlanStore {
    /// Loads the current plan.
    fn load(&self) -> Result<Plan>;

    /// Replaces the stored plan.
    fn save(&mut self, plan: &Plan) -> Result<()>;
}

/// The outcome of applying one intent: the diff and the plan it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedIntent {
    pub diff: PlanDiff,
    pub plan: Plan,
}

/// Loads the plan, applies `intent`, folds the diff and saves the result.
///
/// Nothing is saved when the intent fails to apply.
pub fn apply_to_store<S>(
    store: &mut S,
    intent: &Intent,
    ids: &mut dyn IdGenerator,
) -> Result<AppliedIntent>
where
    S: PlanStore + ?Sized,
{
    let plan = store.load()?;
    let diff = apply_intent(&plan, intent, ids)?;
    let next = plan.apply_diff(&diff);
    store.save(&next)?;
    debug!("Saved plan with {} task(s)", next.len());
    Ok(AppliedIntent { diff, plan: next })
}

/// A plan held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    plan: Plan,
}

impl MemoryStore {
    pub fn new(plan: Plan) -> Self {
        Self { plan }
    }

    /// Returns the stored plan, consuming the store.
    pub fn into_plan(self) -> Plan {
        self.plan
    }
}

impl PlanStore for MemoryStore {
    fn load(&self) -> Result<Plan> {
        Ok(self.plan.clone())
    }

    fn save(&mut self, plan: &Plan) -> Result<()> {
        self.plan = plan.clone();
        Ok(())
    }
}
