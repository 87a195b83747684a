//! Intent operations for the Planner.

use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{JoinResultExt, Result},
    models::{HistoryEntry, Intent},
    params::{PlanningAction, ShowHistory},
    store::AppliedIntent,
};

impl Planner {
    /// Applies `intent` to the stored plan.
    ///
    /// The diff, the resulting plan and the history record are committed
    /// together. If the target cannot be resolved nothing is stored.
    pub async fn apply_intent(&self, intent: &Intent) -> Result<AppliedIntent> {
        let db_path = self.db_path.clone();
        let id_strategy = self.id_strategy;
        let intent = intent.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut ids = id_strategy.generator();
            db.apply_intent(&intent, ids.as_mut())
        })
        .await
        .join_context()
    }

    /// Validates a flat tool-call payload and applies the resulting intent.
    pub async fn apply_action(&self, action: PlanningAction) -> Result<AppliedIntent> {
        let intent = Intent::try_from(action)?;
        self.apply_intent(&intent).await
    }

    /// Most recent applied intents first.
    pub async fn history(&self, params: &ShowHistory) -> Result<Vec<HistoryEntry>> {
        let db_path = self.db_path.clone();
        let limit = params.limit;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_history(limit)
        })
        .await
        .join_context()
    }
}
