//! Plan operations for the Planner.

use log::info;
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    defaults::default_plan,
    error::{JoinResultExt, Result},
    models::Plan,
};

impl Planner {
    /// Loads the stored plan.
    pub async fn show_plan(&self) -> Result<Plan> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.load_plan()
        })
        .await
        .join_context()
    }

    /// Task names in plan order.
    pub async fn task_names(&self) -> Result<Vec<String>> {
        Ok(self.show_plan().await?.task_names())
    }

    /// Replaces the stored plan with `plan`.
    ///
    /// Rejected as a whole if two tasks share an id.
    pub async fn replace_plan(&self, plan: Plan) -> Result<Plan> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.replace_plan(&plan)?;
            Ok(plan)
        })
        .await
        .join_context()
    }

    /// Restores the built-in starter plan and forgets the intent history.
    pub async fn reset_plan(&self) -> Result<Plan> {
        let db_path = self.db_path.clone();

        let plan = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let plan = default_plan();
            db.reset_plan(&plan)?;
            Ok(plan)
        })
        .await
        .join_context()?;

        info!("Reset plan to {} default task(s)", plan.len());
        Ok(plan)
    }
}
