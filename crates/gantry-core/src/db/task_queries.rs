//! Task persistence and transactional intent application.

use log::{debug, info};
use rusqlite::{params, Connection, TransactionBehavior};

use super::{history_queries, utils};
use crate::{
    engine,
    error::{DatabaseResultExt, Result},
    ids::IdGenerator,
    models::{Intent, Plan, Task},
    store::AppliedIntent,
};

const SELECT_TASKS_SQL: &str = "SELECT id, name, start_date, end_date, depends_on, assignee FROM tasks ORDER BY position";
const DELETE_TASKS_SQL: &str = "DELETE FROM tasks";
const INSERT_TASK_SQL: &str = "INSERT INTO tasks (id, position, name, start_date, end_date, depends_on, assignee) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const COUNT_TASKS_SQL: &str = "SELECT COUNT(*) FROM tasks";

/// Construct a Task from a database row
fn build_task_from_row(row: &rusqlite::Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        start: utils::date_column(row, 2)?,
        end: utils::date_column(row, 3)?,
        depends_on: utils::optional_json_column(row, 4)?,
        assignee: row.get(5)?,
    })
}

/// Reads every task in plan order.
fn read_tasks(conn: &Connection) -> Result<Vec<Task>> {
    let mut stmt = conn
        .prepare(SELECT_TASKS_SQL)
        .db_context("Failed to prepare task query")?;

    let tasks = stmt
        .query_map([], build_task_from_row)
        .db_context("Failed to query tasks")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read task row")?;

    Ok(tasks)
}

/// Replaces the stored tasks with `tasks`, positions following slice order.
fn write_tasks(conn: &Connection, tasks: &[Task]) -> Result<()> {
    conn.execute(DELETE_TASKS_SQL, [])
        .db_context("Failed to clear tasks")?;

    let mut stmt = conn
        .prepare(INSERT_TASK_SQL)
        .db_context("Failed to prepare task insert")?;

    for (position, task) in tasks.iter().enumerate() {
        let depends_on = task
            .depends_on
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        stmt.execute(params![
            task.id,
            position as i64,
            task.name,
            task.start.to_string(),
            task.end.to_string(),
            depends_on,
            task.assignee,
        ])
        .db_context("Failed to insert task")?;
    }

    Ok(())
}

impl super::Database {
    /// Loads the current plan.
    pub fn load_plan(&self) -> Result<Plan> {
        Ok(Plan::new(read_tasks(&self.connection)?))
    }

    /// Replaces the stored plan in a single transaction.
    ///
    /// Fails without changing anything if two tasks share an id.
    pub fn replace_plan(&mut self, plan: &Plan) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        write_tasks(&tx, &plan.tasks)?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Replaced plan with {} task(s)", plan.len());
        Ok(())
    }

    /// Replaces the stored plan with `plan` and forgets the intent history.
    ///
    /// Both happen in one transaction: on error neither the tasks nor the
    /// history change.
    pub fn reset_plan(&mut self, plan: &Plan) -> Result<()> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        history_queries::delete_all(&tx)?;
        write_tasks(&tx, &plan.tasks)?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Reset plan to {} task(s) and cleared history", plan.len());
        Ok(())
    }

    /// Number of stored tasks.
    pub fn task_count(&self) -> Result<u64> {
        self.connection
            .query_row(COUNT_TASKS_SQL, [], |row| row.get::<_, i64>(0))
            .map(|count| count as u64)
            .db_context("Failed to count tasks")
    }

    /// Stores `plan` if no tasks are stored yet. Returns whether it did.
    pub fn seed_if_empty(&mut self, plan: &Plan) -> Result<bool> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let count: i64 = tx
            .query_row(COUNT_TASKS_SQL, [], |row| row.get(0))
            .db_context("Failed to count tasks")?;
        if count > 0 {
            return Ok(false);
        }

        write_tasks(&tx, &plan.tasks)?;
        tx.commit().db_context("Failed to commit transaction")?;
        info!("Seeded empty store with {} task(s)", plan.len());
        Ok(true)
    }

    /// Applies `intent` to the stored plan and records it in the history.
    ///
    /// The whole read-modify-write cycle holds SQLite's write lock, so
    /// concurrent callers are serialized. On any error the transaction is
    /// rolled back and the stored plan is unchanged.
    pub fn apply_intent(
        &mut self,
        intent: &Intent,
        ids: &mut dyn IdGenerator,
    ) -> Result<AppliedIntent> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let plan = Plan::new(read_tasks(&tx)?);
        let diff = engine::apply_intent(&plan, intent, ids)?;
        let next = plan.apply_diff(&diff);

        write_tasks(&tx, &next.tasks)?;
        history_queries::insert_entry(&tx, intent, &diff)?;

        tx.commit().db_context("Failed to commit transaction")?;
        info!(
            "Applied {} with {} change(s)",
            intent.action(),
            diff.len()
        );

        Ok(AppliedIntent { diff, plan: next })
    }
}
