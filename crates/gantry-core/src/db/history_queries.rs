//! Intent history records.

use jiff::Timestamp;
use rusqlite::{params, Connection};

use super::utils;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{HistoryEntry, Intent, PlanDiff},
};

const INSERT_HISTORY_SQL: &str =
    "INSERT INTO intent_history (action, intent, diff, applied_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_HISTORY_SQL: &str =
    "SELECT id, intent, diff, applied_at FROM intent_history ORDER BY id DESC LIMIT ?1";
const CLEAR_HISTORY_SQL: &str = "DELETE FROM intent_history";

/// Appends an applied intent and its diff.
pub(super) fn insert_entry(conn: &Connection, intent: &Intent, diff: &PlanDiff) -> Result<()> {
    let intent_json = serde_json::to_string(intent)?;
    let diff_json = serde_json::to_string(diff)?;

    conn.execute(
        INSERT_HISTORY_SQL,
        params![
            intent.action(),
            intent_json,
            diff_json,
            Timestamp::now().to_string()
        ],
    )
    .db_context("Failed to record intent history")?;

    Ok(())
}

/// Deletes every history entry on `conn`.
pub(super) fn delete_all(conn: &Connection) -> Result<()> {
    conn.execute(CLEAR_HISTORY_SQL, [])
        .db_context("Failed to clear history")?;
    Ok(())
}

fn build_entry_from_row(row: &rusqlite::Row) -> rusqlite::Result<HistoryEntry> {
    Ok(HistoryEntry {
        id: row.get::<_, i64>(0)? as u64,
        intent: utils::json_column(row, 1)?,
        diff: utils::json_column(row, 2)?,
        applied_at: utils::timestamp_column(row, 3)?,
    })
}

impl super::Database {
    /// Most recently applied intents first, at most `limit` of them.
    pub fn list_history(&self, limit: u32) -> Result<Vec<HistoryEntry>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_HISTORY_SQL)
            .db_context("Failed to prepare history query")?;

        let entries = stmt
            .query_map(params![i64::from(limit)], build_entry_from_row)
            .db_context("Failed to query history")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read history row")?;

        Ok(entries)
    }

    /// Forgets every recorded intent.
    pub fn clear_history(&mut self) -> Result<()> {
        delete_all(&self.connection)
    }
}
