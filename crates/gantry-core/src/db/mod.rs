//! SQLite storage for the plan and its intent history.
//!
//! This module provides the on-disk [`PlanStore`]. It keeps the tasks of the
//! current plan in a `tasks` table (ordered by position) and appends every
//! applied intent, together with the diff it produced, to `intent_history`.
//!
//! Applying an intent runs load → apply → project → save inside one
//! `BEGIN IMMEDIATE` transaction, so concurrent writers against the same file
//! queue on SQLite's write lock instead of overwriting each other's plans.

use std::{path::Path, time::Duration};

use rusqlite::Connection;

use crate::{
    error::{DatabaseResultExt, Result},
    models::Plan,
    store::PlanStore,
};

pub mod history_queries;
pub mod migrations;
pub mod task_queries;
pub mod utils;

/// How long a writer waits for another connection's write lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Self::with_connection(connection)
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self> {
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

impl PlanStore for Database {
    fn load(&self) -> Result<Plan> {
        self.load_plan()
    }

    fn save(&mut self, plan: &Plan) -> Result<()> {
        self.replace_plan(plan)
    }
}
