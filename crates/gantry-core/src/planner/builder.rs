//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    defaults::default_plan,
    error::{JoinResultExt, PlannerError, Result},
    ids::IdStrategy,
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    id_strategy: IdStrategy,
    seed_default_plan: bool,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            id_strategy: IdStrategy::default(),
            seed_default_plan: false,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/gantry/gantry.db` or `~/.local/share/gantry/gantry.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets how ids for created tasks are generated.
    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    /// Stores the built-in starter plan when the database holds no tasks.
    pub fn seed_default_plan(mut self, seed: bool) -> Self {
        self.seed_default_plan = seed;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the database path is invalid
    /// Returns `PlannerError::Database` if database initialization fails
    pub async fn build(self) -> Result<Planner> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PlannerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        let seed = self.seed_default_plan;
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path_clone)?;
            if seed {
                db.seed_if_empty(&default_plan())?;
            }
            Ok::<(), PlannerError>(())
        })
        .await
        .join_context()?;

        debug!("Planner ready at {}", db_path.display());
        Ok(Planner::new(db_path, self.id_strategy))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("gantry")
            .place_data_file("gantry.db")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
