//! Error types for the gantry library.

use std::fmt;
use std::path::PathBuf;

use jiff::civil::Date;
use thiserror::Error;

/// What kind of lookup failed to resolve a target.
///
/// The kind only changes how the failure is worded; every variant maps to the
/// same [`PlannerError::TargetNotFound`] error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Exact task name lookup
    Task,
    /// Exact task name lookup for a milestone move
    Milestone,
    /// Substring lookup across task names
    Phase,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Task => write!(f, "Task not found"),
            TargetKind::Milestone => write!(f, "Milestone not found"),
            TargetKind::Phase => write!(f, "No tasks matched phase"),
        }
    }
}

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// A named task or phase matched nothing in the plan
    #[error("{kind}: {target}")]
    TargetNotFound { kind: TargetKind, target: String },
    /// A date field is not an ISO calendar date
    #[error("Invalid date '{value}': {source}")]
    DateParse {
        value: String,
        #[source]
        source: jiff::Error,
    },
    /// Date arithmetic left the supported calendar range
    #[error("Shifting {date} by {days} days is outside the supported date range")]
    DateOutOfRange { date: Date, days: i64 },
    /// The id generator kept producing ids that already exist in the plan
    #[error("Generated task id '{id}' collides with an existing task")]
    IdGenerationCollision { id: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PlannerError {
        PlannerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a target-not-found error for the given lookup string.
    pub fn target_not_found(kind: TargetKind, target: impl Into<String>) -> Self {
        Self::TargetNotFound {
            kind,
            target: target.into(),
        }
    }

    /// Whether the user can fix this error by rephrasing the command, as
    /// opposed to an environment or programming failure.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::TargetNotFound { .. }
                | Self::DateParse { .. }
                | Self::DateOutOfRange { .. }
                | Self::InvalidInput { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlannerError::database(message).with_source(e))
    }
}

/// Extension trait for joining blocking tasks spawned by the planner.
pub trait JoinResultExt<T> {
    /// Flatten a join result into a planner result.
    fn join_context(self) -> Result<T>;
}

impl<T> JoinResultExt<T> for std::result::Result<Result<T>, tokio::task::JoinError> {
    fn join_context(self) -> Result<T> {
        self.map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
