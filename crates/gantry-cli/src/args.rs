use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    ApplyArgs, CreateArgs, ExtendArgs, HistoryArgs, MilestoneArgs, PhaseArgs, PlanCommands,
    ShiftArgs,
};

/// Edit a date-based project plan with structured intents
///
/// Gantry keeps a plan of dated tasks and applies editing intents to it:
/// shifting a task, extending it, adding one, moving a milestone or shifting
/// every task of a phase. Each edit reports the before/after diff and is
/// recorded in the history. The same operations are available to AI
/// assistants through the MCP server (`gantry serve`).
#[derive(Parser)]
#[command(version, about, name = "gantry")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/gantry/gantry.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Give created tasks counter-based ids (t_1, t_2, ...) instead of random ones
    #[arg(long, global = true)]
    pub sequential_ids: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Gantry CLI
///
/// - `plan`: inspect, reset, import or export the whole plan
/// - `shift`, `extend`, `create`, `milestone`, `phase`: apply one intent
/// - `apply`: apply a raw `apply_planning_action` JSON payload
/// - `history`, `schema`, `serve`
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or replace the plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Move a task's start and end by a number of days
    #[command(alias = "s")]
    Shift(ShiftArgs),
    /// Move a task's end date by a number of days
    #[command(alias = "e")]
    Extend(ExtendArgs),
    /// Append a new task to the plan
    #[command(alias = "c")]
    Create(CreateArgs),
    /// Move a milestone task to a new start date, keeping its span
    #[command(alias = "m")]
    Milestone(MilestoneArgs),
    /// Shift every task whose name contains a phase term
    Phase(PhaseArgs),
    /// Apply a raw planning action given as JSON
    Apply(ApplyArgs),
    /// Show recently applied intents
    #[command(alias = "h")]
    History(HistoryArgs),
    /// Print the JSON schema of the planning action payload
    Schema,
    /// Start the MCP server
    Serve,
}
