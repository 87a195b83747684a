//! Command argument wrappers and their handlers.
//!
//! Every editing command is a clap wrapper that converts into the same
//! [`PlanningAction`] payload the MCP tool receives, so CLI input goes
//! through exactly the validation a language model's tool call does:
//!
//! ```text
//! User Input → CLI Args (clap) → PlanningAction → Intent → Planner
//! ```

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use gantry_core::{
    display::{ApplyResult, History, OperationStatus, TaskNames},
    models::{Intent, Plan, ShiftMode},
    params::{ActionKind, PlanningAction, ShowHistory},
    Planner,
};
use log::debug;
use schemars::schema_for;

use crate::renderer::TerminalRenderer;

/// Direction of a date shift
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ShiftModeArg {
    /// Move dates later
    Forward,
    /// Move dates earlier
    Backward,
}

impl From<ShiftModeArg> for ShiftMode {
    fn from(val: ShiftModeArg) -> Self {
        match val {
            ShiftModeArg::Forward => ShiftMode::Forward,
            ShiftModeArg::Backward => ShiftMode::Backward,
        }
    }
}

/// Move a task's start and end by a number of days
#[derive(Args)]
pub struct ShiftArgs {
    #[arg(help = "Task name (case-insensitive, first match wins)")]
    pub target: String,
    #[arg(allow_negative_numbers = true, help = "Number of days to move")]
    pub days: i64,
    #[arg(short, long, value_enum, default_value = "forward")]
    pub mode: ShiftModeArg,
}

impl From<ShiftArgs> for PlanningAction {
    fn from(val: ShiftArgs) -> Self {
        PlanningAction {
            target: Some(val.target),
            delta_days: Some(val.days),
            mode: Some(val.mode.into()),
            ..PlanningAction::new(ActionKind::ShiftTaskDates)
        }
    }
}

/// Move a task's end date, leaving its start
#[derive(Args)]
pub struct ExtendArgs {
    #[arg(help = "Task name (case-insensitive, first match wins)")]
    pub target: String,
    #[arg(
        allow_negative_numbers = true,
        help = "Days to add to the end date; negative values shorten the task"
    )]
    pub days: i64,
}

impl From<ExtendArgs> for PlanningAction {
    fn from(val: ExtendArgs) -> Self {
        PlanningAction {
            target: Some(val.target),
            delta_days: Some(val.days),
            ..PlanningAction::new(ActionKind::ExtendTask)
        }
    }
}

/// Append a new task
#[derive(Args)]
pub struct CreateArgs {
    /// Name of the new task
    pub name: String,
    #[arg(long, help = "Start date (YYYY-MM-DD)")]
    pub start: String,
    #[arg(long, help = "End date (YYYY-MM-DD)")]
    pub end: String,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Ids of tasks this one depends on, comma-separated"
    )]
    pub depends_on: Vec<String>,
    #[arg(short, long, help = "Person responsible for the task")]
    pub assignee: Option<String>,
}

impl From<CreateArgs> for PlanningAction {
    fn from(val: CreateArgs) -> Self {
        PlanningAction {
            name: Some(val.name),
            start: Some(val.start),
            end: Some(val.end),
            depends_on: (!val.depends_on.is_empty()).then_some(val.depends_on),
            assignee: val.assignee,
            ..PlanningAction::new(ActionKind::CreateTask)
        }
    }
}

/// Move a milestone to a new date
#[derive(Args)]
pub struct MilestoneArgs {
    #[arg(help = "Milestone task name (case-insensitive, first match wins)")]
    pub target: String,
    #[arg(help = "New start date (YYYY-MM-DD)")]
    pub to_date: String,
}

impl From<MilestoneArgs> for PlanningAction {
    fn from(val: MilestoneArgs) -> Self {
        PlanningAction {
            target: Some(val.target),
            to_date: Some(val.to_date),
            ..PlanningAction::new(ActionKind::MoveMilestone)
        }
    }
}

/// Shift every task of a phase
#[derive(Args)]
pub struct PhaseArgs {
    #[arg(help = "Phase term, matched as a case-insensitive substring of task names")]
    pub target: String,
    #[arg(allow_negative_numbers = true, help = "Number of days to move")]
    pub days: i64,
}

impl From<PhaseArgs> for PlanningAction {
    fn from(val: PhaseArgs) -> Self {
        PlanningAction {
            target: Some(val.target),
            delta_days: Some(val.days),
            ..PlanningAction::new(ActionKind::ShiftPhase)
        }
    }
}

/// Apply a raw planning action
#[derive(Args)]
pub struct ApplyArgs {
    #[arg(help = "Action JSON, e.g. '{\"action\":\"extend_task\",\"target\":\"Packaging\",\"delta_days\":1}'; use - to read stdin")]
    pub payload: String,
}

/// Show recently applied intents
#[derive(Args)]
pub struct HistoryArgs {
    #[arg(short, long, default_value_t = 10, help = "Maximum number of entries to show")]
    pub limit: u32,
}

impl From<HistoryArgs> for ShowHistory {
    fn from(val: HistoryArgs) -> Self {
        ShowHistory { limit: val.limit }
    }
}

/// Show the plan
#[derive(Args)]
pub struct ShowPlanArgs {
    #[arg(long, help = "Print the plan as JSON instead of a table")]
    pub json: bool,
}

/// Write the plan as JSON
#[derive(Args)]
pub struct ExportPlanArgs {
    #[arg(help = "Output file; prints to stdout when omitted")]
    pub file: Option<PathBuf>,
}

/// Replace the plan from a JSON file
#[derive(Args)]
pub struct ImportPlanArgs {
    #[arg(help = "JSON file of the form {\"tasks\": [...]}")]
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show the plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// List task names in plan order
    #[command(alias = "n")]
    Names,
    /// Restore the starter plan and clear the history
    Reset,
    /// Write the plan as JSON
    Export(ExportPlanArgs),
    /// Replace the plan from a JSON file
    Import(ImportPlanArgs),
}

/// Runs CLI commands against a planner and renders the results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Show(args) => self.show_plan(args.json).await,
            PlanCommands::Names => self.task_names().await,
            PlanCommands::Reset => self.reset_plan().await,
            PlanCommands::Export(args) => self.export_plan(args.file.as_deref()).await,
            PlanCommands::Import(args) => self.import_plan(&args.file).await,
        }
    }

    pub async fn show_plan(&self, json: bool) -> Result<()> {
        let plan = self
            .planner
            .show_plan()
            .await
            .context("Failed to load plan")?;

        if json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
            return Ok(());
        }
        self.renderer.render(&format!("# Plan\n\n{plan}"))
    }

    async fn task_names(&self) -> Result<()> {
        let names = self
            .planner
            .task_names()
            .await
            .context("Failed to list task names")?;
        self.renderer.render(&TaskNames(names).to_string())
    }

    async fn reset_plan(&self) -> Result<()> {
        let plan = self
            .planner
            .reset_plan()
            .await
            .context("Failed to reset plan")?;
        let status =
            OperationStatus::success(format!("Plan reset to {} default task(s)", plan.len()));
        self.renderer.render(&status.to_string())
    }

    async fn export_plan(&self, file: Option<&Path>) -> Result<()> {
        let plan = self
            .planner
            .show_plan()
            .await
            .context("Failed to load plan")?;
        let json = serde_json::to_string_pretty(&plan)?;

        match file {
            Some(path) => {
                std::fs::write(path, format!("{json}\n"))
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                let status = OperationStatus::success(format!(
                    "Exported {} task(s) to {}",
                    plan.len(),
                    path.display()
                ));
                self.renderer.render(&status.to_string())
            }
            None => {
                println!("{json}");
                Ok(())
            }
        }
    }

    async fn import_plan(&self, file: &Path) -> Result<()> {
        let text = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let plan: Plan = serde_json::from_str(&text)
            .with_context(|| format!("Invalid plan JSON in {}", file.display()))?;

        let plan = self
            .planner
            .replace_plan(plan)
            .await
            .context("Failed to import plan")?;
        let status = OperationStatus::success(format!("Imported {} task(s)", plan.len()));
        self.renderer.render(&status.to_string())
    }

    /// Validates and applies one action, then shows the diff and the new plan.
    pub async fn apply(&self, action: PlanningAction) -> Result<()> {
        debug!("apply: {action:?}");
        let kind = action.action;
        let intent = Intent::try_from(action).with_context(|| format!("Invalid {kind} action"))?;

        let applied = self
            .planner
            .apply_intent(&intent)
            .await
            .with_context(|| format!("Failed to apply {kind}"))?;

        let result = ApplyResult::new(&intent, &applied).with_plan(true);
        self.renderer.render(&result.to_string())
    }

    pub async fn apply_json(&self, args: ApplyArgs) -> Result<()> {
        let payload = if args.payload == "-" {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read action from stdin")?;
            buffer
        } else {
            args.payload
        };

        let action: PlanningAction =
            serde_json::from_str(&payload).context("Invalid planning action JSON")?;
        self.apply(action).await
    }

    pub async fn history(&self, params: &ShowHistory) -> Result<()> {
        let entries = self
            .planner
            .history(params)
            .await
            .context("Failed to load history")?;
        self.renderer
            .render(&format!("# History\n\n{}", History(entries)))
    }

    /// Prints the JSON schema a language model is given for the action tool.
    pub fn print_schema() -> Result<()> {
        let schema = schema_for!(PlanningAction);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}
