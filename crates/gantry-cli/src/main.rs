//! Gantry CLI Application
//!
//! Command-line interface and MCP server for the gantry schedule editor.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use gantry_core::{IdStrategy, PlannerBuilder, ShowHistory};
use log::info;
use mcp::{run_stdio_server, GantryMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        sequential_ids,
        command,
    } = Args::parse();

    if let Some(Schema) = command {
        return Cli::print_schema();
    }

    let id_strategy = if sequential_ids {
        IdStrategy::Sequential
    } else {
        IdStrategy::Random
    };

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .with_id_strategy(id_strategy)
        .seed_default_plan(true)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Gantry started with {id_strategy} task ids");

    match command {
        Some(Plan { command }) => {
            Cli::new(planner, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(Shift(args)) => Cli::new(planner, renderer).apply(args.into()).await,
        Some(Extend(args)) => Cli::new(planner, renderer).apply(args.into()).await,
        Some(Create(args)) => Cli::new(planner, renderer).apply(args.into()).await,
        Some(Milestone(args)) => Cli::new(planner, renderer).apply(args.into()).await,
        Some(Phase(args)) => Cli::new(planner, renderer).apply(args.into()).await,
        Some(Apply(args)) => Cli::new(planner, renderer).apply_json(args).await,
        Some(History(args)) => {
            Cli::new(planner, renderer)
                .history(&ShowHistory::from(args))
                .await
        }
        Some(Schema) => Cli::print_schema(),
        Some(Serve) => {
            info!("Starting Gantry MCP server");
            run_stdio_server(GantryMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(planner, renderer).show_plan(false).await,
    }
}
