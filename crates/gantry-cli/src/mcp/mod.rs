//! MCP server implementation for Gantry
//!
//! Exposes the plan to AI assistants over the Model Context Protocol: the
//! assistant reads the plan and its task names, then edits it through a
//! single `apply_planning_action` tool whose argument schema is the flat
//! planning-action payload.

use std::sync::Arc;

use anyhow::Result;
use gantry_core::Planner;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;
pub mod prompts;

pub use handlers::{McpResult, PlanningAction, ShowHistory};

/// MCP server for Gantry
#[derive(Clone)]
pub struct GantryMcpServer {
    planner: Arc<Mutex<Planner>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl GantryMcpServer {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "show_plan",
        description = "Show the current plan as a table of tasks with ids, names, start and end dates (YYYY-MM-DD), span in days, dependencies and assignees."
    )]
    async fn show_plan(&self) -> McpResult {
        self.handlers().show_plan().await
    }

    #[tool(
        name = "list_task_names",
        description = "List the names of all tasks in plan order. Use these names verbatim as the 'target' of apply_planning_action."
    )]
    async fn list_task_names(&self) -> McpResult {
        self.handlers().list_task_names().await
    }

    #[tool(
        name = "apply_planning_action",
        description = "Apply one scheduling intent to the plan and return the resulting diff. Actions:
        - shift_task_dates: target, delta_days, mode ('forward' or 'backward'); moves start and end
        - extend_task: target, delta_days; moves only the end date, negative values shorten
        - create_task: name, start, end (YYYY-MM-DD), optional dependsOn (task ids) and assignee; appends a task
        - move_milestone: target, to_date (YYYY-MM-DD); moves the task keeping its span
        - shift_phase: target, delta_days; shifts every task whose name contains target (case-insensitive)
        Task targets match names case-insensitively and the first match wins. Nothing is changed when a target does not match."
    )]
    async fn apply_planning_action(&self, params: Parameters<PlanningAction>) -> McpResult {
        self.handlers().apply_planning_action(params).await
    }

    #[tool(
        name = "reset_plan",
        description = "Restore the built-in starter plan (a two-wheel scooter build) and clear the history. Discards every edit."
    )]
    async fn reset_plan(&self) -> McpResult {
        self.handlers().reset_plan().await
    }

    #[tool(
        name = "show_history",
        description = "Show the most recently applied planning actions with their diffs, newest first. 'limit' defaults to 10."
    )]
    async fn show_history(&self, params: Parameters<ShowHistory>) -> McpResult {
        self.handlers().show_history(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for GantryMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(r#"Gantry edits a date-based project plan through structured intents.

## Core Concepts
- **Tasks**: id, name, start and end dates (inclusive calendar dates), optional dependsOn ids and assignee
- **Intents**: shift_task_dates, extend_task, create_task, move_milestone, shift_phase
- **Diffs**: every applied intent returns update records (before/after) and create records

## Workflow
1. Call `list_task_names` (or `show_plan`) to learn the exact task names
2. Call `apply_planning_action` with one intent
3. Review the returned diff; use `show_history` to see earlier edits
4. `reset_plan` restores the starter plan

The `parse_intent` prompt turns a user's sentence into one apply_planning_action call."#.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.handlers().list_prompts(request).await
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.handlers().get_prompt(request).await
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: GantryMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Gantry MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use gantry_core::{IdStrategy, PlannerBuilder};
    use rmcp::model::{PromptMessageContent, RawContent};
    use tempfile::TempDir;

    use super::*;

    async fn create_test_server() -> (TempDir, GantryMcpServer) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let planner = PlannerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("mcp.db")))
            .with_id_strategy(IdStrategy::Sequential)
            .seed_default_plan(true)
            .build()
            .await
            .expect("Failed to create planner");
        (temp_dir, GantryMcpServer::new(planner))
    }

    fn text_at(result: &rmcp::model::CallToolResult, index: usize) -> String {
        let RawContent::Text(text) = &result.content[index].raw else {
            panic!("expected text content at {index}");
        };
        text.text.clone()
    }

    fn first_text(result: &rmcp::model::CallToolResult) -> String {
        text_at(result, 0)
    }

    fn action(json: serde_json::Value) -> Parameters<PlanningAction> {
        Parameters(serde_json::from_value(json).expect("valid action"))
    }

    #[test]
    fn test_tools_are_registered() {
        let router = GantryMcpServer::tool_router();
        let mut names: Vec<_> = router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            [
                "apply_planning_action",
                "list_task_names",
                "reset_plan",
                "show_history",
                "show_plan"
            ]
        );
    }

    #[tokio::test]
    async fn test_apply_planning_action_returns_diff() {
        let (_temp_dir, server) = create_test_server().await;

        let result = server
            .apply_planning_action(action(serde_json::json!({
                "action": "extend_task",
                "target": "packaging",
                "delta_days": 2
            })))
            .await
            .expect("tool call should succeed");

        let summary = first_text(&result);
        assert!(summary.contains("Applied extend_task"));
        assert!(summary.contains("2025-08-26..2025-08-26 → 2025-08-26..2025-08-28"));

        let diff: serde_json::Value = serde_json::from_str(&text_at(&result, 1)).unwrap();
        assert_eq!(diff["changes"][0]["type"], "update");
        assert_eq!(diff["changes"][0]["taskId"], "pack");
    }

    #[tokio::test]
    async fn test_unknown_target_is_invalid_params() {
        let (_temp_dir, server) = create_test_server().await;

        let err = server
            .apply_planning_action(action(serde_json::json!({
                "action": "move_milestone",
                "target": "Launch",
                "to_date": "2025-09-01"
            })))
            .await
            .unwrap_err();

        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("Milestone not found: Launch"));
    }

    #[tokio::test]
    async fn test_list_task_names_and_reset() {
        let (_temp_dir, server) = create_test_server().await;

        let names = first_text(&server.list_task_names().await.unwrap());
        assert!(names.contains("- W1 Cutting"));
        assert!(names.contains("- Ship to Customer"));

        let reset = first_text(&server.reset_plan().await.unwrap());
        assert!(reset.contains("Plan reset to 11 default task(s)"));
    }

    #[tokio::test]
    async fn test_parse_intent_prompt_includes_task_names() {
        let (_temp_dir, server) = create_test_server().await;

        let mut arguments = serde_json::Map::new();
        arguments.insert("utterance".to_string(), "push packaging by a day".into());
        let prompt = server
            .handlers()
            .get_prompt(GetPromptRequestParam {
                name: "parse_intent".to_string(),
                arguments: Some(arguments),
            })
            .await
            .expect("prompt should render");

        let PromptMessageContent::Text { text } = &prompt.messages[0].content else {
            panic!("expected text prompt");
        };
        assert!(text.contains("\"W1 Cutting\""));
        assert!(text.contains("push packaging by a day"));
        assert!(!text.contains("{task_names}"));
    }
}
