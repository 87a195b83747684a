//! MCP tool handlers implementation

use std::sync::Arc;

use gantry_core::{
    display::{ApplyResult, History, OperationStatus, TaskNames},
    params as core,
    Intent, Planner,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageContent,
        PromptMessageRole,
    },
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::{
    errors::to_mcp_error,
    prompts::{prompt_templates, render_template},
};

// Core parameter types stay free of MCP concerns; this transparent wrapper
// adds what rmcp's `Parameters` extractor needs and defers the schema to the
// wrapped type.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> McpParams<T>
where
    T: JsonSchema,
{
    pub fn into_inner(self) -> T {
        self.0
    }
}

pub type PlanningAction = McpParams<core::PlanningAction>;
pub type ShowHistory = McpParams<core::ShowHistory>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Mutex<Planner>>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Mutex<Planner>>) -> Self {
        Self { planner }
    }

    pub async fn show_plan(&self) -> McpResult {
        debug!("show_plan");

        let plan = self
            .planner
            .lock()
            .await
            .show_plan()
            .await
            .map_err(|e| to_mcp_error("Failed to load plan", &e))?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "# Plan\n\n{plan}"
        ))]))
    }

    pub async fn list_task_names(&self) -> McpResult {
        debug!("list_task_names");

        let names = self
            .planner
            .lock()
            .await
            .task_names()
            .await
            .map_err(|e| to_mcp_error("Failed to list task names", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            TaskNames(names).to_string(),
        )]))
    }

    pub async fn apply_planning_action(
        &self,
        Parameters(params): Parameters<PlanningAction>,
    ) -> McpResult {
        debug!("apply_planning_action: {:?}", params);

        let action = params.into_inner();
        let kind = action.action;
        let intent = Intent::try_from(action)
            .map_err(|e| to_mcp_error(&format!("Invalid {kind} action"), &e))?;

        let applied = self
            .planner
            .lock()
            .await
            .apply_intent(&intent)
            .await
            .map_err(|e| to_mcp_error(&format!("Failed to apply {kind}"), &e))?;

        let diff_json = serde_json::to_string(&applied.diff)
            .map_err(|e| ErrorData::internal_error(format!("Failed to encode diff: {e}"), None))?;

        Ok(CallToolResult::success(vec![
            Content::text(ApplyResult::new(&intent, &applied).to_string()),
            Content::text(diff_json),
        ]))
    }

    pub async fn reset_plan(&self) -> McpResult {
        debug!("reset_plan");

        let plan = self
            .planner
            .lock()
            .await
            .reset_plan()
            .await
            .map_err(|e| to_mcp_error("Failed to reset plan", &e))?;

        let status = OperationStatus::success(format!(
            "Plan reset to {} default task(s). History cleared.",
            plan.len()
        ));
        Ok(CallToolResult::success(vec![Content::text(
            status.to_string(),
        )]))
    }

    pub async fn show_history(&self, Parameters(params): Parameters<ShowHistory>) -> McpResult {
        debug!("show_history: {:?}", params);
        let params = params.into_inner();

        let entries = self
            .planner
            .lock()
            .await
            .history(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to load history", &e))?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "# History\n\n{}",
            History(entries)
        ))]))
    }

    /// List all available prompts
    pub async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
    ) -> Result<ListPromptsResult, ErrorData> {
        debug!("list_prompts");

        let prompts = prompt_templates()
            .iter()
            .map(|template| {
                Prompt::new(
                    template.name,
                    Some(template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.to_string(),
                                title: None,
                                description: Some(arg.description.to_string()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        Ok(ListPromptsResult {
            next_cursor: None,
            prompts,
        })
    }

    /// Get a specific prompt by name, filled with its arguments and the
    /// current task names
    pub async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
    ) -> Result<GetPromptResult, ErrorData> {
        debug!("get_prompt: {}", request.name);

        let templates = prompt_templates();
        let template = templates
            .iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| ErrorData::invalid_params("Prompt not found", None))?;

        let mut values = Vec::new();
        for arg in &template.arguments {
            let value = request
                .arguments
                .as_ref()
                .and_then(|args| args.get(arg.name));
            match value.and_then(|v| v.as_str()) {
                Some(text) => values.push((arg.name, text.to_string())),
                None if arg.required => {
                    return Err(ErrorData::invalid_params(
                        format!("Required string argument '{}' is missing", arg.name),
                        None,
                    ));
                }
                None => values.push((arg.name, String::new())),
            }
        }

        let names = self
            .planner
            .lock()
            .await
            .task_names()
            .await
            .map_err(|e| to_mcp_error("Failed to list task names", &e))?;
        let names_json = serde_json::to_string(&names)
            .map_err(|e| ErrorData::internal_error(format!("Failed to encode names: {e}"), None))?;
        values.push(("task_names", names_json));

        let prompt_text = render_template(
            template.template,
            values.iter().map(|(name, value)| (*name, value.as_str())),
        );

        Ok(GetPromptResult {
            description: Some(template.description.to_string()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(prompt_text),
            }],
        })
    }
}
