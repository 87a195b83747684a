//! Error handling utilities for MCP server

use gantry_core::PlannerError;
use rmcp::ErrorData;

/// Converts a planner error into an MCP error.
///
/// Errors the caller can fix by changing its arguments (unknown target,
/// missing field, malformed date) are reported as invalid params so the model
/// can retry; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_user_correctable() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
