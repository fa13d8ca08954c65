//! Validation helper functions for the TaskNotes MCP server
//!
//! Tool arguments arrive as strings; these helpers turn them into typed values or
//! an `INVALID_PARAMS` error the client can show.

use mcp_attr::Result as McpResult;
use std::path::PathBuf;
use uuid::Uuid;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse a task ID, ignoring surrounding whitespace
///
/// # Arguments
/// * `id` - UUID string as shown by list_tasks (any case)
pub fn parse_task_id(id: &str) -> McpResult<Uuid> {
    Uuid::parse_str(id.trim()).map_err(|_| {
        invalid_params(format!(
            "Invalid task ID '{}'. Use the ID shown by list_tasks (e.g., '67e55044-10b1-426f-9247-bb680e5fe0c8')",
            id
        ))
    })
}

/// Check that a task title is not blank
pub fn require_title(title: &str) -> McpResult<()> {
    if title.trim().is_empty() {
        return Err(invalid_params("Task title cannot be empty".to_string()));
    }
    Ok(())
}

/// Parse a file path argument, rejecting blank input
pub fn parse_path(path: &str) -> McpResult<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(invalid_params("File path cannot be empty".to_string()));
    }
    Ok(PathBuf::from(trimmed))
}
