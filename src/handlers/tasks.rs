//! Task handlers for the TaskNotes MCP server

use crate::TaskNotesServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TaskNotesServerHandler {
    /// Validates the title, prepends the task and saves.
    pub async fn handle_add_task(&self, title: String) -> McpResult<String> {
        validation::require_title(&title)?;

        let mut workspace = self.workspace();
        let task = match workspace.add(&title) {
            Ok(Some(task)) => task,
            Ok(None) => {
                drop(workspace);
                bail_public!(_, "Task title cannot be empty");
            }
            Err(e) => {
                drop(workspace);
                bail_public!(_, "Task added in memory but not saved. {}", e);
            }
        };

        Ok(format!("Task added with ID: {}", task.id))
    }

    /// Flips the checked state; an unknown ID is reported but is not an error.
    pub async fn handle_toggle_task(&self, id: String) -> McpResult<String> {
        let task_id = validation::parse_task_id(&id)?;

        let mut workspace = self.workspace();
        let completed = match workspace.toggle(&task_id) {
            Ok(Some(completed)) => completed,
            Ok(None) => return Ok(format!("No task with ID {}; nothing changed", task_id)),
            Err(e) => {
                drop(workspace);
                bail_public!(_, "Task toggled in memory but not saved. {}", e);
            }
        };

        Ok(format!(
            "Task {} marked as {}",
            task_id,
            if completed { "done" } else { "not done" }
        ))
    }

    /// Removes the task; an unknown ID is reported but is not an error.
    pub async fn handle_delete_task(&self, id: String) -> McpResult<String> {
        let task_id = validation::parse_task_id(&id)?;

        let mut workspace = self.workspace();
        let removed = match workspace.delete(&task_id) {
            Ok(removed) => removed,
            Err(e) => {
                drop(workspace);
                bail_public!(_, "Task deleted in memory but not saved. {}", e);
            }
        };

        if removed {
            Ok(format!("Deleted task {}", task_id))
        } else {
            Ok(format!("No task with ID {}; nothing changed", task_id))
        }
    }

    /// Formats every task, newest first.
    pub async fn handle_list_tasks(&self) -> McpResult<String> {
        let workspace = self.workspace();
        Ok(format!(
            "{}{}",
            formatting::format_tasks(workspace.tasks()),
            formatting::format_load_warning(workspace.load_warning())
        ))
    }

    /// Empties the task list and saves.
    pub async fn handle_clear_tasks(&self) -> McpResult<String> {
        let mut workspace = self.workspace();
        let count = workspace.tasks().len();

        if let Err(e) = workspace.clear() {
            drop(workspace);
            bail_public!(_, "Tasks cleared in memory but not saved. {}", e);
        }

        Ok(format!("Removed {} task(s)", count))
    }
}
