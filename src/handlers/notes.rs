//! Notes handlers for the TaskNotes MCP server

use crate::TaskNotesServerHandler;
use mcp_attr::{Result as McpResult, bail_public};

impl TaskNotesServerHandler {
    /// Returns the notes text as stored (an empty pad yields an empty string).
    pub async fn handle_read_notes(&self) -> McpResult<String> {
        Ok(self.workspace().notes().to_string())
    }

    /// Replaces the notes text and saves.
    pub async fn handle_write_notes(&self, notes: String) -> McpResult<String> {
        let mut workspace = self.workspace();

        if let Err(e) = workspace.set_notes(&notes) {
            drop(workspace);
            bail_public!(_, "Notes updated in memory but not saved. {}", e);
        }

        Ok(format!("Notes saved ({} characters)", notes.chars().count()))
    }
}
