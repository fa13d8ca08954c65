//! File handlers for the TaskNotes MCP server
//!
//! Opening imports the chosen file into the default location; saving writes the
//! in-memory document to the represented path. Write-through always targets the
//! default file.

use crate::TaskNotesServerHandler;
use crate::formatting;
use crate::storage::StoreError;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TaskNotesServerHandler {
    /// Clears tasks and notes and forgets the represented file.
    pub async fn handle_new_document(&self) -> McpResult<String> {
        let mut workspace = self.workspace();

        if let Err(e) = workspace.new_document() {
            drop(workspace);
            bail_public!(_, "{}", e);
        }

        Ok("Started a new empty document".to_string())
    }

    /// Imports `path`; rejects files without the separator.
    pub async fn handle_open_file(&self, path: String) -> McpResult<String> {
        let path = validation::parse_path(&path)?;

        let mut workspace = self.workspace();
        if let Err(e) = workspace.open_file(&path) {
            drop(workspace);
            bail_public!(_, "{}", e);
        }

        Ok(format!(
            "Opened {} ({} task(s)){}",
            workspace.title(),
            workspace.tasks().len(),
            formatting::format_load_warning(workspace.load_warning())
        ))
    }

    /// Writes to the represented file; without one the caller must use save_file_as.
    pub async fn handle_save_file(&self) -> McpResult<String> {
        let mut workspace = self.workspace();

        let path = match workspace.save() {
            Ok(path) => path,
            Err(StoreError::NoRepresentedFile) => {
                drop(workspace);
                bail_public!(
                    _,
                    "This document has no file yet. Use save_file_as with a destination path."
                );
            }
            Err(e) => {
                drop(workspace);
                bail_public!(_, "{}", e);
            }
        };

        Ok(format!("Saved to {}", path.display()))
    }

    /// Writes the document to `path` and associates the document with it.
    pub async fn handle_save_file_as(&self, path: String) -> McpResult<String> {
        let path = validation::parse_path(&path)?;

        let mut workspace = self.workspace();
        if let Err(e) = workspace.save_as(&path) {
            drop(workspace);
            bail_public!(_, "{}", e);
        }

        Ok(format!("Saved as {}", path.display()))
    }

    /// Re-reads the default file, discarding in-memory state.
    pub async fn handle_reload(&self) -> McpResult<String> {
        let mut workspace = self.workspace();
        workspace.refresh();

        Ok(format!(
            "Reloaded {} task(s) from {}{}",
            workspace.tasks().len(),
            workspace.file_location().display(),
            formatting::format_load_warning(workspace.load_warning())
        ))
    }

    /// Reports the default file path, the document title, the edited flag and any load warning.
    pub async fn handle_file_info(&self) -> McpResult<String> {
        let workspace = self.workspace();
        Ok(formatting::format_file_info(
            workspace.file_location(),
            &workspace.title(),
            workspace.is_edited(),
            workspace.tasks(),
            workspace.load_warning(),
        ))
    }
}
