//! TaskNotes MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a daily task
//! checklist paired with a free-form notes text. Both halves live in one flat text
//! file: the task list as a JSON array, a `###$$###` separator line, then the notes.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TaskNotesServerHandler` and `handlers` - tool definitions and replies
//! - **Domain Layer**: `tasks` and `workspace` - task list, document, write-through mutations
//! - **Persistence Layer**: `storage` and `format` - the combined file format with atomic writes
//!
//! # Example
//!
//! ```no_run
//! use tasknotes_mcp::{Storage, TaskNotesServerHandler};
//!
//! let handler = TaskNotesServerHandler::new(Storage::at_default_location());
//! // Use handler with an MCP server...
//! # drop(handler);
//! ```

pub mod format;
pub mod formatting;
pub mod handlers;
pub mod logging;
pub mod migration;
pub mod storage;
pub mod tasks;
pub mod validation;
pub mod workspace;

use log::info;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export commonly used types
pub use storage::{DEFAULT_FILE_NAME, StoreError, Storage, default_file_location};
pub use tasks::{Document, DocumentEvent, Task, TaskList};
pub use workspace::Workspace;

/// MCP server handler for the task checklist and notes
///
/// Owns the single [`Workspace`]. Tool calls are serialised through the mutex, and
/// every change is written through to the data file before the reply is sent.
pub struct TaskNotesServerHandler {
    pub(crate) workspace: Mutex<Workspace>,
}

impl TaskNotesServerHandler {
    /// Create a handler over `storage`, loading whatever document it currently holds
    ///
    /// # Example
    /// ```no_run
    /// # use tasknotes_mcp::{Storage, TaskNotesServerHandler};
    /// let handler = TaskNotesServerHandler::new(Storage::new("TaskNotes.txt"));
    /// ```
    pub fn new(storage: Storage) -> Self {
        let mut workspace = Workspace::new(storage);
        workspace.subscribe(|event| info!("Document event: {:?}", event));
        Self {
            workspace: Mutex::new(workspace),
        }
    }

    /// Lock the workspace; a panic in an earlier call does not make the data unusable
    pub(crate) fn workspace(&self) -> MutexGuard<'_, Workspace> {
        self.workspace.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Daily task checklist with a free-form notes pad, stored together in one text file.
///
/// Tasks are shown newest first. Each task has an ID (a UUID), a title and a checked
/// state. The notes are a single block of text. Every change is saved immediately to
/// the default file; use the file tools to import another TaskNotes file or to write a
/// copy elsewhere.
///
/// Typical flow: list_tasks → add_task / toggle_task / delete_task → read_notes / write_notes.
#[mcp_server]
impl McpServer for TaskNotesServerHandler {
    /// **Add**: Put a new unchecked task at the top of today's list.
    #[tool]
    async fn add_task(
        &self,
        /// Title: what needs doing (must not be blank)
        title: String,
    ) -> McpResult<String> {
        self.handle_add_task(title).await
    }

    /// **Check/Uncheck**: Flip a task between done and not done.
    #[tool]
    async fn toggle_task(
        &self,
        /// ID of the task (UUID from list_tasks)
        id: String,
    ) -> McpResult<String> {
        self.handle_toggle_task(id).await
    }

    /// **Delete**: Remove a task from the list permanently.
    #[tool]
    async fn delete_task(
        &self,
        /// ID of the task (UUID from list_tasks)
        id: String,
    ) -> McpResult<String> {
        self.handle_delete_task(id).await
    }

    /// **Review**: Show every task, newest first, with its ID and checked state.
    #[tool]
    async fn list_tasks(&self) -> McpResult<String> {
        self.handle_list_tasks().await
    }

    /// **Clear**: Remove all tasks. Notes are kept.
    #[tool]
    async fn clear_tasks(&self) -> McpResult<String> {
        self.handle_clear_tasks().await
    }

    /// **Read notes**: Return the free-form notes text.
    #[tool]
    async fn read_notes(&self) -> McpResult<String> {
        self.handle_read_notes().await
    }

    /// **Write notes**: Replace the notes text. Send the full text, not a diff.
    #[tool]
    async fn write_notes(
        &self,
        /// Full notes text
        notes: String,
    ) -> McpResult<String> {
        self.handle_write_notes(notes).await
    }

    /// **New**: Start an empty document (no tasks, no notes).
    #[tool]
    async fn new_document(&self) -> McpResult<String> {
        self.handle_new_document().await
    }

    /// **Open**: Import a TaskNotes file. Its content replaces the default file.
    #[tool]
    async fn open_file(
        &self,
        /// Path of the file to open
        path: String,
    ) -> McpResult<String> {
        self.handle_open_file(path).await
    }

    /// **Save**: Write the document to the file it was opened from or last saved as.
    #[tool]
    async fn save_file(&self) -> McpResult<String> {
        self.handle_save_file().await
    }

    /// **Save As**: Write a copy of the document to a new path and associate it.
    #[tool]
    async fn save_file_as(
        &self,
        /// Destination path
        path: String,
    ) -> McpResult<String> {
        self.handle_save_file_as(path).await
    }

    /// **Reload**: Discard in-memory state and re-read the default file.
    #[tool]
    async fn reload(&self) -> McpResult<String> {
        self.handle_reload().await
    }

    /// **Info**: Show the default file location, document title and unsaved-changes state.
    #[tool]
    async fn file_info(&self) -> McpResult<String> {
        self.handle_file_info().await
    }
}
