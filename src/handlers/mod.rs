//! MCP tool handlers for the TaskNotes server
//!
//! Each tool in `lib.rs` delegates to a `handle_*` method defined here:
//! - `tasks`: add, toggle, delete, list and clear tasks
//! - `notes`: read and replace the notes text
//! - `files`: new document, open, save, save as, reload and file info

pub mod files;
pub mod notes;
pub mod tasks;
