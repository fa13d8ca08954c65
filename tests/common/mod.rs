//! Common test utilities for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tasknotes_mcp::{DEFAULT_FILE_NAME, Storage, TaskNotesServerHandler, Workspace};
use tempfile::TempDir;

/// Create a storage bound to a data file inside a fresh temporary directory
pub fn get_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let storage = Storage::new(temp_dir.path().join(DEFAULT_FILE_NAME));
    (storage, temp_dir)
}

/// Create a workspace over temporary storage
pub fn get_test_workspace() -> (Workspace, TempDir) {
    let (storage, temp_dir) = get_test_storage();
    (Workspace::new(storage), temp_dir)
}

/// Create a test handler with temporary storage
pub fn get_test_handler() -> (TaskNotesServerHandler, TempDir) {
    let (storage, temp_dir) = get_test_storage();
    (TaskNotesServerHandler::new(storage), temp_dir)
}

/// Create a storage whose data file path is an occupied directory, so every write fails
pub fn get_unwritable_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let blocked = temp_dir.path().join(DEFAULT_FILE_NAME);
    fs::create_dir(&blocked).unwrap();
    fs::write(blocked.join("inner"), "x").unwrap();
    (Storage::new(blocked), temp_dir)
}

/// Write `content` to `name` inside `dir` and return its path
pub fn write_external_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Extract the task ID from an add_task reply
/// Reply format: "Task added with ID: <id>"
pub fn extract_id_from_response(response: &str) -> String {
    response
        .rsplit("ID: ")
        .next()
        .unwrap_or("")
        .trim()
        .to_string()
}
