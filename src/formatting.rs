//! Formatting helper functions for the TaskNotes MCP server
//!
//! This module renders tasks and document state as plain text replies.

use std::path::Path;

use crate::tasks::{Task, TaskList};

/// Render one task as a checklist line
///
/// # Example output
/// `- [x] Buy milk (id: 67e55044-10b1-426f-9247-bb680e5fe0c8)`
pub fn format_task(task: &Task) -> String {
    format!(
        "- [{}] {} (id: {})",
        if task.is_completed { "x" } else { " " },
        task.title,
        task.id
    )
}

/// Render the whole list, newest first, with a completion summary
pub fn format_tasks(tasks: &TaskList) -> String {
    if tasks.is_empty() {
        return "No tasks yet".to_string();
    }

    let mut result = format!(
        "Found {} task(s), {} completed:\n\n",
        tasks.len(),
        tasks.completed_count()
    );
    for task in tasks {
        result.push_str(&format_task(task));
        result.push('\n');
    }
    result
}

/// Appended to replies while the loaded task list could not be decoded
pub fn format_load_warning(load_warning: Option<&str>) -> String {
    match load_warning {
        Some(reason) => format!(
            "\nWarning: the task list could not be read and is shown as empty ({}). \
             Changing tasks now will overwrite it.",
            reason
        ),
        None => String::new(),
    }
}

/// Render the state a document window would show in its title bar
pub fn format_file_info(
    file_location: &Path,
    title: &str,
    edited: bool,
    tasks: &TaskList,
    load_warning: Option<&str>,
) -> String {
    format!(
        "Default file: {}\nDocument: {}{}\nTasks: {} ({} completed){}",
        file_location.display(),
        title,
        if edited { " (edited)" } else { "" },
        tasks.len(),
        tasks.completed_count(),
        format_load_warning(load_warning)
    )
}
