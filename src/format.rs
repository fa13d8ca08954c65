//! Composite file format
//!
//! A TaskNotes file holds the task list and the notes text in one UTF-8 file:
//!
//! ```text
//! [{"id":"…","title":"…","isCompleted":false,"createdAt":"…"}]
//! ###$$###
//! free-form notes
//! ```
//!
//! Splitting is purely textual. The separator is not escaped anywhere, so a notes
//! body may contain it; everything after the *first* occurrence belongs to the notes.

use crate::tasks::Task;

/// Literal that divides the task segment from the notes segment
pub const SEPARATOR: &str = "###$$###";

/// Returns true if `content` contains the separator at least once
pub fn has_separator(content: &str) -> bool {
    content.contains(SEPARATOR)
}

/// Assemble the file content from an already encoded task array and notes text
pub fn join(tasks_json: &str, notes: &str) -> String {
    format!("{}\n{}\n{}", tasks_json, SEPARATOR, notes)
}

/// Encode tasks as a compact JSON array
pub fn encode_tasks(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tasks)
}

/// Encode a full document (tasks + notes) into file content
pub fn encode(tasks: &[Task], notes: &str) -> Result<String, serde_json::Error> {
    Ok(join(&encode_tasks(tasks)?, notes))
}

/// The task segment: text before the first separator, trimmed.
///
/// A file without a separator is treated as all task segment.
pub fn tasks_segment(content: &str) -> &str {
    content
        .split_once(SEPARATOR)
        .map_or(content, |(head, _)| head)
        .trim()
}

/// The notes segment: everything after the first separator, trimmed.
///
/// Returns `None` when the content has no separator.
pub fn notes_segment(content: &str) -> Option<&str> {
    content.split_once(SEPARATOR).map(|(_, tail)| tail.trim())
}

/// Decode a task segment produced by [`tasks_segment`].
///
/// An empty segment is an empty list.
pub fn decode_tasks(segment: &str) -> Result<Vec<Task>, serde_json::Error> {
    if segment.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn sample_task(title: &str, completed: bool) -> Task {
        let mut task = Task::new(
            Uuid::new_v4(),
            title.to_string(),
            Utc.with_ymd_and_hms(2025, 3, 15, 9, 30, 0).unwrap(),
        );
        task.is_completed = completed;
        task
    }

    #[test]
    fn test_join_layout() {
        assert_eq!(join("[]", "hello"), "[]\n###$$###\nhello");
    }

    #[test]
    fn test_encode_then_split_recovers_both_halves() {
        let tasks = vec![sample_task("Task B", false), sample_task("Task A", true)];
        let content = encode(&tasks, "  some notes\nsecond line\n").unwrap();

        let decoded = decode_tasks(tasks_segment(&content)).unwrap();
        assert_eq!(decoded, tasks);
        assert_eq!(notes_segment(&content), Some("some notes\nsecond line"));
    }

    #[test]
    fn test_notes_keep_later_separators() {
        let content = "[]\n###$$###\nfoo\n###$$###\nbar";
        assert_eq!(notes_segment(content), Some("foo\n###$$###\nbar"));
        assert_eq!(tasks_segment(content), "[]");
    }

    #[test]
    fn test_no_separator() {
        assert!(!has_separator("hello world"));
        assert_eq!(notes_segment("hello world"), None);
        assert_eq!(tasks_segment("  [] \n"), "[]");
    }

    #[test]
    fn test_empty_segment_is_empty_list() {
        assert!(decode_tasks("").unwrap().is_empty());
        assert!(decode_tasks(tasks_segment("\n###$$###\nnotes")).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_segment_is_error() {
        assert!(decode_tasks("[{\"title\": ").is_err());
        assert!(decode_tasks("not json").is_err());
    }

    #[test]
    fn test_encoded_field_names() {
        let task = sample_task("Write report", false);
        let json = encode_tasks(std::slice::from_ref(&task)).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"isCompleted\":false"));
        assert!(json.contains("\"createdAt\":\"2025-03-15T09:30:00Z\""));
        assert!(json.contains(&format!("\"id\":\"{}\"", task.id)));
        assert!(!json.contains('\n'));
    }
}
