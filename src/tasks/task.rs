use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::migration;

/// A single checklist item
///
/// Serialized with camelCase keys (`id`, `title`, `isCompleted`, `createdAt`) so that
/// files remain readable by the earlier desktop tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, fixed at creation
    pub id: Uuid,
    /// Display text (never empty or whitespace-only when created through the workspace)
    pub title: String,
    /// Checked state; absent in older files, in which case it is false
    #[serde(default)]
    pub is_completed: bool,
    /// Creation time, fixed at creation
    #[serde(deserialize_with = "migration::deserialize_created_at")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create an unchecked task.
    ///
    /// The caller supplies the id and creation time; see `Workspace::add`.
    pub fn new(id: Uuid, title: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            is_completed: false,
            created_at,
        }
    }

    /// Flip the checked state and return the new value
    pub fn toggle(&mut self) -> bool {
        self.is_completed = !self.is_completed;
        self.is_completed
    }
}
