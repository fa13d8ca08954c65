use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::task::Task;

/// Ordered task collection, most recently added first
///
/// Vec keeps the on-disk order stable and matches how the list is displayed.
/// Lookups are linear; a personal daily checklist stays small.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a task at the front of the list
    pub fn prepend(&mut self, task: Task) {
        debug_assert!(
            self.find(&task.id).is_none(),
            "task id {} already present",
            task.id
        );
        self.tasks.insert(0, task);
    }

    /// Find a task by id
    pub fn find(&self, id: &Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == *id)
    }

    /// Toggle the task with `id`, returning its new checked state, or `None` if absent
    pub fn toggle(&mut self, id: &Uuid) -> Option<bool> {
        self.tasks.iter_mut().find(|t| t.id == *id).map(Task::toggle)
    }

    /// Remove every task with `id` and return how many were removed
    pub fn remove(&mut self, id: &Uuid) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != *id);
        before - self.tasks.len()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of checked tasks
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl From<TaskList> for Vec<Task> {
    fn from(list: TaskList) -> Self {
        list.tasks
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
