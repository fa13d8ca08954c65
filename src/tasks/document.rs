use super::task_list::TaskList;

/// The persisted unit: the task list together with the notes text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub tasks: TaskList,
    pub notes: String,
}

impl Document {
    pub fn new(tasks: TaskList, notes: String) -> Self {
        Self { tasks, notes }
    }

    /// True when there are no tasks and the notes are blank
    pub fn is_blank(&self) -> bool {
        self.tasks.is_empty() && self.notes.trim().is_empty()
    }
}
