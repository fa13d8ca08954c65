//! Domain model: tasks, the ordered task list and the document pairing it with notes
//!
//! - `task`: a single checklist item
//! - `task_list`: ordered, most-recent-first collection with id lookups
//! - `document`: task list + notes text, the unit that is persisted
//! - `events`: notifications emitted by the workspace around file actions

mod document;
mod events;
mod task;
mod task_list;

pub use document::Document;
pub use events::{DocumentEvent, EventListeners};
pub use task::Task;
pub use task_list::TaskList;
