//! The resident document and the operations that change it
//!
//! A `Workspace` owns the [`Storage`] it writes through to, the single in-memory
//! [`Document`], and the bookkeeping a document window would show: the represented
//! file (last opened or saved-as), the edited flag, and event listeners.
//!
//! Every mutation persists the whole document with one write, so the task half and
//! the notes half can never overwrite each other with stale data.

use chrono::Utc;
use log::{debug, info};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::storage::{StoreError, Storage};
use crate::tasks::{Document, DocumentEvent, EventListeners, Task, TaskList};

/// Title shown for a document that has no represented file
pub const UNTITLED: &str = "Untitled";

#[derive(Debug)]
pub struct Workspace {
    storage: Storage,
    document: Document,
    represented_path: Option<PathBuf>,
    edited: bool,
    load_warning: Option<String>,
    listeners: EventListeners,
}

impl Workspace {
    /// Open the workspace, loading the document currently stored in `storage`
    pub fn new(storage: Storage) -> Self {
        let loaded = storage.load_checked();
        debug!(
            "Loaded {} task(s) from {}",
            loaded.document.tasks.len(),
            storage.file_path().display()
        );
        Self {
            storage,
            document: loaded.document,
            represented_path: None,
            edited: false,
            load_warning: loaded.decode_error.as_ref().map(ToString::to_string),
            listeners: EventListeners::new(),
        }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tasks(&self) -> &TaskList {
        &self.document.tasks
    }

    pub fn notes(&self) -> &str {
        &self.document.notes
    }

    /// Path all write-through goes to
    pub fn file_location(&self) -> &Path {
        self.storage.file_path()
    }

    /// External file last opened or saved-as, if any
    pub fn represented_path(&self) -> Option<&Path> {
        self.represented_path.as_deref()
    }

    /// File name of the represented file, or "Untitled"
    pub fn title(&self) -> String {
        self.represented_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    /// True if the document changed since it was last opened, created, or saved
    pub fn is_edited(&self) -> bool {
        self.edited
    }

    /// Why the task list was loaded as empty, if its saved form could not be decoded.
    ///
    /// Cleared by the next successful write, which replaces the undecodable tasks.
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    /// Register a listener for file-level events on this workspace
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&DocumentEvent) + Send + 'static,
    {
        self.listeners.subscribe(listener);
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        self.edited = true;
        self.storage.save(&self.document)?;
        self.load_warning = None;
        Ok(())
    }

    /// Prepend a new task; a blank title is ignored.
    ///
    /// Returns the created task, or `None` if the title was blank.
    pub fn add(&mut self, title: &str) -> Result<Option<Task>, StoreError> {
        if title.trim().is_empty() {
            return Ok(None);
        }

        let task = Task::new(Uuid::new_v4(), title.to_string(), Utc::now());
        self.document.tasks.prepend(task.clone());
        self.persist()?;
        debug!("Added task {}", task.id);
        Ok(Some(task))
    }

    /// Flip a task's checked state.
    ///
    /// Returns the new state, or `None` (and writes nothing) if no task has `id`.
    pub fn toggle(&mut self, id: &Uuid) -> Result<Option<bool>, StoreError> {
        let Some(completed) = self.document.tasks.toggle(id) else {
            return Ok(None);
        };
        self.persist()?;
        Ok(Some(completed))
    }

    /// Remove the task with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: &Uuid) -> Result<bool, StoreError> {
        if self.document.tasks.remove(id) == 0 {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Remove every task and save
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.document.tasks.clear();
        self.persist()
    }

    /// Replace the notes text and save.
    ///
    /// Surrounding whitespace is trimmed, as it is when the file is read back.
    pub fn set_notes(&mut self, notes: &str) -> Result<(), StoreError> {
        self.document.notes = notes.trim().to_string();
        self.persist()
    }

    /// Replace the in-memory document with what is on disk. Nothing is written.
    ///
    /// A task segment that fails to decode leaves the task list empty and is
    /// returned as `Some(StoreError::Decode)` so the caller can warn about it.
    pub fn refresh(&mut self) -> Option<StoreError> {
        let loaded = self.storage.load_checked();
        self.document = loaded.document;
        self.edited = false;
        self.load_warning = loaded.decode_error.as_ref().map(ToString::to_string);
        loaded.decode_error
    }

    /// Start an empty document: no tasks, no notes, no represented file
    pub fn new_document(&mut self) -> Result<(), StoreError> {
        self.document = Document::default();
        self.represented_path = None;
        self.storage.save(&self.document)?;
        self.edited = false;
        self.load_warning = None;
        info!("Started a new document");
        self.listeners.emit(&DocumentEvent::NewFile);
        Ok(())
    }

    /// Import `path` into the default location and load it.
    ///
    /// On success returns any task decode problem found while loading the imported
    /// content. A file without the separator is rejected and nothing changes.
    pub fn open_file(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<Option<StoreError>, StoreError> {
        let path = path.as_ref();
        self.storage.import_file(path)?;
        let decode_error = self.refresh();
        self.represented_path = Some(path.to_path_buf());
        info!("Opened {}", path.display());
        self.listeners.emit(&DocumentEvent::FileOpened(path.to_path_buf()));
        Ok(decode_error)
    }

    /// Write the in-memory document to its represented file
    pub fn save(&mut self) -> Result<PathBuf, StoreError> {
        let path = self
            .represented_path
            .clone()
            .ok_or(StoreError::NoRepresentedFile)?;
        self.storage.save_to(&self.document, &path)?;
        self.edited = false;
        info!("Saved to {}", path.display());
        self.listeners.emit(&DocumentEvent::Saved(path.clone()));
        Ok(path)
    }

    /// Write the in-memory document to `path` and make it the represented file
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref().to_path_buf();
        self.storage.save_to(&self.document, &path)?;
        self.represented_path = Some(path.clone());
        self.edited = false;
        info!("Saved as {}", path.display());
        self.listeners.emit(&DocumentEvent::SavedAs(path));
        Ok(())
    }
}
