//! File-backed persistence for the task list and notes
//!
//! All implicit reads and writes go to one file (the default location, or an injected
//! path in tests). Import copies an external file into that location; export writes a
//! copy of it elsewhere. Every write replaces the target atomically.

use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::format;
use crate::tasks::{Document, Task, TaskList};

/// Name of the data file inside the per-user documents directory
pub const DEFAULT_FILE_NAME: &str = "TaskNotes.txt";

/// Failures that reach the caller of a store or workspace operation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid file format: '{}' does not contain the separator '{}'", .path.display(), format::SEPARATOR)]
    FormatInvalid { path: PathBuf },
    #[error("Error reading file '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Error saving file '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("Failed to encode tasks: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Failed to decode tasks: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("No file is associated with this document; save it under a new name first")]
    NoRepresentedFile,
}

/// A document read from disk along with any task decode problem that was absorbed
#[derive(Debug)]
pub struct LoadedDocument {
    pub document: Document,
    /// Set when the task segment was present but could not be decoded
    pub decode_error: Option<StoreError>,
}

/// The fixed per-user data file: documents directory, else home, else the working directory
pub fn default_file_location() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_FILE_NAME)
}

/// Persistence store bound to a single data file
#[derive(Debug, Clone)]
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    /// Create a store that reads and writes `file_path`
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Create a store bound to [`default_file_location`]
    pub fn at_default_location() -> Self {
        Self::new(default_file_location())
    }

    /// Path of the data file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Read the data file, treating any read failure as "no file yet"
    fn read_content(&self) -> Option<String> {
        match fs::read_to_string(&self.file_path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(
                    "Could not read {}, treating it as missing: {}",
                    self.file_path.display(),
                    e
                );
                None
            }
        }
    }

    /// Load the task list; a missing file or undecodable task segment yields an empty list
    pub fn load_tasks(&self) -> Vec<Task> {
        let Some(content) = self.read_content() else {
            return Vec::new();
        };
        match format::decode_tasks(format::tasks_segment(&content)) {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!("Failed to decode tasks in {}: {}", self.file_path.display(), e);
                Vec::new()
            }
        }
    }

    /// Load the notes text; a missing file or missing separator yields an empty string
    pub fn load_notes(&self) -> String {
        self.read_content()
            .as_deref()
            .and_then(format::notes_segment)
            .unwrap_or_default()
            .to_string()
    }

    /// Load tasks and notes from a single read of the data file
    pub fn load(&self) -> Document {
        self.load_checked().document
    }

    /// Like [`Storage::load`], but reports a task decode failure instead of only logging it
    pub fn load_checked(&self) -> LoadedDocument {
        let Some(content) = self.read_content() else {
            return LoadedDocument {
                document: Document::default(),
                decode_error: None,
            };
        };

        let notes = format::notes_segment(&content).unwrap_or_default().to_string();
        let (tasks, decode_error) = match format::decode_tasks(format::tasks_segment(&content)) {
            Ok(tasks) => (tasks, None),
            Err(e) => {
                warn!("Failed to decode tasks in {}: {}", self.file_path.display(), e);
                (Vec::new(), Some(StoreError::Decode(e)))
            }
        };

        LoadedDocument {
            document: Document::new(TaskList::from(tasks), notes),
            decode_error,
        }
    }

    /// Persist the whole document with one write
    pub fn save(&self, document: &Document) -> Result<(), StoreError> {
        self.save_to(document, &self.file_path)
    }

    /// Write `document` to an arbitrary `path`; the data file is not touched
    pub fn save_to(&self, document: &Document, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let content = format::encode(document.tasks.as_slice(), &document.notes)
            .map_err(StoreError::Encode)?;
        write_atomic(path.as_ref(), &content)
    }

    /// Persist `tasks`, keeping whatever notes are currently on disk
    pub fn save_tasks(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let notes = self.load_notes();
        let content = format::encode(tasks, &notes).map_err(StoreError::Encode)?;
        write_atomic(&self.file_path, &content)
    }

    /// Persist `notes`, keeping whatever tasks are currently on disk
    pub fn save_notes(&self, notes: &str) -> Result<(), StoreError> {
        let tasks = self.load_tasks();
        let content = format::encode(&tasks, notes).map_err(StoreError::Encode)?;
        write_atomic(&self.file_path, &content)
    }

    /// Copy an external file verbatim into the data file.
    ///
    /// The file must contain the separator; otherwise nothing is written. The task
    /// segment is not decoded here.
    pub fn import_file(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if !format::has_separator(&content) {
            return Err(StoreError::FormatInvalid {
                path: path.to_path_buf(),
            });
        }

        write_atomic(&self.file_path, &content)?;
        debug!(
            "Imported {} into {}",
            path.display(),
            self.file_path.display()
        );
        Ok(())
    }

    /// Write the current contents of the data file to `path`; the data file stays active
    pub fn export_to(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let tasks = self.load_tasks();
        let notes = self.load_notes();
        let content = format::encode(&tasks, &notes).map_err(StoreError::Encode)?;
        write_atomic(path, &content)?;
        debug!("Exported {} to {}", self.file_path.display(), path.display());
        Ok(())
    }
}

/// Write `content` to a hidden sibling file, then rename it over `path`
fn write_atomic(path: &Path, content: &str) -> Result<(), StoreError> {
    let write_err = |source: io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let file_name = path.file_name().ok_or_else(|| {
        write_err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "path has no file name",
        ))
    })?;
    let tmp_path = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    if let Err(e) = fs::write(&tmp_path, content) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_err(e));
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_err(e));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn storage_in(dir: &TempDir) -> Storage {
        Storage::new(dir.path().join(DEFAULT_FILE_NAME))
    }

    fn task(title: &str) -> Task {
        Task::new(Uuid::new_v4(), title.to_string(), Utc::now())
    }

    #[test]
    fn test_missing_file_yields_empty_defaults() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        assert!(storage.load_tasks().is_empty());
        assert_eq!(storage.load_notes(), "");
        assert_eq!(storage.load(), Document::default());
        assert!(storage.load_checked().decode_error.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        let tasks = vec![task("B"), task("A")];
        let document = Document::new(TaskList::from(tasks.clone()), "\n my notes \n".to_string());

        storage.save(&document).unwrap();

        assert_eq!(storage.load_tasks(), tasks);
        assert_eq!(storage.load_notes(), "my notes");
        // Idempotent without intervening writes
        assert_eq!(storage.load_tasks(), storage.load_tasks());
    }

    #[test]
    fn test_save_tasks_keeps_notes_on_disk() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        storage.save_notes("keep me").unwrap();

        let tasks = vec![task("A")];
        storage.save_tasks(&tasks).unwrap();

        assert_eq!(storage.load_tasks(), tasks);
        assert_eq!(storage.load_notes(), "keep me");
    }

    #[test]
    fn test_save_notes_keeps_tasks_on_disk() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        let tasks = vec![task("A"), task("B")];
        storage.save_tasks(&tasks).unwrap();

        storage.save_notes("new notes").unwrap();

        assert_eq!(storage.load_tasks(), tasks);
        assert_eq!(storage.load_notes(), "new notes");
    }

    #[test]
    fn test_exact_file_content() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        storage.save(&Document::new(TaskList::new(), "hello".to_string())).unwrap();

        let content = fs::read_to_string(storage.file_path()).unwrap();
        assert_eq!(content, "[]\n###$$###\nhello");
    }

    #[test]
    fn test_multiple_separators_stay_in_notes() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        fs::write(storage.file_path(), "[]\n###$$###\nfoo\n###$$###\nbar").unwrap();

        assert!(storage.load_tasks().is_empty());
        assert_eq!(storage.load_notes(), "foo\n###$$###\nbar");
    }

    #[test]
    fn test_no_separator_means_no_notes() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        fs::write(storage.file_path(), "[]").unwrap();

        assert_eq!(storage.load_notes(), "");
        assert!(storage.load_tasks().is_empty());
    }

    #[test]
    fn test_malformed_tasks_degrade_to_empty() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        fs::write(storage.file_path(), "{broken\n###$$###\nstill here").unwrap();

        assert!(storage.load_tasks().is_empty());
        assert_eq!(storage.load_notes(), "still here");

        let loaded = storage.load_checked();
        assert!(loaded.document.tasks.is_empty());
        assert_eq!(loaded.document.notes, "still here");
        assert!(matches!(loaded.decode_error, Some(StoreError::Decode(_))));
    }

    #[test]
    fn test_import_rejects_missing_separator() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        storage.save(&Document::new(TaskList::from(vec![task("A")]), "n".to_string())).unwrap();
        let before = fs::read_to_string(storage.file_path()).unwrap();

        let external = dir.path().join("plain.txt");
        fs::write(&external, "hello world").unwrap();

        let err = storage.import_file(&external).unwrap_err();
        assert!(matches!(err, StoreError::FormatInvalid { .. }));
        assert_eq!(fs::read_to_string(storage.file_path()).unwrap(), before);
    }

    #[test]
    fn test_import_copies_verbatim() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        let external = dir.path().join("other.txt");
        let raw = "  [] \n###$$###\n  imported notes\n";
        fs::write(&external, raw).unwrap();

        storage.import_file(&external).unwrap();

        assert_eq!(fs::read_to_string(storage.file_path()).unwrap(), raw);
        assert_eq!(storage.load_notes(), "imported notes");
    }

    #[test]
    fn test_import_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        let err = storage.import_file(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
        assert!(err.to_string().starts_with("Error reading file"));
        assert!(!storage.file_path().exists());
    }

    #[test]
    fn test_export_copies_and_keeps_default_file() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        let tasks = vec![task("A")];
        storage.save(&Document::new(TaskList::from(tasks.clone()), "notes".to_string())).unwrap();

        let target = dir.path().join("export").join("copy.txt");
        storage.export_to(&target).unwrap();

        let copy = Storage::new(&target);
        assert_eq!(copy.load_tasks(), tasks);
        assert_eq!(copy.load_notes(), "notes");
        assert!(storage.file_path().exists());
    }

    #[test]
    fn test_save_to_writes_given_document_only() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        storage.save_notes("on disk").unwrap();

        let in_memory = Document::new(TaskList::from(vec![task("A")]), "in memory".to_string());
        let target = dir.path().join("copy.txt");
        storage.save_to(&in_memory, &target).unwrap();

        let copy = Storage::new(&target);
        assert_eq!(copy.load(), in_memory);
        assert_eq!(storage.load_notes(), "on disk");
        assert!(storage.load_tasks().is_empty());
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        storage.save(&Document::default()).unwrap();
        storage.save_notes("again").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![DEFAULT_FILE_NAME.to_string()]);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes the rename fail
        let blocked = dir.path().join("blocked.txt");
        fs::create_dir(&blocked).unwrap();
        fs::write(blocked.join("inner"), "x").unwrap();
        let storage = Storage::new(&blocked);

        let err = storage.save(&Document::default()).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert!(err.to_string().starts_with("Error saving file"));
    }

    #[test]
    fn test_default_file_location() {
        let path = default_file_location();
        assert_eq!(path.file_name().unwrap(), DEFAULT_FILE_NAME);
        assert_eq!(Storage::at_default_location().file_path(), path.as_path());
    }
}
