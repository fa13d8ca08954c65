use std::fmt;
use std::path::PathBuf;

/// File-level actions a workspace reports to its listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEvent {
    /// An external file was imported into the default location
    FileOpened(PathBuf),
    /// The document was reset to an empty one
    NewFile,
    /// The document was written to its represented file
    Saved(PathBuf),
    /// The document was written to a newly chosen file
    SavedAs(PathBuf),
}

type Listener = Box<dyn Fn(&DocumentEvent) + Send + 'static>;

/// Listeners registered on one workspace
#[derive(Default)]
pub struct EventListeners {
    listeners: Vec<Listener>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&DocumentEvent) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Deliver `event` to every listener in registration order
    pub fn emit(&self, event: &DocumentEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for EventListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventListeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}
