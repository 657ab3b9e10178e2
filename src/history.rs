use std::cell::RefCell;
use std::rc::Rc;
use tracing::trace;

/// Capability contract for an operation log.
///
/// A history is append-only: entries stay in insertion order and are never
/// evicted. Any type satisfying this trait is substitutable for any other,
/// test doubles included.
pub trait History {
    /// Appends `operation` to the end of the log.
    ///
    /// The content is not validated and the append never fails.
    fn add_entry(&mut self, operation: String);

    /// Returns the last `count` entries, oldest to newest.
    ///
    /// `count` is clamped to the log length: zero yields an empty vec, a
    /// count beyond the length yields the whole log.
    fn get_last_operations(&self, count: usize) -> Vec<String>;
}

/// Shared single-threaded handle through which a calculator and its caller
/// see one history.
///
/// The history itself is created and kept alive by the caller; the calculator
/// only ever holds a handle to it. `Rc` keeps the handle single-threaded.
pub type SharedHistory = Rc<RefCell<dyn History>>;

/// In-memory history backed by an unbounded, append-only list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    /// Logged entries, oldest first.
    entries: Vec<String>,
}

impl InMemoryHistory {
    /// Creates a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of logged entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a slice of all entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl History for InMemoryHistory {
    fn add_entry(&mut self, operation: String) {
        trace!("history entry added: {}", operation);
        self.entries.push(operation);
    }

    fn get_last_operations(&self, count: usize) -> Vec<String> {
        let start = self.entries.len().saturating_sub(count);
        self.entries[start..].to_vec()
    }
}
