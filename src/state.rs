use thiserror::Error;

use crate::engine::FileRef;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("file index {index} out of range (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// State for one rename session: the pending file list, the log history, and
/// the current pattern and start number.
///
/// A guarded container, not a decision maker: mutators bounds-check and
/// nothing else. The log is append-only within a session, and the file list
/// order is stable apart from position-wise replacement during a rename.
/// Snapshot accessors hand out independent copies, so callers can never
/// reach the internal lists.
#[derive(Debug)]
pub struct SessionState {
    files: Vec<FileRef>,
    log: Vec<String>,
    pattern: String,
    start_number: i64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            log: Vec::new(),
            pattern: String::new(),
            start_number: 1,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, file: FileRef) {
        self.files.push(file);
    }

    /// Replace the file at `index`, keeping its position in the list.
    pub fn set_file_at(&mut self, index: usize, file: FileRef) -> Result<(), StateError> {
        let len = self.files.len();
        match self.files.get_mut(index) {
            Some(slot) => {
                *slot = file;
                Ok(())
            }
            None => Err(StateError::IndexOutOfRange { index, len }),
        }
    }

    pub fn add_log(&mut self, message: impl Into<String>) {
        self.log.push(message.into());
    }

    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    pub fn set_start_number(&mut self, start_number: i64) {
        self.start_number = start_number;
    }

    /// Independent copy of the pending file list.
    pub fn files(&self) -> Vec<FileRef> {
        self.files.clone()
    }

    /// Independent copy of the session log.
    pub fn log_messages(&self) -> Vec<String> {
        self.log.clone()
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Current counter start value. No range is enforced; negative values
    /// are defined behavior.
    pub fn start_number(&self) -> i64 {
        self.start_number
    }
}
