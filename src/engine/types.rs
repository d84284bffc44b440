use std::fmt;
use std::path::{Path, PathBuf};

/// Handle to a file pending rename.
///
/// Identity is path equality. A successful rename swaps the handle for a new
/// one at the same list position; a `FileRef` itself is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    path: PathBuf,
}

impl FileRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final path component, lossily decoded.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// A handle to `name` in the same directory as this file.
    pub fn sibling(&self, name: &str) -> FileRef {
        let path = self
            .path
            .parent()
            .map(|p| p.join(name))
            .unwrap_or_else(|| PathBuf::from(name));
        FileRef::new(path)
    }
}

impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Per-file result of a rename batch, plus the terminal summary.
///
/// Outcomes are created by the engine, handed to the sink synchronously in
/// emission order, and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The file was renamed to the candidate name.
    Renamed { from: FileRef, to: FileRef },
    /// The candidate path was already occupied; the file was skipped.
    AlreadyExists { candidate: FileRef },
    /// The rename call failed; the file was skipped.
    Failed { file: FileRef, message: String },
    /// End of batch, with the number of files actually renamed.
    Complete { renamed: usize },
}

/// Receives batch outcomes as they are produced.
pub trait OutcomeSink {
    fn emit(&mut self, outcome: RenameOutcome);
}

impl<F: FnMut(RenameOutcome)> OutcomeSink for F {
    fn emit(&mut self, outcome: RenameOutcome) {
        self(outcome)
    }
}
