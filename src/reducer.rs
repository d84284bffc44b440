use tracing::debug;

use crate::engine::{rename_all, FileRef, RenameOutcome};
use crate::state::{SessionState, StateError};

/// User intents accepted by the reducer.
///
/// Immutable values; the reducer never mutates an intent. Any mechanism that
/// can construct and submit these satisfies the boundary contract, whether
/// it is a CLI, a file picker, or a test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Append files to the pending list, in the given order.
    AddFiles(Vec<FileRef>),
    /// The pattern text changed.
    PatternChanged(String),
    /// The counter start value changed.
    StartNumberChanged(i64),
    /// Run one rename batch over the current file list.
    ExecuteRename { pattern: String, start_number: i64 },
}

/// Coarse change signal delivered to the observer.
///
/// Carries no payload; the observer re-pulls whatever snapshot it needs from
/// the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    ListReload,
    LogMessage,
}

type Observer = Box<dyn FnMut(Notification)>;

/// Sole writer of [`SessionState`].
///
/// Applies intents one at a time and notifies the registered observer of the
/// result category. Single-writer discipline: there is no internal locking,
/// and callers must not overlap `apply` calls.
pub struct Reducer {
    state: SessionState,
    observer: Option<Observer>,
}

impl Default for Reducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer {
    pub fn new() -> Self {
        Self {
            state: SessionState::new(),
            observer: None,
        }
    }

    /// Register the single observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl FnMut(Notification) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn apply(&mut self, intent: Intent) -> Result<(), StateError> {
        match intent {
            Intent::PatternChanged(pattern) => {
                if pattern != self.state.pattern() {
                    self.state.set_pattern(pattern);
                    // The pattern field is re-read on demand; no notification.
                }
                Ok(())
            }
            Intent::StartNumberChanged(start_number) => {
                if start_number != self.state.start_number() {
                    self.state.set_start_number(start_number);
                }
                Ok(())
            }
            Intent::AddFiles(files) => {
                debug!(count = files.len(), "Adding files");
                for file in files {
                    let line = format!("added: {}", file);
                    self.state.add_file(file);
                    self.state.add_log(line);
                }
                // Exactly two notifications per AddFiles intent, even when
                // the list is empty.
                notify(&mut self.observer, Notification::ListReload);
                notify(&mut self.observer, Notification::LogMessage);
                Ok(())
            }
            Intent::ExecuteRename {
                pattern,
                start_number,
            } => self.execute_rename(&pattern, start_number),
        }
    }

    fn execute_rename(&mut self, pattern: &str, start_number: i64) -> Result<(), StateError> {
        let snapshot = self.state.files();
        debug!(
            count = snapshot.len(),
            pattern = %pattern,
            start_number,
            "Executing rename batch"
        );

        let state = &mut self.state;
        let observer = &mut self.observer;
        let mut first_error: Option<StateError> = None;

        let mut sink = |outcome: RenameOutcome| {
            if first_error.is_some() {
                return;
            }
            match outcome {
                RenameOutcome::Renamed { from, to } => {
                    if let Some(index) = snapshot.iter().position(|f| *f == from) {
                        if let Err(e) = state.set_file_at(index, to.clone()) {
                            first_error = Some(e);
                            return;
                        }
                    }
                    state.add_log(format!("renamed: {} -> {}", from, to));
                    notify(observer, Notification::ListReload);
                }
                RenameOutcome::AlreadyExists { candidate } => {
                    state.add_log(format!("skipped: {} already exists", candidate));
                    notify(observer, Notification::LogMessage);
                }
                RenameOutcome::Failed { message, .. } => {
                    state.add_log(message);
                    notify(observer, Notification::LogMessage);
                }
                RenameOutcome::Complete { renamed } => {
                    state.add_log(format!("{} file(s) renamed", renamed));
                    notify(observer, Notification::LogMessage);
                }
            }
        };

        rename_all(&snapshot, pattern, start_number, &mut sink);

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn notify(observer: &mut Option<Observer>, notification: Notification) {
    if let Some(observer) = observer {
        observer(notification);
    }
}
