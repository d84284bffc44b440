pub mod cli;
pub mod engine;
pub mod error;
pub mod logging;
pub mod output;
pub mod pattern;
pub mod reducer;
pub mod state;

pub use engine::{rename_all, FileRef, OutcomeSink, RenameOutcome};
pub use error::{AppError, ExitCode};
pub use pattern::{apply_pattern, NUMBER_TOKEN};
pub use reducer::{Intent, Notification, Reducer};
pub use state::{SessionState, StateError};
