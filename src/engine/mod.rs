mod batch;
mod types;

pub use batch::rename_all;
pub use types::{FileRef, OutcomeSink, RenameOutcome};
