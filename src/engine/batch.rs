use std::fs;
use tracing::{debug, info, warn};

use crate::pattern::apply_pattern;

use super::types::{FileRef, OutcomeSink, RenameOutcome};

/// Rename every file in `files` using `pattern`, numbering from
/// `start_number`.
///
/// Files are processed in input order; that order determines which number
/// each file receives and the order of emitted outcomes. A collision or a
/// failed rename skips the file without consuming a number, since no file
/// was produced at that name. One `Complete` outcome follows the last file.
///
/// Existence check and rename are two separate syscalls; a concurrent writer
/// can take the candidate path in between, in which case the rename fails
/// and is reported as `Failed`. That race is accepted, not mitigated.
pub fn rename_all(files: &[FileRef], pattern: &str, start_number: i64, sink: &mut dyn OutcomeSink) {
    let mut next_number = start_number;
    let mut renamed = 0;

    debug!(
        count = files.len(),
        pattern = %pattern,
        start = start_number,
        "Starting rename batch"
    );

    for file in files {
        let candidate_name = apply_pattern(pattern, next_number);
        let candidate = file.sibling(&candidate_name);

        if candidate.path().exists() {
            warn!(candidate = %candidate, "Candidate already exists, skipping");
            sink.emit(RenameOutcome::AlreadyExists { candidate });
            continue;
        }

        match fs::rename(file.path(), candidate.path()) {
            Ok(()) => {
                renamed += 1;
                next_number += 1;
                info!(from = %file, to = %candidate, "Renamed");
                sink.emit(RenameOutcome::Renamed {
                    from: file.clone(),
                    to: candidate,
                });
            }
            Err(e) => {
                warn!(file = %file, error = %e, "Rename failed");
                sink.emit(RenameOutcome::Failed {
                    file: file.clone(),
                    message: format!("failed to rename {} -> {}: {}", file, candidate, e),
                });
            }
        }
    }

    debug!(renamed, "Batch complete");
    sink.emit(RenameOutcome::Complete { renamed });
}
