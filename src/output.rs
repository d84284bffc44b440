use colored::Colorize;
use std::io::{self, Write};

use crate::state::SessionState;

/// Render the session log for terminal display.
///
/// Skips and failures are highlighted; the trailing summary line is green.
/// Everything else is printed as-is.
pub fn display_session_log(state: &SessionState, writer: &mut impl Write) -> io::Result<()> {
    for line in state.log_messages() {
        let rendered = if line.starts_with("skipped: ") || line.starts_with("failed to rename") {
            line.yellow().to_string()
        } else if line.ends_with("file(s) renamed") {
            line.green().to_string()
        } else {
            line
        };
        writeln!(writer, "{}", rendered)?;
    }
    Ok(())
}
