use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error};

use renumber::cli::Args;
use renumber::engine::FileRef;
use renumber::error::AppError;
use renumber::logging;
use renumber::output::display_session_log;
use renumber::reducer::{Intent, Reducer};

fn main() {
    let args = Args::parse();

    logging::init(args.verbose);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let files = collect_files(&args.files)?;

    let mut reducer = Reducer::new();
    reducer.set_observer(|notification| {
        debug!(?notification, "State changed");
    });

    reducer.apply(Intent::AddFiles(files))?;
    reducer.apply(Intent::PatternChanged(args.pattern.clone()))?;
    reducer.apply(Intent::StartNumberChanged(args.start))?;
    reducer.apply(Intent::ExecuteRename {
        pattern: args.pattern,
        start_number: args.start,
    })?;

    display_session_log(reducer.state(), &mut std::io::stdout())
        .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

    Ok(())
}

fn collect_files(paths: &[PathBuf]) -> Result<Vec<FileRef>, AppError> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        if !path.exists() {
            return Err(AppError::FileNotFound { path: path.clone() });
        }
        if !path.is_file() {
            return Err(AppError::NotAFile { path: path.clone() });
        }
        files.push(FileRef::new(path.clone()));
    }
    Ok(files)
}
