use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "renumber")]
#[command(author, version, about, long_about = None)]
#[command(about = "Batch-rename files with a numbered filename pattern")]
pub struct Args {
    /// Filename pattern; the first [N] is replaced with the counter
    pub pattern: String,

    /// Files to rename, processed in the given order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Counter start value (may be negative)
    #[arg(
        short = 'n',
        long = "start",
        default_value = "1",
        allow_negative_numbers = true
    )]
    pub start: i64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
