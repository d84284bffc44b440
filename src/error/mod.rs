mod codes;

pub use codes::ExitCode;

use crate::state::StateError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Not a regular file: {path}")]
    NotAFile { path: PathBuf },

    #[error(transparent)]
    State(#[from] StateError),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::FileNotFound { .. } => ExitCode::FileNotFound,
            AppError::NotAFile { .. } => ExitCode::FileNotFound,
            AppError::State(_) => ExitCode::StateError,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::FileNotFound { path } => {
                format!(
                    "The specified file does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotAFile { path } => {
                format!(
                    "The specified path is not a regular file:\n  {}\n\n\
                     Directories are not supported; pass individual files.",
                    path.display()
                )
            }

            AppError::State(e) => {
                format!(
                    "Session state error: {}\n\n\
                     This indicates a bug in the caller.",
                    e
                )
            }

            AppError::Other(message) => message.clone(),
        }
    }
}
