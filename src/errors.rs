//! Typed error definitions for tidy_move.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TidyMoveError {
    #[error("{parameter} or directory name not provided for {operation}")]
    MissingParameter {
        operation: &'static str,
        parameter: &'static str,
    },

    #[error("Error trying to list the content of {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Error getting the current working directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("Progress interval must be greater than zero milliseconds")]
    InvalidTickInterval,

    #[error("{0} thread panicked")]
    WorkerPanicked(&'static str),
}

impl TidyMoveError {
    /// Stable numeric code, emitted as a structured log field.
    pub fn code(&self) -> u16 {
        match self {
            TidyMoveError::MissingParameter { .. } => 10,
            TidyMoveError::ListDir { .. } => 20,
            TidyMoveError::CurrentDir(_) => 21,
            TidyMoveError::InvalidTickInterval => 30,
            TidyMoveError::WorkerPanicked(_) => 40,
        }
    }

    /// Short machine-friendly kind, paired with `code()` in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TidyMoveError::MissingParameter { .. } => "missing_parameter",
            TidyMoveError::ListDir { .. } => "list_dir",
            TidyMoveError::CurrentDir(_) => "current_dir",
            TidyMoveError::InvalidTickInterval => "invalid_tick_interval",
            TidyMoveError::WorkerPanicked(_) => "worker_panicked",
        }
    }
}
