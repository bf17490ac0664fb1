// Error types: map parsing failures and startup failures

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Map parsing errors
#[derive(Error, Debug)]
pub enum MapError {
    #[error("Map contains no rows")]
    Empty,
    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Failed to allocate memory for map tiles: {0}")]
    AllocationFailure(#[from] TryReserveError),
}

/// Startup errors, all fatal for the session
#[derive(Error, Debug)]
pub enum SimError {
    #[error("No map file passed in")]
    MissingArgument,
    #[error("No file {} found. Please make sure the file exists", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to read map file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid map: {0}")]
    Map(#[from] MapError),
}

impl SimError {
    /// Process exit status for a failed startup. Every startup error is fatal
    /// and shares the same status.
    pub fn exit_code(&self) -> i32 {
        -1
    }
}
