//! Error types for sblog
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using LogError
pub type Result<T> = std::result::Result<T, LogError>;

/// Unified error type for sblog operations
#[derive(Debug, Error)]
pub enum LogError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Construction Errors
    // -------------------------------------------------------------------------
    #[error("Could not look up log directory {path}: {source}")]
    DirectoryLookup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("A dir was expected: {0}")]
    NotADirectory(PathBuf),

    // -------------------------------------------------------------------------
    // Rotation Errors
    // -------------------------------------------------------------------------
    #[error("Failed to create log file {path}: {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to close log file {path}: {source}")]
    FileClose {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The write itself landed (`written` bytes) but the rotation it
    /// triggered did not.
    #[error("Rotation after writing {written} bytes failed: {source}")]
    Rotation {
        written: usize,
        #[source]
        source: Box<LogError>,
    },

    /// Only the first `written` bytes reached the file before it failed.
    #[error("Write failed after {written} bytes: {source}")]
    PartialWrite {
        written: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Log writer is closed")]
    WriterClosed,

    /// A failed rotation left no file open; a successful `rotate` recovers.
    #[error("No log file is open")]
    NoOpenFile,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
