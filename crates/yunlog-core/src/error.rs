use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the yunlog pipeline.
///
/// Malformed datapoints are not represented here: they are logged and
/// dropped where they occur, and processing continues. Anything that
/// does become a `YunlogError` aborts the whole request.
#[derive(Error, Debug)]
pub enum YunlogError {
    /// The log directory could not be listed.
    #[error("Failed to list log directory {path}: {source}")]
    DirList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A log file could not be opened.
    #[error("Failed to open log file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A log file could not be read after it was opened.
    #[error("Failed to read log file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The filename filter is not a valid regular expression.
    #[error("Invalid filename filter {pattern:?}: {source}")]
    InvalidFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the yunlog crates.
pub type Result<T> = std::result::Result<T, YunlogError>;
