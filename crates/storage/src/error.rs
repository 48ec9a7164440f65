//! Storage-layer errors. Unlike the engine's internal tolerant handling
//! (non-fatal, journaled), these are ordinary process-boundary errors:
//! CSV ingestion happens once at startup, and a malformed input file
//! should fail loudly rather than silently degrade.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{path}: {source}")]
    Io { path: String, #[source] source: std::io::Error },

    #[error("{path}:{line}: missing column {column:?}")]
    MissingColumn { path: String, line: usize, column: &'static str },

    #[error("{path}:{line}: malformed value in column {column:?}: {reason}")]
    MalformedRow { path: String, line: usize, column: &'static str, reason: String },

    #[error("{path}:{line}: malformed timestamp {value:?}")]
    MalformedTimestamp { path: String, line: usize, value: String },

    #[error("{path}: empty file, expected a header row")]
    EmptyFile { path: String },
}
