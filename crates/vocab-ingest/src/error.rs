//! Error types for vocabulary table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, stamping or saving the vocabulary table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source table not found.
    #[error("vocabulary table not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to {operation} file {path}: {source}")]
    FileWrite {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Temp file could not be moved over the target.
    #[error("failed to replace {target_path} with {temp_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// Failed to parse or serialize CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Table has no rows, not even a header.
    #[error("vocabulary table is empty: {path}")]
    EmptySource { path: PathBuf },

    // === Schema Errors ===
    /// Required column not found in the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    // === Stamp Errors ===
    /// Row number does not address a data row.
    #[error("row {row} is outside the data rows of {path} (2..={last_row})")]
    RowOutOfRange {
        row: usize,
        last_row: usize,
        path: PathBuf,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
