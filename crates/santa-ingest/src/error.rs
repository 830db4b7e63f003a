//! Error types for participant ingestion.

use std::path::PathBuf;

use santa_model::SantaError;
use thiserror::Error;

/// Errors that can occur while loading participants.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or parse the CSV input.
    #[error("failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV input has no non-blank rows.
    #[error("CSV input is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Table has no column to take participant names from.
    #[error("participant table has no columns")]
    NoColumns,

    /// Rows could not be turned into a participant table.
    #[error(transparent)]
    Participants(#[from] SantaError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
