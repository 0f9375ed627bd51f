//! Error types for raw dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the raw dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read or parse a TSV record.
    #[error("failed to parse TSV {path}: {source}")]
    TsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
