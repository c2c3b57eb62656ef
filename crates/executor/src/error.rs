use thiserror::Error;

use common::error::Error as RatePathError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load configuration: {0}")]
    ConfigLoadError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Quote snapshot reports failure: {0}")]
    SnapshotRejected(String),

    #[error("Quote key {0} does not split into two currency codes.")]
    MalformedQuoteKey(String),

    #[error("Data source '{0}' requires an input path.")]
    MissingInputPath(&'static str),

    #[error("Graph processing error: {0}")]
    GraphError(#[from] RatePathError),
}
