use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the movie dashboard.
///
/// Only structural failures live here. Field-level cleaning failures
/// (unparsable money, runtime or date cells) are absorbed as `None` values
/// inside the normalizer and never surface as errors.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader reported a structural error.
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required column is absent from the dataset header.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// The configured dataset path does not exist.
    #[error("Data path not found: {0}")]
    DataPathNotFound(PathBuf),

    /// No CSV files were found under the given directory.
    #[error("No CSV files found in {0}")]
    NoDataFiles(PathBuf),

    /// The dataset file exists but contains no usable rows.
    #[error("Dataset is empty: {0}")]
    EmptyDataset(PathBuf),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the dashboard crates.
pub type Result<T> = std::result::Result<T, DashboardError>;
