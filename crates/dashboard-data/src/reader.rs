//! CSV discovery and loading for the movie dashboard.
//!
//! Finds the movies CSV under a configured path and reads its rows into
//! [`RawRecord`]s for the normalization pass. Row-level problems are skipped
//! and logged; only structural problems (missing file, missing column, empty
//! table) are surfaced as errors.

use std::path::{Path, PathBuf};

use dashboard_core::error::{DashboardError, Result};
use serde::Deserialize;
use tracing::{debug, warn};

/// Column headers the dataset must carry, exactly as they appear in the
/// source file.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Title",
    "Color",
    "Budget",
    "Gross US & Canada",
    "Opening weekend Earnings",
    "Gross worldwide",
    "Runtime",
    "Opening weekend Release Date",
];

/// One unprocessed CSV row. Every field except the title is free-form text
/// that the normalizer may or may not manage to parse; an empty cell arrives
/// as `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Color")]
    pub color: Option<String>,
    #[serde(rename = "Budget")]
    pub budget: Option<String>,
    #[serde(rename = "Gross US & Canada")]
    pub gross_us_canada: Option<String>,
    #[serde(rename = "Opening weekend Earnings")]
    pub opening_weekend_earnings: Option<String>,
    #[serde(rename = "Gross worldwide")]
    pub gross_worldwide: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Opening weekend Release Date")]
    pub opening_weekend_release_date: Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all `.csv` files recursively under `data_path`, sorted by path.
pub fn find_csv_files(data_path: &Path) -> Vec<PathBuf> {
    if !data_path.exists() {
        warn!("Data path does not exist: {}", data_path.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_path)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == "csv")
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Resolve the configured data path to a single dataset file.
///
/// * A file path is returned as-is.
/// * A directory is scanned for CSV files; the first (path-sorted) one wins.
/// * A nonexistent path is a structural failure.
pub fn resolve_dataset_file(data_path: &Path) -> Result<PathBuf> {
    if !data_path.exists() {
        return Err(DashboardError::DataPathNotFound(data_path.to_path_buf()));
    }

    if data_path.is_dir() {
        return find_csv_files(data_path)
            .into_iter()
            .next()
            .ok_or_else(|| DashboardError::NoDataFiles(data_path.to_path_buf()));
    }

    Ok(data_path.to_path_buf())
}

/// Load the dataset file into [`RawRecord`]s.
///
/// Validates that every required column is present before reading rows. Rows
/// that fail CSV deserialization or carry an empty title are skipped with a
/// warning; if nothing survives, the table counts as absent and
/// [`DashboardError::EmptyDataset`] is returned.
pub fn load_raw_records(file_path: &Path) -> Result<Vec<RawRecord>> {
    let file = std::fs::File::open(file_path).map_err(|e| DashboardError::FileRead {
        path: file_path.to_path_buf(),
        source: e,
    })?;

    let mut reader = csv::Reader::from_reader(file);

    // Header validation up front: a missing column is a structural failure,
    // not something to paper over row by row.
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(DashboardError::MissingColumn((*column).to_string()));
        }
    }

    let mut records: Vec<RawRecord> = Vec::new();
    let mut rows_read = 0u64;
    let mut rows_skipped = 0u64;

    for result in reader.deserialize() {
        rows_read += 1;
        let record: RawRecord = match result {
            Ok(r) => r,
            Err(e) => {
                warn!(
                    "Skipping malformed row in {}: {}",
                    file_path.display(),
                    e
                );
                rows_skipped += 1;
                continue;
            }
        };

        if record.title.trim().is_empty() {
            warn!("Skipping row with empty title in {}", file_path.display());
            rows_skipped += 1;
            continue;
        }

        records.push(record);
    }

    debug!(
        "File {}: {} rows read, {} skipped, {} kept",
        file_path.display(),
        rows_read,
        rows_skipped,
        records.len()
    );

    if records.is_empty() {
        return Err(DashboardError::EmptyDataset(file_path.to_path_buf()));
    }

    Ok(records)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
