//! Main analysis pipeline for the movie dashboard.
//!
//! Orchestrates dataset resolution, CSV loading, normalization and metric
//! computation, returning an [`AnalysisResult`] ready for the report layer.

use std::path::Path;

use chrono::Utc;
use dashboard_core::error::Result;
use dashboard_core::models::{MetricBundle, MovieRecord};

use crate::aggregator::DatasetAggregator;
use crate::normalizer::{normalize_records, ColorPolicy};
use crate::reader::{load_raw_records, resolve_dataset_file};

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the analysis result.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisMetadata {
    /// ISO-8601 timestamp when this result was generated.
    pub generated_at: String,
    /// Dataset file the records were read from.
    pub dataset_file: String,
    /// Number of raw rows read from the file.
    pub rows_read: usize,
    /// Number of rows in the normalized table.
    pub rows_normalized: usize,
    /// Rows removed by the unknown-color policy.
    pub rows_dropped: usize,
    /// Wall-clock seconds spent reading the CSV.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent normalizing and aggregating.
    pub transform_time_seconds: f64,
}

/// The complete output of [`analyze_dataset`].
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// The normalized table, in input order (minus policy-dropped rows).
    pub records: Vec<MovieRecord>,
    /// Summary statistics over the normalized table.
    pub metrics: MetricBundle,
    /// Metadata about this analysis run.
    pub metadata: AnalysisMetadata,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full analysis pipeline.
///
/// 1. Resolve `data_path` to a dataset file.
/// 2. Load raw rows from the CSV.
/// 3. Normalize them under `policy`.
/// 4. Compute the metric bundle.
///
/// Structural failures (missing path, missing column, empty table) propagate
/// as errors; field-level noise degrades to `None` cells inside the records.
pub fn analyze_dataset(data_path: &Path, policy: ColorPolicy) -> Result<AnalysisResult> {
    let dataset_file = resolve_dataset_file(data_path)?;

    // ── Step 1: Load raw rows ─────────────────────────────────────────────────
    let load_start = std::time::Instant::now();
    let raws = load_raw_records(&dataset_file)?;
    let load_time = load_start.elapsed().as_secs_f64();

    // ── Step 2: Normalize ─────────────────────────────────────────────────────
    let transform_start = std::time::Instant::now();
    let records = normalize_records(&raws, policy);

    // ── Step 3: Metrics ───────────────────────────────────────────────────────
    let metrics = DatasetAggregator::compute_metrics(&records);
    let transform_time = transform_start.elapsed().as_secs_f64();

    let metadata = AnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        dataset_file: dataset_file.display().to_string(),
        rows_read: raws.len(),
        rows_normalized: records.len(),
        rows_dropped: raws.len() - records.len(),
        load_time_seconds: load_time,
        transform_time_seconds: transform_time,
    };

    tracing::info!(
        "Analyzed {}: {} rows read, {} normalized, {} dropped",
        metadata.dataset_file,
        metadata.rows_read,
        metadata.rows_normalized,
        metadata.rows_dropped
    );

    Ok(AnalysisResult {
        records,
        metrics,
        metadata,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
