//! Row-wise normalization of raw CSV rows into typed [`MovieRecord`]s.
//!
//! Each row is cleaned independently of every other row, so the pass is
//! order-independent and idempotent. Unparsable cells become `None`; nothing
//! in here returns an error.

use dashboard_core::field_parsers::{MoneyParser, ReleaseDateParser, RuntimeExtractor};
use dashboard_core::models::{normalize_color, ColorFormat, MovieRecord};
use tracing::debug;

use crate::reader::RawRecord;

/// What to do with rows whose color format cannot be resolved.
///
/// The source treated this inconsistently across copies of the pipeline;
/// here it is a single explicit policy choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPolicy {
    /// Retain rows with [`ColorFormat::Unknown`]; the categorical breakdown
    /// reports them as their own category.
    #[default]
    KeepUnknown,
    /// Filter rows with [`ColorFormat::Unknown`] out of the table entirely.
    DropUnknown,
}

/// Clean and type-coerce a single raw row.
///
/// Pure and total: every field-level parse failure is absorbed as `None`.
pub fn normalize_record(raw: &RawRecord) -> MovieRecord {
    MovieRecord {
        title: raw.title.trim().to_string(),
        color_format: normalize_color(raw.color.as_deref()),
        budget: raw.budget.as_deref().and_then(MoneyParser::parse),
        gross_us_canada: raw.gross_us_canada.as_deref().and_then(MoneyParser::parse),
        opening_weekend_earnings: raw
            .opening_weekend_earnings
            .as_deref()
            .and_then(MoneyParser::parse),
        gross_worldwide: raw.gross_worldwide.as_deref().and_then(MoneyParser::parse),
        runtime_minutes: raw.runtime.as_deref().and_then(RuntimeExtractor::extract),
        opening_weekend_release_date: raw
            .opening_weekend_release_date
            .as_deref()
            .and_then(ReleaseDateParser::parse),
    }
}

/// Normalize a full raw table, applying the unknown-color policy.
///
/// Input order is preserved; under [`ColorPolicy::DropUnknown`] the surviving
/// rows keep their relative order.
pub fn normalize_records(raws: &[RawRecord], policy: ColorPolicy) -> Vec<MovieRecord> {
    let records: Vec<MovieRecord> = raws
        .iter()
        .map(normalize_record)
        .filter(|r| policy == ColorPolicy::KeepUnknown || r.color_format != ColorFormat::Unknown)
        .collect();

    debug!(
        "Normalized {} of {} rows (policy: {:?})",
        records.len(),
        raws.len(),
        policy
    );

    records
}

// ── Tests ─────────────────────────────────────────────────────────────────────
