//! Aggregation over the normalized movie table.
//!
//! Everything in here consumes the table read-only and recomputes from
//! scratch; the metric bundle and the view selections are derived artifacts,
//! never updated in place.

use std::collections::HashSet;

use chrono::NaiveDate;
use dashboard_core::models::{ColorFormat, MetricBundle, MovieRecord};

/// Stateless helper that derives summary views from the normalized table.
pub struct DatasetAggregator;

impl DatasetAggregator {
    /// Compute the four summary statistics over the full table.
    ///
    /// `None` cells contribute nothing to the sums; a column with no present
    /// values sums to `0.0`. An empty table yields an all-zero bundle. Both
    /// the distinct count and the sums are order-independent.
    pub fn compute_metrics(records: &[MovieRecord]) -> MetricBundle {
        let distinct_titles: HashSet<&str> = records.iter().map(|r| r.title.as_str()).collect();

        MetricBundle {
            title_count: distinct_titles.len(),
            total_budget: Self::sum_present(records, |r| r.budget),
            total_opening_weekend_earnings: Self::sum_present(records, |r| {
                r.opening_weekend_earnings
            }),
            total_gross_worldwide: Self::sum_present(records, |r| r.gross_worldwide),
        }
    }

    /// Select the `n` records with the largest value in the column read by
    /// `key`.
    ///
    /// Rows where `key` yields `None` are ineligible and never selected.
    /// Selection is a stable descending pass, so equal values at the cutoff
    /// are resolved in favour of earlier input rows. The result is returned
    /// **ascending by value**, matching a horizontal-bar consumer that lists
    /// the largest entry last.
    pub fn top_n_by(
        records: &[MovieRecord],
        n: usize,
        key: impl Fn(&MovieRecord) -> Option<f64>,
    ) -> Vec<MovieRecord> {
        let mut eligible: Vec<(f64, &MovieRecord)> = records
            .iter()
            .filter_map(|r| key(r).map(|v| (v, r)))
            .collect();

        // Stable sort: equal values keep their input order.
        eligible.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        let mut top: Vec<MovieRecord> = eligible
            .into_iter()
            .take(n)
            .map(|(_, r)| r.clone())
            .collect();
        top.reverse();
        top
    }

    /// Count rows per color format, descending by count.
    ///
    /// Categories with no rows are omitted. `Unknown` is reported as its own
    /// category; excluding those rows is the normalizer's policy decision,
    /// not this view's.
    pub fn color_distribution(records: &[MovieRecord]) -> Vec<(ColorFormat, usize)> {
        let mut counts: Vec<(ColorFormat, usize)> = [
            ColorFormat::Color,
            ColorFormat::BlackAndWhite,
            ColorFormat::Unknown,
        ]
        .into_iter()
        .map(|format| {
            let count = records.iter().filter(|r| r.color_format == format).count();
            (format, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    /// Opening-weekend earnings ordered by release date, ascending.
    ///
    /// Rows without a release date are excluded; rows with a date but no
    /// earnings figure stay in the series as `None` points.
    pub fn opening_weekend_series(records: &[MovieRecord]) -> Vec<(NaiveDate, Option<f64>)> {
        let mut series: Vec<(NaiveDate, Option<f64>)> = records
            .iter()
            .filter_map(|r| {
                r.opening_weekend_release_date
                    .map(|date| (date, r.opening_weekend_earnings))
            })
            .collect();

        series.sort_by_key(|(date, _)| *date);
        series
    }

    // ── Private ───────────────────────────────────────────────────────────────

    /// Sum the present values of one nullable column.
    fn sum_present(records: &[MovieRecord], key: impl Fn(&MovieRecord) -> Option<f64>) -> f64 {
        records.iter().filter_map(key).sum()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
