//! Report rendering for the movie dashboard.
//!
//! Turns an [`AnalysisResult`] into either a plain-text summary or a JSON
//! document. Both views are assembled from the same derived data (the metric
//! bundle, the top-ranked selections, the color breakdown and the
//! opening-weekend series), so any external renderer sees identical numbers.

use dashboard_core::formatting::{format_currency, format_magnitude};
use dashboard_core::models::MovieRecord;
use dashboard_data::aggregator::DatasetAggregator;
use dashboard_data::analysis::AnalysisResult;

/// Render the plain-text report.
///
/// Top-ranked listings are printed largest-first for readability; the
/// underlying selection is ascending by value.
pub fn render_text(result: &AnalysisResult, top_n: usize) -> String {
    let mut out = String::new();

    out.push_str("IMDB Movies Dashboard\n");
    out.push_str("=====================\n\n");

    let metrics = &result.metrics;
    out.push_str(&format!(
        "{:<32} {}\n",
        "Total Titles",
        format_magnitude(metrics.title_count as f64)
    ));
    out.push_str(&format!(
        "{:<32} {}\n",
        "Total Budget",
        format_currency(metrics.total_budget)
    ));
    out.push_str(&format!(
        "{:<32} {}\n",
        "Total Opening Weekend Earnings",
        format_currency(metrics.total_opening_weekend_earnings)
    ));
    out.push_str(&format!(
        "{:<32} {}\n",
        "Total Gross Worldwide",
        format_currency(metrics.total_gross_worldwide)
    ));

    let top_gross = DatasetAggregator::top_n_by(&result.records, top_n, |r| r.gross_worldwide);
    push_ranked_section(
        &mut out,
        &format!("Top {} Movies by Gross Worldwide", top_gross.len()),
        &top_gross,
        |r| r.gross_worldwide,
    );

    let top_budget = DatasetAggregator::top_n_by(&result.records, top_n, |r| r.budget);
    push_ranked_section(
        &mut out,
        &format!("Top {} Highest Budget Movies", top_budget.len()),
        &top_budget,
        |r| r.budget,
    );

    out.push_str("\nColor Distribution\n");
    for (format, count) in DatasetAggregator::color_distribution(&result.records) {
        out.push_str(&format!("  {:<17} {}\n", format.label(), count));
    }

    let series = DatasetAggregator::opening_weekend_series(&result.records);
    if let (Some((first, _)), Some((last, _))) = (series.first(), series.last()) {
        out.push_str(&format!(
            "\nOpening weekends span {} to {} across {} dated releases\n",
            first,
            last,
            series.len()
        ));
    }

    out
}

/// Render the JSON report.
///
/// Carries the normalized records verbatim alongside the derived views so a
/// downstream renderer needs no pipeline knowledge.
pub fn render_json(result: &AnalysisResult, top_n: usize) -> anyhow::Result<String> {
    let top_gross = DatasetAggregator::top_n_by(&result.records, top_n, |r| r.gross_worldwide);
    let top_budget = DatasetAggregator::top_n_by(&result.records, top_n, |r| r.budget);
    let color_distribution: Vec<serde_json::Value> =
        DatasetAggregator::color_distribution(&result.records)
            .into_iter()
            .map(|(format, count)| {
                serde_json::json!({ "color_format": format, "count": count })
            })
            .collect();
    let series: Vec<serde_json::Value> =
        DatasetAggregator::opening_weekend_series(&result.records)
            .into_iter()
            .map(|(date, earnings)| {
                serde_json::json!({ "date": date.to_string(), "earnings": earnings })
            })
            .collect();

    let document = serde_json::json!({
        "metrics": result.metrics,
        "records": result.records,
        "top_gross_worldwide": top_gross,
        "top_budget": top_budget,
        "color_distribution": color_distribution,
        "opening_weekend_series": series,
        "metadata": result.metadata,
    });

    Ok(serde_json::to_string_pretty(&document)?)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Append one ranked listing, largest value first.
fn push_ranked_section(
    out: &mut String,
    title: &str,
    rows: &[MovieRecord],
    key: impl Fn(&MovieRecord) -> Option<f64>,
) {
    out.push_str(&format!("\n{}\n", title));
    for record in rows.iter().rev() {
        let Some(value) = key(record) else { continue };
        out.push_str(&format!(
            "  {:<44} {}\n",
            record.title,
            format_currency(value)
        ));
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
