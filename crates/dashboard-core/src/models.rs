use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The cleaned color/format descriptor of a movie.
///
/// `Unknown` is a legitimate business value, not a pipeline failure: the
/// categorical breakdown treats it as its own category, and callers may
/// exclude such rows only through an explicit policy choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorFormat {
    /// The raw descriptor contained "color" (any casing).
    #[serde(rename = "Color")]
    Color,
    /// The raw descriptor contained "black and white" or "bw".
    #[serde(rename = "Black and White")]
    BlackAndWhite,
    /// Anything else, including a missing descriptor.
    #[serde(rename = "Unknown")]
    Unknown,
}

impl ColorFormat {
    /// Human-readable label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            ColorFormat::Color => "Color",
            ColorFormat::BlackAndWhite => "Black and White",
            ColorFormat::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalise a raw color descriptor into a [`ColorFormat`].
///
/// Lower-cases and trims the input, then applies case-insensitive substring
/// rules: `"color"` wins first, then `"black and white"` / `"bw"`. A missing
/// or unmatched descriptor maps to [`ColorFormat::Unknown`]; this function
/// is total and never fails.
///
/// # Examples
///
/// ```
/// use dashboard_core::models::{normalize_color, ColorFormat};
///
/// assert_eq!(normalize_color(Some("COLOR")), ColorFormat::Color);
/// assert_eq!(normalize_color(Some("Black and White")), ColorFormat::BlackAndWhite);
/// assert_eq!(normalize_color(Some(" bw ")), ColorFormat::BlackAndWhite);
/// assert_eq!(normalize_color(None), ColorFormat::Unknown);
/// ```
pub fn normalize_color(raw: Option<&str>) -> ColorFormat {
    let Some(raw) = raw else {
        return ColorFormat::Unknown;
    };

    let lower = raw.trim().to_lowercase();

    if lower.contains("color") {
        return ColorFormat::Color;
    }
    if lower.contains("black and white") || lower.contains("bw") {
        return ColorFormat::BlackAndWhite;
    }

    ColorFormat::Unknown
}

/// One movie after the cleaning pass.
///
/// All monetary fields share one implied reporting currency; the source data
/// does not track which symbol implied which currency, and no conversion is
/// attempted. A `None` in any nullable field records a cell that could not be
/// parsed, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Movie title, never empty.
    pub title: String,
    /// Cleaned color/format descriptor.
    pub color_format: ColorFormat,
    /// Production budget.
    pub budget: Option<f64>,
    /// Gross earnings in the US & Canada.
    pub gross_us_canada: Option<f64>,
    /// Earnings over the opening weekend.
    pub opening_weekend_earnings: Option<f64>,
    /// Worldwide gross earnings.
    pub gross_worldwide: Option<f64>,
    /// Runtime in minutes, extracted as the first digit run of the raw text.
    pub runtime_minutes: Option<f64>,
    /// Calendar date of the opening weekend release.
    pub opening_weekend_release_date: Option<NaiveDate>,
}

/// The four scalar summary statistics derived from the full normalized table.
///
/// Sums ignore `None` cells; a column with no present values sums to `0.0`,
/// never to null, so downstream display always has a total to show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricBundle {
    /// Number of distinct titles in the table.
    pub title_count: usize,
    /// Sum of `budget` over present values.
    pub total_budget: f64,
    /// Sum of `opening_weekend_earnings` over present values.
    pub total_opening_weekend_earnings: f64,
    /// Sum of `gross_worldwide` over present values.
    pub total_gross_worldwide: f64,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
