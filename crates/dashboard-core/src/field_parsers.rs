use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

// ── MoneyParser ───────────────────────────────────────────────────────────────

/// Parses monetary cells that arrive with mixed-locale decoration.
pub struct MoneyParser;

impl MoneyParser {
    /// Currency symbols observed in the source data. The symbol is stripped,
    /// not interpreted: all values share one implied reporting unit.
    const CURRENCY_SYMBOLS: [char; 4] = ['$', '¥', '£', '€'];

    /// Attempt to parse a raw monetary cell into a plain amount.
    ///
    /// Strips the known currency symbols and comma thousands separators, then
    /// parses the remainder as a decimal number. Any failure (empty cell,
    /// leftover non-numeric characters, a non-finite parse) yields `None`.
    /// This is an expected condition given how noisy the source field is and
    /// never becomes an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashboard_core::field_parsers::MoneyParser;
    ///
    /// assert_eq!(MoneyParser::parse("$1,234,500"), Some(1_234_500.0));
    /// assert_eq!(MoneyParser::parse("¥2,000"), Some(2_000.0));
    /// assert_eq!(MoneyParser::parse("N/A"), None);
    /// ```
    pub fn parse(raw: &str) -> Option<f64> {
        let cleaned: String = raw
            .chars()
            .filter(|c| !Self::CURRENCY_SYMBOLS.contains(c) && *c != ',')
            .collect();
        let trimmed = cleaned.trim();
        if trimmed.is_empty() {
            return None;
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                debug!("MoneyParser: could not parse monetary cell \"{}\"", raw);
                None
            }
        }
    }
}

// ── RuntimeExtractor ──────────────────────────────────────────────────────────

/// Extracts a runtime value from free-form duration text.
pub struct RuntimeExtractor;

impl RuntimeExtractor {
    /// Scan left-to-right for the first maximal run of decimal digits and
    /// parse it as a number.
    ///
    /// Only the first run is read: `"142 min"` yields `142.0`, but
    /// `"2h 15min"` yields `2.0`; trailing unit information is discarded.
    /// No digits yields `None`.
    pub fn extract(raw: &str) -> Option<f64> {
        let re = Regex::new(r"\d+").expect("regex is valid");
        re.find(raw).and_then(|m| m.as_str().parse::<f64>().ok())
    }
}

// ── ReleaseDateParser ─────────────────────────────────────────────────────────

/// Parses release-date cells against the date grammars seen in the source.
pub struct ReleaseDateParser;

impl ReleaseDateParser {
    /// Attempt to parse a raw date cell into a calendar date.
    ///
    /// Tries a series of common date patterns in order; the first that
    /// matches wins. Unparsable input yields `None`, so a single bad cell
    /// cannot abort the rest of the table.
    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        const FORMATS: &[&str] = &[
            "%Y-%m-%d",
            "%B %d, %Y",
            "%b %d, %Y",
            "%m/%d/%Y",
            "%d %B %Y",
            "%d %b %Y",
            "%Y/%m/%d",
        ];

        for fmt in FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
                return Some(date);
            }
        }

        debug!(
            "ReleaseDateParser: could not parse date string \"{}\"",
            trimmed
        );
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
