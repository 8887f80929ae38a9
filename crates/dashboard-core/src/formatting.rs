/// Scale a non-negative magnitude into a compact suffixed string.
///
/// * `>= 1e9` → `"{value/1e9:.2}B"`
/// * `>= 1e6` → `"{value/1e6:.2}M"`
/// * `>= 1e3` → `"{value/1e3:.1}K"`
/// * otherwise → `"{value:.2}"`
///
/// This is a pure display formatter with no locale awareness.
///
/// # Panics
///
/// Panics on negative or non-finite input. The formatter's domain is counts
/// and currency totals, which are always non-negative finite; anything else
/// is a caller bug surfaced immediately rather than rendered as nonsense.
///
/// # Examples
///
/// ```
/// use dashboard_core::formatting::format_magnitude;
///
/// assert_eq!(format_magnitude(2_140_000_000.0), "2.14B");
/// assert_eq!(format_magnitude(1_500_000.0), "1.50M");
/// assert_eq!(format_magnitude(82_500.0), "82.5K");
/// assert_eq!(format_magnitude(999.0), "999.00");
/// ```
pub fn format_magnitude(value: f64) -> String {
    assert!(
        value.is_finite() && value >= 0.0,
        "format_magnitude requires a non-negative finite value, got {value}"
    );

    if value >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{:.2}", value)
    }
}

/// Format a monetary magnitude with a leading dollar sign.
///
/// The metric tiles show every monetary total as `$` plus the scaled
/// magnitude, e.g. `"$2.14B"`.
///
/// # Examples
///
/// ```
/// use dashboard_core::formatting::format_currency;
///
/// assert_eq!(format_currency(2_140_000_000.0), "$2.14B");
/// assert_eq!(format_currency(0.0), "$0.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    format!("${}", format_magnitude(amount))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── format_magnitude ─────────────────────────────────────────────────────

    #[test]
    fn test_format_magnitude_billions() {
        assert_eq!(format_magnitude(2_140_000_000.0), "2.14B");
    }

    #[test]
    fn test_format_magnitude_millions() {
        assert_eq!(format_magnitude(1_500_000.0), "1.50M");
    }

    #[test]
    fn test_format_magnitude_thousands() {
        assert_eq!(format_magnitude(1_000.0), "1.0K");
        assert_eq!(format_magnitude(82_500.0), "82.5K");
    }

    #[test]
    fn test_format_magnitude_under_thousand() {
        assert_eq!(format_magnitude(999.0), "999.00");
        assert_eq!(format_magnitude(0.0), "0.00");
    }

    #[test]
    fn test_format_magnitude_boundaries() {
        // Exact boundaries fall into the larger bucket.
        assert_eq!(format_magnitude(1e9), "1.00B");
        assert_eq!(format_magnitude(1e6), "1.00M");
        assert_eq!(format_magnitude(1e3), "1.0K");
    }

    #[test]
    fn test_format_magnitude_fractional() {
        assert_eq!(format_magnitude(0.5), "0.50");
    }

    #[test]
    #[should_panic(expected = "non-negative finite")]
    fn test_format_magnitude_negative_panics() {
        format_magnitude(-1.0);
    }

    #[test]
    #[should_panic(expected = "non-negative finite")]
    fn test_format_magnitude_nan_panics() {
        format_magnitude(f64::NAN);
    }

    #[test]
    #[should_panic(expected = "non-negative finite")]
    fn test_format_magnitude_infinity_panics() {
        format_magnitude(f64::INFINITY);
    }

    // ── format_currency ──────────────────────────────────────────────────────

    #[test]
    fn test_format_currency_billions() {
        assert_eq!(format_currency(15_610_000_000.0), "$15.61B");
    }

    #[test]
    fn test_format_currency_millions() {
        assert_eq!(format_currency(825_620_000.0), "$825.62M");
    }

    #[test]
    fn test_format_currency_zero() {
        assert_eq!(format_currency(0.0), "$0.00");
    }
}
