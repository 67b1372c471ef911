// Magnitude formatters
//
// Compact display for count-like values pulled from external profiles.
// A count may be missing entirely, which is distinct from a count of zero.

/// Format an optional count compactly with K/M suffixes
///
/// `None` means no value was ever supplied and renders as `"N/A"`. A present
/// zero is a real value and renders as `"0"` — the missing check is a
/// presence check, never a truthiness check.
///
/// Scaled values always carry exactly one decimal digit. Thresholds apply to
/// the absolute value, so negative counts keep their sign.
///
/// # Examples
/// ```
/// use tcview::format_magnitude;
///
/// assert_eq!(format_magnitude(Some(2_500_000)), "2.5M");
/// assert_eq!(format_magnitude(Some(1_500)), "1.5K");
/// assert_eq!(format_magnitude(Some(999)), "999");
/// assert_eq!(format_magnitude(Some(0)), "0");
/// assert_eq!(format_magnitude(None), "N/A");
/// ```
pub fn format_magnitude(count: Option<i64>) -> String {
    let Some(n) = count else {
        return "N/A".to_string();
    };

    if n.unsigned_abs() >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n.unsigned_abs() >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Format a follower count (alias for [`format_magnitude`])
///
/// Identical behavior for every input; exists so call sites reading profile
/// data say what they mean.
pub fn format_follower_count(count: Option<i64>) -> String {
    format_magnitude(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millions() {
        assert_eq!(format_magnitude(Some(2_500_000)), "2.5M");
        assert_eq!(format_magnitude(Some(1_000_000)), "1.0M");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(format_magnitude(Some(1_500)), "1.5K");
        assert_eq!(format_magnitude(Some(1_000)), "1.0K");
        assert_eq!(format_magnitude(Some(999_000)), "999.0K");
    }

    #[test]
    fn test_small_values_unscaled() {
        assert_eq!(format_magnitude(Some(999)), "999");
        assert_eq!(format_magnitude(Some(42)), "42");
        assert_eq!(format_magnitude(Some(1)), "1");
    }

    #[test]
    fn test_zero_is_present_not_missing() {
        assert_eq!(format_magnitude(Some(0)), "0");
    }

    #[test]
    fn test_missing_renders_na() {
        assert_eq!(format_magnitude(None), "N/A");
    }

    #[test]
    fn test_negative_values_keep_sign() {
        assert_eq!(format_magnitude(Some(-999)), "-999");
        assert_eq!(format_magnitude(Some(-1_500)), "-1.5K");
        assert_eq!(format_magnitude(Some(-2_500_000)), "-2.5M");
    }

    #[test]
    fn test_follower_count_matches_magnitude() {
        for count in [
            None,
            Some(0),
            Some(999),
            Some(1_500),
            Some(2_500_000),
            Some(-1_500),
        ] {
            assert_eq!(format_follower_count(count), format_magnitude(count));
        }
    }
}
