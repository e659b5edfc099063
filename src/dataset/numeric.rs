//! Italian-locale number parsing.

/// Parse a number written with `.` as thousands separator and `,` as decimal
/// separator (e.g. `"1.234.567"` or `"456,78"`).
///
/// Returns `None` for blank or non-numeric text.
pub fn parse_locale_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized: String = trimmed
        .chars()
        .filter(|c| *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a number that only uses `.` as thousands separator (e.g.
/// `"890.123"`).
///
/// A decimal comma is not accepted: `"1.234,5"` is `None`.
pub fn parse_thousands_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized: String = trimmed.chars().filter(|c| *c != '.').collect();
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_separator() {
        assert_eq!(parse_locale_number("1.234.567"), Some(1_234_567.0));
        assert_eq!(parse_locale_number("12.000"), Some(12_000.0));
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(parse_locale_number("456,78"), Some(456.78));
        assert_eq!(parse_locale_number("1.234,5"), Some(1234.5));
    }

    #[test]
    fn test_plain_and_padded() {
        assert_eq!(parse_locale_number("42"), Some(42.0));
        assert_eq!(parse_locale_number("  310 "), Some(310.0));
        assert_eq!(parse_locale_number("-3,5"), Some(-3.5));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_locale_number(""), None);
        assert_eq!(parse_locale_number("   "), None);
        assert_eq!(parse_locale_number("n.d."), None);
        assert_eq!(parse_locale_number("inf"), None);
        assert_eq!(parse_locale_number("NaN"), None);
    }

    #[test]
    fn test_thousands_only() {
        assert_eq!(parse_thousands_number("890.123"), Some(890_123.0));
        assert_eq!(parse_thousands_number(" 100 "), Some(100.0));
        assert_eq!(parse_thousands_number("1.234,5"), None);
        assert_eq!(parse_thousands_number("456,78"), None);
        assert_eq!(parse_thousands_number("n.d."), None);
        assert_eq!(parse_thousands_number(""), None);
    }
}
