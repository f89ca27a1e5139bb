//! Numeric coercion for bound inputs and resource cell text.
//!
//! Coercion never fails upward: anything unparseable falls back to a safe
//! default instead of an error.

/// Coerce a bound input's text, with `fallback` for empty or non-numeric
/// text. A literal "NaN" counts as non-numeric.
fn coerce_bound(text: &str, fallback: f64) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => fallback,
    }
}

/// Effective minimum for a Min input: empty or non-numeric means 0.
pub fn coerce_min_bound(text: &str) -> f64 {
    coerce_bound(text, 0.0)
}

/// Effective maximum for a Max input: empty or non-numeric means unbounded.
pub fn coerce_max_bound(text: &str) -> f64 {
    coerce_bound(text, f64::INFINITY)
}

/// Parse a resource reading's display text. The host page renders amounts
/// with `.` as a thousands separator, so every dot is stripped before
/// parsing ("1.234" is one thousand two hundred thirty-four). Unparseable
/// text contributes 0.
pub fn parse_grouped_number(text: &str) -> f64 {
    let stripped: String = text.chars().filter(|ch| *ch != '.').collect();
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_separator_is_stripped() {
        assert_eq!(parse_grouped_number("1.234"), 1234.0);
        assert_eq!(parse_grouped_number("12.345.678"), 12_345_678.0);
        assert_eq!(parse_grouped_number(" 987 "), 987.0);
    }

    #[test]
    fn unparseable_cell_text_contributes_zero() {
        assert_eq!(parse_grouped_number(""), 0.0);
        assert_eq!(parse_grouped_number("?"), 0.0);
        assert_eq!(parse_grouped_number("NaN"), 0.0);
    }

    #[test]
    fn min_bound_defaults_to_zero() {
        assert_eq!(coerce_min_bound(""), 0.0);
        assert_eq!(coerce_min_bound("  "), 0.0);
        assert_eq!(coerce_min_bound("abc"), 0.0);
        assert_eq!(coerce_min_bound("5"), 5.0);
    }

    #[test]
    fn max_bound_defaults_to_unbounded() {
        assert_eq!(coerce_max_bound(""), f64::INFINITY);
        assert_eq!(coerce_max_bound("x"), f64::INFINITY);
        assert_eq!(coerce_max_bound("100"), 100.0);
        // "0" is the number zero, not an unset maximum.
        assert_eq!(coerce_max_bound("0"), 0.0);
    }

    #[test]
    fn unbounded_maximum_round_trips_through_display() {
        let stored = format!("{}", f64::INFINITY);
        assert_eq!(coerce_max_bound(&stored), f64::INFINITY);
    }

    #[test]
    fn bound_inputs_parse_plain_decimals() {
        // Bound inputs are decimal, not grouped: "1.5" is one and a half.
        assert_eq!(coerce_min_bound("1.5"), 1.5);
    }
}
