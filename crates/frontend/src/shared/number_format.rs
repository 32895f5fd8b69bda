//! Number formatting helpers shared by the form, the results modal and the
//! emailed report.

/// Formats a number with comma thousands separators and the given number of
/// decimal places: `1234567.891` with 2 decimals renders as `1,234,567.89`.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Insert a comma every 3 digits from the end of the integer part,
    // keeping a leading minus sign out of the grouping.
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Formats a monetary amount rounded to whole units with thousands
/// separators: `113749.6` renders as `113,750`.
pub fn format_money_int(value: f64) -> String {
    format_number_with_decimals(value.round(), 0)
}

/// Formats a percentage with two decimal places: `11.375` renders as `11.38%`.
pub fn format_percent2(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Regroups a raw digit string with comma separators while the user types:
/// `"1234567"` becomes `"1,234,567"`. Leading zeros collapse the way a
/// numeric round-trip would collapse them. Empty input stays empty.
pub fn group_digits(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let significant = raw.trim_start_matches('0');
    let digits = if significant.is_empty() {
        "0"
    } else {
        significant
    };
    let mut result = String::new();
    let chars: Vec<char> = digits.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }
    result.chars().rev().collect()
}

/// Parses user-typed numeric text, tolerating comma separators and an
/// unfinished trailing decimal point. Empty or malformed text parses to
/// `None`.
pub fn parse_loose(text: &str) -> Option<f64> {
    let cleaned = text.replace(',', "");
    let trimmed = cleaned.strip_suffix('.').unwrap_or(&cleaned);
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Keystroke filter for monetary fields: strips separators and accepts the
/// text only if what remains is all digits. Returns the raw digit string,
/// or `None` when the keystroke must be rejected.
pub fn sanitize_money(typed: &str) -> Option<String> {
    let raw = typed.replace(',', "");
    if raw.chars().all(|c| c.is_ascii_digit()) {
        Some(raw)
    } else {
        None
    }
}

/// Keystroke filter for bounded decimal fields (percent, hours).
///
/// Accepts digit text with at most one decimal point and `max_decimals`
/// fraction digits, capped at `max_value`. Text with an unfinished trailing
/// dot is kept as typed so the user can continue; the cap is then enforced
/// by submit validation. Rejected keystrokes return `prev` unchanged.
pub fn sanitize_decimal(prev: &str, typed: &str, max_decimals: usize, max_value: f64) -> String {
    if !decimal_shape_ok(typed, max_decimals) {
        return prev.to_string();
    }
    if typed.is_empty() || typed.ends_with('.') {
        return typed.to_string();
    }
    match typed.parse::<f64>() {
        Ok(v) if v <= max_value => typed.to_string(),
        _ => prev.to_string(),
    }
}

/// Drops an unfinished trailing decimal point when the field loses focus:
/// `"25."` becomes `"25"`, a lone `"."` becomes `"0"`.
pub fn normalize_decimal_on_blur(text: &str) -> String {
    if text.ends_with('.') {
        let trimmed = text.trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        text.to_string()
    }
}

fn decimal_shape_ok(text: &str, max_decimals: usize) -> bool {
    let mut parts = text.splitn(2, '.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next();
    if !int_part.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    match frac_part {
        None => true,
        Some(f) => f.len() <= max_decimals && f.chars().all(|c| c.is_ascii_digit()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(-1234.56, 2), "-1,234.56");
        assert_eq!(format_number_with_decimals(0.0, 2), "0.00");
    }

    #[test]
    fn test_format_money_int() {
        assert_eq!(format_money_int(1234567.89), "1,234,568");
        assert_eq!(format_money_int(113749.6), "113,750");
        assert_eq!(format_money_int(0.0), "0");
        assert_eq!(format_money_int(999.4), "999");
    }

    #[test]
    fn test_format_percent2() {
        assert_eq!(format_percent2(11.375), "11.38%");
        assert_eq!(format_percent2(0.0), "0.00%");
        assert_eq!(format_percent2(100.0), "100.00%");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(""), "");
        assert_eq!(group_digits("5"), "5");
        assert_eq!(group_digits("1234"), "1,234");
        assert_eq!(group_digits("1234567"), "1,234,567");
        assert_eq!(group_digits("007"), "7");
        assert_eq!(group_digits("000"), "0");
    }

    #[test]
    fn test_parse_loose() {
        assert_eq!(parse_loose("1,000,000"), Some(1_000_000.0));
        assert_eq!(parse_loose("25.5"), Some(25.5));
        assert_eq!(parse_loose("25."), Some(25.0));
        assert_eq!(parse_loose(""), None);
        assert_eq!(parse_loose("."), None);
        assert_eq!(parse_loose("abc"), None);
    }

    #[test]
    fn test_sanitize_money() {
        assert_eq!(sanitize_money("1,234,567"), Some("1234567".to_string()));
        assert_eq!(sanitize_money("500000"), Some("500000".to_string()));
        assert_eq!(sanitize_money(""), Some(String::new()));
        assert_eq!(sanitize_money("12a3"), None);
        assert_eq!(sanitize_money("12.5"), None);
        assert_eq!(sanitize_money("-5"), None);
    }

    #[test]
    fn test_sanitize_decimal_accepts_in_range() {
        assert_eq!(sanitize_decimal("2", "25", 2, 100.0), "25");
        assert_eq!(sanitize_decimal("25", "25.5", 2, 100.0), "25.5");
        assert_eq!(sanitize_decimal("25", "25.", 2, 100.0), "25.");
        assert_eq!(sanitize_decimal("25", "", 2, 100.0), "");
        assert_eq!(sanitize_decimal("", ".5", 1, 40.0), ".5");
        assert_eq!(sanitize_decimal("", "100", 2, 100.0), "100");
    }

    #[test]
    fn test_sanitize_decimal_rejects_bad_keystrokes() {
        // Over the cap without a trailing dot.
        assert_eq!(sanitize_decimal("10", "101", 2, 100.0), "10");
        // Too many fraction digits.
        assert_eq!(sanitize_decimal("25.55", "25.555", 2, 100.0), "25.55");
        assert_eq!(sanitize_decimal("20.5", "20.55", 1, 40.0), "20.5");
        // Non-numeric characters.
        assert_eq!(sanitize_decimal("25", "25a", 2, 100.0), "25");
        assert_eq!(sanitize_decimal("25", "-25", 2, 100.0), "25");
        // Second decimal point.
        assert_eq!(sanitize_decimal("25.5", "25.5.", 2, 100.0), "25.5");
    }

    #[test]
    fn test_sanitize_decimal_keeps_trailing_dot_over_cap() {
        // "150." stays typeable; submit validation owns the range check.
        assert_eq!(sanitize_decimal("150", "150.", 2, 100.0), "150.");
    }

    #[test]
    fn test_normalize_decimal_on_blur() {
        assert_eq!(normalize_decimal_on_blur("25."), "25");
        assert_eq!(normalize_decimal_on_blur("25.5"), "25.5");
        assert_eq!(normalize_decimal_on_blur("."), "0");
        assert_eq!(normalize_decimal_on_blur(""), "");
    }
}
