//! # Numeric Formatting Utilities
//!
//! Parsing and formatting for comma-grouped decimal strings as typed into the
//! calculator's amount fields.
//!
//! ## Functions
//!
//! - [`parse_decimal`] - Parse user input, distinguishing "no value" from zero
//! - [`format_with_separators`] - Re-group an in-progress input string, keeping
//!   any trailing decimal fragment verbatim
//! - [`format_number`] - Format a number with comma separators at a fixed precision
//! - [`format_krw`] / [`format_foreign`] - Presentation formatting for derived
//!   amounts (whole KRW, two-decimal foreign)
//!
//! Rounding happens only in the presentation formatters. Conversion math
//! always runs on the raw parsed values so repeated edits never compound
//! rounding error.

/// Parse a decimal string as typed by the user.
///
/// Strips thousands separators, rejects input with more than one decimal
/// point, and returns `None` (never zero) for empty or invalid input so
/// callers can distinguish "no value" from an actual `0`.
///
/// Partial keystroke states such as `"1234."` parse to their numeric value,
/// which keeps the dependent field live while the user is mid-typing.
///
/// # Examples
///
/// ```rust
/// use client::utils::format::parse_decimal;
///
/// assert_eq!(parse_decimal("1,234.5"), Some(1234.5));
/// assert_eq!(parse_decimal("1234."), Some(1234.0));
/// assert_eq!(parse_decimal(""), None);
/// assert_eq!(parse_decimal("1.2.3"), None);
/// ```
pub fn parse_decimal(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return None;
    }

    // A second decimal point is always a typo, never a partial state
    if cleaned.matches('.').count() > 1 {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Re-insert comma separators into an in-progress input string.
///
/// Only the integer part is grouped; a trailing decimal fragment (including a
/// bare `"."`) is preserved verbatim so the cursor and partial input survive
/// formatting on every keystroke. The function is idempotent, and input it
/// cannot recognize as numeric is returned unchanged.
///
/// Guarantee: `parse_decimal(&format_with_separators(s)) == parse_decimal(s)`
/// for any input `s`.
///
/// # Examples
///
/// ```rust
/// use client::utils::format::format_with_separators;
///
/// assert_eq!(format_with_separators("1234567"), "1,234,567");
/// assert_eq!(format_with_separators("1234."), "1,234.");
/// assert_eq!(format_with_separators("1,234.05"), "1,234.05");
/// ```
pub fn format_with_separators(text: &str) -> String {
    let raw: String = text.chars().filter(|c| *c != ',').collect();

    let (integer_part, fragment) = match raw.find('.') {
        Some(idx) => (&raw[..idx], &raw[idx..]),
        None => (raw.as_str(), ""),
    };

    // Leave anything that is not a plain digit sequence alone; grouping a
    // malformed string could accidentally change what it parses to
    if integer_part.is_empty() || !integer_part.chars().all(|c| c.is_ascii_digit()) {
        return text.to_string();
    }

    format!("{}{}", group_digits(integer_part), fragment)
}

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Arguments
///
/// * `value` - The number to format
/// * `decimals` - Number of decimal places to show
///
/// # Examples
///
/// ```rust
/// use client::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let (integer_part, decimal_part) = match formatted.find('.') {
        Some(idx) => (&formatted[..idx], &formatted[idx + 1..]),
        None => (formatted.as_str(), ""),
    };

    let grouped = group_digits(integer_part);

    if decimal_part.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, decimal_part)
    }
}

/// Format a derived KRW amount: rounded to the nearest whole won, comma-grouped.
pub fn format_krw(amount: f64) -> String {
    format_number(amount, 0)
}

/// Format a derived foreign amount: two decimal places, comma-grouped.
pub fn format_foreign(amount: f64) -> String {
    format_number(amount, 2)
}

/// Format a rate for seeding an editable field: no grouping, no forced
/// decimals (`1350.0` -> `"1350"`, `950.25` -> `"950.25"`).
pub fn format_plain(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn group_digits(integer_part: &str) -> String {
    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && ch.is_ascii_digit() {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
