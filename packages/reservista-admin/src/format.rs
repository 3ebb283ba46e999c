//! Display formatting for prices and timestamps.

use std::fmt::Write;

use chrono::{DateTime, Utc};

/// Returned when a timestamp or pattern cannot be rendered.
pub const INVALID_DATE: &str = "Invalid Date";

/// Medium date with time, e.g. `Jul 20, 2024, 6:00:00 PM`.
pub const DATE_TIME_FORMAT: &str = "%b %-d, %Y, %-I:%M:%S %p";

/// Long date, e.g. `July 20, 2024`.
pub const DATE_FORMAT: &str = "%B %-d, %Y";

/// Formats `amount` as US dollars: `$1,234.50`, `-$5.00`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "$∞" } else { "-$∞" }.to_string();
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Formats a timestamp with a strftime `pattern`.
///
/// Returns [`INVALID_DATE`] if the pattern is malformed.
pub fn format_timestamp(ts: DateTime<Utc>, pattern: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", ts.format(pattern)) {
        Ok(()) => out,
        Err(_) => INVALID_DATE.to_string(),
    }
}

/// Parses an RFC 3339 timestamp and formats it with a strftime `pattern`.
///
/// Returns [`INVALID_DATE`] if either the timestamp or the pattern is malformed.
pub fn format_date(value: &str, pattern: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(ts) => format_timestamp(ts.with_timezone(&Utc), pattern),
        Err(_) => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(15.99), "$15.99");
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-5.0), "-$5.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 7, 20, 18, 0, 0).unwrap();
        assert_eq!(format_timestamp(ts, DATE_TIME_FORMAT), "Jul 20, 2024, 6:00:00 PM");
        assert_eq!(format_timestamp(ts, DATE_FORMAT), "July 20, 2024");
    }

    #[test]
    fn test_format_date_invalid_input() {
        assert_eq!(format_date("not a date", DATE_FORMAT), INVALID_DATE);
        assert_eq!(format_date("2024-07-20T18:00:00Z", "%Q"), INVALID_DATE);
        assert_eq!(format_date("2024-07-20T18:00:00Z", "%Y-%m-%d"), "2024-07-20");
    }
}
