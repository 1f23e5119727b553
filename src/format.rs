//! Display formatting helpers.
//!
//! Pure, stateless formatting functions consumed by the application's
//! presentation layer: locale-aware currency formatting, date and time
//! formatting, clock-style hour formatting, and pay period labels. Malformed
//! date strings degrade to an "Invalid date" result instead of failing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculation::calculate_pay_period;
use crate::config::PeriodSettings;
use crate::currency::currency_symbol;
use crate::error::{EngineError, EngineResult};

/// Currencies rendered with Danish number conventions: decimal comma, dot
/// thousands separator, symbol after the amount.
const NORDIC_CURRENCIES: [&str; 3] = ["DKK", "NOK", "SEK"];

/// Date rendering styles offered to the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// Abbreviated month and year, e.g. "Mar 2024".
    Short,
    /// Full month name and year, e.g. "March 2024".
    Month,
    /// Weekday, month, day and year, e.g. "Fri, Mar 1, 2024".
    #[default]
    Full,
}

/// Parses a date string, tolerating time-of-day noise.
///
/// Accepts plain `YYYY-MM-DD` dates as well as RFC 3339 and ISO 8601
/// datetime forms, truncating any time component to the calendar day.
///
/// # Example
///
/// ```
/// use worklog_engine::format::parse_date;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(parse_date("2024-03-01").unwrap(), day);
/// assert_eq!(parse_date("2024-03-01T08:30:00Z").unwrap(), day);
/// assert!(parse_date("yesterday").is_err());
/// ```
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(datetime.date());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(datetime.date());
    }
    Err(EngineError::InvalidDate {
        value: value.to_string(),
    })
}

/// Formats a date string in the requested style.
///
/// Malformed input yields the literal `"Invalid date"` rather than an error,
/// so a single bad record cannot break a rendered list.
pub fn format_date(value: &str, format: DateFormat) -> String {
    match parse_date(value) {
        Ok(date) => format_naive_date(date, format),
        Err(_) => "Invalid date".to_string(),
    }
}

/// Formats an already-parsed date in the requested style.
pub fn format_naive_date(date: NaiveDate, format: DateFormat) -> String {
    let pattern = match format {
        DateFormat::Short => "%b %Y",
        DateFormat::Month => "%B %Y",
        DateFormat::Full => "%a, %b %-d, %Y",
    };
    date.format(pattern).to_string()
}

/// Formats an amount in the given currency.
///
/// Amounts render with grouped thousands and up to two fraction digits
/// (trailing zeros trimmed). DKK, NOK and SEK use Danish conventions; all
/// other currencies use US conventions with the symbol before the amount.
/// Unknown currency codes fall back to the code itself as the symbol.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use worklog_engine::format::format_currency;
///
/// let amount = Decimal::from_str("1234.56").unwrap();
/// assert_eq!(format_currency(amount, "EUR"), "€1,234.56");
/// assert_eq!(format_currency(amount, "DKK"), "1.234,56 kr");
/// ```
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    let symbol = currency_symbol(currency);
    if NORDIC_CURRENCIES.contains(&currency) {
        format!("{} {}", decimal_string(amount, '.', ','), symbol)
    } else if amount.is_sign_negative() && !amount.is_zero() {
        format!("-{}{}", symbol, decimal_string(amount.abs(), ',', '.'))
    } else {
        format!("{}{}", symbol, decimal_string(amount, ',', '.'))
    }
}

/// Renders an amount with grouped thousands and at most two fraction digits.
fn decimal_string(amount: Decimal, thousands_sep: char, decimal_sep: char) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.to_string();
    let (number, negative) = match text.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (text.as_str(), false),
    };
    let (int_part, frac_part) = match number.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (number, None),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(thousands_sep);
        }
        out.push(digit);
    }
    if let Some(frac) = frac_part {
        out.push(decimal_sep);
        out.push_str(frac);
    }
    out
}

/// Formats decimal hours as a clock-style `H:MM` string.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use worklog_engine::format::format_hours;
///
/// assert_eq!(format_hours(Decimal::from_str("1.5").unwrap()), "1:30");
/// assert_eq!(format_hours(Decimal::ZERO), "0:00");
/// ```
pub fn format_hours(hours: Decimal) -> String {
    if hours <= Decimal::ZERO {
        return "0:00".to_string();
    }
    let whole = hours.trunc();
    let minutes = ((hours - whole) * Decimal::from(60))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let mut h = whole.to_u64().unwrap_or(0);
    let mut m = minutes.to_u64().unwrap_or(0);
    // rounding the fraction up can land exactly on the next hour
    if m == 60 {
        h += 1;
        m = 0;
    }
    format!("{}:{:02}", h, m)
}

/// Normalizes a `HH:MM:SS` or `HH:MM` time string to `HH:MM`.
///
/// Strings without a colon pass through unchanged; empty input stays empty.
pub fn format_time(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }
    let mut parts = time.split(':');
    match (parts.next(), parts.next()) {
        (Some(hours), Some(minutes)) => format!("{}:{}", hours, minutes),
        _ => time.to_string(),
    }
}

/// Formats the pay period for a reporting month as a human-readable range,
/// e.g. `"Feb 16, 2024 - Mar 15, 2024"`.
pub fn format_pay_period(year: i32, month: u32, settings: &PeriodSettings) -> String {
    let period = calculate_pay_period(year, month, settings);
    format!(
        "{} - {}",
        period.start_date.format("%b %-d, %Y"),
        period.end_date.format("%b %-d, %Y")
    )
}
