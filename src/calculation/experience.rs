//! Total experience calculation over a set of positions.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Position;

/// Sums the experience across positions, in years rounded to one decimal.
///
/// Each position contributes its whole-month duration (open-ended positions
/// run through `as_of`), with a minimum of one month, so even the shortest
/// engagement registers. The month total is converted to years and rounded
/// half away from zero to one decimal place.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use worklog_engine::calculation::total_experience_years;
/// use worklog_engine::models::Position;
///
/// let positions: Vec<Position> = serde_json::from_str(r#"[
///     {"id": "0b7f12c9-54d2-4b6b-93a0-92a8e5cf2f4b",
///      "job_title": "Backend Engineer", "contract_type": "full-time",
///      "start_date": "2022-01-01", "end_date": "2023-07-01"}
/// ]"#).unwrap();
///
/// let as_of = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
/// assert_eq!(
///     total_experience_years(&positions, as_of),
///     Decimal::from_str("1.5").unwrap()
/// );
/// ```
pub fn total_experience_years(positions: &[Position], as_of: NaiveDate) -> Decimal {
    let total_months: u32 = positions
        .iter()
        .map(|position| position.duration_months(as_of))
        .sum();

    (Decimal::from(total_months) / Decimal::from(12))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
