//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type describing the date range over
//! which work and pay are aggregated for one reporting month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The date range for one reporting month, both ends inclusive.
///
/// A pay period is a derived value: it is recomputed from the reference month
/// and the user's settings on every call and carries no identity beyond its
/// two dates.
///
/// # Example
///
/// ```
/// use worklog_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2024, 2, 16).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pay_period() -> PayPeriod {
        PayPeriod {
            start_date: NaiveDate::from_ymd_opt(2024, 2, 16).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    }

    #[test]
    fn test_contains_date_within_period() {
        let period = create_pay_period();
        assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    }

    #[test]
    fn test_contains_date_on_start_date() {
        let period = create_pay_period();
        assert!(period.contains_date(period.start_date));
    }

    #[test]
    fn test_contains_date_on_end_date() {
        let period = create_pay_period();
        assert!(period.contains_date(period.end_date));
    }

    #[test]
    fn test_contains_date_before_start() {
        let period = create_pay_period();
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()));
    }

    #[test]
    fn test_contains_date_after_end() {
        let period = create_pay_period();
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()));
    }

    #[test]
    fn test_serialize_pay_period() {
        let period = create_pay_period();
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"start_date\":\"2024-02-16\""));
        assert!(json.contains("\"end_date\":\"2024-03-15\""));
    }

    #[test]
    fn test_deserialize_pay_period() {
        let json = r#"{
            "start_date": "2024-02-16",
            "end_date": "2024-03-15"
        }"#;
        let period: PayPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period, create_pay_period());
    }
}
