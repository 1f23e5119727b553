//! Paycheck model.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::format::{self, DateFormat};

/// A recorded paycheck, anchored to one reporting month by its reference date.
///
/// # Example
///
/// ```
/// use worklog_engine::models::Paycheck;
///
/// let json = r#"{
///     "id": "3f1cf9a2-74a8-4a3e-8b3e-5a3c2d1e0f99",
///     "position_id": "0b7f12c9-54d2-4b6b-93a0-92a8e5cf2f4b",
///     "reference_date": "2024-03-31",
///     "net_amount": 1800,
///     "gross_amount": 2450.5,
///     "bonuses": 200
/// }"#;
/// let paycheck: Paycheck = serde_json::from_str(json).unwrap();
/// assert_eq!(paycheck.period_ref(), (2024, 3));
/// assert_eq!(paycheck.month_year(), "March 2024");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paycheck {
    /// Unique identifier for the paycheck.
    pub id: Uuid,
    /// The position this paycheck was earned under.
    pub position_id: Uuid,
    /// The day anchoring the paycheck to a reporting month.
    #[serde(deserialize_with = "crate::models::serde_dates::flexible")]
    pub reference_date: NaiveDate,
    /// Net amount paid out.
    pub net_amount: Decimal,
    /// Gross amount, when known.
    #[serde(default)]
    pub gross_amount: Option<Decimal>,
    /// Bonuses paid on top of the net amount.
    #[serde(default)]
    pub bonuses: Decimal,
}

impl Paycheck {
    /// Returns the `(year, month)` of the reporting period this paycheck
    /// anchors to, with the month in 1-12.
    pub fn period_ref(&self) -> (i32, u32) {
        (self.reference_date.year(), self.reference_date.month())
    }

    /// Returns the net amount plus bonuses.
    pub fn total_amount(&self) -> Decimal {
        self.net_amount + self.bonuses
    }

    /// Returns a "March 2024"-style label for the reporting month.
    pub fn month_year(&self) -> String {
        format::format_naive_date(self.reference_date, DateFormat::Month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_paycheck(reference_date: &str) -> Paycheck {
        serde_json::from_str(&format!(
            r#"{{
                "id": "3f1cf9a2-74a8-4a3e-8b3e-5a3c2d1e0f99",
                "position_id": "0b7f12c9-54d2-4b6b-93a0-92a8e5cf2f4b",
                "reference_date": "{}",
                "net_amount": 1800.50,
                "bonuses": 150
            }}"#,
            reference_date
        ))
        .unwrap()
    }

    #[test]
    fn test_period_ref_extracts_year_and_month() {
        let paycheck = make_paycheck("2024-03-31");
        assert_eq!(paycheck.period_ref(), (2024, 3));
    }

    #[test]
    fn test_period_ref_january() {
        let paycheck = make_paycheck("2025-01-01");
        assert_eq!(paycheck.period_ref(), (2025, 1));
    }

    #[test]
    fn test_total_amount_includes_bonuses() {
        let paycheck = make_paycheck("2024-03-31");
        assert_eq!(paycheck.total_amount(), dec("1950.50"));
    }

    #[test]
    fn test_missing_bonuses_and_gross_default() {
        let paycheck = make_paycheck("2024-03-31");
        assert_eq!(paycheck.gross_amount, None);
        assert_eq!(paycheck.bonuses, dec("150"));
    }

    #[test]
    fn test_month_year_label() {
        let paycheck = make_paycheck("2024-03-31");
        assert_eq!(paycheck.month_year(), "March 2024");
    }

    #[test]
    fn test_reference_date_tolerates_time_noise() {
        let paycheck = make_paycheck("2024-03-31T12:00:00");
        assert_eq!(
            paycheck.reference_date,
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
        );
    }
}
