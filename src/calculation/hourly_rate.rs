//! Paycheck hourly rate calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PeriodSettings;
use crate::currency::{CurrencyConverter, CurrencyResolver};
use crate::models::{Paycheck, WorkLog, WorkLogType};

use super::stats::total_hours_in_period;

/// The result of an hourly rate calculation for one paycheck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRate {
    /// Worked hours in the paycheck's pay period.
    pub hours: Decimal,
    /// Net amount, converted when a converter was supplied.
    pub net_amount: Decimal,
    /// Net amount divided by hours, or zero when no hours were worked.
    pub rate: Decimal,
    /// The currency the paycheck was resolved to.
    pub currency: String,
}

/// Calculates the hourly rate for a paycheck from the worked hours of its
/// pay period.
///
/// The paycheck's reference date selects the reporting month; only logs of
/// type [`WorkLogType::Work`] count toward the hours. The optional `resolver`
/// supplies the paycheck's currency (falling back to the settings' default
/// currency), and the optional `converter` translates the net amount out of
/// that currency; without a converter the raw net amount is used.
///
/// A period with zero worked hours yields a rate of exactly zero: the
/// division is guarded, so the result is never an error and never NaN.
///
/// # Arguments
///
/// * `paycheck` - The paycheck to calculate a rate for
/// * `logs` - The full work log collection; filtering happens internally
/// * `settings` - The user's period settings
/// * `converter` - Optional currency conversion policy
/// * `resolver` - Optional per-paycheck currency resolution policy
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use worklog_engine::calculation::calculate_hourly_rate;
/// use worklog_engine::config::PeriodSettings;
/// use worklog_engine::models::{Paycheck, WorkLog};
///
/// let logs: Vec<WorkLog> = serde_json::from_str(r#"[
///     {"id": "8a3a55a1-6f04-4c3b-9a34-1f2b7c9d0e11",
///      "position_id": "0b7f12c9-54d2-4b6b-93a0-92a8e5cf2f4b",
///      "date": "2024-03-05", "hours_worked": 160, "type": "work"}
/// ]"#).unwrap();
/// let paycheck: Paycheck = serde_json::from_str(r#"{
///     "id": "3f1cf9a2-74a8-4a3e-8b3e-5a3c2d1e0f99",
///     "position_id": "0b7f12c9-54d2-4b6b-93a0-92a8e5cf2f4b",
///     "reference_date": "2024-03-31",
///     "net_amount": 1800
/// }"#).unwrap();
///
/// let result = calculate_hourly_rate(&paycheck, &logs, &PeriodSettings::default(), None, None);
/// assert_eq!(result.rate, Decimal::from_str("11.25").unwrap());
/// assert_eq!(result.currency, "EUR");
/// ```
pub fn calculate_hourly_rate(
    paycheck: &Paycheck,
    logs: &[WorkLog],
    settings: &PeriodSettings,
    converter: Option<&dyn CurrencyConverter>,
    resolver: Option<&dyn CurrencyResolver>,
) -> HourlyRate {
    let (year, month) = paycheck.period_ref();
    let hours = total_hours_in_period(logs, year, month, settings, Some(WorkLogType::Work));

    let currency = match resolver {
        Some(resolver) => resolver.resolve(paycheck),
        None => settings.default_currency.clone(),
    };
    let net_amount = match converter {
        Some(converter) => converter.convert(paycheck.net_amount, &currency),
        None => paycheck.net_amount,
    };

    let rate = if hours > Decimal::ZERO {
        net_amount / hours
    } else {
        Decimal::ZERO
    };

    HourlyRate {
        hours,
        net_amount,
        rate,
        currency,
    }
}
