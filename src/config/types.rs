//! Settings types.
//!
//! This module contains the strongly-typed user settings structure that is
//! deserialized from the application's JSON settings file.

use serde::{Deserialize, Serialize};

use crate::currency::BASE_CURRENCY;

/// User-configurable calendar, pay period, and display settings.
///
/// Missing fields fall back to their defaults when deserializing, so settings
/// files written by older versions keep loading.
///
/// The period day fields are not range-checked beyond what date arithmetic
/// tolerates: a start or end day past the last day of its month rolls into
/// the following month (see
/// [`calculate_pay_period`](crate::calculation::calculate_pay_period)).
///
/// # Example
///
/// ```
/// use worklog_engine::config::PeriodSettings;
///
/// let settings = PeriodSettings::default();
/// assert!(!settings.use_custom_period);
/// assert_eq!(settings.period_start_day, 16);
/// assert_eq!(settings.period_end_day, 15);
/// assert_eq!(settings.default_currency, "EUR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodSettings {
    /// Whether calendar views start the week on Monday instead of Sunday.
    pub week_starts_on_monday: bool,
    /// When true, the pay period runs from `period_start_day` of the previous
    /// month to `period_end_day` of the reference month instead of spanning
    /// the whole calendar month.
    pub use_custom_period: bool,
    /// Day of the previous month on which a custom period starts.
    pub period_start_day: u32,
    /// Day of the reference month on which a custom period ends.
    pub period_end_day: u32,
    /// Currency assumed when a paycheck has no resolvable currency.
    pub default_currency: String,
}

impl Default for PeriodSettings {
    fn default() -> Self {
        Self {
            week_starts_on_monday: true,
            use_custom_period: false,
            period_start_day: 16,
            period_end_day: 15,
            default_currency: BASE_CURRENCY.to_string(),
        }
    }
}

impl PeriodSettings {
    /// Returns weekday names ordered according to `week_starts_on_monday`:
    /// Sunday moves to the end of the week when it is set.
    pub fn weekday_labels(&self, short: bool) -> [&'static str; 7] {
        const SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        const LONG: [&str; 7] = [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ];

        let labels = if short { SHORT } else { LONG };
        if self.week_starts_on_monday {
            [
                labels[1], labels[2], labels[3], labels[4], labels[5], labels[6], labels[0],
            ]
        } else {
            labels
        }
    }
}
