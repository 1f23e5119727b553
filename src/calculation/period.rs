//! Pay period boundary calculation.
//!
//! This module computes the concrete [`PayPeriod`] date range for a reporting
//! month: either the calendar month itself, or a custom window running from a
//! configured day of the previous month to a configured day of the reference
//! month.

use chrono::{Days, NaiveDate};

use crate::config::PeriodSettings;
use crate::models::PayPeriod;

/// Calculates the pay period for a reporting month.
///
/// With `use_custom_period` off, the period spans the calendar month: the
/// 1st through the last day of `(year, month)`. With it on, the period runs
/// from `period_start_day` of the previous month through `period_end_day` of
/// the reference month, rolling over the year boundary when `month` is
/// January.
///
/// Day numbers past the last day of their month roll into the following
/// month by calendar arithmetic (e.g. day 31 of a 30-day month becomes the
/// 1st of the next month). That mirrors how the settings are interpreted
/// everywhere else in the application and is accepted behavior, not an
/// error.
///
/// # Arguments
///
/// * `year` - The reference year
/// * `month` - The reference month (1-12)
/// * `settings` - The user's period settings
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use worklog_engine::calculation::calculate_pay_period;
/// use worklog_engine::config::PeriodSettings;
///
/// // Calendar month: March 2024
/// let settings = PeriodSettings::default();
/// let period = calculate_pay_period(2024, 3, &settings);
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
///
/// // Custom window: Feb 16 through Mar 15
/// let custom = PeriodSettings {
///     use_custom_period: true,
///     ..PeriodSettings::default()
/// };
/// let period = calculate_pay_period(2024, 3, &custom);
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2024, 2, 16).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
/// ```
pub fn calculate_pay_period(year: i32, month: u32, settings: &PeriodSettings) -> PayPeriod {
    let month = month as i32;

    if !settings.use_custom_period {
        return PayPeriod {
            start_date: month_day(year, month, 1),
            end_date: last_day_of_month(year, month),
        };
    }

    PayPeriod {
        start_date: month_day(year, month - 1, settings.period_start_day),
        end_date: month_day(year, month, settings.period_end_day),
    }
}

/// Checks whether a date falls within the pay period for a reporting month.
///
/// Both period bounds are inclusive.
pub fn is_in_pay_period(date: NaiveDate, year: i32, month: u32, settings: &PeriodSettings) -> bool {
    calculate_pay_period(year, month, settings).contains_date(date)
}

/// Returns the given day of a month, rolling overflowing days forward.
///
/// The month index may lie outside 1-12; whole years are carried into
/// `year` first, then day overflow rolls into the following month.
fn month_day(year: i32, month: i32, day: u32) -> NaiveDate {
    first_of_month(year, month) + Days::new(u64::from(day.saturating_sub(1)))
}

/// Returns the last calendar day of a month, i.e. the day before the first
/// of the following month.
fn last_day_of_month(year: i32, month: i32) -> NaiveDate {
    first_of_month(year, month + 1) - Days::new(1)
}

/// Returns the first day of a month, normalizing month indexes outside 1-12
/// into the neighboring years.
fn first_of_month(year: i32, month: i32) -> NaiveDate {
    let offset = month - 1;
    let year = year + offset.div_euclid(12);
    let month = (offset.rem_euclid(12) + 1) as u32;
    // day 1 of a normalized month always exists
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}
