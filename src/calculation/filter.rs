//! Period membership filtering for work logs.

use crate::config::PeriodSettings;
use crate::models::{WorkLog, WorkLogType};

use super::period::calculate_pay_period;

/// Returns the work logs that fall within the pay period for a reporting
/// month, optionally restricted to one log type.
///
/// The result is an order-preserving subsequence of the input; the input
/// collection is never mutated. An empty result is a normal outcome, not an
/// error. Both period bounds are inclusive, so a log dated exactly on a
/// boundary day belongs to that period and to no adjoining one.
///
/// # Arguments
///
/// * `logs` - The work logs to filter
/// * `year` - The reference year
/// * `month` - The reference month (1-12)
/// * `settings` - The user's period settings
/// * `type_filter` - When set, only logs of this type are returned
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::logs_in_pay_period;
/// use worklog_engine::config::PeriodSettings;
/// use worklog_engine::models::{WorkLog, WorkLogType};
///
/// let logs: Vec<WorkLog> = serde_json::from_str(r#"[
///     {"id": "8a3a55a1-6f04-4c3b-9a34-1f2b7c9d0e11",
///      "position_id": "0b7f12c9-54d2-4b6b-93a0-92a8e5cf2f4b",
///      "date": "2024-03-05", "hours_worked": 8, "type": "work"},
///     {"id": "9b4b66b2-7f15-4d4c-8b45-2f3c8d0e1f22",
///      "position_id": "0b7f12c9-54d2-4b6b-93a0-92a8e5cf2f4b",
///      "date": "2024-04-05", "hours_worked": 8, "type": "work"}
/// ]"#).unwrap();
///
/// let settings = PeriodSettings::default();
/// let in_march = logs_in_pay_period(&logs, 2024, 3, &settings, None);
/// assert_eq!(in_march.len(), 1);
/// ```
pub fn logs_in_pay_period<'a>(
    logs: &'a [WorkLog],
    year: i32,
    month: u32,
    settings: &PeriodSettings,
    type_filter: Option<WorkLogType>,
) -> Vec<&'a WorkLog> {
    let period = calculate_pay_period(year, month, settings);

    logs.iter()
        .filter(|log| period.contains_date(log.date))
        .filter(|log| type_filter.is_none_or(|wanted| log.log_type == wanted))
        .collect()
}
