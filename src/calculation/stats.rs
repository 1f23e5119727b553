//! Aggregate statistics over a pay period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PeriodSettings;
use crate::models::{WorkLog, WorkLogType};

use super::filter::logs_in_pay_period;

/// Aggregate statistics for the work logs of one pay period.
///
/// A derived value with no lifecycle of its own: recomputed on demand from a
/// snapshot of the log collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStats {
    /// Total hours across all log types.
    pub total_hours: Decimal,
    /// Number of regular worked days.
    pub work_days: usize,
    /// Number of vacation days.
    pub vacation_days: usize,
    /// Number of sick leave days.
    pub sick_days: usize,
    /// Number of permit days.
    pub permit_days: usize,
    /// Total number of logs in the period.
    pub total_logs: usize,
}

/// Calculates aggregate statistics for a reporting month.
///
/// Filters the logs to the month's pay period, then reduces them in one
/// pass: hours are summed across every log type while the day counters are
/// partitioned by type. An empty collection yields all-zero stats.
///
/// # Arguments
///
/// * `logs` - The work logs to aggregate
/// * `year` - The reference year
/// * `month` - The reference month (1-12)
/// * `settings` - The user's period settings
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::calculate_period_stats;
/// use worklog_engine::config::PeriodSettings;
/// use worklog_engine::models::WorkLog;
///
/// let logs: Vec<WorkLog> = serde_json::from_str(r#"[
///     {"id": "8a3a55a1-6f04-4c3b-9a34-1f2b7c9d0e11",
///      "position_id": "0b7f12c9-54d2-4b6b-93a0-92a8e5cf2f4b",
///      "date": "2024-03-05", "hours_worked": 8, "type": "work"},
///     {"id": "9b4b66b2-7f15-4d4c-8b45-2f3c8d0e1f22",
///      "position_id": "0b7f12c9-54d2-4b6b-93a0-92a8e5cf2f4b",
///      "date": "2024-03-06", "hours_worked": 8, "type": "vacation"}
/// ]"#).unwrap();
///
/// let stats = calculate_period_stats(&logs, 2024, 3, &PeriodSettings::default());
/// assert_eq!(stats.work_days, 1);
/// assert_eq!(stats.vacation_days, 1);
/// assert_eq!(stats.total_logs, 2);
/// ```
pub fn calculate_period_stats(
    logs: &[WorkLog],
    year: i32,
    month: u32,
    settings: &PeriodSettings,
) -> PeriodStats {
    let period_logs = logs_in_pay_period(logs, year, month, settings, None);

    let mut stats = PeriodStats {
        total_logs: period_logs.len(),
        ..PeriodStats::default()
    };
    for log in period_logs {
        stats.total_hours += log.hours_worked;
        match log.log_type {
            WorkLogType::Work => stats.work_days += 1,
            WorkLogType::Vacation => stats.vacation_days += 1,
            WorkLogType::SickLeave => stats.sick_days += 1,
            WorkLogType::Permit => stats.permit_days += 1,
        }
    }
    stats
}

/// Sums the hours logged within a reporting month's pay period, optionally
/// restricted to one log type.
pub fn total_hours_in_period(
    logs: &[WorkLog],
    year: i32,
    month: u32,
    settings: &PeriodSettings,
    type_filter: Option<WorkLogType>,
) -> Decimal {
    logs_in_pay_period(logs, year, month, settings, type_filter)
        .iter()
        .map(|log| log.hours_worked)
        .sum()
}
