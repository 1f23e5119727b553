//! Core data models for the Pay Period Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod pay_period;
mod paycheck;
mod position;
mod work_log;

pub use pay_period::PayPeriod;
pub use paycheck::Paycheck;
pub use position::{ContractType, Position};
pub use work_log::{Mood, WorkLog, WorkLogType};

pub(crate) mod serde_dates {
    //! Serde helpers for date fields that may arrive with time-of-day noise
    //! (e.g. `2024-03-01T08:30:00Z` for what is logically a calendar day).

    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};

    use crate::format::parse_date;

    pub(crate) fn flexible<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(serde::de::Error::custom)
    }

    pub(crate) fn flexible_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(value) => parse_date(value).map(Some).map_err(serde::de::Error::custom),
        }
    }
}
