//! Employment position model and related types.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::BASE_CURRENCY;
use crate::format::{self, DateFormat};

/// The contractual arrangement of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContractType {
    /// Full-time contract.
    FullTime,
    /// Part-time contract.
    PartTime,
    /// Freelance engagement.
    Freelance,
    /// Student or apprenticeship contract.
    Student,
}

impl ContractType {
    /// Returns the human-readable label for this contract type.
    pub fn label(&self) -> &'static str {
        match self {
            ContractType::FullTime => "Full-time",
            ContractType::PartTime => "Part-time",
            ContractType::Freelance => "Freelance",
            ContractType::Student => "Student",
        }
    }
}

impl std::fmt::Display for ContractType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An employment position held at a company.
///
/// Duration calculations take an explicit `as_of` date for open-ended
/// positions, so they stay deterministic and testable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Unique identifier for the position.
    pub id: Uuid,
    /// Job title, e.g. "Backend Engineer".
    pub job_title: String,
    /// The contractual arrangement.
    pub contract_type: ContractType,
    /// First day of employment.
    #[serde(deserialize_with = "crate::models::serde_dates::flexible")]
    pub start_date: NaiveDate,
    /// Last day of employment; `None` while the position is held.
    #[serde(default, deserialize_with = "crate::models::serde_dates::flexible_opt")]
    pub end_date: Option<NaiveDate>,
    /// Contractual base salary, when recorded.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
    /// Currency the position pays in.
    #[serde(default = "default_position_currency")]
    pub currency: String,
    /// Skills exercised in this position.
    #[serde(default)]
    pub skills: Vec<String>,
}

fn default_position_currency() -> String {
    BASE_CURRENCY.to_string()
}

impl Position {
    /// Returns true while the position has no end date.
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }

    /// Returns the whole-month difference between the start date and the end
    /// date (or `as_of` for an open-ended position), with a minimum of one
    /// month so that very short positions still count.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use worklog_engine::models::{ContractType, Position};
    /// use uuid::Uuid;
    ///
    /// let position = Position {
    ///     id: Uuid::new_v4(),
    ///     job_title: "Backend Engineer".to_string(),
    ///     contract_type: ContractType::FullTime,
    ///     start_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
    ///     end_date: None,
    ///     base_salary: None,
    ///     currency: "EUR".to_string(),
    ///     skills: vec![],
    /// };
    /// let as_of = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
    /// assert_eq!(position.duration_months(as_of), 18);
    /// ```
    pub fn duration_months(&self, as_of: NaiveDate) -> u32 {
        let end = self.end_date.unwrap_or(as_of);
        let months = (end.year() - self.start_date.year()) * 12
            + (end.month() as i32 - self.start_date.month() as i32);
        months.max(1) as u32
    }

    /// Returns a compact duration label: "3 months", "2 years", "1y 4m".
    pub fn duration_label(&self, as_of: NaiveDate) -> String {
        let months = self.duration_months(as_of);
        let years = months / 12;
        let remaining = months % 12;

        if years == 0 {
            format!("{} month{}", remaining, if remaining != 1 { "s" } else { "" })
        } else if remaining == 0 {
            format!("{} year{}", years, if years != 1 { "s" } else { "" })
        } else {
            format!("{}y {}m", years, remaining)
        }
    }

    /// Returns a "Jun 2023 - Present"-style label for the employment span.
    pub fn period_label(&self) -> String {
        let start = format::format_naive_date(self.start_date, DateFormat::Short);
        let end = self
            .end_date
            .map_or_else(|| "Present".to_string(), |date| {
                format::format_naive_date(date, DateFormat::Short)
            });
        format!("{} - {}", start, end)
    }
}
