//! Work log model and related types.
//!
//! This module defines the WorkLog struct together with the WorkLogType and
//! Mood enums for representing a single day's recorded work or leave.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of day recorded in a work log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkLogType {
    /// A regular worked day.
    #[default]
    Work,
    /// A vacation day.
    Vacation,
    /// A sick leave day.
    SickLeave,
    /// A paid permit (leave of absence) day.
    Permit,
}

impl WorkLogType {
    /// All log types, in display order.
    pub const ALL: [WorkLogType; 4] = [
        WorkLogType::Work,
        WorkLogType::Vacation,
        WorkLogType::SickLeave,
        WorkLogType::Permit,
    ];

    /// Returns the human-readable label for this log type.
    pub fn label(&self) -> &'static str {
        match self {
            WorkLogType::Work => "Work",
            WorkLogType::Vacation => "Vacation",
            WorkLogType::SickLeave => "Sick Leave",
            WorkLogType::Permit => "Permit",
        }
    }
}

impl std::fmt::Display for WorkLogType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A 1-5 mood rating attached to a work log.
///
/// Serialized as its integer rating, matching the `mood_rating` column of
/// the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Mood {
    /// Rating 1.
    VeryBad = 1,
    /// Rating 2.
    Bad = 2,
    /// Rating 3.
    Okay = 3,
    /// Rating 4.
    Good = 4,
    /// Rating 5.
    Great = 5,
}

impl Mood {
    /// All moods, worst to best.
    pub const ALL: [Mood; 5] = [
        Mood::VeryBad,
        Mood::Bad,
        Mood::Okay,
        Mood::Good,
        Mood::Great,
    ];

    /// Returns the numeric rating (1-5).
    pub fn rating(&self) -> u8 {
        *self as u8
    }

    /// Returns the emoji shown for this mood.
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::VeryBad => "😢",
            Mood::Bad => "😕",
            Mood::Okay => "😐",
            Mood::Good => "🙂",
            Mood::Great => "😄",
        }
    }

    /// Returns the human-readable label for this mood.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::VeryBad => "Very Bad",
            Mood::Bad => "Bad",
            Mood::Okay => "Okay",
            Mood::Good => "Good",
            Mood::Great => "Great",
        }
    }
}

impl TryFrom<u8> for Mood {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Mood::VeryBad),
            2 => Ok(Mood::Bad),
            3 => Ok(Mood::Okay),
            4 => Ok(Mood::Good),
            5 => Ok(Mood::Great),
            other => Err(format!("mood rating out of range 1-5: {}", other)),
        }
    }
}

impl From<Mood> for u8 {
    fn from(mood: Mood) -> Self {
        mood as u8
    }
}

/// A single day's recorded work or leave entry.
///
/// Immutable value once constructed; the engine only ever reads these.
///
/// # Example
///
/// ```
/// use worklog_engine::models::{WorkLog, WorkLogType};
///
/// let json = r#"{
///     "id": "8a3a55a1-6f04-4c3b-9a34-1f2b7c9d0e11",
///     "position_id": "0b7f12c9-54d2-4b6b-93a0-92a8e5cf2f4b",
///     "date": "2024-03-01",
///     "hours_worked": 8,
///     "type": "work",
///     "mood_rating": 4,
///     "notes": "release day"
/// }"#;
/// let log: WorkLog = serde_json::from_str(json).unwrap();
/// assert_eq!(log.log_type, WorkLogType::Work);
/// assert_eq!(log.mood_emoji(), "🙂");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkLog {
    /// Unique identifier for the log entry.
    pub id: Uuid,
    /// The position this log was recorded against.
    pub position_id: Uuid,
    /// The calendar day the entry applies to.
    #[serde(deserialize_with = "crate::models::serde_dates::flexible")]
    pub date: NaiveDate,
    /// Hours worked (or taken as leave) on this day.
    #[serde(default)]
    pub hours_worked: Decimal,
    /// The kind of day recorded.
    #[serde(rename = "type", default)]
    pub log_type: WorkLogType,
    /// Optional 1-5 mood rating for the day.
    #[serde(default)]
    pub mood_rating: Option<Mood>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl WorkLog {
    /// Returns the emoji for the recorded mood, or a placeholder when unset.
    pub fn mood_emoji(&self) -> &'static str {
        self.mood_rating.map_or("—", |mood| mood.emoji())
    }
}
