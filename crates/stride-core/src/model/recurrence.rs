//! Recurrence rules for tasks.
//!
//! The external wire format is a pair of fields: `repeat_type` (one of
//! `daily`, `weekly`, `monthly`, `yearly`) and `repeat_config`, a list of
//! strings whose meaning depends on the type. Internally that pair becomes
//! a validated tagged union, so malformed rules are rejected when a
//! snapshot is parsed instead of silently never matching at query time.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A month/day pair for yearly recurrence, e.g. "03-14".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthDay {
    pub month: u8,
    pub day: u8,
}

impl MonthDay {
    /// Construct a validated month/day pair. Feb 29 is allowed.
    pub fn new(month: u8, day: u8) -> Result<Self, ValidationError> {
        let max_day = match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => 29,
            _ => {
                return Err(ValidationError::InvalidMonthDay(format!(
                    "{month:02}-{day:02}"
                )))
            }
        };
        if day == 0 || day > max_day {
            return Err(ValidationError::InvalidMonthDay(format!(
                "{month:02}-{day:02}"
            )));
        }
        Ok(Self { month, day })
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ValidationError::InvalidMonthDay(s.to_string());
        let (month, day) = s.split_once('-').ok_or_else(bad)?;
        let month: u8 = month.parse().map_err(|_| bad())?;
        let day: u8 = day.parse().map_err(|_| bad())?;
        MonthDay::new(month, day).map_err(|_| bad())
    }
}

/// When a task occurs, relative to its `start_date`/`end_date` window.
///
/// An empty day set is legal and simply never matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RepeatSpec", into = "RepeatSpec")]
pub enum Recurrence {
    /// Due every day.
    Daily,
    /// Due on the listed weekdays.
    Weekly { days: Vec<Weekday> },
    /// Due on the listed days of the month (1..=31).
    Monthly { days: Vec<u8> },
    /// Due on the listed month/day pairs.
    Yearly { dates: Vec<MonthDay> },
}

impl Recurrence {
    /// Build a rule from the wire representation.
    ///
    /// Entries are deduplicated and sorted; any entry that does not parse
    /// for the given repeat type is an error.
    pub fn from_parts(repeat_type: &str, repeat_config: &[String]) -> Result<Self, ValidationError> {
        match repeat_type {
            "daily" => Ok(Recurrence::Daily),
            "weekly" => {
                let mut days: Vec<Weekday> = Vec::with_capacity(repeat_config.len());
                for name in repeat_config {
                    let day = Weekday::from_str(name)
                        .map_err(|_| ValidationError::InvalidWeekday(name.clone()))?;
                    if !days.contains(&day) {
                        days.push(day);
                    }
                }
                days.sort_by_key(|d| d.num_days_from_monday());
                Ok(Recurrence::Weekly { days })
            }
            "monthly" => {
                let mut days: Vec<u8> = Vec::with_capacity(repeat_config.len());
                for raw in repeat_config {
                    let day: u8 = raw
                        .parse()
                        .map_err(|_| ValidationError::InvalidDayOfMonth(raw.clone()))?;
                    if day == 0 || day > 31 {
                        return Err(ValidationError::InvalidDayOfMonth(raw.clone()));
                    }
                    if !days.contains(&day) {
                        days.push(day);
                    }
                }
                days.sort_unstable();
                Ok(Recurrence::Monthly { days })
            }
            "yearly" => {
                let mut dates: Vec<MonthDay> = Vec::with_capacity(repeat_config.len());
                for raw in repeat_config {
                    let date: MonthDay = raw.parse()?;
                    if !dates.contains(&date) {
                        dates.push(date);
                    }
                }
                dates.sort_unstable();
                Ok(Recurrence::Yearly { dates })
            }
            other => Err(ValidationError::UnknownRepeatType(other.to_string())),
        }
    }

    /// Whether this rule fires on `date`, ignoring any task window.
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            Recurrence::Daily => true,
            Recurrence::Weekly { days } => days.contains(&date.weekday()),
            Recurrence::Monthly { days } => days.contains(&(date.day() as u8)),
            Recurrence::Yearly { dates } => dates
                .iter()
                .any(|md| u32::from(md.month) == date.month() && u32::from(md.day) == date.day()),
        }
    }
}

/// Wire representation: `repeat_type` plus a list of config strings.
#[derive(Serialize, Deserialize)]
struct RepeatSpec {
    repeat_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    repeat_config: Vec<String>,
}

impl TryFrom<RepeatSpec> for Recurrence {
    type Error = ValidationError;

    fn try_from(spec: RepeatSpec) -> Result<Self, Self::Error> {
        Recurrence::from_parts(&spec.repeat_type, &spec.repeat_config)
    }
}

impl From<Recurrence> for RepeatSpec {
    fn from(rule: Recurrence) -> Self {
        match rule {
            Recurrence::Daily => RepeatSpec {
                repeat_type: "daily".into(),
                repeat_config: Vec::new(),
            },
            Recurrence::Weekly { days } => RepeatSpec {
                repeat_type: "weekly".into(),
                repeat_config: days.iter().map(|d| d.to_string()).collect(),
            },
            Recurrence::Monthly { days } => RepeatSpec {
                repeat_type: "monthly".into(),
                repeat_config: days.iter().map(|d| d.to_string()).collect(),
            },
            Recurrence::Yearly { dates } => RepeatSpec {
                repeat_type: "yearly".into(),
                repeat_config: dates.iter().map(|d| d.to_string()).collect(),
            },
        }
    }
}
