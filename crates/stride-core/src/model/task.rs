//! Task type and the due-date predicate.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::model::{Priority, Recurrence};

/// A recurring task attached to a goal.
///
/// The recurrence pair (`repeat_type`/`repeat_config`) is flattened into the
/// task on the wire and validated into a [`Recurrence`] on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub goal_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Scheduled start within the day, "HH:mm".
    pub start_time: String,
    /// Planned duration in minutes.
    pub duration_minutes: u32,
    #[serde(flatten)]
    pub repeat: Recurrence,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    #[serde(default)]
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create an active task with a fresh id and default schedule.
    pub fn new(goal_id: &str, title: &str, repeat: Recurrence, start_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            goal_id: goal_id.to_string(),
            title: title.to_string(),
            description: String::new(),
            start_time: "09:00".to_string(),
            duration_minutes: 30,
            repeat,
            start_date,
            end_date: None,
            is_active: true,
            priority: Priority::default(),
            created_at: Utc::now(),
        }
    }

    /// Set the start time and duration.
    pub fn with_schedule(mut self, start_time: &str, duration_minutes: u32) -> Self {
        self.start_time = start_time.to_string();
        self.duration_minutes = duration_minutes;
        self
    }

    /// Set the end of the active window.
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Whether the task occurs on `date`.
    ///
    /// False for any date outside the `start_date..=end_date` window, then
    /// decided by the recurrence rule. Total over all dates; never fails.
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        if date < self.start_date {
            return false;
        }
        if let Some(end) = self.end_date {
            if date > end {
                return false;
            }
        }
        self.repeat.matches(date)
    }

    /// Check the data-model invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(end) = self.end_date {
            if self.start_date > end {
                return Err(ValidationError::InvalidDateRange {
                    task: self.id.clone(),
                    start: self.start_date,
                    end,
                });
            }
        }
        if NaiveTime::parse_from_str(&self.start_time, "%H:%M").is_err() {
            return Err(ValidationError::InvalidStartTime {
                value: self.start_time.clone(),
            });
        }
        if self.duration_minutes == 0 {
            return Err(ValidationError::InvalidDuration {
                task: self.id.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn not_due_before_start_date() {
        let task = Task::new("g", "t", Recurrence::Daily, date(2024, 1, 10));
        assert!(!task.is_due_on(date(2024, 1, 9)));
        assert!(task.is_due_on(date(2024, 1, 10)));
    }

    #[test]
    fn not_due_after_end_date() {
        let task = Task::new("g", "t", Recurrence::Daily, date(2024, 1, 1))
            .with_end_date(date(2024, 1, 31));
        assert!(task.is_due_on(date(2024, 1, 31)));
        assert!(!task.is_due_on(date(2024, 2, 1)));
    }

    #[test]
    fn weekly_task_due_exactly_on_configured_weekdays() {
        let task = Task::new(
            "g",
            "t",
            Recurrence::Weekly {
                days: vec![Weekday::Mon, Weekday::Wed],
            },
            date(2024, 1, 1),
        );

        // 2024-01-08 .. 2024-01-14 is Monday..Sunday
        let expectations = [true, false, true, false, false, false, false];
        for (offset, expected) in expectations.iter().enumerate() {
            let d = date(2024, 1, 8 + offset as u32);
            assert_eq!(task.is_due_on(d), *expected, "offset {offset}");
        }
    }

    #[test]
    fn task_wire_format_roundtrip() {
        let json = r#"{
            "id": "t-1",
            "goal_id": "g-1",
            "title": "Run",
            "start_time": "07:00",
            "duration_minutes": 30,
            "repeat_type": "weekly",
            "repeat_config": ["Mon", "Wed"],
            "start_date": "2024-01-01",
            "is_active": true,
            "priority": "high",
            "created_at": "2024-01-01T00:00:00Z"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(
            task.repeat,
            Recurrence::Weekly {
                days: vec![Weekday::Mon, Weekday::Wed]
            }
        );
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.start_date, date(2024, 1, 1));
        assert_eq!(task.end_date, None);

        let reencoded = serde_json::to_string(&task).unwrap();
        assert!(reencoded.contains("\"repeat_type\":\"weekly\""));
        let decoded: Task = serde_json::from_str(&reencoded).unwrap();
        assert_eq!(decoded.repeat, task.repeat);
    }

    #[test]
    fn unknown_repeat_type_is_rejected_at_parse_time() {
        let json = r#"{
            "id": "t-1",
            "goal_id": "g-1",
            "title": "Run",
            "start_time": "07:00",
            "duration_minutes": 30,
            "repeat_type": "hourly",
            "start_date": "2024-01-01",
            "is_active": true,
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn validate_rejects_inverted_date_range() {
        let task = Task::new("g", "t", Recurrence::Daily, date(2024, 2, 1))
            .with_end_date(date(2024, 1, 1));
        assert!(matches!(
            task.validate(),
            Err(ValidationError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn validate_rejects_bad_start_time_and_zero_duration() {
        let task =
            Task::new("g", "t", Recurrence::Daily, date(2024, 1, 1)).with_schedule("25:99", 30);
        assert!(matches!(
            task.validate(),
            Err(ValidationError::InvalidStartTime { .. })
        ));

        let task =
            Task::new("g", "t", Recurrence::Daily, date(2024, 1, 1)).with_schedule("08:00", 0);
        assert!(matches!(
            task.validate(),
            Err(ValidationError::InvalidDuration { .. })
        ));
    }

    proptest! {
        #[test]
        fn never_due_before_start(year in 2020i32..2030, ordinal in 1u32..=365, back in 1i64..1000) {
            let start = NaiveDate::from_yo_opt(year, ordinal).unwrap();
            let task = Task::new("g", "t", Recurrence::Daily, start);
            let probe = start - chrono::Duration::days(back);
            prop_assert!(!task.is_due_on(probe));
        }

        #[test]
        fn daily_due_on_every_in_window_date(ordinal in 1u32..=330, span in 0i64..30) {
            let start = NaiveDate::from_yo_opt(2024, ordinal).unwrap();
            let end = start + chrono::Duration::days(30);
            let task = Task::new("g", "t", Recurrence::Daily, start).with_end_date(end);
            let probe = start + chrono::Duration::days(span);
            prop_assert!(task.is_due_on(probe));
        }
    }
}
