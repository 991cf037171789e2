//! Data model: goals, recurring tasks, and daily completions.
//!
//! Entities are created and deleted by the surrounding storage layer; the
//! analytics engine only ever reads them as immutable slices.

mod recurrence;
mod task;

pub use recurrence::{MonthDay, Recurrence};
pub use task::Task;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A goal groups related recurring tasks.
///
/// `icon` and `color` are display metadata carried through to the
/// per-goal analytics output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Create a goal with a fresh id.
    pub fn new(title: &str, icon: &str, color: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// Task priority. Display metadata only; the analytics ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A record asserting a specific task was completed on a specific date.
///
/// Callers toggle rather than duplicate, so at most one record should exist
/// per `(task_id, date)` pair. The engine tolerates duplicates anyway and
/// never counts a task twice for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    pub id: String,
    pub task_id: String,
    pub date: NaiveDate,
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Completion {
    /// Record a completed task for a date.
    pub fn new(task_id: &str, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            task_id: task_id.to_string(),
            date,
            is_completed: true,
            completed_at: Some(Utc::now()),
        }
    }
}
