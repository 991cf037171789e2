//! Snapshot persistence: the full data set as one JSON document.
//!
//! Reading all three collections from a single file gives the engine a
//! consistent unit of work; nothing else refreshes them mid-computation.

use std::path::Path;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Completion, Goal, Recurrence, Task};

/// Everything the analytics engine consumes, loaded in one unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub completions: Vec<Completion>,
}

impl Snapshot {
    /// Read and validate a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&content)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Write the snapshot as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Enforce the task invariants before the collections reach the
    /// engine.
    pub fn validate(&self) -> Result<()> {
        for task in &self.tasks {
            task.validate()?;
        }
        Ok(())
    }

    /// A small starter data set for first runs.
    pub fn starter(today: NaiveDate) -> Self {
        let health = Goal::new("Health", "heart", "#34d399").with_description("Move every day");
        let learning =
            Goal::new("Learning", "book", "#60a5fa").with_description("Keep the streak alive");

        let run = Task::new(
            &health.id,
            "Morning run",
            Recurrence::Weekly {
                days: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
            },
            today,
        )
        .with_schedule("07:00", 30);
        let stretch =
            Task::new(&health.id, "Stretch", Recurrence::Daily, today).with_schedule("08:00", 10);
        let reading = Task::new(&learning.id, "Read 20 pages", Recurrence::Daily, today)
            .with_schedule("21:00", 40);

        Snapshot {
            goals: vec![health, learning],
            tasks: vec![run, stretch, reading],
            completions: Vec::new(),
        }
    }
}
