use std::error::Error;
use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use stride_core::due_tasks_on;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Tasks due on a date (defaults to today)
    Due {
        /// Date to check, YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
    /// All tasks in the snapshot
    List {
        /// Restrict to one goal id
        #[arg(long)]
        goal: Option<String>,
    },
}

pub fn run(action: TaskAction, snapshot_flag: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let snapshot = super::load_snapshot(snapshot_flag)?;

    match action {
        TaskAction::Due { date } => {
            let date = match date {
                Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")?,
                None => Local::now().date_naive(),
            };
            let due = due_tasks_on(&snapshot.tasks, date);
            println!("{}", serde_json::to_string_pretty(&due)?);
        }
        TaskAction::List { goal } => {
            let tasks: Vec<_> = snapshot
                .tasks
                .iter()
                .filter(|t| goal.as_deref().map_or(true, |g| t.goal_id == g))
                .collect();
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
    }
    Ok(())
}
