use std::error::Error;
use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use serde::Serialize;
use stride_core::analytics;

/// Single-month report printed by `stats month`.
#[derive(Serialize)]
struct MonthReport {
    month: String,
    value: u32,
}

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's completion rate, streak, and task counts
    Today,
    /// Completion per day for the trailing week
    Week,
    /// Completion for one calendar month
    Month {
        /// Month to aggregate, YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// Monthly completion for the trailing six months
    Trend,
    /// Current and best streak
    Streak,
    /// Thirty-day score per goal
    Goals,
}

pub fn run(action: StatsAction, snapshot_flag: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let snapshot = super::load_snapshot(snapshot_flag)?;
    let today = Local::now().date_naive();

    match action {
        StatsAction::Today => {
            let summary = analytics::daily_summary(&snapshot.completions, &snapshot.tasks, today);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StatsAction::Week => {
            let series = analytics::weekly_overview(&snapshot.completions, &snapshot.tasks, today);
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
        StatsAction::Month { month } => {
            let anchor = match month {
                Some(raw) => parse_month(&raw)?,
                None => today,
            };
            let value = analytics::month_completion(&snapshot.completions, &snapshot.tasks, anchor);
            let report = MonthReport {
                month: anchor.format("%Y-%m").to_string(),
                value: value.round() as u32,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        StatsAction::Trend => {
            let series = analytics::monthly_trend(&snapshot.completions, &snapshot.tasks, today);
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
        StatsAction::Streak => {
            let stats = analytics::streak_stats(&snapshot.completions, &snapshot.tasks, today);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        StatsAction::Goals => {
            let scores = analytics::goal_performance(
                &snapshot.goals,
                &snapshot.tasks,
                &snapshot.completions,
                today,
            );
            println!("{}", serde_json::to_string_pretty(&scores)?);
        }
    }
    Ok(())
}

/// Parse a YYYY-MM argument into the first day of that month.
fn parse_month(raw: &str) -> Result<NaiveDate, Box<dyn Error>> {
    let date = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")?;
    Ok(date)
}
