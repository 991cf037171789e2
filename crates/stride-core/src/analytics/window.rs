//! Week, month, and per-goal windows over the day aggregator.
//!
//! The month and goal windows are task-count-weighted: total completed over
//! total due across the window, so days with more due tasks weigh more than
//! a plain mean of daily percentages would.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::day::{day_completion, due_tasks_on, is_completed_on};
use super::streak::current_streak;
use crate::model::{Completion, Goal, Task};

/// Trailing window for per-goal recent progress, in days.
const RECENT_PROGRESS_WINDOW_DAYS: i64 = 7;

/// Trailing window for per-goal performance scores, in days.
const GOAL_PERFORMANCE_WINDOW_DAYS: i64 = 30;

/// Number of calendar months in the monthly trend series.
pub const MONTH_TREND_LEN: u32 = 6;

/// One day in the weekly overview series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCompletion {
    /// Three-letter weekday label, e.g. "Mon".
    pub weekday: String,
    /// Completion percentage for the day, `[0, 100]`.
    pub completion: f64,
    pub date: NaiveDate,
}

/// One month in the trailing trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCompletion {
    /// Three-letter month label, e.g. "Jan".
    pub month: String,
    /// Rounded completion percentage, `0..=100`.
    pub value: u32,
}

/// Per-goal performance score over the trailing 30 days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalScore {
    pub name: String,
    /// Rounded percentage, `0..=100`.
    pub value: u32,
    pub color: String,
}

/// Today's headline numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    pub completion_rate: u32,
    pub current_streak: u32,
    pub total_tasks: usize,
    pub completed_tasks: usize,
}

/// Completion per day for the trailing week, oldest (6 days ago) first.
pub fn weekly_overview(
    completions: &[Completion],
    tasks: &[Task],
    today: NaiveDate,
) -> Vec<DayCompletion> {
    (0..7i64)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            DayCompletion {
                weekday: date.format("%a").to_string(),
                completion: day_completion(completions, tasks, date),
                date,
            }
        })
        .collect()
}

/// Task-count-weighted completion for the calendar month containing
/// `anchor`, in `[0, 100]`. A month where nothing was due reports 0.
pub fn month_completion(completions: &[Completion], tasks: &[Task], anchor: NaiveDate) -> f64 {
    let mut total_due = 0usize;
    let mut total_completed = 0usize;
    for day in 1..=days_in_month(anchor.year(), anchor.month()) {
        let Some(date) = NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), day) else {
            continue;
        };
        let due = due_tasks_on(tasks, date);
        total_due += due.len();
        total_completed += due
            .iter()
            .filter(|t| is_completed_on(completions, &t.id, date))
            .count();
    }
    if total_due == 0 {
        0.0
    } else {
        total_completed as f64 / total_due as f64 * 100.0
    }
}

/// Rounded month completion for the trailing months, oldest first.
pub fn monthly_trend(
    completions: &[Completion],
    tasks: &[Task],
    today: NaiveDate,
) -> Vec<MonthCompletion> {
    (0..MONTH_TREND_LEN)
        .rev()
        .map(|offset| {
            let anchor = months_back(today, offset);
            MonthCompletion {
                month: anchor.format("%b").to_string(),
                value: month_completion(completions, tasks, anchor).round() as u32,
            }
        })
        .collect()
}

/// Task-count-weighted completion for one goal over the trailing week.
///
/// The due check here deliberately skips the `is_active` filter: paused
/// tasks still count toward the goal's recent window.
pub fn goal_recent_progress(
    completions: &[Completion],
    tasks: &[Task],
    goal_id: &str,
    today: NaiveDate,
) -> f64 {
    let goal_tasks: Vec<&Task> = tasks.iter().filter(|t| t.goal_id == goal_id).collect();
    if goal_tasks.is_empty() {
        return 0.0;
    }

    let mut total_due = 0usize;
    let mut total_completed = 0usize;
    for offset in 0..RECENT_PROGRESS_WINDOW_DAYS {
        let date = today - Duration::days(offset);
        for task in goal_tasks.iter().filter(|t| t.is_due_on(date)) {
            total_due += 1;
            if is_completed_on(completions, &task.id, date) {
                total_completed += 1;
            }
        }
    }
    if total_due == 0 {
        0.0
    } else {
        total_completed as f64 / total_due as f64 * 100.0
    }
}

/// Thirty-day score per goal.
///
/// Each day scores `completed/due` when the goal has due tasks, and a full
/// 1.0 when it has none, so sparsely scheduled goals are not penalized for
/// their off days. A goal with no tasks at all scores 0.
pub fn goal_performance(
    goals: &[Goal],
    tasks: &[Task],
    completions: &[Completion],
    today: NaiveDate,
) -> Vec<GoalScore> {
    goals
        .iter()
        .map(|goal| {
            let goal_tasks: Vec<&Task> = tasks.iter().filter(|t| t.goal_id == goal.id).collect();
            if goal_tasks.is_empty() {
                return GoalScore {
                    name: goal.title.clone(),
                    value: 0,
                    color: goal.color.clone(),
                };
            }

            let mut total_score = 0.0;
            for offset in 0..GOAL_PERFORMANCE_WINDOW_DAYS {
                let date = today - Duration::days(offset);
                let due: Vec<&Task> = goal_tasks
                    .iter()
                    .copied()
                    .filter(|t| t.is_active && t.is_due_on(date))
                    .collect();
                if due.is_empty() {
                    total_score += 1.0;
                } else {
                    let completed = due
                        .iter()
                        .filter(|t| is_completed_on(completions, &t.id, date))
                        .count();
                    total_score += completed as f64 / due.len() as f64;
                }
            }
            let value =
                (total_score / GOAL_PERFORMANCE_WINDOW_DAYS as f64 * 100.0).round() as u32;
            GoalScore {
                name: goal.title.clone(),
                value,
                color: goal.color.clone(),
            }
        })
        .collect()
}

/// Headline numbers for the daily dashboard.
pub fn daily_summary(
    completions: &[Completion],
    tasks: &[Task],
    today: NaiveDate,
) -> DailySummary {
    let due = due_tasks_on(tasks, today);
    let completed = due
        .iter()
        .filter(|t| is_completed_on(completions, &t.id, today))
        .count();
    let completion_rate = if due.is_empty() {
        0
    } else {
        (completed as f64 / due.len() as f64 * 100.0).round() as u32
    };
    DailySummary {
        completion_rate,
        current_streak: current_streak(completions, tasks, today),
        total_tasks: due.len(),
        completed_tasks: completed,
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 0,
    }
}

/// First day of the month `offset` months before `date`'s month.
fn months_back(date: NaiveDate, offset: u32) -> NaiveDate {
    let months = date.year() * 12 + date.month0() as i32 - offset as i32;
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}
