//! Consecutive successful-day streaks.
//!
//! A day is successful when nothing was due or every due task has a
//! completed record. The empty case is a vacuous success here, unlike the
//! day aggregator where an empty day reports 0%.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::day::{due_tasks_on, is_completed_on};
use crate::model::{Completion, Task};

/// Hard bound on the backward walk. A guard against runaway loops, not a
/// domain limit.
pub const STREAK_WALK_LIMIT: u32 = 1000;

/// How far back the best-streak scan looks. Older history is invisible.
pub const BEST_STREAK_LOOKBACK_DAYS: u32 = 365;

/// Current and best streak, as presented together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakStats {
    pub current: u32,
    pub best: u32,
}

fn is_day_successful(completions: &[Completion], tasks: &[Task], date: NaiveDate) -> bool {
    due_tasks_on(tasks, date)
        .iter()
        .all(|t| is_completed_on(completions, &t.id, date))
}

/// Count of consecutive successful days ending at `today`.
///
/// An unfinished `today` does not break the run: the walk anchors at
/// yesterday instead, so the streak survives until the day actually ends.
pub fn current_streak(completions: &[Completion], tasks: &[Task], today: NaiveDate) -> u32 {
    let mut day = today;
    if !is_day_successful(completions, tasks, day) {
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => return 0,
        }
    }

    let mut streak = 0;
    while streak < STREAK_WALK_LIMIT && is_day_successful(completions, tasks, day) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

/// Longest run of consecutive successful days within the lookback window.
pub fn best_streak(completions: &[Completion], tasks: &[Task], today: NaiveDate) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut day = today;
    for _ in 0..BEST_STREAK_LOOKBACK_DAYS {
        if is_day_successful(completions, tasks, day) {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    best
}

/// Current and best streak in one report.
pub fn streak_stats(completions: &[Completion], tasks: &[Task], today: NaiveDate) -> StreakStats {
    StreakStats {
        current: current_streak(completions, tasks, today),
        best: best_streak(completions, tasks, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Completion, Recurrence, Task};
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// One daily task plus completions for the given day offsets back from
    /// `today`.
    fn history(today: NaiveDate, completed_offsets: &[i64]) -> (Vec<Task>, Vec<Completion>) {
        let task = Task::new("g", "t", Recurrence::Daily, today - Duration::days(400));
        let completions = completed_offsets
            .iter()
            .map(|offset| Completion::new(&task.id, today - Duration::days(*offset)))
            .collect();
        (vec![task], completions)
    }

    #[test]
    fn zero_when_today_and_yesterday_failed() {
        let today = date(2024, 6, 15);
        let (tasks, completions) = history(today, &[2, 3]);
        assert_eq!(current_streak(&completions, &tasks, today), 0);
    }

    #[test]
    fn counts_five_fully_completed_days() {
        let today = date(2024, 6, 15);
        let (tasks, completions) = history(today, &[0, 1, 2, 3, 4]);
        assert_eq!(current_streak(&completions, &tasks, today), 5);
    }

    #[test]
    fn unfinished_today_does_not_break_the_run() {
        let today = date(2024, 6, 15);
        let (tasks, completions) = history(today, &[1, 2, 3]);
        assert_eq!(current_streak(&completions, &tasks, today), 3);
    }

    #[test]
    fn empty_due_set_is_vacuous_success() {
        // No tasks at all: every day succeeds and the walk runs to the cap.
        let today = date(2024, 6, 15);
        assert_eq!(current_streak(&[], &[], today), STREAK_WALK_LIMIT);
    }

    #[test]
    fn streak_starts_after_task_start_date() {
        let today = date(2024, 6, 15);
        let task = Task::new("g", "t", Recurrence::Daily, today - Duration::days(2));
        let completions = vec![
            Completion::new(&task.id, today),
            Completion::new(&task.id, today - Duration::days(1)),
        ];
        // Day -2 is due but uncompleted; days before the start date are
        // vacuous successes, so the cap would be hit without that gap.
        assert_eq!(current_streak(&completions, &[task], today), 2);
    }

    #[test]
    fn best_streak_finds_interior_run() {
        let today = date(2024, 6, 15);
        let (tasks, completions) = history(today, &[0, 5, 6, 7, 8]);
        // Current run is 1 (today), but days 5..=8 back form a run of 4.
        assert_eq!(current_streak(&completions, &tasks, today), 1);
        assert_eq!(best_streak(&completions, &tasks, today), 4);
    }

    #[test]
    fn best_streak_never_exceeds_lookback() {
        let today = date(2024, 6, 15);
        assert_eq!(best_streak(&[], &[], today), BEST_STREAK_LOOKBACK_DAYS);

        // A task completed every day for 400 days still caps at 365.
        let offsets: Vec<i64> = (0..400).collect();
        let (tasks, completions) = history(today, &offsets);
        assert_eq!(
            best_streak(&completions, &tasks, today),
            BEST_STREAK_LOOKBACK_DAYS
        );
    }

    #[test]
    fn streak_stats_combines_both() {
        let today = date(2024, 6, 15);
        let (tasks, completions) = history(today, &[0, 1, 4, 5, 6]);
        let stats = streak_stats(&completions, &tasks, today);
        assert_eq!(stats.current, 2);
        assert_eq!(stats.best, 3);
    }
}
