//! Single-day completion aggregation.

use chrono::NaiveDate;

use crate::model::{Completion, Task};

/// Active tasks due on `date`.
pub fn due_tasks_on(tasks: &[Task], date: NaiveDate) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| t.is_active && t.is_due_on(date))
        .collect()
}

/// Whether `task_id` has at least one completed record for `date`.
///
/// Duplicate rows for the same pair are tolerated and never counted twice.
pub(super) fn is_completed_on(completions: &[Completion], task_id: &str, date: NaiveDate) -> bool {
    completions
        .iter()
        .any(|c| c.task_id == task_id && c.date == date && c.is_completed)
}

/// Percentage of due tasks completed on `date`, in `[0, 100]`.
///
/// A day with nothing scheduled reports 0 so trend series stay flat; the
/// streak calculator treats the same day as a success instead.
pub fn day_completion(completions: &[Completion], tasks: &[Task], date: NaiveDate) -> f64 {
    let due = due_tasks_on(tasks, date);
    if due.is_empty() {
        return 0.0;
    }
    let completed = due
        .iter()
        .filter(|t| is_completed_on(completions, &t.id, date))
        .count();
    completed as f64 / due.len() as f64 * 100.0
}
