//! The recurrence-and-analytics engine.
//!
//! Pure functions over immutable snapshots. Data flows one way: task,
//! completion, and goal slices feed the due-date predicate, the day
//! aggregator rolls due/completed counts into a single-day percentage, and
//! the streak and window calculators roll days into runs and series.
//! Nothing here mutates its inputs, performs I/O, or keeps state between
//! calls; the caller supplies the reference date and is responsible for
//! snapshot consistency.

mod day;
mod streak;
mod window;

pub use day::{day_completion, due_tasks_on};
pub use streak::{
    best_streak, current_streak, streak_stats, StreakStats, BEST_STREAK_LOOKBACK_DAYS,
    STREAK_WALK_LIMIT,
};
pub use window::{
    daily_summary, goal_performance, goal_recent_progress, month_completion, monthly_trend,
    weekly_overview, DailySummary, DayCompletion, GoalScore, MonthCompletion, MONTH_TREND_LEN,
};
