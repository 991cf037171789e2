//! # Stride Core Library
//!
//! Core business logic for Stride, a personal goal and task tracker. The
//! centerpiece is the recurrence-and-analytics engine: pure functions that
//! decide which tasks are due on a calendar date and aggregate due/completed
//! counts into completion rates, streaks, and per-goal scores.
//!
//! ## Architecture
//!
//! - **Model**: Goals, recurring Tasks, and daily Completions, with
//!   recurrence rules validated at construction
//! - **Analytics**: stateless snapshot-in, numbers-out computations; the
//!   caller passes the reference date explicitly, so results are
//!   deterministic and safe to recompute at any time
//! - **Storage**: TOML configuration and a JSON snapshot file that own the
//!   collections the engine consumes as slices
//!
//! The CLI binary in `stride-cli` is a thin presentation layer over this
//! crate.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use stride_core::{day_completion, Completion, Recurrence, Task};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let task = Task::new("goal-1", "Morning run", Recurrence::Daily, start);
//! let done = Completion::new(&task.id, start);
//!
//! assert_eq!(day_completion(&[done], &[task], start), 100.0);
//! ```

pub mod analytics;
pub mod error;
pub mod model;
pub mod storage;

pub use analytics::{
    best_streak, current_streak, daily_summary, day_completion, due_tasks_on, goal_performance,
    goal_recent_progress, month_completion, monthly_trend, streak_stats, weekly_overview,
    DailySummary, DayCompletion, GoalScore, MonthCompletion, StreakStats,
};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use model::{Completion, Goal, MonthDay, Priority, Recurrence, Task};
pub use storage::{data_dir, Config, Snapshot};
