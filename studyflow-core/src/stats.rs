//! Dashboard summary over the task list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::Task;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Incomplete tasks whose deadline has already passed.
    pub overdue: usize,
    /// Incomplete tasks due on `now`'s UTC calendar date.
    pub due_today: usize,
    pub completion_percent: u32,
}

/// Summarize the task list for the dashboard cards. `now` is supplied by the
/// caller so the summary stays a pure function.
pub fn summarize(tasks: &[Task], now: DateTime<Utc>) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.is_completed).count();
    let today = now.date_naive();

    let overdue = tasks
        .iter()
        .filter(|t| !t.is_completed)
        .filter(|t| t.due_date.is_some_and(|d| d < now))
        .count();
    let due_today = tasks
        .iter()
        .filter(|t| !t.is_completed)
        .filter(|t| t.due_date.is_some_and(|d| d.date_naive() == today))
        .count();

    let completion_percent = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    };

    TaskStats {
        total,
        completed,
        pending: total - completed,
        overdue,
        due_today,
        completion_percent,
    }
}
