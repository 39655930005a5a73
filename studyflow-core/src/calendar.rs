//! Calendar view helpers: bucket tasks by due day and list upcoming work.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::task::{Task, urgency_order};

/// One day's worth of scheduled work on the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBucket {
    pub date: NaiveDate,
    pub tasks: Vec<Task>,
}

/// Group incomplete tasks with a deadline into per-day buckets.
///
/// Buckets come back in date order; tasks inside a bucket are in urgency
/// order. Tasks without a due date have no calendar day and are left out.
pub fn group_by_due_date(tasks: &[Task]) -> Vec<DayBucket> {
    let mut days: BTreeMap<NaiveDate, Vec<Task>> = BTreeMap::new();
    for task in tasks.iter().filter(|t| !t.is_completed) {
        if let Some(due) = task.due_date {
            days.entry(due.date_naive()).or_default().push(task.clone());
        }
    }

    days.into_iter()
        .map(|(date, mut tasks)| {
            tasks.sort_by(urgency_order);
            DayBucket { date, tasks }
        })
        .collect()
}

/// Incomplete tasks due within `horizon_days` of `now` (overdue included),
/// nearest deadline first.
pub fn upcoming(tasks: &[Task], now: DateTime<Utc>, horizon_days: i64) -> Vec<Task> {
    let cutoff = now + Duration::days(horizon_days.max(0));
    let mut due_soon: Vec<Task> = tasks
        .iter()
        .filter(|t| !t.is_completed)
        .filter(|t| t.due_date.is_some_and(|d| d <= cutoff))
        .cloned()
        .collect();
    due_soon.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    due_soon
}
