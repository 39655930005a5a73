//! Daily study-plan allocator: greedy single-pass packing of eligible tasks
//! into time-boxed focus blocks.
//!
//! The plan is derived view state. The hosting layer recomputes it whenever
//! the task list or settings change; nothing here is persisted.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::settings::StudySettings;
use crate::task::{CategoryRef, Priority, Task, urgency_order};

/// One scheduled study interval mapped to exactly one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyBlock {
    pub task_id: String,
    pub task_title: String,
    pub priority: Priority,
    pub duration_minutes: i32,
    pub start_time: ClockTime,
    pub category: Option<CategoryRef>,
}

/// Build today's plan: one block per task, most urgent first, until another
/// full focus block no longer fits in the daily budget.
///
/// Completed tasks are ignored. Tasks are never split across blocks, and
/// tasks beyond the budget are simply dropped. The sort is stable, so tasks
/// that tie on priority and due date keep their fetch order.
pub fn allocate(tasks: &[Task], settings: &StudySettings) -> Vec<StudyBlock> {
    let settings = settings.sanitized();
    let budget = settings.daily_budget_minutes();
    let focus = settings.focus_duration_minutes;

    let mut eligible: Vec<&Task> = tasks.iter().filter(|t| t.is_eligible()).collect();
    eligible.sort_by(|a, b| urgency_order(a, b));

    // An unparseable anchor falls back to the default start instead of
    // failing the whole plan.
    let mut cursor = ClockTime::parse(&settings.preferred_study_start_time)
        .unwrap_or_else(|_| ClockTime::from_minutes(9 * 60));

    let mut blocks = Vec::new();
    let mut used_minutes = 0;
    let mut blocks_placed = 0;

    for task in eligible {
        if used_minutes + focus > budget {
            break;
        }

        blocks.push(StudyBlock {
            task_id: task.id.clone(),
            task_title: task.title.clone(),
            priority: task.priority,
            duration_minutes: focus,
            start_time: cursor,
            category: task.category.clone(),
        });

        used_minutes += focus;
        blocks_placed += 1;
        cursor = cursor.plus_minutes(focus + break_after(blocks_placed, &settings));
    }

    blocks
}

/// Break length after the Nth placed block. A non-positive cadence means
/// long breaks never fire.
fn break_after(blocks_placed: i32, settings: &StudySettings) -> i32 {
    let cadence = settings.sessions_before_long_break;
    if cadence > 0 && blocks_placed % cadence == 0 {
        settings.long_break_minutes
    } else {
        settings.short_break_minutes
    }
}

/// Pick the single most urgent eligible task, or None when every task is
/// done.
///
/// Same comparator as `allocate`, keeping the first task on full ties, so
/// the result is always the task behind the first block of a non-empty plan.
pub fn select_focus_task(tasks: &[Task]) -> Option<&Task> {
    let mut best: Option<&Task> = None;
    for task in tasks.iter().filter(|t| t.is_eligible()) {
        best = match best {
            Some(current) if urgency_order(task, current) == Ordering::Less => Some(task),
            Some(current) => Some(current),
            None => Some(task),
        };
    }
    best
}
