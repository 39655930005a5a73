//! Task model shared by the allocator, calendar view, and dashboard stats.
//!
//! Tasks are owned by the external document store; this crate only ever sees
//! read-only snapshots handed in by the hosting layer.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "high")]
    High,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "low")]
    Low,
}

impl Priority {
    /// Numeric urgency rank, lower = more urgent.
    pub fn urgency_rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// Display reference to a task category (name + color chip).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub priority: Priority,

    /// Optional deadline (UTC). Absence means "no deadline".
    pub due_date: Option<DateTime<Utc>>,
    pub is_completed: bool,
    pub category: Option<CategoryRef>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            priority: Priority::Medium,
            due_date: None,
            is_completed: false,
            category: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn with_category(mut self, category: CategoryRef) -> Self {
        self.category = Some(category);
        self
    }

    pub fn completed(mut self) -> Self {
        self.is_completed = true;
        self
    }

    /// Only incomplete tasks participate in allocation and focus selection.
    pub fn is_eligible(&self) -> bool {
        !self.is_completed
    }
}

/// Shared urgency comparator: priority rank first, then earliest due date,
/// with tasks lacking a due date sorting after all tasks that have one.
///
/// Full ties compare Equal so a stable sort keeps the fetch order.
pub fn urgency_order(a: &Task, b: &Task) -> Ordering {
    a.priority
        .urgency_rank()
        .cmp(&b.priority.urgency_rank())
        .then_with(|| match (a.due_date, b.due_date) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_high_priority_outranks_earlier_due_date() {
        let due = Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap();
        let a = Task::new("a", "no deadline").with_priority(Priority::High);
        let b = Task::new("b", "due someday").with_due_date(due);

        assert_eq!(urgency_order(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_missing_due_date_sorts_last_within_priority() {
        let due = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
        let dated = Task::new("a", "dated").with_due_date(due);
        let undated = Task::new("b", "undated");

        assert_eq!(urgency_order(&dated, &undated), Ordering::Less);
        assert_eq!(urgency_order(&undated, &dated), Ordering::Greater);
    }

    #[test]
    fn test_earlier_due_date_wins_same_priority() {
        let soon = Utc.with_ymd_and_hms(2026, 9, 1, 8, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2026, 9, 3, 8, 0, 0).unwrap();
        let a = Task::new("a", "soon").with_due_date(soon);
        let b = Task::new("b", "later").with_due_date(later);

        assert_eq!(urgency_order(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_full_tie_is_equal() {
        let a = Task::new("a", "one");
        let b = Task::new("b", "two");
        assert_eq!(urgency_order(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_decodes_store_document() {
        let json = r##"{
            "id": "t1",
            "title": "Read chapter 4",
            "priority": "high",
            "dueDate": "2026-09-01T12:00:00Z",
            "isCompleted": false,
            "category": { "id": "c1", "name": "Math", "color": "#f87171" }
        }"##;

        let t: Task = serde_json::from_str(json).unwrap();
        assert_eq!(t.priority, Priority::High);
        assert!(t.is_eligible());
        assert_eq!(t.category.as_ref().unwrap().name, "Math");
        assert!(t.due_date.is_some());
    }

    #[test]
    fn test_decodes_document_without_optionals() {
        let json = r#"{
            "id": "t2",
            "title": "Flashcards",
            "priority": "low",
            "dueDate": null,
            "isCompleted": true,
            "category": null
        }"#;

        let t: Task = serde_json::from_str(json).unwrap();
        assert!(t.due_date.is_none());
        assert!(!t.is_eligible());
    }
}
