//! Study preference settings, one document per user in the external store.
//!
//! The core never materializes settings on its own; the hosting layer passes
//! them in (falling back to `StudySettings::default()` when the user has not
//! saved any).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySettings {
    /// Upper bound on total allocated focus time: hours × 60 minutes.
    pub study_hours_per_day: i32,
    pub focus_duration_minutes: i32,
    pub short_break_minutes: i32,
    pub long_break_minutes: i32,
    /// Every Nth focus block is followed by a long break instead of a short
    /// one. Zero or negative disables long breaks.
    pub sessions_before_long_break: i32,
    /// "HH:mm" wall-clock anchor for the first block.
    pub preferred_study_start_time: String,
}

impl Default for StudySettings {
    fn default() -> Self {
        Self {
            study_hours_per_day: 4,
            focus_duration_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            sessions_before_long_break: 4,
            preferred_study_start_time: "09:00".to_string(),
        }
    }
}

impl StudySettings {
    /// Copy with hour/duration fields clamped to at least 1.
    ///
    /// Non-positive durations would stall the allocator cursor or emit
    /// zero-length blocks, so all plan arithmetic runs on the sanitized
    /// copy. The cadence field is left alone; the long-break check guards
    /// it where it is used.
    pub fn sanitized(&self) -> Self {
        Self {
            study_hours_per_day: self.study_hours_per_day.max(1),
            focus_duration_minutes: self.focus_duration_minutes.max(1),
            short_break_minutes: self.short_break_minutes.max(1),
            long_break_minutes: self.long_break_minutes.max(1),
            sessions_before_long_break: self.sessions_before_long_break,
            preferred_study_start_time: self.preferred_study_start_time.clone(),
        }
    }

    /// Total allocatable focus minutes per day.
    pub fn daily_budget_minutes(&self) -> i32 {
        self.study_hours_per_day.max(1) * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = StudySettings::default();
        assert_eq!(s.study_hours_per_day, 4);
        assert_eq!(s.focus_duration_minutes, 25);
        assert_eq!(s.short_break_minutes, 5);
        assert_eq!(s.long_break_minutes, 15);
        assert_eq!(s.sessions_before_long_break, 4);
        assert_eq!(s.preferred_study_start_time, "09:00");
        assert_eq!(s.daily_budget_minutes(), 240);
    }

    #[test]
    fn test_sanitized_clamps_durations_not_cadence() {
        let s = StudySettings {
            study_hours_per_day: 0,
            focus_duration_minutes: -5,
            short_break_minutes: 0,
            long_break_minutes: 0,
            sessions_before_long_break: 0,
            preferred_study_start_time: "09:00".to_string(),
        };

        let clean = s.sanitized();
        assert_eq!(clean.study_hours_per_day, 1);
        assert_eq!(clean.focus_duration_minutes, 1);
        assert_eq!(clean.short_break_minutes, 1);
        assert_eq!(clean.long_break_minutes, 1);
        assert_eq!(clean.sessions_before_long_break, 0);
        assert_eq!(s.daily_budget_minutes(), 60);
    }

    #[test]
    fn test_decodes_store_document() {
        let json = r#"{
            "studyHoursPerDay": 6,
            "focusDurationMinutes": 50,
            "shortBreakMinutes": 10,
            "longBreakMinutes": 30,
            "sessionsBeforeLongBreak": 2,
            "preferredStudyStartTime": "08:30"
        }"#;

        let s: StudySettings = serde_json::from_str(json).unwrap();
        assert_eq!(s.focus_duration_minutes, 50);
        assert_eq!(s.daily_budget_minutes(), 360);
    }
}
