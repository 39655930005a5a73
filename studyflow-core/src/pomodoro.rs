//! Pomodoro phase cadence derived from study settings.
//!
//! The timer UI owns ticking and persistence; this module only answers
//! "what phase comes next and how long is it".

use serde::{Deserialize, Serialize};

use crate::settings::StudySettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PomodoroPhase {
    #[serde(rename = "focus")]
    Focus,
    #[serde(rename = "short_break")]
    ShortBreak,
    #[serde(rename = "long_break")]
    LongBreak,
}

/// Break phase following the Nth completed focus session. A non-positive
/// cadence disables long breaks entirely.
pub fn next_break(completed_focus_sessions: i32, settings: &StudySettings) -> PomodoroPhase {
    let cadence = settings.sessions_before_long_break;
    if cadence > 0 && completed_focus_sessions > 0 && completed_focus_sessions % cadence == 0 {
        PomodoroPhase::LongBreak
    } else {
        PomodoroPhase::ShortBreak
    }
}

pub fn phase_duration_minutes(phase: PomodoroPhase, settings: &StudySettings) -> i32 {
    let settings = settings.sanitized();
    match phase {
        PomodoroPhase::Focus => settings.focus_duration_minutes,
        PomodoroPhase::ShortBreak => settings.short_break_minutes,
        PomodoroPhase::LongBreak => settings.long_break_minutes,
    }
}

/// Full phase/duration sequence for a sitting of `sessions` focus blocks,
/// ending on the final focus phase (no trailing break).
pub fn cycle(settings: &StudySettings, sessions: i32) -> Vec<(PomodoroPhase, i32)> {
    let mut phases = Vec::new();
    for n in 1..=sessions.max(0) {
        phases.push((
            PomodoroPhase::Focus,
            phase_duration_minutes(PomodoroPhase::Focus, settings),
        ));
        if n < sessions {
            let brk = next_break(n, settings);
            phases.push((brk, phase_duration_minutes(brk, settings)));
        }
    }
    phases
}
