//! studyflow-core: pure computation behind the study planner, roadmap, and
//! dashboard views.
//!
//! The hosting layer fetches tasks, settings, and roadmap documents from the
//! realtime store and hands plain collections in; everything here is a
//! deterministic function of its arguments with no I/O and no retained
//! state. Recomputation on change is the caller's concern.

pub mod allocator;
pub mod calendar;
pub mod clock;
pub mod pomodoro;
pub mod roadmap;
pub mod settings;
pub mod stats;
pub mod task;

pub use allocator::{StudyBlock, allocate, select_focus_task};
pub use calendar::{DayBucket, group_by_due_date, upcoming};
pub use clock::ClockTime;
pub use pomodoro::{PomodoroPhase, cycle, next_break, phase_duration_minutes};
pub use roadmap::{
    Difficulty, Milestone, RoadmapStats, Step, aggregate, milestone_progress, ordered_steps,
};
pub use settings::StudySettings;
pub use stats::{TaskStats, summarize};
pub use task::{CategoryRef, Priority, Task, urgency_order};
