//! Roadmap aggregation: completion stats and the next actionable milestone.
//!
//! Milestones arrive already joined with their steps; fetching is the
//! hosting layer's job. Everything here is a pure function recomputed when
//! any step's completion flag flips.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "beginner")]
    Beginner,
    #[serde(rename = "intermediate")]
    Intermediate,
    #[serde(rename = "advanced")]
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub is_completed: bool,
    pub position: i32,
    pub resource_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub position: i32,
    pub steps: Vec<Step>,
}

impl Milestone {
    pub fn has_incomplete_step(&self) -> bool {
        self.steps.iter().any(|s| !s.is_completed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStats {
    pub total_steps: usize,
    pub completed_steps: usize,
    /// 0-100, rounded. 0 for an empty roadmap.
    pub progress_percent: u32,
    /// First milestone by position with at least one incomplete step; None
    /// when everything is done or there are no milestones.
    pub next_milestone: Option<Milestone>,
}

fn percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    }
}

/// Compute roadmap-wide completion stats.
pub fn aggregate(milestones: &[Milestone]) -> RoadmapStats {
    let total_steps: usize = milestones.iter().map(|m| m.steps.len()).sum();
    let completed_steps = milestones
        .iter()
        .flat_map(|m| &m.steps)
        .filter(|s| s.is_completed)
        .count();

    // Stable on position ties, so fetch order breaks them.
    let mut ordered: Vec<&Milestone> = milestones.iter().collect();
    ordered.sort_by_key(|m| m.position);

    let next_milestone = ordered
        .into_iter()
        .find(|m| m.has_incomplete_step())
        .cloned();

    RoadmapStats {
        total_steps,
        completed_steps,
        progress_percent: percent(completed_steps, total_steps),
        next_milestone,
    }
}

/// Completion percentage scoped to one milestone's own steps, for the
/// per-milestone progress bars.
pub fn milestone_progress(milestone: &Milestone) -> u32 {
    let done = milestone.steps.iter().filter(|s| s.is_completed).count();
    percent(done, milestone.steps.len())
}

/// Steps in display order: position ascending, fetch order on ties.
pub fn ordered_steps(milestone: &Milestone) -> Vec<&Step> {
    let mut steps: Vec<&Step> = milestone.steps.iter().collect();
    steps.sort_by_key(|s| s.position);
    steps
}
