//! Day planner
//!
//! Fit wellbeing activities into a fixed block of minutes. Points follow
//! each activity's priority; finishing the day adds bonuses for covering
//! every category and every priority level.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::content::{Activity, ActivityCategory, Priority, ACTIVITIES};

/// Minutes available in the planned block
pub const DAY_BUDGET_MINUTES: u32 = 240;
/// Bonus when every activity category is scheduled
pub const CATEGORY_BONUS: u32 = 40;
/// Bonus when every priority level is scheduled
pub const PRIORITY_BONUS: u32 = 30;

/// Final tally of a finished day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub base_score: u32,
    pub category_bonus: u32,
    pub priority_bonus: u32,
    pub activities: usize,
    pub minutes_used: u32,
}

impl PlanSummary {
    pub fn total(&self) -> u32 {
        self.base_score + self.category_bonus + self.priority_bonus
    }

    pub fn bonus(&self) -> u32 {
        self.category_bonus + self.priority_bonus
    }
}

/// A day being planned
#[derive(Debug, Clone)]
pub struct DayPlan {
    activities: &'static [Activity],
    selected: Vec<usize>,
    minutes_left: u32,
    score: u32,
    summary: Option<PlanSummary>,
}

impl Default for DayPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl DayPlan {
    pub fn new() -> Self {
        Self {
            activities: &ACTIVITIES,
            selected: Vec::new(),
            minutes_left: DAY_BUDGET_MINUTES,
            score: 0,
            summary: None,
        }
    }

    pub fn activities(&self) -> &'static [Activity] {
        self.activities
    }

    /// Scheduled activities in the order they were added
    pub fn selected(&self) -> impl Iterator<Item = &'static Activity> + '_ {
        self.selected.iter().filter_map(|&i| self.activities.get(i))
    }

    pub fn selected_len(&self) -> usize {
        self.selected.len()
    }

    pub fn minutes_left(&self) -> u32 {
        self.minutes_left
    }

    pub fn minutes_used(&self) -> u32 {
        DAY_BUDGET_MINUTES - self.minutes_left
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn summary(&self) -> Option<PlanSummary> {
        self.summary
    }

    pub fn is_finished(&self) -> bool {
        self.summary.is_some()
    }

    pub fn fits(&self, index: usize) -> bool {
        self.activities
            .get(index)
            .map_or(false, |activity| activity.minutes <= self.minutes_left)
    }

    /// Schedule the activity at `index`. Returns the points awarded, or
    /// `None` when it does not fit or the day is finished.
    pub fn add(&mut self, index: usize) -> Option<u32> {
        if self.is_finished() {
            debug!("add ignored on a finished plan");
            return None;
        }
        let activity = self.activities.get(index)?;
        if activity.minutes > self.minutes_left {
            debug!(activity = activity.name, "Not enough time left");
            return None;
        }

        let points = activity.priority.points();
        self.selected.push(index);
        self.minutes_left -= activity.minutes;
        self.score += points;
        Some(points)
    }

    /// Unschedule the activity at `position` in the plan. Returns the points
    /// deducted.
    pub fn remove(&mut self, position: usize) -> Option<u32> {
        if self.is_finished() || position >= self.selected.len() {
            return None;
        }
        let index = self.selected.remove(position);
        let activity = self.activities.get(index)?;
        let points = activity.priority.points();
        self.minutes_left = (self.minutes_left + activity.minutes).min(DAY_BUDGET_MINUTES);
        self.score = self.score.saturating_sub(points);
        Some(points)
    }

    /// End the day and compute the balance bonuses. Needs at least one
    /// scheduled activity; finishing twice returns the first summary.
    pub fn finish(&mut self) -> Option<PlanSummary> {
        if let Some(summary) = self.summary {
            return Some(summary);
        }
        if self.selected.is_empty() {
            return None;
        }

        let categories: HashSet<ActivityCategory> = self.selected().map(|a| a.category).collect();
        let priorities: HashSet<Priority> = self.selected().map(|a| a.priority).collect();

        let category_bonus = if ActivityCategory::all().iter().all(|c| categories.contains(c)) {
            CATEGORY_BONUS
        } else {
            0
        };
        let priority_bonus = if Priority::all().iter().all(|p| priorities.contains(p)) {
            PRIORITY_BONUS
        } else {
            0
        };

        let summary = PlanSummary {
            base_score: self.score,
            category_bonus,
            priority_bonus,
            activities: self.selected.len(),
            minutes_used: self.minutes_used(),
        };
        info!(total = summary.total(), bonus = summary.bonus(), "Day planned");
        self.summary = Some(summary);
        Some(summary)
    }
}
