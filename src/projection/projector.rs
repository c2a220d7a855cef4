//! Action projection
//!
//! Turns a start/target pair into the number of times each available
//! activity has to be repeated to close the experience gap.

use serde::{Deserialize, Serialize};

use super::format::{format_experience, format_thousands};
use crate::data::{Activity, ActivitySet, SkillBonus};
use crate::error::{CalcError, Result};
use crate::progression::{validate_experience, ExperienceTable};
use crate::skills::CalculatorType;

/// A start or target, given either as a level or as raw experience
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrainingPoint {
    Level(u32),
    Experience(f64),
}

impl TrainingPoint {
    /// Experience at this point; levels map to their threshold
    pub fn to_experience(&self, table: &ExperienceTable) -> Result<f64> {
        match *self {
            TrainingPoint::Level(level) => table.experience_for_level(level).map(f64::from),
            TrainingPoint::Experience(xp) => validate_experience(xp),
        }
    }

    pub fn to_level(&self, table: &ExperienceTable) -> Result<u32> {
        match *self {
            TrainingPoint::Level(level) => table.experience_for_level(level).map(|_| level),
            TrainingPoint::Experience(xp) => table.level_for_experience(xp),
        }
    }
}

/// Result for one activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub activity: Activity,
    /// Level the projection starts from
    pub start_level: u32,
    /// Experience per action after any bonus
    pub xp_per_action: f64,
    /// Repetitions needed to reach the target
    pub actions: u64,
    /// Experience after performing `actions`, which may overshoot the target
    pub projected_xp: f64,
    pub projected_level: u32,
}

impl ProjectionRow {
    /// `"Lvl. 1 (4.5exp) - 2,896,541 actions"`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for ProjectionRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Lvl. {} ({}exp) - {} actions",
            self.start_level,
            format_experience(self.xp_per_action),
            format_thousands(self.actions)
        )
    }
}

/// Everything computed for one start/target pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub calculator: CalculatorType,
    pub start_xp: f64,
    pub target_xp: f64,
    pub start_level: u32,
    pub target_level: u32,
    pub bonus: Option<SkillBonus>,
    /// One row per eligible activity with a positive yield, in table order
    pub rows: Vec<ProjectionRow>,
    /// Activities above the start level, when requested
    pub locked: Vec<Activity>,
}

impl Projection {
    pub fn delta_xp(&self) -> f64 {
        self.target_xp - self.start_xp
    }

    /// Row for an activity, by name
    pub fn row(&self, name: &str) -> Option<&ProjectionRow> {
        self.rows.iter().find(|r| r.activity.name.eq_ignore_ascii_case(name))
    }

    /// Display lines, one per row
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(ProjectionRow::label).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Projects experience gaps onto activity tables
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionProjector {
    table: ExperienceTable,
    include_locked: bool,
}

impl ActionProjector {
    pub fn new(table: ExperienceTable) -> Self {
        Self { table, include_locked: false }
    }

    /// Also report activities the start level cannot perform yet
    pub fn with_locked(mut self, include_locked: bool) -> Self {
        self.include_locked = include_locked;
        self
    }

    pub fn table(&self) -> &ExperienceTable {
        &self.table
    }

    pub fn project(
        &self,
        calculator: CalculatorType,
        activities: &ActivitySet,
        start: TrainingPoint,
        target: TrainingPoint,
    ) -> Result<Projection> {
        self.project_with_bonus(calculator, activities, start, target, None)
    }

    /// Project with every yield scaled by `bonus`
    pub fn project_with_bonus(
        &self,
        calculator: CalculatorType,
        activities: &ActivitySet,
        start: TrainingPoint,
        target: TrainingPoint,
        bonus: Option<&SkillBonus>,
    ) -> Result<Projection> {
        let start_xp = start.to_experience(&self.table)?;
        let target_xp = target.to_experience(&self.table)?;
        if target_xp < start_xp {
            return Err(CalcError::InvalidRange { start: start_xp, target: target_xp });
        }

        let start_level = self.table.level_for_experience(start_xp)?;
        let target_level = self.table.level_for_experience(target_xp)?;
        let delta = target_xp - start_xp;
        let multiplier = bonus.map(SkillBonus::multiplier).unwrap_or(1.0);

        let mut rows = Vec::new();
        for activity in activities.eligible_at(start_level) {
            let xp_per_action = activity.xp * multiplier;
            if xp_per_action <= 0.0 {
                // Cannot make progress
                continue;
            }

            let actions = (delta / xp_per_action).ceil() as u64;
            let projected_xp = start_xp + actions as f64 * xp_per_action;
            rows.push(ProjectionRow {
                activity: activity.clone(),
                start_level,
                xp_per_action,
                actions,
                projected_xp,
                projected_level: self.table.level_for_experience(projected_xp)?,
            });
        }

        let locked = if self.include_locked {
            activities.locked_at(start_level).into_iter().cloned().collect()
        } else {
            Vec::new()
        };

        log::debug!(
            "{}: {} -> {} xp over {} activities ({} locked)",
            calculator,
            start_xp,
            target_xp,
            rows.len(),
            locked.len()
        );

        Ok(Projection {
            calculator,
            start_xp,
            target_xp,
            start_level,
            target_level,
            bonus: bonus.cloned(),
            rows,
            locked,
        })
    }
}
