//! Training activities
//!
//! Per-skill activity tables as loaded from data files.

use serde::{Deserialize, Serialize};

use crate::progression::MAX_LEVEL;

/// One repeatable action that trains a skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Display name
    pub name: String,
    /// Minimum level to perform
    pub level: u32,
    /// Experience per action
    pub xp: f64,
    /// Item or sprite id for the presentation layer
    #[serde(default)]
    pub icon: Option<u32>,
}

impl Activity {
    pub fn new(name: impl Into<String>, level: u32, xp: f64) -> Self {
        Self {
            name: name.into(),
            level,
            xp,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: u32) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Whether the activity can be performed at `level`
    pub fn is_available_at(&self, level: u32) -> bool {
        self.level <= level
    }

    /// Why this row cannot be projected, if it cannot
    pub fn defect(&self) -> Option<String> {
        if !self.xp.is_finite() || self.xp < 0.0 {
            return Some(format!("experience {} is not a finite, non-negative value", self.xp));
        }
        if !(1..=MAX_LEVEL).contains(&self.level) {
            return Some(format!("level {} is outside 1..={}", self.level, MAX_LEVEL));
        }
        None
    }
}

/// Experience multiplier such as an outfit or altar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillBonus {
    pub name: String,
    /// Fraction added to each action's experience (0.025 = +2.5%)
    pub value: f64,
}

impl SkillBonus {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), value }
    }

    /// Multiplier applied to base experience
    pub fn multiplier(&self) -> f64 {
        1.0 + self.value
    }
}

/// Ordered activities of one skill
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivitySet {
    #[serde(alias = "actions")]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub bonuses: Vec<SkillBonus>,
}

impl ActivitySet {
    /// Build a set ordered by minimum level; ties keep their given order
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities, bonuses: Vec::new() }.sorted()
    }

    pub fn with_bonuses(mut self, bonuses: Vec<SkillBonus>) -> Self {
        self.bonuses = bonuses;
        self
    }

    pub(crate) fn sorted(mut self) -> Self {
        self.activities.sort_by_key(|a| a.level);
        self
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Activities performable at `level`, in stored order
    pub fn eligible_at(&self, level: u32) -> Vec<&Activity> {
        self.activities.iter()
            .filter(|a| a.is_available_at(level))
            .collect()
    }

    /// Activities still locked at `level`, in stored order
    pub fn locked_at(&self, level: u32) -> Vec<&Activity> {
        self.activities.iter()
            .filter(|a| !a.is_available_at(level))
            .collect()
    }

    /// Find an activity by name
    pub fn find(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Find a bonus by name
    pub fn bonus(&self, name: &str) -> Option<&SkillBonus> {
        self.bonuses.iter().find(|b| b.name.eq_ignore_ascii_case(name))
    }
}
