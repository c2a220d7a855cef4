//! Calculator entry point
//!
//! Ties the activity cache to the projector. This is what a presentation
//! layer holds on to.

use std::sync::Arc;

use super::projector::{ActionProjector, Projection, TrainingPoint};
use crate::config::CalculatorConfig;
use crate::data::{ActivityCache, ActivitySet, ActivitySource, FileActivitySource, SkillBonus};
use crate::error::Result;
use crate::progression::{CombatSkills, ExperienceTable};
use crate::skills::CalculatorType;

#[derive(Debug)]
pub struct SkillCalculator {
    cache: ActivityCache,
    projector: ActionProjector,
}

impl SkillCalculator {
    pub fn new(source: impl ActivitySource + 'static, projector: ActionProjector) -> Self {
        Self {
            cache: ActivityCache::new(source),
            projector,
        }
    }

    /// Calculator reading its data directory and level cap from `config`
    pub fn from_config(config: &CalculatorConfig) -> Self {
        let source = FileActivitySource::new(&config.data_dir)
            .with_builtin_fallback(config.builtin_fallback);
        let projector = ActionProjector::new(ExperienceTable::new(config.level_cap))
            .with_locked(config.show_locked);
        Self::new(source, projector)
    }

    /// Every calculator category
    pub fn calculators(&self) -> [CalculatorType; 17] {
        CalculatorType::all()
    }

    pub fn table(&self) -> &ExperienceTable {
        self.projector.table()
    }

    pub fn cache(&self) -> &ActivityCache {
        &self.cache
    }

    pub fn activities_for(&self, calculator: CalculatorType) -> Result<Arc<ActivitySet>> {
        self.cache.activities_for(calculator)
    }

    pub fn project(
        &self,
        calculator: CalculatorType,
        start: TrainingPoint,
        target: TrainingPoint,
    ) -> Result<Projection> {
        let activities = self.cache.activities_for(calculator)?;
        self.projector.project(calculator, &activities, start, target)
    }

    pub fn project_with_bonus(
        &self,
        calculator: CalculatorType,
        start: TrainingPoint,
        target: TrainingPoint,
        bonus: &SkillBonus,
    ) -> Result<Projection> {
        let activities = self.cache.activities_for(calculator)?;
        self.projector
            .project_with_bonus(calculator, &activities, start, target, Some(bonus))
    }

    pub fn combat_level(&self, skills: &CombatSkills) -> u32 {
        skills.combat_level()
    }
}

impl Default for SkillCalculator {
    fn default() -> Self {
        Self::from_config(&CalculatorConfig::default())
    }
}
