//! Progression math
//!
//! The experience table and the combat level formula.

pub mod xp;
pub mod combat;

pub use xp::{ExperienceTable, LevelCap, MAX_LEVEL, MAX_VIRTUAL_LEVEL, MAX_EXPERIENCE};
pub use xp::{xp_for_level, level_for_xp, validate_experience};
pub use combat::{CombatSkill, CombatSkills, combat_level, combat_level_precise};
