//! Skillcalc - skill training calculator
//!
//! Converts between levels and experience, computes combat levels, and
//! projects how many actions it takes to train a skill from one point to
//! another.

pub mod error;
pub mod progression;
pub mod skills;
pub mod data;
pub mod projection;
pub mod config;

// Re-export commonly used types
pub use error::{CalcError, Result};
pub use progression::{ExperienceTable, CombatSkills, combat_level};
pub use skills::{Skill, CalculatorType};
pub use data::{Activity, ActivitySet};
pub use projection::{ActionProjector, Projection, ProjectionRow, SkillCalculator, TrainingPoint};
pub use config::CalculatorConfig;
