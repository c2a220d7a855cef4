//! Action projections
//!
//! How many repetitions of each activity close an experience gap.

pub mod format;
pub mod projector;
pub mod calculator;

pub use format::{format_experience, format_thousands};
pub use projector::{ActionProjector, Projection, ProjectionRow, TrainingPoint};
pub use calculator::SkillCalculator;
