//! Skills and calculator categories

pub mod skill;
pub mod calculator;

pub use skill::Skill;
pub use calculator::CalculatorType;
