//! Calculator categories
//!
//! The skills that have a training calculator, and where their activity
//! data lives.

use serde::{Deserialize, Serialize};

use super::Skill;

/// A skill with a training calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorType {
    Mining,
    Agility,
    Smithing,
    Herblore,
    Fishing,
    Thieving,
    Cooking,
    Prayer,
    Crafting,
    Firemaking,
    Magic,
    Fletching,
    Woodcutting,
    Runecraft,
    Farming,
    Construction,
    Hunter,
}

impl CalculatorType {
    pub fn all() -> [CalculatorType; 17] {
        [
            CalculatorType::Mining,
            CalculatorType::Agility,
            CalculatorType::Smithing,
            CalculatorType::Herblore,
            CalculatorType::Fishing,
            CalculatorType::Thieving,
            CalculatorType::Cooking,
            CalculatorType::Prayer,
            CalculatorType::Crafting,
            CalculatorType::Firemaking,
            CalculatorType::Magic,
            CalculatorType::Fletching,
            CalculatorType::Woodcutting,
            CalculatorType::Runecraft,
            CalculatorType::Farming,
            CalculatorType::Construction,
            CalculatorType::Hunter,
        ]
    }

    /// The game skill this calculator trains
    pub fn skill(&self) -> Skill {
        match self {
            CalculatorType::Mining => Skill::Mining,
            CalculatorType::Agility => Skill::Agility,
            CalculatorType::Smithing => Skill::Smithing,
            CalculatorType::Herblore => Skill::Herblore,
            CalculatorType::Fishing => Skill::Fishing,
            CalculatorType::Thieving => Skill::Thieving,
            CalculatorType::Cooking => Skill::Cooking,
            CalculatorType::Prayer => Skill::Prayer,
            CalculatorType::Crafting => Skill::Crafting,
            CalculatorType::Firemaking => Skill::Firemaking,
            CalculatorType::Magic => Skill::Magic,
            CalculatorType::Fletching => Skill::Fletching,
            CalculatorType::Woodcutting => Skill::Woodcutting,
            CalculatorType::Runecraft => Skill::Runecraft,
            CalculatorType::Farming => Skill::Farming,
            CalculatorType::Construction => Skill::Construction,
            CalculatorType::Hunter => Skill::Hunter,
        }
    }

    pub fn name(&self) -> &'static str {
        self.skill().name()
    }

    /// File stem of the activity data, e.g. `skill_mining`
    pub fn data_file(&self) -> String {
        format!("skill_{}", self.name().to_lowercase())
    }

    /// Case-insensitive lookup by skill name
    pub fn from_name(name: &str) -> Option<CalculatorType> {
        let skill = Skill::from_name(name)?;
        Self::from_skill(skill)
    }

    pub fn from_skill(skill: Skill) -> Option<CalculatorType> {
        Self::all().into_iter().find(|c| c.skill() == skill)
    }
}

impl std::fmt::Display for CalculatorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_calculators() {
        let skill_list = [
            "Mining", "Agility", "Smithing", "Herblore",
            "Fishing", "Thieving", "Cooking", "Prayer",
            "Crafting", "Firemaking", "Magic", "Fletching",
            "Woodcutting", "Runecraft", "Farming", "Construction",
            "Hunter",
        ];

        for calculator in CalculatorType::all() {
            assert!(
                skill_list.contains(&calculator.skill().name()),
                "{} is not a known skill",
                calculator.skill().name()
            );
        }
    }

    #[test]
    fn test_calculator_lookup() {
        assert_eq!(CalculatorType::from_name("woodcutting"), Some(CalculatorType::Woodcutting));
        assert_eq!(CalculatorType::from_skill(Skill::Prayer), Some(CalculatorType::Prayer));
        // Combat skills other than Prayer and Magic have no calculator
        assert_eq!(CalculatorType::from_name("Attack"), None);
        assert_eq!(CalculatorType::from_name("Slayer"), None);
    }

    #[test]
    fn test_data_file() {
        assert_eq!(CalculatorType::Mining.data_file(), "skill_mining");
        assert_eq!(CalculatorType::Runecraft.data_file(), "skill_runecraft");
    }
}
