//! Combat level
//!
//! Seven combat skills blend into one derived level: a defensive base plus
//! the best of the melee, ranged and magic styles.

use serde::{Deserialize, Serialize};

use super::xp::MAX_LEVEL;
use crate::skills::Skill;

/// Skills that feed the combat level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatSkill {
    Attack,
    Strength,
    Defence,
    Hitpoints,
    Ranged,
    Magic,
    Prayer,
}

impl CombatSkill {
    pub fn all() -> [CombatSkill; 7] {
        [
            CombatSkill::Attack,
            CombatSkill::Strength,
            CombatSkill::Defence,
            CombatSkill::Hitpoints,
            CombatSkill::Ranged,
            CombatSkill::Magic,
            CombatSkill::Prayer,
        ]
    }

    pub fn skill(&self) -> Skill {
        match self {
            CombatSkill::Attack => Skill::Attack,
            CombatSkill::Strength => Skill::Strength,
            CombatSkill::Defence => Skill::Defence,
            CombatSkill::Hitpoints => Skill::Hitpoints,
            CombatSkill::Ranged => Skill::Ranged,
            CombatSkill::Magic => Skill::Magic,
            CombatSkill::Prayer => Skill::Prayer,
        }
    }
}

/// Unrounded combat level
pub fn combat_level_precise(
    attack: u32,
    strength: u32,
    defence: u32,
    hitpoints: u32,
    ranged: u32,
    magic: u32,
    prayer: u32,
) -> f64 {
    let base = 0.25 * (defence + hitpoints + prayer / 2) as f64;

    let melee = 0.325 * (attack + strength) as f64;
    let range = 0.325 * (ranged as f64 * 1.5).floor();
    let mage = 0.325 * (magic as f64 * 1.5).floor();

    base + melee.max(range).max(mage)
}

/// Combat level as displayed in game
pub fn combat_level(
    attack: u32,
    strength: u32,
    defence: u32,
    hitpoints: u32,
    ranged: u32,
    magic: u32,
    prayer: u32,
) -> u32 {
    combat_level_precise(attack, strength, defence, hitpoints, ranged, magic, prayer).floor() as u32
}

/// The seven combat skill levels of one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatSkills {
    pub attack: u32,
    pub strength: u32,
    pub defence: u32,
    pub hitpoints: u32,
    pub ranged: u32,
    pub magic: u32,
    pub prayer: u32,
}

impl Default for CombatSkills {
    /// A fresh account: everything at 1 except Hitpoints at 10
    fn default() -> Self {
        Self {
            attack: 1,
            strength: 1,
            defence: 1,
            hitpoints: 10,
            ranged: 1,
            magic: 1,
            prayer: 1,
        }
    }
}

impl CombatSkills {
    pub fn new(
        attack: u32,
        strength: u32,
        defence: u32,
        hitpoints: u32,
        ranged: u32,
        magic: u32,
        prayer: u32,
    ) -> Self {
        Self { attack, strength, defence, hitpoints, ranged, magic, prayer }
    }

    pub fn combat_level_precise(&self) -> f64 {
        combat_level_precise(
            self.attack,
            self.strength,
            self.defence,
            self.hitpoints,
            self.ranged,
            self.magic,
            self.prayer,
        )
    }

    pub fn combat_level(&self) -> u32 {
        self.combat_level_precise().floor() as u32
    }

    pub fn get(&self, skill: CombatSkill) -> u32 {
        match skill {
            CombatSkill::Attack => self.attack,
            CombatSkill::Strength => self.strength,
            CombatSkill::Defence => self.defence,
            CombatSkill::Hitpoints => self.hitpoints,
            CombatSkill::Ranged => self.ranged,
            CombatSkill::Magic => self.magic,
            CombatSkill::Prayer => self.prayer,
        }
    }

    /// Copy with one skill replaced
    pub fn with(mut self, skill: CombatSkill, level: u32) -> Self {
        match skill {
            CombatSkill::Attack => self.attack = level,
            CombatSkill::Strength => self.strength = level,
            CombatSkill::Defence => self.defence = level,
            CombatSkill::Hitpoints => self.hitpoints = level,
            CombatSkill::Ranged => self.ranged = level,
            CombatSkill::Magic => self.magic = level,
            CombatSkill::Prayer => self.prayer = level,
        }
        self
    }

    /// Levels of `skill` alone needed to gain one combat level.
    /// `None` if maxing the skill is not enough.
    pub fn levels_for_next_combat_level(&self, skill: CombatSkill) -> Option<u32> {
        let target = self.combat_level() + 1;
        let current = self.get(skill);
        (current + 1..=MAX_LEVEL)
            .find(|&level| self.with(skill, level).combat_level() >= target)
            .map(|level| level - current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combat_max_stats() {
        assert_eq!(combat_level(99, 99, 99, 99, 99, 99, 99), 126);
    }

    #[test]
    fn test_combat_new_account() {
        assert_eq!(combat_level(1, 1, 1, 10, 1, 1, 1), 3);
        assert_eq!(CombatSkills::default().combat_level(), 3);
    }

    #[test]
    fn test_combat_mid_level() {
        assert_eq!(combat_level(70, 73, 70, 71, 78, 56, 63), 89);
    }

    #[test]
    fn test_ranged_and_magic_styles() {
        // Pure ranger: 0.25 * (1 + 10) + 0.325 * floor(99 * 1.5)
        let ranger = CombatSkills::default().with(CombatSkill::Ranged, 99);
        assert_eq!(ranger.combat_level(), 50);

        let mage = CombatSkills::default().with(CombatSkill::Magic, 99);
        assert_eq!(mage.combat_level(), ranger.combat_level());
    }

    #[test]
    fn test_levels_for_next_combat_level() {
        let fresh = CombatSkills::default();
        // 3.4 -> 4.05 after two Attack levels
        assert_eq!(fresh.levels_for_next_combat_level(CombatSkill::Attack), Some(2));
        assert_eq!(fresh.levels_for_next_combat_level(CombatSkill::Hitpoints), Some(3));

        let maxed = CombatSkills::new(99, 99, 99, 99, 99, 99, 99);
        for skill in CombatSkill::all() {
            assert_eq!(maxed.levels_for_next_combat_level(skill), None);
        }
    }
}
