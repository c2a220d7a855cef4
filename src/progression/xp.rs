//! Experience and leveling
//!
//! The level/experience table, its inverse, and progress helpers.
//!
//! Thresholds are generated once from the game's growth series:
//! each level `l` adds `floor(l + 300 * 2^(l / 7))` points, and the
//! experience needed for level `l + 1` is a quarter of the running total.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

/// Highest level a skill can reach
pub const MAX_LEVEL: u32 = 99;

/// Highest "virtual" level, shown past 99 by some clients
pub const MAX_VIRTUAL_LEVEL: u32 = 126;

/// No table ever answers for this level or beyond
pub const LEVEL_LIMIT: u32 = 200;

/// Per-skill experience ceiling
pub const MAX_EXPERIENCE: u32 = 200_000_000;

/// Which upper bound a table enforces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LevelCap {
    /// Levels 1..=99
    #[default]
    Canonical,
    /// Levels 1..=126
    Virtual,
}

impl LevelCap {
    pub fn max_level(&self) -> u32 {
        match self {
            LevelCap::Canonical => MAX_LEVEL,
            LevelCap::Virtual => MAX_VIRTUAL_LEVEL,
        }
    }
}

fn thresholds() -> &'static [u32] {
    static TABLE: OnceLock<Vec<u32>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = Vec::with_capacity(MAX_VIRTUAL_LEVEL as usize);
        let mut points: u32 = 0;
        for level in 1..=MAX_VIRTUAL_LEVEL {
            table.push(points / 4);
            let l = level as f64;
            points += (l + 300.0 * 2f64.powf(l / 7.0)).floor() as u32;
        }
        table
    })
}

/// Level <-> experience lookup, bounded by a [`LevelCap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceTable {
    cap: LevelCap,
}

impl Default for ExperienceTable {
    fn default() -> Self {
        Self::canonical()
    }
}

impl ExperienceTable {
    pub const fn new(cap: LevelCap) -> Self {
        Self { cap }
    }

    /// Table answering levels 1..=99
    pub const fn canonical() -> Self {
        Self::new(LevelCap::Canonical)
    }

    /// Table answering levels 1..=126
    pub const fn virtual_levels() -> Self {
        Self::new(LevelCap::Virtual)
    }

    pub fn cap(&self) -> LevelCap {
        self.cap
    }

    pub fn max_level(&self) -> u32 {
        self.cap.max_level()
    }

    /// Minimum experience required to be at `level`
    pub fn experience_for_level(&self, level: u32) -> Result<u32> {
        let max = self.max_level();
        if level < 1 || level > max || level >= LEVEL_LIMIT {
            return Err(CalcError::OutOfRange { level, max });
        }
        Ok(thresholds()[(level - 1) as usize])
    }

    /// Highest level whose threshold is at or below `xp`, saturating at the cap
    pub fn level_for_experience(&self, xp: f64) -> Result<u32> {
        validate_experience(xp)?;
        let table = &thresholds()[..self.max_level() as usize];
        // table[0] == 0, so at least one entry always matches
        Ok(table.partition_point(|&t| t as f64 <= xp) as u32)
    }

    /// Experience still needed to reach the next level (0 at the cap)
    pub fn experience_to_next_level(&self, xp: f64) -> Result<f64> {
        let level = self.level_for_experience(xp)?;
        if level >= self.max_level() {
            return Ok(0.0);
        }
        let next = self.experience_for_level(level + 1)? as f64;
        Ok(next - xp)
    }

    /// Fraction of the way through the current level, 0.0 to 1.0
    pub fn level_progress(&self, xp: f64) -> Result<f64> {
        let level = self.level_for_experience(xp)?;
        if level >= self.max_level() {
            return Ok(1.0);
        }
        let current = self.experience_for_level(level)? as f64;
        let next = self.experience_for_level(level + 1)? as f64;
        Ok(((xp - current) / (next - current)).clamp(0.0, 1.0))
    }
}

/// Reject experience values no table can answer for
pub fn validate_experience(xp: f64) -> Result<f64> {
    if !xp.is_finite() || xp < 0.0 {
        return Err(CalcError::InvalidInput(xp));
    }
    Ok(xp)
}

/// Experience needed for a level on the canonical table
pub fn xp_for_level(level: u32) -> Result<u32> {
    ExperienceTable::canonical().experience_for_level(level)
}

/// Level reached with `xp` on the canonical table
pub fn level_for_xp(xp: f64) -> Result<u32> {
    ExperienceTable::canonical().level_for_experience(xp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_for_level() {
        // https://oldschool.runescape.wiki/w/Experience#Experience_table
        assert_eq!(xp_for_level(1), Ok(0));
        assert_eq!(xp_for_level(2), Ok(83));
        assert_eq!(xp_for_level(10), Ok(1_154));
        assert_eq!(xp_for_level(50), Ok(101_333));
        assert_eq!(xp_for_level(92), Ok(6_517_253));
        assert_eq!(xp_for_level(99), Ok(13_034_431));
    }

    #[test]
    fn test_xp_for_level_bounds() {
        assert_eq!(xp_for_level(0), Err(CalcError::OutOfRange { level: 0, max: 99 }));
        assert!(matches!(xp_for_level(100), Err(CalcError::OutOfRange { .. })));
        assert!(matches!(xp_for_level(200), Err(CalcError::OutOfRange { .. })));

        let table = ExperienceTable::virtual_levels();
        assert_eq!(table.experience_for_level(126), Ok(188_884_740));
        assert!(matches!(table.experience_for_level(0), Err(CalcError::OutOfRange { .. })));
        assert!(matches!(table.experience_for_level(127), Err(CalcError::OutOfRange { .. })));
        assert!(matches!(table.experience_for_level(200), Err(CalcError::OutOfRange { .. })));
    }

    #[test]
    fn test_table_strictly_increasing() {
        let table = ExperienceTable::canonical();
        for level in 2..=MAX_LEVEL {
            let lower = table.experience_for_level(level - 1).unwrap();
            let upper = table.experience_for_level(level).unwrap();
            assert!(upper > lower, "level {} not above level {}", level, level - 1);
        }
    }

    #[test]
    fn test_level_round_trip() {
        let table = ExperienceTable::canonical();
        for level in 1..=MAX_LEVEL {
            let xp = table.experience_for_level(level).unwrap();
            assert_eq!(table.level_for_experience(xp as f64), Ok(level));
        }
    }

    #[test]
    fn test_level_for_xp() {
        assert_eq!(level_for_xp(0.0), Ok(1));
        assert_eq!(level_for_xp(82.9), Ok(1));
        assert_eq!(level_for_xp(83.0), Ok(2));
        assert_eq!(level_for_xp(1_153.0), Ok(9));
        // Saturates at the cap
        assert_eq!(level_for_xp(200_000_000.0), Ok(99));
        assert_eq!(
            ExperienceTable::virtual_levels().level_for_experience(200_000_000.0),
            Ok(126)
        );
    }

    #[test]
    fn test_level_for_xp_rejects_bad_input() {
        assert_eq!(level_for_xp(-1.0), Err(CalcError::InvalidInput(-1.0)));
        assert!(matches!(level_for_xp(f64::NAN), Err(CalcError::InvalidInput(_))));
        assert!(matches!(level_for_xp(f64::INFINITY), Err(CalcError::InvalidInput(_))));
    }

    #[test]
    fn test_progress_helpers() {
        let table = ExperienceTable::canonical();
        assert_eq!(table.experience_to_next_level(0.0), Ok(83.0));
        assert_eq!(table.experience_to_next_level(13_034_431.0), Ok(0.0));
        assert_eq!(table.level_progress(0.0), Ok(0.0));
        assert_eq!(table.level_progress(13_034_431.0), Ok(1.0));

        let halfway = table.level_progress(41.5).unwrap();
        assert!((halfway - 0.5).abs() < 1e-9);
    }
}
