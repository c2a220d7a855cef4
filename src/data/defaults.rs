//! Built-in activity tables
//!
//! Used when no data file is available for a calculator.

use super::activities::{Activity, ActivitySet, SkillBonus};
use crate::skills::CalculatorType;

/// Built-in activities for a calculator, if any ship with the crate
pub fn default_activities(calculator: CalculatorType) -> Option<ActivitySet> {
    match calculator {
        CalculatorType::Mining => Some(default_mining()),
        CalculatorType::Woodcutting => Some(default_woodcutting()),
        CalculatorType::Firemaking => Some(default_firemaking()),
        CalculatorType::Prayer => Some(default_prayer()),
        _ => None,
    }
}

fn default_mining() -> ActivitySet {
    ActivitySet::new(vec![
        Activity::new("Clay", 1, 5.0).with_icon(434),
        Activity::new("Rune essence", 1, 5.0).with_icon(1436),
        Activity::new("Copper ore", 1, 17.5).with_icon(436),
        Activity::new("Tin ore", 1, 17.5).with_icon(438),
        Activity::new("Limestone", 10, 26.5).with_icon(3211),
        Activity::new("Blurite ore", 10, 17.5).with_icon(668),
        Activity::new("Iron ore", 15, 35.0).with_icon(440),
        Activity::new("Silver ore", 20, 40.0).with_icon(442),
        Activity::new("Pure essence", 30, 5.0).with_icon(7936),
        Activity::new("Coal", 30, 50.0).with_icon(453),
        Activity::new("Gold ore", 40, 65.0).with_icon(444),
        Activity::new("Granite (500g)", 45, 50.0).with_icon(6979),
        Activity::new("Mithril ore", 55, 80.0).with_icon(447),
        Activity::new("Adamantite ore", 70, 95.0).with_icon(449),
        Activity::new("Runite ore", 85, 125.0).with_icon(451),
        Activity::new("Amethyst", 92, 240.0).with_icon(21347),
    ])
    .with_bonuses(vec![SkillBonus::new("Prospector kit", 0.025)])
}

fn default_woodcutting() -> ActivitySet {
    ActivitySet::new(vec![
        Activity::new("Logs", 1, 25.0).with_icon(1511),
        Activity::new("Achey tree logs", 1, 25.0).with_icon(2862),
        Activity::new("Oak logs", 15, 37.5).with_icon(1521),
        Activity::new("Willow logs", 30, 67.5).with_icon(1519),
        Activity::new("Teak logs", 35, 85.0).with_icon(6333),
        Activity::new("Maple logs", 45, 100.0).with_icon(1517),
        Activity::new("Mahogany logs", 50, 125.0).with_icon(6332),
        Activity::new("Yew logs", 60, 175.0).with_icon(1515),
        Activity::new("Magic logs", 75, 250.0).with_icon(1513),
        Activity::new("Redwood logs", 90, 380.0).with_icon(19669),
    ])
    .with_bonuses(vec![SkillBonus::new("Lumberjack outfit", 0.025)])
}

fn default_firemaking() -> ActivitySet {
    ActivitySet::new(vec![
        Activity::new("Logs", 1, 40.0).with_icon(1511),
        Activity::new("Oak logs", 15, 60.0).with_icon(1521),
        Activity::new("Willow logs", 30, 90.0).with_icon(1519),
        Activity::new("Teak logs", 35, 105.0).with_icon(6333),
        Activity::new("Maple logs", 45, 135.0).with_icon(1517),
        Activity::new("Mahogany logs", 50, 157.5).with_icon(6332),
        Activity::new("Yew logs", 60, 202.5).with_icon(1515),
        Activity::new("Magic logs", 75, 303.8).with_icon(1513),
        Activity::new("Redwood logs", 90, 350.0).with_icon(19669),
    ])
    .with_bonuses(vec![SkillBonus::new("Pyromancer outfit", 0.025)])
}

fn default_prayer() -> ActivitySet {
    ActivitySet::new(vec![
        Activity::new("Bones", 1, 4.5).with_icon(526),
        Activity::new("Wolf bones", 1, 4.5).with_icon(2859),
        Activity::new("Big bones", 1, 15.0).with_icon(532),
        Activity::new("Babydragon bones", 1, 30.0).with_icon(534),
        Activity::new("Dragon bones", 1, 72.0).with_icon(536),
        Activity::new("Dagannoth bones", 1, 125.0).with_icon(6729),
        Activity::new("Superior dragon bones", 70, 150.0).with_icon(22124),
    ])
    .with_bonuses(vec![
        SkillBonus::new("Lit gilded altar", 2.5),
        SkillBonus::new("Ectofuntus", 3.0),
    ])
}
