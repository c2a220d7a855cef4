//! Skillcalc - Entry Point
//!
//! Command-line front end: parses input, calls the calculator, prints rows.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};

use skillcalc::config::{config_path, CalculatorConfig};
use skillcalc::progression::{CombatSkill, MAX_EXPERIENCE, MAX_LEVEL, MAX_VIRTUAL_LEVEL};
use skillcalc::{CalculatorType, CombatSkills, SkillCalculator, TrainingPoint};

/// Skill training calculator
#[derive(Parser, Debug)]
#[command(name = "skillcalc", version)]
#[command(about = "Level/experience lookups, combat level and training projections")]
struct Args {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the activity data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Actions needed per activity to go from one point to another
    Project {
        /// Skill name, e.g. Mining
        skill: String,

        /// Start level
        #[arg(long, conflicts_with = "from_xp")]
        from: Option<u32>,

        /// Start experience
        #[arg(long)]
        from_xp: Option<f64>,

        /// Target level
        #[arg(long, conflicts_with = "to_xp")]
        to: Option<u32>,

        /// Target experience
        #[arg(long)]
        to_xp: Option<f64>,

        /// Apply a named experience bonus from the skill's data
        #[arg(long)]
        bonus: Option<String>,

        /// Print the projection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Combat level from the seven combat skills
    Combat {
        #[arg(value_parser = skill_level)]
        attack: u32,
        #[arg(value_parser = skill_level)]
        strength: u32,
        #[arg(value_parser = skill_level)]
        defence: u32,
        #[arg(value_parser = skill_level)]
        hitpoints: u32,
        #[arg(value_parser = skill_level)]
        ranged: u32,
        #[arg(value_parser = skill_level)]
        magic: u32,
        #[arg(value_parser = skill_level)]
        prayer: u32,
    },

    /// Experience needed for a level
    Xp {
        /// Levels past 99 need `level_cap: Virtual` in the config
        #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_VIRTUAL_LEVEL as i64))]
        level: u32,
    },

    /// Level reached with an amount of experience
    Level { xp: f64 },

    /// List skills that have a calculator
    Skills,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn")
    )
    .init();

    let args = Args::parse();
    log::debug!("Starting skillcalc v{}", env!("CARGO_PKG_VERSION"));

    let mut config = CalculatorConfig::load_or_default(&args.config.unwrap_or_else(config_path));
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    let calculator = SkillCalculator::from_config(&config);

    match args.command {
        Command::Project { skill, from, from_xp, to, to_xp, bonus, json } => {
            let calculator_type = CalculatorType::from_name(&skill)
                .ok_or_else(|| anyhow!("no calculator for skill '{}'", skill))?;
            let start = training_point(from, from_xp, 1)?;
            let target = training_point(to, to_xp, calculator.table().max_level())?;

            let projection = match bonus {
                Some(name) => {
                    let activities = calculator.activities_for(calculator_type)?;
                    let bonus = activities
                        .bonus(&name)
                        .ok_or_else(|| anyhow!("{} has no bonus named '{}'", calculator_type, name))?
                        .clone();
                    calculator.project_with_bonus(calculator_type, start, target, &bonus)?
                }
                None => calculator.project(calculator_type, start, target)?,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&projection)?);
                return Ok(());
            }

            println!(
                "{}: level {} -> {} ({} exp)",
                calculator_type,
                projection.start_level,
                projection.target_level,
                skillcalc::projection::format_experience(projection.delta_xp())
            );
            for row in &projection.rows {
                println!("  {:<28} {}", row.activity.name, row);
            }
            for activity in &projection.locked {
                println!("  {:<28} requires level {}", activity.name, activity.level);
            }
        }

        Command::Combat { attack, strength, defence, hitpoints, ranged, magic, prayer } => {
            let skills = CombatSkills::new(attack, strength, defence, hitpoints, ranged, magic, prayer);
            println!(
                "Combat level {} ({:.3})",
                calculator.combat_level(&skills),
                skills.combat_level_precise()
            );
            for skill in CombatSkill::all() {
                if let Some(levels) = skills.levels_for_next_combat_level(skill) {
                    println!("  +{} {} for next level", levels, skill.skill());
                }
            }
        }

        Command::Xp { level } => {
            let xp = calculator.table().experience_for_level(level)?;
            println!("{}", skillcalc::projection::format_thousands(u64::from(xp)));
        }

        Command::Level { xp } => {
            println!("{}", calculator.table().level_for_experience(xp)?);
        }

        Command::Skills => {
            for calculator_type in calculator.calculators() {
                println!("{:<14} {}", calculator_type.name(), calculator_type.data_file());
            }
        }
    }

    Ok(())
}

/// Level or experience from the command line, with a default level
fn training_point(level: Option<u32>, xp: Option<f64>, default_level: u32) -> Result<TrainingPoint> {
    match (level, xp) {
        (_, Some(xp)) if xp > MAX_EXPERIENCE as f64 => {
            bail!("experience {} is above the {} cap", xp, MAX_EXPERIENCE)
        }
        (_, Some(xp)) => Ok(TrainingPoint::Experience(xp)),
        (Some(level), None) => Ok(TrainingPoint::Level(level)),
        (None, None) => Ok(TrainingPoint::Level(default_level)),
    }
}

/// A real skill level, 1..=99
fn skill_level(arg: &str) -> std::result::Result<u32, String> {
    let level: u32 = arg.parse().map_err(|_| format!("'{}' is not a level", arg))?;
    if !(1..=MAX_LEVEL).contains(&level) {
        return Err(format!("level {} is outside 1..={}", level, MAX_LEVEL));
    }
    Ok(level)
}
