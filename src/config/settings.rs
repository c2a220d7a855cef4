//! Calculator settings
//!
//! Stored as RON next to the user's other application data.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CalcError, Result};
use crate::progression::LevelCap;

/// Calculator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Directory holding `skill_<name>.ron` / `.json` activity files
    pub data_dir: PathBuf,
    /// Use the built-in tables when a data file is missing
    pub builtin_fallback: bool,
    /// Highest level start and target points may name
    pub level_cap: LevelCap,
    /// Report activities above the start level separately
    pub show_locked: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets/data"),
            builtin_fallback: true,
            level_cap: LevelCap::Canonical,
            show_locked: false,
        }
    }
}

impl CalculatorConfig {
    /// Read a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        ron::from_str(&content).map_err(|e| CalcError::Parse(format!("{}: {}", path.display(), e)))
    }

    /// Read a config file, falling back to defaults when it is missing or broken
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Failed to load config: {}. Using defaults.", e);
                Self::default()
            }
        }
    }
}

/// Default config file location
pub fn config_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "skillcalc", "Skillcalc") {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push("config.ron");
        path
    } else {
        PathBuf::from("./config.ron")
    }
}

/// Load the config from its default location (or create default)
pub fn load_config() -> CalculatorConfig {
    CalculatorConfig::load_or_default(&config_path())
}
