//! Activity data loading
//!
//! Loads per-skill activity tables from RON or JSON files, with fallback to
//! the built-in tables, and caches one shared snapshot per calculator.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use super::activities::ActivitySet;
use super::defaults::default_activities;
use crate::error::{CalcError, Result};
use crate::skills::CalculatorType;

/// Anything that can produce the activity table of a calculator
pub trait ActivitySource: Send + Sync {
    fn load(&self, calculator: CalculatorType) -> Result<ActivitySet>;
}

/// Compiled-in tables; calculators without one get an empty set
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinActivitySource;

impl ActivitySource for BuiltinActivitySource {
    fn load(&self, calculator: CalculatorType) -> Result<ActivitySet> {
        Ok(default_activities(calculator).unwrap_or_else(|| {
            log::debug!("No built-in activities for {}", calculator);
            ActivitySet::default()
        }))
    }
}

/// Tables supplied directly by the caller
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivitySource {
    sets: HashMap<CalculatorType, ActivitySet>,
}

impl InMemoryActivitySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, calculator: CalculatorType, set: ActivitySet) -> Self {
        self.sets.insert(calculator, set.sorted());
        self
    }
}

impl ActivitySource for InMemoryActivitySource {
    fn load(&self, calculator: CalculatorType) -> Result<ActivitySet> {
        Ok(self.sets.get(&calculator).cloned().unwrap_or_default())
    }
}

/// Reads `<base>/skill_<name>.ron` or `<base>/skill_<name>.json`
#[derive(Debug, Clone)]
pub struct FileActivitySource {
    base_path: PathBuf,
    fallback: bool,
}

impl FileActivitySource {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            fallback: false,
        }
    }

    /// Fall back to the built-in table when a file is missing or broken
    pub fn with_builtin_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// First existing data file for a calculator
    fn find_file(&self, calculator: CalculatorType) -> Option<PathBuf> {
        let stem = calculator.data_file();
        ["ron", "json"]
            .iter()
            .map(|ext| self.base_path.join(format!("{}.{}", stem, ext)))
            .find(|path| path.exists())
    }

    fn load_file(&self, calculator: CalculatorType) -> Result<ActivitySet> {
        let path = self.find_file(calculator).ok_or_else(|| {
            CalcError::Io(format!(
                "no data file for {} in {}",
                calculator,
                self.base_path.display()
            ))
        })?;

        let content = fs::read_to_string(&path)?;
        let set = parse_activity_set(&path, &content)?;
        log::info!("Loaded {} {} activities from {:?}", set.len(), calculator, path);
        Ok(set)
    }
}

impl ActivitySource for FileActivitySource {
    fn load(&self, calculator: CalculatorType) -> Result<ActivitySet> {
        match self.load_file(calculator) {
            Ok(set) => Ok(set),
            Err(e) if self.fallback => {
                log::warn!("Failed to load {} data: {}. Using defaults.", calculator, e);
                BuiltinActivitySource.load(calculator)
            }
            Err(e) => Err(e),
        }
    }
}

/// Parse a data file by extension: `.json` via serde_json, anything else as RON.
/// Rows with unusable experience or level values reject the whole file.
pub fn parse_activity_set(path: &Path, content: &str) -> Result<ActivitySet> {
    let parsed = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str::<ActivitySet>(content).map_err(|e| e.to_string()),
        _ => ron::from_str::<ActivitySet>(content).map_err(|e| e.to_string()),
    };
    let set = parsed.map_err(|e| CalcError::Parse(format!("{}: {}", path.display(), e)))?;

    for activity in set.activities() {
        if let Some(defect) = activity.defect() {
            return Err(CalcError::Parse(format!(
                "{}: {}: {}",
                path.display(),
                activity.name,
                defect
            )));
        }
    }
    Ok(set.sorted())
}

/// Shared per-calculator snapshots.
///
/// Readers get an `Arc` and keep it for the whole calculation; a reload
/// swaps in a new `Arc` without touching the old one.
pub struct ActivityCache {
    source: Box<dyn ActivitySource>,
    sets: RwLock<HashMap<CalculatorType, Arc<ActivitySet>>>,
}

impl ActivityCache {
    pub fn new(source: impl ActivitySource + 'static) -> Self {
        Self {
            source: Box::new(source),
            sets: RwLock::new(HashMap::new()),
        }
    }

    /// Activities of a calculator, loading them on first use
    pub fn activities_for(&self, calculator: CalculatorType) -> Result<Arc<ActivitySet>> {
        if let Some(set) = self.sets.read().get(&calculator) {
            return Ok(Arc::clone(set));
        }

        let loaded = Arc::new(self.source.load(calculator)?);
        let mut sets = self.sets.write();
        // Another caller may have loaded it while we were reading the file
        Ok(Arc::clone(sets.entry(calculator).or_insert(loaded)))
    }

    /// Load again from the source and replace the snapshot
    pub fn reload(&self, calculator: CalculatorType) -> Result<Arc<ActivitySet>> {
        let loaded = Arc::new(self.source.load(calculator)?);
        self.sets.write().insert(calculator, Arc::clone(&loaded));
        log::debug!("Reloaded {} activities", calculator);
        Ok(loaded)
    }

    /// Replace the snapshot with caller-supplied data
    pub fn insert(&self, calculator: CalculatorType, set: ActivitySet) -> Arc<ActivitySet> {
        let set = Arc::new(set.sorted());
        self.sets.write().insert(calculator, Arc::clone(&set));
        set
    }

    pub fn is_loaded(&self, calculator: CalculatorType) -> bool {
        self.sets.read().contains_key(&calculator)
    }

    pub fn clear(&self) {
        self.sets.write().clear();
    }
}

impl Default for ActivityCache {
    fn default() -> Self {
        Self::new(BuiltinActivitySource)
    }
}

impl std::fmt::Debug for ActivityCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityCache")
            .field("loaded", &self.sets.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Activity;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("skillcalc-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_ron_file() {
        let dir = scratch_dir("ron");
        fs::write(
            dir.join("skill_agility.ron"),
            r#"(
                activities: [
                    (name: "Draynor rooftop", level: 10, xp: 120.0),
                    (name: "Gnome course", level: 1, xp: 86.5, icon: Some(2150)),
                ],
            )"#,
        )
        .unwrap();

        let set = FileActivitySource::new(&dir).load(CalculatorType::Agility).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.activities()[0].name, "Gnome course");
        assert_eq!(set.activities()[0].icon, Some(2150));
        assert!(set.bonuses.is_empty());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_json_file() {
        let dir = scratch_dir("json");
        fs::write(
            dir.join("skill_thieving.json"),
            r#"{
                "actions": [{ "level": 1, "icon": 1965, "name": "Man / Woman", "xp": 8 }],
                "bonuses": [{ "name": "Rogue outfit", "value": 0.0 }]
            }"#,
        )
        .unwrap();

        let set = FileActivitySource::new(&dir).load(CalculatorType::Thieving).unwrap();
        assert_eq!(set.activities()[0].xp, 8.0);
        assert_eq!(set.bonuses.len(), 1);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file() {
        let dir = scratch_dir("missing");

        let strict = FileActivitySource::new(&dir);
        assert!(matches!(strict.load(CalculatorType::Mining), Err(CalcError::Io(_))));

        let lenient = FileActivitySource::new(&dir).with_builtin_fallback(true);
        assert!(!lenient.load(CalculatorType::Mining).unwrap().is_empty());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_parse_error() {
        let err = parse_activity_set(Path::new("skill_cooking.ron"), "(activities: [oops])");
        assert!(matches!(err, Err(CalcError::Parse(_))));
    }

    #[test]
    fn test_rejects_bad_yield() {
        let path = Path::new("skill_mining.ron");
        let err = parse_activity_set(
            path,
            r#"(activities: [
                (name: "Copper ore", level: 1, xp: 17.5),
                (name: "Bad rock", level: 1, xp: inf),
            ])"#,
        )
        .unwrap_err();
        match err {
            CalcError::Parse(message) => {
                assert!(message.starts_with("skill_mining.ron: Bad rock: "), "{}", message);
            }
            other => panic!("expected a parse error, got {:?}", other),
        }

        let negative = r#"(activities: [(name: "Sinkhole", level: 1, xp: -5.0)])"#;
        assert!(matches!(parse_activity_set(path, negative), Err(CalcError::Parse(_))));

        let json = r#"{ "actions": [{ "name": "Deep ore", "level": 120, "xp": 10 }] }"#;
        assert!(matches!(
            parse_activity_set(Path::new("skill_mining.json"), json),
            Err(CalcError::Parse(_))
        ));
    }

    #[test]
    fn test_bad_file_falls_back_to_defaults() {
        let dir = scratch_dir("bad-yield");
        fs::write(dir.join("skill_mining.ron"), r#"(activities: [(name: "Bad", level: 1, xp: NaN)])"#)
            .unwrap();

        assert!(matches!(
            FileActivitySource::new(&dir).load(CalculatorType::Mining),
            Err(CalcError::Parse(_))
        ));
        let lenient = FileActivitySource::new(&dir).with_builtin_fallback(true);
        assert!(lenient.load(CalculatorType::Mining).unwrap().find("Bad").is_none());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_cache_reuses_snapshot() {
        let cache = ActivityCache::default();
        assert!(!cache.is_loaded(CalculatorType::Mining));

        let first = cache.activities_for(CalculatorType::Mining).unwrap();
        let second = cache.activities_for(CalculatorType::Mining).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_cache_insert_replaces_snapshot() {
        let cache = ActivityCache::default();
        let before = cache.activities_for(CalculatorType::Mining).unwrap();

        cache.insert(CalculatorType::Mining, ActivitySet::new(vec![Activity::new("Bones", 1, 4.5)]));
        let after = cache.activities_for(CalculatorType::Mining).unwrap();

        // Holders of the old snapshot are unaffected
        assert!(before.len() > 1);
        assert_eq!(after.len(), 1);

        let reloaded = cache.reload(CalculatorType::Mining).unwrap();
        assert_eq!(reloaded.len(), before.len());
    }
}
