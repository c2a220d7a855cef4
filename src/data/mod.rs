//! Activity data
//!
//! Per-skill activity tables, the sources they load from, and a shared
//! cache of loaded tables.

pub mod activities;
pub mod defaults;
pub mod loader;

pub use activities::{Activity, ActivitySet, SkillBonus};
pub use defaults::default_activities;
pub use loader::{
    ActivityCache, ActivitySource, BuiltinActivitySource,
    FileActivitySource, InMemoryActivitySource, parse_activity_set,
};
