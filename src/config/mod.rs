//! Configuration

pub mod settings;

pub use settings::{CalculatorConfig, config_path, load_config};
