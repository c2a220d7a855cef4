//! Calculator errors
//!
//! Every failure is reported to the caller as-is. Nothing here is retried
//! or silently corrected.

use thiserror::Error;

/// Errors produced by the calculator core and its data collaborators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Level outside the experience table's domain
    #[error("level {level} is out of range (1..={max})")]
    OutOfRange { level: u32, max: u32 },

    /// Experience value that can never be valid (negative, NaN, infinite)
    #[error("invalid experience value: {0}")]
    InvalidInput(f64),

    /// Target lies before the start point
    #[error("target experience {target} is below start experience {start}")]
    InvalidRange { start: f64, target: f64 },

    /// Data or config file could not be read
    #[error("IO error: {0}")]
    Io(String),

    /// Data or config file could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;

impl From<std::io::Error> for CalcError {
    fn from(e: std::io::Error) -> Self {
        CalcError::Io(e.to_string())
    }
}
