//! Utility types: collector configuration and log levels.

pub mod config;
pub mod logging;

pub use config::{CollectorConfig, RuleOrdering};
pub use logging::LogLevel;
