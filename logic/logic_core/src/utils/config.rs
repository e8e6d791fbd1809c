//! Collector configuration.
//!
//! Configuration is plain serde data with a default for every field, so an
//! empty document yields the default collector behaviour.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigurationError, Result};
use crate::utils::LogLevel;

/// How rules are ordered within a type's rule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RuleOrdering {
    /// Plain concatenation in collection order.
    #[default]
    Collection,

    /// Each grouping pass stable-sorts its rules by index before appending.
    /// Rules from different passes are never interleaved.
    IndexWithinPass,
}

/// Configuration for a logic rule collector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Force one permission reload on complex backends before the first pass.
    #[serde(default = "default_true")]
    pub reload_permissions_once: bool,

    /// Copy each type's rules to all of its descendant types.
    #[serde(default = "default_true")]
    pub propagate_to_descendants: bool,

    /// Ordering of rules within a type's list.
    #[serde(default)]
    pub ordering: RuleOrdering,

    /// Level of the per-pass summary log line.
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_true() -> bool {
    true
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            reload_permissions_once: default_true(),
            propagate_to_descendants: default_true(),
            ordering: RuleOrdering::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl CollectorConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ConfigurationError::Invalid(e.to_string()).into())
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
