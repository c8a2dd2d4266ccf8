//! Parser for cracklint.toml configuration files.
//!
//! cracklint.toml is an optional overlay over the `.ruleset` file:
//!
//! ```toml
//! ruleset = "config/service.ruleset"
//!
//! [rules]
//! CC0007 = "error"
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::RuleAction;

#[derive(Error, Debug)]
pub enum CracklintConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Root cracklint.toml configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CracklintConfig {
    /// Path to a `.ruleset` file, relative to this file.
    pub ruleset: Option<String>,

    /// Per-rule action overrides keyed by rule id.
    #[serde(default)]
    pub rules: HashMap<String, RuleAction>,
}

impl CracklintConfig {
    /// Parse a cracklint.toml file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CracklintConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse cracklint.toml content.
    pub fn parse(content: &str) -> Result<Self, CracklintConfigError> {
        Ok(toml::from_str(content)?)
    }
}
