//! Merged configuration from a `.ruleset` file and cracklint.toml.
//!
//! The ruleset sets rule actions; cracklint.toml overrides them per rule.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use cracklint_diagnostics::Severity;
use thiserror::Error;

use crate::{CracklintConfig, CracklintConfigError, RuleAction, Ruleset, RulesetError};

/// Error during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Ruleset error in {}: {source}", .path.display())]
    Ruleset {
        path: PathBuf,
        #[source]
        source: RulesetError,
    },
    #[error("cracklint.toml error in {}: {source}", .path.display())]
    Cracklint {
        path: PathBuf,
        #[source]
        source: CracklintConfigError,
    },
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Per-rule actions after merging all configuration layers.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
    actions: HashMap<String, RuleAction>,
    /// Files the configuration was read from, in load order.
    pub sources: Vec<PathBuf>,
}

impl MergedConfig {
    /// Merge a ruleset and an optional cracklint.toml overlay.
    pub fn new(ruleset: Option<&Ruleset>, cracklint: Option<&CracklintConfig>) -> Self {
        let mut actions = HashMap::new();

        if let Some(ruleset) = ruleset {
            for rule in ruleset.rules() {
                actions.insert(rule.id.clone(), rule.action);
            }
        }
        if let Some(cracklint) = cracklint {
            for (id, action) in &cracklint.rules {
                actions.insert(id.clone(), *action);
            }
        }

        Self {
            actions,
            sources: Vec::new(),
        }
    }

    /// The configured action for a rule id ([`RuleAction::Default`] if unset).
    pub fn action(&self, id: &str) -> RuleAction {
        self.actions.get(id).copied().unwrap_or_default()
    }

    /// The severity a rule reports at, or `None` if it is disabled.
    pub fn effective_severity(
        &self,
        id: &str,
        default: Severity,
        enabled_by_default: bool,
    ) -> Option<Severity> {
        self.action(id).severity(default, enabled_by_default)
    }

    /// Rule ids mentioned by any configuration layer, sorted.
    pub fn configured_ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.actions.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

/// Builder for loading configuration from files.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    ruleset_path: Option<PathBuf>,
    cracklint_path: Option<PathBuf>,
}

/// Where cracklint.toml is looked up, relative to the search root.
const CRACKLINT_CANDIDATES: &[&str] = &[
    "cracklint.toml",
    ".cracklint.toml",
    "config/cracklint.toml",
];

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `.ruleset` path.
    #[must_use]
    pub fn ruleset(mut self, path: impl AsRef<Path>) -> Self {
        self.ruleset_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the cracklint.toml path.
    #[must_use]
    pub fn cracklint(mut self, path: impl AsRef<Path>) -> Self {
        self.cracklint_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Look for cracklint.toml under `root` unless a path was set explicitly.
    #[must_use]
    pub fn find_cracklint(mut self, root: impl AsRef<Path>) -> Self {
        if self.cracklint_path.is_none() {
            self.cracklint_path = CRACKLINT_CANDIDATES
                .iter()
                .map(|candidate| root.as_ref().join(candidate))
                .find(|path| path.is_file());
        }
        self
    }

    /// Load and merge the configuration.
    ///
    /// With no files configured this yields an empty config, under which
    /// every rule runs with its descriptor defaults.
    pub fn load(self) -> Result<MergedConfig, ConfigError> {
        let mut sources = Vec::new();

        let cracklint = match &self.cracklint_path {
            Some(path) => {
                let config = CracklintConfig::from_file(path).map_err(|source| match source {
                    CracklintConfigError::Io(err) if err.kind() == std::io::ErrorKind::NotFound => {
                        ConfigError::NotFound(path.clone())
                    }
                    source => ConfigError::Cracklint {
                        path: path.clone(),
                        source,
                    },
                })?;
                sources.push(path.clone());
                Some(config)
            }
            None => None,
        };

        // An explicit ruleset wins over the one named in cracklint.toml, which
        // is resolved relative to that file.
        let ruleset_path = self.ruleset_path.or_else(|| {
            let relative = cracklint.as_ref()?.ruleset.as_ref()?;
            let base = self
                .cracklint_path
                .as_deref()
                .and_then(Path::parent)
                .unwrap_or_else(|| Path::new(""));
            Some(base.join(relative))
        });

        let ruleset = match ruleset_path {
            Some(path) if path.is_file() => {
                let ruleset = Ruleset::from_file(&path).map_err(|source| ConfigError::Ruleset {
                    path: path.clone(),
                    source,
                })?;
                sources.push(path);
                Some(ruleset)
            }
            Some(path) => return Err(ConfigError::NotFound(path)),
            None => None,
        };

        let mut merged = MergedConfig::new(ruleset.as_ref(), cracklint.as_ref());
        merged.sources = sources;
        Ok(merged)
    }
}
