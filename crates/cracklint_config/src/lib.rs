//! Configuration for cracklint.
//!
//! Two layers, merged per rule id:
//! - a Roslyn-style `.ruleset` XML file ([`Ruleset`]), and
//! - a `cracklint.toml` overlay ([`CracklintConfig`]) that wins over it.

mod action;
mod cracklint_config;
mod merged_config;
mod ruleset;

pub use action::RuleAction;
pub use cracklint_config::{CracklintConfig, CracklintConfigError};
pub use merged_config::{ConfigError, ConfigLoader, MergedConfig};
pub use ruleset::{RuleEntry, RuleGroup, Ruleset, RulesetError};
