//! Parser for Roslyn-style `.ruleset` files.
//!
//! ```xml
//! <RuleSet Name="Project rules" ToolsVersion="15.0">
//!   <Rules AnalyzerId="CodeCracker.CSharp" RuleNamespace="CodeCracker.CSharp">
//!     <Rule Id="CC0007" Action="Error" />
//!   </Rules>
//! </RuleSet>
//! ```

use std::path::Path;

use quick_xml::de::from_str;
use serde::Deserialize;
use thiserror::Error;

use crate::RuleAction;

#[derive(Error, Debug)]
pub enum RulesetError {
    #[error("Failed to read ruleset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse XML: {0}")]
    Xml(#[from] quick_xml::DeError),
}

/// A single `<Rule Id=".." Action=".."/>` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleEntry {
    #[serde(rename = "@Id")]
    pub id: String,
    #[serde(rename = "@Action")]
    pub action: RuleAction,
}

/// A `<Rules>` group, scoped to one analyzer package.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleGroup {
    #[serde(default, rename = "@AnalyzerId")]
    pub analyzer_id: Option<String>,
    #[serde(default, rename = "@RuleNamespace")]
    pub rule_namespace: Option<String>,
    #[serde(default, rename = "Rule")]
    pub rules: Vec<RuleEntry>,
}

/// Root `<RuleSet>` element.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename = "RuleSet")]
pub struct Ruleset {
    #[serde(default, rename = "@Name")]
    pub name: Option<String>,
    #[serde(default, rename = "@Description")]
    pub description: Option<String>,
    #[serde(default, rename = "Rules")]
    pub groups: Vec<RuleGroup>,
}

impl Ruleset {
    /// Parse a `.ruleset` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RulesetError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse `.ruleset` XML content.
    pub fn parse(content: &str) -> Result<Self, RulesetError> {
        Ok(from_str(content)?)
    }

    /// All rule entries across groups, in document order.
    pub fn rules(&self) -> impl Iterator<Item = &RuleEntry> {
        self.groups.iter().flat_map(|group| group.rules.iter())
    }
}
