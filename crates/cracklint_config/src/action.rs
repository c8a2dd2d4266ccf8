use cracklint_diagnostics::Severity;
use serde::Deserialize;

/// What to do with a rule's diagnostics.
///
/// Mirrors the `Action` attribute of `.ruleset` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleAction {
    /// Keep the rule's descriptor defaults.
    #[default]
    Default,
    /// Do not run the rule.
    None,
    Hidden,
    Info,
    Warning,
    Error,
}

impl RuleAction {
    /// Parse an action name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        if let Ok(severity) = value.parse::<Severity>() {
            return Some(severity.into());
        }
        match value.to_ascii_lowercase().as_str() {
            "default" => Some(RuleAction::Default),
            "none" | "off" | "disabled" | "disable" => Some(RuleAction::None),
            _ => None,
        }
    }

    /// The severity to report at, or `None` if the rule is disabled.
    pub fn severity(self, default: Severity, enabled_by_default: bool) -> Option<Severity> {
        match self {
            RuleAction::Default => enabled_by_default.then_some(default),
            RuleAction::None => None,
            RuleAction::Hidden => Some(Severity::Hidden),
            RuleAction::Info => Some(Severity::Info),
            RuleAction::Warning => Some(Severity::Warning),
            RuleAction::Error => Some(Severity::Error),
        }
    }
}

impl From<Severity> for RuleAction {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Hidden => RuleAction::Hidden,
            Severity::Info => RuleAction::Info,
            Severity::Warning => RuleAction::Warning,
            Severity::Error => RuleAction::Error,
        }
    }
}

impl<'de> Deserialize<'de> for RuleAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RuleAction::parse(&s).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "Invalid rule action: {s}. Expected none, hidden, info, warning, error, or default"
            ))
        })
    }
}
