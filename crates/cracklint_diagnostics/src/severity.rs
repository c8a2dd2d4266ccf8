use std::fmt;
use std::str::FromStr;

use get_size2::GetSize;

/// How a diagnostic is surfaced to the user, lowest first.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, GetSize, is_macro::Is,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Reported to tooling but not shown.
    Hidden,
    /// Informational message.
    Info,
    /// Warning; fails the check command.
    #[default]
    Warning,
    /// Error; fails the check command.
    Error,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Hidden => "hidden",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Whether a diagnostic at this severity should fail a check run.
    pub const fn is_failure(self) -> bool {
        matches!(self, Severity::Warning | Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid severity: {}. Expected hidden, info, warning, or error",
            self.0
        )
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hidden" => Ok(Severity::Hidden),
            "info" | "information" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Warning".parse(), Ok(Severity::Warning));
        assert_eq!("ERROR".parse(), Ok(Severity::Error));
        assert_eq!("info".parse(), Ok(Severity::Info));
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn ordering_and_failure() {
        assert!(Severity::Hidden < Severity::Info);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Warning.is_failure());
        assert!(!Severity::Info.is_failure());
        assert!(Severity::Hidden.is_hidden());
    }
}
