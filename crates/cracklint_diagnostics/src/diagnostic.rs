//! Diagnostic types for reporting violations.

use get_size2::GetSize;

use cracklint_text_size::{Ranged, TextRange};

use crate::Severity;

/// A trait for violations that can be reported as diagnostics.
pub trait Violation: std::fmt::Debug + Clone + Send + Sync {
    /// The stable rule identifier (e.g., "CC0007").
    const CODE: &'static str;

    /// Severity used when configuration does not override it.
    const DEFAULT_SEVERITY: Severity = Severity::Warning;

    /// Returns the message describing the violation.
    fn message(&self) -> String;
}

/// The kind of diagnostic (rule code and message).
#[derive(Debug, Clone, PartialEq, Eq, Hash, GetSize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagnosticKind {
    /// The rule code (e.g., "CC0007").
    pub code: String,
    /// The message body.
    pub body: String,
}

/// A diagnostic representing a violation found in source code.
#[derive(Debug, Clone, PartialEq, Eq, GetSize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// The kind of diagnostic.
    pub kind: DiagnosticKind,
    /// How seriously the host should treat the finding.
    pub severity: Severity,
    /// The range in the source where the violation occurs.
    pub range: TextRange,
}

impl Diagnostic {
    /// Create a new diagnostic from a violation, at the violation's default severity.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new<V: Violation>(violation: V, range: TextRange) -> Self {
        Self {
            kind: DiagnosticKind {
                code: V::CODE.to_string(),
                body: violation.message(),
            },
            severity: V::DEFAULT_SEVERITY,
            range,
        }
    }

    /// Replace the severity, e.g. with a configured override.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// The rule code of this diagnostic.
    pub fn code(&self) -> &str {
        &self.kind.code
    }

    /// The message body of this diagnostic.
    pub fn message(&self) -> &str {
        &self.kind.body
    }
}

impl Ranged for Diagnostic {
    fn range(&self) -> TextRange {
        self.range
    }
}
