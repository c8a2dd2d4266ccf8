//! Static rule metadata consumed by the registry and by reporting.

use std::fmt;

use cracklint_diagnostics::Severity;

/// Base URL for per-rule documentation pages.
const HELP_BASE_URL: &str = "https://code-cracker.github.io/diagnostics";

/// Rule category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Design,
    Naming,
    Performance,
    Refactoring,
    Reliability,
    Security,
    Style,
    Usage,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Design => "Design",
            Category::Naming => "Naming",
            Category::Performance => "Performance",
            Category::Refactoring => "Refactoring",
            Category::Reliability => "Reliability",
            Category::Security => "Security",
            Category::Style => "Style",
            Category::Usage => "Usage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes a rule independently of any rule instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDescriptor {
    /// Stable identifier, e.g. `CC0007`.
    pub id: &'static str,
    /// Rule type name, e.g. `IfReturnTrue`.
    pub name: &'static str,
    pub title: &'static str,
    /// Message template with positional `{0}`, `{1}`, ... placeholders.
    pub message_format: &'static str,
    pub category: Category,
    pub default_severity: Severity,
    pub enabled_by_default: bool,
    pub description: &'static str,
}

impl RuleDescriptor {
    /// Documentation URL for this rule.
    pub fn help_link(&self) -> String {
        format!("{HELP_BASE_URL}/{}.html", self.id)
    }

    /// Fill the message template with positional arguments.
    ///
    /// Placeholders without a matching argument are left as written.
    pub fn format_message(&self, args: &[&str]) -> String {
        let mut message = self.message_format.to_string();
        for (index, arg) in args.iter().enumerate() {
            message = message.replace(&format!("{{{index}}}"), arg);
        }
        message
    }
}
