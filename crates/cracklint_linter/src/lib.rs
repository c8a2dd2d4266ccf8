//! Rule engine for cracklint.

pub mod checker;
pub mod descriptor;
pub mod registry;
pub mod rules;
pub mod suppression;

pub use checker::{Checker, check_tree, lint_source};
pub use descriptor::{Category, RuleDescriptor};
pub use registry::{BuiltinRule, RuleRegistry};
pub use suppression::SuppressionContext;

use cracklint_diagnostics::{Diagnostic, Severity};
use cracklint_source_file::{LineIndex, SourceCode};
use cracklint_syntax::{Stmt, StmtKind};

/// Context provided to rules during checking.
pub struct CheckContext<'a> {
    source: &'a str,
    line_index: LineIndex,
}

impl<'a> CheckContext<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            line_index: LineIndex::from_source_text(source),
        }
    }

    /// Get the source code helper for line/column info.
    pub fn source_code(&self) -> SourceCode<'a, '_> {
        SourceCode::new(self.source, &self.line_index)
    }
}

/// Trait for lint rules.
pub trait Rule: Send + Sync {
    /// Static metadata: id, title, category, default severity.
    fn descriptor(&self) -> &'static RuleDescriptor;

    /// The rule's name, e.g. `IfReturnTrue`.
    fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// Statement kinds this rule cares about. Empty means run on all statements.
    fn relevant_kinds(&self) -> &'static [StmtKind] {
        &[]
    }

    /// Check a statement for violations.
    fn check(&self, ctx: &CheckContext, stmt: &Stmt) -> Vec<Diagnostic>;
}

/// A rule instance together with the severity configuration resolved for it.
pub struct EnabledRule {
    pub rule: Box<dyn Rule>,
    pub severity: Severity,
}

impl EnabledRule {
    pub fn new(rule: Box<dyn Rule>, severity: Severity) -> Self {
        Self { rule, severity }
    }

    pub fn id(&self) -> &'static str {
        self.rule.descriptor().id
    }
}

/// Result of linting a file.
#[derive(Debug, Default)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
    /// Diagnostics dropped by in-source suppressions.
    pub suppressed: usize,
}

impl LintResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics whose severity fails a check run.
    pub fn failures(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_failure())
    }

    /// Diagnostics that should be shown to the user.
    pub fn visible(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.severity.is_hidden())
    }
}
