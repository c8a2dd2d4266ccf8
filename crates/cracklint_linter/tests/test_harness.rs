//! Shared helpers for fixture-driven rule tests.
//!
//! Fixtures mark the lines that should be reported with a trailing
//! `// violation` comment; [`LineComparison`] reports which marked lines were
//! found, which were missed, and which reported lines were never marked.

#![allow(dead_code)]

use std::collections::BTreeSet;

use cracklint_linter::{EnabledRule, LintResult, RuleRegistry, lint_source};
use cracklint_source_file::{LineIndex, SourceCode};
use cracklint_text_size::Ranged;

/// Marker comment for an expected diagnostic on the same line.
pub const VIOLATION_MARKER: &str = "// violation";

/// Expected vs reported lines for one fixture.
#[derive(Debug, Clone)]
pub struct LineComparison {
    pub expected: BTreeSet<usize>,
    pub actual: BTreeSet<usize>,
}

impl LineComparison {
    pub fn new(
        expected: impl IntoIterator<Item = usize>,
        actual: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            expected: expected.into_iter().collect(),
            actual: actual.into_iter().collect(),
        }
    }

    /// Marked lines with no diagnostic.
    pub fn missing(&self) -> Vec<usize> {
        self.expected.difference(&self.actual).copied().collect()
    }

    /// Reported lines nobody marked.
    pub fn false_positives(&self) -> Vec<usize> {
        self.actual.difference(&self.expected).copied().collect()
    }

    pub fn is_exact(&self) -> bool {
        self.expected == self.actual
    }

    pub fn assert_exact(&self, name: &str) {
        assert!(
            self.is_exact(),
            "{name}: missing lines {:?}, false positives on lines {:?}",
            self.missing(),
            self.false_positives()
        );
    }
}

/// One-indexed lines carrying a [`VIOLATION_MARKER`].
pub fn marked_lines(source: &str) -> Vec<usize> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| line.contains(VIOLATION_MARKER))
        .map(|(index, _)| index + 1)
        .collect()
}

/// All built-in rules at their default severities.
pub fn default_rules() -> Vec<EnabledRule> {
    RuleRegistry::builtin().enabled_rules(&cracklint_config::MergedConfig::default())
}

/// Lint `source` and panic if it could not be parsed at all.
pub fn lint(source: &str, rules: &[EnabledRule]) -> LintResult {
    let Some(result) = lint_source(source, rules) else {
        panic!("Failed to parse source");
    };
    result
}

/// One-indexed lines of every reported diagnostic.
pub fn reported_lines(source: &str, result: &LintResult) -> Vec<usize> {
    let line_index = LineIndex::from_source_text(source);
    let source_code = SourceCode::new(source, &line_index);
    result
        .diagnostics
        .iter()
        .map(|diagnostic| source_code.line_column(diagnostic.start()).line.get())
        .collect()
}
