//! Tree traversal that dispatches statements to rules.

use cracklint_diagnostics::Diagnostic;
use cracklint_java_parser::JavaParser;
use cracklint_syntax::visitor::{Visitor, walk_source_tree, walk_stmt};
use cracklint_syntax::{CstNode, SourceTree, Stmt, lower_tree};
use cracklint_text_size::Ranged;
use tracing::{debug, trace};

use crate::{CheckContext, EnabledRule, LintResult, SuppressionContext};

/// Visits every statement and runs the rules subscribed to its kind.
pub struct Checker<'a, 'r> {
    ctx: &'r CheckContext<'a>,
    rules: &'r [EnabledRule],
    diagnostics: Vec<Diagnostic>,
}

impl<'a, 'r> Checker<'a, 'r> {
    pub fn new(ctx: &'r CheckContext<'a>, rules: &'r [EnabledRule]) -> Self {
        Self {
            ctx,
            rules,
            diagnostics: Vec::new(),
        }
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl<'t> Visitor<'t> for Checker<'_, '_> {
    fn visit_stmt(&mut self, stmt: &'t Stmt) {
        let kind = stmt.kind();
        for enabled in self.rules {
            let relevant = enabled.rule.relevant_kinds();
            if !relevant.is_empty() && !relevant.contains(&kind) {
                continue;
            }
            trace!(rule = enabled.id(), ?kind, "checking statement");
            for diagnostic in enabled.rule.check(self.ctx, stmt) {
                let loc = self.ctx.source_code().line_column(diagnostic.start());
                debug!(
                    rule = enabled.id(),
                    line = loc.line.get(),
                    column = loc.column.get(),
                    "rule reported"
                );
                self.diagnostics.push(diagnostic.with_severity(enabled.severity));
            }
        }
        walk_stmt(self, stmt);
    }
}

/// Run rules over an already-lowered tree.
pub fn check_tree(
    ctx: &CheckContext,
    tree: &SourceTree,
    rules: &[EnabledRule],
) -> Vec<Diagnostic> {
    let mut checker = Checker::new(ctx, rules);
    walk_source_tree(&mut checker, tree);
    checker.into_diagnostics()
}

/// Parse, lower and check a Java source file, honoring in-source suppressions.
///
/// Returns `None` if the parser could not produce a tree at all.
pub fn lint_source(source: &str, rules: &[EnabledRule]) -> Option<LintResult> {
    let mut parser = JavaParser::new();
    let parsed = parser.parse(source)?;
    if parsed.has_syntax_errors() {
        debug!("source has syntax errors; checking the recovered tree");
    }

    let tree = lower_tree(&parsed.tree, source);
    let ctx = CheckContext::new(source);
    let root = CstNode::new(parsed.tree.root_node(), source);
    let suppressions = SuppressionContext::from_tree(&root);

    let mut result = LintResult::new();
    for diagnostic in check_tree(&ctx, &tree, rules) {
        if suppressions.is_suppressed(&diagnostic) {
            result.suppressed += 1;
        } else {
            result.diagnostics.push(diagnostic);
        }
    }
    result.diagnostics.sort_by_key(|d| d.range.start());

    debug!(
        reported = result.diagnostics.len(),
        suppressed = result.suppressed,
        "checked source"
    );
    Some(result)
}

#[cfg(test)]
mod tests {
    use cracklint_diagnostics::Severity;
    use cracklint_syntax::StmtKind;
    use super::*;
    use crate::rules::IfReturnTrue;
    use crate::rules::usage::IfReturnTrueViolation;
    use crate::{Rule, RuleDescriptor};

    /// Reports every statement of the kinds it subscribes to.
    struct EveryStatement(&'static [StmtKind]);

    impl Rule for EveryStatement {
        fn descriptor(&self) -> &'static RuleDescriptor {
            <IfReturnTrue as crate::BuiltinRule>::DESCRIPTOR
        }

        fn relevant_kinds(&self) -> &'static [StmtKind] {
            self.0
        }

        fn check(&self, _ctx: &CheckContext, stmt: &Stmt) -> Vec<Diagnostic> {
            vec![Diagnostic::new(IfReturnTrueViolation, stmt.range())]
        }
    }

    const SOURCE: &str = r#"
class T {
    boolean f(boolean c) {
        while (c) {
            if (c) { return true; } else { return false; }
        }
        return c;
    }
}
"#;

    fn run(rules: Vec<EnabledRule>) -> LintResult {
        lint_source(SOURCE, &rules).expect("parse")
    }

    #[test]
    fn test_dispatch_respects_relevant_kinds() {
        let result = run(vec![EnabledRule::new(
            Box::new(EveryStatement(&[StmtKind::Return])),
            Severity::Warning,
        )]);
        // Two returns inside the if plus the trailing `return c;`.
        assert_eq!(result.diagnostics.len(), 3);
    }

    #[test]
    fn test_empty_relevant_kinds_means_all_statements() {
        let result = run(vec![EnabledRule::new(
            Box::new(EveryStatement(&[])),
            Severity::Warning,
        )]);
        // method block, while, loop block, if, two branch blocks, two returns, return c
        assert_eq!(result.diagnostics.len(), 9);
    }

    #[test]
    fn test_configured_severity_is_applied() {
        let result = run(vec![EnabledRule::new(
            Box::new(IfReturnTrue),
            Severity::Error,
        )]);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].severity, Severity::Error);
        assert_eq!(result.failures().count(), 1);
    }

    #[test]
    fn test_diagnostics_are_sorted_by_position() {
        let result = run(vec![EnabledRule::new(
            Box::new(EveryStatement(&[])),
            Severity::Warning,
        )]);
        let starts: Vec<_> = result.diagnostics.iter().map(|d| d.range.start()).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
    }
}
