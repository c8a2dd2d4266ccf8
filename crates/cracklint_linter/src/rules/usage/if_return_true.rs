//! IfReturnTrue rule implementation (CC0007).
//!
//! Flags `if`/`else` statements whose branches do nothing but return
//! complementary boolean literals:
//!
//! ```java
//! if (x > 0) { return true; } else { return false; }  // return x > 0;
//! if (x > 0) return false; else return true;          // return !(x > 0);
//! ```
//!
//! Branches returning the same literal are not flagged.

use cracklint_diagnostics::{Diagnostic, Severity, Violation};
use cracklint_syntax::helpers::resolve_single_statement;
use cracklint_syntax::{Expr, ExprBooleanLiteral, Stmt, StmtIf, StmtKind, StmtReturn};

use crate::{BuiltinRule, Category, CheckContext, Rule, RuleDescriptor};

const DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    id: "CC0007",
    name: "IfReturnTrue",
    title: "Return Condition directly",
    message_format: "{0}",
    category: Category::Usage,
    default_severity: Severity::Warning,
    enabled_by_default: true,
    description: "Using an if/else to return true/false depending on the condition isn't useful.\n\
                  As the condition is already a boolean it can be returned directly",
};

/// Violation: the condition can be returned directly.
#[derive(Debug, Clone)]
pub struct IfReturnTrueViolation;

impl Violation for IfReturnTrueViolation {
    const CODE: &'static str = DESCRIPTOR.id;
    const DEFAULT_SEVERITY: Severity = DESCRIPTOR.default_severity;

    fn message(&self) -> String {
        DESCRIPTOR.format_message(&["You should return directly."])
    }
}

/// Rule CC0007.
#[derive(Debug, Clone, Default)]
pub struct IfReturnTrue;

const RELEVANT_KINDS: &[StmtKind] = &[StmtKind::If];

impl BuiltinRule for IfReturnTrue {
    const DESCRIPTOR: &'static RuleDescriptor = &DESCRIPTOR;
}

impl Rule for IfReturnTrue {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &DESCRIPTOR
    }

    fn relevant_kinds(&self) -> &'static [StmtKind] {
        RELEVANT_KINDS
    }

    fn check(&self, _ctx: &CheckContext, stmt: &Stmt) -> Vec<Diagnostic> {
        let Stmt::If(stmt_if) = stmt else {
            return vec![];
        };
        analyze(stmt_if).into_iter().collect()
    }
}

/// Match an `if` statement against the pattern, anchoring the diagnostic at
/// the `if` keyword.
pub fn analyze(stmt_if: &StmtIf) -> Option<Diagnostic> {
    let orelse = stmt_if.orelse.as_ref()?;

    let then_stmt = resolve_single_statement(&stmt_if.body)?;
    let else_stmt = resolve_single_statement(&orelse.body)?;

    let then_value = returned_value(then_stmt)?;
    let else_value = returned_value(else_stmt)?;

    let then_literal = boolean_literal(then_value)?;
    let else_literal = boolean_literal(else_value)?;
    if then_literal == else_literal {
        return None;
    }

    Some(Diagnostic::new(IfReturnTrueViolation, stmt_if.if_keyword))
}

/// The value of a `return <value>;` statement.
fn returned_value(stmt: &Stmt) -> Option<&Expr> {
    match stmt {
        Stmt::Return(StmtReturn { value, .. }) => value.as_deref(),
        Stmt::If(_) | Stmt::Block(_) | Stmt::Other(_) => None,
    }
}

fn boolean_literal(expr: &Expr) -> Option<bool> {
    match expr {
        Expr::BooleanLiteral(ExprBooleanLiteral { value, .. }) => Some(*value),
        Expr::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use cracklint_java_parser::JavaParser;
    use cracklint_syntax::lower_tree;
    use cracklint_syntax::visitor::{Visitor, walk_source_tree, walk_stmt};
    use cracklint_text_size::{TextRange, TextSize};

    use super::*;

    /// Collects every `if` statement in a tree.
    #[derive(Default)]
    struct Ifs<'a>(Vec<&'a StmtIf>);

    impl<'a> Visitor<'a> for Ifs<'a> {
        fn visit_stmt(&mut self, stmt: &'a Stmt) {
            if let Stmt::If(stmt_if) = stmt {
                self.0.push(stmt_if);
            }
            walk_stmt(self, stmt);
        }
    }

    fn check_source(source: &str) -> Vec<Diagnostic> {
        let mut parser = JavaParser::new();
        let result = parser.parse(source).unwrap();
        let tree = lower_tree(&result.tree, source);
        let ctx = CheckContext::new(source);
        let rule = IfReturnTrue;

        let mut ifs = Ifs::default();
        walk_source_tree(&mut ifs, &tree);

        let mut diagnostics = vec![];
        for stmt_if in ifs.0 {
            diagnostics.extend(rule.check(&ctx, &Stmt::If(stmt_if.clone())));
        }
        diagnostics
    }

    fn in_method(body: &str) -> String {
        format!(
            r#"
class Test {{
    boolean method(int x, boolean cond, boolean y) {{
        {body}
    }}
}}
"#
        )
    }

    #[test]
    fn test_if_true_else_false_violation() {
        let source = in_method("if (x > 0) { return true; } else { return false; }");
        let diagnostics = check_source(&source);
        assert_eq!(diagnostics.len(), 1, "if true else false should be violation");

        let diagnostic = &diagnostics[0];
        assert_eq!(diagnostic.code(), "CC0007");
        assert_eq!(diagnostic.message(), "You should return directly.");
        assert_eq!(diagnostic.severity, Severity::Warning);
    }

    #[test]
    fn test_if_false_else_true_violation() {
        let source = in_method("if (x > 0) return false; else return true;");
        assert_eq!(check_source(&source).len(), 1);
    }

    #[test]
    fn test_mixed_block_and_bare_branches_violation() {
        let source = in_method("if (cond) { return false; } else return true;");
        assert_eq!(check_source(&source).len(), 1);
    }

    #[test]
    fn test_diagnostic_is_anchored_at_if_keyword() {
        let source = in_method(
            "if (cond)
            return true;
        else
            return false;",
        );
        let diagnostics = check_source(&source);
        assert_eq!(diagnostics.len(), 1);

        let start = TextSize::new(source.find("if (cond)").unwrap() as u32);
        assert_eq!(diagnostics[0].range, TextRange::at(start, TextSize::new(2)));
    }

    #[test]
    fn test_no_else_no_violation() {
        let source = in_method("if (x > 0) return true;\n        return false;");
        assert!(check_source(&source).is_empty(), "No else clause should not be violation");
    }

    #[test]
    fn test_multi_statement_block_no_violation() {
        let source = in_method("if (cond) { log(); return true; } else { return false; }");
        assert!(check_source(&source).is_empty());

        let source = in_method("if (cond) { return true; } else { x++; return false; }");
        assert!(check_source(&source).is_empty());
    }

    #[test]
    fn test_empty_block_no_violation() {
        let source = in_method("if (cond) { } else { return false; }\n        return true;");
        assert!(check_source(&source).is_empty());
    }

    #[test]
    fn test_non_literal_no_violation() {
        let source = in_method("if (cond) return true; else return y;");
        assert!(check_source(&source).is_empty(), "Non-literal return should not be violation");

        let source = in_method("if (cond) return (true); else return false;");
        assert!(check_source(&source).is_empty(), "Parenthesized literal is not a literal");
    }

    #[test]
    fn test_same_literal_no_violation() {
        let source = in_method("if (cond) return true; else return true;");
        assert!(check_source(&source).is_empty());

        let source = in_method("if (cond) { return false; } else { return false; }");
        assert!(check_source(&source).is_empty());
    }

    #[test]
    fn test_non_return_branch_no_violation() {
        let source = in_method("if (cond) { y = true; } else { return false; }\n        return y;");
        assert!(check_source(&source).is_empty());
    }

    #[test]
    fn test_nested_block_no_violation() {
        let source = in_method("if (cond) { { return true; } } else { return false; }");
        assert!(check_source(&source).is_empty());
    }

    #[test]
    fn test_else_if_chain_flags_inner_if_only() {
        let source = in_method(
            "if (x > 10) { return true; } else if (x > 0) { return false; } else { return true; }",
        );
        let diagnostics = check_source(&source);
        assert_eq!(diagnostics.len(), 1);

        let inner = TextSize::new(source.find("if (x > 0)").unwrap() as u32);
        assert_eq!(diagnostics[0].range.start(), inner);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let source = in_method("if (cond) return true; else return false;");
        let mut parser = JavaParser::new();
        let result = parser.parse(&source).unwrap();
        let tree = lower_tree(&result.tree, &source);

        let mut ifs = Ifs::default();
        walk_source_tree(&mut ifs, &tree);
        let stmt_if = ifs.0[0];

        let first = analyze(stmt_if);
        assert!(first.is_some());
        assert_eq!(first, analyze(stmt_if));
    }

    #[test]
    fn test_descriptor() {
        assert_eq!(IfReturnTrue.name(), "IfReturnTrue");
        assert_eq!(IfReturnTrue.descriptor().id, "CC0007");
        assert_eq!(IfReturnTrue.relevant_kinds(), &[StmtKind::If]);
    }
}
