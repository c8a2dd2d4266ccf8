//! Lowering from the tree-sitter Java CST to the typed tree.
//!
//! Lowering never fails: any node whose shape is not what a typed variant
//! needs (missing condition, missing keyword, error recovery) becomes
//! [`Stmt::Other`] and keeps its nested statements. So does any statement
//! with an `ERROR` node among its direct children.

use crate::cst::CstNode;
use crate::nodes::{
    ElseClause, Expr, ExprBooleanLiteral, ExprOther, SourceTree, Stmt, StmtBlock, StmtIf,
    StmtOther, StmtReturn,
};

/// Node kinds that are statements in the Java grammar.
const STATEMENT_KINDS: &[&str] = &[
    "assert_statement",
    "block",
    "break_statement",
    "continue_statement",
    "do_statement",
    "enhanced_for_statement",
    "expression_statement",
    "for_statement",
    "if_statement",
    "labeled_statement",
    "local_variable_declaration",
    "return_statement",
    "switch_expression",
    "synchronized_statement",
    "throw_statement",
    "try_statement",
    "try_with_resources_statement",
    "while_statement",
    "yield_statement",
];

/// The empty statement is an anonymous `;` token.
const EMPTY_STATEMENT: &str = ";";

fn is_statement(node: &CstNode) -> bool {
    STATEMENT_KINDS.contains(&node.kind())
}

/// Lower a parsed tree into a [`SourceTree`].
pub fn lower_tree(tree: &tree_sitter::Tree, source: &str) -> SourceTree {
    let root = CstNode::new(tree.root_node(), source);
    SourceTree {
        range: root.range(),
        body: nested_statements(&root),
    }
}

fn lower_stmt(node: &CstNode) -> Stmt {
    // Skipped tokens directly inside a statement break its shape.
    if node.children().any(|child| child.is_error()) {
        return other_stmt(node);
    }
    match node.kind() {
        "if_statement" => lower_if(node).unwrap_or_else(|| other_stmt(node)),
        "block" => Stmt::Block(StmtBlock {
            range: node.range(),
            body: block_statements(node),
        }),
        "return_statement" => Stmt::Return(StmtReturn {
            range: node.range(),
            value: node
                .named_children()
                .next()
                .map(|value| Box::new(lower_expr(&value))),
        }),
        _ => other_stmt(node),
    }
}

fn lower_if(node: &CstNode) -> Option<Stmt> {
    let if_keyword = node.token("if")?;
    let condition = node.child_by_field_name("condition")?;
    let consequence = node.child_by_field_name("consequence")?;

    let orelse = node.child_by_field_name("alternative").map(|alternative| {
        let body = else_body(&alternative);
        let range = match node.token("else").or_else(|| alternative.token("else")) {
            Some(keyword) => keyword.range().cover(body.range()),
            None => body.range(),
        };
        ElseClause {
            range,
            body: Box::new(lower_stmt(&body)),
        }
    });

    Some(Stmt::If(StmtIf {
        range: node.range(),
        if_keyword: if_keyword.range(),
        condition: Box::new(lower_expr(&condition)),
        body: Box::new(lower_stmt(&consequence)),
        orelse,
    }))
}

/// Grammar versions differ on whether `alternative` is the statement itself
/// or a clause node wrapping `else` and the statement.
fn else_body<'a>(alternative: &CstNode<'a>) -> CstNode<'a> {
    if is_statement(alternative) || alternative.kind() == EMPTY_STATEMENT {
        return *alternative;
    }
    alternative
        .children()
        .find(|child| {
            !child.is_extra() && (is_statement(child) || child.kind() == EMPTY_STATEMENT)
        })
        .unwrap_or(*alternative)
}

fn lower_expr(node: &CstNode) -> Expr {
    match node.kind() {
        "true" => Expr::BooleanLiteral(ExprBooleanLiteral {
            range: node.range(),
            value: true,
        }),
        "false" => Expr::BooleanLiteral(ExprBooleanLiteral {
            range: node.range(),
            value: false,
        }),
        _ => Expr::Other(ExprOther {
            range: node.range(),
            body: nested_statements(node),
        }),
    }
}

fn other_stmt(node: &CstNode) -> Stmt {
    Stmt::Other(StmtOther {
        range: node.range(),
        body: nested_statements(node),
    })
}

/// Direct statements of a block, counting empty statements.
fn block_statements(block: &CstNode) -> Vec<Stmt> {
    block
        .children()
        .filter(|child| !child.is_extra() && (child.is_named() || child.kind() == EMPTY_STATEMENT))
        .map(|child| lower_stmt(&child))
        .collect()
}

/// The outermost statements below `node`, descending through anything that
/// is not itself a statement (declarations, expressions, clauses).
fn nested_statements(node: &CstNode) -> Vec<Stmt> {
    let mut statements = Vec::new();
    collect_nested(node, &mut statements);
    statements
}

fn collect_nested(node: &CstNode, statements: &mut Vec<Stmt>) {
    for child in node.named_children() {
        if is_statement(&child) {
            statements.push(lower_stmt(&child));
        } else {
            collect_nested(&child, statements);
        }
    }
}
