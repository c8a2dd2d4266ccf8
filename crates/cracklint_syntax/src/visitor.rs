//! AST visitor trait and walk functions.
//!
//! Override a `visit_*` method to observe a node kind; call the matching
//! `walk_*` function from the override to keep descending.

use crate::nodes::{
    ElseClause, Expr, ExprOther, SourceTree, Stmt, StmtBlock, StmtIf, StmtOther, StmtReturn,
};

pub trait Visitor<'a> {
    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        walk_stmt(self, stmt);
    }
    fn visit_expr(&mut self, expr: &'a Expr) {
        walk_expr(self, expr);
    }
    fn visit_else_clause(&mut self, else_clause: &'a ElseClause) {
        walk_else_clause(self, else_clause);
    }
    fn visit_body(&mut self, body: &'a [Stmt]) {
        walk_body(self, body);
    }
}

pub fn walk_source_tree<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, tree: &'a SourceTree) {
    visitor.visit_body(&tree.body);
}

pub fn walk_body<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, body: &'a [Stmt]) {
    for stmt in body {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, stmt: &'a Stmt) {
    match stmt {
        Stmt::If(StmtIf {
            condition,
            body,
            orelse,
            ..
        }) => {
            visitor.visit_expr(condition);
            visitor.visit_stmt(body);
            if let Some(else_clause) = orelse {
                visitor.visit_else_clause(else_clause);
            }
        }
        Stmt::Block(StmtBlock { body, .. }) | Stmt::Other(StmtOther { body, .. }) => {
            visitor.visit_body(body);
        }
        Stmt::Return(StmtReturn { value, .. }) => {
            if let Some(value) = value {
                visitor.visit_expr(value);
            }
        }
    }
}

pub fn walk_else_clause<'a, V: Visitor<'a> + ?Sized>(
    visitor: &mut V,
    else_clause: &'a ElseClause,
) {
    visitor.visit_stmt(&else_clause.body);
}

pub fn walk_expr<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, expr: &'a Expr) {
    match expr {
        Expr::BooleanLiteral(_) => {}
        Expr::Other(ExprOther { body, .. }) => visitor.visit_body(body),
    }
}
