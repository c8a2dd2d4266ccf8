//! Typed syntax tree for the statement shapes cracklint rules inspect.
//!
//! The concrete tree comes from tree-sitter (see `cracklint_java_parser`);
//! [`lower_tree`] turns it into a small closed set of statement and
//! expression kinds so rules can match on shapes exhaustively instead of
//! comparing node-kind strings.

pub mod cst;
pub mod helpers;
mod lower;
mod nodes;
pub mod visitor;

pub use cst::CstNode;
pub use lower::lower_tree;
pub use nodes::{
    ElseClause, Expr, ExprBooleanLiteral, ExprOther, SourceTree, Stmt, StmtBlock, StmtIf,
    StmtKind, StmtOther, StmtReturn,
};
