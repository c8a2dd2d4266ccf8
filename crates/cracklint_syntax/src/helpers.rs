//! Shape helpers shared by rules.

use crate::nodes::{Stmt, StmtBlock};

/// Resolve a branch to its single effective statement.
///
/// A block with exactly one statement resolves to that statement; an empty
/// or multi-statement block resolves to `None`. Any other statement is
/// already single and resolves to itself. Nested blocks are not unwrapped.
pub fn resolve_single_statement(stmt: &Stmt) -> Option<&Stmt> {
    match stmt {
        Stmt::Block(StmtBlock { body, .. }) => match body.as_slice() {
            [single] => Some(single),
            _ => None,
        },
        Stmt::If(_) | Stmt::Return(_) | Stmt::Other(_) => Some(stmt),
    }
}
