use cracklint_text_size::{Ranged, TextRange};

/// A lowered source file: the outermost statements found in it, typically
/// method, constructor and initializer bodies.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceTree {
    pub range: TextRange,
    pub body: Vec<Stmt>,
}

/// A statement. Anything that is not an `if`, a block or a `return` is
/// [`Stmt::Other`], which still carries the statements nested inside it.
#[derive(Clone, Debug, PartialEq, is_macro::Is)]
pub enum Stmt {
    #[is(name = "if_stmt")]
    If(StmtIf),
    #[is(name = "block_stmt")]
    Block(StmtBlock),
    #[is(name = "return_stmt")]
    Return(StmtReturn),
    #[is(name = "other_stmt")]
    Other(StmtOther),
}

/// Discriminant of [`Stmt`], used by rules to subscribe to node kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StmtKind {
    If,
    Block,
    Return,
    Other,
}

impl Stmt {
    pub const fn kind(&self) -> StmtKind {
        match self {
            Stmt::If(_) => StmtKind::If,
            Stmt::Block(_) => StmtKind::Block,
            Stmt::Return(_) => StmtKind::Return,
            Stmt::Other(_) => StmtKind::Other,
        }
    }
}

/// `if (condition) body [else orelse]`
#[derive(Clone, Debug, PartialEq)]
pub struct StmtIf {
    pub range: TextRange,
    /// Range of the `if` keyword token.
    pub if_keyword: TextRange,
    pub condition: Box<Expr>,
    pub body: Box<Stmt>,
    pub orelse: Option<ElseClause>,
}

/// The `else` part of an [`StmtIf`]. An `else if` is an `ElseClause` whose
/// body is another [`Stmt::If`].
#[derive(Clone, Debug, PartialEq)]
pub struct ElseClause {
    pub range: TextRange,
    pub body: Box<Stmt>,
}

/// `{ ... }`; empty statements (`;`) are counted as statements.
#[derive(Clone, Debug, PartialEq)]
pub struct StmtBlock {
    pub range: TextRange,
    pub body: Vec<Stmt>,
}

/// `return [value];`
#[derive(Clone, Debug, PartialEq)]
pub struct StmtReturn {
    pub range: TextRange,
    pub value: Option<Box<Expr>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtOther {
    pub range: TextRange,
    /// Statements nested anywhere inside this one (loop bodies, lambda
    /// bodies, members of local classes), outermost first.
    pub body: Vec<Stmt>,
}

/// An expression. Only boolean literals are distinguished.
#[derive(Clone, Debug, PartialEq, is_macro::Is)]
pub enum Expr {
    #[is(name = "boolean_literal_expr")]
    BooleanLiteral(ExprBooleanLiteral),
    #[is(name = "other_expr")]
    Other(ExprOther),
}

/// `true` or `false`. A parenthesized literal is not one.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprBooleanLiteral {
    pub range: TextRange,
    pub value: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprOther {
    pub range: TextRange,
    /// Statements nested inside the expression, e.g. lambda bodies.
    pub body: Vec<Stmt>,
}

impl Ranged for SourceTree {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for Stmt {
    fn range(&self) -> TextRange {
        match self {
            Stmt::If(node) => node.range,
            Stmt::Block(node) => node.range,
            Stmt::Return(node) => node.range,
            Stmt::Other(node) => node.range,
        }
    }
}

impl Ranged for Expr {
    fn range(&self) -> TextRange {
        match self {
            Expr::BooleanLiteral(node) => node.range,
            Expr::Other(node) => node.range,
        }
    }
}

macro_rules! impl_ranged {
    ($($node:ty),* $(,)?) => {
        $(
            impl Ranged for $node {
                fn range(&self) -> TextRange {
                    self.range
                }
            }
        )*
    };
}

impl_ranged!(
    StmtIf,
    ElseClause,
    StmtBlock,
    StmtReturn,
    StmtOther,
    ExprBooleanLiteral,
    ExprOther,
);
