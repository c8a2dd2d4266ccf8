//! Java parser for cracklint, built on tree-sitter-java.
//!
//! This is the boundary to the external grammar: it only produces concrete
//! syntax trees. Lowering into the typed tree the rules work on happens in
//! `cracklint_syntax`.

use std::sync::Arc;

/// Result of parsing a Java source file.
pub struct ParseResult {
    pub tree: tree_sitter::Tree,
    pub source: Arc<str>,
}

impl ParseResult {
    /// Whether tree-sitter had to recover from syntax errors.
    ///
    /// Recovered trees are still checked; erroneous regions simply never
    /// match a rule pattern.
    pub fn has_syntax_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

/// Java parser wrapping tree-sitter.
pub struct JavaParser {
    parser: tree_sitter::Parser,
}

/// Return the tree-sitter Java language.
pub fn java_language() -> tree_sitter::Language {
    tree_sitter_java::LANGUAGE.into()
}

impl JavaParser {
    /// Create a new Java parser.
    pub fn new() -> Self {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&java_language())
            .expect("Failed to load Java grammar");
        Self { parser }
    }

    /// Parse Java source code into a syntax tree.
    ///
    /// Returns `None` only when tree-sitter gives up entirely (e.g. on
    /// cancellation); ordinary syntax errors still yield a tree.
    pub fn parse(&mut self, source: &str) -> Option<ParseResult> {
        let tree = self.parser.parse(source, None)?;
        Some(ParseResult {
            tree,
            source: source.into(),
        })
    }
}

impl Default for JavaParser {
    fn default() -> Self {
        Self::new()
    }
}
