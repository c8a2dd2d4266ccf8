//! Thin wrapper over tree-sitter nodes.

use cracklint_text_size::{TextRange, TextSize};
use tree_sitter::Node;

/// Convert a tree-sitter node range to a TextRange.
#[allow(clippy::cast_possible_truncation)]
fn node_range(node: &Node) -> TextRange {
    let start = TextSize::new(node.start_byte() as u32);
    let end = TextSize::new(node.end_byte() as u32);
    TextRange::new(start, end)
}

/// A concrete syntax tree node paired with its source text.
#[derive(Debug, Clone, Copy)]
pub struct CstNode<'a> {
    node: Node<'a>,
    source: &'a str,
}

impl<'a> CstNode<'a> {
    pub fn new(node: Node<'a>, source: &'a str) -> Self {
        Self { node, source }
    }

    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    pub fn range(&self) -> TextRange {
        node_range(&self.node)
    }

    pub fn text(&self) -> &'a str {
        self.node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    pub fn is_named(&self) -> bool {
        self.node.is_named()
    }

    /// Tokens the parser skipped while recovering from a syntax error.
    pub fn is_error(&self) -> bool {
        self.node.is_error()
    }

    /// Comments and other nodes the grammar allows anywhere.
    pub fn is_extra(&self) -> bool {
        self.node.is_extra()
    }

    /// All children, including anonymous tokens and extras.
    pub fn children(&self) -> impl Iterator<Item = CstNode<'a>> + use<'a> {
        let source = self.source;
        let node = self.node;
        (0..node.child_count()).filter_map(move |i| {
            #[allow(clippy::cast_possible_truncation)]
            node.child(i as u32).map(|child| CstNode::new(child, source))
        })
    }

    /// Named children, excluding extras such as comments.
    pub fn named_children(&self) -> impl Iterator<Item = CstNode<'a>> + use<'a> {
        self.children().filter(|c| c.is_named() && !c.is_extra())
    }

    pub fn child_by_field_name(&self, name: &str) -> Option<CstNode<'a>> {
        self.node
            .child_by_field_name(name)
            .map(|n| CstNode::new(n, self.source))
    }

    /// The first direct child token of the given kind, e.g. the `if` keyword.
    pub fn token(&self, kind: &str) -> Option<CstNode<'a>> {
        self.children().find(|c| c.kind() == kind)
    }
}
