//! In-source suppressions.
//!
//! - `// cracklint:disable CC0007` ... `// cracklint:restore CC0007` comments
//!   (line or block comments; no id means every rule)
//! - `@SuppressWarnings("CC0007")` or `@SuppressWarnings("cracklint:CC0007")`
//!   on a declaration
//!
//! Suppressions work by tracking ranges where specific rules are disabled.

use std::collections::HashMap;

use cracklint_diagnostics::Diagnostic;
use cracklint_syntax::CstNode;
use cracklint_text_size::TextSize;
use lazy_static::lazy_static;
use regex::Regex;

/// Key matching every rule.
const ALL_RULES: &str = "*";

lazy_static! {
    static ref DIRECTIVE: Regex =
        Regex::new(r"cracklint:(disable|restore)\b([ \t]+[A-Za-z0-9_, \t]+)?")
            .expect("directive pattern should be valid");
}

/// Declarations whose `@SuppressWarnings` covers their whole range.
const ANNOTATED_DECLARATIONS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
    "annotation_type_declaration",
    "method_declaration",
    "constructor_declaration",
    "field_declaration",
    "local_variable_declaration",
];

/// A suppression region where a specific rule is disabled.
#[derive(Debug, Clone)]
pub struct SuppressionRegion {
    /// The rule id being suppressed (or "*" for all rules).
    pub rule: String,
    /// Start offset in the source.
    pub start: TextSize,
    /// End offset in the source (None means until end of file).
    pub end: Option<TextSize>,
}

impl SuppressionRegion {
    fn contains(&self, pos: TextSize) -> bool {
        pos >= self.start && self.end.is_none_or(|end| pos < end)
    }
}

/// Manages suppressions for a source file.
#[derive(Debug, Default)]
pub struct SuppressionContext {
    /// Suppression regions indexed by rule id.
    regions: HashMap<String, Vec<SuppressionRegion>>,
}

impl SuppressionContext {
    /// Create a new empty suppression context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect comment directives and annotations from a parsed file.
    pub fn from_tree(root: &CstNode) -> Self {
        let mut ctx = Self::new();
        let mut open = HashMap::new();
        ctx.visit(root, &mut open);

        // Unclosed regions run to the end of the file.
        for (rule, start) in open {
            ctx.add_region(SuppressionRegion {
                rule,
                start,
                end: None,
            });
        }
        ctx
    }

    fn visit(&mut self, node: &CstNode, open: &mut HashMap<String, TextSize>) {
        match node.kind() {
            "line_comment" | "block_comment" => {
                self.process_comment(node, open);
                return;
            }
            kind if ANNOTATED_DECLARATIONS.contains(&kind) => {
                self.process_declaration(node);
            }
            _ => {}
        }

        for child in node.children() {
            self.visit(&child, open);
        }
    }

    /// Process a single comment for suppression directives.
    fn process_comment(&mut self, comment: &CstNode, open: &mut HashMap<String, TextSize>) {
        let Some(captures) = DIRECTIVE.captures(comment.text()) else {
            return;
        };
        let rules = parse_rule_list(captures.get(2).map_or("", |m| m.as_str()));

        match &captures[1] {
            "disable" => {
                for rule in rules {
                    open.entry(rule).or_insert(comment.range().start());
                }
            }
            _ => {
                for rule in rules {
                    if let Some(start) = open.remove(&rule) {
                        self.add_region(SuppressionRegion {
                            rule,
                            start,
                            end: Some(comment.range().start()),
                        });
                    }
                }
            }
        }
    }

    /// Look for `@SuppressWarnings` among a declaration's modifiers.
    fn process_declaration(&mut self, declaration: &CstNode) {
        let modifiers = declaration
            .children()
            .filter(|c| c.kind() == "modifiers")
            .flat_map(|m| m.children());
        let annotations = declaration.children().chain(modifiers).filter(|c| {
            matches!(c.kind(), "annotation" | "marker_annotation")
        });

        for annotation in annotations {
            let name = annotation
                .child_by_field_name("name")
                .map(|n| n.text())
                .unwrap_or("");
            if name != "SuppressWarnings" && name != "java.lang.SuppressWarnings" {
                continue;
            }
            let Some(args) = annotation.child_by_field_name("arguments") else {
                continue;
            };

            let mut rules = Vec::new();
            collect_string_values(&args, &mut rules);
            for rule in rules {
                self.add_region(SuppressionRegion {
                    rule,
                    start: declaration.range().start(),
                    end: Some(declaration.range().end()),
                });
            }
        }
    }

    /// Add a suppression region.
    fn add_region(&mut self, region: SuppressionRegion) {
        self.regions
            .entry(region.rule.clone())
            .or_default()
            .push(region);
    }

    /// Check if a rule is suppressed at the given position.
    pub fn is_rule_suppressed(&self, rule: &str, pos: TextSize) -> bool {
        [rule, ALL_RULES].iter().any(|key| {
            self.regions
                .get(*key)
                .is_some_and(|regions| regions.iter().any(|region| region.contains(pos)))
        })
    }

    /// Check if a diagnostic is suppressed where it starts.
    pub fn is_suppressed(&self, diagnostic: &Diagnostic) -> bool {
        self.is_rule_suppressed(diagnostic.code(), diagnostic.range.start())
    }
}

/// Split `CC0007, CC0001` into ids; an empty list means all rules.
fn parse_rule_list(list: &str) -> Vec<String> {
    let rules: Vec<String> = list
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if rules.is_empty() {
        vec![ALL_RULES.to_string()]
    } else {
        rules
    }
}

/// Collect rule ids from the string literals of annotation arguments.
fn collect_string_values(node: &CstNode, rules: &mut Vec<String>) {
    if node.kind() == "string_literal" {
        let content = node.text().trim_matches('"');
        let rule = content.strip_prefix("cracklint:").unwrap_or(content);
        if rule == "all" {
            rules.push(ALL_RULES.to_string());
        } else if !rule.is_empty() {
            rules.push(rule.to_string());
        }
        return;
    }
    for child in node.named_children() {
        collect_string_values(&child, rules);
    }
}
