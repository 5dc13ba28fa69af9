//! JavaScript / TypeScript extraction on top of the tree-sitter grammars.

use tree_sitter::{Language as TsLanguage, Node, Parser};

use super::FunctionUnit;
use super::doc_comment::has_leading_doc_comment;
use super::syntax::{self, Grammar, SyntaxKind};

/// Which ECMAScript grammar to parse with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    JavaScript,
    TypeScript,
    Tsx,
}

impl Dialect {
    fn grammar(self) -> TsLanguage {
        match self {
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

struct EcmaGrammar;

impl Grammar for EcmaGrammar {
    fn classify(&self, node: Node<'_>, source: &[u8]) -> SyntaxKind {
        match node.kind() {
            "if_statement" | "switch_statement" => SyntaxKind::Conditional,
            "for_statement" | "for_in_statement" | "while_statement" | "do_statement" => {
                SyntaxKind::Loop
            }
            "catch_clause" => SyntaxKind::ExceptionHandler,
            "ternary_expression" => SyntaxKind::Ternary,
            "call_expression" => SyntaxKind::Call {
                callee: syntax::identifier_callee(node, source),
            },
            _ => SyntaxKind::Other,
        }
    }

    fn boolean_operator(&self, node: Node<'_>) -> Option<&'static str> {
        if node.kind() != "binary_expression" {
            return None;
        }
        node.child_by_field_name("operator")
            .map(|op| op.kind())
            .filter(|op| matches!(*op, "&&" | "||" | "??"))
    }
}

/// Wrappers that sit between a function and the line its doc comment precedes.
const ANCHOR_PARENTS: &[&str] = &[
    "variable_declarator",
    "lexical_declaration",
    "variable_declaration",
    "export_statement",
    "pair",
];

/// Extract named functions, methods and bound function expressions.
#[must_use]
pub fn extract_ecmascript(source: &str, dialect: Dialect) -> Vec<FunctionUnit> {
    let mut parser = Parser::new();
    if let Err(e) = parser.set_language(&dialect.grammar()) {
        tracing::warn!("{dialect:?} grammar unavailable: {e}");
        return Vec::new();
    }

    let Some(tree) = parser.parse(source, None) else {
        return Vec::new();
    };
    let root = tree.root_node();
    if root.has_error() {
        tracing::debug!("{dialect:?} source has syntax errors, skipping");
        return Vec::new();
    }

    let lines: Vec<&str> = source.lines().collect();
    let bytes = source.as_bytes();
    syntax::preorder(root)
        .filter_map(|node| {
            let name = function_name(node, bytes)?;
            let has_documentation =
                has_leading_doc_comment(&lines, syntax::start_line(anchor(node)));
            let body = syntax::lower(node, bytes, &EcmaGrammar);
            Some(FunctionUnit::new(
                name,
                syntax::start_line(node),
                body,
                has_documentation,
            ))
        })
        .collect()
}

/// Name of a function-like node, or `None` if it is not one or is anonymous.
fn function_name(node: Node<'_>, source: &[u8]) -> Option<String> {
    let own_name = match node.kind() {
        "function_declaration"
        | "generator_function_declaration"
        | "function_expression"
        | "function"
        | "generator_function"
        | "method_definition" => node.child_by_field_name("name"),
        "arrow_function" => None,
        _ => return None,
    };
    // Signatures without a body (overloads, abstract methods) are not units.
    node.child_by_field_name("body")?;

    let name_node = own_name.or_else(|| binding_name(node))?;
    name_node
        .utf8_text(source)
        .ok()
        .map(|name| name.trim_matches(|c| c == '"' || c == '\'').to_string())
}

/// Name a function expression borrows from `const x = ...` or `{ x: ... }`.
fn binding_name(node: Node<'_>) -> Option<Node<'_>> {
    let parent = node.parent()?;
    let name = match parent.kind() {
        "variable_declarator" => parent.child_by_field_name("name"),
        "pair" => parent.child_by_field_name("key"),
        "field_definition" => parent.child_by_field_name("property"),
        "public_field_definition" => parent.child_by_field_name("name"),
        _ => None,
    }?;
    // Destructuring patterns and computed keys do not name the function.
    matches!(
        name.kind(),
        "identifier" | "property_identifier" | "private_property_identifier" | "string"
    )
    .then_some(name)
}

fn anchor(node: Node<'_>) -> Node<'_> {
    let mut current = node;
    while let Some(parent) = current.parent() {
        if !ANCHOR_PARENTS.contains(&parent.kind()) {
            break;
        }
        current = parent;
    }
    current
}

#[cfg(test)]
#[path = "ecmascript_tests.rs"]
mod tests;
