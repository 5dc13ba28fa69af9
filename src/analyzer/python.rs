//! Python extraction on top of `tree-sitter-python`.

use tree_sitter::{Node, Parser};

use super::FunctionUnit;
use super::syntax::{self, Grammar, SyntaxKind};

struct PythonGrammar;

impl Grammar for PythonGrammar {
    fn classify(&self, node: Node<'_>, source: &[u8]) -> SyntaxKind {
        match node.kind() {
            "if_statement" | "elif_clause" => SyntaxKind::Conditional,
            "for_statement" | "while_statement" => SyntaxKind::Loop,
            "except_clause" | "except_group_clause" => SyntaxKind::ExceptionHandler,
            "with_statement" => SyntaxKind::ResourceScope,
            "conditional_expression" => SyntaxKind::Ternary,
            "call" => SyntaxKind::Call {
                callee: syntax::identifier_callee(node, source),
            },
            _ => SyntaxKind::Other,
        }
    }

    fn boolean_operator(&self, node: Node<'_>) -> Option<&'static str> {
        if node.kind() != "boolean_operator" {
            return None;
        }
        node.child_by_field_name("operator").map(|op| op.kind())
    }
}

/// Extract every `def` / `async def` in depth-first declaration order.
#[must_use]
pub fn extract_python(source: &str) -> Vec<FunctionUnit> {
    let mut parser = Parser::new();
    if let Err(e) = parser.set_language(&tree_sitter_python::LANGUAGE.into()) {
        tracing::warn!("Python grammar unavailable: {e}");
        return Vec::new();
    }

    let Some(tree) = parser.parse(source, None) else {
        return Vec::new();
    };
    let root = tree.root_node();
    if root.has_error() {
        tracing::debug!("Python source has syntax errors, skipping");
        return Vec::new();
    }

    syntax::preorder(root)
        .filter(|node| node.kind() == "function_definition")
        .filter_map(|node| build_unit(node, source.as_bytes()))
        .collect()
}

fn build_unit(node: Node<'_>, source: &[u8]) -> Option<FunctionUnit> {
    let name = node
        .child_by_field_name("name")?
        .utf8_text(source)
        .ok()?
        .to_string();
    let has_documentation = node
        .child_by_field_name("body")
        .is_some_and(|body| has_docstring(body, source));
    let body = syntax::lower(node, source, &PythonGrammar);

    Some(FunctionUnit::new(
        name,
        syntax::start_line(node),
        body,
        has_documentation,
    ))
}

/// A docstring is a plain string literal as the first statement of the body.
fn has_docstring(body: Node<'_>, source: &[u8]) -> bool {
    let mut cursor = body.walk();
    let Some(first) = body
        .named_children(&mut cursor)
        .find(|child| !child.is_extra())
    else {
        return false;
    };
    if first.kind() != "expression_statement" || first.named_child_count() != 1 {
        return false;
    }

    let mut inner = first.walk();
    let expr = first.named_children(&mut inner).next();
    expr.is_some_and(|expr| is_plain_string(expr, source))
}

fn is_plain_string(node: Node<'_>, source: &[u8]) -> bool {
    match node.kind() {
        "string" => {
            let Ok(text) = node.utf8_text(source) else {
                return false;
            };
            let prefix: String = text.chars().take_while(|c| *c != '"' && *c != '\'').collect();
            !prefix
                .chars()
                .any(|c| matches!(c.to_ascii_lowercase(), 'f' | 'b'))
        }
        "concatenated_string" => {
            let mut cursor = node.walk();
            let mut parts = node.named_children(&mut cursor).filter(|c| !c.is_extra());
            parts.all(|part| is_plain_string(part, source))
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "python_tests.rs"]
mod tests;
