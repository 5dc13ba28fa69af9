//! Language-neutral structural tree consumed by the complexity scorer.
//!
//! Each language lowers its tree-sitter parse tree into [`SyntaxNode`]s that
//! only carry what scoring needs: the construct kind and the children.

use tree_sitter::Node;

/// Construct kinds that affect the cognitive-complexity score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxKind {
    /// `if`, `elif`, `switch`.
    Conditional,
    /// `for`, `while`, `do`, including async variants.
    Loop,
    /// `except` / `catch` clauses.
    ExceptionHandler,
    /// Scoped acquisition such as Python's `with`.
    ResourceScope,
    /// A flattened chain of one boolean operator over `operands` operands.
    BooleanChain { operands: usize },
    /// Conditional expression (`a if c else b`, `c ? a : b`).
    Ternary,
    /// A call; `callee` is set when the target is a bare identifier.
    Call { callee: Option<String> },
    /// Anything else. Scores nothing, children are still visited.
    Other,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: SyntaxKind,
    pub children: Vec<Self>,
}

impl SyntaxNode {
    #[must_use]
    pub const fn new(kind: SyntaxKind, children: Vec<Self>) -> Self {
        Self { kind, children }
    }

    #[must_use]
    pub const fn leaf(kind: SyntaxKind) -> Self {
        Self::new(kind, Vec::new())
    }
}

// Iterative: generated sources can nest tens of thousands of levels deep.
impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Per-language mapping from tree-sitter nodes to [`SyntaxKind`].
pub(crate) trait Grammar {
    /// Classify a node. Never returns [`SyntaxKind::BooleanChain`]; boolean
    /// operations are detected through [`Grammar::boolean_operator`].
    fn classify(&self, node: Node<'_>, source: &[u8]) -> SyntaxKind;

    /// The operator kind if `node` is a short-circuit boolean operation.
    fn boolean_operator(&self, node: Node<'_>) -> Option<&'static str>;
}

/// A node being lowered: its kind, the source children still to lower
/// (in reverse), and the children already lowered.
struct Frame<'tree> {
    kind: SyntaxKind,
    pending: Vec<Node<'tree>>,
    lowered: Vec<SyntaxNode>,
}

impl<'tree> Frame<'tree> {
    fn open<G: Grammar>(node: Node<'tree>, source: &[u8], grammar: &G) -> Self {
        let (kind, mut pending) = match grammar.boolean_operator(node) {
            Some(operator) => {
                let operands = chain_operands(node, operator, grammar);
                (
                    SyntaxKind::BooleanChain {
                        operands: operands.len(),
                    },
                    operands,
                )
            }
            None => (grammar.classify(node, source), named_children(node)),
        };
        pending.reverse();
        Self {
            kind,
            lowered: Vec::with_capacity(pending.len()),
            pending,
        }
    }

    fn close(&mut self) -> SyntaxNode {
        let kind = std::mem::replace(&mut self.kind, SyntaxKind::Other);
        SyntaxNode::new(kind, std::mem::take(&mut self.lowered))
    }
}

/// Lower a tree-sitter subtree into a [`SyntaxNode`] tree.
///
/// Extras (comments) are dropped. Nested operations with the same boolean
/// operator collapse into one [`SyntaxKind::BooleanChain`]. The walk keeps
/// its own stack, so nesting depth is bounded only by memory.
pub(crate) fn lower<G: Grammar>(node: Node<'_>, source: &[u8], grammar: &G) -> SyntaxNode {
    let mut stack = vec![Frame::open(node, source, grammar)];
    while let Some(top) = stack.last_mut() {
        if let Some(child) = top.pending.pop() {
            stack.push(Frame::open(child, source, grammar));
            continue;
        }

        let lowered = top.close();
        stack.pop();
        match stack.last_mut() {
            Some(parent) => parent.lowered.push(lowered),
            None => return lowered,
        }
    }
    SyntaxNode::leaf(SyntaxKind::Other)
}

/// Named, non-extra children in source order.
fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect()
}

/// Operands of a boolean chain in source order, looking through nested
/// operations that use the same operator.
fn chain_operands<'tree, G: Grammar>(
    node: Node<'tree>,
    operator: &str,
    grammar: &G,
) -> Vec<Node<'tree>> {
    let mut operands = Vec::new();
    let mut stack = named_children(node);
    stack.reverse();
    while let Some(child) = stack.pop() {
        if grammar.boolean_operator(child) == Some(operator) {
            stack.extend(named_children(child).into_iter().rev());
        } else {
            operands.push(child);
        }
    }
    operands
}

/// Named nodes of a subtree in depth-first pre-order, starting with `root`.
pub(crate) fn preorder(root: Node<'_>) -> impl Iterator<Item = Node<'_>> {
    let mut stack = vec![root];
    std::iter::from_fn(move || {
        let node = stack.pop()?;
        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
        Some(node)
    })
}

/// Identifier text of a call's callee, if the callee is a bare identifier.
pub(crate) fn identifier_callee(node: Node<'_>, source: &[u8]) -> Option<String> {
    node.child_by_field_name("function")
        .filter(|callee| callee.kind() == "identifier")
        .and_then(|callee| callee.utf8_text(source).ok())
        .map(str::to_string)
}

/// 1-indexed line on which `node` starts.
pub(crate) fn start_line(node: Node<'_>) -> usize {
    node.start_position().row + 1
}
