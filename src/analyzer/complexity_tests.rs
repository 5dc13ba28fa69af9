use super::*;
use crate::analyzer::syntax::{SyntaxKind, SyntaxNode};

fn node(kind: SyntaxKind, children: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::new(kind, children)
}

fn other(children: Vec<SyntaxNode>) -> SyntaxNode {
    node(SyntaxKind::Other, children)
}

fn call(callee: &str) -> SyntaxNode {
    SyntaxNode::leaf(SyntaxKind::Call {
        callee: Some(callee.to_string()),
    })
}

#[test]
fn empty_body_scores_zero() {
    let body = other(vec![other(vec![]), other(vec![])]);
    assert_eq!(score_body(&body, "f"), 0);
}

#[test]
fn top_level_conditional_scores_one() {
    let body = other(vec![node(SyntaxKind::Conditional, vec![])]);
    assert_eq!(score_body(&body, "f"), 1);
}

#[test]
fn conditional_inside_loop_costs_more() {
    let top = other(vec![node(SyntaxKind::Conditional, vec![])]);
    let nested = other(vec![node(
        SyntaxKind::Loop,
        vec![other(vec![node(SyntaxKind::Conditional, vec![])])],
    )]);

    assert_eq!(score_body(&top, "f"), 1);
    assert_eq!(score_body(&nested, "f"), 3);
}

#[test]
fn three_nested_conditionals_score_six() {
    let body = other(vec![node(
        SyntaxKind::Conditional,
        vec![node(
            SyntaxKind::Conditional,
            vec![node(SyntaxKind::Conditional, vec![])],
        )],
    )]);
    assert_eq!(score_body(&body, "f"), 6);
}

#[test]
fn nesting_is_restored_after_subtree() {
    // loop { if } ; if  => 1 + 2 + 1
    let body = other(vec![
        node(SyntaxKind::Loop, vec![node(SyntaxKind::Conditional, vec![])]),
        node(SyntaxKind::Conditional, vec![]),
    ]);
    assert_eq!(score_body(&body, "f"), 4);
}

#[test]
fn exception_handler_is_nesting_weighted() {
    let body = other(vec![node(
        SyntaxKind::Loop,
        vec![node(SyntaxKind::ExceptionHandler, vec![])],
    )]);
    assert_eq!(score_body(&body, "f"), 3);
}

#[test]
fn resource_scope_adds_one_without_nesting() {
    let body = other(vec![node(
        SyntaxKind::ResourceScope,
        vec![node(SyntaxKind::Conditional, vec![])],
    )]);
    // with = 1, if stays at depth 0 = 1
    assert_eq!(score_body(&body, "f"), 2);
}

#[test]
fn boolean_chain_adds_operands_minus_one() {
    let chain = node(
        SyntaxKind::BooleanChain { operands: 3 },
        vec![other(vec![]), other(vec![]), other(vec![])],
    );
    assert_eq!(score_body(&other(vec![chain]), "f"), 2);
}

#[test]
fn boolean_chain_is_not_nesting_weighted() {
    let chain = node(
        SyntaxKind::BooleanChain { operands: 2 },
        vec![other(vec![]), other(vec![])],
    );
    let body = other(vec![node(
        SyntaxKind::Loop,
        vec![node(SyntaxKind::Loop, vec![chain])],
    )]);
    // 1 + 2 for loops, chain stays +1 at depth 2
    assert_eq!(score_body(&body, "f"), 4);
}

#[test]
fn degenerate_boolean_chain_adds_nothing() {
    let chain = SyntaxNode::leaf(SyntaxKind::BooleanChain { operands: 0 });
    assert_eq!(score_body(&chain, "f"), 0);
}

#[test]
fn ternary_adds_one_at_any_depth() {
    let body = other(vec![node(
        SyntaxKind::Loop,
        vec![SyntaxNode::leaf(SyntaxKind::Ternary)],
    )]);
    assert_eq!(score_body(&body, "f"), 2);
}

#[test]
fn self_recursive_call_adds_two_per_occurrence() {
    let body = other(vec![call("fact"), other(vec![call("fact")])]);
    assert_eq!(score_body(&body, "fact"), 4);
}

#[test]
fn call_to_other_function_adds_nothing() {
    let body = other(vec![call("g"), call("print")]);
    assert_eq!(score_body(&body, "f"), 0);
}

#[test]
fn recursive_call_is_not_nesting_weighted() {
    let body = other(vec![node(
        SyntaxKind::Conditional,
        vec![node(SyntaxKind::Loop, vec![call("walk")])],
    )]);
    // if 1, loop 2, recursion 2
    assert_eq!(score_body(&body, "walk"), 5);
}

#[test]
fn anonymous_call_adds_nothing() {
    let body = SyntaxNode::leaf(SyntaxKind::Call { callee: None });
    assert_eq!(score_body(&body, "f"), 0);
}

#[test]
fn deeply_buried_constructs_are_found() {
    let mut inner = node(SyntaxKind::Conditional, vec![]);
    for _ in 0..20 {
        inner = other(vec![inner]);
    }
    assert_eq!(score_body(&inner, "f"), 1);
}

#[test]
fn score_reads_name_from_unit() {
    let unit = FunctionUnit::new(
        "again".to_string(),
        1,
        other(vec![call("again")]),
        false,
    );
    assert_eq!(score(&unit), 2);
}

#[test]
fn severity_boundaries() {
    assert_eq!(Severity::from_score(0), Severity::Simple);
    assert_eq!(Severity::from_score(5), Severity::Simple);
    assert_eq!(Severity::from_score(6), Severity::Moderate);
    assert_eq!(Severity::from_score(10), Severity::Moderate);
    assert_eq!(Severity::from_score(11), Severity::Complex);
    assert_eq!(Severity::from_score(15), Severity::Complex);
    assert_eq!(Severity::from_score(16), Severity::VeryComplex);
    assert_eq!(Severity::from_score(u32::MAX), Severity::VeryComplex);
}

#[test]
fn severity_is_monotonic() {
    let mut previous = Severity::from_score(0);
    for score in 1..200 {
        let current = Severity::from_score(score);
        assert!(current >= previous, "severity dropped at {score}");
        previous = current;
    }
}

#[test]
fn severity_labels() {
    assert_eq!(Severity::VeryComplex.as_str(), "very_complex");
    assert_eq!(Severity::Moderate.to_string(), "moderate");
    assert_eq!(Severity::Simple.symbol(), "🟢");
    assert_eq!(Severity::VeryComplex.symbol(), "🔴");
    assert!(Severity::Simple.description().starts_with("Simple"));
    assert!(Severity::Complex.description().starts_with("Complex"));
    assert!(Severity::VeryComplex.description().starts_with("Very Complex"));
}

#[test]
fn severity_serializes_snake_case() {
    let json = serde_json::to_string(&Severity::VeryComplex).unwrap();
    assert_eq!(json, "\"very_complex\"");
}

#[test]
fn very_deep_nesting_saturates_without_overflowing() {
    let mut body = other(vec![]);
    for _ in 0..100_000 {
        body = node(SyntaxKind::Conditional, vec![body]);
    }
    // 1 + 2 + ... + 100_000 exceeds u32::MAX
    assert_eq!(score_body(&body, "f"), u32::MAX);
}

#[test]
fn very_long_sibling_chain_is_scored() {
    let mut body = other(vec![]);
    for _ in 0..100_000 {
        body = other(vec![body, node(SyntaxKind::Ternary, vec![])]);
    }
    assert_eq!(score_body(&body, "f"), 100_000);
}
