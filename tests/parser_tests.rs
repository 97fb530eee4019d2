// tests/parser_tests.rs

use pretty_assertions::assert_eq;
use rql_parser::ast::{CombinatorOp, ComparisonOp, Node, SetOp, SortDirection, SortField};
use rql_parser::lexer::Lexer;
use rql_parser::parser::{Parser, parse};
use rql_parser::{ErrorKind, Literal};

fn comparison(operator: ComparisonOp, property: &str, value: Literal) -> Node {
    Node::Comparison {
        operator,
        property: property.to_string(),
        value,
    }
}

// ============================================================================
// Comparisons
// ============================================================================

#[test]
fn test_eq_text() {
    let node = parse("eq(name,Foo)").unwrap();
    assert_eq!(node, comparison(ComparisonOp::Eq, "name", Literal::from("Foo")));
}

#[test]
fn test_all_comparison_operators() {
    let test_cases = vec![
        ("eq", ComparisonOp::Eq),
        ("ne", ComparisonOp::Ne),
        ("lt", ComparisonOp::Lt),
        ("gt", ComparisonOp::Gt),
        ("lte", ComparisonOp::Lte),
        ("gte", ComparisonOp::Gte),
        ("like", ComparisonOp::Like),
    ];

    for (keyword, operator) in test_cases {
        let input = format!("{}(count,3)", keyword);
        let node = parse(&input).unwrap();
        assert_eq!(node, comparison(operator, "count", Literal::Integer(3)), "Failed for input: {}", input);
    }
}

#[test]
fn test_comparison_value_shapes() {
    assert_eq!(parse("eq(a,1)").unwrap(), comparison(ComparisonOp::Eq, "a", Literal::Integer(1)));
    assert_eq!(parse("eq(a,1.5)").unwrap(), comparison(ComparisonOp::Eq, "a", Literal::Float(1.5)));
    assert_eq!(parse("eq(a,-7)").unwrap(), comparison(ComparisonOp::Eq, "a", Literal::Integer(-7)));
    assert_eq!(parse("eq(a,+7)").unwrap(), comparison(ComparisonOp::Eq, "a", Literal::Integer(7)));
    assert_eq!(parse("eq(a,-0.25)").unwrap(), comparison(ComparisonOp::Eq, "a", Literal::Float(-0.25)));
    assert_eq!(parse("eq(a,1.2.3)").unwrap(), comparison(ComparisonOp::Eq, "a", Literal::from("1.2.3")));
}

#[test]
fn test_like_keeps_pattern_text() {
    let node = parse("like(name,Fo*)").unwrap();
    assert_eq!(node, comparison(ComparisonOp::Like, "name", Literal::from("Fo*")));
}

#[test]
fn test_dotted_property_and_spaces() {
    let node = parse("eq( user.name , John Smith )").unwrap();
    assert_eq!(node, comparison(ComparisonOp::Eq, "user.name", Literal::from("John Smith")));
}

// ============================================================================
// Boolean Combinators
// ============================================================================

#[test]
fn test_and_of_comparisons() {
    let node = parse("and(eq(a,1),gt(b,2))").unwrap();
    assert_eq!(
        node,
        Node::BooleanCombinator {
            operator: CombinatorOp::And,
            operands: vec![
                comparison(ComparisonOp::Eq, "a", Literal::Integer(1)),
                comparison(ComparisonOp::Gt, "b", Literal::Integer(2)),
            ],
        }
    );
}

#[test]
fn test_single_operand_combinator() {
    let node = parse("or(eq(a,1))").unwrap();
    assert_eq!(
        node,
        Node::BooleanCombinator {
            operator: CombinatorOp::Or,
            operands: vec![comparison(ComparisonOp::Eq, "a", Literal::Integer(1))],
        }
    );
}

#[test]
fn test_operand_order_is_preserved() {
    let node = parse("or(eq(c,3),eq(a,1),eq(b,2))").unwrap();
    let Node::BooleanCombinator { operands, .. } = node else {
        panic!("Expected combinator");
    };
    let properties: Vec<&str> = operands.iter().filter_map(Node::property).collect();
    assert_eq!(properties, vec!["c", "a", "b"]);
}

#[test]
fn test_mixed_operands() {
    let node = parse("and(in(tag,[x]),or(ne(a,1),lt(b,2)),sort(a),limit(5))").unwrap();
    let Node::BooleanCombinator { operands, .. } = node else {
        panic!("Expected combinator");
    };
    let operations: Vec<&str> = operands.iter().map(Node::operation).collect();
    assert_eq!(operations, vec!["in", "or", "sort", "limit"]);
}

#[test]
fn test_nesting_depth() {
    for n in [1usize, 2, 10, 200] {
        let input = format!("{}eq(a,1){}", "and(".repeat(n), ")".repeat(n));
        let node = parse(&input).unwrap();
        assert_eq!(node.depth(), n + 1, "Failed for depth: {}", n);

        let mut current = &node;
        for _ in 0..n {
            match current {
                Node::BooleanCombinator { operator: CombinatorOp::And, operands } => {
                    assert_eq!(operands.len(), 1);
                    current = &operands[0];
                }
                other => panic!("Expected and, got {:?}", other),
            }
        }
        assert_eq!(*current, comparison(ComparisonOp::Eq, "a", Literal::Integer(1)));
    }
}

// ============================================================================
// Sort
// ============================================================================

#[test]
fn test_sort_directions() {
    let node = parse("sort(-count,name)").unwrap();
    assert_eq!(
        node,
        Node::Sort {
            fields: vec![SortField::desc("count"), SortField::asc("name")],
        }
    );
}

#[test]
fn test_sort_explicit_plus() {
    let node = parse("sort(+a,-b,c)").unwrap();
    let Node::Sort { fields } = node else {
        panic!("Expected sort");
    };
    let directions: Vec<SortDirection> = fields.iter().map(|f| f.direction).collect();
    assert_eq!(
        directions,
        vec![SortDirection::Asc, SortDirection::Desc, SortDirection::Asc]
    );
}

#[test]
fn test_sort_terminated_by_end_of_input() {
    let node = parse("sort(-a,b").unwrap();
    assert_eq!(
        node,
        Node::Sort {
            fields: vec![SortField::desc("a"), SortField::asc("b")],
        }
    );
}

// ============================================================================
// Limit
// ============================================================================

#[test]
fn test_limit_with_skip() {
    assert_eq!(parse("limit(10,5)").unwrap(), Node::Limit { limit: 10, skip: 5 });
}

#[test]
fn test_limit_default_skip() {
    assert_eq!(parse("limit(10)").unwrap(), Node::Limit { limit: 10, skip: 0 });
}

#[test]
fn test_limit_terminated_by_end_of_input() {
    assert_eq!(parse("limit(3,4").unwrap(), Node::Limit { limit: 3, skip: 4 });
    assert_eq!(parse("limit(3").unwrap(), Node::Limit { limit: 3, skip: 0 });
}

#[test]
fn test_limit_requires_argument() {
    let err = parse("limit()").unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingLimit);
    assert_eq!(err.position, 6);
    assert!(err.to_string().contains("limit requires at least one integer argument"));
}

#[test]
fn test_limit_rejects_third_argument() {
    let err = parse("limit(1,2,3)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingCloseParen);
    assert_eq!(err.position, 9);
}

#[test]
fn test_limit_rejects_non_integer() {
    let err = parse("limit(ten)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExpectedValue);
    assert_eq!(err.position, 6);

    let err = parse("limit(1.5)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExpectedValue);
}

// ============================================================================
// Set Membership
// ============================================================================

#[test]
fn test_in_values() {
    let node = parse("in(tag,[a,b,c])").unwrap();
    assert_eq!(
        node,
        Node::SetMembership {
            operator: SetOp::In,
            property: "tag".to_string(),
            values: vec![Literal::from("a"), Literal::from("b"), Literal::from("c")],
        }
    );
}

#[test]
fn test_out_empty_list() {
    let node = parse("out(id,[])").unwrap();
    assert_eq!(
        node,
        Node::SetMembership {
            operator: SetOp::Out,
            property: "id".to_string(),
            values: vec![],
        }
    );
}

#[test]
fn test_in_numeric_values() {
    let node = parse("in(id,[1, 2.5, -3])").unwrap();
    let Node::SetMembership { values, .. } = node else {
        panic!("Expected set membership");
    };
    assert_eq!(
        values,
        vec![Literal::Integer(1), Literal::Float(2.5), Literal::Integer(-3)]
    );
}

#[test]
fn test_in_trailing_comma() {
    let err = parse("in(tag,[a,])").unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExpectedValue);
    assert_eq!(err.position, 10);
}

// ============================================================================
// Reserved Words
// ============================================================================

#[test]
fn test_keyword_value_is_not_a_literal() {
    // Tokenization is context-free, so `sort` here is the keyword
    let err = parse("eq(kind,sort)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExpectedValue);
    assert_eq!(err.position, 8);
}

#[test]
fn test_keyword_property_is_not_a_property() {
    let err = parse("eq(limit,1)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExpectedProperty);
    assert_eq!(err.position, 3);

    let err = parse("in(tag,[a,out])").unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExpectedValue);
    assert_eq!(err.position, 10);
}

// ============================================================================
// Parser API
// ============================================================================

#[test]
fn test_parser_from_lexer() {
    let parser = Parser::new(Lexer::new("gte(age,18)"));
    assert_eq!(parser.parse().unwrap(), comparison(ComparisonOp::Gte, "age", Literal::Integer(18)));
}

#[test]
fn test_parse_str() {
    assert_eq!(Parser::parse_str("limit(1)").unwrap(), Node::Limit { limit: 1, skip: 0 });
}

#[test]
fn test_parses_are_independent() {
    let first = parse("eq(a,1)").unwrap();
    let _ = parse("eq(a,").unwrap_err();
    let again = parse("eq(a,1)").unwrap();
    assert_eq!(first, again);
}

#[test]
fn test_concurrent_parses() {
    let handles: Vec<_> = (0..8)
        .map(|i| std::thread::spawn(move || parse(&format!("limit({})", i)).unwrap()))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Node::Limit { limit: i as u64, skip: 0 });
    }
}
