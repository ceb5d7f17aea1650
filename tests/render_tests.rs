// tests/render_tests.rs

use elseql::ast::{BoolOp, CompareOp, Expression, Literal};
use elseql::{parse, render, to_source};

fn rendered_where(input: &str) -> String {
    let query = parse(input).unwrap();
    render(query.where_expr.as_ref().unwrap()).unwrap()
}

fn text(s: &str) -> Literal {
    Literal::Text(s.to_string())
}

// ============================================================================
// Comparisons
// ============================================================================

#[test]
fn test_comparisons() {
    let test_cases = vec![
        ("a=1", "a:1"),
        ("a!=1", "NOT a:1"),
        ("a<5", "a:{* TO 5}"),
        ("a<=5", "a:[* TO 5]"),
        ("a>5", "a:{5 TO *}"),
        ("a>=5", "a:[5 TO *]"),
    ];

    for (term, expected) in test_cases {
        let input = format!("SELECT * FROM t WHERE {}", term);
        assert_eq!(rendered_where(&input), expected, "Failed for term: {}", term);
    }
}

#[test]
fn test_values_render_verbatim() {
    assert_eq!(rendered_where("SELECT * FROM t WHERE price < 9.90"), "price:{* TO 9.90}");
    assert_eq!(rendered_where("SELECT * FROM t WHERE day >= 2024.01.31"), "day:[2024.01.31 TO *]");
    assert_eq!(rendered_where("SELECT * FROM t WHERE name = 'Ann'"), "name:Ann");
}

#[test]
fn test_string_literal_verbatim() {
    assert_eq!(
        rendered_where(r#"SELECT * FROM t WHERE "title:(quick OR brown)""#),
        "title:(quick OR brown)"
    );
}

// ============================================================================
// Boolean structure
// ============================================================================

#[test]
fn test_not() {
    assert_eq!(rendered_where("SELECT * FROM t WHERE NOT a>1"), "NOT a:{1 TO *}");
    assert_eq!(rendered_where("SELECT * FROM t WHERE NOT a!=1"), "NOT NOT a:1");
}

#[test]
fn test_joins_in_child_order() {
    assert_eq!(
        rendered_where("SELECT * FROM t WHERE a=1 AND b=2 AND c=3"),
        "a:1 AND b:2 AND c:3"
    );
    assert_eq!(rendered_where("SELECT * FROM t WHERE a=1 OR b=2"), "a:1 OR b:2");
}

#[test]
fn test_grouping_renders_flat() {
    assert_eq!(
        rendered_where("SELECT * FROM t WHERE a=1 AND b=2 OR c=3"),
        "a:1 AND b:2 OR c:3"
    );
    assert_eq!(
        rendered_where("SELECT * FROM t WHERE a=1 OR b=2 AND c=3"),
        "a:1 OR b:2 AND c:3"
    );
}

#[test]
fn test_hand_built_tree() {
    let expr = Expression::group(
        BoolOp::Or,
        vec![
            Expression::compare(CompareOp::Eq, "status", text("open")),
            Expression::negate(Expression::compare(CompareOp::Lt, "age", text("18"))),
        ],
    );
    assert_eq!(render(&expr).as_deref(), Some("status:open OR NOT age:{* TO 18}"));
    assert_eq!(expr.to_string(), "status:open OR NOT age:{* TO 18}");
}

#[test]
fn test_presence_checks() {
    assert_eq!(render(&Expression::exists("f")), None);
    assert_eq!(render(&Expression::missing("f")), None);
    assert_eq!(Expression::exists("f").to_string(), "EXIST f");
    assert_eq!(Expression::missing("f").to_string(), "MISSING f");
    assert!(Expression::missing("f").is_presence_check());
}

// ============================================================================
// Source round trip
// ============================================================================

fn reparse(expr: &Expression) -> Expression {
    let input = format!("SELECT * FROM t WHERE {}", to_source(expr));
    parse(&input).unwrap().where_expr.unwrap()
}

#[test]
fn test_to_source() {
    let query = parse("SELECT * FROM t WHERE NOT a = 'x y' OR b >= 2.5 AND \"free\"").unwrap();
    assert_eq!(
        to_source(query.where_expr.as_ref().unwrap()),
        r#"NOT a = "x y" OR b >= 2.5 AND "free""#
    );
}

#[test]
fn test_reparse_is_stable() {
    let inputs = vec![
        "a=1",
        "a != 'open'",
        "a=1 AND b<2 AND c>=3",
        "a=1 OR b<=007 OR NOT c>3",
        "a=1 AND b=2 OR c=3",
        "a=1 OR b=2 AND c=3",
        r#""he said \"hi\"" AND x=1"#,
    ];

    for input in inputs {
        let original = parse(&format!("SELECT * FROM t WHERE {}", input))
            .unwrap()
            .where_expr
            .unwrap();
        assert_eq!(reparse(&original), original, "Failed for input: {}", input);
        assert_eq!(render(&reparse(&original)), render(&original));
    }
}

#[test]
fn test_to_source_presence() {
    assert_eq!(to_source(&Expression::exists("a.b")), "EXIST a.b");
}

#[test]
fn test_hand_built_tree_regroups_on_reparse() {
    let one = |name: &str| Expression::compare(CompareOp::Eq, name, text("1"));
    let expr = Expression::group(
        BoolOp::Or,
        vec![
            one("a"),
            Expression::group(BoolOp::And, vec![one("b"), one("c")]),
        ],
    );
    let expected = Expression::group(
        BoolOp::And,
        vec![
            Expression::group(BoolOp::Or, vec![one("a"), one("b")]),
            one("c"),
        ],
    );
    assert_eq!(reparse(&expr), expected);
}
