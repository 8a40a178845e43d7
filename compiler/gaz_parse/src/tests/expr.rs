use gaz_ir::{ExprKind, Span, StmtKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{expr_sexpr, parse, single};

#[test]
fn literals() {
    assert_eq!(expr_sexpr("42;"), "42");
    assert_eq!(expr_sexpr("\"hi\";"), "\"hi\"");
    assert_eq!(expr_sexpr("true;"), "true");
    assert_eq!(expr_sexpr("$x;"), "$x");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(expr_sexpr("1 + 2 * 3;"), "(+ 1 (* 2 3))");
    assert_eq!(expr_sexpr("1 * 2 + 3;"), "(+ (* 1 2) 3)");
}

#[test]
fn same_level_is_left_associative() {
    assert_eq!(expr_sexpr("10 - 4 - 3;"), "(- (- 10 4) 3)");
    assert_eq!(expr_sexpr("8 / 2 / 2;"), "(/ (/ 8 2) 2)");
}

#[test]
fn and_binds_like_multiplication() {
    assert_eq!(expr_sexpr("1 + 2 && 3;"), "(+ 1 (&& 2 3))");
    assert_eq!(expr_sexpr("1 && 2 * 3;"), "(* (&& 1 2) 3)");
}

#[test]
fn or_binds_like_addition() {
    assert_eq!(expr_sexpr("1 || 2 + 3;"), "(+ (|| 1 2) 3)");
    assert_eq!(expr_sexpr("true || false && true;"), "(|| true (&& false true))");
}

#[test]
fn equality_is_lowest_and_right_recursive() {
    assert_eq!(expr_sexpr("1 + 2 == 3;"), "(== (+ 1 2) 3)");
    assert_eq!(expr_sexpr("1 == 2 + 3;"), "(== 1 (+ 2 3))");
    assert_eq!(expr_sexpr("1 == 2 == 3;"), "(== 1 (== 2 3))");
    assert_eq!(expr_sexpr("1 != 2 == 0;"), "(!= 1 (== 2 0))");
    assert_eq!(expr_sexpr("$a || $b == 1;"), "(== (|| $a $b) 1)");
}

#[test]
fn parentheses_group() {
    assert_eq!(expr_sexpr("(1 + 2) * 3;"), "(* (+ 1 2) 3)");
    assert_eq!(expr_sexpr("((((7))));"), "7");
}

#[test]
fn not_applies_to_a_factor() {
    assert_eq!(expr_sexpr("!true;"), "(! true)");
    assert_eq!(expr_sexpr("!!$x;"), "(! (! $x))");
    assert_eq!(expr_sexpr("!$a && $b;"), "(&& (! $a) $b)");
    assert_eq!(expr_sexpr("!($a && $b);"), "(! (&& $a $b))");
}

#[test]
fn assignment() {
    assert_eq!(expr_sexpr("$a = 1 + 2;"), "(= $a (+ 1 2))");
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(expr_sexpr("$a = $b = 1;"), "(= $a (= $b 1))");
}

#[test]
fn assignment_value_includes_equality() {
    assert_eq!(expr_sexpr("$a = 1 == 1;"), "(= $a (== 1 1))");
}

#[test]
fn parenthesized_variable_is_assignable() {
    assert_eq!(expr_sexpr("($a) = 5;"), "(= $a 5)");
}

#[test]
fn binary_span_covers_operands() {
    let stmt = single("  12 + $abc;");
    let StmtKind::Expr(expr) = stmt.kind else {
        panic!("expected expression statement");
    };
    assert_eq!(expr.span, Span::new(2, 11));
    assert_eq!(stmt.span, Span::new(2, 12));
}

#[test]
fn parenthesized_span_includes_parens() {
    let stmt = single("(1);");
    let StmtKind::Expr(expr) = stmt.kind else {
        panic!("expected expression statement");
    };
    assert_eq!(expr.kind, ExprKind::Int(1));
    assert_eq!(expr.span, Span::new(0, 3));
}

#[test]
fn deeply_nested_parentheses() {
    let depth = 20_000;
    let source = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse(&source).len(), 1);
}

proptest! {
    #[test]
    fn additive_chains_associate_left(values in proptest::collection::vec(0i64..1000, 2..8)) {
        let source = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" - ");
        let mut expected = values[0].to_string();
        for v in &values[1..] {
            expected = format!("(- {expected} {v})");
        }
        prop_assert_eq!(expr_sexpr(&format!("{source};")), expected);
    }
}
