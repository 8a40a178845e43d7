use gaz_ir::{ExprKind, StmtKind};
use gaz_parse::ParseError;
use gazc::parse_source;
use pretty_assertions::assert_eq;

#[test]
fn top_level_statements_form_one_block() {
    let program = parse_source("$a = 1;\necho $a;\nif ($a) { echo 2; }").unwrap();
    assert_eq!(program.len(), 3);
    assert!(matches!(program.statements[0].kind, StmtKind::Expr(_)));
    assert!(matches!(program.statements[1].kind, StmtKind::Echo(_)));
    assert!(matches!(program.statements[2].kind, StmtKind::If(_)));
}

#[test]
fn chained_assignment_nests_to_the_right() {
    let program = parse_source("$a = $b = 1;").unwrap();
    let StmtKind::Expr(expr) = &program.statements[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Assign { target, value } = &expr.kind else {
        panic!("expected assignment");
    };
    assert_eq!(target.name, "$a");
    assert!(matches!(value.kind, ExprKind::Assign { .. }));
}

#[test]
fn else_if_chain_is_nested() {
    let program =
        parse_source("if (0) { echo 1; } else if (0) { echo 2; } else { echo 3; }").unwrap();
    let StmtKind::If(first) = &program.statements[0].kind else {
        panic!("expected if");
    };
    let second = first.else_if().unwrap();
    assert!(second.else_block().is_some());
    assert!(first.else_block().is_none());
}

#[test]
fn missing_paren_reports_the_found_token() {
    let err = parse_source("if ($x { echo 1; }").unwrap_err();
    let ParseError::Syntax { found, .. } = &err else {
        panic!("expected syntax error, got {err:?}");
    };
    assert_eq!(found, "Token(LEFT_BRACE, {)");
}

#[test]
fn assignment_to_non_variable_is_rejected() {
    assert!(matches!(
        parse_source("1 = 2;"),
        Err(ParseError::Syntax { .. })
    ));
}
