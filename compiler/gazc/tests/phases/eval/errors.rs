use gaz_eval::EvalError;
use gaz_ir::Span;
use pretty_assertions::assert_eq;

use crate::common::run_failure;

#[test]
fn output_before_a_failure_is_kept() {
    let (err, printed) = run_failure("echo 1; echo $missing; echo 2;");
    assert_eq!(printed, "1\n");
    assert_eq!(
        err,
        EvalError::UndefinedVariable {
            name: "$missing".to_string(),
            span: Span::new(13, 21),
        }
    );
}

#[test]
fn string_operand_to_subtraction() {
    let (err, _) = run_failure(r#"$s = "x"; echo $s - 1;"#);
    assert_eq!(err.to_string(), "cannot perform subtraction on strings");
}

#[test]
fn division_by_zero_is_reported() {
    let (err, _) = run_failure("$z = 0; echo 10 / $z;");
    assert!(matches!(err, EvalError::DivisionByZero { .. }));
}

#[test]
fn syntax_error_prevents_any_output() {
    let (err, printed) = run_failure("echo 1; echo 2");
    assert!(matches!(err, EvalError::Parse(_)));
    assert_eq!(printed, "");
}

#[test]
fn untaken_branch_never_reads_its_variables() {
    let (err, printed) = run_failure("if (1) { echo 1; } else { echo $never; } echo $later;");
    assert_eq!(printed, "1\n");
    assert_eq!(err.to_string(), "undefined variable: $later");
}
