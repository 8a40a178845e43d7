use gaz_codegen::CodegenError;
use gazc::Problem;
use pretty_assertions::assert_eq;

use crate::common::{emit, emit_failure, lines};

#[test]
fn if_label_is_taken_before_condition_labels() {
    let source = r#"
        $a = 1;
        if ($a && 0) { echo "x"; } else { echo $a; }
    "#;
    assert_eq!(
        emit(source),
        lines(&[
            "PUSH 1",
            "STORE 0",
            "LOAD 0",
            "POP",
            "LOAD 0",
            "TO_BOOL",
            "DUP",
            "JZ SC_AND_1",
            "POP",
            "PUSH 0",
            "TO_BOOL",
            "JMP END_AND_1",
            "LABEL SC_AND_1",
            "LABEL END_AND_1",
            "TO_BOOL",
            "JZ ELSE_0",
            "PUSH_STR \"x\"",
            "PRINT",
            "JMP ENDIF_0",
            "LABEL ELSE_0",
            "LOAD 0",
            "PRINT",
            "LABEL ENDIF_0",
        ])
    );
}

#[test]
fn output_has_no_trailing_newline() {
    let text = emit("echo 1;");
    assert_eq!(text, "PUSH 1\nPRINT");
}

#[test]
fn slots_follow_first_assignment_order() {
    let text = emit("$b = 1; $a = 2; $b = 3; echo $a;");
    assert!(text.contains("STORE 0\nLOAD 0\nPOP\nPUSH 2\nSTORE 1"));
    assert!(text.ends_with("LOAD 1\nPRINT"));
}

#[test]
fn assignment_in_untaken_branch_still_allocates() {
    // Slots follow program text, not control flow.
    let text = emit("if (0) { $x = 1; } echo $x;");
    assert!(text.ends_with("LOAD 0\nPRINT"));
}

#[test]
fn undefined_variable_is_a_codegen_problem() {
    let problem = emit_failure("echo $nope;");
    let Problem::Codegen(CodegenError::UndefinedVariable { name, .. }) = problem else {
        panic!("expected codegen problem, got {problem:?}");
    };
    assert_eq!(name, "$nope");
}

#[test]
fn emitting_twice_is_identical() {
    let source = "$i = 0; if ($i || 1) { echo $i + 1; } else if (!$i) { echo 2; }";
    assert_eq!(emit(source), emit(source));
}
