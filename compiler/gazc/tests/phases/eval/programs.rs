use pretty_assertions::assert_eq;

use crate::common::run;

#[test]
fn countdown_style_program() {
    let source = r#"
        $n = 3;
        $label = "n=";
        echo $label + $n;
        $n = $n - 1;
        echo $label + $n;
        if ($n == 2) { echo "two"; } else { echo "other"; }
    "#;
    assert_eq!(run(source), "n=3\nn=2\ntwo\n");
}

#[test]
fn booleans_print_as_digits() {
    assert_eq!(run("echo true; echo false; echo !0;"), "1\n0\n1\n");
}

#[test]
fn short_circuit_guards_division() {
    assert_eq!(run("echo false && (1/0 == 1);"), "0\n");
    assert_eq!(run("echo true || (1/0 == 1);"), "1\n");
}

#[test]
fn concatenation_either_side() {
    assert_eq!(run(r#"echo "Count: " + 42;"#), "Count: 42\n");
    assert_eq!(run(r#"echo 2022 + " is the year";"#), "2022 is the year\n");
    assert_eq!(run(r#"echo "flag: " + true;"#), "flag: 1\n");
}

#[test]
fn exactly_one_branch_runs() {
    let source = r#"
        if (0) { echo "A"; }
        else if (0) { echo "B"; }
        else if (1) { echo "C"; }
        else { echo "D"; }
    "#;
    assert_eq!(run(source), "C\n");
}

#[test]
fn assignment_is_an_expression() {
    assert_eq!(run("echo ($x = 5) + 1; echo $x;"), "6\n5\n");
}

#[test]
fn loose_equality_across_types() {
    assert_eq!(run(r#"echo 1 == "1";"#), "1\n");
    assert_eq!(run(r#"echo "10" == "1e1";"#), "1\n");
    assert_eq!(run(r#"echo "1.0" == 1;"#), "1\n");
    assert_eq!(run(r#"echo false == "0";"#), "1\n");
    assert_eq!(run(r#"if ("0") { echo "truthy"; }"#), "truthy\n");
    assert_eq!(run(r#"echo true == "yes";"#), "1\n");
    assert_eq!(run(r#"echo 0 != "";"#), "1\n");
}

#[test]
fn integer_division_truncates() {
    assert_eq!(run("echo 7 / 2; echo 0 - 7 / 2;"), "3\n-3\n");
}

#[test]
fn empty_program_prints_nothing() {
    assert_eq!(run("// nothing here\n"), "");
}
