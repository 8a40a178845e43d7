use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::assert_backends_agree;

#[test]
fn arithmetic_and_concatenation() {
    let out = assert_backends_agree(
        r#"
        $n = 6;
        echo $n * 7;
        echo "n is " + $n;
        echo $n + " apples";
        echo ($n - 10) / 3;
        "#,
    );
    assert_eq!(out, "42\nn is 6\n6 apples\n-1\n");
}

#[test]
fn short_circuit_results() {
    let out = assert_backends_agree(
        "echo 0 && 1; echo 2 && 3; echo 0 || 0; echo 0 || 5; echo false && (1/0 == 1);",
    );
    assert_eq!(out, "0\n1\n0\n1\n0\n");
}

#[test]
fn short_circuit_skips_side_effects() {
    let out = assert_backends_agree("$x = 1; 0 && ($x = 2); 1 || ($x = 3); echo $x;");
    assert_eq!(out, "1\n");
}

#[test]
fn branch_chains() {
    let out = assert_backends_agree(
        r#"
        $v = 2;
        if ($v == 1) { echo "one"; }
        else if ($v == 2) { echo "two"; if (!0) { echo "nested"; } }
        else { echo "many"; }
        if ($v != 2) { echo "skipped"; }
        echo "done";
        "#,
    );
    assert_eq!(out, "two\nnested\ndone\n");
}

#[test]
fn escaped_strings_survive_the_text_format() {
    let out = assert_backends_agree(r#"echo "tab\there \"quoted\" back\\slash";"#);
    assert_eq!(out, "tab\there \"quoted\" back\\slash\n");
}

// Integer operands only: the generator lowers `true`/`false` literals to
// `PUSH 1`/`PUSH 0`, so `true == 5` legitimately differs between back ends.
fn operand() -> impl Strategy<Value = String> {
    (0i64..100).prop_map(|n| n.to_string())
}

fn expression() -> impl Strategy<Value = String> {
    operand().prop_recursive(3, 8, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(vec!["+", "-", "*", "&&", "||", "==", "!="]),
                inner.clone()
            )
                .prop_map(|(l, op, r)| format!("({l} {op} {r})")),
            inner.prop_map(|e| format!("!{e}")),
        ]
    })
}

proptest! {
    #[test]
    fn generated_expressions_agree(expr in expression()) {
        assert_backends_agree(&format!("$r = {expr}; echo $r; echo {expr};"));
    }
}
