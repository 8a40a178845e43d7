use super::resolve_escape;

#[test]
fn known_escapes() {
    assert_eq!(resolve_escape('n'), '\n');
    assert_eq!(resolve_escape('t'), '\t');
    assert_eq!(resolve_escape('"'), '"');
    assert_eq!(resolve_escape('\\'), '\\');
}

#[test]
fn unknown_escapes_are_literal() {
    assert_eq!(resolve_escape('q'), 'q');
    assert_eq!(resolve_escape('r'), 'r');
    assert_eq!(resolve_escape('0'), '0');
}
