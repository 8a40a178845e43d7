use super::*;
use crate::ErrorCode;
use gaz_ir::Span;
use pretty_assertions::assert_eq;

const SOURCE: &str = "echo 1;\necho 2 # 3;\n";

fn invalid_char() -> Diagnostic {
    Diagnostic::error(ErrorCode::E0002)
        .with_message("invalid character '#'")
        .with_label(Span::new(15, 16), "not part of any token")
}

#[test]
fn plain_emitter_prints_location() {
    let mut output = Vec::new();
    {
        let mut emitter = PlainEmitter::new(&mut output, "prog.gaz", SOURCE);
        emitter.emit(&invalid_char());
        emitter.flush();
    }
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "prog.gaz:2:8: error[E0002]: invalid character '#'\n"
    );
}

#[test]
fn plain_emitter_without_span_prints_path_only() {
    let mut output = Vec::new();
    {
        let mut emitter = PlainEmitter::new(&mut output, "prog.gaz", SOURCE);
        emitter.emit(
            &Diagnostic::error(ErrorCode::E6003)
                .with_message("division by zero")
                .with_note("checked at runtime"),
        );
    }
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "prog.gaz: error[E6003]: division by zero\n  = note: checked at runtime\n"
    );
}

#[test]
fn emit_all_keeps_order() {
    let mut output = Vec::new();
    {
        let mut emitter = PlainEmitter::new(&mut output, "p", SOURCE);
        emitter.emit_all(&[
            Diagnostic::error(ErrorCode::E1001).with_message("first"),
            Diagnostic::error(ErrorCode::E6001).with_message("second"),
        ]);
    }
    let text = String::from_utf8(output).unwrap();
    let first = text.find("first").unwrap();
    let second = text.find("second").unwrap();
    assert!(first < second);
}

#[test]
fn report_emitter_shows_code_message_and_label() {
    let mut output = Vec::new();
    {
        let mut emitter = ReportEmitter::new(&mut output, SOURCE, ColorMode::Never, false);
        emitter.emit(&invalid_char().with_note("remove it"));
        emitter.flush();
    }
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("E0002"), "{text}");
    assert!(text.contains("invalid character '#'"), "{text}");
    assert!(text.contains("not part of any token"), "{text}");
    assert!(text.contains("echo 2 # 3;"), "{text}");
    assert!(text.contains("remove it"), "{text}");
    assert!(!text.contains("\x1b["), "{text}");
}

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}
