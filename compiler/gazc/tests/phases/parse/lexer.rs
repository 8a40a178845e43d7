use gaz_ir::{Span, TokenKind};
use gaz_lexer::LexErrorKind;
use gazc::lex_source;
use pretty_assertions::assert_eq;

fn rendered(source: &str) -> Vec<String> {
    lex_source(source)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn assignment_statement_tokens() {
    assert_eq!(
        rendered("$total = 40 + 2;"),
        vec![
            "Token(VAR_IDENTIFIER, $total)",
            "Token(ASSIGN, =)",
            "Token(INTEGER, 40)",
            "Token(PLUS, +)",
            "Token(INTEGER, 2)",
            "Token(SEMICOLON, ;)",
            "Token(EOF, )",
        ]
    );
}

#[test]
fn escapes_resolve_in_string_tokens() {
    let tokens = lex_source(r#""a\"b\n c""#).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Str("a\"b\n c".to_string()));
}

#[test]
fn stream_always_ends_in_eof_at_source_end() {
    let source = "echo 1; // trailing comment";
    let tokens = lex_source(source).unwrap();
    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::Eof);
    assert_eq!(last.span, Span::point(u32::try_from(source.len()).unwrap()));
}

#[test]
fn first_bad_character_stops_lexing() {
    let err = lex_source("echo 1;\necho @;").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidCharacter('@'));
    assert_eq!(err.span, Span::new(13, 14));
}
