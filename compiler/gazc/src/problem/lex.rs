//! Lexer errors as diagnostics.

use gaz_diagnostic::{Diagnostic, ErrorCode};
use gaz_lexer::{LexError, LexErrorKind};

/// Render a `LexError` with its error code, label and a hint.
#[cold]
pub fn render_lex_error(err: &LexError) -> Diagnostic {
    let span = err.span;
    match &err.kind {
        LexErrorKind::UnterminatedString => Diagnostic::error(ErrorCode::E0001)
            .with_message("unterminated string literal")
            .with_label(span, "string not closed")
            .with_note("add a closing `\"`; a backslash before it escapes it"),

        LexErrorKind::InvalidCharacter(ch) => Diagnostic::error(ErrorCode::E0002)
            .with_message(format!("invalid character '{ch}'"))
            .with_label(span, "not valid here"),

        LexErrorKind::IntegerOverflow(digits) => Diagnostic::error(ErrorCode::E0003)
            .with_message(format!("integer literal {digits} is too large"))
            .with_label(span, "does not fit in 64 bits")
            .with_note(format!("the largest integer literal is {}", i64::MAX)),

        LexErrorKind::InvalidVariableName(text) => Diagnostic::error(ErrorCode::E0004)
            .with_message(format!("invalid variable name: {text}"))
            .with_label(span, "expected a letter or `_` after `$`"),

        LexErrorKind::UnknownIdentifier(word) => Diagnostic::error(ErrorCode::E0005)
            .with_message(format!("unknown identifier: {word}"))
            .with_label(span, "not a keyword")
            .with_note(format!("variables start with `$`: try `${word}`")),
    }
}
