//! Parse errors as diagnostics.

use gaz_diagnostic::{Diagnostic, ErrorCode};
use gaz_parse::ParseError;

use super::render_lex_error;

#[cold]
pub fn render_parse_error(err: &ParseError) -> Diagnostic {
    match err {
        ParseError::Lex(lex) => render_lex_error(lex),
        ParseError::Syntax {
            span,
            found,
            expected,
        } => Diagnostic::error(ErrorCode::E1001)
            .with_message(format!("invalid syntax near token: {found}"))
            .with_label(*span, format!("expected {expected}")),
    }
}
