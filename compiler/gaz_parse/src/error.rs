//! Parse errors.

use gaz_ir::{Span, Token};
use gaz_lexer::LexError;

/// Why parsing stopped. Parsing never recovers: the first error ends it.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The lexer failed while the parser was reading ahead.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A token that no production accepts at this point.
    #[error("invalid syntax near token: {found}, expected {expected}")]
    Syntax {
        span: Span,
        /// `Token(KIND, value)` rendering of the offending token.
        found: String,
        expected: &'static str,
    },
}

impl ParseError {
    pub(crate) fn unexpected(token: &Token, expected: &'static str) -> Self {
        ParseError::Syntax {
            span: token.span,
            found: token.to_string(),
            expected,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(err) => err.span,
            ParseError::Syntax { span, .. } => *span,
        }
    }
}
