//! Lexer error types.

use gaz_ir::Span;

/// A lexical error and where it happened.
///
/// The span covers the offending text: the bad character, the whole
/// unterminated string from its opening quote, or the rejected word.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at position {pos}", pos = .span.start)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    #[error("unterminated string literal")]
    UnterminatedString,
    /// `$` not followed by a letter or underscore. Holds the text read so far.
    #[error("invalid variable name: {0}")]
    InvalidVariableName(String),
    /// A bare word that is not a keyword.
    #[error("unknown identifier: {0}")]
    UnknownIdentifier(String),
    /// Digit run that does not fit in a signed 64-bit integer.
    #[error("integer literal {0} is too large")]
    IntegerOverflow(String),
}

impl LexError {
    #[inline]
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { span, kind }
    }
}
