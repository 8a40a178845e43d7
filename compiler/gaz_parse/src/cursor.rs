//! One-token lookahead over a lexer.

use gaz_ir::{Span, Token, TokenKind};
use gaz_lexer::Lexer;

use crate::ParseError;

/// Holds the current token and pulls the next one from the lexer on
/// [`advance`](Cursor::advance).
pub(crate) struct Cursor<'a> {
    lexer: Lexer<'a>,
    current: Token,
    previous_span: Span,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(mut lexer: Lexer<'a>) -> Result<Self, ParseError> {
        let current = lexer.next_token()?;
        Ok(Cursor {
            lexer,
            current,
            previous_span: Span::DUMMY,
        })
    }

    #[inline]
    pub(crate) fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> &TokenKind {
        &self.current.kind
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.current.span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub(crate) fn previous_span(&self) -> Span {
        self.previous_span
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.current.is_eof()
    }

    /// Same token kind as `kind`, ignoring payloads.
    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current.kind.same_kind(kind)
    }

    /// Consume the current token and return it. At `Eof` this keeps
    /// returning `Eof`.
    pub(crate) fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.lexer.next_token()?;
        let consumed = std::mem::replace(&mut self.current, next);
        self.previous_span = consumed.span;
        Ok(consumed)
    }

    /// Consume a token of `kind` or fail naming what was wanted.
    pub(crate) fn expect(
        &mut self,
        kind: &TokenKind,
        expected: &'static str,
    ) -> Result<Token, ParseError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(ParseError::unexpected(&self.current, expected))
        }
    }
}
