//! Recursive descent parser for GazLang.
//!
//! [`Parser`] pulls tokens from a [`Lexer`] one at a time and keeps exactly
//! one token of lookahead. [`Parser::parse`] returns the whole program as a
//! single top-level [`Block`].
//!
//! ```text
//! program   := statement* EOF
//! statement := echo_stmt | if_stmt | expr ';'
//! echo_stmt := 'echo' expr ';'
//! if_stmt   := 'if' '(' expr ')' block ('else' (if_stmt | block))?
//! block     := '{' statement* '}'
//! expr      := term (('+'|'-'|'||') term)* ['=' expr] [('=='|'!=') expr]
//! term      := factor (('*'|'/'|'&&') factor)*
//! factor    := INTEGER | STRING | BOOLEAN | VAR_IDENTIFIER
//!            | '(' expr ')' | '!' factor
//! ```
//!
//! `&&` binds like `*` and `||` binds like `+`. Equality is right-recursive
//! over a whole `expr`, so it sits below every other binary operator and
//! `a == b == c` groups as `a == (b == c)`.

mod cursor;
mod error;
mod grammar;

use cursor::Cursor;
use gaz_ir::{Block, Span};
use gaz_lexer::Lexer;
use tracing::debug;

pub use error::ParseError;

/// Parser state: the token cursor and nothing else. The tree is returned,
/// not stored.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a parser and read the first token.
    pub fn new(lexer: Lexer<'a>) -> Result<Self, ParseError> {
        Ok(Parser {
            cursor: Cursor::new(lexer)?,
        })
    }

    /// Parse the whole program.
    pub fn parse(mut self) -> Result<Block, ParseError> {
        let mut program = Block::default();
        while !self.cursor.is_at_end() {
            let stmt = self.parse_statement()?;
            program.push(stmt);
        }
        // The program spans the whole text, leading trivia included.
        program.span = Span::new(0, self.cursor.current_span().end);
        debug!(statements = program.len(), "parsed program");
        Ok(program)
    }
}

/// Parse a complete source text.
pub fn parse_source(source: &str) -> Result<Block, ParseError> {
    Parser::new(Lexer::new(source))?.parse()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
