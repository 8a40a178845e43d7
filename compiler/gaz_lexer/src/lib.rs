//! Lexer for GazLang.
//!
//! [`Lexer`] turns source text into [`Token`]s on demand. Call
//! [`Lexer::next_token`] until it returns [`TokenKind::Eof`]; further calls
//! keep returning `Eof`. To restart, build a new lexer over the same text.
//!
//! ```text
//! $total = 3 + 4; // comment
//! echo "sum: " + $total;
//! ```
//!
//! Whitespace and `//` line comments are skipped. Operators use longest
//! match (`!=` before `!`, `==` before `=`); `&&` and `||` have no
//! single-character forms.

mod cursor;
mod escape;
mod keywords;
mod lex_error;

use cursor::Cursor;
use gaz_ir::{Span, Token, TokenKind};

pub use lex_error::{LexError, LexErrorKind};

/// Whitespace per the C `isspace` class: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// On-demand tokenizer over one source text.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    /// Set once the iterator has yielded `Eof` or an error.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            exhausted: false,
        }
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            let start = self.cursor.pos();
            let Some(c) = self.cursor.current() else {
                return Ok(Token::new(TokenKind::Eof, self.span_from(start)));
            };

            if is_space(c) {
                self.cursor.eat_while(is_space);
                continue;
            }

            if c == '/' && self.cursor.peek() == Some('/') {
                self.cursor.skip_line();
                continue;
            }

            return match c {
                '0'..='9' => self.integer(start),
                '"' => self.string(start),
                '$' => self.variable(start),
                c if c.is_ascii_alphabetic() => self.keyword(start),
                _ => self.operator(start, c),
            };
        }
    }

    /// Collect every token up to and including `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn span_from(&self, start: usize) -> Span {
        Span::from_range_saturating(start..self.cursor.pos())
    }

    fn integer(&mut self, start: usize) -> Result<Token, LexError> {
        let digits = self.cursor.eat_while(|c| c.is_ascii_digit());
        let span = self.span_from(start);
        match digits.parse::<i64>() {
            Ok(value) => Ok(Token::new(TokenKind::Int(value), span)),
            Err(_) => Err(LexError::new(
                LexErrorKind::IntegerOverflow(digits.to_string()),
                span,
            )),
        }
    }

    fn string(&mut self, start: usize) -> Result<Token, LexError> {
        // opening quote
        self.cursor.advance();

        let mut value = String::new();
        loop {
            match self.cursor.current() {
                None => {
                    return Err(LexError::new(
                        LexErrorKind::UnterminatedString,
                        self.span_from(start),
                    ));
                }
                Some('"') => {
                    self.cursor.advance();
                    return Ok(Token::new(TokenKind::Str(value), self.span_from(start)));
                }
                Some('\\') => {
                    self.cursor.advance();
                    // A trailing backslash leaves the string open; the next
                    // iteration reports it as unterminated.
                    if let Some(escaped) = self.cursor.current() {
                        value.push(escape::resolve_escape(escaped));
                        self.cursor.advance();
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.cursor.advance();
                }
            }
        }
    }

    fn variable(&mut self, start: usize) -> Result<Token, LexError> {
        // `$`
        self.cursor.advance();

        match self.cursor.current() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => {
                return Err(LexError::new(
                    LexErrorKind::InvalidVariableName("$".to_string()),
                    self.span_from(start),
                ));
            }
        }

        self.cursor.eat_while(is_word_char);
        let name = self.cursor.source()[start..self.cursor.pos()].to_string();
        Ok(Token::new(TokenKind::Variable(name), self.span_from(start)))
    }

    fn keyword(&mut self, start: usize) -> Result<Token, LexError> {
        let word = self.cursor.eat_while(is_word_char);
        let span = self.span_from(start);
        match keywords::lookup(word) {
            Some(kind) => Ok(Token::new(kind, span)),
            None => Err(LexError::new(
                LexErrorKind::UnknownIdentifier(word.to_string()),
                span,
            )),
        }
    }

    fn operator(&mut self, start: usize, c: char) -> Result<Token, LexError> {
        let next = self.cursor.peek();
        let (kind, width) = match (c, next) {
            ('+', _) => (TokenKind::Plus, 1),
            ('-', _) => (TokenKind::Minus, 1),
            ('*', _) => (TokenKind::Star, 1),
            ('/', _) => (TokenKind::Slash, 1),
            ('!', Some('=')) => (TokenKind::NotEq, 2),
            ('!', _) => (TokenKind::Bang, 1),
            ('&', Some('&')) => (TokenKind::AndAnd, 2),
            ('|', Some('|')) => (TokenKind::OrOr, 2),
            ('=', Some('=')) => (TokenKind::EqEq, 2),
            ('=', _) => (TokenKind::Assign, 1),
            (';', _) => (TokenKind::Semicolon, 1),
            ('(', _) => (TokenKind::LParen, 1),
            (')', _) => (TokenKind::RParen, 1),
            ('{', _) => (TokenKind::LBrace, 1),
            ('}', _) => (TokenKind::RBrace, 1),
            _ => {
                self.cursor.advance();
                return Err(LexError::new(
                    LexErrorKind::InvalidCharacter(c),
                    self.span_from(start),
                ));
            }
        };

        for _ in 0..width {
            self.cursor.advance();
        }
        Ok(Token::new(kind, self.span_from(start)))
    }
}

/// Yields tokens through the first `Eof` (inclusive) or the first error.
impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.next_token();
        if matches!(&result, Ok(token) if token.is_eof()) || result.is_err() {
            self.exhausted = true;
        }
        Some(result)
    }
}
