//! Tokens produced by the GazLang lexer.

use std::fmt;

use crate::Span;

/// Token kinds.
///
/// Literal-carrying kinds hold the lexer's raw value. `Variable` keeps its
/// `$` sigil because the name is used verbatim as the symbol table key.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Integer literal: `42`
    Int(i64),
    /// String literal with escapes already resolved: `"a\n"`
    Str(String),
    /// `true` / `false` (any letter case)
    Bool(bool),
    /// Variable identifier including the sigil: `$count`
    Variable(String),

    Echo,
    If,
    Else,

    Plus,
    Minus,
    Star,
    Slash,
    EqEq,
    NotEq,
    Bang,
    AndAnd,
    OrOr,
    Assign,

    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    Eof,
}

impl TokenKind {
    /// Upper-case kind name, as shown in `lex` output and syntax errors.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "INTEGER",
            TokenKind::Str(_) => "STRING",
            TokenKind::Bool(_) => "BOOLEAN",
            TokenKind::Variable(_) => "VAR_IDENTIFIER",
            TokenKind::Echo => "ECHO",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "MULTIPLY",
            TokenKind::Slash => "DIVIDE",
            TokenKind::EqEq => "EQUALS",
            TokenKind::NotEq => "NOT_EQUALS",
            TokenKind::Bang => "NOT",
            TokenKind::AndAnd => "AND",
            TokenKind::OrOr => "OR",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LEFT_PAREN",
            TokenKind::RParen => "RIGHT_PAREN",
            TokenKind::LBrace => "LEFT_BRACE",
            TokenKind::RBrace => "RIGHT_BRACE",
            TokenKind::Eof => "EOF",
        }
    }

    /// Source text for fixed tokens; `None` for literals and EOF.
    pub fn symbol(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Echo => "echo",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Bang => "!",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::Assign => "=",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Int(_)
            | TokenKind::Str(_)
            | TokenKind::Bool(_)
            | TokenKind::Variable(_)
            | TokenKind::Eof => return None,
        };
        Some(text)
    }

    /// Whether two kinds are the same variant, ignoring payloads.
    ///
    /// The parser matches expected tokens this way: `Int(0)` expects any integer.
    #[inline]
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Renders the raw value of the token (empty for EOF).
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(n) => write!(f, "{n}"),
            TokenKind::Str(s) | TokenKind::Variable(s) => f.write_str(s),
            TokenKind::Bool(b) => write!(f, "{b}"),
            TokenKind::Eof => Ok(()),
            other => f.write_str(other.symbol().unwrap_or_default()),
        }
    }
}

/// A token with its location in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Token with no meaningful location, for tests.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// `Token(KIND, value)`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, {})", self.kind.display_name(), self.kind)
    }
}
