//! Binary and unary operators.

use crate::TokenKind;

/// Binary operators.
///
/// `And`/`Or` short-circuit in both back ends; every other operator
/// evaluates its left operand, then its right.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    And,
    Or,
}

impl BinaryOp {
    /// Source-level symbol, for error messages and tree dumps.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// English name used in runtime type errors ("cannot perform division on strings").
    pub const fn description(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
            Self::Mul => "multiplication",
            Self::Div => "division",
            Self::Eq => "equality comparison",
            Self::NotEq => "inequality comparison",
            Self::And => "logical and",
            Self::Or => "logical or",
        }
    }

    /// Operator for a token, if it is one.
    pub fn from_token(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Star => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            TokenKind::EqEq => Some(Self::Eq),
            TokenKind::NotEq => Some(Self::NotEq),
            TokenKind::AndAnd => Some(Self::And),
            TokenKind::OrOr => Some(Self::Or),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_short_circuit(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

/// Unary operators. The language has only logical negation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
        }
    }
}
