use gaz_ir::{BinaryOp, TokenKind};

use crate::Parser;

impl Parser<'_> {
    /// `+`, `-` and `||` share the `expr` level.
    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::OrOr => Some(BinaryOp::Or),
            _ => None,
        }
    }

    /// `*`, `/` and `&&` share the `term` level.
    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::AndAnd => Some(BinaryOp::And),
            _ => None,
        }
    }

    pub(crate) fn match_equality_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            _ => None,
        }
    }
}
