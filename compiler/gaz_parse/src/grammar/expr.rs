use gaz_ir::{Expr, ExprKind, TokenKind, UnaryOp, VarRef};
use gaz_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression, including assignment and equality.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;

        // Assignment is recognised after the fact: the first term must be a
        // bare variable (parentheses allowed) and the next token `=`.
        if self.cursor.check(&TokenKind::Assign) {
            if let Some(name) = left.as_variable() {
                let target = VarRef {
                    name: name.to_string(),
                    span: left.span,
                };
                self.cursor.advance()?;
                let value = self.parse_expr()?;
                let span = left.span.merge(value.span);
                trace!(target = %target.name, "assignment");
                return Ok(Expr::new(
                    ExprKind::Assign {
                        target,
                        value: Box::new(value),
                    },
                    span,
                ));
            }
        }

        while let Some(op) = self.match_additive_op() {
            self.cursor.advance()?;
            let right = self.parse_term()?;
            left = Expr::binary(left, op, right);
        }

        if let Some(op) = self.match_equality_op() {
            self.cursor.advance()?;
            let right = self.parse_expr()?;
            left = Expr::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;
        while let Some(op) = self.match_multiplicative_op() {
            self.cursor.advance()?;
            let right = self.parse_factor()?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_factor_inner())
    }

    fn parse_factor_inner(&mut self) -> Result<Expr, ParseError> {
        let span = self.cursor.current_span();
        let kind = match self.cursor.current_kind() {
            TokenKind::Int(value) => ExprKind::Int(*value),
            TokenKind::Str(value) => ExprKind::Str(value.clone()),
            TokenKind::Bool(value) => ExprKind::Bool(*value),
            TokenKind::Variable(name) => ExprKind::Variable(name.clone()),
            TokenKind::LParen => {
                self.cursor.advance()?;
                let mut inner = self.parse_expr()?;
                self.cursor.expect(&TokenKind::RParen, "`)`")?;
                // Parentheses leave no node behind; widen the span only.
                inner.span = span.merge(self.cursor.previous_span());
                return Ok(inner);
            }
            TokenKind::Bang => {
                self.cursor.advance()?;
                let operand = self.parse_factor()?;
                let span = span.merge(operand.span);
                return Ok(Expr::new(
                    ExprKind::Unary {
                        op: UnaryOp::Not,
                        operand: Box::new(operand),
                    },
                    span,
                ));
            }
            _ => return Err(ParseError::unexpected(self.cursor.current(), "an expression")),
        };
        self.cursor.advance()?;
        Ok(Expr::new(kind, span))
    }
}
