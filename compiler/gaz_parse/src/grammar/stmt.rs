use gaz_ir::{Block, ElseBranch, IfStmt, Stmt, StmtKind, TokenKind};
use gaz_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_span();
        match self.cursor.current_kind() {
            TokenKind::Echo => {
                self.cursor.advance()?;
                let expr = self.parse_expr()?;
                self.cursor.expect(&TokenKind::Semicolon, "`;`")?;
                trace!("echo statement");
                Ok(Stmt::new(
                    StmtKind::Echo(expr),
                    start.merge(self.cursor.previous_span()),
                ))
            }
            TokenKind::If => {
                let if_stmt = self.parse_if()?;
                Ok(Stmt::new(
                    StmtKind::If(if_stmt),
                    start.merge(self.cursor.previous_span()),
                ))
            }
            _ => {
                let expr = self.parse_expr()?;
                self.cursor.expect(&TokenKind::Semicolon, "`;`")?;
                Ok(Stmt::new(
                    StmtKind::Expr(expr),
                    start.merge(self.cursor.previous_span()),
                ))
            }
        }
    }

    /// `if (cond) { ... }` with an optional `else if` chain or `else` block.
    fn parse_if(&mut self) -> Result<IfStmt, ParseError> {
        self.cursor.expect(&TokenKind::If, "`if`")?;
        self.cursor.expect(&TokenKind::LParen, "`(`")?;
        let condition = self.parse_expr()?;
        self.cursor.expect(&TokenKind::RParen, "`)`")?;
        let then_block = self.parse_block()?;

        let else_branch = if self.cursor.check(&TokenKind::Else) {
            self.cursor.advance()?;
            if self.cursor.check(&TokenKind::If) {
                trace!("else if");
                let nested = ensure_sufficient_stack(|| self.parse_if())?;
                Some(ElseBranch::ElseIf(Box::new(nested)))
            } else {
                Some(ElseBranch::Else(self.parse_block()?))
            }
        } else {
            None
        };

        Ok(IfStmt {
            condition,
            then_block,
            else_branch,
        })
    }

    fn parse_block(&mut self) -> Result<Block, ParseError> {
        let open = self.cursor.expect(&TokenKind::LBrace, "`{`")?;
        let mut block = Block::new(open.span);
        while !self.cursor.check(&TokenKind::RBrace) && !self.cursor.is_at_end() {
            let stmt = self.parse_statement()?;
            block.push(stmt);
        }
        self.cursor.expect(&TokenKind::RBrace, "`}`")?;
        block.span = open.span.merge(self.cursor.previous_span());
        Ok(block)
    }
}
