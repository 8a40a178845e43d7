//! Dispatch contract shared by the interpreter and the code generator.
//!
//! Each back end implements [`Visitor`] and matches exhaustively on
//! [`ExprKind`](crate::ExprKind) and [`StmtKind`](crate::StmtKind) inside
//! `visit_expr` / `visit_stmt`. Adding a node variant is therefore a compile
//! error in every back end until it is handled.
//!
//! The visitor may mutate its own state (symbol tables, label counters,
//! output buffers); the tree itself is only ever borrowed.

use crate::{Block, Expr, Stmt};

pub trait Visitor {
    /// Result of visiting an expression (a runtime value, or `()` for emitters).
    type ExprOutput;
    /// Result of visiting a statement.
    type StmtOutput;
    type Error;

    fn visit_expr(&mut self, expr: &Expr) -> Result<Self::ExprOutput, Self::Error>;

    fn visit_stmt(&mut self, stmt: &Stmt) -> Result<Self::StmtOutput, Self::Error>;

    /// Visit statements in order, stopping at the first error.
    fn visit_block(&mut self, block: &Block) -> Result<Vec<Self::StmtOutput>, Self::Error> {
        let mut outputs = Vec::with_capacity(block.statements.len());
        for stmt in &block.statements {
            outputs.push(self.visit_stmt(stmt)?);
        }
        Ok(outputs)
    }
}
