//! Parser tests.
//!
//! Trees are compared through a compact s-expression rendering so the
//! assertions read like the grammar and ignore spans.

mod expr;

use gaz_ir::{Block, ElseBranch, Expr, ExprKind, IfStmt, Stmt, StmtKind};

use crate::{parse_source, ParseError};

fn parse(source: &str) -> Block {
    parse_source(source).unwrap()
}

fn parse_err(source: &str) -> ParseError {
    parse_source(source).unwrap_err()
}

/// The only statement of a one-statement program.
fn single(source: &str) -> Stmt {
    let mut program = parse(source);
    assert_eq!(program.len(), 1, "expected one statement in {source:?}");
    program.statements.pop().unwrap()
}

/// Expression of a single `expr;` statement, rendered.
fn expr_sexpr(source: &str) -> String {
    match single(source).kind {
        StmtKind::Expr(expr) => sexpr(&expr),
        other => panic!("expected expression statement, got {other:?}"),
    }
}

fn sexpr(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Int(n) => n.to_string(),
        ExprKind::Str(s) => format!("{s:?}"),
        ExprKind::Bool(b) => b.to_string(),
        ExprKind::Variable(name) => name.clone(),
        ExprKind::Unary { op, operand } => format!("({} {})", op.as_symbol(), sexpr(operand)),
        ExprKind::Binary { op, left, right } => {
            format!("({} {} {})", op.as_symbol(), sexpr(left), sexpr(right))
        }
        ExprKind::Assign { target, value } => format!("(= {} {})", target.name, sexpr(value)),
    }
}

fn stmt_sexpr(stmt: &Stmt) -> String {
    match &stmt.kind {
        StmtKind::Expr(expr) => format!("{};", sexpr(expr)),
        StmtKind::Echo(expr) => format!("echo {};", sexpr(expr)),
        StmtKind::If(if_stmt) => if_sexpr(if_stmt),
    }
}

fn block_sexpr(block: &Block) -> String {
    let body: Vec<String> = block.statements.iter().map(stmt_sexpr).collect();
    format!("{{{}}}", body.join(" "))
}

fn if_sexpr(if_stmt: &IfStmt) -> String {
    let mut out = format!(
        "if {} {}",
        sexpr(&if_stmt.condition),
        block_sexpr(&if_stmt.then_block)
    );
    match &if_stmt.else_branch {
        Some(ElseBranch::ElseIf(nested)) => {
            out.push_str(" else ");
            out.push_str(&if_sexpr(nested));
        }
        Some(ElseBranch::Else(block)) => {
            out.push_str(" else ");
            out.push_str(&block_sexpr(block));
        }
        None => {}
    }
    out
}
