//! GazLang IR - tokens, spans and the syntax tree.
//!
//! This crate holds the data shared by every stage of the pipeline:
//! - [`Span`] byte ranges into the source text
//! - [`Token`] / [`TokenKind`] produced by the lexer
//! - the AST ([`Block`], [`Stmt`], [`Expr`]) built by the parser
//! - the [`Visitor`] contract both back ends implement
//!
//! # Ownership
//!
//! The tree is built once per program and is read-only afterwards. Each
//! node owns its children through `Box`/`Vec`; there are no back
//! references and no sharing between passes.

pub mod ast;
mod span;
mod token;
pub mod visitor;

pub use ast::{BinaryOp, Block, ElseBranch, Expr, ExprKind, IfStmt, Stmt, StmtKind, UnaryOp, VarRef};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind};
pub use visitor::Visitor;
