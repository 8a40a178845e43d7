//! Syntax tree for GazLang programs.
//!
//! A program is one top-level [`Block`]. Statements are [`Stmt`]s and
//! everything that produces a value is an [`Expr`]. The variant sets are
//! closed; consumers match on them exhaustively.

mod operators;

use std::fmt;

use crate::Span;

pub use operators::{BinaryOp, UnaryOp};

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Binary node whose span covers both operands.
    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        let span = left.span.merge(right.span);
        Expr {
            kind: ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        }
    }

    /// The variable name if this expression is a bare variable reference.
    pub fn as_variable(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Variable(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Int(i64),
    Str(String),
    Bool(bool),
    /// Variable read; the name includes its `$` sigil.
    Variable(String),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `$name = value`; yields the assigned value.
    Assign {
        target: VarRef,
        value: Box<Expr>,
    },
}

/// Assignment target.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VarRef {
    pub name: String,
    pub span: Span,
}

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `expr;` - evaluated, result discarded.
    Expr(Expr),
    /// `echo expr;`
    Echo(Expr),
    If(IfStmt),
}

/// `if (cond) { ... }` with an optional `else` arm.
///
/// An `else if` chain nests: the `else` arm of one `IfStmt` holds the next.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_block: Block,
    pub else_branch: Option<ElseBranch>,
}

impl IfStmt {
    pub fn else_if(&self) -> Option<&IfStmt> {
        match &self.else_branch {
            Some(ElseBranch::ElseIf(nested)) => Some(nested),
            _ => None,
        }
    }

    pub fn else_block(&self) -> Option<&Block> {
        match &self.else_branch {
            Some(ElseBranch::Else(block)) => Some(block),
            _ => None,
        }
    }
}

/// The two mutually exclusive forms an `else` can take.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ElseBranch {
    ElseIf(Box<IfStmt>),
    Else(Block),
}

/// Ordered statement sequence: a `{ ... }` body or the whole program.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(span: Span) -> Self {
        Block {
            statements: Vec::new(),
            span,
        }
    }

    #[inline]
    pub fn push(&mut self, stmt: Stmt) {
        self.statements.push(stmt);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
