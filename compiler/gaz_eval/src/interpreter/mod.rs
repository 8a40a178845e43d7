//! The evaluator proper and the parse-then-evaluate driver.

use gaz_ir::{BinaryOp, Block, ElseBranch, Expr, ExprKind, IfStmt, Stmt, StmtKind, UnaryOp, Visitor};
use gaz_parse::Parser;
use gaz_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::{
    evaluate_binary, stdout_handler, Environment, EvalError, EvalResult, SharedPrintHandler,
    Value,
};

/// What a statement produced.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StmtValue {
    /// Expression and `echo` statements yield their value.
    Value(Value),
    /// An `if` whose branch ran yields that branch's results.
    Branch(Vec<StmtValue>),
    /// An `if` where no branch ran.
    Empty,
}

/// Walks a parsed program.
pub struct Evaluator {
    env: Environment,
    print: SharedPrintHandler,
}

impl Evaluator {
    /// Evaluator with an empty environment.
    pub fn new(print: SharedPrintHandler) -> Self {
        Evaluator {
            env: Environment::new(),
            print,
        }
    }

    /// Run every statement of `block` in order.
    pub fn eval_block(&mut self, block: &Block) -> EvalResult<Vec<StmtValue>> {
        self.visit_block(block)
    }

    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
        self.visit_expr(expr)
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Int(n) => Ok(Value::Int(*n)),
            ExprKind::Str(s) => Ok(Value::Str(s.clone())),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Variable(name) => {
                self.env
                    .get(name)
                    .cloned()
                    .ok_or_else(|| EvalError::UndefinedVariable {
                        name: name.clone(),
                        span: expr.span,
                    })
            }
            ExprKind::Unary {
                op: UnaryOp::Not,
                operand,
            } => {
                let value = self.visit_expr(operand)?;
                Ok(Value::Bool(!value.is_truthy()))
            }
            ExprKind::Binary {
                op: BinaryOp::And,
                left,
                right,
            } => {
                if !self.visit_expr(left)?.is_truthy() {
                    return Ok(Value::Bool(false));
                }
                Ok(Value::Bool(self.visit_expr(right)?.is_truthy()))
            }
            ExprKind::Binary {
                op: BinaryOp::Or,
                left,
                right,
            } => {
                if self.visit_expr(left)?.is_truthy() {
                    return Ok(Value::Bool(true));
                }
                Ok(Value::Bool(self.visit_expr(right)?.is_truthy()))
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.visit_expr(left)?;
                let right = self.visit_expr(right)?;
                evaluate_binary(left, right, *op, expr.span)
            }
            ExprKind::Assign { target, value } => {
                let value = self.visit_expr(value)?;
                trace!(name = %target.name, value = %value, "assign");
                self.env.assign(&target.name, value.clone());
                Ok(value)
            }
        }
    }

    /// Exactly one branch of an `if` chain runs, or none.
    fn eval_if(&mut self, if_stmt: &IfStmt) -> EvalResult<StmtValue> {
        if self.visit_expr(&if_stmt.condition)?.is_truthy() {
            trace!("then branch");
            return Ok(StmtValue::Branch(self.visit_block(&if_stmt.then_block)?));
        }
        match &if_stmt.else_branch {
            Some(ElseBranch::ElseIf(nested)) => ensure_sufficient_stack(|| self.eval_if(nested)),
            Some(ElseBranch::Else(block)) => {
                trace!("else branch");
                Ok(StmtValue::Branch(self.visit_block(block)?))
            }
            None => Ok(StmtValue::Empty),
        }
    }
}

impl Visitor for Evaluator {
    type ExprOutput = Value;
    type StmtOutput = StmtValue;
    type Error = EvalError;

    fn visit_expr(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
    }

    fn visit_stmt(&mut self, stmt: &Stmt) -> EvalResult<StmtValue> {
        ensure_sufficient_stack(|| match &stmt.kind {
            StmtKind::Expr(expr) => self.visit_expr(expr).map(StmtValue::Value),
            StmtKind::Echo(expr) => {
                let value = self.visit_expr(expr)?;
                let text = value.to_display_string();
                trace!(output = %text, "echo");
                self.print.println(&text);
                Ok(StmtValue::Value(value))
            }
            StmtKind::If(if_stmt) => self.eval_if(if_stmt),
        })
    }
}

/// Parses a program through its parser, then evaluates it.
pub struct Interpreter<'a> {
    parser: Parser<'a>,
    evaluator: Evaluator,
}

impl<'a> Interpreter<'a> {
    /// Interpreter that prints to stdout.
    pub fn new(parser: Parser<'a>) -> Self {
        Self::with_print_handler(parser, stdout_handler())
    }

    pub fn with_print_handler(parser: Parser<'a>, print: SharedPrintHandler) -> Self {
        Interpreter {
            parser,
            evaluator: Evaluator::new(print),
        }
    }

    /// Parse and run the whole program. Output is the only effect.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn interpret(self) -> Result<(), EvalError> {
        let Interpreter {
            parser,
            mut evaluator,
        } = self;
        let program = parser.parse()?;
        let results = evaluator.eval_block(&program)?;
        debug!(statements = results.len(), "program finished");
        Ok(())
    }
}
