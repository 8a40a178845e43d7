//! AST to instruction lowering.

use gaz_ir::{
    BinaryOp, Block, ElseBranch, Expr, ExprKind, IfStmt, Stmt, StmtKind, UnaryOp, Visitor,
};
use gaz_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::{CodegenContext, CodegenError, Instruction, Label, LabelKind};

/// Generates instructions for one program.
///
/// Every call to [`generate`](Self::generate) starts from a fresh
/// [`CodegenContext`], so repeated calls on the same tree produce identical
/// output.
pub struct CodeGenerator<'a> {
    program: &'a Block,
    ctx: CodegenContext,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(program: &'a Block) -> Self {
        CodeGenerator {
            program,
            ctx: CodegenContext::new(),
        }
    }

    /// Instruction text, one instruction per line, no trailing newline.
    pub fn generate(&mut self) -> Result<String, CodegenError> {
        let lines: Vec<String> = self
            .generate_instructions()?
            .iter()
            .map(ToString::to_string)
            .collect();
        Ok(lines.join("\n"))
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn generate_instructions(&mut self) -> Result<Vec<Instruction>, CodegenError> {
        self.ctx = CodegenContext::new();
        let program = self.program;
        self.visit_block(program)?;
        let ctx = std::mem::take(&mut self.ctx);
        debug!(
            instructions = ctx.instructions().len(),
            slots = ctx.slot_count(),
            "generated"
        );
        Ok(ctx.into_instructions())
    }

    fn gen_expr(&mut self, expr: &Expr) -> Result<(), CodegenError> {
        match &expr.kind {
            ExprKind::Int(n) => self.ctx.emit(Instruction::Push(*n)),
            ExprKind::Bool(b) => self.ctx.emit(Instruction::Push(i64::from(*b))),
            ExprKind::Str(s) => self.ctx.emit(Instruction::PushStr(s.clone())),
            ExprKind::Variable(name) => {
                let addr = self
                    .ctx
                    .slot(name)
                    .ok_or_else(|| CodegenError::UndefinedVariable {
                        name: name.clone(),
                        span: expr.span,
                    })?;
                self.ctx.emit(Instruction::Load(addr));
            }
            ExprKind::Assign { target, value } => {
                // The slot exists before the right side is lowered, so
                // `$x = $x` on first use loads the fresh slot.
                let addr = self.ctx.slot_or_allocate(&target.name);
                self.visit_expr(value)?;
                self.ctx.emit(Instruction::Store(addr));
                self.ctx.emit(Instruction::Load(addr));
            }
            ExprKind::Unary {
                op: UnaryOp::Not,
                operand,
            } => {
                self.visit_expr(operand)?;
                self.ctx.emit(Instruction::ToBool);
                self.ctx.emit(Instruction::Not);
            }
            ExprKind::Binary { op, left, right } if op.is_short_circuit() => {
                self.gen_short_circuit(*op, left, right)?;
            }
            ExprKind::Binary { op, left, right } => {
                self.visit_expr(left)?;
                self.visit_expr(right)?;
                self.ctx.emit(arithmetic_instruction(*op));
            }
        }
        Ok(())
    }

    /// `&&` / `||` as jumps. The duplicated left value is the result when
    /// the right side is skipped.
    ///
    /// ```text
    /// <left> TO_BOOL DUP JZ|JNZ SC_n POP <right> TO_BOOL JMP END_n
    /// LABEL SC_n
    /// LABEL END_n
    /// ```
    fn gen_short_circuit(
        &mut self,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
    ) -> Result<(), CodegenError> {
        let id = self.ctx.fresh_label_id();
        let (short, end, jump): (Label, Label, fn(Label) -> Instruction) = if op == BinaryOp::Or
        {
            (
                Label::new(LabelKind::ScOr, id),
                Label::new(LabelKind::EndOr, id),
                Instruction::Jnz,
            )
        } else {
            (
                Label::new(LabelKind::ScAnd, id),
                Label::new(LabelKind::EndAnd, id),
                Instruction::Jz,
            )
        };

        self.visit_expr(left)?;
        self.ctx.emit(Instruction::ToBool);
        self.ctx.emit(Instruction::Dup);
        self.ctx.emit(jump(short));
        self.ctx.emit(Instruction::Pop);
        self.visit_expr(right)?;
        self.ctx.emit(Instruction::ToBool);
        self.ctx.emit(Instruction::Jmp(end));
        self.ctx.emit(Instruction::Label(short));
        self.ctx.emit(Instruction::Label(end));
        Ok(())
    }

    /// ```text
    /// <cond> TO_BOOL JZ ELSE_n <then> JMP ENDIF_n
    /// LABEL ELSE_n <else-if | else>
    /// LABEL ENDIF_n
    /// ```
    fn gen_if(&mut self, if_stmt: &IfStmt) -> Result<(), CodegenError> {
        let id = self.ctx.fresh_label_id();
        let else_label = Label::new(LabelKind::Else, id);
        let end_label = Label::new(LabelKind::EndIf, id);

        self.visit_expr(&if_stmt.condition)?;
        self.ctx.emit(Instruction::ToBool);
        self.ctx.emit(Instruction::Jz(else_label));
        self.visit_block(&if_stmt.then_block)?;
        self.ctx.emit(Instruction::Jmp(end_label));
        self.ctx.emit(Instruction::Label(else_label));
        match &if_stmt.else_branch {
            Some(ElseBranch::ElseIf(nested)) => ensure_sufficient_stack(|| self.gen_if(nested))?,
            Some(ElseBranch::Else(block)) => {
                self.visit_block(block)?;
            }
            None => {}
        }
        self.ctx.emit(Instruction::Label(end_label));
        Ok(())
    }
}

/// Single-instruction form of a binary operator. `&&`/`||` map to the
/// eager `AND`/`OR` but never reach here from `gen_expr`.
fn arithmetic_instruction(op: BinaryOp) -> Instruction {
    match op {
        BinaryOp::Add => Instruction::AddOrConcat,
        BinaryOp::Sub => Instruction::Sub,
        BinaryOp::Mul => Instruction::Mul,
        BinaryOp::Div => Instruction::Div,
        BinaryOp::Eq => Instruction::Equals,
        BinaryOp::NotEq => Instruction::NotEquals,
        BinaryOp::And => Instruction::And,
        BinaryOp::Or => Instruction::Or,
    }
}

impl Visitor for CodeGenerator<'_> {
    type ExprOutput = ();
    type StmtOutput = ();
    type Error = CodegenError;

    fn visit_expr(&mut self, expr: &Expr) -> Result<(), CodegenError> {
        ensure_sufficient_stack(|| self.gen_expr(expr))
    }

    fn visit_stmt(&mut self, stmt: &Stmt) -> Result<(), CodegenError> {
        ensure_sufficient_stack(|| match &stmt.kind {
            StmtKind::Expr(expr) => {
                self.visit_expr(expr)?;
                self.ctx.emit(Instruction::Pop);
                Ok(())
            }
            StmtKind::Echo(expr) => {
                self.visit_expr(expr)?;
                self.ctx.emit(Instruction::Print);
                Ok(())
            }
            StmtKind::If(if_stmt) => self.gen_if(if_stmt),
        })
    }
}
