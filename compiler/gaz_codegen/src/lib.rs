//! Stack-machine code generation for GazLang.
//!
//! Lowers a parsed program into a flat list of [`Instruction`]s for an
//! external stack machine. The text form (one instruction per line, joined
//! with `\n`) is a stable wire format:
//!
//! ```text
//! PUSH 2            LOAD 0            LABEL ELSE_0
//! PUSH_STR "a\n"    STORE 0           JMP ENDIF_0
//! ADD_OR_CONCAT     TO_BOOL           PRINT
//! ```
//!
//! # Architecture
//!
//! ```text
//! Block (AST)
//!      ↓
//! CodeGenerator    (Visitor: post-order walk, short-circuit lowering)
//!      ↓
//! CodegenContext   (slot table, label counter, instruction buffer)
//!      ↓
//! Vec<Instruction> → String
//! ```

mod context;
mod generator;
mod instruction;

pub use context::CodegenContext;
pub use generator::CodeGenerator;
pub use instruction::{escape_string, Address, Instruction, Label, LabelKind};

use gaz_ir::Span;

/// A code generation error. The first one ends generation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CodegenError {
    /// A variable read with no slot: nothing assigned it earlier in the
    /// program text.
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String, span: Span },
}

impl CodegenError {
    pub fn span(&self) -> Span {
        match self {
            CodegenError::UndefinedVariable { span, .. } => *span,
        }
    }
}
