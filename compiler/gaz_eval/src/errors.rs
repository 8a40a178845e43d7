//! Runtime errors.

use gaz_ir::Span;
use gaz_parse::ParseError;

/// Result type for evaluation.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

/// Why evaluation stopped. The first error aborts the run; statements
/// already executed keep their effects (printed lines stay printed).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String, span: Span },

    /// Text operand to `-`, `*` or `/`. `op` is the operation's name.
    #[error("cannot perform {op} on strings")]
    TypeError { op: &'static str, span: Span },

    #[error("division by zero")]
    DivisionByZero { span: Span },

    #[error("integer overflow in {op}")]
    IntegerOverflow { op: &'static str, span: Span },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl EvalError {
    pub fn span(&self) -> Span {
        match self {
            EvalError::UndefinedVariable { span, .. }
            | EvalError::TypeError { span, .. }
            | EvalError::DivisionByZero { span }
            | EvalError::IntegerOverflow { span, .. } => *span,
            EvalError::Parse(err) => err.span(),
        }
    }
}
