//! Runtime errors as diagnostics.

use gaz_diagnostic::{Diagnostic, ErrorCode};
use gaz_eval::EvalError;

use super::render_parse_error;

#[cold]
pub fn render_eval_error(err: &EvalError) -> Diagnostic {
    match err {
        EvalError::UndefinedVariable { name, span } => Diagnostic::error(ErrorCode::E6001)
            .with_message(format!("undefined variable: {name}"))
            .with_label(*span, "read before any assignment ran"),

        EvalError::TypeError { op, span } => Diagnostic::error(ErrorCode::E6002)
            .with_message(format!("cannot perform {op} on strings"))
            .with_label(*span, "an operand is a string")
            .with_note("only `+` accepts strings, and it concatenates"),

        EvalError::DivisionByZero { span } => Diagnostic::error(ErrorCode::E6003)
            .with_message("division by zero")
            .with_label(*span, "right operand is zero"),

        EvalError::IntegerOverflow { op, span } => Diagnostic::error(ErrorCode::E6004)
            .with_message(format!("integer overflow in {op}"))
            .with_label(*span, "result does not fit in 64 bits"),

        EvalError::Parse(parse) => render_parse_error(parse),
    }
}
