//! Pipeline failures and their rendering.
//!
//! Each phase keeps its own error type. [`Problem`] gathers them at the
//! driver level so a caller handles one type, and every variant renders to a
//! [`Diagnostic`] carrying a phase-prefixed [`gaz_diagnostic::ErrorCode`].
//!
//! A lex failure reported through the parser, or a parse failure reported
//! through the interpreter, renders as the phase that actually failed.

mod codegen;
mod eval;
mod lex;
mod parse;

pub use codegen::render_codegen_error;
pub use eval::render_eval_error;
pub use lex::render_lex_error;
pub use parse::render_parse_error;

use gaz_codegen::CodegenError;
use gaz_diagnostic::Diagnostic;
use gaz_eval::EvalError;
use gaz_ir::Span;
use gaz_lexer::LexError;
use gaz_parse::ParseError;

/// Any failure the driver can report.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Problem {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

impl Problem {
    pub fn span(&self) -> Span {
        match self {
            Problem::Lex(err) => err.span,
            Problem::Parse(err) => err.span(),
            Problem::Eval(err) => err.span(),
            Problem::Codegen(err) => err.span(),
        }
    }

    /// Convert this problem into a diagnostic.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Problem::Lex(err) => render_lex_error(err),
            Problem::Parse(err) => render_parse_error(err),
            Problem::Eval(err) => render_eval_error(err),
            Problem::Codegen(err) => render_codegen_error(err),
        }
    }
}
