//! Tree-walking interpreter for GazLang.
//!
//! [`Interpreter`] owns a parser, parses the whole program, then hands the
//! tree to an [`Evaluator`]. The evaluator walks statements in order,
//! keeps every variable in one flat [`Environment`], and sends `echo`
//! output to a [`SharedPrintHandler`].
//!
//! Nothing here is shared between runs: each evaluator starts with an
//! empty environment.

mod environment;
mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use environment::Environment;
pub use errors::{EvalError, EvalResult};
pub use interpreter::{Evaluator, Interpreter, StmtValue};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::Value;
