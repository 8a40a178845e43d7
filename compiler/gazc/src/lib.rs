//! GazLang toolchain driver.
//!
//! The pipeline entry points here are what the `gaz` binary and the phase
//! tests call. Each one runs the front end from scratch over a source string:
//!
//! - [`lex_source`]: tokens, ending in `EOF`
//! - [`parse_source`]: the program tree
//! - [`run_source`]: parse, then evaluate, printing through a handler
//! - [`emit_source`]: parse, then lower to stack-machine text
//!
//! Failures from any phase convert into a [`Problem`], which renders as a
//! [`gaz_diagnostic::Diagnostic`].

pub mod commands;
pub mod problem;
mod tracing_setup;

use gaz_codegen::CodeGenerator;
use gaz_eval::{EvalError, Interpreter, SharedPrintHandler};
use gaz_ir::{Block, Token};
use gaz_lexer::{LexError, Lexer};
use gaz_parse::{ParseError, Parser};

pub use problem::Problem;
pub use tracing_setup::init_tracing;

/// Tokenize a whole source text.
pub fn lex_source(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Parse a whole source text into its top-level block.
pub fn parse_source(source: &str) -> Result<Block, ParseError> {
    gaz_parse::parse_source(source)
}

/// Interpret a program. `echo` output goes to `print`.
///
/// Lines printed before a runtime error stay printed.
pub fn run_source(source: &str, print: SharedPrintHandler) -> Result<(), EvalError> {
    let parser = Parser::new(Lexer::new(source))?;
    Interpreter::with_print_handler(parser, print).interpret()
}

/// Compile a program to newline-joined instruction text.
pub fn emit_source(source: &str) -> Result<String, Problem> {
    let program = parse_source(source)?;
    let text = CodeGenerator::new(&program).generate()?;
    Ok(text)
}
