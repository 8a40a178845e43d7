//! Shared helpers for phase tests.

mod vm;

use std::sync::Arc;

use gaz_eval::{buffer_handler, EvalError};
use gazc::{emit_source, run_source, Problem};

pub use vm::execute;

/// Run a program and return what it printed.
pub fn run(source: &str) -> String {
    let print = buffer_handler();
    run_source(source, Arc::clone(&print)).unwrap();
    print.get_output()
}

/// Run a program that must fail. Returns the error and the output printed
/// before it.
pub fn run_failure(source: &str) -> (EvalError, String) {
    let print = buffer_handler();
    let err = run_source(source, Arc::clone(&print)).unwrap_err();
    (err, print.get_output())
}

pub fn emit(source: &str) -> String {
    emit_source(source).unwrap()
}

pub fn emit_failure(source: &str) -> Problem {
    emit_source(source).unwrap_err()
}

/// Join instruction lines the way the generator does.
pub fn lines(text: &[&str]) -> String {
    text.join("\n")
}

/// Interpret `source` and also compile it and execute the instructions.
/// Both must print the same thing.
pub fn assert_backends_agree(source: &str) -> String {
    let interpreted = run(source);
    let executed = execute(&emit(source));
    pretty_assertions::assert_eq!(interpreted, executed, "program: {source}");
    interpreted
}
