//! Interpreter phase tests: printed output and runtime failures.

mod errors;
mod programs;
